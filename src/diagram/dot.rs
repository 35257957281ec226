// Copyright (c) SocialNet Team
// SPDX-License-Identifier: Apache-2.0

use crate::registry::SchemaRegistry;

/// Render the registry as Graphviz DOT.
///
/// Entities become HTML-table nodes, one row per column with its declared
/// constraints; relationships become labeled edges, the label naming the
/// referencing column so parallel foreign keys into the same target stay
/// told apart. Output follows declaration order, so an unchanged registry
/// always produces byte-identical DOT.
pub fn to_dot(registry: &SchemaRegistry) -> String {
    let mut out = String::new();
    out.push_str("digraph schema {\n");
    out.push_str("    rankdir=LR;\n");
    out.push_str("    node [shape=plain fontname=\"Helvetica\"];\n");
    out.push_str("    edge [fontname=\"Helvetica\" fontsize=10 arrowhead=crow];\n");

    for entity in registry.entities() {
        let mut label = format!(
            "<table border=\"0\" cellborder=\"1\" cellspacing=\"0\"><tr><td bgcolor=\"#dce6f1\"><b>{}</b></td></tr>",
            escape(entity.name)
        );
        for column in &entity.columns {
            let mut markers = String::new();
            if column.primary_key {
                markers.push_str(" [pk]");
            }
            if column.unique {
                markers.push_str(" [unique]");
            }
            if column.nullable {
                markers.push_str(" [null]");
            }
            label.push_str(&format!(
                "<tr><td align=\"left\">{} {}{}</td></tr>",
                escape(column.name),
                escape(&column.column_type.to_string()),
                markers
            ));
        }
        label.push_str("</table>");
        out.push_str(&format!("    {} [label=<{}>];\n", entity.name, label));
    }

    for rel in registry.relationships() {
        out.push_str(&format!(
            "    {} -> {} [label=\"{}\"];\n",
            rel.source, rel.target, rel.source_column
        ));
    }

    out.push_str("}\n");
    out
}

// Minimal escaping for HTML-like labels
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::SchemaRegistry;

    #[test]
    fn dot_output_is_deterministic() {
        let registry = SchemaRegistry::social_media();
        assert_eq!(to_dot(&registry), to_dot(&registry));
    }

    #[test]
    fn empty_registry_yields_a_valid_empty_graph() {
        let dot = to_dot(&SchemaRegistry::new());
        assert!(dot.starts_with("digraph schema {"));
        assert!(dot.trim_end().ends_with('}'));
        assert!(!dot.contains("label=<"));
    }

    #[test]
    fn every_entity_becomes_a_node() {
        let registry = SchemaRegistry::social_media();
        let dot = to_dot(&registry);
        for entity in registry.entities() {
            assert!(
                dot.contains(&format!("    {} [label=<", entity.name)),
                "missing node for {}",
                entity.name
            );
        }
    }

    #[test]
    fn parallel_edges_are_labeled_by_column() {
        let dot = to_dot(&SchemaRegistry::social_media());
        assert!(dot.contains("followers -> users [label=\"user_id\"];"));
        assert!(dot.contains("followers -> users [label=\"follower_id\"];"));
        assert!(dot.contains("messages -> users [label=\"sender_id\"];"));
        assert!(dot.contains("messages -> users [label=\"receiver_id\"];"));
    }

    #[test]
    fn constraint_markers_show_up_in_labels() {
        let dot = to_dot(&SchemaRegistry::social_media());
        assert!(dot.contains("id integer [pk]"));
        assert!(dot.contains("username varchar(100) [unique]"));
        assert!(dot.contains("bio varchar(350) [null]"));
    }
}
