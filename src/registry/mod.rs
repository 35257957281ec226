// Copyright (c) SocialNet Team
// SPDX-License-Identifier: Apache-2.0

mod social;

use serde::Serialize;
use thiserror::Error;

/// Column type as declared to the database engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColumnType {
    Integer,
    VarChar(u32),
    Text,
    Timestamp,
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnType::Integer => write!(f, "integer"),
            ColumnType::VarChar(len) => write!(f, "varchar({})", len),
            ColumnType::Text => write!(f, "text"),
            ColumnType::Timestamp => write!(f, "timestamp"),
        }
    }
}

/// A single column declaration.
///
/// Columns start out nullable, matching the database default; `not_null`,
/// `unique` and the `primary_key` constructor tighten them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDef {
    pub name: &'static str,
    pub column_type: ColumnType,
    pub nullable: bool,
    pub unique: bool,
    pub primary_key: bool,
}

impl ColumnDef {
    fn new(name: &'static str, column_type: ColumnType) -> Self {
        Self {
            name,
            column_type,
            nullable: true,
            unique: false,
            primary_key: false,
        }
    }

    /// Synthetic auto-incrementing identifier column.
    pub fn primary_key(name: &'static str) -> Self {
        Self {
            name,
            column_type: ColumnType::Integer,
            nullable: false,
            unique: false,
            primary_key: true,
        }
    }

    pub fn integer(name: &'static str) -> Self {
        Self::new(name, ColumnType::Integer)
    }

    pub fn varchar(name: &'static str, len: u32) -> Self {
        Self::new(name, ColumnType::VarChar(len))
    }

    pub fn text(name: &'static str) -> Self {
        Self::new(name, ColumnType::Text)
    }

    pub fn timestamp(name: &'static str) -> Self {
        Self::new(name, ColumnType::Timestamp)
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Declared maximum character length, where the type carries one.
    pub fn max_length(&self) -> Option<u32> {
        match self.column_type {
            ColumnType::VarChar(len) => Some(len),
            _ => None,
        }
    }
}

/// One entity (table) declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityDef {
    pub name: &'static str,
    pub columns: Vec<ColumnDef>,
}

impl EntityDef {
    pub fn new(name: &'static str, columns: Vec<ColumnDef>) -> Self {
        Self { name, columns }
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn primary_key(&self) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.primary_key)
    }

    /// Columns carrying a uniqueness constraint, primary key excluded.
    pub fn unique_columns(&self) -> impl Iterator<Item = &ColumnDef> {
        self.columns.iter().filter(|c| c.unique)
    }
}

/// How many source rows may point at one target row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Cardinality {
    ManyToOne,
    OneToOne,
}

/// Referential action declared on a foreign key. The schema declares none,
/// so dependent rows are never touched when their target goes away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReferentialAction {
    NoAction,
    Restrict,
    Cascade,
    SetNull,
}

/// A foreign-key relationship, one row per referencing column.
///
/// Relationships are keyed by `(source, source_column)`: an entity with two
/// foreign keys into the same target contributes two rows, disambiguated by
/// the column used for the join, never collapsed into one edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationshipDef {
    pub source: &'static str,
    pub source_column: &'static str,
    pub target: &'static str,
    pub target_column: &'static str,
    pub cardinality: Cardinality,
    pub on_delete: ReferentialAction,
}

impl RelationshipDef {
    /// The common shape: a foreign key column referencing the target's id.
    pub fn many_to_one(
        source: &'static str,
        source_column: &'static str,
        target: &'static str,
    ) -> Self {
        Self {
            source,
            source_column,
            target,
            target_column: "id",
            cardinality: Cardinality::ManyToOne,
            on_delete: ReferentialAction::NoAction,
        }
    }
}

/// Error raised when the registry's declarations do not hang together.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("entity `{entity}` is declared more than once")]
    DuplicateEntity { entity: &'static str },

    #[error("entity `{entity}` declares column `{column}` more than once")]
    DuplicateColumn {
        entity: &'static str,
        column: &'static str,
    },

    #[error("entity `{entity}` has no primary key column")]
    MissingPrimaryKey { entity: &'static str },

    #[error("relationship `{src}.{source_column}` names unknown source entity `{src}`")]
    UnknownSourceEntity {
        src: &'static str,
        source_column: &'static str,
    },

    #[error("relationship `{src}.{source_column}` names a column not declared by `{src}`")]
    UnknownSourceColumn {
        src: &'static str,
        source_column: &'static str,
    },

    #[error("relationship `{src}.{source_column}` references unknown entity `{target}`")]
    UnknownTargetEntity {
        src: &'static str,
        source_column: &'static str,
        target: &'static str,
    },

    #[error("relationship `{src}.{source_column}` references `{target}.{target_column}`, which is not declared")]
    UnknownTargetColumn {
        src: &'static str,
        source_column: &'static str,
        target: &'static str,
        target_column: &'static str,
    },

    #[error("relationship `{src}.{source_column}` references `{target}.{target_column}`, which is not a primary key")]
    TargetNotPrimaryKey {
        src: &'static str,
        source_column: &'static str,
        target: &'static str,
        target_column: &'static str,
    },
}

/// The complete set of entity declarations and their relationships, held as
/// one value.
///
/// Constructed once at startup and passed by reference to whoever consumes
/// it; nothing mutates a registry after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SchemaRegistry {
    entities: Vec<EntityDef>,
    relationships: Vec<RelationshipDef>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare_entity(&mut self, entity: EntityDef) {
        self.entities.push(entity);
    }

    pub fn declare_relationship(&mut self, relationship: RelationshipDef) {
        self.relationships.push(relationship);
    }

    /// Entities in declaration order.
    pub fn entities(&self) -> &[EntityDef] {
        &self.entities
    }

    /// Relationships in declaration order.
    pub fn relationships(&self) -> &[RelationshipDef] {
        &self.relationships
    }

    pub fn entity(&self, name: &str) -> Option<&EntityDef> {
        self.entities.iter().find(|e| e.name == name)
    }

    /// Relationships whose foreign key lives on `source`.
    pub fn relationships_from<'a>(
        &'a self,
        source: &'a str,
    ) -> impl Iterator<Item = &'a RelationshipDef> {
        self.relationships.iter().filter(move |r| r.source == source)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Check that the declarations are self-consistent: entity names are
    /// unique, every entity carries a primary key, and every relationship
    /// endpoint names a declared entity and column.
    ///
    /// This inspects declarations only. Whether rows actually satisfy the
    /// declared references is the database engine's business, not ours.
    pub fn validate(&self) -> Result<(), RegistryError> {
        for (i, entity) in self.entities.iter().enumerate() {
            if self.entities[..i].iter().any(|e| e.name == entity.name) {
                return Err(RegistryError::DuplicateEntity {
                    entity: entity.name,
                });
            }
            for (j, column) in entity.columns.iter().enumerate() {
                if entity.columns[..j].iter().any(|c| c.name == column.name) {
                    return Err(RegistryError::DuplicateColumn {
                        entity: entity.name,
                        column: column.name,
                    });
                }
            }
            if entity.primary_key().is_none() {
                return Err(RegistryError::MissingPrimaryKey {
                    entity: entity.name,
                });
            }
        }

        for rel in &self.relationships {
            let source =
                self.entity(rel.source)
                    .ok_or(RegistryError::UnknownSourceEntity {
                        src: rel.source,
                        source_column: rel.source_column,
                    })?;
            if source.column(rel.source_column).is_none() {
                return Err(RegistryError::UnknownSourceColumn {
                    src: rel.source,
                    source_column: rel.source_column,
                });
            }
            let target =
                self.entity(rel.target)
                    .ok_or(RegistryError::UnknownTargetEntity {
                        src: rel.source,
                        source_column: rel.source_column,
                        target: rel.target,
                    })?;
            let target_column = target.column(rel.target_column).ok_or(
                RegistryError::UnknownTargetColumn {
                    src: rel.source,
                    source_column: rel.source_column,
                    target: rel.target,
                    target_column: rel.target_column,
                },
            )?;
            if !target_column.primary_key {
                return Err(RegistryError::TargetNotPrimaryKey {
                    src: rel.source,
                    source_column: rel.source_column,
                    target: rel.target,
                    target_column: rel.target_column,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_entity_registry() -> SchemaRegistry {
        let mut registry = SchemaRegistry::new();
        registry.declare_entity(EntityDef::new(
            "accounts",
            vec![
                ColumnDef::primary_key("id"),
                ColumnDef::varchar("handle", 64).not_null().unique(),
            ],
        ));
        registry.declare_entity(EntityDef::new(
            "sessions",
            vec![
                ColumnDef::primary_key("id"),
                ColumnDef::integer("account_id"),
                ColumnDef::timestamp("opened_at").not_null(),
            ],
        ));
        registry.declare_relationship(RelationshipDef::many_to_one(
            "sessions",
            "account_id",
            "accounts",
        ));
        registry
    }

    #[test]
    fn empty_registry_is_valid() {
        let registry = SchemaRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.validate().is_ok());
    }

    #[test]
    fn consistent_registry_validates() {
        assert_eq!(two_entity_registry().validate(), Ok(()));
    }

    #[test]
    fn duplicate_entity_is_rejected() {
        let mut registry = two_entity_registry();
        registry.declare_entity(EntityDef::new(
            "accounts",
            vec![ColumnDef::primary_key("id")],
        ));
        assert_eq!(
            registry.validate(),
            Err(RegistryError::DuplicateEntity { entity: "accounts" })
        );
    }

    #[test]
    fn entity_without_primary_key_is_rejected() {
        let mut registry = SchemaRegistry::new();
        registry.declare_entity(EntityDef::new(
            "audit_log",
            vec![ColumnDef::text("line").not_null()],
        ));
        assert_eq!(
            registry.validate(),
            Err(RegistryError::MissingPrimaryKey {
                entity: "audit_log"
            })
        );
    }

    #[test]
    fn dangling_foreign_key_target_is_rejected() {
        let mut registry = two_entity_registry();
        registry.declare_relationship(RelationshipDef::many_to_one(
            "sessions",
            "account_id",
            "devices",
        ));
        assert_eq!(
            registry.validate(),
            Err(RegistryError::UnknownTargetEntity {
                src: "sessions",
                source_column: "account_id",
                target: "devices",
            })
        );
    }

    #[test]
    fn undeclared_source_column_is_rejected() {
        let mut registry = two_entity_registry();
        registry.declare_relationship(RelationshipDef::many_to_one(
            "sessions",
            "device_id",
            "accounts",
        ));
        assert_eq!(
            registry.validate(),
            Err(RegistryError::UnknownSourceColumn {
                src: "sessions",
                source_column: "device_id",
            })
        );
    }

    #[test]
    fn reference_to_non_primary_key_is_rejected() {
        let mut registry = two_entity_registry();
        registry.declare_relationship(RelationshipDef {
            source: "sessions",
            source_column: "account_id",
            target: "accounts",
            target_column: "handle",
            cardinality: Cardinality::ManyToOne,
            on_delete: ReferentialAction::NoAction,
        });
        assert_eq!(
            registry.validate(),
            Err(RegistryError::TargetNotPrimaryKey {
                src: "sessions",
                source_column: "account_id",
                target: "accounts",
                target_column: "handle",
            })
        );
    }

    #[test]
    fn relationships_from_filters_by_source() {
        let registry = two_entity_registry();
        let from_sessions: Vec<_> = registry.relationships_from("sessions").collect();
        assert_eq!(from_sessions.len(), 1);
        assert_eq!(from_sessions[0].target, "accounts");
        assert_eq!(registry.relationships_from("accounts").count(), 0);
    }

    #[test]
    fn max_length_tracks_varchar_only() {
        let column = ColumnDef::varchar("handle", 64);
        assert_eq!(column.max_length(), Some(64));
        assert_eq!(ColumnDef::text("body").max_length(), None);
    }
}
