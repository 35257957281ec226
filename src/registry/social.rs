// Copyright (c) SocialNet Team
// SPDX-License-Identifier: Apache-2.0

//! The SocialNet application schema, declared entity by entity.
//!
//! This mirrors the diesel declarations in `crate::schema` in a form the
//! diagram exporter can walk. Declaration order is fixed, so everything
//! derived from the registry comes out deterministic.

use super::{ColumnDef, EntityDef, RelationshipDef, SchemaRegistry};

impl SchemaRegistry {
    /// Build the full thirteen-entity SocialNet schema.
    pub fn social_media() -> Self {
        let mut registry = SchemaRegistry::new();

        registry.declare_entity(EntityDef::new(
            "users",
            vec![
                ColumnDef::primary_key("id"),
                ColumnDef::varchar("username", 100).not_null().unique(),
                ColumnDef::varchar("email", 150).not_null().unique(),
                ColumnDef::text("password_hash").not_null(),
                ColumnDef::varchar("full_name", 100),
                ColumnDef::varchar("bio", 350),
                ColumnDef::varchar("profile_picture", 500),
            ],
        ));

        registry.declare_entity(EntityDef::new(
            "followers",
            vec![
                ColumnDef::primary_key("id"),
                ColumnDef::integer("user_id"),
                ColumnDef::integer("follower_id"),
                ColumnDef::timestamp("follow_timestamp").not_null(),
            ],
        ));

        registry.declare_entity(EntityDef::new(
            "following",
            vec![
                ColumnDef::primary_key("id"),
                ColumnDef::integer("user_id"),
                ColumnDef::integer("following_id"),
                ColumnDef::timestamp("follow_timestamp").not_null(),
            ],
        ));

        registry.declare_entity(EntityDef::new(
            "posts",
            vec![
                ColumnDef::primary_key("id"),
                ColumnDef::integer("user_id"),
                ColumnDef::varchar("image_url", 500).not_null(),
                ColumnDef::varchar("caption", 1000),
                ColumnDef::timestamp("creation_timestamp").not_null(),
            ],
        ));

        registry.declare_entity(EntityDef::new(
            "likes",
            vec![
                ColumnDef::primary_key("id"),
                ColumnDef::integer("user_id"),
                ColumnDef::integer("post_id"),
                ColumnDef::timestamp("like_timestamp").not_null(),
            ],
        ));

        registry.declare_entity(EntityDef::new(
            "comments",
            vec![
                ColumnDef::primary_key("id"),
                ColumnDef::integer("user_id"),
                ColumnDef::integer("post_id"),
                ColumnDef::varchar("text", 1000).not_null(),
                ColumnDef::timestamp("creation_timestamp").not_null(),
            ],
        ));

        registry.declare_entity(EntityDef::new(
            "stories",
            vec![
                ColumnDef::primary_key("id"),
                ColumnDef::integer("user_id"),
                ColumnDef::varchar("image_url", 500).not_null(),
                ColumnDef::varchar("caption", 1000),
                ColumnDef::timestamp("creation_timestamp").not_null(),
                ColumnDef::timestamp("expiration_timestamp").not_null(),
            ],
        ));

        // Nothing but an identity; messages reference it.
        registry.declare_entity(EntityDef::new(
            "conversations",
            vec![ColumnDef::primary_key("id")],
        ));

        registry.declare_entity(EntityDef::new(
            "messages",
            vec![
                ColumnDef::primary_key("id"),
                ColumnDef::integer("conversation_id"),
                ColumnDef::integer("sender_id"),
                ColumnDef::integer("receiver_id"),
                ColumnDef::text("content").not_null(),
                ColumnDef::timestamp("timestamp").not_null(),
            ],
        ));

        registry.declare_entity(EntityDef::new(
            "hashtags",
            vec![
                ColumnDef::primary_key("id"),
                ColumnDef::varchar("name", 100).not_null().unique(),
            ],
        ));

        registry.declare_entity(EntityDef::new(
            "post_hashtags",
            vec![
                ColumnDef::primary_key("id"),
                ColumnDef::integer("post_id"),
                ColumnDef::integer("hashtag_id"),
            ],
        ));

        registry.declare_entity(EntityDef::new(
            "post_interactions",
            vec![
                ColumnDef::primary_key("id"),
                ColumnDef::integer("user_id"),
                ColumnDef::integer("post_id"),
                ColumnDef::varchar("interaction_type", 50).not_null(),
                ColumnDef::timestamp("timestamp").not_null(),
            ],
        ));

        registry.declare_entity(EntityDef::new(
            "notifications",
            vec![
                ColumnDef::primary_key("id"),
                ColumnDef::integer("user_id"),
                ColumnDef::varchar("event_type", 50).not_null(),
                ColumnDef::text("content").not_null(),
                ColumnDef::timestamp("timestamp").not_null(),
            ],
        ));

        // Follow edges carry two references into users apiece; each one is
        // its own relationship, keyed by the referencing column.
        registry.declare_relationship(RelationshipDef::many_to_one(
            "followers",
            "user_id",
            "users",
        ));
        registry.declare_relationship(RelationshipDef::many_to_one(
            "followers",
            "follower_id",
            "users",
        ));
        registry.declare_relationship(RelationshipDef::many_to_one(
            "following",
            "user_id",
            "users",
        ));
        registry.declare_relationship(RelationshipDef::many_to_one(
            "following",
            "following_id",
            "users",
        ));
        registry.declare_relationship(RelationshipDef::many_to_one("posts", "user_id", "users"));
        registry.declare_relationship(RelationshipDef::many_to_one("likes", "user_id", "users"));
        registry.declare_relationship(RelationshipDef::many_to_one("likes", "post_id", "posts"));
        registry.declare_relationship(RelationshipDef::many_to_one("comments", "user_id", "users"));
        registry.declare_relationship(RelationshipDef::many_to_one("comments", "post_id", "posts"));
        registry.declare_relationship(RelationshipDef::many_to_one("stories", "user_id", "users"));
        registry.declare_relationship(RelationshipDef::many_to_one(
            "messages",
            "conversation_id",
            "conversations",
        ));
        registry.declare_relationship(RelationshipDef::many_to_one(
            "messages",
            "sender_id",
            "users",
        ));
        registry.declare_relationship(RelationshipDef::many_to_one(
            "messages",
            "receiver_id",
            "users",
        ));
        registry.declare_relationship(RelationshipDef::many_to_one(
            "post_hashtags",
            "post_id",
            "posts",
        ));
        registry.declare_relationship(RelationshipDef::many_to_one(
            "post_hashtags",
            "hashtag_id",
            "hashtags",
        ));
        registry.declare_relationship(RelationshipDef::many_to_one(
            "post_interactions",
            "user_id",
            "users",
        ));
        registry.declare_relationship(RelationshipDef::many_to_one(
            "post_interactions",
            "post_id",
            "posts",
        ));
        registry.declare_relationship(RelationshipDef::many_to_one(
            "notifications",
            "user_id",
            "users",
        ));

        registry
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Cardinality, ReferentialAction, SchemaRegistry};

    #[test]
    fn social_schema_is_self_consistent() {
        let registry = SchemaRegistry::social_media();
        assert_eq!(registry.validate(), Ok(()));
    }

    #[test]
    fn declares_all_thirteen_entities() {
        let registry = SchemaRegistry::social_media();
        let names: Vec<_> = registry.entities().iter().map(|e| e.name).collect();
        assert_eq!(
            names,
            vec![
                "users",
                "followers",
                "following",
                "posts",
                "likes",
                "comments",
                "stories",
                "conversations",
                "messages",
                "hashtags",
                "post_hashtags",
                "post_interactions",
                "notifications",
            ]
        );
    }

    #[test]
    fn uniqueness_constraints_are_declared_as_metadata() {
        let registry = SchemaRegistry::social_media();

        let users = registry.entity("users").unwrap();
        let unique: Vec<_> = users.unique_columns().map(|c| c.name).collect();
        assert_eq!(unique, vec!["username", "email"]);
        assert!(!users.column("bio").unwrap().unique);

        let hashtags = registry.entity("hashtags").unwrap();
        assert!(hashtags.column("name").unwrap().unique);
    }

    #[test]
    fn every_entity_has_a_synthetic_primary_key() {
        let registry = SchemaRegistry::social_media();
        for entity in registry.entities() {
            let pk = entity.primary_key().unwrap();
            assert_eq!(pk.name, "id", "{} primary key", entity.name);
        }
    }

    #[test]
    fn parallel_foreign_keys_stay_distinct() {
        let registry = SchemaRegistry::social_media();

        let follower_edges: Vec<_> = registry
            .relationships_from("followers")
            .map(|r| r.source_column)
            .collect();
        assert_eq!(follower_edges, vec!["user_id", "follower_id"]);

        let message_edges: Vec<_> = registry
            .relationships_from("messages")
            .map(|r| (r.source_column, r.target))
            .collect();
        assert_eq!(
            message_edges,
            vec![
                ("conversation_id", "conversations"),
                ("sender_id", "users"),
                ("receiver_id", "users"),
            ]
        );
    }

    #[test]
    fn all_relationships_are_many_to_one_into_primary_keys() {
        let registry = SchemaRegistry::social_media();
        assert_eq!(registry.relationships().len(), 18);
        for rel in registry.relationships() {
            assert_eq!(rel.cardinality, Cardinality::ManyToOne);
            assert_eq!(rel.target_column, "id");
        }
    }

    #[test]
    fn no_cascade_rules_are_declared() {
        // Deleting a user out from under messages.sender_id is a state this
        // layer represents without complaint; enforcement belongs to the
        // database engine.
        let registry = SchemaRegistry::social_media();
        for rel in registry.relationships() {
            assert_eq!(rel.on_delete, ReferentialAction::NoAction);
        }
    }

    #[test]
    fn construction_is_deterministic() {
        assert_eq!(SchemaRegistry::social_media(), SchemaRegistry::social_media());
    }
}
