// Copyright (c) SocialNet Team
// SPDX-License-Identifier: Apache-2.0

// Import diesel table macros
use diesel::allow_tables_to_appear_in_same_query;
use diesel::joinable;
use diesel::table;

// Define user accounts table
table! {
    users (id) {
        id -> Int4,
        username -> Varchar,
        email -> Varchar,
        password_hash -> Text,
        full_name -> Nullable<Varchar>,
        bio -> Nullable<Varchar>,
        profile_picture -> Nullable<Varchar>,
    }
}

// Directed follow edges: who follows the owning user
table! {
    followers (id) {
        id -> Int4,
        user_id -> Nullable<Int4>,
        follower_id -> Nullable<Int4>,
        follow_timestamp -> Timestamp,
    }
}

// Directed follow edges: who the owning user follows
table! {
    following (id) {
        id -> Int4,
        user_id -> Nullable<Int4>,
        following_id -> Nullable<Int4>,
        follow_timestamp -> Timestamp,
    }
}

table! {
    posts (id) {
        id -> Int4,
        user_id -> Nullable<Int4>,
        image_url -> Varchar,
        caption -> Nullable<Varchar>,
        creation_timestamp -> Timestamp,
    }
}

table! {
    likes (id) {
        id -> Int4,
        user_id -> Nullable<Int4>,
        post_id -> Nullable<Int4>,
        like_timestamp -> Timestamp,
    }
}

table! {
    comments (id) {
        id -> Int4,
        user_id -> Nullable<Int4>,
        post_id -> Nullable<Int4>,
        text -> Varchar,
        creation_timestamp -> Timestamp,
    }
}

table! {
    stories (id) {
        id -> Int4,
        user_id -> Nullable<Int4>,
        image_url -> Varchar,
        caption -> Nullable<Varchar>,
        creation_timestamp -> Timestamp,
        expiration_timestamp -> Timestamp,
    }
}

// A conversation is nothing but an identity for messages to hang off
table! {
    conversations (id) {
        id -> Int4,
    }
}

table! {
    messages (id) {
        id -> Int4,
        conversation_id -> Nullable<Int4>,
        sender_id -> Nullable<Int4>,
        receiver_id -> Nullable<Int4>,
        content -> Text,
        timestamp -> Timestamp,
    }
}

table! {
    hashtags (id) {
        id -> Int4,
        name -> Varchar,
    }
}

table! {
    post_hashtags (id) {
        id -> Int4,
        post_id -> Nullable<Int4>,
        hashtag_id -> Nullable<Int4>,
    }
}

table! {
    post_interactions (id) {
        id -> Int4,
        user_id -> Nullable<Int4>,
        post_id -> Nullable<Int4>,
        interaction_type -> Varchar,
        timestamp -> Timestamp,
    }
}

table! {
    notifications (id) {
        id -> Int4,
        user_id -> Nullable<Int4>,
        event_type -> Varchar,
        content -> Text,
        timestamp -> Timestamp,
    }
}

// Single-foreign-key relationships only. Tables with more than one foreign
// key into the same target (followers, following, messages -> users) are
// left out: joins there must name the column explicitly.
joinable!(posts -> users (user_id));
joinable!(likes -> users (user_id));
joinable!(likes -> posts (post_id));
joinable!(comments -> users (user_id));
joinable!(comments -> posts (post_id));
joinable!(stories -> users (user_id));
joinable!(messages -> conversations (conversation_id));
joinable!(post_hashtags -> posts (post_id));
joinable!(post_hashtags -> hashtags (hashtag_id));
joinable!(post_interactions -> users (user_id));
joinable!(post_interactions -> posts (post_id));
joinable!(notifications -> users (user_id));

// Allow joining the tables if needed
allow_tables_to_appear_in_same_query!(
    users,
    followers,
    following,
    posts,
    likes,
    comments,
    stories,
    conversations,
    messages,
    hashtags,
    post_hashtags,
    post_interactions,
    notifications,
);
