// Copyright (c) SocialNet Team
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::{followers, following};

/// Model for a follower edge: `follower_id` follows `user_id`.
///
/// Both columns reference `users`; queries must pick the column to join on,
/// the table declares no canonical direction of its own.
#[derive(Debug, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = followers)]
pub struct Follower {
    pub id: i32,
    pub user_id: Option<i32>,
    pub follower_id: Option<i32>,
    pub follow_timestamp: NaiveDateTime,
}

/// DTO for creating a new follower edge
#[derive(Debug, Insertable, Serialize, Deserialize)]
#[diesel(table_name = followers)]
pub struct NewFollower {
    pub user_id: Option<i32>,
    pub follower_id: Option<i32>,
    pub follow_timestamp: NaiveDateTime,
}

/// Model for a following edge: `user_id` follows `following_id`.
#[derive(Debug, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = following)]
pub struct Following {
    pub id: i32,
    pub user_id: Option<i32>,
    pub following_id: Option<i32>,
    pub follow_timestamp: NaiveDateTime,
}

/// DTO for creating a new following edge
#[derive(Debug, Insertable, Serialize, Deserialize)]
#[diesel(table_name = following)]
pub struct NewFollowing {
    pub user_id: Option<i32>,
    pub following_id: Option<i32>,
    pub follow_timestamp: NaiveDateTime,
}
