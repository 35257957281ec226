// Copyright (c) SocialNet Team
// SPDX-License-Identifier: Apache-2.0

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::{hashtags, post_hashtags};

/// Model for a hashtag. The name is unique.
#[derive(Debug, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = hashtags)]
pub struct Hashtag {
    pub id: i32,
    pub name: String,
}

/// DTO for creating a new hashtag
#[derive(Debug, Insertable, Serialize, Deserialize)]
#[diesel(table_name = hashtags)]
pub struct NewHashtag {
    pub name: String,
}

/// Model for a post-to-hashtag link
#[derive(Debug, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = post_hashtags)]
pub struct PostHashtag {
    pub id: i32,
    pub post_id: Option<i32>,
    pub hashtag_id: Option<i32>,
}

/// DTO for creating a new post-to-hashtag link
#[derive(Debug, Insertable, Serialize, Deserialize)]
#[diesel(table_name = post_hashtags)]
pub struct NewPostHashtag {
    pub post_id: Option<i32>,
    pub hashtag_id: Option<i32>,
}
