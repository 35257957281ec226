// Copyright (c) SocialNet Team
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::messages;

/// Model for a conversation. Carries no payload of its own; messages point
/// back at it through `conversation_id`.
#[derive(Debug, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::conversations)]
pub struct Conversation {
    pub id: i32,
}

/// Model for a direct message.
///
/// `sender_id` and `receiver_id` both reference `users`; only the sender
/// side is declared as a joinable relationship, the receiver is looked up
/// by column.
#[derive(Debug, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = messages)]
pub struct Message {
    pub id: i32,
    pub conversation_id: Option<i32>,
    pub sender_id: Option<i32>,
    pub receiver_id: Option<i32>,
    pub content: String,
    pub timestamp: NaiveDateTime,
}

/// DTO for creating a new message
#[derive(Debug, Insertable, Serialize, Deserialize)]
#[diesel(table_name = messages)]
pub struct NewMessage {
    pub conversation_id: Option<i32>,
    pub sender_id: Option<i32>,
    pub receiver_id: Option<i32>,
    pub content: String,
    pub timestamp: NaiveDateTime,
}
