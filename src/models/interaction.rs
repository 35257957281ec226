use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::post_interactions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PostInteraction {
    pub id: i32,
    pub user_id: Option<i32>,
    pub post_id: Option<i32>,
    pub interaction_type: String,
    pub timestamp: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::post_interactions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewPostInteraction {
    pub user_id: Option<i32>,
    pub post_id: Option<i32>,
    pub interaction_type: String,
    pub timestamp: NaiveDateTime,
}
