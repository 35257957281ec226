use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::posts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Post {
    pub id: i32,
    pub user_id: Option<i32>,
    pub image_url: String,
    pub caption: Option<String>,
    pub creation_timestamp: NaiveDateTime,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::posts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewPost {
    pub user_id: Option<i32>,
    pub image_url: String,
    pub caption: Option<String>,
    pub creation_timestamp: NaiveDateTime,
}

#[derive(Debug, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::likes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Like {
    pub id: i32,
    pub user_id: Option<i32>,
    pub post_id: Option<i32>,
    pub like_timestamp: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::likes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewLike {
    pub user_id: Option<i32>,
    pub post_id: Option<i32>,
    pub like_timestamp: NaiveDateTime,
}

#[derive(Debug, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Comment {
    pub id: i32,
    pub user_id: Option<i32>,
    pub post_id: Option<i32>,
    pub text: String,
    pub creation_timestamp: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewComment {
    pub user_id: Option<i32>,
    pub post_id: Option<i32>,
    pub text: String,
    pub creation_timestamp: NaiveDateTime,
}

#[derive(Debug, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::stories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Story {
    pub id: i32,
    pub user_id: Option<i32>,
    pub image_url: String,
    pub caption: Option<String>,
    pub creation_timestamp: NaiveDateTime,
    pub expiration_timestamp: NaiveDateTime,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::stories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewStory {
    pub user_id: Option<i32>,
    pub image_url: String,
    pub caption: Option<String>,
    pub creation_timestamp: NaiveDateTime,
    pub expiration_timestamp: NaiveDateTime,
}
