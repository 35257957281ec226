pub mod config;
pub mod db;
pub mod diagram;
pub mod models;
pub mod registry;
pub mod schema;

#[macro_use]
extern crate diesel;
