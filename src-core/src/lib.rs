pub mod db;

pub mod assets;
pub mod assignments;
pub mod catalog;
pub mod dashboard;
pub mod errors;
pub mod org;
pub mod schema;
pub mod users;

pub use errors::{Error, Result};
