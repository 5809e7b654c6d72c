pub mod error;
pub mod health;
pub mod root;
pub mod tags;
pub mod user;
