//! Postgres adapters for the users service.
//!
//! Expected table:
//!
//! ```sql
//! CREATE TABLE users (
//!     id          BIGSERIAL PRIMARY KEY,
//!     id_document TEXT NOT NULL,
//!     username    TEXT NOT NULL,
//!     email       TEXT NOT NULL,
//!     password    TEXT NOT NULL,
//!     created_at  TIMESTAMPTZ NOT NULL DEFAULT now()
//! );
//! ```

pub mod connection;
pub mod db;
pub mod health;
pub mod user {
    pub mod entity;
    pub mod repository;
}
