//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **user_service**: reqwest client for the external user service.
//! - **mail**: reqwest client for the mail-dispatch service.
//! - **persistence**: PostgreSQL order repository using Diesel.
//! - **memory**: in-process order repository for database-less runs.
//!
//! Adapters are thin translators between domain types and infrastructure
//! representations. They contain no business logic.

pub(crate) mod http_body;
pub mod mail;
pub mod memory;
pub mod persistence;
pub mod user_service;
