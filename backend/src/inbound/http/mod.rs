//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod orders;
pub mod schemas;
pub mod state;

pub use error::ApiResult;
