//! User service outbound adapter.
//!
//! A thin HTTP implementation of the `UserDirectory` port.

mod dto;
mod http_directory;

pub use http_directory::HttpUserDirectory;
