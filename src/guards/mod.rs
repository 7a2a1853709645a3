mod admin;
mod basic_auth;
mod client_metadata;

pub use admin::*;
pub use basic_auth::*;
pub use client_metadata::*;
