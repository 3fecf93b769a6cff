// SPDX-License-Identifier: MIT

pub mod auth;
pub mod security;

pub use auth::{create_jwt, require_auth, AuthUser};
pub use security::add_security_headers;
