//! Axum route handlers.
//!
//! Handlers stay thin: resolve and authorize the caller through the auth
//! core, delegate to the storage traits, and shape the response DTOs. All
//! authorization decisions live in [`crate::auth`], never here.

pub mod auth;
pub mod playlists;
pub mod tracks;
