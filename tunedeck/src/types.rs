//! Common type definitions.
//!
//! Entity identifiers are plain integer aliases rather than newtypes: they
//! cross the storage seam and the wire format as numbers, and the only
//! invariant they carry is "strictly positive means a real entity".
//!
//! # The `NO_USER` sentinel
//!
//! User ID `0` means "no identity". It is never assigned to a real account,
//! and every access decision treats it as unauthenticated. Code that resolves
//! a token into a user ID returns `NO_USER` instead of an error when the
//! token is invalid; callers must deny access on `NO_USER`.

/// User account identifier. Strictly positive for real accounts.
pub type UserId = i64;
/// Playlist identifier.
pub type PlaylistId = i64;
/// Track identifier.
pub type TrackId = i64;

/// The "no identity" sentinel. Never a valid account and never grants access.
pub const NO_USER: UserId = 0;
