//! Authentication and authorization.
//!
//! This module is the stateful heart of the backend: everything else is
//! pass-through between HTTP and storage, but sessions have a lifecycle and
//! invariants that live here.
//!
//! # Login flow
//!
//! A login request runs [`credentials::CredentialValidator::authenticate`]
//! (input bounds, credential lookup, SHA3-512 digest comparison) and, on
//! success, [`session::SessionStore::create_session`], which issues a unique
//! bearer token. Every rejection — malformed input, unknown account, wrong
//! password, storage failure — surfaces as the single `InvalidCredentials`
//! error kind so callers cannot probe which accounts exist; the root cause is
//! kept on the error for logging.
//!
//! # Authenticated requests
//!
//! Every subsequent request carries the token. [`access::AccessController`]
//! resolves it back to a user ID (collapsing all failures into the `0`
//! sentinel) and, for mutations, checks playlist ownership against storage.
//! Ownership checks fail closed: no proof of ownership means no access.
//!
//! # Session lifetime
//!
//! Sessions are held in an explicitly constructed [`session::SessionStore`]
//! injected through `AppState`; there is no process-global registry. Sessions
//! never expire and there is no logout, so a token stays valid for the
//! process lifetime, and logging in again simply adds another independent
//! session. See DESIGN.md for the expiry decision.
//!
//! # Modules
//!
//! - [`token`]: cryptographically random token generation
//! - [`credentials`]: credential shape validation and password verification
//! - [`session`]: the token → identity registry
//! - [`access`]: token resolution and ownership gating

pub mod access;
pub mod credentials;
pub mod session;
pub mod token;
