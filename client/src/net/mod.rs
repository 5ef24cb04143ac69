//! Networking modules for the backend and the identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `identity` signs users in and hands out fresh bearer tokens; `api` attaches
//! them to every backend call. Wire types come from the `schema` crate.

pub mod api;
pub mod identity;
