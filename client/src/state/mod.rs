//! Application state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain data types held in `RwSignal`s or wrapped by shared services and
//! provided through Leptos context. Keeping them free of view code lets the
//! merge and validation rules be unit tested.

pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod toast;
