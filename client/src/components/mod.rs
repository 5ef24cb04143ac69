//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (navigation, toasts, the session gate)
//! and dashboard widgets, reading shared state from Leptos context.

pub mod auth_provider;
pub mod footer;
pub mod macro_ring;
pub mod meal_plan_chart;
pub mod mock_payment_button;
pub mod navbar;
pub mod recipe_card;
pub mod toast_host;
