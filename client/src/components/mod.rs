//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared auth state from Leptos context providers.

pub mod nav_bar;
pub mod protected_route;
