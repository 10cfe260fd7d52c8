//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser storage access and route-guard helpers, kept out of pages and
//! components.

pub mod auth;
pub mod storage;
