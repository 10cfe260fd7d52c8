//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates shared chrome and
//! route guarding to `components`.

pub mod about;
pub mod home;
pub mod login;
pub mod todo;
