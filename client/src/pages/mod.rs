//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and submit flow and delegates backend work
//! to `net::auth_service`.

pub mod home;
pub mod login;
pub mod register;
