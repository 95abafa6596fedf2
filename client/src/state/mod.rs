//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` is the reactive view of the session shared through context,
//! `session` is the persisted token pair behind it, and `form` is the submit
//! lifecycle each auth form owns locally.

pub mod auth;
pub mod form;
pub mod session;
