//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome shared by every route and read/write shared
//! state from Leptos context providers.

pub mod nav_bar;
