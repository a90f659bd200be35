//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The dashboard is the single screen; it owns store orchestration and
//! delegates rendering details to `components`.

pub mod dashboard;
