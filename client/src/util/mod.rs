//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, theme) and the map
//! layout from page and component logic so they can be tested natively.

pub mod dark_mode;
pub mod local_storage;
pub mod state_tiles;
