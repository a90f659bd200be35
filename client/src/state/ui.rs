//! Local UI chrome state (theme, map hover).
//!
//! DESIGN
//! ======
//! Kept apart from `DashboardState` so hover churn over the map does not
//! re-render the grid and dialogs.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    /// State under the pointer on the map.
    pub hovered_state: Option<String>,
}

impl UiState {
    pub fn hover(&mut self, state: &str) {
        if self.hovered_state.as_deref() != Some(state) {
            self.hovered_state = Some(state.to_owned());
        }
    }

    pub fn leave(&mut self) {
        self.hovered_state = None;
    }
}
