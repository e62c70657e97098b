// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug, Default)]
pub struct GuiState {
    /// Live filter text from the search bar
    pub filter: String,
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
