use crate::api::model::SearchPage;

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub data: AppData,
    pub ui: UiState,
}

/// The current page of results. Replaced wholesale by every completed
/// request; nothing outlives the next render cycle.
#[derive(Debug, Clone, Default)]
pub struct AppData {
    pub page: Option<SearchPage>,
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub is_loading: bool,
    pub error_message: Option<String>,
}
