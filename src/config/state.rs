// src/config/state.rs
#[derive(Clone, Debug)]
pub struct GuiState {
    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    /// Search tab: text box contents and the last submitted query
    pub query_text: String,
    pub last_query: Option<String>,

    /// Terminology tab: live filter text
    pub term_filter: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            current_page_index: 0,
            query_text: s!(),
            last_query: None,
            term_filter: s!(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub gui: GuiState,
    /// Output of the last search, shown verbatim
    pub results: Option<String>,
}
