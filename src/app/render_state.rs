use crate::app::mode::AppMode;
use crate::engine::Snapshot;

#[derive(Debug, Clone, PartialEq)]
pub enum StatusMessage {
    Info(String),
    Error(String),
}

/// Render state for UI components
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub mode: AppMode,
    pub document_name: Option<String>,
    pub snapshot: Option<Snapshot>,
    /// Text typed into the command deck, when it is open.
    pub command_input: Option<String>,
    pub message: Option<StatusMessage>,
    pub show_help: bool,
    pub presets: Vec<u32>,
}

impl RenderState {
    /// Create an empty render state for when no document is loaded
    pub fn empty(mode: AppMode) -> Self {
        Self {
            mode,
            document_name: None,
            snapshot: None,
            command_input: None,
            message: None,
            show_help: false,
            presets: Vec::new(),
        }
    }
}
