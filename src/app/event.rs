/// Application events produced by the command deck
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    LoadFile(String),
    SetRate(u32),
    Seek(i64),
    Close,
    Quit,
    Help,
    InvalidCommand(String),
}
