#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// No document open; the command deck loads one.
    Command,
    /// A document is open, playing or paused.
    Reading,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appmode_variants_distinct() {
        assert_ne!(AppMode::Command, AppMode::Reading);
        assert_ne!(AppMode::Reading, AppMode::Quit);
    }
}
