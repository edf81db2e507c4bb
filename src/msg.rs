pub mod update;

/// All state transitions the UI can trigger
#[derive(PartialEq, Eq, Debug)]
pub enum Message {
    /// Quit application
    Quit,
    /// Re-run git log and rebuild the commit list
    Refresh,
    /// Move one line up
    MoveUp,
    /// Move one line down
    MoveDown,
    /// Move half a page up
    HalfPageUp,
    /// Move half a page down
    HalfPageDown,
    /// Scroll viewport up by one line
    ScrollLineUp,
    /// Scroll viewport down by one line
    ScrollLineDown,
    /// Jump to the first line
    MoveToTop,
    /// Jump to the last line
    MoveToBottom,
    /// First 'g' press, waiting for the second 'g' to trigger MoveToTop
    PendingG,
    /// Open the diff view for the selected commit
    OpenDiff,
    /// Return from the diff view to the log
    CloseDiff,
}
