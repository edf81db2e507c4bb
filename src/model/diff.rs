/// The change to a single file within a unified diff
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    /// Path on the new side of the diff
    pub path: String,
    /// Previous path, set for renames
    pub old_path: Option<String>,
    pub kind: ChangeKind,
    /// Hunks in the order they appeared, ascending by new start line
    pub hunks: Vec<DiffHunk>,
    /// The verbatim diff text for this file, header line included
    pub raw: String,
}

/// How a file changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Modified,
    Deleted,
    Renamed,
}

impl ChangeKind {
    /// Short status label for display
    pub fn label(&self) -> &'static str {
        match self {
            ChangeKind::Added => "new file",
            ChangeKind::Modified => "modified",
            ChangeKind::Deleted => "deleted",
            ChangeKind::Renamed => "renamed",
        }
    }
}

/// One contiguous change region within a file's diff
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffHunk {
    pub old_start: u32,
    pub old_lines: u32,
    pub new_start: u32,
    pub new_lines: u32,
    /// Literal diff lines, each still carrying its `+`/`-`/space prefix
    pub lines: Vec<String>,
}

impl DiffHunk {
    pub fn new(old_start: u32, old_lines: u32, new_start: u32, new_lines: u32) -> Self {
        Self {
            old_start,
            old_lines,
            new_start,
            new_lines,
            lines: Vec::new(),
        }
    }

    /// Reconstructs the `@@` header for display
    pub fn header(&self) -> String {
        format!(
            "@@ -{},{} +{},{} @@",
            self.old_start, self.old_lines, self.new_start, self.new_lines
        )
    }
}
