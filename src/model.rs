use crate::config::Theme;
use crate::git::GitInfo;
use crate::git::log::LogOptions;
use crate::graph::layout::LayoutStrategy;

pub mod commit;
pub mod diff;

pub use commit::{Commit, FileStat, GraphPosition, RefKind, RefName};
pub use diff::{ChangeKind, DiffHunk, FileDiff};

/// The whole state of the application
pub struct Model {
    /// Running state of the application
    pub running_state: RunningState,
    /// The model passed to the view function to render the UI
    pub ui_model: UiModel,
    /// git2 repository handle
    pub git_info: GitInfo,
    /// Color scheme constants
    pub theme: Theme,
    /// How the log is sourced on refresh
    pub options: LogOptions,
    /// Layout strategy applied after every parse
    pub layout: Box<dyn LayoutStrategy>,
    /// First 'g' press seen, waiting for the second one
    pub pending_g: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunningState {
    Running,
    Done,
}

/// State the view reads to draw the UI
#[derive(Default)]
pub struct UiModel {
    /// Parsed commits, oldest first
    pub commits: Vec<Commit>,
    /// Selected row, 0 = newest commit
    pub cursor_position: usize,
    pub scroll_offset: usize,
    pub viewport_height: usize,
    pub view: ViewMode,
}

/// Which screen is showing
#[derive(Default)]
pub enum ViewMode {
    #[default]
    Log,
    Diff(DiffView),
}

/// The diff screen for one selected commit
pub struct DiffView {
    /// Index into `UiModel::commits` of the commit being shown
    pub commit_index: usize,
    pub files: Vec<FileDiff>,
    pub scroll_offset: usize,
    /// Rendered height, used to clamp scrolling
    pub total_lines: usize,
}

impl UiModel {
    /// Number of rows in the log view
    pub fn row_count(&self) -> usize {
        self.commits.len()
    }

    /// Commits are stored oldest first but displayed newest first
    pub fn commit_index_at_row(&self, row: usize) -> Option<usize> {
        let len = self.commits.len();
        if row < len { Some(len - 1 - row) } else { None }
    }

    pub fn selected_commit(&self) -> Option<&Commit> {
        self.commit_index_at_row(self.cursor_position)
            .map(|index| &self.commits[index])
    }

    pub fn in_diff_view(&self) -> bool {
        matches!(self.view, ViewMode::Diff(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit_with_subject(subject: &str) -> Commit {
        Commit {
            subject: subject.to_string(),
            ..Commit::default()
        }
    }

    #[test]
    fn test_row_maps_to_newest_first() {
        let ui_model = UiModel {
            commits: vec![
                commit_with_subject("oldest"),
                commit_with_subject("middle"),
                commit_with_subject("newest"),
            ],
            ..Default::default()
        };

        assert_eq!(ui_model.commit_index_at_row(0), Some(2));
        assert_eq!(ui_model.commit_index_at_row(2), Some(0));
        assert_eq!(ui_model.commit_index_at_row(3), None);
    }

    #[test]
    fn test_selected_commit_follows_cursor() {
        let mut ui_model = UiModel {
            commits: vec![commit_with_subject("oldest"), commit_with_subject("newest")],
            ..Default::default()
        };

        assert_eq!(ui_model.selected_commit().unwrap().subject, "newest");
        ui_model.cursor_position = 1;
        assert_eq!(ui_model.selected_commit().unwrap().subject, "oldest");
    }

    #[test]
    fn test_selected_commit_empty_log() {
        let ui_model = UiModel::default();
        assert!(ui_model.selected_commit().is_none());
    }
}
