use ratatui::{
    Frame,
    text::Line as TextLine,
    widgets::{Block, Borders, Paragraph},
};

use crate::model::{Model, ViewMode};

mod commit_line;
pub mod diff_view;
mod util;

/// The view function draws the UI using the application state (Model).
///
/// The log screen shows one row per commit, newest first, with the lane
/// graph on the left:
///
/// ┌ logi [main] ────────────────────────────────────┐
/// |● 8002f05 main feat: add layout pass (Jane)      |
/// |● 467e2a7 fix: stat split rounding (Jane)        |
/// |│ ● 9ab0c44 feature-x chore: experiment (Joe)    |
/// |◉ bce473e Merge branch 'feature-x' (Jane)        |
/// |● 11f9d02 v0.1.0 Initial commit (Jane)           |
/// └─────────────────────────────────────────────────┘
///
/// Enter swaps the screen for the selected commit's diff.
pub fn view(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    let theme = &model.theme;
    // Content width is area width minus 2 for borders
    let content_width = area.width.saturating_sub(2) as usize;

    let (text, scroll) = match &model.ui_model.view {
        ViewMode::Log => log_lines(model, content_width),
        ViewMode::Diff(diff) => {
            let commit = &model.ui_model.commits[diff.commit_index];
            (
                diff_view::get_lines(commit, &diff.files, theme),
                diff.scroll_offset,
            )
        }
    };

    let title = match model.git_info.current_branch() {
        Some(branch) => format!(" logi [{}] ", branch),
        None => " logi ".to_string(),
    };

    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title(title))
        .scroll((scroll as u16, 0));

    frame.render_widget(paragraph, area);
}

fn log_lines(model: &Model, content_width: usize) -> (Vec<TextLine<'static>>, usize) {
    let theme = &model.theme;
    let commits = &model.ui_model.commits;
    let bounds = util::lane_bounds(commits);

    let mut text = Vec::with_capacity(commits.len());
    for row in 0..commits.len() {
        // rows display newest first, commits are stored oldest first
        let index = commits.len() - 1 - row;
        let mut line = commit_line::get_line(&commits[index], index, &bounds, theme);
        if row == model.ui_model.cursor_position {
            line = util::apply_selection(line, content_width, theme.selection_bg);
        }
        text.push(line);
    }

    (text, model.ui_model.scroll_offset)
}
