use crate::git;
use crate::model::{DiffView, Model, RunningState, ViewMode};
use crate::msg::Message;
use crate::view::diff_view;

/// Processes a [`Message`], modifying the passed model.
///
/// Returns a follow up [`Message`] for sequences of actions.
pub fn update(model: &mut Model, msg: Message) -> Option<Message> {
    if msg != Message::PendingG {
        model.pending_g = false;
    }

    match msg {
        Message::Quit => model.running_state = RunningState::Done,
        Message::PendingG => model.pending_g = true,
        Message::Refresh => refresh(model),
        Message::OpenDiff => open_diff(model),
        Message::CloseDiff => model.ui_model.view = ViewMode::Log,
        Message::MoveUp => move_by(model, -1),
        Message::MoveDown => move_by(model, 1),
        Message::HalfPageUp => {
            let step = half_page(model);
            move_by(model, -step);
        }
        Message::HalfPageDown => {
            let step = half_page(model);
            move_by(model, step);
        }
        Message::ScrollLineUp => scroll_by(model, -1),
        Message::ScrollLineDown => scroll_by(model, 1),
        Message::MoveToTop => move_to(model, 0),
        Message::MoveToBottom => move_to(model, usize::MAX),
    }
    None
}

/// Re-runs the full log pipeline. A refreshed list invalidates any open
/// diff, so the view drops back to the log.
fn refresh(model: &mut Model) {
    if let Ok(commits) = git::log::commits(&model.git_info, &model.options, model.layout.as_ref())
    {
        model.ui_model.commits = commits;
        let max_row = model.ui_model.row_count().saturating_sub(1);
        model.ui_model.cursor_position = model.ui_model.cursor_position.min(max_row);
        model.ui_model.scroll_offset = model.ui_model.scroll_offset.min(max_row);
        model.ui_model.view = ViewMode::Log;
    }
}

fn open_diff(model: &mut Model) {
    let Some(index) = model
        .ui_model
        .commit_index_at_row(model.ui_model.cursor_position)
    else {
        return;
    };
    let commit = &model.ui_model.commits[index];
    if let Ok(files) = git::diff::commit_diff(&model.git_info, commit) {
        let total_lines = diff_view::line_count(commit, &files);
        model.ui_model.view = ViewMode::Diff(DiffView {
            commit_index: index,
            files,
            scroll_offset: 0,
            total_lines,
        });
    }
}

/// Cursor movement in the log; plain scrolling in the diff view
fn move_by(model: &mut Model, delta: isize) {
    let viewport = model.ui_model.viewport_height;
    if let ViewMode::Diff(diff) = &mut model.ui_model.view {
        let max_scroll = diff.total_lines.saturating_sub(viewport.max(1));
        diff.scroll_offset = step(diff.scroll_offset, delta).min(max_scroll);
        return;
    }

    let max_row = model.ui_model.row_count().saturating_sub(1);
    model.ui_model.cursor_position = step(model.ui_model.cursor_position, delta).min(max_row);
    ensure_cursor_visible(model);
}

/// Moves the viewport without losing the cursor
fn scroll_by(model: &mut Model, delta: isize) {
    let viewport = model.ui_model.viewport_height;
    if let ViewMode::Diff(diff) = &mut model.ui_model.view {
        let max_scroll = diff.total_lines.saturating_sub(viewport.max(1));
        diff.scroll_offset = step(diff.scroll_offset, delta).min(max_scroll);
        return;
    }

    let max_row = model.ui_model.row_count().saturating_sub(1);
    let ui = &mut model.ui_model;
    ui.scroll_offset = step(ui.scroll_offset, delta).min(max_row);
    // keep the cursor inside the visible window
    if ui.cursor_position < ui.scroll_offset {
        ui.cursor_position = ui.scroll_offset;
    } else if viewport > 0 && ui.cursor_position >= ui.scroll_offset + viewport {
        ui.cursor_position = (ui.scroll_offset + viewport - 1).min(max_row);
    }
}

fn move_to(model: &mut Model, row: usize) {
    let viewport = model.ui_model.viewport_height;
    if let ViewMode::Diff(diff) = &mut model.ui_model.view {
        let max_scroll = diff.total_lines.saturating_sub(viewport.max(1));
        diff.scroll_offset = row.min(max_scroll);
        return;
    }

    let max_row = model.ui_model.row_count().saturating_sub(1);
    model.ui_model.cursor_position = row.min(max_row);
    ensure_cursor_visible(model);
}

fn ensure_cursor_visible(model: &mut Model) {
    let ui = &mut model.ui_model;
    if ui.cursor_position < ui.scroll_offset {
        ui.scroll_offset = ui.cursor_position;
    } else if ui.viewport_height > 0 && ui.cursor_position >= ui.scroll_offset + ui.viewport_height
    {
        ui.scroll_offset = ui.cursor_position + 1 - ui.viewport_height;
    }
}

fn half_page(model: &Model) -> isize {
    (model.ui_model.viewport_height / 2).max(1) as isize
}

fn step(value: usize, delta: isize) -> usize {
    if delta < 0 {
        value.saturating_sub(delta.unsigned_abs())
    } else {
        value.saturating_add(delta as usize)
    }
}
