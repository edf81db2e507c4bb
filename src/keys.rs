use crossterm::event::{self, KeyCode, KeyModifiers};

use crate::{model::Model, msg::Message};

/// Maps a key event into a [`Message`] given the application state.
/// If function returns [`None`], no action should be triggered.
pub fn handle_key(key: event::KeyEvent, model: &Model) -> Option<Message> {
    // The diff view only scrolls and closes
    if model.ui_model.in_diff_view() {
        return match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Message::Quit),
            (KeyModifiers::CONTROL, KeyCode::Char('u')) => Some(Message::HalfPageUp),
            (KeyModifiers::CONTROL, KeyCode::Char('d')) => Some(Message::HalfPageDown),
            (KeyModifiers::NONE, KeyCode::Esc | KeyCode::Char('q')) => Some(Message::CloseDiff),
            (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => Some(Message::MoveUp),
            (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => Some(Message::MoveDown),
            (KeyModifiers::NONE, KeyCode::Char('g')) => Some(second_g(model)),
            (KeyModifiers::SHIFT, KeyCode::Char('G')) => Some(Message::MoveToBottom),
            _ => None,
        };
    }

    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Message::Quit),
        (KeyModifiers::CONTROL, KeyCode::Char('r')) => Some(Message::Refresh),
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => Some(Message::HalfPageUp),
        (KeyModifiers::CONTROL, KeyCode::Char('d')) => Some(Message::HalfPageDown),
        (KeyModifiers::CONTROL, KeyCode::Char('e')) => Some(Message::ScrollLineDown),
        (KeyModifiers::CONTROL, KeyCode::Char('y')) => Some(Message::ScrollLineUp),
        (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Message::Quit),
        (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => Some(Message::MoveUp),
        (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => Some(Message::MoveDown),
        (KeyModifiers::NONE, KeyCode::Enter) => Some(Message::OpenDiff),
        (KeyModifiers::NONE, KeyCode::Char('g')) => Some(second_g(model)),
        (KeyModifiers::SHIFT, KeyCode::Char('G')) => Some(Message::MoveToBottom),
        _ => None,
    }
}

/// 'g' alone arms the jump; a second 'g' performs it
fn second_g(model: &Model) -> Message {
    if model.pending_g {
        Message::MoveToTop
    } else {
        Message::PendingG
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Theme;
    use crate::git::GitInfo;
    use crate::git::log::LogOptions;
    use crate::git::test_repo::TestRepo;
    use crate::graph::layout::strategy_named;
    use crate::model::{DiffView, Model, RunningState, UiModel, ViewMode};
    use crossterm::event::{KeyEvent, KeyEventKind, KeyEventState};

    fn create_key_event(modifiers: KeyModifiers, code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn create_test_model() -> Model {
        let test_repo = TestRepo::new();
        let git_info = GitInfo::new_from_path(test_repo.repo_path()).unwrap();
        Model {
            git_info,
            running_state: RunningState::Running,
            ui_model: UiModel::default(),
            theme: Theme::default(),
            options: LogOptions::default(),
            layout: strategy_named("lanes"),
            pending_g: false,
        }
    }

    #[test]
    fn test_q_quits_from_log() {
        let model = create_test_model();
        let key = create_key_event(KeyModifiers::NONE, KeyCode::Char('q'));
        assert_eq!(handle_key(key, &model), Some(Message::Quit));
    }

    #[test]
    fn test_enter_opens_diff() {
        let model = create_test_model();
        let key = create_key_event(KeyModifiers::NONE, KeyCode::Enter);
        assert_eq!(handle_key(key, &model), Some(Message::OpenDiff));
    }

    #[test]
    fn test_q_closes_diff_view() {
        let mut model = create_test_model();
        model.ui_model.view = ViewMode::Diff(DiffView {
            commit_index: 0,
            files: Vec::new(),
            scroll_offset: 0,
            total_lines: 0,
        });

        let key = create_key_event(KeyModifiers::NONE, KeyCode::Char('q'));
        assert_eq!(handle_key(key, &model), Some(Message::CloseDiff));

        let key = create_key_event(KeyModifiers::NONE, KeyCode::Esc);
        assert_eq!(handle_key(key, &model), Some(Message::CloseDiff));
    }

    #[test]
    fn test_enter_does_nothing_in_diff_view() {
        let mut model = create_test_model();
        model.ui_model.view = ViewMode::Diff(DiffView {
            commit_index: 0,
            files: Vec::new(),
            scroll_offset: 0,
            total_lines: 0,
        });

        let key = create_key_event(KeyModifiers::NONE, KeyCode::Enter);
        assert_eq!(handle_key(key, &model), None);
    }

    #[test]
    fn test_first_g_is_pending() {
        let model = create_test_model();
        let key = create_key_event(KeyModifiers::NONE, KeyCode::Char('g'));
        assert_eq!(handle_key(key, &model), Some(Message::PendingG));
    }

    #[test]
    fn test_second_g_jumps_to_top() {
        let mut model = create_test_model();
        model.pending_g = true;
        let key = create_key_event(KeyModifiers::NONE, KeyCode::Char('g'));
        assert_eq!(handle_key(key, &model), Some(Message::MoveToTop));
    }

    #[test]
    fn test_movement_keys() {
        let model = create_test_model();

        let key = create_key_event(KeyModifiers::NONE, KeyCode::Char('j'));
        assert_eq!(handle_key(key, &model), Some(Message::MoveDown));

        let key = create_key_event(KeyModifiers::NONE, KeyCode::Char('k'));
        assert_eq!(handle_key(key, &model), Some(Message::MoveUp));

        let key = create_key_event(KeyModifiers::CONTROL, KeyCode::Char('d'));
        assert_eq!(handle_key(key, &model), Some(Message::HalfPageDown));
    }
}
