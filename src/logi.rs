use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event};
use ratatui::DefaultTerminal;

use crate::{
    config::Config,
    errors::LogiResult,
    git::GitInfo,
    git::log::{self, LogOptions},
    graph::layout,
    keys::handle_key,
    model::{Model, RunningState, UiModel},
    msg::Message,
    msg::update::update,
    view::view,
};

const EVENT_POLL_TIMEOUT_MILLIS: u64 = 250;

/// Command-line settings that override the config file
#[derive(Debug, Clone, Default)]
pub struct RunArgs {
    pub workdir: Option<PathBuf>,
    pub max_commits: Option<usize>,
    pub all_refs: bool,
}

pub fn run(args: RunArgs) -> LogiResult<()> {
    let terminal = ratatui::init();
    let result = run_loop(terminal, args);
    ratatui::restore();
    result
}

/// Main run loop which polls events (messages), transforms the model,
/// and renders the UI.
fn run_loop(mut terminal: DefaultTerminal, args: RunArgs) -> LogiResult<()> {
    // Load config and resolve theme
    let config = Config::load();
    let theme = config.resolve_theme();
    let layout = layout::strategy_named(&config.layout);

    let git_info = match &args.workdir {
        Some(path) => GitInfo::new_from_path(path)?,
        None => GitInfo::new()?,
    };
    let options = LogOptions {
        max_commits: args.max_commits.unwrap_or(config.max_commits),
        all_refs: args.all_refs,
    };

    let commits = log::commits(&git_info, &options, layout.as_ref())?;
    let mut model = Model {
        running_state: RunningState::Running,
        ui_model: UiModel {
            commits,
            ..Default::default()
        },
        git_info,
        theme,
        options,
        layout,
        pending_g: false,
    };

    while model.running_state != RunningState::Done {
        // Update viewport height for scrolling calculations (subtract 2 for borders)
        let terminal_height = terminal.size()?.height as usize;
        model.ui_model.viewport_height = terminal_height.saturating_sub(2);

        // Render view
        terminal.draw(|f| view(&model, f))?;

        // Handle event
        let mut current_msg = handle_event(&model)?;

        // Process updates
        while let Some(msg) = current_msg {
            current_msg = update(&mut model, msg);
        }
    }
    Ok(())
}

/// Blocks for [`EVENT_POLL_TIMEOUT_MILLIS`] waiting for a key event.
/// If a key event occurred during this time, return what [`Message`]
/// it should trigger.
fn handle_event(model: &Model) -> LogiResult<Option<Message>> {
    if event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MILLIS))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == event::KeyEventKind::Press {
                return Ok(handle_key(key, model));
            }
        }
    }
    Ok(None)
}
