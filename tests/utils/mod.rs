#![allow(unused)]

use logi::config::Theme;
use logi::git::GitInfo;
use logi::git::log::LogOptions;
use logi::git::test_repo::TestRepo;
use logi::graph::layout::{LaneLayout, LayoutStrategy, strategy_named};
use logi::model::{Commit, Model, RunningState, UiModel};
use logi::parse::parse_log;

/// Fixture log text: a merged feature branch on top of two linear
/// commits, newest first, the way git prints it
pub fn sample_log_text() -> String {
    "\
*   commit eeee5555 cccc3333 dddd4444 (HEAD -> main, origin/main)
|\\  Merge: cccc3333 dddd4444
| | Author:     Jane Doe <jane@example.com>
| | AuthorDate: Mon May 2 10:00:00 2022 +0200
| | Commit:     Jane Doe <jane@example.com>
| | CommitDate: Mon May 2 10:05:00 2022 +0200
| |
| |     Merge branch 'feature'
| |
| * commit dddd4444 bbbb2222 (feature)
| | Author:     Joe Committer <joe@example.com>
| | AuthorDate: Sun May 1 09:00:00 2022 +0200
| | Commit:     Joe Committer <joe@example.com>
| | CommitDate: Sun May 1 09:00:00 2022 +0200
| |
| |     chore: experiment on the side
| |
* | commit cccc3333 bbbb2222
|/  Author:     Jane Doe <jane@example.com>
|   AuthorDate: Sat Apr 30 12:00:00 2022 +0200
|   Commit:     Jane Doe <jane@example.com>
|   CommitDate: Sat Apr 30 12:00:00 2022 +0200
|
|       feat: lane palette
|
|  src/theme.rs | 6 ++++--
|  1 file changed, 4 insertions(+), 2 deletions(-)
|
* commit bbbb2222 aaaa1111
| Author:     Jane Doe <jane@example.com>
| AuthorDate: Fri Apr 29 12:00:00 2022 +0200
| Commit:     Jane Doe <jane@example.com>
| CommitDate: Fri Apr 29 12:00:00 2022 +0200
|
|     fix: stat rounding
|
* commit aaaa1111 (tag: v0.1.0)
  Author:     Jane Doe <jane@example.com>
  AuthorDate: Thu Apr 28 12:00:00 2022 +0200
  Commit:     Jane Doe <jane@example.com>
  CommitDate: Thu Apr 28 12:00:00 2022 +0200

      feat: initial layout
"
    .to_string()
}

/// The fixture commits, parsed and laid out, oldest first
pub fn sample_commits() -> Vec<Commit> {
    let mut commits = parse_log(&sample_log_text());
    LaneLayout.assign(&mut commits);
    commits
}

/// Creates a test model preloaded with the fixture commits. The
/// returned TestRepo keeps the backing repository alive for git
/// operations triggered by updates.
pub fn create_test_model() -> (Model, TestRepo) {
    let test_repo = TestRepo::new();
    let git_info = GitInfo::new_from_path(test_repo.repo_path()).unwrap();

    let model = Model {
        git_info,
        running_state: RunningState::Running,
        ui_model: UiModel {
            commits: sample_commits(),
            viewport_height: 10,
            ..Default::default()
        },
        theme: Theme::default(),
        options: LogOptions::default(),
        layout: strategy_named("lanes"),
        pending_g: false,
    };

    (model, test_repo)
}
