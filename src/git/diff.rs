use std::process::Command;

use crate::errors::LogiResult;
use crate::git::{GitInfo, git_cmd};
use crate::model::{Commit, FileDiff};
use crate::parse::parse_diff;

/// Raw unified diff between two revisions
pub fn diff_text(git_info: &GitInfo, old: &str, new: &str) -> LogiResult<String> {
    let workdir = git_info.workdir()?;
    run_for_stdout(git_cmd(workdir, &["diff", old, new]))
}

/// Raw diff a commit introduced over its first parent
pub fn commit_diff_text(git_info: &GitInfo, commit: &Commit) -> LogiResult<String> {
    match commit.first_parent() {
        Some(parent) => diff_text(git_info, parent, &commit.hash),
        None => {
            // root commit: show the whole introduction
            let workdir = git_info.workdir()?;
            run_for_stdout(git_cmd(
                workdir,
                &["show", "--pretty=format:", &commit.hash],
            ))
        }
    }
}

/// Parsed file changes a commit introduced
pub fn commit_diff(git_info: &GitInfo, commit: &Commit) -> LogiResult<Vec<FileDiff>> {
    let text = commit_diff_text(git_info, commit)?;
    Ok(parse_diff(&text))
}

fn run_for_stdout(mut cmd: Command) -> LogiResult<String> {
    let output = cmd.output()?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(git2::Error::from_str(&format!("git diff failed: {}", stderr)).into());
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
