use crate::errors::LogiResult;
use crate::git::{GitInfo, git_cmd};
use crate::graph::layout::LayoutStrategy;
use crate::model::Commit;
use crate::parse::parse_log;

const DEFAULT_MAX_COMMITS: usize = 256;

/// How the log text is sourced from the repository
#[derive(Debug, Clone)]
pub struct LogOptions {
    /// Upper bound on the number of commits requested
    pub max_commits: usize,
    /// Walk all refs instead of just HEAD's history
    pub all_refs: bool,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            max_commits: DEFAULT_MAX_COMMITS,
            all_refs: false,
        }
    }
}

/// Fetches the verbose log text for the repository.
///
/// The invocation asks for everything the parser understands: the graph
/// prefix, decorations, explicit parent hashes, the fuller author and
/// committer headers, and the per-file stat block.
pub fn log_text(git_info: &GitInfo, options: &LogOptions) -> LogiResult<String> {
    let workdir = git_info.workdir()?;

    let mut cmd = git_cmd(
        workdir,
        &[
            "log",
            "--graph",
            "--decorate",
            "--parents",
            "--pretty=fuller",
            "--stat",
        ],
    );
    cmd.arg(format!("-n{}", options.max_commits));
    if options.all_refs {
        cmd.arg("--all");
    } else {
        cmd.arg("HEAD");
    }
    cmd.arg("--");

    let output = cmd.output()?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        // a repository without commits is an empty log, not an error
        if stderr.contains("does not have any commits") {
            return Ok(String::new());
        }
        return Err(git2::Error::from_str(&format!("git log failed: {}", stderr)).into());
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Full pipeline: log text, parsed commits, layout coordinates
pub fn commits(
    git_info: &GitInfo,
    options: &LogOptions,
    layout: &dyn LayoutStrategy,
) -> LogiResult<Vec<Commit>> {
    let text = log_text(git_info, options)?;
    let mut commits = parse_log(&text);
    layout.assign(&mut commits);
    Ok(commits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::test_repo::TestRepo;
    use crate::graph::layout::LaneLayout;

    #[test]
    fn test_log_text_contains_commit_marker() {
        let test_repo = TestRepo::new();
        let git_info = GitInfo::new_from_path(test_repo.repo_path()).unwrap();

        let text = log_text(&git_info, &LogOptions::default()).unwrap();
        assert!(text.contains("commit "));
        assert!(text.contains("Initial commit"));
    }

    #[test]
    fn test_commits_pipeline_orders_oldest_first() {
        let test_repo = TestRepo::new();
        test_repo.commit_file("a.txt", "one", "second commit");
        test_repo.commit_file("a.txt", "two", "third commit");
        let git_info = GitInfo::new_from_path(test_repo.repo_path()).unwrap();

        let commits = commits(&git_info, &LogOptions::default(), &LaneLayout).unwrap();
        assert_eq!(commits.len(), 3);
        assert_eq!(commits[0].subject, "Initial commit");
        assert_eq!(commits[2].subject, "third commit");
        assert!(commits.iter().all(|c| c.position.is_some()));
    }

    #[test]
    fn test_max_commits_limits_output() {
        let test_repo = TestRepo::new();
        for i in 0..5 {
            test_repo.commit_file("a.txt", &format!("{}", i), &format!("commit {}", i));
        }
        let git_info = GitInfo::new_from_path(test_repo.repo_path()).unwrap();

        let options = LogOptions {
            max_commits: 3,
            ..LogOptions::default()
        };
        let commits = commits(&git_info, &options, &LaneLayout).unwrap();
        assert_eq!(commits.len(), 3);
    }
}
