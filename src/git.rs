use std::path::Path;
use std::process::Command;

use git2::{Error as Git2Error, Repository};

/// Creates a `Command` for git with `-C <repo_path>` and the given args pre-configured.
pub fn git_cmd<P: AsRef<Path>>(repo_path: P, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.arg("-C").arg(repo_path.as_ref().as_os_str()).args(args);
    cmd
}

pub mod diff;
pub mod log;
pub mod test_repo;

/// Handle to the repository being viewed
pub struct GitInfo {
    pub repository: Repository,
}

impl GitInfo {
    pub fn new() -> Result<Self, Git2Error> {
        let repository = Repository::open(".")?;
        Ok(Self { repository })
    }

    pub fn new_from_path<P: AsRef<Path>>(path: P) -> Result<Self, Git2Error> {
        let repository = Repository::open(path)?;
        Ok(Self { repository })
    }

    /// Working directory of the repository; bare repositories are not supported
    pub fn workdir(&self) -> Result<&Path, Git2Error> {
        self.repository
            .workdir()
            .ok_or_else(|| Git2Error::from_str("repository has no working directory"))
    }

    pub fn current_branch(&self) -> Option<String> {
        self.repository
            .head()
            .ok()
            .and_then(|head| head.shorthand().map(String::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::test_repo::TestRepo;

    #[test]
    fn test_current_branch_on_fresh_repo() {
        let test_repo = TestRepo::new();
        let git_info = GitInfo::new_from_path(test_repo.repo_path()).unwrap();
        assert_eq!(git_info.current_branch().as_deref(), Some("main"));
    }

    #[test]
    fn test_workdir_matches_test_repo() {
        let test_repo = TestRepo::new();
        let git_info = GitInfo::new_from_path(test_repo.repo_path()).unwrap();
        assert_eq!(
            git_info.workdir().unwrap().canonicalize().unwrap(),
            test_repo.repo_path().canonicalize().unwrap()
        );
    }
}
