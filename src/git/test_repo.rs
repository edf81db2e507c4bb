use git2::{Oid, Repository, Signature};
use std::{fs, path::Path};
use tempfile::TempDir;

/// Throwaway repository for tests, deleted when dropped
pub struct TestRepo {
    pub repo: Repository,
    _temp_dir: TempDir,
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRepo {
    pub fn new() -> Self {
        let local_dir = tempfile::tempdir().unwrap();
        let local_repo_path = local_dir.path();

        // Initialize a new Git repository
        let local_repo = Repository::init(local_repo_path).unwrap();

        // Configure git user identity for shell commands
        let mut config = local_repo.config().unwrap();
        config.set_str("user.name", "Test User").unwrap();
        config.set_str("user.email", "test@example.com").unwrap();

        // Set the default branch to main (libgit2 defaults to master)
        local_repo.set_head("refs/heads/main").unwrap();

        // Create a test file and commit it
        let file_path = local_repo_path.join("initial_file.txt");
        fs::write(&file_path, "test content").unwrap();

        let mut index = local_repo.index().unwrap();
        index
            .add_path(std::path::Path::new("initial_file.txt"))
            .unwrap();
        index.write().unwrap();
        let tree_id = index.write_tree().unwrap();

        let signature = Signature::now("Test User", "test@example.com").unwrap();
        local_repo
            .commit(
                Some("refs/heads/main"),
                &signature,
                &signature,
                "Initial commit",
                &local_repo.find_tree(tree_id).unwrap(),
                &[],
            )
            .expect("Failed to commit to local repo");

        Self {
            repo: local_repo,
            _temp_dir: local_dir,
        }
    }

    pub fn repo_path(&self) -> &Path {
        self.repo.workdir().unwrap()
    }

    /// Writes (or rewrites) a file and commits it on the current branch
    pub fn commit_file(&self, file_name: &str, content: &str, message: &str) -> Oid {
        fs::write(self.repo_path().join(file_name), content).unwrap();

        let repo = &self.repo;
        let mut index = repo.index().unwrap();
        index.add_path(Path::new(file_name)).unwrap();
        index.write().unwrap();
        let tree_id = index.write_tree().unwrap();

        let sig = Signature::now("Test User", "test@example.com").unwrap();
        let parent = repo.head().unwrap().peel_to_commit().unwrap();
        repo.commit(
            Some("HEAD"),
            &sig,
            &sig,
            message,
            &repo.find_tree(tree_id).unwrap(),
            &[&parent],
        )
        .unwrap()
    }

    /// Creates a branch at the current HEAD without switching to it
    pub fn create_branch(&self, name: &str) {
        let head = self.repo.head().unwrap().peel_to_commit().unwrap();
        self.repo.branch(name, &head, false).unwrap();
    }

    pub fn checkout_branch(&self, name: &str) {
        self.repo
            .set_head(&format!("refs/heads/{}", name))
            .unwrap();
        let mut checkout = git2::build::CheckoutBuilder::new();
        checkout.force();
        self.repo.checkout_head(Some(&mut checkout)).unwrap();
    }

    /// Merges another branch into the current HEAD with a two-parent
    /// commit. The merged tree is just HEAD's tree; these repositories
    /// only need the history shape.
    pub fn merge_branch(&self, name: &str, message: &str) -> Oid {
        let repo = &self.repo;
        let head = repo.head().unwrap().peel_to_commit().unwrap();
        let other = repo
            .find_branch(name, git2::BranchType::Local)
            .unwrap()
            .get()
            .peel_to_commit()
            .unwrap();

        let sig = Signature::now("Test User", "test@example.com").unwrap();
        let tree = head.tree().unwrap();
        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &[&head, &other])
            .unwrap()
    }

    /// Puts a lightweight tag on the current HEAD
    pub fn tag_head(&self, name: &str) {
        let target = self
            .repo
            .head()
            .unwrap()
            .peel(git2::ObjectType::Commit)
            .unwrap();
        self.repo.tag_lightweight(name, &target, false).unwrap();
    }
}
