use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::Result;
use git2::{Repository, Signature};
use git_guide::git::{GitRepository, Vcs};
use git_guide::prefs::PreferenceStore;
use git_guide::session::{Outcome, Session};
use git_guide::ui::{Palette, Prompter};
use git_guide::GuideError;
use tempfile::TempDir;

/// Test setup that creates a temporary git repository
struct TestRepo {
    _temp_dir: TempDir,
    repo_path: PathBuf,
    repo: Repository,
}

impl TestRepo {
    fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir()?;
        let repo_path = temp_dir.path().to_path_buf();

        let repo = Repository::init(&repo_path)?;

        // Configure git user for commits
        let mut config = repo.config()?;
        config.set_str("user.name", "Test User")?;
        config.set_str("user.email", "test@example.com")?;
        config.set_bool("commit.gpgsign", false)?;

        Ok(TestRepo {
            _temp_dir: temp_dir,
            repo_path,
            repo,
        })
    }

    fn write(&self, name: &str, content: &str) -> Result<()> {
        fs::write(self.repo_path.join(name), content)?;
        Ok(())
    }

    fn stage(&self, name: &str) -> Result<()> {
        let mut index = self.repo.index()?;
        index.add_path(Path::new(name))?;
        index.write()?;
        Ok(())
    }

    fn commit_index(&self, message: &str) -> Result<git2::Oid> {
        let mut index = self.repo.index()?;
        let signature = Signature::now("Test User", "test@example.com")?;
        let tree_id = index.write_tree()?;
        let tree = self.repo.find_tree(tree_id)?;

        let parent = match self.repo.head() {
            Ok(head) => Some(head.peel_to_commit()?),
            Err(_) => None,
        };
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        Ok(self
            .repo
            .commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)?)
    }

    fn head_message(&self) -> Result<String> {
        let commit = self.repo.head()?.peel_to_commit()?;
        Ok(commit.message().unwrap_or("").to_string())
    }

    fn open(&self) -> Result<GitRepository> {
        GitRepository::open_at(&self.repo_path)
    }
}

#[test]
fn open_outside_repository_fails() {
    let dir = tempfile::tempdir().unwrap();
    let result = GitRepository::open_at(dir.path());
    assert!(result.is_err());
}

#[test]
fn empty_repository_has_nothing_staged() -> Result<()> {
    let test_repo = TestRepo::new()?;
    test_repo.write("untracked.txt", "hello")?;

    assert!(!test_repo.open()?.has_staged_changes()?);
    Ok(())
}

#[test]
fn staged_file_in_unborn_repository_is_detected() -> Result<()> {
    let test_repo = TestRepo::new()?;
    test_repo.write("new.txt", "hello")?;
    test_repo.stage("new.txt")?;

    let repo = test_repo.open()?;
    assert!(repo.has_staged_changes()?);
    assert_eq!(repo.staged_files()?, ["new.txt"]);
    Ok(())
}

#[test]
fn unstaged_modification_is_not_staged() -> Result<()> {
    let test_repo = TestRepo::new()?;
    test_repo.write("file.txt", "one")?;
    test_repo.stage("file.txt")?;
    test_repo.commit_index("initial")?;

    test_repo.write("file.txt", "two")?;
    assert!(!test_repo.open()?.has_staged_changes()?);

    test_repo.stage("file.txt")?;
    assert!(test_repo.open()?.has_staged_changes()?);
    Ok(())
}

#[test]
fn current_branch_names() -> Result<()> {
    let test_repo = TestRepo::new()?;
    assert_eq!(test_repo.open()?.current_branch(), None);

    test_repo.write("file.txt", "one")?;
    test_repo.stage("file.txt")?;
    let oid = test_repo.commit_index("initial")?;

    let commit = test_repo.repo.find_commit(oid)?;
    test_repo.repo.branch("feature/BCDS-77-login", &commit, false)?;
    test_repo.repo.set_head("refs/heads/feature/BCDS-77-login")?;
    assert_eq!(
        test_repo.open()?.current_branch().as_deref(),
        Some("feature/BCDS-77-login")
    );

    test_repo.repo.set_head_detached(oid)?;
    assert_eq!(test_repo.open()?.current_branch(), None);
    Ok(())
}

#[test]
fn commit_records_message() -> Result<()> {
    let test_repo = TestRepo::new()?;
    test_repo.write("file.txt", "one")?;
    test_repo.stage("file.txt")?;

    let message = "feat(api): add endpoint\n\nRefs bcds-42";
    test_repo.open()?.commit(message)?;

    assert_eq!(test_repo.head_message()?.trim_end(), message);
    assert!(!test_repo.open()?.has_staged_changes()?);
    Ok(())
}

#[test]
fn commit_with_nothing_staged_fails_with_output() -> Result<()> {
    let test_repo = TestRepo::new()?;
    test_repo.write("file.txt", "one")?;
    test_repo.stage("file.txt")?;
    test_repo.commit_index("initial")?;

    let err = test_repo.open()?.commit("chore: nothing").unwrap_err();
    match err.downcast_ref::<GuideError>() {
        Some(GuideError::CommitFailed(output)) => assert!(!output.is_empty()),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(test_repo.head_message()?, "initial");
    Ok(())
}

#[test]
fn guided_session_commits_to_real_repository() -> Result<()> {
    let test_repo = TestRepo::new()?;
    test_repo.write("file.txt", "one")?;
    test_repo.stage("file.txt")?;

    let repo = test_repo.open()?;
    let store = PreferenceStore::for_dir(repo.workdir());
    let mut prompter = Prompter::new(
        Cursor::new(b"bcds-9\n3\nreadme\ndocument setup steps\nn\nn\n\ny\n".to_vec()),
        Vec::new(),
        Palette::plain(),
    );

    let outcome = Session::new(&repo, &store).run(&mut prompter)?;

    assert!(matches!(outcome, Outcome::Committed { .. }));
    assert_eq!(
        test_repo.head_message()?.trim_end(),
        "docs(readme): document setup steps\n\nRefs bcds-9"
    );
    assert!(test_repo.repo_path.join(".git-guide/.git-commit.json").exists());
    Ok(())
}
