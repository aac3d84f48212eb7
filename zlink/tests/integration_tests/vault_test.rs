// tests/integration_tests/vault_test.rs
use super::common::{create_test_file, open_vault_workspace, read_test_file, setup_test_vault};
use anyhow::Result;
use zlink::{LinkerState, VaultStore, Workspace};

#[test]
fn test_vault_scan_skips_hidden_and_non_markdown() -> Result<()> {
    let temp_dir = setup_test_vault()?;
    let mut workspace = open_vault_workspace(temp_dir.path())?;
    workspace.classify()?;

    let rust = workspace
        .state()
        .candidates
        .iter()
        .find(|c| c.keyword == "Rust")
        .map(|c| c.count);
    // rust.md has three, borrowing.md one, archive/old.md three.
    assert_eq!(rust, Some(7));
    assert!(workspace.state().candidates.iter().all(|c| c.keyword != "config"));
    assert!(workspace.state().candidates.iter().all(|c| c.keyword != "Borrowing"));
    Ok(())
}

#[test]
fn test_vault_link_with_exclusion() -> Result<()> {
    let temp_dir = setup_test_vault()?;
    let mut workspace = open_vault_workspace(temp_dir.path())?;
    workspace.configure(Some("archive/".to_owned()), None)?;
    workspace.select("Rust", true)?;
    let report = workspace.link_selected(|_| {})?;

    assert!(report.is_success());
    assert_eq!(report.total, 2);
    assert_eq!(
        read_test_file(temp_dir.path(), "rust.md")?,
        "# [[Rust]]\n[[Rust]] ownership makes [[Rust]] safe. See [[Borrowing]]."
    );
    assert_eq!(
        read_test_file(temp_dir.path(), "archive/old.md")?,
        "Rust Rust Rust legacy notes."
    );
    assert_eq!(read_test_file(temp_dir.path(), ".obsidian/app.md")?, "Rust config");
    Ok(())
}

#[test]
fn test_vault_state_persists_between_runs() -> Result<()> {
    let temp_dir = setup_test_vault()?;
    let state_path = temp_dir.path().join(zlink::models::STATE_FILE_NAME);
    {
        let mut workspace = Workspace::new(VaultStore::open(temp_dir.path())?, LinkerState::default())
            .with_state_file(&state_path);
        workspace.configure(None, Some(3))?;
        workspace.select("notes", true)?;
        workspace.ignore_selected()?;
    }

    let reloaded = LinkerState::load(&state_path);
    assert_eq!(reloaded.page_size, 3);
    assert!(reloaded.is_ignored("notes"));
    assert!(reloaded.candidates.iter().all(|c| c.keyword != "notes"));
    Ok(())
}

#[test]
fn test_vault_ignore_file_limits_documents() -> Result<()> {
    let temp_dir = setup_test_vault()?;
    create_test_file(temp_dir.path(), ".zlinkignore", "archive/\n")?;
    let mut workspace = open_vault_workspace(temp_dir.path())?;
    workspace.classify()?;

    assert!(workspace.state().candidates.iter().all(|c| c.keyword != "legacy"));
    Ok(())
}
