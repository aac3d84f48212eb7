// tests/integration_tests/exclusion_test.rs
use super::common::{keywords_with_counts, memory_workspace};
use anyhow::Result;

#[test]
fn test_excluded_documents_not_counted_or_rewritten() -> Result<()> {
    let mut workspace = memory_workspace(&[
        ("archive/2019.md", "Alpha Alpha Alpha"),
        ("notes/archive/2020.md", "Alpha"),
        ("notes/today.md", "Alpha today"),
    ]);
    workspace.configure(Some("archive/".to_owned()), None)?;

    assert_eq!(
        keywords_with_counts(&workspace),
        vec![("Alpha".to_owned(), 1), ("today".to_owned(), 1)]
    );

    workspace.select("Alpha", true)?;
    let report = workspace.link_selected(|_| {})?;

    assert_eq!(report.total, 1);
    assert_eq!(report.changed, vec!["notes/today.md"]);
    assert_eq!(workspace.store().get("archive/2019.md"), Some("Alpha Alpha Alpha"));
    assert_eq!(workspace.store().get("notes/archive/2020.md"), Some("Alpha"));
    assert_eq!(workspace.store().get("notes/today.md"), Some("[[Alpha]] today"));
    Ok(())
}

#[test]
fn test_links_in_excluded_documents_do_not_hide_candidates() -> Result<()> {
    let mut workspace = memory_workspace(&[
        ("archive/old.md", "[[Alpha]]"),
        ("new.md", "Alpha"),
    ]);
    workspace.configure(Some("archive/".to_owned()), None)?;
    assert_eq!(keywords_with_counts(&workspace), vec![("Alpha".to_owned(), 1)]);
    Ok(())
}

#[test]
fn test_clearing_exclusion_restores_documents() -> Result<()> {
    let mut workspace = memory_workspace(&[("archive/a.md", "kept"), ("b.md", "seen")]);
    workspace.configure(Some("archive/".to_owned()), None)?;
    assert_eq!(workspace.state().candidates.len(), 1);

    workspace.configure(Some(String::new()), None)?;
    assert_eq!(workspace.state().candidates.len(), 2);
    Ok(())
}
