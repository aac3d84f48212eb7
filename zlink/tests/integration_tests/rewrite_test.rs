// tests/integration_tests/rewrite_test.rs
use super::common::{keywords_with_counts, memory_workspace};
use anyhow::Result;
use zlink::{DocumentOutcome, LinkerState, MemoryStore, Workspace};

#[test]
fn test_scenario_link_then_reclassify() -> Result<()> {
    let mut workspace = memory_workspace(&[("a.md", "Alpha is great. [[Beta]] exists.")]);
    workspace.classify()?;
    workspace.select("Alpha", true)?;
    let report = workspace.link_selected(|_| {})?;

    assert!(report.is_success());
    assert_eq!(
        workspace.store().get("a.md"),
        Some("[[Alpha]] is great. [[Beta]] exists.")
    );
    assert!(
        keywords_with_counts(&workspace)
            .iter()
            .all(|(keyword, _)| keyword != "Alpha")
    );
    assert!(workspace.link_index().contains("Alpha"));
    Ok(())
}

#[test]
fn test_documents_without_keyword_not_written() -> Result<()> {
    let mut workspace = memory_workspace(&[
        ("a.md", "Alpha"),
        ("b.md", "Gamma only\n"),
        ("c.md", "Alphabet soup"),
    ]);
    workspace.classify()?;
    workspace.select("Alpha", true)?;
    workspace.link_selected(|_| {})?;

    assert_eq!(workspace.store().writes(), ["a.md".to_owned()].as_slice());
    assert_eq!(workspace.store().get("b.md"), Some("Gamma only\n"));
    assert_eq!(workspace.store().get("c.md"), Some("Alphabet soup"));
    Ok(())
}

#[test]
fn test_several_keywords_one_write_per_document() -> Result<()> {
    let mut workspace = memory_workspace(&[("a.md", "Alpha meets Gamma and Alpha")]);
    workspace.classify()?;
    workspace.select("Alpha", true)?;
    workspace.select("Gamma", true)?;
    workspace.link_selected(|_| {})?;

    assert_eq!(workspace.store().writes().len(), 1);
    assert_eq!(
        workspace.store().get("a.md"),
        Some("[[Alpha]] meets [[Gamma]] and [[Alpha]]")
    );
    Ok(())
}

#[test]
fn test_progress_is_monotonic_and_complete() -> Result<()> {
    let mut workspace = memory_workspace(&[("a.md", "x"), ("b.md", "x"), ("c.md", "y")]);
    workspace.classify()?;
    workspace.select("x", true)?;

    let mut events = Vec::new();
    workspace.link_selected(|progress| {
        events.push((progress.processed, progress.total, progress.outcome));
    })?;

    assert_eq!(
        events,
        vec![
            (1, 3, DocumentOutcome::Changed),
            (2, 3, DocumentOutcome::Changed),
            (3, 3, DocumentOutcome::Unchanged),
        ]
    );
    Ok(())
}

#[test]
fn test_round_trip_restores_original() -> Result<()> {
    let original = "Today I learned about Zettelkasten.\n";
    let mut workspace = memory_workspace(&[("a.md", original)]);
    workspace.classify()?;
    workspace.select("Zettelkasten", true)?;
    workspace.link_selected(|_| {})?;
    assert_eq!(
        workspace.store().get("a.md"),
        Some("Today I learned about [[Zettelkasten]].\n")
    );

    workspace.unlink(&["Zettelkasten".to_owned()], |_| {})?;
    assert_eq!(workspace.store().get("a.md"), Some(original));
    assert!(
        keywords_with_counts(&workspace)
            .iter()
            .any(|(keyword, count)| keyword == "Zettelkasten" && *count == 1)
    );
    Ok(())
}

#[test]
fn test_failures_do_not_roll_back_or_abort() -> Result<()> {
    let mut store: MemoryStore = [
        ("a.md", "Alpha first"),
        ("b.md", "Alpha second"),
        ("c.md", "Alpha third"),
    ]
    .into_iter()
    .collect();
    store.fail_writes_for("b.md");
    let mut workspace = Workspace::new(store, LinkerState::default());
    workspace.classify()?;
    workspace.select("Alpha", true)?;

    let report = workspace.link_selected(|_| {})?;

    assert_eq!(report.changed, vec!["a.md", "c.md"]);
    assert_eq!(report.failed, vec!["b.md"]);
    assert_eq!(workspace.store().get("a.md"), Some("[[Alpha]] first"));
    assert_eq!(workspace.store().get("b.md"), Some("Alpha second"));
    assert_eq!(workspace.store().get("c.md"), Some("[[Alpha]] third"));
    assert!(workspace.state().candidates.iter().all(|c| !c.selected));
    Ok(())
}

#[test]
fn test_link_with_nothing_selected_changes_nothing() -> Result<()> {
    let mut workspace = memory_workspace(&[("a.md", "Alpha")]);
    workspace.classify()?;
    let report = workspace.link_selected(|_| {})?;
    assert!(report.changed.is_empty());
    assert!(workspace.store().writes().is_empty());
    Ok(())
}
