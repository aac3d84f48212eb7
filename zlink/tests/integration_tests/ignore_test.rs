// tests/integration_tests/ignore_test.rs
use super::common::memory_workspace;
use anyhow::Result;
use zlink::Candidate;

#[test]
fn test_ignored_keyword_never_resurfaces() -> Result<()> {
    let mut workspace = memory_workspace(&[("a.md", "Alpha is great. [[Beta]] exists. It is.")]);
    workspace.classify()?;
    workspace.select("is", true)?;
    workspace.ignore_selected()?;

    assert_eq!(workspace.state().ignored, vec![Candidate::new("is", 2)]);
    workspace.classify()?;
    workspace.classify()?;
    assert!(workspace.state().candidates.iter().all(|c| c.keyword != "is"));
    assert!(workspace.page().iter().all(|c| c.keyword != "is"));
    Ok(())
}

#[test]
fn test_unignore_brings_keyword_back() -> Result<()> {
    let mut workspace = memory_workspace(&[("a.md", "the cat the hat")]);
    workspace.classify()?;
    workspace.select("the", true)?;
    workspace.ignore_selected()?;
    workspace.select_ignored("the", true)?;
    workspace.unignore_selected()?;

    assert!(workspace.state().ignored.is_empty());
    assert_eq!(workspace.state().candidates.first(), Some(&Candidate::new("the", 2)));
    Ok(())
}

#[test]
fn test_selection_cleared_by_every_action() -> Result<()> {
    let mut workspace = memory_workspace(&[("a.md", "one two three two")]);
    workspace.classify()?;
    workspace.select("one", true)?;
    workspace.select("two", true)?;
    workspace.ignore_selected()?;

    let state = workspace.state();
    assert!(state.candidates.iter().all(|c| !c.selected));
    assert!(state.ignored.iter().all(|c| !c.selected));
    assert_eq!(state.ignored.len(), 2);
    Ok(())
}
