// tests/integration_tests/classification_test.rs
use super::common::{keywords_with_counts, memory_workspace};
use anyhow::Result;
use zlink::{Candidate, LinkerState, MemoryStore, Workspace};

fn pairs(items: &[(&str, usize)]) -> Vec<(String, usize)> {
    items.iter().map(|(k, c)| ((*k).to_owned(), *c)).collect()
}

#[test]
fn test_scenario_already_linked_keyword_is_absent() -> Result<()> {
    let mut workspace = memory_workspace(&[("a.md", "Alpha is great. [[Beta]] exists.")]);
    workspace.classify()?;

    assert_eq!(
        keywords_with_counts(&workspace),
        pairs(&[("Alpha", 1), ("is", 1), ("great", 1), ("exists", 1)])
    );
    assert!(workspace.link_index().contains("Beta"));
    Ok(())
}

#[test]
fn test_count_equals_bare_occurrences() -> Result<()> {
    let mut workspace = memory_workspace(&[
        ("a.md", "graph theory and graph search"),
        ("b.md", "search the graph"),
        ("c.md", "theory"),
    ]);
    workspace.classify()?;

    assert_eq!(
        keywords_with_counts(&workspace),
        pairs(&[
            ("graph", 3),
            ("theory", 2),
            ("search", 2),
            ("and", 1),
            ("the", 1),
        ])
    );
    Ok(())
}

#[test]
fn test_linked_and_ignored_never_candidates() -> Result<()> {
    let state = LinkerState {
        ignored: vec![Candidate::new("the", 3), Candidate::new("Zettel", 1)],
        ..LinkerState::default()
    };
    let store: MemoryStore = [
        ("a.md", "the note links [[Zettel]] and the Zettel"),
        ("b.md", "the end of Zettel"),
    ]
    .into_iter()
    .collect();
    let mut workspace = Workspace::new(store, state);
    workspace.classify()?;

    let state = workspace.state();
    for keyword in ["the", "Zettel"] {
        assert!(
            state.candidates.iter().all(|c| c.keyword != keyword),
            "{keyword} should not be a candidate"
        );
    }
    assert!(workspace.link_index().contains("Zettel"));
    assert_eq!(state.ignored, vec![Candidate::new("the", 3)]);
    assert!(
        state
            .ignored
            .iter()
            .all(|ignored| !workspace.link_index().contains(&ignored.keyword))
    );
    Ok(())
}

#[test]
fn test_reclassification_replaces_list() -> Result<()> {
    let mut workspace = memory_workspace(&[("a.md", "first words")]);
    workspace.classify()?;
    let first = keywords_with_counts(&workspace);
    workspace.classify()?;
    assert_eq!(keywords_with_counts(&workspace), first);
    Ok(())
}

#[test]
fn test_cjk_keywords_counted_separately() -> Result<()> {
    let mut workspace = memory_workspace(&[("a.md", "笔记Note 笔记 note")]);
    workspace.classify()?;
    assert_eq!(
        keywords_with_counts(&workspace),
        pairs(&[("笔记", 2), ("Note", 1), ("note", 1)])
    );
    Ok(())
}
