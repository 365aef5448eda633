use crate::support::{write_resource, write_spec, Workspace};
use armory::{ErrorKind, Skill, Subagent};
use std::fs;

#[test]
fn body_is_loaded_on_demand_and_cached() {
    let ws = Workspace::new();
    let path = write_spec::<Skill>(
        &ws.project_root::<Skill>(),
        "pdf-tools",
        "name: pdf-tools\ndescription: Work with PDFs\nallowed-tools: Read Bash",
        "\n# PDF tools\n\nUse pdftotext first.\n",
    );

    let catalog = ws.catalog::<Skill>();
    catalog.discover().unwrap();
    assert!(!catalog.get_by_name("pdf-tools").unwrap().body_loaded);

    let loaded = catalog.load_full("pdf-tools").unwrap();
    assert_eq!(loaded.body, "# PDF tools\n\nUse pdftotext first.");
    assert!(!loaded.body.contains("---"));
    assert!(loaded.raw_frontmatter.contains("allowed-tools"));
    assert_eq!(loaded.allowed_tools, vec!["Read", "Bash"]);

    // Cached: the file is no longer consulted.
    fs::remove_file(&path).unwrap();
    let again = catalog.load_full("pdf-tools").unwrap();
    assert_eq!(again, loaded);
    assert!(catalog.get_by_name("pdf-tools").unwrap().body_loaded);
}

#[test]
fn deleted_file_after_discovery_is_file_not_found() {
    let ws = Workspace::new();
    let path = write_resource::<Subagent>(&ws.project_root::<Subagent>(), "planner", "plans");

    let catalog = ws.catalog::<Subagent>();
    catalog.discover().unwrap();
    fs::remove_file(&path).unwrap();

    let err = catalog.load_full("planner").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FileNotFound);
}

#[test]
fn subagent_extension_fields_survive_loading() {
    let ws = Workspace::new();
    write_spec::<Subagent>(
        &ws.project_root::<Subagent>(),
        "deep-thinker",
        "name: deep-thinker\ndescription: Thinks hard\nmodel: large\nmax_actions: 12\nthinking_enabled: true\nthinking_budget: 4096\nallowed-tools:\n  - Read\n  - Grep",
        "Think step by step.",
    );

    let catalog = ws.catalog::<Subagent>();
    catalog.discover().unwrap();
    let agent = catalog.load_full("deep-thinker").unwrap();

    assert_eq!(agent.extension.model.as_deref(), Some("large"));
    assert_eq!(agent.extension.max_actions, Some(12));
    assert_eq!(agent.extension.thinking_enabled, Some(true));
    assert_eq!(agent.extension.thinking_budget, Some(4096));
    assert_eq!(agent.allowed_tools, vec!["Read", "Grep"]);
    assert!(agent.allows_tool("Grep"));
    assert!(!agent.allows_tool("Bash"));
    assert_eq!(agent.body, "Think step by step.");
}

#[test]
fn load_without_discovery_searches_roots_in_priority_order() {
    let ws = Workspace::new();
    write_resource::<Skill>(&ws.claude_root::<Skill>(), "fmt", "claude copy");
    write_resource::<Skill>(&ws.user_root::<Skill>(), "fmt", "user copy");

    let catalog = ws.catalog::<Skill>();
    let loaded = catalog.load_full("fmt").unwrap();
    assert_eq!(loaded.description, "claude copy");
    assert!(catalog.is_empty());
}
