use crate::support::{write_resource, Workspace};
use armory::{Skill, SourceType};
use std::fs;

#[test]
fn active_resource_survives_deletion_from_disk() {
    let ws = Workspace::new();
    let root = ws.project_root::<Skill>();
    write_resource::<Skill>(&root, "kept", "k");
    write_resource::<Skill>(&root, "dropped", "d");

    let catalog = ws.catalog::<Skill>();
    catalog.discover().unwrap();
    catalog.activate("kept").unwrap();

    fs::remove_dir_all(root.join("kept")).unwrap();
    fs::remove_dir_all(root.join("dropped")).unwrap();
    let result = catalog.discover().unwrap();

    assert_eq!(result.total_count, 0);
    assert!(catalog.get_by_name("kept").unwrap().active);
    assert!(catalog.get_by_name("dropped").is_err());

    catalog.deactivate("kept").unwrap();
    catalog.discover().unwrap();
    assert!(catalog.get_by_name("kept").is_err());
}

#[test]
fn refound_active_resource_takes_fresh_metadata() {
    let ws = Workspace::new();
    write_resource::<Skill>(&ws.user_root::<Skill>(), "drift", "old");

    let catalog = ws.catalog::<Skill>();
    catalog.discover().unwrap();
    catalog.activate("drift").unwrap();
    catalog.load_full("drift").unwrap();

    write_resource::<Skill>(&ws.project_root::<Skill>(), "drift", "new");
    catalog.discover().unwrap();

    let info = catalog.get_by_name("drift").unwrap();
    assert_eq!(info.description, "new");
    assert_eq!(info.source, SourceType::Project);
    assert!(info.active);
    assert!(!info.body_loaded);
}

#[test]
fn new_files_appear_on_rediscovery() {
    let ws = Workspace::new();
    let catalog = ws.catalog::<Skill>();
    assert_eq!(catalog.discover().unwrap().total_count, 0);

    write_resource::<Skill>(&ws.claude_root::<Skill>(), "late-arrival", "late");
    assert_eq!(catalog.discover().unwrap().total_count, 1);
    assert_eq!(
        catalog.get_by_name("late-arrival").unwrap().source,
        SourceType::ProjectClaude
    );
}
