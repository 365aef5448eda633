use crate::support::{write_resource, write_spec, Workspace};
use armory::{CapabilityPort, CapabilityResource, ErrorKind, Skill, SkillExtension};
use std::fs;

#[test]
fn validate_all_reports_each_failure_without_aborting() {
    let ws = Workspace::new();
    let root = ws.project_root::<Skill>();
    write_resource::<Skill>(&root, "healthy", "h");
    write_resource::<Skill>(&root, "vanishing", "v");
    write_resource::<Skill>(&root, "also-healthy", "h");

    let catalog = ws.catalog::<Skill>();
    let port: &dyn CapabilityPort<Skill> = &catalog;
    port.discover().unwrap();
    port.register(CapabilityResource::<SkillExtension>::programmatic("in-code", "c"))
        .unwrap();
    fs::remove_dir_all(root.join("vanishing")).unwrap();

    let failures = port.validate_all().unwrap();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures["vanishing"].kind(), ErrorKind::FileNotFound);
}

#[test]
fn validate_all_on_clean_catalog_is_empty() {
    let ws = Workspace::new();
    write_resource::<Skill>(&ws.project_root::<Skill>(), "clean", "c");
    let catalog = ws.catalog::<Skill>();
    catalog.discover().unwrap();
    assert!(catalog.validate_all().is_empty());
}

#[cfg(unix)]
#[test]
fn symlinked_resource_directory_validates_under_link_name() {
    let ws = Workspace::new();
    let target = ws.home.join("store");
    write_spec::<Skill>(&target, "target-dir", "name: linked\ndescription: l", "Linked body.");
    let root = ws.project_root::<Skill>();
    fs::create_dir_all(&root).unwrap();
    std::os::unix::fs::symlink(target.join("target-dir"), root.join("linked")).unwrap();

    let catalog = ws.catalog::<Skill>();
    let discovered = catalog.discover().unwrap();
    assert_eq!(discovered.total_count, 1);
    assert!(discovered.skipped.is_empty());
    assert!(catalog.validate_all().is_empty());
    assert_eq!(catalog.load_full("linked").unwrap().body, "Linked body.");
}
