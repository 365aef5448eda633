use crate::support::{write_resource, Workspace};
use armory::{ErrorKind, Skill};

#[test]
fn activation_lifecycle() {
    let ws = Workspace::new();
    write_resource::<Skill>(&ws.project_root::<Skill>(), "git-helper", "git");
    write_resource::<Skill>(&ws.project_root::<Skill>(), "idle", "never activated");

    let catalog = ws.catalog::<Skill>();
    catalog.discover().unwrap();
    assert!(catalog.list_active().is_empty());

    assert!(catalog.activate("git-helper").unwrap());
    let active: Vec<String> = catalog.list_active().into_iter().map(|r| r.name).collect();
    assert_eq!(active, vec!["git-helper"]);
    assert!(catalog.is_active("git-helper"));

    assert!(catalog.deactivate("git-helper").unwrap());
    assert!(catalog.list_active().is_empty());

    assert!(catalog.activate("git-helper").unwrap());
    assert_eq!(catalog.list_active().len(), 1);

    let all = catalog.list_all();
    assert_eq!(all.len(), 2);
    assert!(all.iter().find(|r| r.name == "git-helper").unwrap().active);
    assert!(!all.iter().find(|r| r.name == "idle").unwrap().active);
}

#[test]
fn activating_unknown_name_is_not_found() {
    let ws = Workspace::new();
    write_resource::<Skill>(&ws.project_root::<Skill>(), "known", "k");
    let catalog = ws.catalog::<Skill>();
    catalog.discover().unwrap();

    let err = catalog.activate("unknown").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(catalog.list_active().is_empty());

    let err = catalog.deactivate("known").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn activation_requires_prior_discovery() {
    let ws = Workspace::new();
    write_resource::<Skill>(&ws.project_root::<Skill>(), "pending", "p");
    let catalog = ws.catalog::<Skill>();

    assert_eq!(catalog.activate("pending").unwrap_err().kind(), ErrorKind::NotFound);
    catalog.discover().unwrap();
    assert!(catalog.activate("pending").unwrap());
}
