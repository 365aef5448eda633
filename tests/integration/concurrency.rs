use crate::support::{write_resource, Workspace};
use armory::{CapabilityPort, Skill};
use std::sync::Arc;
use std::thread;

#[test]
fn concurrent_discovery_matches_sequential() {
    let ws = Workspace::new();
    for i in 0..20 {
        write_resource::<Skill>(&ws.project_root::<Skill>(), &format!("skill-{i}"), "project");
    }
    for i in 10..30 {
        write_resource::<Skill>(&ws.user_root::<Skill>(), &format!("skill-{i}"), "user");
    }

    let sequential = ws.catalog::<Skill>();
    sequential.discover().unwrap();
    let expected = sequential.list_all();
    assert_eq!(expected.len(), 30);

    let catalog: Arc<dyn CapabilityPort<Skill>> = Arc::new(ws.catalog::<Skill>());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let catalog = Arc::clone(&catalog);
            thread::spawn(move || {
                let result = catalog.discover().unwrap();
                assert_eq!(result.total_count, 30);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(catalog.list_all().unwrap(), expected);
}

#[test]
fn discovery_interleaved_with_activation_and_loading() {
    let ws = Workspace::new();
    for i in 0..10 {
        write_resource::<Skill>(&ws.project_root::<Skill>(), &format!("tool-{i}"), "t");
    }
    let catalog = Arc::new(ws.catalog::<Skill>());
    catalog.discover().unwrap();

    let mut handles = Vec::new();
    for i in 0..10 {
        let catalog = Arc::clone(&catalog);
        handles.push(thread::spawn(move || {
            let name = format!("tool-{i}");
            catalog.activate(&name).unwrap();
            let loaded = catalog.load_full(&name).unwrap();
            assert_eq!(loaded.body, format!("Instructions for {name}."));
        }));
    }
    for _ in 0..4 {
        let catalog = Arc::clone(&catalog);
        handles.push(thread::spawn(move || {
            catalog.discover().unwrap();
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(catalog.list_active().len(), 10);
    assert_eq!(catalog.list_all().len(), 10);
}
