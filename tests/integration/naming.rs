use crate::support::{write_resource, Workspace};
use armory::{validate_name, CapabilityPort, ErrorKind, NameError, Skill};

const REJECTED: &[(&str, NameError)] = &[
    ("..", NameError::InvalidCharacter('.')),
    ("../secrets", NameError::InvalidCharacter('.')),
    ("a/b", NameError::InvalidCharacter('/')),
    ("a\\b", NameError::InvalidCharacter('\\')),
    ("nul\0byte", NameError::InvalidCharacter('\0')),
    ("Upper", NameError::InvalidCharacter('U')),
    ("snake_case", NameError::InvalidCharacter('_')),
    ("-leading", NameError::HyphenPlacement),
    ("trailing-", NameError::HyphenPlacement),
    ("double--hyphen", NameError::ConsecutiveHyphens),
    ("", NameError::Empty),
];

#[test]
fn rejected_names_fail_everywhere_with_specific_errors() {
    let ws = Workspace::new();
    write_resource::<Skill>(&ws.project_root::<Skill>(), "real", "exists");
    let catalog = ws.catalog::<Skill>();
    let port: &dyn CapabilityPort<Skill> = &catalog;
    port.discover().unwrap();

    for (name, expected) in REJECTED {
        assert_eq!(validate_name(name), Err(*expected), "validator: {name:?}");

        let err = port.load_full_metadata(name).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidName, "load: {name:?}");
        assert_eq!(err.name_error(), Some(*expected), "load: {name:?}");

        let err = port.activate(name).unwrap_err();
        assert_eq!(err.name_error(), Some(*expected), "activate: {name:?}");
    }
    assert!(port.list_active().unwrap().is_empty());
}

#[test]
fn length_boundary() {
    let max = format!("{}-{}", "a".repeat(40), "b".repeat(23));
    assert_eq!(max.len(), 64);
    assert!(validate_name(&max).is_ok());

    let over = format!("{}c", max);
    assert_eq!(validate_name(&over), Err(NameError::TooLong { len: 65 }));

    let ws = Workspace::new();
    let catalog = ws.catalog::<Skill>();
    let err = catalog.load_full(&over).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidName);

    // A valid name that is simply absent is a different failure.
    let err = catalog.load_full(&max).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FileNotFound);
}

#[test]
fn longest_name_round_trips_through_discovery() {
    let max = "x".repeat(64);
    let ws = Workspace::new();
    write_resource::<Skill>(&ws.project_root::<Skill>(), &max, "long");

    let catalog = ws.catalog::<Skill>();
    assert_eq!(catalog.discover().unwrap().total_count, 1);
    assert!(catalog.activate(&max).unwrap());
}
