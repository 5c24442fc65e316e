use std::fs;

use pscan_rs::{HostList, HostsError};

#[test]
fn add_twice_reports_already_exists() {
    let mut hl = HostList::new();
    hl.add("a").unwrap();
    hl.add("b").unwrap();
    let err = hl.add("a").unwrap_err();
    assert!(matches!(err, HostsError::AlreadyExists(_)));
    assert_eq!(hl.hosts(), ["a", "b"]);
}

#[test]
fn remove_then_remove_again_reports_not_exists() {
    let mut hl = HostList::new();
    for h in ["host1", "host2", "host3"] {
        hl.add(h).unwrap();
    }
    hl.remove("host1").unwrap();
    assert_eq!(hl.hosts(), ["host2", "host3"]);

    let err = hl.remove("host1").unwrap_err();
    assert!(matches!(err, HostsError::NotExists(_)));
    assert_eq!(hl.hosts(), ["host2", "host3"]);
}

#[test]
fn order_is_lexicographic_after_mutation() {
    let mut hl = HostList::new();
    for h in ["zulu", "alpha", "mike"] {
        hl.add(h).unwrap();
    }
    assert_eq!(hl.hosts(), ["alpha", "mike", "zulu"]);
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hosts");

    let mut hl1 = HostList::new();
    hl1.add("host1").unwrap();
    hl1.add("example.com").unwrap();
    hl1.save(&path).unwrap();

    let mut hl2 = HostList::new();
    hl2.load(&path).unwrap();
    assert_eq!(hl1, hl2);
    assert_eq!(fs::read_to_string(&path).unwrap(), "example.com\nhost1\n");
}

#[test]
fn save_truncates_previous_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hosts");
    fs::write(&path, "old1\nold2\nold3\n").unwrap();

    let mut hl = HostList::new();
    hl.add("new").unwrap();
    hl.save(&path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
}

#[test]
fn load_missing_file_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist");

    let mut empty = HostList::new();
    empty.load(&path).unwrap();
    assert!(empty.is_empty());

    let mut populated = HostList::new();
    populated.add("keep").unwrap();
    populated.load(&path).unwrap();
    assert_eq!(populated.hosts(), ["keep"]);
}

#[test]
fn load_keeps_lines_verbatim_without_dedup() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hosts");
    fs::write(&path, "b\r\n a\nb\n").unwrap();

    let mut hl = HostList::new();
    hl.load(&path).unwrap();
    assert_eq!(hl.hosts(), ["b", " a", "b"]);
    assert_eq!(hl.len(), 3);
}

#[test]
fn load_appends_to_existing_entries() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hosts");
    fs::write(&path, "beta\n").unwrap();

    let mut hl = HostList::new();
    hl.add("alpha").unwrap();
    hl.load(&path).unwrap();
    assert_eq!(hl.hosts(), ["alpha", "beta"]);
}

#[test]
fn load_directory_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut hl = HostList::new();
    let err = hl.load(dir.path()).unwrap_err();
    assert!(matches!(err, HostsError::Io { .. }));
}

#[test]
fn save_into_missing_directory_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("hosts");
    let err = HostList::new().save(&path).unwrap_err();
    assert!(matches!(err, HostsError::Io { .. }));
}

#[cfg(unix)]
#[test]
fn saved_file_is_owner_writable() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hosts");
    HostList::new().save(&path).unwrap();
    let mode = fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o600, 0o600);
}
