use modkit_fs::NormalizedPath;

#[test]
fn test_normalize_backslashes_to_forward() {
    let path = NormalizedPath::new("Assets\\Icons\\sync.png");
    assert_eq!(path.as_str(), "Assets/Icons/sync.png");
}

#[test]
fn test_normalize_mixed_slashes() {
    let path = NormalizedPath::new("Assets/Icons\\sync.png");
    assert_eq!(path.as_str(), "Assets/Icons/sync.png");
}

#[test]
fn test_join_onto_empty_has_no_prefix() {
    let joined = NormalizedPath::empty().join("a.txt");
    assert_eq!(joined.as_str(), "a.txt");
}

#[test]
fn test_join_nested_segments() {
    let joined = NormalizedPath::empty().join("Assets").join("Icons").join("sync.png");
    assert_eq!(joined.as_str(), "Assets/Icons/sync.png");
}

#[test]
fn test_join_after_trailing_slash() {
    let base = NormalizedPath::new("D:/mods/mhw/HunterPie/modules/SyncPlugin/");
    assert_eq!(
        base.join("main.cs").as_str(),
        "D:/mods/mhw/HunterPie/modules/SyncPlugin/main.cs"
    );
}

#[test]
fn test_join_keeps_backslash_in_segment() {
    let nested = NormalizedPath::empty().join("a").join("b");
    let flat = NormalizedPath::empty().join("a\\b");
    assert_eq!(flat.as_str(), "a\\b");
    assert_ne!(nested, flat);
}

#[test]
fn test_file_name_and_extension() {
    let path = NormalizedPath::new("Assets/Icons/sync.png");
    assert_eq!(path.file_name(), Some("sync.png"));
    assert_eq!(path.extension(), Some("png"));
}

#[test]
fn test_dotfile_has_no_extension() {
    let path = NormalizedPath::new(".gitignore");
    assert_eq!(path.extension(), None);
}

#[test]
fn test_empty_has_no_file_name() {
    assert_eq!(NormalizedPath::empty().file_name(), None);
    assert!(NormalizedPath::empty().is_empty());
}
