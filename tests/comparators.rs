use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use dircomparer::compare::compare_dir_contents;
use dircomparer::sizes::{find_incomplete_files, size_map};
use dircomparer::traversal::collect_files;

fn write(root: &Path, rel: &str, len: usize) {
    let p = root.join(rel);
    fs::create_dir_all(p.parent().unwrap()).unwrap();
    fs::write(p, vec![0u8; len]).unwrap();
}

#[test]
fn colliding_base_names_are_resolved_by_walk_order() {
    let src = tempfile::tempdir().unwrap();
    let dest = tempfile::tempdir().unwrap();
    for root in [src.path(), dest.path()] {
        write(root, "a/x.txt", 10);
        write(root, "b/x.txt", 5);
    }

    let src_map = size_map(&collect_files(src.path()).unwrap()).unwrap();
    let dest_map = size_map(&collect_files(dest.path()).unwrap()).unwrap();
    assert_eq!(src_map.len(), 1);
    assert!(matches!(src_map[OsStr::new("x.txt")], 5 | 10));
    // same layout on both sides walks in the same order
    assert_eq!(src_map, dest_map);

    assert!(find_incomplete_files(src.path(), dest.path()).unwrap().is_empty());
    assert!(compare_dir_contents(src.path(), dest.path()).unwrap().is_empty());
}

#[test]
fn each_partial_name_reported_once() {
    let src = tempfile::tempdir().unwrap();
    let dest = tempfile::tempdir().unwrap();
    write(src.path(), "movie.mkv", 4096);
    write(dest.path(), "movie.mkv", 1024);
    write(src.path(), "notes.txt", 30);
    write(dest.path(), "moved/notes.txt", 12);

    let names: Vec<String> = find_incomplete_files(src.path(), dest.path())
        .unwrap()
        .into_iter()
        .map(|p| p.name.to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["movie.mkv", "notes.txt"]);
}

#[test]
fn missing_file_never_counted_as_extra() {
    let src = tempfile::tempdir().unwrap();
    let dest = tempfile::tempdir().unwrap();
    write(src.path(), "keep/a.txt", 1);
    write(src.path(), "lost.txt", 1);
    write(dest.path(), "keep/a.txt", 1);
    write(dest.path(), "new.txt", 1);

    let diff = compare_dir_contents(src.path(), dest.path()).unwrap();
    let lost = Path::new("lost.txt");
    let new = Path::new("new.txt");
    assert_eq!(diff.missing_in_dest.iter().filter(|p| *p == lost).count(), 1);
    assert!(!diff.missing_in_src.iter().any(|p| p == lost));
    assert_eq!(diff.missing_in_src.iter().filter(|p| *p == new).count(), 1);
    assert!(!diff.missing_in_dest.iter().any(|p| p == new));
}
