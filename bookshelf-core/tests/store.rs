use bookshelf_core::{CatalogError, CatalogStore, Entry, SortKey, read_entries, write_entries};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn library(tmp: &TempDir) -> PathBuf {
    tmp.path().join("library.csv")
}

fn titled(title: &str) -> Entry {
    Entry::new(title, "Someone", "Fiction", "2001")
}

fn titles(store: &CatalogStore) -> Vec<&str> {
    store.entries().iter().map(|e| e.title.as_str()).collect()
}

#[test]
fn open_missing_file_is_empty() {
    let tmp = TempDir::new().unwrap();
    let store = CatalogStore::open(library(&tmp)).unwrap();
    assert!(store.is_empty());
    assert!(!library(&tmp).exists());
}

#[test]
fn save_then_load_round_trips() {
    let tmp = TempDir::new().unwrap();
    let entries = vec![
        Entry::new("The Hobbit", "J.R.R. Tolkien", "Fantasy", "1937")
            .with_rating("5")
            .with_review("There and back again"),
        Entry::new("Guns, Germs, and Steel", "Jared Diamond", "History", "1997")
            .with_review("line one\nline two, with \"quotes\""),
        Entry::new("", "", "", ""),
        Entry::new("Dune", "Frank Herbert", "Sci-Fi", "circa 1965").with_rating("4.5"),
    ];

    write_entries(&library(&tmp), &entries).unwrap();
    let loaded = read_entries(&library(&tmp)).unwrap();
    assert_eq!(loaded, entries);

    let store = CatalogStore::open(library(&tmp)).unwrap();
    assert_eq!(store.entries(), entries.as_slice());
}

#[test]
fn add_appends_and_persists() {
    let tmp = TempDir::new().unwrap();
    let mut store = CatalogStore::open(library(&tmp)).unwrap();
    store.add(titled("A")).unwrap();
    store.add(titled("B")).unwrap();
    store.add(titled("A")).unwrap();
    assert_eq!(titles(&store), vec!["A", "B", "A"]);

    let reopened = CatalogStore::open(library(&tmp)).unwrap();
    assert_eq!(titles(&reopened), vec!["A", "B", "A"]);
}

#[test]
fn remove_deletes_every_exact_match() {
    let tmp = TempDir::new().unwrap();
    let mut store = CatalogStore::open(library(&tmp)).unwrap();
    for t in ["A", "B", "A", "a"] {
        store.add(titled(t)).unwrap();
    }

    assert_eq!(store.remove("A").unwrap(), 2);
    assert_eq!(titles(&store), vec!["B", "a"]);

    let reopened = CatalogStore::open(library(&tmp)).unwrap();
    assert_eq!(titles(&reopened), vec!["B", "a"]);
}

#[test]
fn remove_without_match_still_rewrites() {
    let tmp = TempDir::new().unwrap();
    let mut store = CatalogStore::open(library(&tmp)).unwrap();
    assert_eq!(store.remove("Nothing").unwrap(), 0);
    // the first mutation creates the file even when it changes nothing
    assert!(library(&tmp).exists());
    assert_eq!(fs::read_to_string(library(&tmp)).unwrap(), "");
}

#[test]
fn sort_is_stable_and_persisted() {
    let tmp = TempDir::new().unwrap();
    let mut store = CatalogStore::open(library(&tmp)).unwrap();
    store.add(Entry::new("B", "first", "x", "1")).unwrap();
    store.add(Entry::new("A", "second", "x", "2")).unwrap();
    store.add(Entry::new("B", "third", "x", "3")).unwrap();
    store.add(Entry::new("A", "fourth", "x", "4")).unwrap();

    store.sort(SortKey::Title).unwrap();
    let authors: Vec<&str> = store.entries().iter().map(|e| e.author.as_str()).collect();
    assert_eq!(authors, vec!["second", "fourth", "first", "third"]);

    let reopened = CatalogStore::open(library(&tmp)).unwrap();
    assert_eq!(reopened.entries(), store.entries());
}

#[test]
fn sort_by_author_and_genre() {
    let tmp = TempDir::new().unwrap();
    let mut store = CatalogStore::open(library(&tmp)).unwrap();
    store.add(Entry::new("One", "Zola", "Drama", "1")).unwrap();
    store.add(Entry::new("Two", "Austen", "Romance", "2")).unwrap();
    store.add(Entry::new("Three", "Melville", "Adventure", "3")).unwrap();

    store.sort(SortKey::Author).unwrap();
    assert_eq!(titles(&store), vec!["Two", "Three", "One"]);

    store.sort(SortKey::Genre).unwrap();
    assert_eq!(titles(&store), vec!["Three", "One", "Two"]);
}

#[test]
fn recommend_is_case_sensitive() {
    let tmp = TempDir::new().unwrap();
    let mut store = CatalogStore::open(library(&tmp)).unwrap();
    store.add(Entry::new("Foundation", "Asimov", "Sci-Fi", "1951")).unwrap();
    store.add(Entry::new("Hyperion", "Simmons", "sci-fi", "1989")).unwrap();

    let recs = store.recommend("Sci-Fi");
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].title, "Foundation");
}

#[test]
fn short_record_fails_load_with_diagnostic() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        library(&tmp),
        "Dune,Frank Herbert,Sci-Fi,1965,5,Classic\nEmma,Jane Austen,Romance,1815\n",
    )
    .unwrap();

    let err = CatalogStore::open(library(&tmp)).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::MalformedRecord {
            line: 2,
            found: 4,
            ..
        }
    ));
    let msg = err.to_string();
    assert!(msg.contains("library.csv"));
    assert!(msg.contains("line 2"));
}

#[test]
fn unreadable_path_is_not_treated_as_missing() {
    let tmp = TempDir::new().unwrap();
    // a directory can be opened on some platforms but never read as CSV
    let err = CatalogStore::open(tmp.path()).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::Io { .. } | CatalogError::Csv { .. }
    ));
}

#[test]
fn reload_picks_up_external_changes() {
    let tmp = TempDir::new().unwrap();
    let mut store = CatalogStore::open(library(&tmp)).unwrap();
    store.add(titled("Kept")).unwrap();

    fs::write(library(&tmp), "Other,Someone,Fiction,2001,,\n").unwrap();
    store.reload().unwrap();
    assert_eq!(titles(&store), vec!["Other"]);
}

#[test]
fn no_temp_file_left_behind() {
    let tmp = TempDir::new().unwrap();
    let mut store = CatalogStore::open(library(&tmp)).unwrap();
    store.add(titled("A")).unwrap();
    let names: Vec<String> = fs::read_dir(tmp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["library.csv"]);
}

#[test]
fn failed_write_leaves_file_and_memory_untouched() {
    let tmp = TempDir::new().unwrap();
    let path = library(&tmp);
    let mut store = CatalogStore::open(path.clone()).unwrap();
    store.add(titled("Dune")).unwrap();
    store.add(titled("Emma")).unwrap();
    let before = fs::read(&path).unwrap();

    // the temp file cannot be created while a directory holds its name
    fs::create_dir(tmp.path().join("library.csv.tmp")).unwrap();

    assert!(store.add(titled("Ulysses")).is_err());
    assert!(store.remove("Dune").is_err());
    assert!(store.sort(SortKey::Title).is_err());

    assert_eq!(fs::read(&path).unwrap(), before);
    assert_eq!(titles(&store), vec!["Dune", "Emma"]);
    assert_eq!(read_entries(&path).unwrap(), store.entries());
}
