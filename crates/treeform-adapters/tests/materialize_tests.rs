//! Materialization against the in-memory filesystem.

use std::path::Path;

use treeform_adapters::{BuiltinStubs, MemoryFilesystem, RecordingSink};
use treeform_core::{
    application::{MaterializeService, ports::{Filesystem, ProgressEvent}},
    domain::Tree,
    parse::IndentTreeParser,
};

fn service(fs: &MemoryFilesystem) -> MaterializeService {
    MaterializeService::new(Box::new(fs.clone()))
}

fn sample_tree() -> Tree {
    IndentTreeParser::new().parse(
        "src/\n\
        \x20 main.rs\n\
        \x20 lib.rs\n\
        docs/\n\
        \x20 guide.md\n\
        Cargo.toml\n",
    )
}

#[test]
fn full_tree_lands_on_the_filesystem() {
    let fs = MemoryFilesystem::new();
    let report = service(&fs).materialize(&sample_tree(), Path::new("/out"));

    assert_eq!(report.directories_created, 3); // base + src + docs
    assert_eq!(report.files_created, 4);
    assert_eq!(report.skipped, 0);
    assert!(report.is_clean());

    assert!(fs.exists(Path::new("/out/src/main.rs")));
    assert!(fs.exists(Path::new("/out/docs/guide.md")));
    assert_eq!(fs.read_file(Path::new("/out/Cargo.toml")).as_deref(), Some(""));
}

#[test]
fn second_pass_is_pure_skip() {
    let fs = MemoryFilesystem::new();
    let svc = service(&fs);
    let tree = sample_tree();

    let first = svc.materialize(&tree, Path::new("/out"));
    let before = fs.entry_count();

    let second = svc.materialize(&tree, Path::new("/out"));

    // nothing new appeared, and everything the first pass created was
    // skipped (the base directory is not revisited as a node)
    assert_eq!(fs.entry_count(), before);
    assert_eq!(second.created(), 0);
    assert_eq!(second.skipped, first.created() - 1);
    assert!(second.is_clean());
}

#[test]
fn empty_tree_creates_only_the_base_directory() {
    let fs = MemoryFilesystem::new();
    let report = service(&fs).materialize(&Tree::new(), Path::new("/out"));

    assert_eq!(report.directories_created, 1);
    assert_eq!(report.files_created, 0);
    assert_eq!(report.skipped, 0);
    assert_eq!(report.errors, 0);
    assert!(fs.exists(Path::new("/out")));
}

#[test]
fn directory_occupying_a_file_path_is_skipped_not_overwritten() {
    let fs = MemoryFilesystem::new();
    fs.seed_directory("/out");
    fs.seed_directory("/out/a.txt");

    let mut tree = Tree::new();
    tree.add_file(tree.root(), "a.txt").unwrap();

    let report = service(&fs).materialize(&tree, Path::new("/out"));

    assert_eq!(report.skipped, 1);
    assert_eq!(report.errors, 0);
    assert_eq!(report.files_created, 0);
    // still a directory, no content was written over it
    assert_eq!(fs.read_file(Path::new("/out/a.txt")), None);
}

#[test]
fn progress_events_mirror_the_tally() {
    let fs = MemoryFilesystem::new();
    let sink = RecordingSink::new();
    let report = MaterializeService::new(Box::new(fs))
        .with_sink(Box::new(sink.clone()))
        .materialize(&sample_tree(), Path::new("/out"));

    let created_dirs = sink.count(|e| matches!(e, ProgressEvent::DirectoryCreated { .. }));
    let created_files = sink.count(|e| matches!(e, ProgressEvent::FileCreated { .. }));
    assert_eq!(created_dirs, report.directories_created);
    assert_eq!(created_files, report.files_created);
}

#[test]
fn stub_table_feeds_known_extensions_only() {
    let fs = MemoryFilesystem::new();
    let tree = IndentTreeParser::new().parse("app.js\nmain.rs\n");

    MaterializeService::new(Box::new(fs.clone()))
        .with_stubs(Box::new(BuiltinStubs::new()))
        .materialize(&tree, Path::new("/out"));

    assert_eq!(
        fs.read_file(Path::new("/out/app.js")).as_deref(),
        Some("// TODO: implement\n")
    );
    assert_eq!(fs.read_file(Path::new("/out/main.rs")).as_deref(), Some(""));
}
