//! Materialize Service - turns a parsed tree into real directories and files.
//!
//! The walk is depth-first, pre-order, single-threaded. Ordering is a
//! correctness requirement here (parent before child, siblings in
//! declaration order), so there is nothing to parallelize.
//!
//! Failure semantics: an I/O failure is confined to the node that raised it.
//! A failed directory closes its own subtree (children have nowhere to go),
//! a failed file closes nothing; siblings and the rest of the walk always
//! continue. The service never returns an error - the tally is the result.

use std::path::Path;

use tracing::{info, instrument, warn};

use crate::{
    application::ports::{Filesystem, NullSink, ProgressEvent, ProgressSink, StubTemplates},
    domain::{MaterializeReport, NodeId, NodeKind, Tree},
};

/// Main materialization service.
///
/// Holds the filesystem it writes through, an optional stub-template table
/// consulted for content-less files, and a progress sink.
pub struct MaterializeService {
    filesystem: Box<dyn Filesystem>,
    stubs: Option<Box<dyn StubTemplates>>,
    sink: Box<dyn ProgressSink>,
}

impl MaterializeService {
    /// Create a service writing through the given filesystem.
    ///
    /// No stub table, events discarded. Use [`Self::with_stubs`] and
    /// [`Self::with_sink`] to opt in.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            filesystem,
            stubs: None,
            sink: Box::new(NullSink),
        }
    }

    /// Consult the given extension→template table for files without content.
    pub fn with_stubs(mut self, stubs: Box<dyn StubTemplates>) -> Self {
        self.stubs = Some(stubs);
        self
    }

    /// Report per-node progress events to the given sink.
    pub fn with_sink(mut self, sink: Box<dyn ProgressSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Create every directory and file of `tree` under `base`.
    ///
    /// The base path itself is created first (recursively) and counts toward
    /// the tally; if that creation fails the report is returned immediately
    /// with a single error, since nothing below it can exist.
    #[instrument(skip_all, fields(base = %base.display(), nodes = tree.len()))]
    pub fn materialize(&self, tree: &Tree, base: &Path) -> MaterializeReport {
        let mut report = MaterializeReport::default();

        if !self.filesystem.exists(base) {
            if let Err(e) = self.filesystem.create_dir_all(base) {
                warn!(error = %e, "base directory creation failed");
                self.sink.event(&ProgressEvent::NodeFailed {
                    path: base.to_path_buf(),
                    reason: e.to_string(),
                });
                report.errors += 1;
                return report;
            }
            report.directories_created += 1;
            self.sink.event(&ProgressEvent::DirectoryCreated {
                path: base.to_path_buf(),
            });
        }

        // The synthetic root maps onto the base path itself.
        for &child in tree.node(tree.root()).children() {
            self.create_node(tree, child, base, &mut report);
        }

        info!(%report, "materialization finished");
        report
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn create_node(&self, tree: &Tree, id: NodeId, parent_path: &Path, report: &mut MaterializeReport) {
        let node = tree.node(id);
        let path = parent_path.join(node.name());

        match node.kind() {
            NodeKind::Directory => {
                if self.filesystem.exists(&path) {
                    report.skipped += 1;
                    self.sink
                        .event(&ProgressEvent::DirectorySkipped { path: path.clone() });
                } else if let Err(e) = self.filesystem.create_dir_all(&path) {
                    warn!(path = %path.display(), error = %e, "directory creation failed");
                    report.errors += 1;
                    self.sink.event(&ProgressEvent::NodeFailed {
                        path,
                        reason: e.to_string(),
                    });
                    // nothing below this node can be created
                    return;
                } else {
                    report.directories_created += 1;
                    self.sink
                        .event(&ProgressEvent::DirectoryCreated { path: path.clone() });
                }

                for &child in node.children() {
                    self.create_node(tree, child, &path, report);
                }
            }
            NodeKind::File => {
                if self.filesystem.exists(&path) {
                    report.skipped += 1;
                    self.sink.event(&ProgressEvent::FileSkipped { path });
                    return;
                }

                let content = match node.content() {
                    Some(content) => content,
                    None => self
                        .stubs
                        .as_deref()
                        .and_then(|stubs| stubs.stub_for(node.name()))
                        .unwrap_or(""),
                };

                if let Err(e) = self.filesystem.write_file(&path, content) {
                    warn!(path = %path.display(), error = %e, "file creation failed");
                    report.errors += 1;
                    self.sink.event(&ProgressEvent::NodeFailed {
                        path,
                        reason: e.to_string(),
                    });
                } else {
                    report.files_created += 1;
                    self.sink.event(&ProgressEvent::FileCreated { path });
                }
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::ApplicationError;
    use crate::application::ports::output::MockFilesystem;
    use std::path::PathBuf;

    fn sample_tree() -> Tree {
        let mut tree = Tree::new();
        let src = tree.add_directory(tree.root(), "src").unwrap();
        tree.add_file(src, "main.rs").unwrap();
        tree.add_file(tree.root(), "Cargo.toml").unwrap();
        tree
    }

    fn write_error(path: &Path) -> crate::error::TreeformError {
        ApplicationError::WriteFailed {
            path: path.to_path_buf(),
            reason: "permission denied".into(),
        }
        .into()
    }

    #[test]
    fn creates_everything_into_an_empty_target() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));

        let report = MaterializeService::new(Box::new(fs))
            .materialize(&sample_tree(), Path::new("/out"));

        // base + src, then two files
        assert_eq!(report.directories_created, 2);
        assert_eq!(report.files_created, 2);
        assert_eq!(report.skipped, 0);
        assert!(report.is_clean());
    }

    #[test]
    fn empty_tree_creates_only_the_base() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().times(1).returning(|_| Ok(()));
        fs.expect_write_file().times(0);

        let report = MaterializeService::new(Box::new(fs)).materialize(&Tree::new(), Path::new("/out"));

        assert_eq!(report.directories_created, 1);
        assert_eq!(report.files_created, 0);
    }

    #[test]
    fn base_creation_failure_short_circuits() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all()
            .times(1)
            .returning(|p| Err(write_error(p)));
        fs.expect_write_file().times(0);

        let report = MaterializeService::new(Box::new(fs))
            .materialize(&sample_tree(), Path::new("/out"));

        assert_eq!(report.errors, 1);
        assert_eq!(report.created(), 0);
    }

    #[test]
    fn failed_directory_closes_its_subtree_but_not_its_siblings() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|path| {
            if path.ends_with("src") {
                Err(write_error(path))
            } else {
                Ok(())
            }
        });
        // main.rs must never be attempted; Cargo.toml still lands
        fs.expect_write_file()
            .withf(|path, _| path == Path::new("/out/Cargo.toml"))
            .times(1)
            .returning(|_, _| Ok(()));

        let report = MaterializeService::new(Box::new(fs))
            .materialize(&sample_tree(), Path::new("/out"));

        assert_eq!(report.errors, 1);
        assert_eq!(report.files_created, 1);
        assert_eq!(report.directories_created, 1); // just the base
    }

    #[test]
    fn existing_entries_are_skipped_not_overwritten() {
        let existing: PathBuf = "/out/Cargo.toml".into();
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(move |path| path == existing || path == Path::new("/out"));
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|path, _| path != Path::new("/out/Cargo.toml"))
            .returning(|_, _| Ok(()));

        let report = MaterializeService::new(Box::new(fs))
            .materialize(&sample_tree(), Path::new("/out"));

        assert_eq!(report.skipped, 1);
        assert_eq!(report.files_created, 1);
        assert!(report.is_clean());
    }

    #[test]
    fn stub_table_fills_content_less_files() {
        struct OneStub;
        impl StubTemplates for OneStub {
            fn stub_for(&self, file_name: &str) -> Option<&str> {
                file_name.ends_with(".rs").then_some("// stub\n")
            }
        }

        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|path, content| {
                if path.ends_with("main.rs") {
                    content == "// stub\n"
                } else {
                    content.is_empty()
                }
            })
            .times(2)
            .returning(|_, _| Ok(()));

        let report = MaterializeService::new(Box::new(fs))
            .with_stubs(Box::new(OneStub))
            .materialize(&sample_tree(), Path::new("/out"));

        assert_eq!(report.files_created, 2);
    }

    #[test]
    fn explicit_content_wins_over_the_stub_table() {
        struct AlwaysStub;
        impl StubTemplates for AlwaysStub {
            fn stub_for(&self, _file_name: &str) -> Option<&str> {
                Some("stubbed")
            }
        }

        let mut tree = Tree::new();
        let f = tree.add_file(tree.root(), "x.js").unwrap();
        tree.set_content(f, "real content".into()).unwrap();

        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|_, content| content == "real content")
            .times(1)
            .returning(|_, _| Ok(()));

        MaterializeService::new(Box::new(fs))
            .with_stubs(Box::new(AlwaysStub))
            .materialize(&tree, Path::new("/out"));
    }
}
