//! Ordered, in-memory edit pipeline.
//!
//! A [`PatchApplier`] folds a fixed list of [`Edit`]s over one string of file
//! content. Edits never touch disk; loading and saving are the caller's job.
//! Every edit reports an [`EditOutcome`], so a miss is visible in the
//! [`PatchReport`] instead of disappearing as a silent no-op.

pub mod operations;

use regex::Regex;
use std::fmt;
use tracing::{debug, warn};

/// One textual transformation within a patch
#[derive(Debug, Clone)]
pub struct Edit {
    /// Short human-readable description, used in the report
    pub label: String,
    /// The kind of transformation to perform
    pub kind: EditKind,
}

/// The supported edit kinds
#[derive(Debug, Clone)]
pub enum EditKind {
    /// Replace an exact substring with another
    Replace { find: String, replace: String },
    /// Insert a fixed block immediately after the first regex match
    InsertAfter {
        anchor: Regex,
        insert: String,
        /// Substring whose presence means the block was already inserted
        guard: Option<String>,
    },
}

impl Edit {
    pub fn replace(
        label: impl Into<String>,
        find: impl Into<String>,
        replace: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            kind: EditKind::Replace {
                find: find.into(),
                replace: replace.into(),
            },
        }
    }

    pub fn insert_after(
        label: impl Into<String>,
        anchor: Regex,
        insert: impl Into<String>,
        guard: Option<String>,
    ) -> Self {
        Self {
            label: label.into(),
            kind: EditKind::InsertAfter {
                anchor,
                insert: insert.into(),
                guard,
            },
        }
    }
}

/// Result of a single edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The edit matched and the content was changed
    Applied,
    /// The edit's result was already present, nothing to do
    AlreadyApplied,
    /// Neither the target nor its replacement was found
    NotFound,
}

impl fmt::Display for EditOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditOutcome::Applied => write!(f, "applied"),
            EditOutcome::AlreadyApplied => write!(f, "already applied"),
            EditOutcome::NotFound => write!(f, "no match"),
        }
    }
}

/// Per-edit entry in a [`PatchReport`]
#[derive(Debug, Clone)]
pub struct EditReport {
    pub label: String,
    pub outcome: EditOutcome,
}

/// Ordered outcomes of a full pipeline run
#[derive(Debug, Clone)]
pub struct PatchReport {
    edits: Vec<EditReport>,
}

impl PatchReport {
    /// Whether any edit changed the content
    pub fn changed(&self) -> bool {
        self.edits
            .iter()
            .any(|e| e.outcome == EditOutcome::Applied)
    }

    /// Whether every edit either applied or was already in place
    pub fn is_clean(&self) -> bool {
        self.edits
            .iter()
            .all(|e| e.outcome != EditOutcome::NotFound)
    }

    /// Labels of the edits that found no match
    pub fn missed(&self) -> Vec<&str> {
        self.edits
            .iter()
            .filter(|e| e.outcome == EditOutcome::NotFound)
            .map(|e| e.label.as_str())
            .collect()
    }

    pub fn entries(&self) -> &[EditReport] {
        &self.edits
    }
}

impl fmt::Display for PatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.edits.len();
        for (i, edit) in self.edits.iter().enumerate() {
            writeln!(f, "  [{}/{}] {}: {}", i + 1, total, edit.label, edit.outcome)?;
        }
        Ok(())
    }
}

/// Applies a fixed, ordered list of edits to one file's content
#[derive(Debug, Clone)]
pub struct PatchApplier {
    edits: Vec<Edit>,
}

impl PatchApplier {
    pub fn new(edits: Vec<Edit>) -> Self {
        Self { edits }
    }

    /// Run the pipeline over `content`, returning the transformed text and
    /// the per-edit report. Strictly linear: each edit sees the output of
    /// the previous one.
    pub fn run(&self, content: &str) -> (String, PatchReport) {
        let mut current = content.to_string();
        let mut reports = Vec::with_capacity(self.edits.len());

        for edit in &self.edits {
            let (next, outcome) = match &edit.kind {
                EditKind::Replace { find, replace } => {
                    operations::literal_replace(&current, find, replace)
                }
                EditKind::InsertAfter {
                    anchor,
                    insert,
                    guard,
                } => operations::pattern_insert(&current, anchor, insert, guard.as_deref()),
            };

            match outcome {
                EditOutcome::NotFound => warn!("edit '{}' found no match", edit.label),
                _ => debug!("edit '{}': {}", edit.label, outcome),
            }

            current = next;
            reports.push(EditReport {
                label: edit.label.clone(),
                outcome,
            });
        }

        (current, PatchReport { edits: reports })
    }
}
