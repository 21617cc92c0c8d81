//! Per-call state threaded through every conversion.

use json_mapper_key_path::KeyPath;

use crate::config::MapperConfig;
use crate::diagnostics::{Diagnostics, Issue, IssueKind};

/// Configuration, current location and collected issues of one mapping call.
///
/// A scope is created by each [`Mapper`](crate::Mapper) entry point and never
/// outlives it, so concurrent calls share nothing.
#[derive(Debug)]
pub struct Scope {
    config: MapperConfig,
    location: KeyPath,
    diagnostics: Diagnostics,
}

impl Scope {
    pub(crate) fn new(config: MapperConfig) -> Self {
        Self {
            config,
            location: KeyPath::root(),
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Absolute key path of the node being converted.
    pub fn location(&self) -> &KeyPath {
        &self.location
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Record an issue at the current location.
    pub fn report(&mut self, kind: IssueKind) {
        let issue = Issue {
            path: self.location.clone(),
            kind,
        };
        tracing::trace!(%issue, "binding issue");
        self.diagnostics.push(issue);
    }

    /// Record an issue at `path` relative to the current location.
    pub fn report_at(&mut self, path: &KeyPath, kind: IssueKind) {
        self.descend(path, |scope| scope.report(kind));
    }

    /// Run `f` with the location extended by `path`.
    pub fn descend<R>(&mut self, path: &KeyPath, f: impl FnOnce(&mut Self) -> R) -> R {
        let depth = self.location.len();
        self.location.extend(path);
        let result = f(self);
        self.location.truncate(depth);
        result
    }

    /// Run `f` with the location extended by one segment.
    pub fn descend_into<R>(&mut self, segment: impl Into<String>, f: impl FnOnce(&mut Self) -> R) -> R {
        let depth = self.location.len();
        self.location.push(segment);
        let result = f(self);
        self.location.truncate(depth);
        result
    }

    pub(crate) fn issue_count(&self) -> usize {
        self.diagnostics.len()
    }

    pub(crate) fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }
}
