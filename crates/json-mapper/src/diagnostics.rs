//! Binding issues collected while mapping.
//!
//! Mapping is best effort: a field that cannot be bound keeps its prior value
//! (or becomes `None` for optionals) and the call carries on. Every such event
//! is recorded here so callers can see which key paths went unresolved.

use std::fmt;

use json_mapper_key_path::KeyPath;

/// Nullability shape of a field statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldShape {
    /// `T`; untouched when the source cannot produce a value.
    Required,
    /// `Option<T>`; `None` when the source is absent, null or mistyped.
    Optional,
    /// `Option<T>` the model treats as always present; untouched on failure.
    Implicit,
}

impl fmt::Display for FieldShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FieldShape::Required => "required",
            FieldShape::Optional => "optional",
            FieldShape::Implicit => "implicit",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    /// Nothing at the key path.
    Missing { shape: FieldShape },
    /// A value was found but could not be converted to the field type.
    Mismatch {
        shape: FieldShape,
        found: &'static str,
    },
    /// A key with an empty segment; it never resolves and is never written.
    MalformedPath,
    /// A nested model's `construct` declined the object at this path.
    Unconstructible { type_name: &'static str },
    /// Container elements that failed to convert and were left out.
    DroppedElements { dropped: usize, total: usize },
    /// Encoding replaced a non-object node on the way to this path.
    Reshaped,
}

/// One recorded binding problem, located by its absolute key path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub path: KeyPath,
    pub kind: IssueKind,
}

impl Issue {
    /// True when the field at `path` was left without a value from the source.
    pub fn is_unresolved(&self) -> bool {
        matches!(
            self.kind,
            IssueKind::Missing { .. }
                | IssueKind::Mismatch { .. }
                | IssueKind::MalformedPath
                | IssueKind::Unconstructible { .. }
        )
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            IssueKind::Missing { shape } => write!(f, "{}: missing {shape} value", self.path),
            IssueKind::Mismatch { shape, found } => {
                write!(f, "{}: {shape} value cannot be read from {found}", self.path)
            }
            IssueKind::MalformedPath => write!(f, "{}: key has an empty segment", self.path),
            IssueKind::Unconstructible { type_name } => {
                write!(f, "{}: {type_name} declined to construct", self.path)
            }
            IssueKind::DroppedElements { dropped, total } => {
                write!(f, "{}: dropped {dropped} of {total} elements", self.path)
            }
            IssueKind::Reshaped => write!(f, "{}: replaced a non-object node", self.path),
        }
    }
}

/// Ordered list of issues from one mapping call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    issues: Vec<Issue>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Issue> {
        self.issues.iter()
    }

    /// Key paths of fields that ended up without a value from the source.
    pub fn unresolved_paths(&self) -> Vec<String> {
        self.issues
            .iter()
            .filter(|issue| issue.is_unresolved())
            .map(|issue| issue.path.to_string())
            .collect()
    }
}

impl IntoIterator for Diagnostics {
    type Item = Issue;
    type IntoIter = std::vec::IntoIter<Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Issue;
    type IntoIter = std::slice::Iter<'a, Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.iter()
    }
}
