//! Dotted key paths into JSON object trees.
//!
//! A key path such as `"user.address.city"` addresses `root.user.address.city`.
//! Reads only descend through objects: a missing segment, an empty segment or
//! a non-object node along the way resolves to nothing rather than an error.
//! Writes create the intermediate objects they need.
//!
//! Examples:
//! - `"a.b.c" -> ["a", "b", "c"]`
//! - `"a..b" -> ["a", "", "b"]` (parses, never resolves)
//! - `"" -> [""]` (parses, never resolves)

use std::fmt;

use serde_json::{Map, Value};
use thiserror::Error;

/// Segment separator used unless configured otherwise.
pub const DEFAULT_DELIMITER: &str = ".";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyPathError {
    #[error("key path delimiter must not be empty")]
    EmptyDelimiter,
}

/// Sequence of object keys from a root object down to one node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// The empty path. It addresses nothing on its own and is used as the
    /// starting point for [`KeyPath::push`] / [`KeyPath::extend`].
    pub fn root() -> Self {
        Self::default()
    }

    /// Split `key` on `delimiter`.
    pub fn parse(key: &str, delimiter: &str) -> Result<Self, KeyPathError> {
        if delimiter.is_empty() {
            return Err(KeyPathError::EmptyDelimiter);
        }
        Ok(Self {
            segments: key.split(delimiter).map(str::to_string).collect(),
        })
    }

    /// A single-segment path, delimiters inside `key` included verbatim.
    pub fn literal(key: &str) -> Self {
        Self {
            segments: vec![key.to_string()],
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// True when the path has at least one segment and none of them is empty.
    pub fn is_well_formed(&self) -> bool {
        !self.segments.is_empty() && self.segments.iter().all(|s| !s.is_empty())
    }

    pub fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    pub fn extend(&mut self, other: &KeyPath) {
        self.segments.extend(other.segments.iter().cloned());
    }

    pub fn truncate(&mut self, len: usize) {
        self.segments.truncate(len);
    }

    /// Path of `other` appended to this one.
    pub fn join(&self, other: &KeyPath) -> KeyPath {
        let mut joined = self.clone();
        joined.extend(other);
        joined
    }

    /// Format segments joined with `delimiter`.
    pub fn format(&self, delimiter: &str) -> String {
        self.segments.join(delimiter)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(DEFAULT_DELIMITER))
    }
}

impl From<Vec<String>> for KeyPath {
    fn from(segments: Vec<String>) -> Self {
        Self { segments }
    }
}

impl<'a> From<&'a [&'a str]> for KeyPath {
    fn from(segments: &'a [&'a str]) -> Self {
        Self {
            segments: segments.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Find the node addressed by `path` below `root`.
///
/// Returns `None` when `root` is not an object.
pub fn resolve<'a>(root: &'a Value, path: &KeyPath) -> Option<&'a Value> {
    match root {
        Value::Object(map) => resolve_in(map, path),
        _ => None,
    }
}

/// Find the node addressed by `path` below an object.
pub fn resolve_in<'a>(map: &'a Map<String, Value>, path: &KeyPath) -> Option<&'a Value> {
    if !path.is_well_formed() {
        return None;
    }
    let (last, parents) = path.segments.split_last()?;
    let mut current = map;
    for segment in parents {
        current = current.get(segment)?.as_object()?;
    }
    current.get(last)
}

/// Outcome of [`assign`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assignment {
    /// The leaf key did not exist before.
    Inserted,
    /// The leaf key existed and its value was overwritten.
    Replaced,
    /// A non-object node on the way down was overwritten with an object.
    Reshaped,
    /// The path was not well formed; nothing was written.
    Skipped,
}

/// Set the node addressed by `path` to `value`, creating intermediate objects.
///
/// Last write wins: an existing leaf is replaced, and an intermediate node that
/// is not an object is replaced by an empty object before descending.
pub fn assign(map: &mut Map<String, Value>, path: &KeyPath, value: Value) -> Assignment {
    if !path.is_well_formed() {
        return Assignment::Skipped;
    }
    let Some((last, parents)) = path.segments.split_last() else {
        return Assignment::Skipped;
    };

    let mut reshaped = false;
    let mut current = map;
    for segment in parents {
        let slot = current
            .entry(segment.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            *slot = Value::Object(Map::new());
            reshaped = true;
        }
        current = match slot {
            Value::Object(next) => next,
            _ => return Assignment::Skipped,
        };
    }

    let previous = current.insert(last.clone(), value);
    match (reshaped, previous) {
        (true, _) => Assignment::Reshaped,
        (false, Some(_)) => Assignment::Replaced,
        (false, None) => Assignment::Inserted,
    }
}
