//! Direction-tagged view of one JSON object during a mapping call.

use json_mapper_key_path::{self as key_path, Assignment, KeyPath};
use serde_json::{Map, Value};

use crate::config::MapperConfig;
use crate::convert::{kind_name, Convertible};
use crate::diagnostics::{Diagnostics, FieldShape, IssueKind};
use crate::scope::Scope;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// JSON → model.
    Decoding,
    /// Model → JSON.
    Encoding,
}

#[derive(Debug)]
enum Node<'a> {
    Decoding(&'a Map<String, Value>),
    Encoding(Map<String, Value>),
}

/// The object a model's [`mapping`](crate::Mappable::mapping) runs against.
///
/// While decoding it reads from a borrowed source object; while encoding it
/// builds a fresh object. Field statements look the same in both directions:
///
/// ```
/// use json_mapper::{Mappable, MappingContext};
///
/// #[derive(Debug, Clone, Default, PartialEq)]
/// struct Point {
///     x: f64,
///     y: f64,
///     label: Option<String>,
/// }
///
/// impl Mappable for Point {
///     fn construct(_map: &MappingContext<'_>) -> Option<Self> {
///         Some(Self::default())
///     }
///
///     fn mapping(&mut self, map: &mut MappingContext<'_>) {
///         map.required("x", &mut self.x);
///         map.required("y", &mut self.y);
///         map.optional("meta.label", &mut self.label);
///     }
/// }
///
/// let point = Point::from_json_str(r#"{"x": 1, "y": 2.5, "meta": {"label": "a"}}"#).unwrap();
/// assert_eq!(point.label.as_deref(), Some("a"));
/// assert_eq!(
///     point.to_json_value(),
///     serde_json::json!({"x": 1.0, "y": 2.5, "meta": {"label": "a"}})
/// );
/// ```
#[derive(Debug)]
pub struct MappingContext<'a> {
    node: Node<'a>,
    scope: &'a mut Scope,
}

impl<'a> MappingContext<'a> {
    pub(crate) fn decoding(source: &'a Map<String, Value>, scope: &'a mut Scope) -> Self {
        Self {
            node: Node::Decoding(source),
            scope,
        }
    }

    pub(crate) fn encoding(scope: &'a mut Scope) -> Self {
        Self {
            node: Node::Encoding(Map::new()),
            scope,
        }
    }

    pub fn direction(&self) -> Direction {
        match self.node {
            Node::Decoding(_) => Direction::Decoding,
            Node::Encoding(_) => Direction::Encoding,
        }
    }

    pub fn config(&self) -> &MapperConfig {
        self.scope.config()
    }

    /// Issues recorded so far in this call, across all nesting levels.
    pub fn diagnostics(&self) -> &Diagnostics {
        self.scope.diagnostics()
    }

    /// The source object while decoding.
    pub fn source(&self) -> Option<&'a Map<String, Value>> {
        match self.node {
            Node::Decoding(source) => Some(source),
            Node::Encoding(_) => None,
        }
    }

    pub fn key_path(&self, key: &str) -> KeyPath {
        self.config().key_path(key)
    }

    /// The source node at `key`. Always `None` while encoding.
    pub fn resolve(&self, key: &str) -> Option<&'a Value> {
        self.lookup(&self.key_path(key))
    }

    pub fn is_key_present(&self, key: &str) -> bool {
        self.resolve(key).is_some()
    }

    /// Convert the source node at `key` without binding it to a field.
    ///
    /// Meant for [`construct`](crate::Mappable::construct), which decides from
    /// a few key values whether an instance can be built at all. Nothing is
    /// recorded in the call's diagnostics.
    pub fn value<T: Convertible>(&self, key: &str) -> Option<T> {
        let raw = self.resolve(key)?;
        let mut scratch = Scope::new(self.config().clone());
        T::from_json(raw, &mut scratch)
    }

    /// Write `value` at `key`, creating intermediate objects. Ignored while
    /// decoding.
    pub fn assign(&mut self, key: &str, value: Value) {
        let path = self.key_path(key);
        self.assign_path(&path, value);
    }

    /// Bind a field that must hold a value.
    ///
    /// Decoding leaves the field untouched when the key is absent or its value
    /// does not convert.
    pub fn required<T: Convertible>(&mut self, key: &str, field: &mut T) {
        match self.direction() {
            Direction::Decoding => {
                if let Some(value) = self.decode_field(key, FieldShape::Required) {
                    *field = value;
                }
            }
            Direction::Encoding => self.encode_field(key, field),
        }
    }

    /// Bind an optional field.
    ///
    /// Decoding sets the field to `None` when the key is absent, null or does
    /// not convert. Encoding leaves `None` out unless nulls are included.
    pub fn optional<T: Convertible>(&mut self, key: &str, field: &mut Option<T>) {
        match self.direction() {
            Direction::Decoding => *field = self.decode_field(key, FieldShape::Optional),
            Direction::Encoding => self.encode_optional_field(key, field),
        }
    }

    /// Bind an optional field the model treats as always present.
    ///
    /// Decoding behaves like [`required`](Self::required): on failure the field
    /// keeps its prior value and the failure is recorded. Encoding behaves
    /// like [`optional`](Self::optional).
    pub fn implicit<T: Convertible>(&mut self, key: &str, field: &mut Option<T>) {
        match self.direction() {
            Direction::Decoding => {
                if let Some(value) = self.decode_field(key, FieldShape::Implicit) {
                    *field = Some(value);
                }
            }
            Direction::Encoding => self.encode_optional_field(key, field),
        }
    }

    fn lookup(&self, path: &KeyPath) -> Option<&'a Value> {
        match self.node {
            Node::Decoding(source) => key_path::resolve_in(source, path),
            Node::Encoding(_) => None,
        }
    }

    fn decode_field<T: Convertible>(&mut self, key: &str, shape: FieldShape) -> Option<T> {
        let path = self.key_path(key);
        if !path.is_well_formed() {
            self.scope.report_at(&path, IssueKind::MalformedPath);
            return None;
        }
        let Some(raw) = self.lookup(&path) else {
            if shape != FieldShape::Optional {
                self.scope.report_at(&path, IssueKind::Missing { shape });
            }
            return None;
        };
        if raw.is_null() && shape == FieldShape::Optional {
            return None;
        }

        let before = self.scope.issue_count();
        let decoded = self.scope.descend(&path, |scope| T::from_json(raw, scope));
        if decoded.is_none() && self.scope.issue_count() == before {
            self.scope.report_at(
                &path,
                IssueKind::Mismatch {
                    shape,
                    found: kind_name(raw),
                },
            );
        }
        decoded
    }

    fn encode_field<T: Convertible>(&mut self, key: &str, field: &T) {
        let path = self.key_path(key);
        let value = self.scope.descend(&path, |scope| field.to_json(scope));
        self.assign_path(&path, value);
    }

    fn encode_optional_field<T: Convertible>(&mut self, key: &str, field: &Option<T>) {
        match field {
            Some(value) => self.encode_field(key, value),
            None if self.config().include_nulls => self.assign(key, Value::Null),
            None => {}
        }
    }

    fn assign_path(&mut self, path: &KeyPath, value: Value) {
        let Node::Encoding(root) = &mut self.node else {
            return;
        };
        match key_path::assign(root, path, value) {
            Assignment::Inserted | Assignment::Replaced => {}
            Assignment::Reshaped => self.scope.report_at(path, IssueKind::Reshaped),
            Assignment::Skipped => self.scope.report_at(path, IssueKind::MalformedPath),
        }
    }

    /// The object built while encoding; `None` for a decoding context.
    pub(crate) fn into_object(self) -> Option<Map<String, Value>> {
        match self.node {
            Node::Encoding(root) => Some(root),
            Node::Decoding(_) => None,
        }
    }
}
