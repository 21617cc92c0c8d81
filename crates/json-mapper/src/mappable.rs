//! Models that describe their own field ⇄ key correspondence.

use std::collections::HashSet;
use std::hash::Hash;

use serde_json::{Map, Value};

use crate::context::MappingContext;
use crate::convert::Convertible;
use crate::diagnostics::IssueKind;
use crate::error::MapError;
use crate::mapper::Mapper;
use crate::scope::Scope;

/// A model type that maps to and from a JSON object.
///
/// [`mapping`](Self::mapping) is the single description of the model's
/// fields and runs in both directions; [`construct`](Self::construct) runs
/// before it, only when decoding.
///
/// Encoding runs `mapping` on a clone of the model because field statements
/// take `&mut` references in both directions.
pub trait Mappable: Clone {
    /// Build an instance to decode into, or `None` if the object lacks what
    /// this model needs to exist at all.
    fn construct(map: &MappingContext<'_>) -> Option<Self>;

    /// Issue one binding statement per field, in declaration order.
    fn mapping(&mut self, map: &mut MappingContext<'_>);

    /// Decode a model from JSON text with the default configuration.
    fn from_json_str(text: &str) -> Option<Self> {
        Mapper::new().map(text)
    }

    /// Decode a model from a parsed JSON value with the default configuration.
    fn from_json_value(value: &Value) -> Option<Self> {
        Mapper::new().map(value)
    }

    fn to_json_value(&self) -> Value {
        Mapper::new().to_json(self)
    }

    fn to_json_string(&self, pretty: bool) -> Result<String, MapError> {
        Mapper::new().to_json_string(self, pretty)
    }
}

/// The same conveniences for a whole collection of models.
///
/// Decoding is fail-soft like [`Mapper::map_array`]: elements that do not map
/// are left out. Only a source that is not an array yields `None`.
///
/// ```
/// use json_mapper::{Mappable, MappableCollection, MappingContext};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Tag {
///     name: String,
/// }
///
/// impl Mappable for Tag {
///     fn construct(map: &MappingContext<'_>) -> Option<Self> {
///         Some(Tag { name: map.value("name")? })
///     }
///
///     fn mapping(&mut self, map: &mut MappingContext<'_>) {
///         map.required("name", &mut self.name);
///     }
/// }
///
/// let tags = Vec::<Tag>::from_json_str(r#"[{"name": "a"}, {}, {"name": "b"}]"#).unwrap();
/// assert_eq!(tags.len(), 2);
/// assert_eq!(tags.to_json_value(), serde_json::json!([{"name": "a"}, {"name": "b"}]));
/// ```
pub trait MappableCollection: Sized {
    fn from_json_str(text: &str) -> Option<Self>;

    fn from_json_value(value: &Value) -> Option<Self>;

    /// Encode every element into one JSON array.
    fn to_json_value(&self) -> Value;

    fn to_json_string(&self, pretty: bool) -> Result<String, MapError> {
        let value = self.to_json_value();
        let text = if pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(text)
    }
}

impl<T: Mappable> MappableCollection for Vec<T> {
    fn from_json_str(text: &str) -> Option<Self> {
        Mapper::new().map_array(text)
    }

    fn from_json_value(value: &Value) -> Option<Self> {
        Mapper::new().map_array(value)
    }

    fn to_json_value(&self) -> Value {
        Value::Array(Mapper::new().to_json_array(self))
    }
}

/// Equal models collapse on decoding; the encoded order is unspecified.
impl<T: Mappable + Eq + Hash> MappableCollection for HashSet<T> {
    fn from_json_str(text: &str) -> Option<Self> {
        Mapper::new().map_set(text)
    }

    fn from_json_value(value: &Value) -> Option<Self> {
        Mapper::new().map_set(value)
    }

    fn to_json_value(&self) -> Value {
        Value::Array(Mapper::new().to_json_set(self))
    }
}

/// Construct and map a model from `source`, recording a failed construction.
pub(crate) fn decode_model<T: Mappable>(source: &Map<String, Value>, scope: &mut Scope) -> Option<T> {
    let model = {
        let mut map = MappingContext::decoding(source, scope);
        T::construct(&map).map(|mut model| {
            model.mapping(&mut map);
            model
        })
    };
    if model.is_none() {
        let type_name = std::any::type_name::<T>();
        tracing::debug!(path = %scope.location(), type_name, "model declined to construct");
        scope.report(IssueKind::Unconstructible { type_name });
    }
    model
}

/// Run `mapping` on an existing instance, skipping `construct`.
pub(crate) fn decode_into<T: Mappable>(model: &mut T, source: &Map<String, Value>, scope: &mut Scope) {
    let mut map = MappingContext::decoding(source, scope);
    model.mapping(&mut map);
}

pub(crate) fn encode_model<T: Mappable>(model: &T, scope: &mut Scope) -> Map<String, Value> {
    let mut copy = model.clone();
    let mut map = MappingContext::encoding(scope);
    copy.mapping(&mut map);
    map.into_object().unwrap_or_default()
}

impl<T: Mappable> Convertible for T {
    fn from_json(value: &Value, scope: &mut Scope) -> Option<Self> {
        decode_model(value.as_object()?, scope)
    }

    fn to_json(&self, scope: &mut Scope) -> Value {
        Value::Object(encode_model(self, scope))
    }
}
