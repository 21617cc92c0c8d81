//! Entry points: map JSON into models and encode models back into JSON.

use std::any::type_name;
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use serde_json::{Map, Value};

use crate::config::MapperConfig;
use crate::convert::collections::{decode_entries, decode_list};
use crate::convert::{kind_name, Convertible};
use crate::diagnostics::Diagnostics;
use crate::error::MapError;
use crate::mappable::{decode_into, decode_model, encode_model, Mappable};
use crate::scope::Scope;

/// Input accepted by every mapping entry point.
///
/// Text and already parsed values behave identically once parsed.
#[derive(Debug, Clone, Copy)]
pub enum Source<'a> {
    Text(&'a str),
    Value(&'a Value),
    Absent,
}

impl<'a> Source<'a> {
    fn parse(self) -> Result<Cow<'a, Value>, MapError> {
        match self {
            Source::Text(text) => match serde_json::from_str(text) {
                Ok(value) => Ok(Cow::Owned(value)),
                Err(err) => {
                    tracing::debug!(error = %err, "source text is not valid JSON");
                    Err(MapError::Json(err))
                }
            },
            Source::Value(value) => Ok(Cow::Borrowed(value)),
            Source::Absent => Err(MapError::Absent),
        }
    }
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(text: &'a str) -> Self {
        Source::Text(text)
    }
}

impl<'a> From<&'a String> for Source<'a> {
    fn from(text: &'a String) -> Self {
        Source::Text(text)
    }
}

impl<'a> From<&'a Value> for Source<'a> {
    fn from(value: &'a Value) -> Self {
        Source::Value(value)
    }
}

impl<'a> From<Option<&'a str>> for Source<'a> {
    fn from(text: Option<&'a str>) -> Self {
        text.map_or(Source::Absent, Source::Text)
    }
}

impl<'a> From<Option<&'a Value>> for Source<'a> {
    fn from(value: Option<&'a Value>) -> Self {
        value.map_or(Source::Absent, Source::Value)
    }
}

/// A mapping result together with the issues met on the way.
#[derive(Debug, Clone)]
pub struct Mapped<T> {
    pub value: T,
    pub diagnostics: Diagnostics,
}

/// Maps JSON into [`Mappable`] models and back.
///
/// A mapper only holds its configuration; every call builds its own state, so
/// one mapper can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Mapper {
    config: MapperConfig,
}

impl Mapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MapperConfig) -> Result<Self, MapError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    fn scope(&self) -> Scope {
        Scope::new(self.config.clone())
    }

    /// Map an object into `T`.
    ///
    /// `None` when the source is absent, not valid JSON, not an object, or
    /// `T::construct` declines it.
    pub fn map<'a, T: Mappable>(&self, source: impl Into<Source<'a>>) -> Option<T> {
        logged(self.try_map(source)).map(|mapped| mapped.value)
    }

    pub fn try_map<'a, T: Mappable>(&self, source: impl Into<Source<'a>>) -> Result<Mapped<T>, MapError> {
        let value = source.into().parse()?;
        let object = expect_object(&value)?;
        let mut scope = self.scope();
        let model = decode_model::<T>(object, &mut scope).ok_or(MapError::Construction {
            type_name: type_name::<T>(),
        })?;
        Ok(Mapped {
            value: model,
            diagnostics: scope.into_diagnostics(),
        })
    }

    /// Map an object into an existing model, skipping `construct`.
    pub fn map_onto<'a, T: Mappable>(
        &self,
        source: impl Into<Source<'a>>,
        model: &mut T,
    ) -> Result<Diagnostics, MapError> {
        let value = source.into().parse()?;
        let object = expect_object(&value)?;
        let mut scope = self.scope();
        decode_into(model, object, &mut scope);
        Ok(scope.into_diagnostics())
    }

    /// Map an array of objects; elements that fail to map are dropped.
    pub fn map_array<'a, T: Mappable>(&self, source: impl Into<Source<'a>>) -> Option<Vec<T>> {
        logged(self.try_map_array(source)).map(|mapped| mapped.value)
    }

    pub fn try_map_array<'a, T: Mappable>(
        &self,
        source: impl Into<Source<'a>>,
    ) -> Result<Mapped<Vec<T>>, MapError> {
        let value = source.into().parse()?;
        let items = expect_array(&value)?;
        let mut scope = self.scope();
        let models = decode_list(items, &mut scope);
        Ok(Mapped {
            value: models,
            diagnostics: scope.into_diagnostics(),
        })
    }

    /// Map an object of objects; entries that fail to map are dropped.
    pub fn map_dictionary<'a, T: Mappable>(
        &self,
        source: impl Into<Source<'a>>,
    ) -> Option<HashMap<String, T>> {
        logged(self.try_map_dictionary(source)).map(|mapped| mapped.value)
    }

    pub fn try_map_dictionary<'a, T: Mappable>(
        &self,
        source: impl Into<Source<'a>>,
    ) -> Result<Mapped<HashMap<String, T>>, MapError> {
        let value = source.into().parse()?;
        let object = expect_object(&value)?;
        let mut scope = self.scope();
        let models = decode_entries(object, &mut scope).into_iter().collect();
        Ok(Mapped {
            value: models,
            diagnostics: scope.into_diagnostics(),
        })
    }

    /// Map an array of objects into a set; equal models collapse.
    pub fn map_set<'a, T: Mappable + Eq + Hash>(
        &self,
        source: impl Into<Source<'a>>,
    ) -> Option<HashSet<T>> {
        self.map_array(source).map(|models| models.into_iter().collect())
    }

    /// Map an array of arrays of objects.
    pub fn map_array_of_arrays<'a, T: Mappable>(
        &self,
        source: impl Into<Source<'a>>,
    ) -> Option<Vec<Vec<T>>> {
        logged(self.try_decode(source)).map(|mapped| mapped.value)
    }

    /// Map an object whose values are arrays of objects.
    pub fn map_dictionary_of_arrays<'a, T: Mappable>(
        &self,
        source: impl Into<Source<'a>>,
    ) -> Option<HashMap<String, Vec<T>>> {
        logged(self.try_decode(source)).map(|mapped| mapped.value)
    }

    /// Encode a model into a JSON object.
    pub fn to_json<T: Mappable>(&self, model: &T) -> Value {
        self.to_json_with_diagnostics(model).value
    }

    pub fn to_json_with_diagnostics<T: Mappable>(&self, model: &T) -> Mapped<Value> {
        let mut scope = self.scope();
        let object = encode_model(model, &mut scope);
        Mapped {
            value: Value::Object(object),
            diagnostics: scope.into_diagnostics(),
        }
    }

    pub fn to_json_array<T: Mappable>(&self, models: &[T]) -> Vec<Value> {
        let mut scope = self.scope();
        models.iter().map(|model| model.to_json(&mut scope)).collect()
    }

    pub fn to_json_dictionary<T: Mappable, S>(&self, models: &HashMap<String, T, S>) -> Map<String, Value> {
        let mut scope = self.scope();
        models
            .iter()
            .map(|(key, model)| (key.clone(), model.to_json(&mut scope)))
            .collect()
    }

    /// Encode a set of models. The element order is unspecified.
    pub fn to_json_set<T: Mappable, S>(&self, models: &HashSet<T, S>) -> Vec<Value> {
        let mut scope = self.scope();
        models.iter().map(|model| model.to_json(&mut scope)).collect()
    }

    /// Encode a model and serialize it to JSON text.
    pub fn to_json_string<T: Mappable>(&self, model: &T, pretty: bool) -> Result<String, MapError> {
        let value = self.to_json(model);
        let text = if pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(text)
    }

    /// Decode any [`Convertible`] type from `source`, keeping diagnostics.
    pub fn try_decode<'a, C: Convertible>(
        &self,
        source: impl Into<Source<'a>>,
    ) -> Result<Mapped<C>, MapError> {
        let value = source.into().parse()?;
        let mut scope = self.scope();
        let decoded = C::from_json(&value, &mut scope).ok_or(MapError::Shape {
            expected: type_name::<C>(),
            found: kind_name(&value),
        })?;
        Ok(Mapped {
            value: decoded,
            diagnostics: scope.into_diagnostics(),
        })
    }

    /// Encode any [`Convertible`] value.
    pub fn encode<C: Convertible>(&self, value: &C) -> Value {
        value.to_json(&mut self.scope())
    }
}

fn expect_object(value: &Value) -> Result<&Map<String, Value>, MapError> {
    value.as_object().ok_or(MapError::Shape {
        expected: "object",
        found: kind_name(value),
    })
}

fn expect_array(value: &Value) -> Result<&[Value], MapError> {
    value.as_array().map(Vec::as_slice).ok_or(MapError::Shape {
        expected: "array",
        found: kind_name(value),
    })
}

fn logged<T>(result: Result<T, MapError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::debug!(error = %err, "mapping produced no value");
            None
        }
    }
}
