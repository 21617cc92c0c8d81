//! Compile-time dispatch between JSON values and field types.
//!
//! Every field type implements [`Convertible`] once for both directions. Field
//! types without an impl do not compile, so there is no silent fallthrough for
//! unsupported types.

pub mod collections;
pub mod raw;

use serde_json::{Number, Value};

use crate::scope::Scope;

/// A type that converts to and from one JSON node.
pub trait Convertible: Sized {
    /// Convert `value`, or `None` when it has the wrong shape.
    ///
    /// Implementations may record issues on `scope`; when they return `None`
    /// without recording anything the caller records a mismatch.
    fn from_json(value: &Value, scope: &mut Scope) -> Option<Self>;

    fn to_json(&self, scope: &mut Scope) -> Value;
}

/// Lower-case name of a JSON value's kind, used in diagnostics.
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Convertible for bool {
    fn from_json(value: &Value, _scope: &mut Scope) -> Option<Self> {
        value.as_bool()
    }

    fn to_json(&self, _scope: &mut Scope) -> Value {
        Value::Bool(*self)
    }
}

impl Convertible for String {
    fn from_json(value: &Value, _scope: &mut Scope) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }

    fn to_json(&self, _scope: &mut Scope) -> Value {
        Value::String(self.clone())
    }
}

impl Convertible for Value {
    fn from_json(value: &Value, _scope: &mut Scope) -> Option<Self> {
        Some(value.clone())
    }

    fn to_json(&self, _scope: &mut Scope) -> Value {
        self.clone()
    }
}

// Integers only accept integral JSON numbers that fit the target width.
macro_rules! signed_convertible {
    ($($ty:ty),+) => {$(
        impl Convertible for $ty {
            fn from_json(value: &Value, _scope: &mut Scope) -> Option<Self> {
                value.as_i64().and_then(|n| <$ty>::try_from(n).ok())
            }

            fn to_json(&self, _scope: &mut Scope) -> Value {
                Value::from(*self)
            }
        }
    )+};
}

macro_rules! unsigned_convertible {
    ($($ty:ty),+) => {$(
        impl Convertible for $ty {
            fn from_json(value: &Value, _scope: &mut Scope) -> Option<Self> {
                value.as_u64().and_then(|n| <$ty>::try_from(n).ok())
            }

            fn to_json(&self, _scope: &mut Scope) -> Value {
                Value::from(*self)
            }
        }
    )+};
}

signed_convertible!(i8, i16, i32, i64, isize);
unsigned_convertible!(u8, u16, u32, u64, usize);

impl Convertible for f64 {
    fn from_json(value: &Value, _scope: &mut Scope) -> Option<Self> {
        value.as_f64()
    }

    /// Non-finite values have no JSON form and encode as `null`.
    fn to_json(&self, _scope: &mut Scope) -> Value {
        Number::from_f64(*self).map_or(Value::Null, Value::Number)
    }
}

impl Convertible for f32 {
    /// Numbers beyond the `f32` range are a mismatch, not infinity.
    fn from_json(value: &Value, _scope: &mut Scope) -> Option<Self> {
        value.as_f64().map(|n| n as f32).filter(|n| n.is_finite())
    }

    fn to_json(&self, _scope: &mut Scope) -> Value {
        Number::from_f64(f64::from(*self)).map_or(Value::Null, Value::Number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapperConfig;
    use serde_json::json;

    fn scope() -> Scope {
        Scope::new(MapperConfig::default())
    }

    fn decode<T: Convertible>(value: Value) -> Option<T> {
        T::from_json(&value, &mut scope())
    }

    #[test]
    fn primitives_type_check() {
        assert_eq!(decode::<bool>(json!(true)), Some(true));
        assert_eq!(decode::<bool>(json!(1)), None);
        assert_eq!(decode::<String>(json!("hi")), Some("hi".to_string()));
        assert_eq!(decode::<String>(json!(null)), None);
        assert_eq!(decode::<i64>(json!(-7)), Some(-7));
        assert_eq!(decode::<i64>(json!("7")), None);
        assert_eq!(decode::<f64>(json!(1.5)), Some(1.5));
        assert_eq!(decode::<f64>(json!(2)), Some(2.0));
        assert_eq!(decode::<f32>(json!(0.25)), Some(0.25));
    }

    #[test]
    fn integers_reject_fractions_and_overflow() {
        assert_eq!(decode::<i32>(json!(1.5)), None);
        assert_eq!(decode::<u8>(json!(256)), None);
        assert_eq!(decode::<u8>(json!(255)), Some(255));
        assert_eq!(decode::<u32>(json!(-1)), None);
        assert_eq!(decode::<i8>(json!(-128)), Some(-128));
        assert_eq!(decode::<u64>(json!(u64::MAX)), Some(u64::MAX));
        assert_eq!(decode::<usize>(json!(3)), Some(3));
    }

    #[test]
    fn f32_rejects_numbers_out_of_range() {
        assert_eq!(decode::<f32>(json!(1e300)), None);
        assert_eq!(decode::<f32>(json!(-1e300)), None);
        assert_eq!(decode::<f32>(json!(f64::from(f32::MAX))), Some(f32::MAX));
        // Underflow rounds to zero and stays a number.
        assert_eq!(decode::<f32>(json!(1e-300)), Some(0.0));
    }

    #[test]
    fn primitives_encode_verbatim() {
        let mut scope = scope();
        assert_eq!(true.to_json(&mut scope), json!(true));
        assert_eq!(42u16.to_json(&mut scope), json!(42));
        assert_eq!((-3isize).to_json(&mut scope), json!(-3));
        assert_eq!(2.5f64.to_json(&mut scope), json!(2.5));
        assert_eq!(0.5f32.to_json(&mut scope), json!(0.5));
        assert_eq!("x".to_string().to_json(&mut scope), json!("x"));
        assert_eq!(f64::NAN.to_json(&mut scope), Value::Null);
    }

    #[test]
    fn raw_values_pass_through() {
        let any = json!({"k": [1, null, "s"]});
        assert_eq!(decode::<Value>(any.clone()), Some(any.clone()));
        assert_eq!(any.to_json(&mut scope()), any);
    }

    #[test]
    fn kind_names() {
        assert_eq!(kind_name(&json!(null)), "null");
        assert_eq!(kind_name(&json!([])), "array");
        assert_eq!(kind_name(&json!({})), "object");
        assert_eq!(kind_name(&json!(1)), "number");
    }
}
