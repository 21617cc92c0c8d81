//! Enumerations backed by a primitive value.

use serde_json::Value;

use super::Convertible;
use crate::scope::Scope;

/// A type with a reversible mapping to a primitive backing value.
///
/// Implementing this trait alone does not make a type convertible; use
/// [`raw_convertible!`](crate::raw_convertible) for that, or declare the enum
/// with [`raw_enum!`](crate::raw_enum).
pub trait RawRepresentable: Sized {
    type Raw: Convertible;

    fn from_raw(raw: Self::Raw) -> Option<Self>;

    fn to_raw(&self) -> Self::Raw;
}

/// Decode the backing value, then look up the matching case.
pub fn decode_raw<T: RawRepresentable>(value: &Value, scope: &mut Scope) -> Option<T> {
    T::Raw::from_json(value, scope).and_then(T::from_raw)
}

pub fn encode_raw<T: RawRepresentable>(value: &T, scope: &mut Scope) -> Value {
    value.to_raw().to_json(scope)
}

/// Implement [`Convertible`](crate::Convertible) for types that implement
/// [`RawRepresentable`](crate::RawRepresentable).
#[macro_export]
macro_rules! raw_convertible {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::Convertible for $ty {
            fn from_json(
                value: &$crate::serde_json::Value,
                scope: &mut $crate::Scope,
            ) -> ::core::option::Option<Self> {
                $crate::convert::raw::decode_raw(value, scope)
            }

            fn to_json(&self, scope: &mut $crate::Scope) -> $crate::serde_json::Value {
                $crate::convert::raw::encode_raw(self, scope)
            }
        }
    )+};
}

/// Declare a fieldless enum together with its backing values.
///
/// ```
/// json_mapper::raw_enum! {
///     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
///     pub enum Color: i64 {
///         Red = 0,
///         Blue = 1,
///     }
/// }
///
/// json_mapper::raw_enum! {
///     #[derive(Debug, Clone, PartialEq, Eq)]
///     pub enum Suit: String {
///         Hearts = "hearts",
///         Spades = "spades",
///     }
/// }
///
/// use json_mapper::RawRepresentable;
/// assert_eq!(Color::from_raw(1), Some(Color::Blue));
/// assert_eq!(Suit::Spades.to_raw(), "spades");
/// ```
#[macro_export]
macro_rules! raw_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : String {
            $($variant:ident = $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $($variant),+
        }

        impl $crate::RawRepresentable for $name {
            type Raw = ::std::string::String;

            fn from_raw(raw: ::std::string::String) -> ::core::option::Option<Self> {
                match raw.as_str() {
                    $($value => ::core::option::Option::Some(Self::$variant),)+
                    _ => ::core::option::Option::None,
                }
            }

            fn to_raw(&self) -> ::std::string::String {
                match self {
                    $(Self::$variant => ::std::string::String::from($value),)+
                }
            }
        }

        $crate::raw_convertible!($name);
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $raw:ty {
            $($variant:ident = $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $($variant),+
        }

        impl $crate::RawRepresentable for $name {
            type Raw = $raw;

            fn from_raw(raw: $raw) -> ::core::option::Option<Self> {
                $(
                    if raw == $value {
                        return ::core::option::Option::Some(Self::$variant);
                    }
                )+
                ::core::option::Option::None
            }

            fn to_raw(&self) -> $raw {
                match self {
                    $(Self::$variant => $value,)+
                }
            }
        }

        $crate::raw_convertible!($name);
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapperConfig;
    use serde_json::json;

    crate::raw_enum! {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        enum Level: u8 {
            Low = 1,
            High = 9,
        }
    }

    crate::raw_enum! {
        #[derive(Debug, Clone, PartialEq, Eq)]
        enum Mode: String {
            Fast = "fast",
            Safe = "safe",
        }
    }

    #[derive(Debug, PartialEq)]
    struct Percent(u8);

    impl RawRepresentable for Percent {
        type Raw = i64;

        fn from_raw(raw: i64) -> Option<Self> {
            u8::try_from(raw).ok().filter(|n| *n <= 100).map(Percent)
        }

        fn to_raw(&self) -> i64 {
            i64::from(self.0)
        }
    }

    crate::raw_convertible!(Percent);

    fn scope() -> Scope {
        Scope::new(MapperConfig::default())
    }

    #[test]
    fn integer_backed_enum() {
        let mut scope = scope();
        assert_eq!(Level::from_json(&json!(9), &mut scope), Some(Level::High));
        assert_eq!(Level::from_json(&json!(5), &mut scope), None);
        assert_eq!(Level::from_json(&json!("9"), &mut scope), None);
        assert_eq!(Level::Low.to_json(&mut scope), json!(1));
    }

    #[test]
    fn string_backed_enum() {
        let mut scope = scope();
        assert_eq!(Mode::from_json(&json!("safe"), &mut scope), Some(Mode::Safe));
        assert_eq!(Mode::from_json(&json!("SAFE"), &mut scope), None);
        assert_eq!(Mode::Fast.to_json(&mut scope), json!("fast"));
    }

    #[test]
    fn hand_written_raw_representable() {
        let mut scope = scope();
        assert_eq!(Percent::from_json(&json!(40), &mut scope), Some(Percent(40)));
        assert_eq!(Percent::from_json(&json!(140), &mut scope), None);
        assert_eq!(Percent(7).to_json(&mut scope), json!(7));
    }
}
