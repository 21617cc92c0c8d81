//! json-mapper - bidirectional mapping between JSON values and typed models.
//!
//! A model implements [`Mappable`]: one `mapping` routine lists its fields
//! with their key paths, and the same routine drives both decoding
//! (JSON → model) and encoding (model → JSON). Field types convert through
//! [`Convertible`], implemented for primitives, [`serde_json::Value`],
//! raw-representable enums, nested models and collections of all of these.
//!
//! ```
//! use json_mapper::{Mappable, Mapper, MappingContext};
//!
//! json_mapper::raw_enum! {
//!     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//!     pub enum Role: i64 {
//!         Member = 0,
//!         Admin = 1,
//!     }
//! }
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct User {
//!     id: u64,
//!     name: String,
//!     role: Role,
//!     city: Option<String>,
//!     friends: Vec<User>,
//! }
//!
//! impl Mappable for User {
//!     fn construct(map: &MappingContext<'_>) -> Option<Self> {
//!         Some(User {
//!             id: map.value("id")?,
//!             name: String::new(),
//!             role: Role::Member,
//!             city: None,
//!             friends: Vec::new(),
//!         })
//!     }
//!
//!     fn mapping(&mut self, map: &mut MappingContext<'_>) {
//!         map.required("id", &mut self.id);
//!         map.required("name", &mut self.name);
//!         map.required("role", &mut self.role);
//!         map.optional("address.city", &mut self.city);
//!         map.required("friends", &mut self.friends);
//!     }
//! }
//!
//! let mapper = Mapper::new();
//! let text = r#"{"id": 1, "name": "Ada", "role": 1, "address": {"city": "London"},
//!               "friends": [{"id": 2, "name": "Bob"}, {"name": "no id"}]}"#;
//! let user: User = mapper.map(text).unwrap();
//! assert_eq!(user.role, Role::Admin);
//! assert_eq!(user.city.as_deref(), Some("London"));
//! assert_eq!(user.friends.len(), 1);
//!
//! let json = mapper.to_json(&user);
//! assert_eq!(json["address"]["city"], "London");
//! assert_eq!(mapper.map::<User>(&json), Some(user));
//! ```
//!
//! Failures never panic: a field that cannot be bound keeps its prior value
//! (or becomes `None`), failing container elements are skipped, and every such
//! event is recorded in the [`Diagnostics`] returned by the `try_*` entry
//! points.

pub mod config;
pub mod context;
pub mod convert;
pub mod diagnostics;
pub mod error;
pub mod mappable;
pub mod mapper;
pub mod scope;

pub use config::MapperConfig;
pub use context::{Direction, MappingContext};
pub use convert::raw::RawRepresentable;
pub use convert::{kind_name, Convertible};
pub use diagnostics::{Diagnostics, FieldShape, Issue, IssueKind};
pub use error::MapError;
pub use json_mapper_key_path::{KeyPath, KeyPathError};
pub use mappable::{Mappable, MappableCollection};
pub use mapper::{Mapped, Mapper, Source};
pub use scope::Scope;

pub use serde_json;
