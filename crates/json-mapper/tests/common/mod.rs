#![allow(dead_code)]

//! Models shared by the integration tests.

use std::collections::{BTreeSet, HashMap};
use std::hash::{Hash, Hasher};

use json_mapper::{Mappable, MappingContext};

json_mapper::raw_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Color: i64 {
        Red = 0,
        Blue = 1,
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub zip: Option<String>,
}

impl Mappable for Address {
    fn construct(_map: &MappingContext<'_>) -> Option<Self> {
        Some(Self::default())
    }

    fn mapping(&mut self, map: &mut MappingContext<'_>) {
        map.required("street", &mut self.street);
        map.required("city", &mut self.city);
        map.optional("zip", &mut self.zip);
    }
}

/// Exercises every field shape and category.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: i64,
    pub name: String,
    pub active: bool,
    pub score: f64,
    pub nickname: Option<String>,
    pub favorite: Color,
    pub accent: Option<Color>,
    pub token: Option<String>,
    pub address: Address,
    pub previous: Option<Address>,
    pub tags: Vec<String>,
    pub totals: HashMap<String, i64>,
    pub badges: BTreeSet<String>,
    pub depth: u32,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            active: false,
            score: 0.0,
            nickname: None,
            favorite: Color::Red,
            accent: None,
            token: None,
            address: Address::default(),
            previous: None,
            tags: Vec::new(),
            totals: HashMap::new(),
            badges: BTreeSet::new(),
            depth: 0,
        }
    }
}

impl Mappable for Profile {
    /// A profile needs at least an id.
    fn construct(map: &MappingContext<'_>) -> Option<Self> {
        map.is_key_present("id").then(Self::default)
    }

    fn mapping(&mut self, map: &mut MappingContext<'_>) {
        map.required("id", &mut self.id);
        map.required("name", &mut self.name);
        map.required("active", &mut self.active);
        map.required("score", &mut self.score);
        map.optional("nickname", &mut self.nickname);
        map.required("favorite", &mut self.favorite);
        map.optional("accent", &mut self.accent);
        map.implicit("auth.token", &mut self.token);
        map.required("address", &mut self.address);
        map.optional("previous", &mut self.previous);
        map.required("tags", &mut self.tags);
        map.required("totals", &mut self.totals);
        map.required("badges", &mut self.badges);
        map.required("stats.tree.depth", &mut self.depth);
    }
}

pub fn sample_profile() -> Profile {
    Profile {
        id: 42,
        name: "Ada".to_string(),
        active: true,
        score: 97.5,
        nickname: Some("countess".to_string()),
        favorite: Color::Blue,
        accent: Some(Color::Red),
        token: Some("t-1".to_string()),
        address: Address {
            street: "12 St James's Square".to_string(),
            city: "London".to_string(),
            zip: Some("SW1Y".to_string()),
        },
        previous: Some(Address {
            street: "Ockham Park".to_string(),
            city: "Surrey".to_string(),
            zip: None,
        }),
        tags: vec!["math".to_string(), "engines".to_string()],
        totals: HashMap::from([("notes".to_string(), 7), ("letters".to_string(), 3)]),
        badges: BTreeSet::from(["first".to_string(), "programmer".to_string()]),
        depth: 3,
    }
}

/// Equality and hashing by `id` only.
#[derive(Debug, Clone, Default)]
pub struct Tagged {
    pub id: i64,
    pub label: Option<String>,
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Tagged {}

impl Hash for Tagged {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Mappable for Tagged {
    fn construct(map: &MappingContext<'_>) -> Option<Self> {
        let id = map.value("id")?;
        Some(Self { id, label: None })
    }

    fn mapping(&mut self, map: &mut MappingContext<'_>) {
        map.required("id", &mut self.id);
        map.optional("label", &mut self.label);
    }
}

/// A field bound to a three-level key path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Deep {
    pub value: i64,
}

impl Mappable for Deep {
    fn construct(_map: &MappingContext<'_>) -> Option<Self> {
        Some(Self::default())
    }

    fn mapping(&mut self, map: &mut MappingContext<'_>) {
        map.required("a.b.c", &mut self.value);
    }
}
