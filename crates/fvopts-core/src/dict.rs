//! In-memory configuration dictionaries.
//!
//! A [`Dictionary`] is the parsed form of one configuration block: an
//! ordered map from keyword to [`Entry`], where an entry may itself be a
//! nested dictionary. Reading text into this tree is the host's job; the
//! library only ever consumes the tree.
//!
//! Every dictionary carries a scope name (its path from the root, joined
//! with `/`) so that lookup failures can say *where* a keyword was missing.

use crate::error::DictError;
use crate::vector::Vector;
use indexmap::IndexMap;

/// A single configuration value.
#[derive(Clone, Debug, PartialEq)]
pub enum Entry {
    /// A bare word, e.g. a type name or mode token.
    Word(String),
    /// A real number.
    Scalar(f64),
    /// A three-component vector literal `(x y z)`.
    Vector(Vector),
    /// A switch.
    Bool(bool),
    /// A parenthesised list of entries.
    List(Vec<Entry>),
    /// A nested dictionary.
    Dict(Dictionary),
}

impl Entry {
    /// Human-readable kind, used in type-mismatch diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Word(_) => "word",
            Self::Scalar(_) => "scalar",
            Self::Vector(_) => "vector",
            Self::Bool(_) => "bool",
            Self::List(_) => "list",
            Self::Dict(_) => "dictionary",
        }
    }

    /// Interpret as a vector: either a vector literal or a list of three scalars.
    pub fn as_vector(&self) -> Option<Vector> {
        match self {
            Self::Vector(v) => Some(*v),
            Self::List(items) if items.len() == 3 => {
                let mut c = [0.0; 3];
                for (slot, item) in c.iter_mut().zip(items) {
                    match item {
                        Self::Scalar(s) => *slot = *s,
                        _ => return None,
                    }
                }
                Some(Vector::from(c))
            }
            _ => None,
        }
    }

    /// Interpret as a switch. Accepts `Bool` and the words
    /// `yes/no`, `on/off`, `true/false`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Word(w) => match w.as_str() {
                "yes" | "on" | "true" => Some(true),
                "no" | "off" | "false" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }
}

impl From<&str> for Entry {
    fn from(w: &str) -> Self {
        Self::Word(w.to_string())
    }
}

impl From<String> for Entry {
    fn from(w: String) -> Self {
        Self::Word(w)
    }
}

impl From<f64> for Entry {
    fn from(s: f64) -> Self {
        Self::Scalar(s)
    }
}

impl From<Vector> for Entry {
    fn from(v: Vector) -> Self {
        Self::Vector(v)
    }
}

impl From<bool> for Entry {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Vec<Entry>> for Entry {
    fn from(items: Vec<Entry>) -> Self {
        Self::List(items)
    }
}

impl From<Dictionary> for Entry {
    fn from(d: Dictionary) -> Self {
        Self::Dict(d)
    }
}

/// An ordered keyword → [`Entry`] map with a scope name.
///
/// # Examples
///
/// ```
/// use fvopts_core::{Dictionary, Vector};
///
/// let dict = Dictionary::new("accelerationSource")
///     .with("type", "accelerationSource")
///     .with("value", Vector::new(-2.572, 0.0, 0.0))
///     .with("scale", Dictionary::new("scale").with("duration", 10.0));
///
/// assert_eq!(dict.lookup_word("type").unwrap(), "accelerationSource");
/// assert_eq!(dict.lookup_dict("scale").unwrap().name(), "accelerationSource/scale");
/// assert!(dict.lookup_scalar("missing").is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Dictionary {
    name: String,
    entries: IndexMap<String, Entry>,
}

impl Dictionary {
    /// An empty dictionary with the given scope name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: IndexMap::new(),
        }
    }

    /// Scope name (path from the root dictionary).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Last path component of the scope name.
    pub fn keyword(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Entry>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace an entry, returning the previous one.
    ///
    /// Nested dictionaries are re-scoped under this dictionary.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Entry>) -> Option<Entry> {
        let key = key.into();
        let mut value = value.into();
        if let Entry::Dict(d) = &mut value {
            d.rescope(format!("{}/{}", self.name, key));
        }
        self.entries.insert(key, value)
    }

    /// Remove an entry, preserving the order of the rest.
    pub fn remove(&mut self, key: &str) -> Option<Entry> {
        self.entries.shift_remove(key)
    }

    /// A copy of this dictionary without `key`.
    pub fn without(&self, key: &str) -> Self {
        let mut copy = self.clone();
        copy.remove(key);
        copy
    }

    /// Raw entry access.
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    /// Whether `key` is present.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keywords in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Nested dictionaries in insertion order. Non-dictionary entries are skipped.
    pub fn sub_dicts(&self) -> impl Iterator<Item = (&str, &Dictionary)> {
        self.entries.iter().filter_map(|(k, v)| match v {
            Entry::Dict(d) => Some((k.as_str(), d)),
            _ => None,
        })
    }

    /// Required entry.
    pub fn lookup(&self, key: &str) -> Result<&Entry, DictError> {
        self.entries.get(key).ok_or_else(|| DictError::MissingKey {
            scope: self.name.clone(),
            key: key.to_string(),
        })
    }

    /// Required word.
    pub fn lookup_word(&self, key: &str) -> Result<&str, DictError> {
        match self.lookup(key)? {
            Entry::Word(w) => Ok(w),
            other => Err(self.wrong_type(key, "word", other)),
        }
    }

    /// Optional word with a default.
    pub fn lookup_word_or(&self, key: &str, default: &str) -> Result<String, DictError> {
        match self.get(key) {
            None => Ok(default.to_string()),
            Some(Entry::Word(w)) => Ok(w.clone()),
            Some(other) => Err(self.wrong_type(key, "word", other)),
        }
    }

    /// Required scalar.
    pub fn lookup_scalar(&self, key: &str) -> Result<f64, DictError> {
        match self.lookup(key)? {
            Entry::Scalar(s) => Ok(*s),
            other => Err(self.wrong_type(key, "scalar", other)),
        }
    }

    /// Optional scalar with a default.
    pub fn lookup_scalar_or(&self, key: &str, default: f64) -> Result<f64, DictError> {
        Ok(self.lookup_optional_scalar(key)?.unwrap_or(default))
    }

    /// Optional scalar without a default.
    pub fn lookup_optional_scalar(&self, key: &str) -> Result<Option<f64>, DictError> {
        match self.get(key) {
            None => Ok(None),
            Some(Entry::Scalar(s)) => Ok(Some(*s)),
            Some(other) => Err(self.wrong_type(key, "scalar", other)),
        }
    }

    /// Required vector (a vector literal or a list of three scalars).
    pub fn lookup_vector(&self, key: &str) -> Result<Vector, DictError> {
        let entry = self.lookup(key)?;
        entry
            .as_vector()
            .ok_or_else(|| self.wrong_type(key, "vector", entry))
    }

    /// Optional switch with a default.
    pub fn lookup_bool_or(&self, key: &str, default: bool) -> Result<bool, DictError> {
        match self.get(key) {
            None => Ok(default),
            Some(entry) => entry
                .as_bool()
                .ok_or_else(|| self.wrong_type(key, "bool", entry)),
        }
    }

    /// Required nested dictionary.
    pub fn lookup_dict(&self, key: &str) -> Result<&Dictionary, DictError> {
        match self.lookup(key)? {
            Entry::Dict(d) => Ok(d),
            other => Err(self.wrong_type(key, "dictionary", other)),
        }
    }

    /// Required list of `(x, y)` scalar pairs, e.g. a table of `(time value)` rows.
    pub fn lookup_pairs(&self, key: &str) -> Result<Vec<(f64, f64)>, DictError> {
        let entry = self.lookup(key)?;
        let Entry::List(rows) = entry else {
            return Err(self.wrong_type(key, "list of pairs", entry));
        };
        rows.iter()
            .map(|row| match row {
                Entry::List(pair) => match pair.as_slice() {
                    [Entry::Scalar(x), Entry::Scalar(y)] => Ok((*x, *y)),
                    _ => Err(self.wrong_type(key, "list of pairs", row)),
                },
                other => Err(self.wrong_type(key, "list of pairs", other)),
            })
            .collect()
    }

    /// An [`DictError::InvalidValue`] scoped to this dictionary.
    pub fn invalid(&self, key: &str, reason: impl Into<String>) -> DictError {
        DictError::InvalidValue {
            scope: self.name.clone(),
            key: key.to_string(),
            reason: reason.into(),
        }
    }

    fn wrong_type(&self, key: &str, expected: &'static str, found: &Entry) -> DictError {
        DictError::WrongType {
            scope: self.name.clone(),
            key: key.to_string(),
            expected,
            found: found.kind(),
        }
    }

    fn rescope(&mut self, name: String) {
        for (key, entry) in self.entries.iter_mut() {
            if let Entry::Dict(d) = entry {
                d.rescope(format!("{name}/{key}"));
            }
        }
        self.name = name;
    }
}
