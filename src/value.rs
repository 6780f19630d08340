//! Value types produced by loading YAML documents.
//!
//! Values cover the scalar and collection forms the facade exposes:
//! primitives, symbols, dates, timestamps with microsecond precision,
//! ordered sequences, and mappings that may use composite keys.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// Possible values a YAML document can hold.
///
/// # Examples
///
/// ```
/// use yamlcompat::Value;
///
/// let int_val = Value::Int(47);
/// let string_val = Value::String("hello".to_string());
/// let symbol_val = Value::symbol("locked");
///
/// assert!(int_val.is_int());
/// assert!(string_val.is_string());
/// assert_eq!(symbol_val.as_symbol(), Some("locked"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Symbol(String),
    Date(NaiveDate),
    Timestamp(DateTime<FixedOffset>),
    Seq(Vec<Value>),
    Map(Mapping),
}

/// An insertion-ordered mapping with arbitrary `Value` keys.
///
/// Keys may be composite (sequences, dates). Equality is key-order
/// irrelevant: two mappings are equal when they hold the same key/value
/// pairs in any order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Mapping {
    entries: Vec<(Value, Value)>,
}

impl Mapping {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a key/value pair. If an equal key is already present its
    /// value is replaced in place, keeping the original position.
    pub fn insert(&mut self, key: Value, value: Value) {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Looks up the value for a key.
    #[must_use]
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the mapping has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

impl PartialEq for Mapping {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .all(|(k, v)| other.get(k) == Some(v))
    }
}

impl FromIterator<(Value, Value)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (Value, Value)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl From<Vec<(Value, Value)>> for Mapping {
    fn from(entries: Vec<(Value, Value)>) -> Self {
        entries.into_iter().collect()
    }
}

impl IntoIterator for Mapping {
    type Item = (Value, Value);
    type IntoIter = std::vec::IntoIter<(Value, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Value {
    /// Creates a symbol value (`:locked` and friends).
    #[must_use]
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    pub const fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    pub const fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    pub const fn is_symbol(&self) -> bool {
        matches!(self, Self::Symbol(_))
    }

    pub const fn is_date(&self) -> bool {
        matches!(self, Self::Date(_))
    }

    pub const fn is_timestamp(&self) -> bool {
        matches!(self, Self::Timestamp(_))
    }

    pub const fn is_seq(&self) -> bool {
        matches!(self, Self::Seq(_))
    }

    pub const fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    /// Returns true for any non-collection value.
    pub const fn is_scalar(&self) -> bool {
        !matches!(self, Self::Seq(_) | Self::Map(_))
    }

    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Self::Symbol(v) => Some(v),
            _ => None,
        }
    }

    pub const fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(v) => Some(*v),
            _ => None,
        }
    }

    pub const fn as_timestamp(&self) -> Option<DateTime<FixedOffset>> {
        match self {
            Self::Timestamp(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Self::Seq(v) => Some(v),
            _ => None,
        }
    }

    pub const fn as_map(&self) -> Option<&Mapping> {
        match self {
            Self::Map(v) => Some(v),
            _ => None,
        }
    }

    /// Returns a human-readable type name.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Symbol(_) => "symbol",
            Self::Date(_) => "date",
            Self::Timestamp(_) => "timestamp",
            Self::Seq(_) => "seq",
            Self::Map(_) => "map",
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(v) => write!(f, "{v:?}"),
            Self::Symbol(v) => write!(f, ":{v}"),
            Self::Date(v) => write!(f, "{v}"),
            Self::Timestamp(v) => write!(f, "{v}"),
            Self::Seq(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Map(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

// Convenient From implementations
impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Self::Date(v)
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(v: DateTime<FixedOffset>) -> Self {
        Self::Timestamp(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl From<Mapping> for Value {
    fn from(v: Mapping) -> Self {
        Self::Map(v)
    }
}

/// Convenience serialization form: `value.to_yaml()`.
///
/// Available for any type convertible into [`Value`].
///
/// # Examples
///
/// ```
/// use yamlcompat::ToYaml;
///
/// assert_eq!("foo".to_yaml(), "--- foo\n");
/// assert_eq!(47i64.to_yaml(), "--- 47\n");
/// ```
pub trait ToYaml {
    /// Serializes the value to a YAML document string.
    fn to_yaml(&self) -> String;
}

impl<T> ToYaml for T
where
    T: Clone + Into<Value>,
{
    fn to_yaml(&self) -> String {
        crate::emit::dump(&self.clone().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_int() {
        let val = Value::Int(47);
        assert!(val.is_int());
        assert_eq!(val.as_int(), Some(47));
        assert_eq!(val.as_float(), Some(47.0)); // Int can be read as float
        assert_eq!(val.type_name(), "int");
    }

    #[test]
    fn test_value_string() {
        let val = Value::from("hello");
        assert!(val.is_string());
        assert_eq!(val.as_str(), Some("hello"));
        assert_eq!(val.type_name(), "string");
    }

    #[test]
    fn test_value_symbol() {
        let val = Value::symbol("locked");
        assert!(val.is_symbol());
        assert!(!val.is_string());
        assert_eq!(val.as_symbol(), Some("locked"));
        assert_eq!(val.type_name(), "symbol");
    }

    #[test]
    fn test_value_date() {
        let date = NaiveDate::from_ymd_opt(2001, 7, 23).unwrap();
        let val = Value::from(date);
        assert!(val.is_date());
        assert_eq!(val.as_date(), Some(date));
    }

    #[test]
    fn test_value_seq_from_vec() {
        let val = Value::from(vec!["a", "b", "c"]);
        assert!(val.is_seq());
        assert_eq!(
            val.as_seq(),
            Some(&[Value::from("a"), Value::from("b"), Value::from("c")][..])
        );
    }

    #[test]
    fn test_value_null_default() {
        let val = Value::default();
        assert!(val.is_null());
        assert!(val.is_scalar());
        assert_eq!(val.type_name(), "null");
    }

    #[test]
    fn test_value_display() {
        assert_eq!(format!("{}", Value::Bool(true)), "true");
        assert_eq!(format!("{}", Value::Int(42)), "42");
        assert_eq!(format!("{}", Value::from("hi")), "\"hi\"");
        assert_eq!(format!("{}", Value::symbol("locked")), ":locked");
        assert_eq!(
            format!("{}", Value::from(vec![1i64, 2, 3])),
            "[1, 2, 3]"
        );
    }

    #[test]
    fn test_mapping_insert_and_get() {
        let mut map = Mapping::new();
        map.insert(Value::symbol("a"), Value::from("b"));
        map.insert(Value::from("c"), Value::Int(1));
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&Value::symbol("a")), Some(&Value::from("b")));
        assert_eq!(map.get(&Value::from("missing")), None);
    }

    #[test]
    fn test_mapping_insert_replaces_existing_key() {
        let mut map = Mapping::new();
        map.insert(Value::from("k"), Value::Int(1));
        map.insert(Value::from("k"), Value::Int(2));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&Value::from("k")), Some(&Value::Int(2)));
    }

    #[test]
    fn test_mapping_equality_ignores_order() {
        let a: Mapping = vec![
            (Value::from("x"), Value::Int(1)),
            (Value::from("y"), Value::Int(2)),
        ]
        .into();
        let b: Mapping = vec![
            (Value::from("y"), Value::Int(2)),
            (Value::from("x"), Value::Int(1)),
        ]
        .into();
        assert_eq!(a, b);
    }

    #[test]
    fn test_mapping_composite_keys() {
        let mut map = Mapping::new();
        let key = Value::from(vec!["Detroit Tigers", "Chicago Cubs"]);
        map.insert(key.clone(), Value::from(vec!["2001-07-23"]));
        assert!(map.get(&key).is_some());
    }

    #[test]
    fn test_value_type_mismatch() {
        let val = Value::Bool(true);
        assert!(val.as_int().is_none());
        assert!(val.as_str().is_none());
        assert!(val.as_symbol().is_none());
    }
}
