//! Ordered statistics records and the reporting interface.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// A single reported value.
#[derive(Debug, Clone, PartialEq)]
pub enum StatValue {
    /// A count or an integer sample value.
    Int(i64),
    /// A measured quantity.
    Float(f64),
    /// A label.
    Text(String),
}

impl StatValue {
    /// Returns the value as a number, if it is one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StatValue::Int(v) => Some(*v as f64),
            StatValue::Float(v) => Some(*v),
            StatValue::Text(_) => None,
        }
    }

    /// Returns the value as text, if it is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StatValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Int(v) => write!(f, "{v}"),
            StatValue::Float(v) => write!(f, "{v:.2}"),
            StatValue::Text(s) => f.write_str(s),
        }
    }
}

macro_rules! int_stat_value {
    ($($t:ty),*) => {
        $(impl From<$t> for StatValue {
            fn from(v: $t) -> Self {
                StatValue::Int(v as i64)
            }
        })*
    };
}

int_stat_value!(u8, u32, u64, usize, i16, i32, i64);

impl From<f64> for StatValue {
    fn from(v: f64) -> Self {
        StatValue::Float(v)
    }
}

impl From<&str> for StatValue {
    fn from(v: &str) -> Self {
        StatValue::Text(v.to_owned())
    }
}

impl From<String> for StatValue {
    fn from(v: String) -> Self {
        StatValue::Text(v)
    }
}

impl Serialize for StatValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StatValue::Int(v) => serializer.serialize_i64(*v),
            StatValue::Float(v) => serializer.serialize_f64(*v),
            StatValue::Text(s) => serializer.serialize_str(s),
        }
    }
}

/// Metric names mapped to values, in insertion order.
///
/// Records are built once per operation and never modified afterwards;
/// they exist for display and export only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatisticsRecord {
    entries: Vec<(String, StatValue)>,
}

impl StatisticsRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<StatValue>) -> Self {
        self.entries.push((name.into(), value.into()));
        self
    }

    /// Appends every entry of `other`.
    pub fn extend(mut self, other: StatisticsRecord) -> Self {
        self.entries.extend(other.entries);
        self
    }

    /// Looks up a value by metric name.
    pub fn get(&self, name: &str) -> Option<&StatValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StatValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the record has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for StatisticsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.entries {
            writeln!(f, "{key}: {value}")?;
        }
        Ok(())
    }
}

impl Serialize for StatisticsRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Typed statistics that can be flattened into a [`StatisticsRecord`].
pub trait Report {
    /// Flattens the statistics into display order.
    fn record(&self) -> StatisticsRecord;
}

impl Report for StatisticsRecord {
    fn record(&self) -> StatisticsRecord {
        self.clone()
    }
}
