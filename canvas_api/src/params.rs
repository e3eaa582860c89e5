//! Query and form parameter encoding.
//!
//! Keys follow the API's Rails-style convention: scalars as `key`, members of
//! a nested group as `group[member]` and lists as `key[]`, one pair per
//! element. `None` and empty lists contribute nothing.

use chrono::{DateTime, SecondsFormat, Utc};
use url::form_urlencoded;

/// Ordered list of encoded key/value pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(String, String)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `value` under `key`. Lists append `[]` to the key.
    pub fn with<V: ParamValue + ?Sized>(mut self, key: &str, value: &V) -> Self {
        value.append_to(key, &mut self.pairs);
        self
    }

    pub fn push<V: ParamValue + ?Sized>(&mut self, key: &str, value: &V) {
        value.append_to(key, &mut self.pairs);
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value stored under `key`, in insertion order.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// `application/x-www-form-urlencoded` rendering; empty for no pairs.
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }

    /// Parses an encoded string back into pairs with the same key convention.
    pub fn decode(encoded: &str) -> Self {
        Self {
            pairs: form_urlencoded::parse(encoded.as_bytes())
                .into_owned()
                .collect(),
        }
    }
}

/// A value that can be written as one or more parameter pairs.
pub trait ParamValue {
    fn append_to(&self, key: &str, pairs: &mut Vec<(String, String)>);
}

macro_rules! display_param {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ParamValue for $ty {
                fn append_to(&self, key: &str, pairs: &mut Vec<(String, String)>) {
                    pairs.push((key.to_string(), self.to_string()));
                }
            }
        )*
    };
}

display_param!(str, String, i32, i64, u32, u64, f64, bool);

impl ParamValue for DateTime<Utc> {
    fn append_to(&self, key: &str, pairs: &mut Vec<(String, String)>) {
        pairs.push((
            key.to_string(),
            self.to_rfc3339_opts(SecondsFormat::Secs, true),
        ));
    }
}

impl<T: ParamValue> ParamValue for Option<T> {
    fn append_to(&self, key: &str, pairs: &mut Vec<(String, String)>) {
        if let Some(value) = self {
            value.append_to(key, pairs);
        }
    }
}

impl<T: ParamValue> ParamValue for Vec<T> {
    fn append_to(&self, key: &str, pairs: &mut Vec<(String, String)>) {
        self.as_slice().append_to(key, pairs);
    }
}

impl<T: ParamValue> ParamValue for [T] {
    fn append_to(&self, key: &str, pairs: &mut Vec<(String, String)>) {
        let key = format!("{}[]", key);
        for value in self {
            value.append_to(&key, pairs);
        }
    }
}

impl<T: ParamValue + ?Sized> ParamValue for &T {
    fn append_to(&self, key: &str, pairs: &mut Vec<(String, String)>) {
        (**self).append_to(key, pairs);
    }
}
