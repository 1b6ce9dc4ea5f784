//! Ordered request parameters.

use urlencoding::encode;

/// Ordered map of parameter names to optional values.
///
/// Entries keep their insertion position; overwriting a key updates it in
/// place. `None` values are stored but left out of the encoded string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamsMap {
    entries: Vec<(String, Option<String>)>,
}

impl ParamsMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores or overwrites `key`.
    pub fn put<K, V>(&mut self, key: K, value: Option<V>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        let value = value.map(Into::into);
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Stores a present value.
    pub fn add_param(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.put(key, Some(value));
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Removes `key`, returning its value if it had one.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        self.entries.remove(idx).1
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    /// `key=value` pairs joined by `&` in insertion order. Keys and values
    /// are percent-encoded and entries without a value are skipped.
    #[must_use]
    pub fn to_url_string(&self) -> String {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.as_ref().map(|v| format!("{}={}", encode(k), encode(v))))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K, V> FromIterator<(K, V)> for ParamsMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = ParamsMap::new();
        for (k, v) in iter {
            params.add_param(k, v);
        }
        params
    }
}
