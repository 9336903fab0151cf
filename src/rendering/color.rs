//! Qualitative palette and ordinal color scale.

use std::collections::HashMap;

/// Tableau10, in its canonical order.
pub static TABLEAU10: [&str; 10] = [
    "#4e79a7", "#f28e2c", "#e15759", "#76b7b2", "#59a14f", "#edc949", "#af7aa1", "#ff9da7",
    "#9c755f", "#bab0ab",
];

/// Maps each distinct key to a palette entry by first-seen position,
/// cycling when there are more keys than colors.
#[derive(Debug, Clone)]
pub struct OrdinalScale {
    index: HashMap<String, usize>,
    range: &'static [&'static str],
}

impl OrdinalScale {
    pub fn new<I, S>(domain: I, range: &'static [&'static str]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut index = HashMap::new();
        for key in domain {
            let next = index.len();
            index.entry(key.into()).or_insert(next);
        }
        Self { index, range }
    }

    pub fn tableau10<I, S>(domain: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(domain, &TABLEAU10)
    }

    /// Color for `key`; keys outside the domain take the slot the next new
    /// key would get.
    pub fn color(&self, key: &str) -> &'static str {
        let slot = self.index.get(key).copied().unwrap_or(self.index.len());
        self.range[slot % self.range.len()]
    }

    pub fn domain_len(&self) -> usize {
        self.index.len()
    }
}
