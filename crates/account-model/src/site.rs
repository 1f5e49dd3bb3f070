use std::collections::BTreeMap;

/// Raw site code to published site identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteKeyMap {
    entries: BTreeMap<String, String>,
}

impl SiteKeyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a mapping, returning the identifier it replaced.
    pub fn insert(&mut self, site: impl Into<String>, id: impl Into<String>) -> Option<String> {
        self.entries.insert(site.into(), id.into())
    }

    /// Looks up a site code, ignoring surrounding whitespace.
    pub fn get(&self, site: &str) -> Option<&str> {
        self.entries.get(site.trim()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(site, id)| (site.as_str(), id.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SiteKeyMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (site, id) in iter {
            map.insert(site, id);
        }
        map
    }
}
