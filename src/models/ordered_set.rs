use serde::Serialize;

/// Insertion-ordered collection of strings with no duplicates.
///
/// Insert and remove report whether they changed anything; each record type
/// decides whether that outcome is an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OrderedSet {
    items: Vec<String>,
}

impl OrderedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `item` unless already present. Returns true if inserted.
    pub fn insert(&mut self, item: &str) -> bool {
        if self.contains(item) {
            return false;
        }
        self.items.push(item.to_string());
        true
    }

    /// Remove `item` if present. Returns true if removed.
    pub fn remove(&mut self, item: &str) -> bool {
        match self.items.iter().position(|existing| existing == item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|existing| existing == item)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}

/// Builds a set keeping the first occurrence of each item.
impl<S: AsRef<str>> FromIterator<S> for OrderedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for item in iter {
            set.insert(item.as_ref());
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_preserves_order_and_rejects_duplicates() {
        let mut set = OrderedSet::new();
        assert!(set.insert("b"));
        assert!(set.insert("a"));
        assert!(!set.insert("b"));
        assert_eq!(set.as_slice(), ["b", "a"]);
    }

    #[test]
    fn remove_reports_presence() {
        let mut set: OrderedSet = ["x", "y"].into_iter().collect();
        assert!(set.remove("x"));
        assert!(!set.remove("x"));
        assert_eq!(set.as_slice(), ["y"]);
    }

    #[test]
    fn insert_then_remove_restores_prior_state() {
        let mut set: OrderedSet = ["x"].into_iter().collect();
        let before = set.clone();
        set.insert("z");
        set.remove("z");
        assert_eq!(set, before);
    }

    #[test]
    fn from_iter_deduplicates_keeping_first() {
        let set: OrderedSet = ["a", "b", "a", "c", "b"].into_iter().collect();
        assert_eq!(set.as_slice(), ["a", "b", "c"]);
    }
}
