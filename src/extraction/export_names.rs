use std::collections::HashSet;

/// Set of exported class names, iterated in first-insertion order.
///
/// Rendering order follows discovery order in the source, so the set never
/// sorts. Re-inserting a present name keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportNames {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl ExportNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a name. Returns false if it was already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.seen.contains(&name) {
            return false;
        }
        self.seen.insert(name.clone());
        self.order.push(name);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ExportNames {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut names = Self::new();
        for name in iter {
            names.insert(name);
        }
        names
    }
}
