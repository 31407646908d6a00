/// A small insertion-ordered map of named, algorithm-specific metrics.
///
/// Keys are static identifiers chosen by each matcher (e.g. `"#small"`).
/// Setting an existing key replaces its value in place, so the report column
/// order is the order in which the matcher first recorded each metric.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtraMetrics(Vec<(&'static str, i64)>);

impl ExtraMetrics {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the metric `name` to `value`, replacing any previous value.
    pub fn set(&mut self, name: &'static str, value: i64) {
        if let Some(entry) = self.0.iter_mut().find(|(k, _)| *k == name) {
            entry.1 = value;
        } else {
            self.0.push((name, value));
        }
    }

    /// Returns the value of the metric `name`, if recorded.
    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<i64> {
        self.0.iter().find(|(k, _)| *k == name).map(|(_, v)| *v)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, i64)> + '_ {
        self.0.iter().copied()
    }
}

impl<'a> IntoIterator for &'a ExtraMetrics {
    type Item = (&'static str, i64);
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, (&'static str, i64)>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn set_replaces_in_place() {
        let mut extra = ExtraMetrics::new();
        extra.set("#small", 3);
        extra.set("#other", -1);
        extra.set("#small", 5);

        assert_eq!(extra.len(), 2);
        assert_eq!(extra.get("#small"), Some(5));
        assert_eq!(extra.get("#missing"), None);
        assert_eq!(extra.iter().collect::<Vec<_>>(), vec![("#small", 5), ("#other", -1)]);
    }
}
