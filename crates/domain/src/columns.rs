use serde::Serialize;

/// Ordered `name -> value` mapping with unique keys, as the host's list table uses for
/// its column headers and sort keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderedColumns(Vec<(String, String)>);

/// Column name to header label.
pub type ColumnSet = OrderedColumns;
/// Column name to the `orderby` value the host sends back when sorting by it.
pub type SortableColumns = OrderedColumns;

impl OrderedColumns {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new key; an existing key keeps its position and takes the new value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for OrderedColumns {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut columns = Self::new();
        for (k, v) in iter {
            columns.insert(k, v);
        }
        columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_order_and_uniqueness() {
        let mut columns: ColumnSet = [("username", "Username"), ("email", "Email")]
            .into_iter()
            .collect();
        columns.insert("posts", "Posts");
        columns.insert("username", "Login");

        let keys: Vec<&str> = columns.keys().collect();
        assert_eq!(keys, vec!["username", "email", "posts"]);
        assert_eq!(columns.get("username"), Some("Login"));
        assert_eq!(columns.len(), 3);
    }
}
