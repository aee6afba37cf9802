use domain::{ColumnSet, SortableColumns, UserListQuery};
use tracing::debug;

use crate::host::{
    ColumnsFilter, CustomColumnFilter, Filter, Hook, HostAdapter, SortableColumnsFilter,
    UserQueryFilter,
};

/// Filters registered for one admin request, applied in registration order.
#[derive(Default)]
pub struct HookRegistry {
    columns: Vec<ColumnsFilter>,
    sortable_columns: Vec<SortableColumnsFilter>,
    user_query: Vec<UserQueryFilter>,
    custom_column: Vec<CustomColumnFilter>,
}

impl HostAdapter for HookRegistry {
    fn add_filter(&mut self, filter: Filter) {
        debug!("Filter registered on {}", filter.hook());
        match filter {
            Filter::Columns(f) => self.columns.push(f),
            Filter::SortableColumns(f) => self.sortable_columns.push(f),
            Filter::UserQuery(f) => self.user_query.push(f),
            Filter::CustomColumn(f) => self.custom_column.push(f),
        }
    }
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter_count(&self, hook: Hook) -> usize {
        match hook {
            Hook::ManageUsersColumns => self.columns.len(),
            Hook::ManageUsersSortableColumns => self.sortable_columns.len(),
            Hook::PreUserQuery => self.user_query.len(),
            Hook::ManageUsersCustomColumn => self.custom_column.len(),
        }
    }

    pub fn apply_columns(&self, columns: ColumnSet) -> ColumnSet {
        self.columns.iter().fold(columns, |acc, f| f(acc))
    }

    pub fn apply_sortable_columns(&self, columns: SortableColumns) -> SortableColumns {
        self.sortable_columns.iter().fold(columns, |acc, f| f(acc))
    }

    pub fn apply_user_query(&self, query: UserListQuery) -> UserListQuery {
        self.user_query.iter().fold(query, |acc, f| f(acc))
    }

    /// Each filter sees the previous filter's output; with none registered the
    /// initial output comes back untouched.
    pub async fn apply_custom_column(&self, output: String, column: &str, user_id: i64) -> String {
        let mut output = output;
        for f in &self.custom_column {
            output = f(output, column.to_string(), user_id).await;
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::QueryVars;
    use futures::future::BoxFuture;

    #[test]
    fn test_filters_run_in_order() {
        let mut registry = HookRegistry::new();
        registry.add_filter(Filter::Columns(Box::new(|mut c: ColumnSet| {
            c.insert("a", "A");
            c
        })));
        registry.add_filter(Filter::Columns(Box::new(|mut c: ColumnSet| {
            c.insert("a", "A2");
            c.insert("b", "B");
            c
        })));

        let columns = registry.apply_columns(ColumnSet::new());
        assert_eq!(columns.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(columns.get("a"), Some("A2"));
        assert_eq!(registry.filter_count(Hook::ManageUsersColumns), 2);
        assert_eq!(registry.filter_count(Hook::PreUserQuery), 0);
    }

    #[test]
    fn test_empty_registry_passes_through() {
        let registry = HookRegistry::new();
        let query = UserListQuery::prepare(QueryVars::default());
        assert_eq!(registry.apply_user_query(query.clone()), query);
    }

    #[tokio::test]
    async fn test_custom_column_chain() {
        let mut registry = HookRegistry::new();
        registry.add_filter(Filter::CustomColumn(Box::new(
            |out: String, col: String, id: i64| -> BoxFuture<'static, String> {
                Box::pin(async move { format!("{}[{}:{}]", out, col, id) })
            },
        )));
        registry.add_filter(Filter::CustomColumn(Box::new(
            |out: String, _: String, _: i64| -> BoxFuture<'static, String> {
                Box::pin(async move { out.to_uppercase() })
            },
        )));

        let html = registry.apply_custom_column("x".into(), "posts", 3).await;
        assert_eq!(html, "X[POSTS:3]");

        let empty = HookRegistry::new();
        assert_eq!(empty.apply_custom_column("keep".into(), "posts", 3).await, "keep");
    }
}
