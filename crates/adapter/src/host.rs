use anyhow::Context;
use domain::{ColumnSet, SortableColumns, UserListQuery};
use futures::future::BoxFuture;
use std::fmt;
use url::Url;

use crate::traits::HostServices;

/// Extension points of the admin user list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hook {
    ManageUsersColumns,
    ManageUsersCustomColumn,
    ManageUsersSortableColumns,
    PreUserQuery,
}

impl Hook {
    pub fn name(self) -> &'static str {
        match self {
            Self::ManageUsersColumns => "manage_users_columns",
            Self::ManageUsersCustomColumn => "manage_users_custom_column",
            Self::ManageUsersSortableColumns => "manage_users_sortable_columns",
            Self::PreUserQuery => "pre_user_query",
        }
    }
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub type ColumnsFilter = Box<dyn Fn(ColumnSet) -> ColumnSet + Send + Sync>;
pub type SortableColumnsFilter = Box<dyn Fn(SortableColumns) -> SortableColumns + Send + Sync>;
pub type UserQueryFilter = Box<dyn Fn(UserListQuery) -> UserListQuery + Send + Sync>;
/// `(output, column_name, user_id) -> output`
pub type CustomColumnFilter =
    Box<dyn Fn(String, String, i64) -> BoxFuture<'static, String> + Send + Sync>;

/// A callback bound to the hook it filters.
pub enum Filter {
    Columns(ColumnsFilter),
    SortableColumns(SortableColumnsFilter),
    UserQuery(UserQueryFilter),
    CustomColumn(CustomColumnFilter),
}

impl Filter {
    pub fn hook(&self) -> Hook {
        match self {
            Self::Columns(_) => Hook::ManageUsersColumns,
            Self::SortableColumns(_) => Hook::ManageUsersSortableColumns,
            Self::UserQuery(_) => Hook::PreUserQuery,
            Self::CustomColumn(_) => Hook::ManageUsersCustomColumn,
        }
    }
}

/// Where extensions register their filters.
pub trait HostAdapter {
    fn add_filter(&mut self, filter: Filter);
}

/// Host services for a single admin site.
#[derive(Debug, Clone)]
pub struct AdminSite {
    base: Url,
}

impl AdminSite {
    pub fn new(admin_base_url: &str) -> anyhow::Result<Self> {
        let mut base = Url::parse(admin_base_url)
            .with_context(|| format!("Invalid admin base URL: {}", admin_base_url))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { base })
    }
}

impl HostServices for AdminSite {
    fn admin_url(&self, path: &str, args: &[(&str, &str)]) -> String {
        let mut url = self
            .base
            .join(path.trim_start_matches('/'))
            .unwrap_or_else(|_| self.base.clone());
        if !args.is_empty() {
            url.query_pairs_mut().extend_pairs(args);
        }
        url.into()
    }

    fn translate(&self, text: &str) -> String {
        text.to_string()
    }

    fn translate_plural(&self, single: &str, plural: &str, n: u64) -> String {
        let form = if n == 1 { single } else { plural };
        form.to_string()
    }
}
