use serde::Deserialize;
use std::fmt;

pub const USERS_TABLE: &str = "users";
pub const COMMENTS_TABLE: &str = "comments";

const DEFAULT_PAGE_SIZE: i64 = 20;
const MAX_PAGE_SIZE: i64 = 100;

/// Row offset of a 1-based page. Pages past what `i64` can address fall back to the
/// first page.
pub fn page_offset(paged: Option<i64>, per_page: i64) -> i64 {
    let page = paged.filter(|p| *p > 0).unwrap_or(1);
    (page - 1).checked_mul(per_page).unwrap_or(0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Only a case-insensitive `ASC` sorts ascending; anything else, absent included,
    /// sorts descending.
    pub fn from_request(raw: Option<&str>) -> Self {
        match raw {
            Some(s) if s.eq_ignore_ascii_case("ASC") => Self::Asc,
            _ => Self::Desc,
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// Request parameters of the user list, as the host received them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QueryVars {
    pub orderby: Option<String>,
    pub order: Option<String>,
    pub number: Option<i64>,
    pub paged: Option<i64>,
}

/// SQL clause fragments of an in-progress user list query. Extensions rewrite these
/// before the host runs the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserListQuery {
    pub query_vars: QueryVars,
    pub query_fields: String,
    pub query_from: String,
    pub query_where: String,
    pub query_orderby: String,
    pub query_limit: String,
}

impl UserListQuery {
    /// Parses request vars into clauses the way the host does before extensions run.
    /// Sort keys the host doesn't know fall back to `login`; order follows
    /// [`SortOrder::from_request`] but defaults to ascending for the host's own keys.
    pub fn prepare(query_vars: QueryVars) -> Self {
        let column = match query_vars.orderby.as_deref() {
            Some("id") => "id",
            Some("email") => "email",
            Some("registered") => "registered_at",
            _ => "login",
        };
        let order = match query_vars.order.as_deref() {
            Some(o) if o.eq_ignore_ascii_case("DESC") => SortOrder::Desc,
            _ => SortOrder::Asc,
        };
        let number = query_vars
            .number
            .filter(|n| (1..=MAX_PAGE_SIZE).contains(n))
            .unwrap_or(DEFAULT_PAGE_SIZE);
        let offset = page_offset(query_vars.paged, number);

        Self {
            query_fields: format!(
                "SELECT {t}.id, {t}.login, {t}.email, {t}.registered_at",
                t = USERS_TABLE
            ),
            query_from: format!("FROM {}", USERS_TABLE),
            query_where: "WHERE 1=1".to_string(),
            query_orderby: format!("ORDER BY {}.{} {}", USERS_TABLE, column, order),
            query_limit: format!("LIMIT {} OFFSET {}", number, offset),
            query_vars,
        }
    }

    pub fn to_sql(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.query_fields,
            self.query_from,
            self.query_where,
            self.query_orderby.trim(),
            self.query_limit
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_order_from_request() {
        assert_eq!(SortOrder::from_request(Some("ASC")), SortOrder::Asc);
        assert_eq!(SortOrder::from_request(Some("asc")), SortOrder::Asc);
        assert_eq!(SortOrder::from_request(Some("AsC")), SortOrder::Asc);
        assert_eq!(SortOrder::from_request(Some("desc")), SortOrder::Desc);
        assert_eq!(SortOrder::from_request(Some("ascending")), SortOrder::Desc);
        assert_eq!(SortOrder::from_request(Some("")), SortOrder::Desc);
        assert_eq!(SortOrder::from_request(None), SortOrder::Desc);
    }

    #[test]
    fn test_prepare_defaults() {
        let q = UserListQuery::prepare(QueryVars::default());
        assert_eq!(q.query_from, "FROM users");
        assert_eq!(q.query_orderby, "ORDER BY users.login ASC");
        assert_eq!(q.query_limit, "LIMIT 20 OFFSET 0");
    }

    #[test]
    fn test_prepare_unknown_orderby_falls_back_to_login() {
        let q = UserListQuery::prepare(QueryVars {
            orderby: Some("'; DROP TABLE users; --".into()),
            order: Some("desc".into()),
            number: Some(5),
            paged: Some(3),
        });
        assert_eq!(q.query_orderby, "ORDER BY users.login DESC");
        assert_eq!(q.query_limit, "LIMIT 5 OFFSET 10");
    }

    #[test]
    fn test_prepare_clamps_paging() {
        let q = UserListQuery::prepare(QueryVars {
            number: Some(i64::MAX),
            paged: Some(3),
            ..Default::default()
        });
        assert_eq!(q.query_limit, "LIMIT 20 OFFSET 40");

        let q = UserListQuery::prepare(QueryVars {
            number: Some(100),
            paged: Some(i64::MAX),
            ..Default::default()
        });
        assert_eq!(q.query_limit, "LIMIT 100 OFFSET 0");
    }

    #[test]
    fn test_page_offset() {
        assert_eq!(page_offset(None, 50), 0);
        assert_eq!(page_offset(Some(-2), 50), 0);
        assert_eq!(page_offset(Some(4), 50), 150);
        assert_eq!(page_offset(Some(i64::MAX), 50), 0);
    }

    #[test]
    fn test_to_sql_joins_clauses() {
        let q = UserListQuery::prepare(QueryVars::default());
        assert_eq!(
            q.to_sql(),
            "SELECT users.id, users.login, users.email, users.registered_at FROM users \
             WHERE 1=1 ORDER BY users.login ASC LIMIT 20 OFFSET 0"
        );
    }
}
