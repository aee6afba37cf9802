use adapter::{escape_html, HookRegistry, HostServices};
use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::Html,
};
use domain::{ColumnSet, QueryVars, SortableColumns, User, UserListQuery};
use std::sync::Arc;

use super::{authenticate, internal, ApiError};
use crate::bootstrap::admin_init;
use crate::state::AppState;

fn base_columns() -> ColumnSet {
    [("username", "Username"), ("email", "Email")]
        .into_iter()
        .collect()
}

fn base_sortable_columns() -> SortableColumns {
    [("username", "login"), ("email", "email")]
        .into_iter()
        .collect()
}

/// The admin user list. Extensions installed by `admin_init` add columns, sort keys
/// and cell content.
pub async fn list_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(vars): Query<QueryVars>,
) -> Result<Html<String>, ApiError> {
    let viewer = authenticate(&state, &headers)?;

    let mut registry = HookRegistry::new();
    admin_init(
        &viewer,
        Arc::new(state.db.clone()),
        state.site.clone(),
        &mut registry,
    );

    let columns = registry.apply_columns(base_columns());
    let sortable = registry.apply_sortable_columns(base_sortable_columns());
    let query = registry.apply_user_query(UserListQuery::prepare(vars.clone()));

    let users = state.db.query_users(&query).await.map_err(internal)?;
    tracing::debug!("Listing {} users (orderby={:?})", users.len(), vars.orderby);

    let mut html = String::from("<table class='users'>\n<thead><tr>");
    for (key, label) in columns.iter() {
        html.push_str(&header_cell(state.site.as_ref(), &vars, &sortable, key, label));
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    for user in &users {
        html.push_str("<tr>");
        for key in columns.keys() {
            let cell = match builtin_cell(user, key) {
                Some(cell) => cell,
                None => {
                    registry
                        .apply_custom_column(String::new(), key, user.id.get())
                        .await
                }
            };
            html.push_str(&format!("<td class='column-{}'>{}</td>", escape_html(key), cell));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n");

    Ok(Html(html))
}

fn builtin_cell(user: &User, column: &str) -> Option<String> {
    match column {
        "username" => Some(escape_html(&user.login)),
        "email" => Some(escape_html(&user.email)),
        _ => None,
    }
}

fn header_cell(
    site: &dyn HostServices,
    vars: &QueryVars,
    sortable: &SortableColumns,
    key: &str,
    label: &str,
) -> String {
    let label = escape_html(label);
    let Some(sort_key) = sortable.get(key) else {
        return format!("<th>{}</th>", label);
    };

    let sorted_asc = vars.orderby.as_deref() == Some(sort_key)
        && vars
            .order
            .as_deref()
            .is_some_and(|o| o.eq_ignore_ascii_case("asc"));
    let next = if sorted_asc { "desc" } else { "asc" };
    let url = site.admin_url("users", &[("orderby", sort_key), ("order", next)]);
    format!("<th><a href='{}'>{}</a></th>", escape_html(&url), label)
}
