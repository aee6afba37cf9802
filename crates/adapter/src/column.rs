use domain::{
    AuthorKey, ColumnSet, CommentCountSummary, IdOrEmail, SortOrder, SortableColumns,
    UserListQuery, COMMENTS_TABLE, USERS_TABLE,
};
use futures::future::BoxFuture;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::escape::escape_html;
use crate::host::{Filter, HostAdapter};
use crate::traits::{CommentStore, HostServices};

/// Column key, sort key and `orderby` value all at once.
pub const COLUMN_KEY: &str = "user_comments_count";

/// Admin screen the cell links to, filtered by `user_id`.
const COMMENTS_SCREEN: &str = "comments";

/// "Comments" column of the admin user list.
pub struct UserCommentColumn {
    store: Arc<dyn CommentStore>,
    host: Arc<dyn HostServices>,
}

impl UserCommentColumn {
    pub fn new(store: Arc<dyn CommentStore>, host: Arc<dyn HostServices>) -> Self {
        Self { store, host }
    }

    /// Binds every callback of the column to its hook.
    pub fn register(self: Arc<Self>, host: &mut dyn HostAdapter) {
        let this = Arc::clone(&self);
        host.add_filter(Filter::Columns(Box::new(move |columns: ColumnSet| {
            this.register_column(columns)
        })));

        let this = Arc::clone(&self);
        host.add_filter(Filter::SortableColumns(Box::new(
            move |columns: SortableColumns| this.register_sortable_column(columns),
        )));

        host.add_filter(Filter::UserQuery(Box::new(Self::rewrite_list_query)));

        let this = Arc::clone(&self);
        host.add_filter(Filter::CustomColumn(Box::new(
            move |output: String, column: String, user_id: i64| -> BoxFuture<'static, String> {
                let this = Arc::clone(&this);
                Box::pin(async move { this.render_column_cell(output, &column, user_id).await })
            },
        )));
    }

    pub fn register_column(&self, mut columns: ColumnSet) -> ColumnSet {
        columns.insert(COLUMN_KEY, self.host.translate("Comments"));
        columns
    }

    pub fn register_sortable_column(&self, mut columns: SortableColumns) -> SortableColumns {
        columns.insert(COLUMN_KEY, COLUMN_KEY);
        columns
    }

    /// Joins per-user comment counts into the list query when the list is sorted by
    /// this column. Users without comments get a NULL count and sort lowest.
    pub fn rewrite_list_query(mut query: UserListQuery) -> UserListQuery {
        if query.query_vars.orderby.as_deref() != Some(COLUMN_KEY) {
            return query;
        }
        let order = SortOrder::from_request(query.query_vars.order.as_deref());

        query.query_from.push_str(&format!(
            " LEFT OUTER JOIN (\
             SELECT user_id, COUNT(*) AS comments_count \
             FROM {comments} \
             WHERE user_id IS NOT NULL \
             GROUP BY user_id\
             ) comments ON ({users}.id = comments.user_id)",
            comments = COMMENTS_TABLE,
            users = USERS_TABLE,
        ));
        query.query_orderby = format!(" ORDER BY comments_count {}", order);
        query
    }

    /// `<a>` to the user's comments, showing approved + pending.
    pub async fn render_column_cell(&self, output: String, column_name: &str, user_id: i64) -> String {
        if column_name != COLUMN_KEY {
            return output;
        }

        let summary = self.get_comment_count_summary(IdOrEmail::Id(user_id)).await;
        let url = self.host.admin_url(
            COMMENTS_SCREEN,
            &[("user_id", user_id.to_string().as_str())],
        );
        let title = self
            .host
            .translate_plural("%d comment", "%d comments", summary.total_comments)
            .replace("%d", &summary.total_comments.to_string());

        format!(
            "<a target='_blank' href='{}' title='{}'>{}</a>",
            escape_html(&url),
            escape_html(&title),
            summary.all
        )
    }

    /// Comment totals for a user given by id or email. Anything that doesn't resolve to
    /// an existing user, and any storage failure, reads as zero comments.
    pub async fn get_comment_count_summary(&self, who: IdOrEmail<'_>) -> CommentCountSummary {
        let author = match AuthorKey::parse(who) {
            Ok(author) => author,
            Err(e) => {
                debug!("Comment count skipped: {}", e);
                return CommentCountSummary::zero();
            }
        };

        let user = match &author {
            AuthorKey::Id(id) => self.store.find_user_by_id(*id).await,
            AuthorKey::Email(email) => self.store.find_user_by_email(email).await,
        };
        match user {
            Ok(Some(_)) => {}
            Ok(None) => {
                debug!("Comment count for unknown user {:?}", author);
                return CommentCountSummary::zero();
            }
            Err(e) => {
                warn!("User lookup failed for {:?}: {:?}", author, e);
                return CommentCountSummary::zero();
            }
        }

        match self.store.comment_status_totals(&author).await {
            Ok(rows) => CommentCountSummary::tally(rows),
            Err(e) => {
                warn!("Comment count query failed for {:?}: {:?}", author, e);
                CommentCountSummary::zero()
            }
        }
    }
}
