use anyhow::Result;
use async_trait::async_trait;
use domain::{AuthorKey, User, UserId};
use storage::Db;

/// Read access to the host's users and comments.
#[async_trait]
pub trait CommentStore: Send + Sync {
    async fn find_user_by_id(&self, id: UserId) -> Result<Option<User>>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>>;
    async fn comment_status_totals(&self, author: &AuthorKey) -> Result<Vec<(String, i64)>>;
}

#[async_trait]
impl CommentStore for Db {
    async fn find_user_by_id(&self, id: UserId) -> Result<Option<User>> {
        Db::find_user_by_id(self, id).await
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        Db::find_user_by_email(self, email).await
    }

    async fn comment_status_totals(&self, author: &AuthorKey) -> Result<Vec<(String, i64)>> {
        Db::comment_status_totals(self, author).await
    }
}

/// Facilities the host offers to extensions while it renders admin screens.
pub trait HostServices: Send + Sync {
    /// Absolute URL of an admin screen, with query arguments appended.
    fn admin_url(&self, path: &str, args: &[(&str, &str)]) -> String;
    fn translate(&self, text: &str) -> String;
    /// Picks the singular or plural form for `n`.
    fn translate_plural(&self, single: &str, plural: &str, n: u64) -> String;
}
