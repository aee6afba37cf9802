use crate::{
    models::{SqlComment, SqlStatusTotal},
    Db,
};
use domain::{AuthorKey, Comment, UserId};

pub struct NewComment<'a> {
    pub user_id: Option<UserId>,
    pub author_email: &'a str,
    pub status: &'a str,
    pub content: &'a str,
}

impl Db {
    /// One `GROUP BY status` aggregation over the author's comments.
    pub async fn comment_status_totals(
        &self,
        author: &AuthorKey,
    ) -> anyhow::Result<Vec<(String, i64)>> {
        let query = match author {
            AuthorKey::Id(id) => sqlx::query_as::<_, SqlStatusTotal>(
                r#"
                SELECT status, COUNT(*) AS total
                FROM comments
                WHERE user_id = ?
                GROUP BY status
                "#,
            )
            .bind(id.get()),
            AuthorKey::Email(email) => sqlx::query_as::<_, SqlStatusTotal>(
                r#"
                SELECT status, COUNT(*) AS total
                FROM comments
                WHERE author_email = ? COLLATE NOCASE
                GROUP BY status
                "#,
            )
            .bind(email.as_str()),
        };

        let rows = query.fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(|r| (r.status, r.total)).collect())
    }

    pub async fn list_comments_by_user(
        &self,
        user_id: UserId,
        limit: i64,
        offset: i64,
    ) -> anyhow::Result<(Vec<Comment>, i64)> {
        let rows = sqlx::query_as::<_, SqlComment>(
            r#"
            SELECT id, user_id, author_email, status, content, created_at
            FROM comments
            WHERE user_id = ?
            ORDER BY created_at DESC, id DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(user_id.get())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE user_id = ?")
            .bind(user_id.get())
            .fetch_one(&self.pool)
            .await?;

        let comments = rows.into_iter().map(Into::into).collect();
        Ok((comments, count))
    }

    pub async fn insert_comment(&self, c: &NewComment<'_>) -> anyhow::Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO comments (user_id, author_email, status, content)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(c.user_id.map(UserId::get))
        .bind(c.author_email)
        .bind(c.status)
        .bind(c.content)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }
}
