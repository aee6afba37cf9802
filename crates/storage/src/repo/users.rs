use crate::{models::SqlUser, Db};
use domain::{User, UserId, UserListQuery};

impl Db {
    pub async fn find_user_by_id(&self, id: UserId) -> anyhow::Result<Option<User>> {
        let row = sqlx::query_as::<_, SqlUser>(
            "SELECT id, login, email, registered_at FROM users WHERE id = ?",
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    pub async fn find_user_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let row = sqlx::query_as::<_, SqlUser>(
            "SELECT id, login, email, registered_at FROM users WHERE email = ? COLLATE NOCASE",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// Runs a list query after extensions have rewritten its clauses.
    /// The clauses are trusted: they come from the host's own parser and from
    /// registered filters, never from raw request input.
    pub async fn query_users(&self, query: &UserListQuery) -> anyhow::Result<Vec<User>> {
        let sql = query.to_sql();
        tracing::debug!("User list query: {}", sql);

        let rows = sqlx::query_as::<_, SqlUser>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn insert_user(&self, login: &str, email: &str) -> anyhow::Result<UserId> {
        let result = sqlx::query("INSERT INTO users (login, email) VALUES (?, ?)")
            .bind(login)
            .bind(email)
            .execute(&self.pool)
            .await?;

        Ok(UserId::new_unchecked(result.last_insert_rowid()))
    }
}

#[cfg(test)]
mod tests {
    use crate::Db;
    use domain::{QueryVars, UserListQuery};

    #[tokio::test]
    async fn test_find_user() {
        let db = Db::new("sqlite::memory:").await.unwrap();
        let id = db.insert_user("alice", "alice@example.com").await.unwrap();

        let by_id = db.find_user_by_id(id).await.unwrap().unwrap();
        assert_eq!(by_id.login, "alice");

        let by_email = db
            .find_user_by_email("alice@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_email.id, id);

        assert!(db.find_user_by_email("nobody@example.com").await.unwrap().is_none());

        let mixed_case = db
            .find_user_by_email("Alice@Example.COM")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(mixed_case.id, id);
    }

    #[tokio::test]
    async fn test_query_users_respects_clauses() {
        let db = Db::new("sqlite::memory:").await.unwrap();
        for login in ["carol", "alice", "bob"] {
            db.insert_user(login, &format!("{}@example.com", login))
                .await
                .unwrap();
        }

        let query = UserListQuery::prepare(QueryVars {
            order: Some("desc".into()),
            number: Some(2),
            ..Default::default()
        });
        let users = db.query_users(&query).await.unwrap();
        let logins: Vec<&str> = users.iter().map(|u| u.login.as_str()).collect();
        assert_eq!(logins, vec!["carol", "bob"]);
    }
}
