use chrono::NaiveDateTime;
use domain::{Comment, User, UserId};
use sqlx::FromRow;

#[derive(FromRow)]
pub struct SqlUser {
    pub id: i64,
    pub login: String,
    pub email: String,
    pub registered_at: NaiveDateTime,
}

impl From<SqlUser> for User {
    fn from(sql: SqlUser) -> Self {
        User {
            id: UserId::new_unchecked(sql.id),
            login: sql.login,
            email: sql.email,
            registered_at: sql.registered_at,
        }
    }
}

#[derive(FromRow)]
pub struct SqlComment {
    pub id: i64,
    pub user_id: Option<i64>,
    pub author_email: String,
    pub status: String,
    pub content: String,
    pub created_at: NaiveDateTime,
}

impl From<SqlComment> for Comment {
    fn from(sql: SqlComment) -> Self {
        Comment {
            id: sql.id,
            user_id: sql.user_id.map(UserId::new_unchecked),
            author_email: sql.author_email,
            status: sql.status,
            content: sql.content,
            created_at: sql.created_at,
        }
    }
}

// GROUP BY status 的聚合行
#[derive(FromRow)]
pub struct SqlStatusTotal {
    pub status: String,
    pub total: i64,
}
