use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Only positive ids name a real account.
    pub fn new(id: i64) -> Result<Self, DomainError> {
        if id <= 0 {
            return Err(DomainError::InvalidUserId(id));
        }
        Ok(Self(id))
    }

    pub fn new_unchecked(id: i64) -> Self {
        Self(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub login: String,
    pub email: String,
    pub registered_at: NaiveDateTime,
}

/// Moderation state as the host stores it in `comments.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentStatus {
    Approved,
    #[serde(rename = "awaiting_moderation")]
    Pending,
    Spam,
    Trash,
    #[serde(rename = "post-trashed")]
    PostTrashed,
}

impl CommentStatus {
    pub fn from_db(raw: &str) -> Option<Self> {
        match raw {
            "1" => Some(Self::Approved),
            "0" => Some(Self::Pending),
            "spam" => Some(Self::Spam),
            "trash" => Some(Self::Trash),
            "post-trashed" => Some(Self::PostTrashed),
            _ => None,
        }
    }

    pub fn as_db(self) -> &'static str {
        match self {
            Self::Approved => "1",
            Self::Pending => "0",
            Self::Spam => "spam",
            Self::Trash => "trash",
            Self::PostTrashed => "post-trashed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    /// `None` for anonymous comments that only carry an email.
    pub user_id: Option<UserId>,
    pub author_email: String,
    /// Raw stored value, kept as-is so unknown states survive a round trip.
    pub status: String,
    pub content: String,
    pub created_at: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_rejects_non_positive() {
        assert!(UserId::new(0).is_err());
        assert!(UserId::new(-5).is_err());
        assert_eq!(UserId::new(7).unwrap().get(), 7);
    }

    #[test]
    fn test_status_db_values() {
        for status in [
            CommentStatus::Approved,
            CommentStatus::Pending,
            CommentStatus::Spam,
            CommentStatus::Trash,
            CommentStatus::PostTrashed,
        ] {
            assert_eq!(CommentStatus::from_db(status.as_db()), Some(status));
        }
        assert_eq!(CommentStatus::from_db("approved"), None);
        assert_eq!(CommentStatus::from_db(""), None);
    }
}
