use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::models::UserId;

/// Loose input accepted by the summary lookup: a numeric id, or free text that may be
/// an id or an email address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdOrEmail<'a> {
    Id(i64),
    Text(&'a str),
}

impl From<i64> for IdOrEmail<'_> {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<UserId> for IdOrEmail<'_> {
    fn from(id: UserId) -> Self {
        Self::Id(id.get())
    }
}

impl<'a> From<&'a str> for IdOrEmail<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

/// A validated way of finding a user's comments: by account id or by author email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "by", content = "value", rename_all = "lowercase")]
pub enum AuthorKey {
    Id(UserId),
    Email(String),
}

impl AuthorKey {
    /// Numeric text counts as an id, so `"12"` and `12` resolve the same way.
    pub fn parse(input: IdOrEmail<'_>) -> Result<Self, DomainError> {
        match input {
            IdOrEmail::Id(id) => UserId::new(id).map(Self::Id),
            IdOrEmail::Text(text) => {
                if let Ok(id) = text.trim().parse::<i64>() {
                    return UserId::new(id).map(Self::Id);
                }
                if is_email(text) {
                    return Ok(Self::Email(text.to_string()));
                }
                Err(DomainError::UnresolvableAuthor(text.to_string()))
            }
        }
    }
}

const LOCAL_SPECIALS: &str = "!#$%&'*+/=?^_`{|}~.-";

/// Syntax-only email check with the same rules the host applies to user emails.
pub fn is_email(candidate: &str) -> bool {
    if candidate.len() < 6 {
        return false;
    }
    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    if !local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || LOCAL_SPECIALS.contains(c))
    {
        return false;
    }

    if domain.contains("..") || domain.starts_with('.') || domain.ends_with('.') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    labels.iter().all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_email_accepts_common_addresses() {
        assert!(is_email("alice@example.com"));
        assert!(is_email("first.last+tag@mail.example.co.uk"));
        assert!(is_email("a@b.io"));
    }

    #[test]
    fn test_is_email_rejects_malformed() {
        assert!(!is_email(""));
        assert!(!is_email("not-an-email"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("a@b.c"));
        assert!(!is_email("alice@localhost"));
        assert!(!is_email("alice@exa..mple.com"));
        assert!(!is_email("alice@-example.com"));
        assert!(!is_email("al ice@example.com"));
        assert!(!is_email("alice@example.com."));
    }

    #[test]
    fn test_parse_ids() {
        assert_eq!(
            AuthorKey::parse(IdOrEmail::Id(5)),
            Ok(AuthorKey::Id(UserId::new_unchecked(5)))
        );
        assert_eq!(
            AuthorKey::parse("12".into()),
            Ok(AuthorKey::Id(UserId::new_unchecked(12)))
        );
        assert!(AuthorKey::parse(IdOrEmail::Id(0)).is_err());
        assert!(AuthorKey::parse(IdOrEmail::Id(-5)).is_err());
        assert!(AuthorKey::parse("-3".into()).is_err());
    }

    #[test]
    fn test_parse_text() {
        assert_eq!(
            AuthorKey::parse("bob@example.org".into()),
            Ok(AuthorKey::Email("bob@example.org".to_string()))
        );
        assert!(AuthorKey::parse("".into()).is_err());
        assert!(AuthorKey::parse("not-an-email".into()).is_err());
    }
}
