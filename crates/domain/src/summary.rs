use serde::{Deserialize, Serialize};

use crate::models::CommentStatus;

/// Per-user comment totals by moderation state.
///
/// `total_comments` and `all` both come out as approved + pending. The duplication is
/// how the column has always reported its numbers; `all` is what the list shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentCountSummary {
    pub approved: u64,
    pub awaiting_moderation: u64,
    pub spam: u64,
    pub trash: u64,
    #[serde(rename = "post-trashed")]
    pub post_trashed: u64,
    pub total_comments: u64,
    pub all: u64,
}

impl CommentCountSummary {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Folds `(status, count)` rows from a `GROUP BY status` aggregation.
    /// Unknown status values are skipped, negative counts are read as zero.
    pub fn tally<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: AsRef<str>,
    {
        let mut summary = Self::zero();
        for (status, count) in rows {
            let Some(status) = CommentStatus::from_db(status.as_ref()) else {
                continue;
            };
            summary.add(status, u64::try_from(count).unwrap_or(0));
        }
        summary
    }

    fn add(&mut self, status: CommentStatus, count: u64) {
        match status {
            CommentStatus::Trash => self.trash += count,
            CommentStatus::PostTrashed => self.post_trashed += count,
            CommentStatus::Spam => self.spam += count,
            CommentStatus::Approved => {
                self.approved += count;
                self.total_comments += count;
                self.all += count;
            }
            CommentStatus::Pending => {
                self.awaiting_moderation += count;
                self.total_comments += count;
                self.all += count;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_mixed_statuses() {
        let summary =
            CommentCountSummary::tally([("1", 3), ("0", 1), ("spam", 2), ("trash", 1)]);
        assert_eq!(
            summary,
            CommentCountSummary {
                approved: 3,
                awaiting_moderation: 1,
                spam: 2,
                trash: 1,
                post_trashed: 0,
                total_comments: 4,
                all: 4,
            }
        );
    }

    #[test]
    fn test_tally_ignores_unknown_and_negative() {
        let summary = CommentCountSummary::tally([
            ("approved".to_string(), 9),
            ("1".to_string(), -4),
            ("post-trashed".to_string(), 2),
        ]);
        assert_eq!(summary.post_trashed, 2);
        assert_eq!(summary.approved, 0);
        assert_eq!(summary.total_comments, 0);
        assert_eq!(summary.all, 0);
    }

    #[test]
    fn test_empty_tally_is_zero() {
        let rows: Vec<(String, i64)> = Vec::new();
        assert_eq!(CommentCountSummary::tally(rows), CommentCountSummary::zero());
    }

    #[test]
    fn test_serializes_all_seven_keys() {
        let json = serde_json::to_value(CommentCountSummary::zero()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 7);
        assert!(obj.contains_key("post-trashed"));
        assert!(obj.contains_key("awaiting_moderation"));
        assert_eq!(obj["all"], 0);
    }
}
