mod author;
mod columns;
mod error;
mod models;
mod query;
mod summary;

pub use author::{is_email, AuthorKey, IdOrEmail};
pub use columns::{ColumnSet, OrderedColumns, SortableColumns};
pub use error::DomainError;
pub use models::{Comment, CommentStatus, User, UserId};
pub use query::{
    page_offset, QueryVars, SortOrder, UserListQuery, COMMENTS_TABLE, USERS_TABLE,
};
pub use summary::CommentCountSummary;
