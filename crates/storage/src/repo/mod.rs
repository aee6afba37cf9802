mod comments;
mod users;

pub use comments::NewComment;
