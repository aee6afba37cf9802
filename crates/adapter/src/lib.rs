mod column;
mod escape;
mod host;
mod registry;
mod traits;

pub use column::{UserCommentColumn, COLUMN_KEY};
pub use escape::escape_html;
pub use host::{
    AdminSite, ColumnsFilter, CustomColumnFilter, Filter, Hook, HostAdapter,
    SortableColumnsFilter, UserQueryFilter,
};
pub use registry::HookRegistry;
pub use traits::{CommentStore, HostServices};
