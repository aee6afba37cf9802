use adapter::{CommentStore, HostAdapter, HostServices, UserCommentColumn};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

pub const LIST_USERS: &str = "list_users";

/// Whoever is looking at the current admin page.
#[derive(Debug, Clone, Default)]
pub struct Viewer {
    capabilities: HashSet<String>,
    in_admin: bool,
}

impl Viewer {
    pub fn admin<I, S>(capabilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            capabilities: capabilities.into_iter().map(Into::into).collect(),
            in_admin: true,
        }
    }

    pub fn can(&self, capability: &str) -> bool {
        self.capabilities.contains(capability)
    }

    pub fn in_admin(&self) -> bool {
        self.in_admin
    }
}

/// Installs the comments column for this request. Returns whether it was installed;
/// viewers outside the admin or without `list_users` get the plain user list.
pub fn admin_init(
    viewer: &Viewer,
    store: Arc<dyn CommentStore>,
    site: Arc<dyn HostServices>,
    host: &mut dyn HostAdapter,
) -> bool {
    if !viewer.in_admin() || !viewer.can(LIST_USERS) {
        debug!("Comments column not installed: viewer lacks {}", LIST_USERS);
        return false;
    }
    Arc::new(UserCommentColumn::new(store, site)).register(host);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use adapter::{AdminSite, Hook, HookRegistry};
    use storage::Db;

    async fn deps() -> (Arc<dyn CommentStore>, Arc<dyn HostServices>) {
        let db = Db::new("sqlite::memory:").await.unwrap();
        let site = AdminSite::new("http://localhost/admin/").unwrap();
        (Arc::new(db), Arc::new(site))
    }

    #[tokio::test]
    async fn test_admin_with_capability_installs_column() {
        let (store, site) = deps().await;
        let mut registry = HookRegistry::new();

        let viewer = Viewer::admin([LIST_USERS]);
        assert!(admin_init(&viewer, store, site, &mut registry));
        for hook in [
            Hook::ManageUsersColumns,
            Hook::ManageUsersCustomColumn,
            Hook::ManageUsersSortableColumns,
            Hook::PreUserQuery,
        ] {
            assert_eq!(registry.filter_count(hook), 1, "{}", hook);
        }
    }

    #[tokio::test]
    async fn test_missing_capability_is_noop() {
        let (store, site) = deps().await;
        let mut registry = HookRegistry::new();

        let viewer = Viewer::admin(["moderate_comments"]);
        assert!(!admin_init(&viewer, store.clone(), site.clone(), &mut registry));
        assert!(!admin_init(&Viewer::default(), store, site, &mut registry));
        assert_eq!(registry.filter_count(Hook::ManageUsersColumns), 0);
    }
}
