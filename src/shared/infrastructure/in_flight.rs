// Tracks which user-initiated mutations are currently pending.
//
// A user may have at most one publish, one hide, and so on in flight at a
// time. The guard returned by try_begin frees the slot when dropped, whether
// the action succeeded, failed or was abandoned.

use crate::shared::core::primitives::UserId;
use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    PublishEntry,
    HideEntry,
    UpdateNickname,
    AttachImages,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::PublishEntry => "publish entry",
            Action::HideEntry => "hide entry",
            Action::UpdateNickname => "update nickname",
            Action::AttachImages => "attach images",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Default)]
pub struct InFlightRegistry {
    active: Mutex<HashSet<(UserId, Action)>>,
}

impl InFlightRegistry {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// `None` while the same user already has `action` pending.
    pub fn try_begin(self: &Arc<Self>, user_id: &str, action: Action) -> Option<InFlightGuard> {
        let key = (user_id.to_string(), action);
        let inserted = self
            .active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.clone());
        inserted.then(|| InFlightGuard {
            registry: Arc::clone(self),
            key,
        })
    }

    pub fn is_pending(&self, user_id: &str, action: Action) -> bool {
        self.active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&(user_id.to_string(), action))
    }
}

#[derive(Debug)]
pub struct InFlightGuard {
    registry: Arc<InFlightRegistry>,
    key: (UserId, Action),
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.registry
            .active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.key);
    }
}

#[cfg(test)]
mod in_flight_registry_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_refuse_a_second_pending_action_for_the_same_user() {
        let registry = InFlightRegistry::new();
        let guard = registry.try_begin("user-ann", Action::PublishEntry);
        assert!(guard.is_some());
        assert!(registry.try_begin("user-ann", Action::PublishEntry).is_none());
        assert!(registry.is_pending("user-ann", Action::PublishEntry));
    }

    #[rstest]
    fn it_should_allow_other_users_and_other_actions() {
        let registry = InFlightRegistry::new();
        let _ann = registry.try_begin("user-ann", Action::PublishEntry);
        assert!(registry.try_begin("user-bob", Action::PublishEntry).is_some());
        assert!(registry.try_begin("user-ann", Action::HideEntry).is_some());
    }

    #[rstest]
    fn it_should_free_the_slot_when_the_guard_drops() {
        let registry = InFlightRegistry::new();
        drop(registry.try_begin("user-ann", Action::AttachImages));
        assert!(!registry.is_pending("user-ann", Action::AttachImages));
        assert!(registry.try_begin("user-ann", Action::AttachImages).is_some());
    }
}
