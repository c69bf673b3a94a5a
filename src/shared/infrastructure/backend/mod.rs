// Ports to the hosted backend that owns auth, rows and blob storage.
//
// The core only talks to these traits. The backend is expected to enforce its
// own filters; soft deletes carry the requester id as an equality filter so a
// mismatched owner matches zero rows at the store itself.

pub mod in_memory;

use crate::modules::diaries::core::entry::{Entry, NewEntry};
use crate::modules::diaries::core::user::User;
use crate::shared::core::primitives::{EntryId, Session, UserId};
use async_trait::async_trait;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BackendError {
    #[error("backend offline: {0}")]
    Offline(String),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryQuery {
    pub is_hidden: bool,
    pub newest_first: bool,
}

impl EntryQuery {
    /// What every feed read asks for.
    pub fn visible_newest_first() -> Self {
        Self {
            is_hidden: false,
            newest_first: true,
        }
    }
}

#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn get_session(&self, access_token: &str) -> Result<Option<Session>, BackendError>;
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, BackendError>;
}

#[async_trait]
pub trait EntryStore: Send + Sync {
    async fn query_entries(&self, query: EntryQuery) -> Result<Vec<Entry>, BackendError>;
    async fn insert_entry(&self, payload: NewEntry) -> Result<EntryId, BackendError>;
    /// Hides rows matching both `id` and `requester_id`; returns how many.
    async fn soft_delete_entry(
        &self,
        id: EntryId,
        requester_id: &str,
    ) -> Result<u64, BackendError>;
}

#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn query_users(&self, ids: &HashSet<UserId>) -> Result<Vec<User>, BackendError>;
    async fn find_user(&self, id: &str) -> Result<Option<User>, BackendError>;
    async fn update_nickname(&self, id: &str, nickname: &str) -> Result<(), BackendError>;
}

#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Stores `bytes` under `name` in `bucket` and returns its public URL.
    async fn upload_image(
        &self,
        bucket: &str,
        name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, BackendError>;
}
