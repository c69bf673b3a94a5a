// In memory stand-in for the hosted backend.
//
// Purpose
// - Run the service and its tests without the real backend.
//
// Responsibilities
// - Keep entries in insertion order and assign ids and created_at stamps.
// - Apply the same filters the real store would (hidden flag, owner on delete).
// - Simulate outages per capability so degraded paths can be exercised.

use crate::modules::diaries::core::entry::{Entry, NewEntry};
use crate::modules::diaries::core::user::User;
use crate::shared::core::primitives::{EntryId, Session, UserId};
use crate::shared::infrastructure::backend::{
    AuthGateway, BackendError, BlobStore, EntryQuery, EntryStore, UserDirectory,
};
use async_trait::async_trait;
use chrono::Utc;
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone)]
struct Account {
    user_id: UserId,
    password: String,
}

pub struct InMemoryBackend {
    public_base_url: String,
    entries: RwLock<Vec<Entry>>,
    next_entry_id: AtomicI64,
    users: RwLock<HashMap<UserId, User>>,
    accounts: RwLock<HashMap<String, Account>>,
    sessions: RwLock<HashMap<String, Session>>,
    blobs: RwLock<HashMap<String, Vec<u8>>>,
    upload_budget: Option<AtomicUsize>,
    is_offline: bool,
    users_offline: bool,
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::new("http://localhost/storage")
    }
}

impl InMemoryBackend {
    pub fn new(public_base_url: impl Into<String>) -> Self {
        Self {
            public_base_url: public_base_url.into(),
            entries: RwLock::default(),
            next_entry_id: AtomicI64::new(1),
            users: RwLock::default(),
            accounts: RwLock::default(),
            sessions: RwLock::default(),
            blobs: RwLock::default(),
            upload_budget: None,
            is_offline: false,
            users_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn toggle_users_offline(&mut self) {
        self.users_offline = !self.users_offline;
    }

    /// Lets `count` more uploads succeed, then fails every one after.
    pub fn fail_uploads_after(&mut self, count: usize) {
        self.upload_budget = Some(AtomicUsize::new(count));
    }

    /// Creates an account and its users row. Returns the new user id.
    pub async fn register_account(
        &self,
        email: &str,
        password: &str,
        nickname: Option<&str>,
    ) -> UserId {
        let user_id = Uuid::now_v7().to_string();
        self.accounts.write().await.insert(
            email.to_string(),
            Account {
                user_id: user_id.clone(),
                password: password.to_string(),
            },
        );
        self.users
            .write()
            .await
            .insert(user_id.clone(), User::new(user_id.clone(), nickname));
        user_id
    }

    pub async fn seed_user(&self, user: User) {
        self.users.write().await.insert(user.id.clone(), user);
    }

    /// Stores a raw row as is, keeping its id and created_at.
    pub async fn seed_entry(&self, entry: Entry) {
        self.next_entry_id.fetch_max(entry.id + 1, Ordering::SeqCst);
        self.entries.write().await.push(entry);
    }

    pub async fn entries_snapshot(&self) -> Vec<Entry> {
        self.entries.read().await.clone()
    }

    pub async fn blob(&self, bucket: &str, name: &str) -> Option<Vec<u8>> {
        self.blobs.read().await.get(&format!("{bucket}/{name}")).cloned()
    }

    fn ensure_online(&self, what: &str) -> Result<(), BackendError> {
        if self.is_offline {
            return Err(BackendError::Offline(format!("{what} offline")));
        }
        Ok(())
    }
}

#[async_trait]
impl AuthGateway for InMemoryBackend {
    async fn get_session(&self, access_token: &str) -> Result<Option<Session>, BackendError> {
        self.ensure_online("Auth")?;
        Ok(self.sessions.read().await.get(access_token).cloned())
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, BackendError> {
        self.ensure_online("Auth")?;
        let account = self
            .accounts
            .read()
            .await
            .get(email)
            .filter(|account| account.password == password)
            .cloned()
            .ok_or(BackendError::InvalidCredentials)?;

        let session = Session::new(account.user_id, email, Uuid::now_v7().to_string());
        self.sessions
            .write()
            .await
            .insert(session.access_token.clone(), session.clone());
        Ok(session)
    }
}

#[async_trait]
impl EntryStore for InMemoryBackend {
    async fn query_entries(&self, query: EntryQuery) -> Result<Vec<Entry>, BackendError> {
        self.ensure_online("Entries table")?;
        let mut items: Vec<Entry> = self
            .entries
            .read()
            .await
            .iter()
            .filter(|entry| entry.is_hidden == query.is_hidden)
            .cloned()
            .collect();
        if query.newest_first {
            // Stable sort: equal stamps keep insertion order.
            items.sort_by_key(|entry| Reverse(entry.created_at));
        }
        Ok(items)
    }

    async fn insert_entry(&self, payload: NewEntry) -> Result<EntryId, BackendError> {
        self.ensure_online("Entries table")?;
        let mut guard = self.entries.write().await;
        let id = self.next_entry_id.fetch_add(1, Ordering::SeqCst);
        let latest = guard.iter().map(|entry| entry.created_at).max().unwrap_or(0);
        let created_at = Utc::now().timestamp_millis().max(latest + 1);
        guard.push(payload.into_entry(id, created_at));
        Ok(id)
    }

    async fn soft_delete_entry(
        &self,
        id: EntryId,
        requester_id: &str,
    ) -> Result<u64, BackendError> {
        self.ensure_online("Entries table")?;
        let mut affected = 0;
        for entry in self
            .entries
            .write()
            .await
            .iter_mut()
            .filter(|entry| entry.id == id && entry.author_id == requester_id)
        {
            entry.is_hidden = true;
            affected += 1;
        }
        Ok(affected)
    }
}

#[async_trait]
impl UserDirectory for InMemoryBackend {
    async fn query_users(&self, ids: &HashSet<UserId>) -> Result<Vec<User>, BackendError> {
        self.ensure_online("Users table")?;
        if self.users_offline {
            return Err(BackendError::Offline("Users table offline".into()));
        }
        Ok(self
            .users
            .read()
            .await
            .values()
            .filter(|user| ids.contains(&user.id))
            .cloned()
            .collect())
    }

    async fn find_user(&self, id: &str) -> Result<Option<User>, BackendError> {
        self.ensure_online("Users table")?;
        if self.users_offline {
            return Err(BackendError::Offline("Users table offline".into()));
        }
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn update_nickname(&self, id: &str, nickname: &str) -> Result<(), BackendError> {
        self.ensure_online("Users table")?;
        if self.users_offline {
            return Err(BackendError::Offline("Users table offline".into()));
        }
        self.users
            .write()
            .await
            .entry(id.to_string())
            .or_insert_with(|| User::new(id, None))
            .nickname = Some(nickname.to_string());
        Ok(())
    }
}

#[async_trait]
impl BlobStore for InMemoryBackend {
    async fn upload_image(
        &self,
        bucket: &str,
        name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, BackendError> {
        self.ensure_online("Blob storage")?;
        if let Some(budget) = &self.upload_budget {
            budget
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
                .map_err(|_| BackendError::Offline("Blob storage offline".into()))?;
        }
        self.blobs
            .write()
            .await
            .insert(format!("{bucket}/{name}"), bytes);
        Ok(format!("{}/{bucket}/{name}", self.public_base_url))
    }
}
