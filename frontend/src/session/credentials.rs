use std::{fmt, rc::Rc};

use serde::{Deserialize, Serialize};

use super::{decoder, role::Role};
use crate::utils::storage::{self as storage_utils, MemoryStorage, StorageArea, StorageError};

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const ROLE_KEY: &str = "role";

const SESSION_KEYS: [&str; 3] = [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, ROLE_KEY];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistenceScope {
    /// `localStorage`: survives browser restarts.
    Durable,
    /// `sessionStorage`: dropped with the browser session.
    Ephemeral,
}

impl PersistenceScope {
    pub fn from_remember(remember: bool) -> Self {
        if remember {
            PersistenceScope::Durable
        } else {
            PersistenceScope::Ephemeral
        }
    }

    pub fn other(self) -> Self {
        match self {
            PersistenceScope::Durable => PersistenceScope::Ephemeral,
            PersistenceScope::Ephemeral => PersistenceScope::Durable,
        }
    }
}

/// Owns the persisted token pair. Exactly one scope holds the live session;
/// reads check the durable scope before the ephemeral one.
#[derive(Clone)]
pub struct CredentialStore {
    durable: Rc<dyn StorageArea>,
    ephemeral: Rc<dyn StorageArea>,
}

impl fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialStore")
            .field("active_scope", &self.active_scope())
            .finish()
    }
}

impl CredentialStore {
    pub fn new(durable: Rc<dyn StorageArea>, ephemeral: Rc<dyn StorageArea>) -> Self {
        Self { durable, ephemeral }
    }

    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStorage::new()), Rc::new(MemoryStorage::new()))
    }

    pub fn browser() -> Result<Self, StorageError> {
        let durable = storage_utils::local_storage()?;
        let ephemeral = storage_utils::session_storage()?;
        Ok(Self::new(Rc::new(durable), Rc::new(ephemeral)))
    }

    pub fn browser_or_memory() -> Self {
        Self::browser().unwrap_or_else(|err| {
            log::warn!("browser storage unavailable, keeping session in memory: {}", err);
            Self::in_memory()
        })
    }

    pub fn area(&self, scope: PersistenceScope) -> &dyn StorageArea {
        match scope {
            PersistenceScope::Durable => self.durable.as_ref(),
            PersistenceScope::Ephemeral => self.ephemeral.as_ref(),
        }
    }

    /// Writes the pair into `scope` and drops whatever the other scope held.
    /// A pair without a refresh token keeps the refresh token already stored in
    /// `scope`, which is what a refresh response needs.
    pub fn save(&self, pair: &TokenPair, scope: PersistenceScope) {
        let target = self.area(scope);
        write(target, ACCESS_TOKEN_KEY, &pair.access);
        if let Some(refresh) = &pair.refresh {
            write(target, REFRESH_TOKEN_KEY, refresh);
        }
        match decoder::decode(&pair.access) {
            Ok(identity) => write(target, ROLE_KEY, identity.role.as_str()),
            Err(_) => remove(target, ROLE_KEY),
        }
        clear_area(self.area(scope.other()));
        log::debug!("session saved to {:?} scope", scope);
    }

    pub fn access_token(&self) -> Option<String> {
        self.lookup(ACCESS_TOKEN_KEY)
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.lookup(REFRESH_TOKEN_KEY)
    }

    /// Role hint persisted alongside the tokens; unrecognized values are ignored.
    pub fn cached_role(&self) -> Option<Role> {
        let raw = self.lookup(ROLE_KEY)?;
        match raw.parse::<Role>() {
            Ok(role) => Some(role),
            Err(err) => {
                log::warn!("ignoring cached role: {}", err);
                None
            }
        }
    }

    pub fn active_scope(&self) -> Option<PersistenceScope> {
        [PersistenceScope::Durable, PersistenceScope::Ephemeral]
            .into_iter()
            .find(|scope| {
                let area = self.area(*scope);
                read(area, ACCESS_TOKEN_KEY).is_some() || read(area, REFRESH_TOKEN_KEY).is_some()
            })
    }

    pub fn clear(&self) {
        clear_area(self.durable.as_ref());
        clear_area(self.ephemeral.as_ref());
        log::debug!("session cleared");
    }

    fn lookup(&self, key: &str) -> Option<String> {
        read(self.durable.as_ref(), key).or_else(|| read(self.ephemeral.as_ref(), key))
    }
}

fn read(area: &dyn StorageArea, key: &str) -> Option<String> {
    match area.get_item(key) {
        Ok(value) => value.filter(|v| !v.is_empty()),
        Err(err) => {
            log::warn!("failed to read {}: {}", key, err);
            None
        }
    }
}

fn write(area: &dyn StorageArea, key: &str, value: &str) {
    if let Err(err) = area.set_item(key, value) {
        log::warn!("failed to persist {}: {}", key, err);
    }
}

fn remove(area: &dyn StorageArea, key: &str) {
    if let Err(err) = area.remove_item(key) {
        log::warn!("failed to remove {}: {}", key, err);
    }
}

fn clear_area(area: &dyn StorageArea) {
    for key in SESSION_KEYS {
        remove(area, key);
    }
}
