// Account store: the in-memory account collection plus load/save against
// the launcher's accounts.json. The store is a plain owned value; nothing
// here touches the terminal, so the whole module can be tested against a
// temp directory.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::validate::is_valid_identifier;

/// Expiry stamped onto every account this tool creates. The launcher only
/// checks that the instant is in the future.
pub const ACCESS_TOKEN_EXPIRY: &str = "2050-07-02T10:56:30.717167800Z";

/// Account `type` value the launcher expects for login-capable entries.
pub const ACCOUNT_TYPE: &str = "Xbox";

/// Errors from reading or writing the accounts file. Load-time failures
/// are fatal to the session; save-time failures are reported and the
/// session continues with the in-memory state intact.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to open accounts file: {0}")]
    Open(#[source] std::io::Error),
    #[error("failed to parse accounts file: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("failed to write accounts file: {0}")]
    Write(#[source] std::io::Error),
    #[error("failed to serialize accounts: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// The `minecraftProfile` object embedded in each account record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinecraftProfile {
    pub id: String,
    pub name: String,
}

/// One record in the launcher's account map. Field names mirror the file
/// format exactly, including the launcher's `userProperites` misspelling,
/// which must round-trip verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub access_token: String,
    pub access_token_expires_at: String,
    pub eligible_for_migration: bool,
    pub has_multiple_profiles: bool,
    pub legacy: bool,
    pub persistent: bool,
    #[serde(rename = "userProperites")]
    pub user_properties: Vec<serde_json::Value>,
    pub local_id: String,
    pub minecraft_profile: MinecraftProfile,
    pub remote_id: String,
    #[serde(rename = "type")]
    pub account_type: String,
    pub username: String,
}

impl Account {
    /// Premium records carry an identifier-shaped access token; anything
    /// else is a cracked (offline) identity. This mirrors the launcher's
    /// own heuristic, crude as it is.
    pub fn is_premium(&self) -> bool {
        is_valid_identifier(&self.access_token)
    }
}

/// On-disk shape: a single `accounts` object keyed by identifier. A file
/// with a missing or null `accounts` key loads as empty.
#[derive(Debug, Default, Serialize, Deserialize)]
struct AccountsFile {
    #[serde(default, deserialize_with = "null_as_empty")]
    accounts: HashMap<String, Account>,
}

// The launcher sometimes writes `"accounts": null` instead of omitting
// the key; both mean an empty collection.
fn null_as_empty<'de, D>(deserializer: D) -> Result<HashMap<String, Account>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// In-memory account collection, keyed by identifier. Keys are unique by
/// map semantics; creating an account under an existing identifier
/// overwrites it.
#[derive(Debug, Default)]
pub struct AccountStore {
    accounts: HashMap<String, Account>,
}

impl AccountStore {
    /// Load the store from `path`. A missing file yields an empty store;
    /// an unreadable or unparseable file is an error.
    pub fn load(path: &Path) -> Result<Self, PersistenceError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let file = File::open(path).map_err(PersistenceError::Open)?;
        let data: AccountsFile =
            serde_json::from_reader(BufReader::new(file)).map_err(PersistenceError::Parse)?;
        Ok(Self { accounts: data.accounts })
    }

    /// Persist the full collection to `path`, pretty-printed with 2-space
    /// indentation. The JSON is written to a temp file in the target
    /// directory and renamed into place, so a failure partway through
    /// never leaves a truncated accounts file behind.
    pub fn save(&self, path: &Path) -> Result<(), PersistenceError> {
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(dir).map_err(PersistenceError::Write)?;

        let data = AccountsFile { accounts: self.accounts.clone() };
        let json = serde_json::to_vec_pretty(&data).map_err(PersistenceError::Serialize)?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(PersistenceError::Write)?;
        tmp.write_all(&json).map_err(PersistenceError::Write)?;
        tmp.write_all(b"\n").map_err(PersistenceError::Write)?;
        tmp.persist(path)
            .map_err(|e| PersistenceError::Write(e.error))?;
        Ok(())
    }

    /// Insert (or overwrite) an account built from the fixed defaults plus
    /// the given username and identifier. The identifier doubles as the
    /// access token, which is what classifies the record as premium.
    ///
    /// No validation happens here; callers check the identifier shape
    /// before committing.
    pub fn create_account(&mut self, username: &str, identifier: &str) {
        let account = Account {
            access_token: identifier.to_string(),
            access_token_expires_at: ACCESS_TOKEN_EXPIRY.to_string(),
            eligible_for_migration: false,
            has_multiple_profiles: false,
            legacy: true,
            persistent: true,
            user_properties: Vec::new(),
            local_id: identifier.to_string(),
            minecraft_profile: MinecraftProfile {
                id: identifier.to_string(),
                name: username.to_string(),
            },
            remote_id: identifier.to_string(),
            account_type: ACCOUNT_TYPE.to_string(),
            username: username.to_string(),
        };
        self.accounts.insert(identifier.to_string(), account);
    }

    /// Remove every account unconditionally.
    pub fn remove_all(&mut self) {
        self.accounts.clear();
    }

    /// Remove accounts by premium/cracked classification. With
    /// `keep_premium` set, every cracked record is deleted; otherwise every
    /// premium record is. Matching keys are collected up front so the map
    /// is never mutated while iterating.
    pub fn remove_by_classification(&mut self, keep_premium: bool) {
        let doomed: Vec<String> = self
            .accounts
            .iter()
            .filter(|(_, account)| account.is_premium() != keep_premium)
            .map(|(id, _)| id.clone())
            .collect();
        for id in doomed {
            self.accounts.remove(&id);
        }
    }

    /// Enumerate `(identifier, username)` pairs. Iteration order is the
    /// map's and carries no meaning.
    pub fn list(&self) -> impl Iterator<Item = (&str, &str)> {
        self.accounts
            .iter()
            .map(|(id, account)| (id.as_str(), account.username.as_str()))
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    #[cfg(test)]
    fn get(&self, identifier: &str) -> Option<&Account> {
        self.accounts.get(identifier)
    }
}
