//! In-memory user directory.
//!
//! The directory maps usernames to profiles. It lives for the lifetime of the
//! process and is reseeded from the built-in roster on every start; nothing is
//! written to disk.
//!
//! Writes replace whole entries under a short write lock, so concurrent admin
//! edits resolve as last-write-wins.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;

use stampdesk_core::{Profile, Username, builtin_roster};

/// Errors that can occur during directory operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectoryError {
    /// No entry for this username.
    #[error("user {0} not found")]
    NotFound(Username),

    /// An entry with this username already exists.
    #[error("user {0} already exists")]
    Conflict(Username),
}

/// Process-wide store of username -> profile.
///
/// Entries iterate in username order.
#[derive(Debug, Default)]
pub struct DirectoryStore {
    entries: RwLock<BTreeMap<Username, Profile>>,
}

impl DirectoryStore {
    /// Create an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory holding the built-in roster.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            entries: RwLock::new(builtin_roster().collect()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<Username, Profile>> {
        // A panic while holding the lock cannot leave a half-written entry
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<Username, Profile>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Look up a profile, returning a copy.
    #[must_use]
    pub fn get(&self, username: &Username) -> Option<Profile> {
        self.read().get(username).cloned()
    }

    /// Whether the username is present.
    #[must_use]
    pub fn contains(&self, username: &Username) -> bool {
        self.read().contains_key(username)
    }

    /// All usernames in order.
    #[must_use]
    pub fn usernames(&self) -> Vec<Username> {
        self.read().keys().cloned().collect()
    }

    /// A copy of every entry in username order.
    #[must_use]
    pub fn list(&self) -> Vec<(Username, Profile)> {
        self.read()
            .iter()
            .map(|(username, profile)| (username.clone(), profile.clone()))
            .collect()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the directory has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Insert a new entry.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::Conflict` if the username is already taken.
    pub fn insert_new(&self, username: Username, profile: Profile) -> Result<(), DirectoryError> {
        let mut entries = self.write();
        if entries.contains_key(&username) {
            return Err(DirectoryError::Conflict(username));
        }
        entries.insert(username, profile);
        Ok(())
    }

    /// Replace the profile of an existing entry.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::NotFound` if the username is absent.
    pub fn replace(&self, username: &Username, profile: Profile) -> Result<(), DirectoryError> {
        let mut entries = self.write();
        let slot = entries
            .get_mut(username)
            .ok_or_else(|| DirectoryError::NotFound(username.clone()))?;
        *slot = profile;
        Ok(())
    }

    /// Remove an entry, returning its last profile.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::NotFound` if the username is absent.
    pub fn remove(&self, username: &Username) -> Result<Profile, DirectoryError> {
        self.write()
            .remove(username)
            .ok_or_else(|| DirectoryError::NotFound(username.clone()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn username(s: &str) -> Username {
        Username::parse(s).unwrap()
    }

    #[test]
    fn test_seeded_holds_builtin_roster() {
        let store = DirectoryStore::seeded();
        assert_eq!(store.len(), 6);
        assert!(store.contains(&Username::admin()));
        assert_eq!(
            store.get(&username("sato")).unwrap().department,
            "Renewable Energy"
        );
    }

    #[test]
    fn test_new_is_empty() {
        let store = DirectoryStore::new();
        assert!(store.is_empty());
        assert!(store.usernames().is_empty());
    }

    #[test]
    fn test_usernames_are_sorted() {
        let store = DirectoryStore::seeded();
        let names: Vec<String> = store.usernames().into_iter().map(Username::into_inner).collect();
        assert_eq!(
            names,
            ["admin", "sato", "suzuki", "tanaka", "watanabe", "yamamoto"]
        );
    }

    #[test]
    fn test_insert_new_conflict_keeps_original() {
        let store = DirectoryStore::seeded();
        let err = store
            .insert_new(username("tanaka"), Profile::new("Impostor", "Nowhere", "None"))
            .unwrap_err();

        assert_eq!(err, DirectoryError::Conflict(username("tanaka")));
        assert_eq!(
            store.get(&username("tanaka")).unwrap().full_name,
            "Hiroshi Tanaka"
        );
    }

    #[test]
    fn test_replace_and_remove() {
        let store = DirectoryStore::new();
        store
            .insert_new(username("kato"), Profile::new("Ren Kato", "Power Systems", "Intern"))
            .unwrap();

        store
            .replace(
                &username("kato"),
                Profile::new("Ren Kato", "Power Systems", "Engineer"),
            )
            .unwrap();
        assert_eq!(store.get(&username("kato")).unwrap().position, "Engineer");

        let removed = store.remove(&username("kato")).unwrap();
        assert_eq!(removed.position, "Engineer");
        assert!(store.is_empty());
    }

    #[test]
    fn test_missing_entries() {
        let store = DirectoryStore::new();
        assert_eq!(
            store.replace(&username("ghost"), Profile::default()),
            Err(DirectoryError::NotFound(username("ghost")))
        );
        assert_eq!(
            store.remove(&username("ghost")),
            Err(DirectoryError::NotFound(username("ghost")))
        );
    }

    #[test]
    fn test_get_returns_a_copy() {
        let store = DirectoryStore::seeded();
        let mut copy = store.get(&username("suzuki")).unwrap();
        copy.position = "Changed".to_string();
        assert_eq!(
            store.get(&username("suzuki")).unwrap().position,
            "Project Manager"
        );
    }
}
