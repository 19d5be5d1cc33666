use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::api::UserLocation;

/// Last submitted location of every user, kept for the lifetime of the process.
#[derive(Clone, Default)]
pub struct LocationStore {
    inner: Arc<RwLock<HashMap<String, UserLocation>>>,
}

impl LocationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites whatever was stored for `location.user`.
    pub fn put(&self, location: UserLocation) {
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        map.insert(location.user.clone(), location);
    }

    pub fn get(&self, user: &str) -> Option<UserLocation> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        map.get(user).cloned()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(user: &str, photo: &str) -> UserLocation {
        UserLocation {
            bbox: [11.53, 55.25, 11.54, 55.26],
            photo: photo.to_string(),
            user: user.to_string(),
        }
    }

    #[test]
    fn get_unknown_user() {
        let store = LocationStore::new();
        store.put(location("alice", "a"));

        assert!(store.get("bob").is_none());
        assert!(store.get("Alice").is_none());
    }

    #[test]
    fn last_write_wins() {
        let store = LocationStore::new();
        store.put(location("alice", "first"));
        store.put(location("alice", "second"));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("alice").unwrap().photo, "second");
    }

    #[test]
    fn empty_user_is_a_key() {
        let store = LocationStore::new();
        assert!(store.is_empty());

        store.put(location("", "anon"));

        assert_eq!(store.get("").unwrap().photo, "anon");
    }

    #[test]
    fn clones_share_entries() {
        let store = LocationStore::new();
        let other = store.clone();

        other.put(location("alice", "a"));

        assert_eq!(store.get("alice"), Some(location("alice", "a")));
    }

    #[test]
    fn concurrent_writers() {
        let store = LocationStore::new();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for j in 0..100 {
                        store.put(location(&format!("user-{i}"), &j.to_string()));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len(), 8);
        for i in 0..8 {
            assert_eq!(store.get(&format!("user-{i}")).unwrap().photo, "99");
        }
    }
}
