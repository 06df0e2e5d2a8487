//! Session Store Module
//!
//! Maps session ids to their carts and discards idle sessions.

use std::collections::HashMap;
use std::time::Duration;

use tracing::debug;

use crate::cart::Cart;
use crate::sessions::{Session, SessionId};

// == Session Store ==
/// All live sessions.
#[derive(Debug)]
pub struct SessionStore {
    /// Session state keyed by id
    sessions: HashMap<SessionId, Session>,
    /// Idle time after which a session is discarded
    idle_ttl: Duration,
}

impl SessionStore {
    // == Constructor ==
    /// Creates an empty store.
    ///
    /// # Arguments
    /// * `idle_ttl` - How long a session may go unused before cleanup drops it
    pub fn new(idle_ttl: Duration) -> Self {
        Self {
            sessions: HashMap::new(),
            idle_ttl,
        }
    }

    // == Create ==
    /// Opens a new session with an empty cart.
    pub fn create(&mut self) -> SessionId {
        let id = SessionId::generate();
        self.sessions.insert(id, Session::new());
        debug!("Session created: {}", id);
        id
    }

    /// Returns true if the id names a live session.
    pub fn contains(&self, id: &SessionId) -> bool {
        self.sessions.contains_key(id)
    }

    // == Cart Access ==
    /// Read access to a session's cart.
    pub fn cart(&self, id: &SessionId) -> Option<&Cart> {
        self.sessions.get(id).map(|s| &s.cart)
    }

    /// Write access to a session's cart, opening the session if it vanished.
    ///
    /// A session can disappear between the middleware check and the handler
    /// if cleanup runs in between; the shopper then starts with an empty cart.
    pub fn cart_mut(&mut self, id: SessionId) -> &mut Cart {
        let session = self.sessions.entry(id).or_default();
        session.touch();
        &mut session.cart
    }

    /// Marks a session as active.
    pub fn touch(&mut self, id: &SessionId) {
        if let Some(session) = self.sessions.get_mut(id) {
            session.touch();
        }
    }

    // == Cleanup ==
    /// Removes sessions idle for longer than the configured TTL.
    ///
    /// Returns the number of sessions removed.
    pub fn cleanup_idle(&mut self) -> usize {
        let before = self.sessions.len();
        let ttl = self.idle_ttl;
        self.sessions.retain(|_, s| !s.is_idle(ttl));
        before - self.sessions.len()
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Returns true if there are no sessions.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Quantity;
    use crate::catalog::Catalog;

    #[test]
    fn test_create_and_lookup() {
        let mut store = SessionStore::new(Duration::from_secs(60));
        let id = store.create();
        assert!(store.contains(&id));
        assert!(store.cart(&id).unwrap().is_empty());
        assert!(!store.contains(&SessionId::generate()));
    }

    #[test]
    fn test_carts_are_isolated() {
        let catalog = Catalog::seeded();
        let mut store = SessionStore::new(Duration::from_secs(60));
        let alice = store.create();
        let bob = store.create();

        store
            .cart_mut(alice)
            .add(catalog.find_by_title("1984").unwrap(), Quantity::ONE)
            .unwrap();

        assert_eq!(store.cart(&alice).unwrap().total_items(), 1);
        assert!(store.cart(&bob).unwrap().is_empty());
    }

    #[test]
    fn test_cart_mut_reopens_missing_session() {
        let mut store = SessionStore::new(Duration::from_secs(60));
        let id = SessionId::generate();
        assert!(store.cart_mut(id).is_empty());
        assert!(store.contains(&id));
    }

    #[test]
    fn test_cleanup_removes_idle() {
        let mut store = SessionStore::new(Duration::ZERO);
        store.create();
        store.create();
        assert_eq!(store.cleanup_idle(), 2);
        assert!(store.is_empty());
    }

    #[test]
    fn test_cleanup_keeps_active() {
        let mut store = SessionStore::new(Duration::from_secs(3600));
        let id = store.create();
        assert_eq!(store.cleanup_idle(), 0);
        assert!(store.contains(&id));
    }
}
