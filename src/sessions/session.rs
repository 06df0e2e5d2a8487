//! Session Module
//!
//! A browser session and the cart it owns.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::cart::Cart;

// == Session Id ==
/// Opaque session identifier carried in the session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Generates a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

// == Session ==
/// Server-side state for one browser.
#[derive(Debug)]
pub struct Session {
    /// The session's shopping cart
    pub cart: Cart,
    /// Last time the session was accessed
    last_seen: Instant,
}

impl Session {
    // == Constructor ==
    /// Creates a session with an empty cart.
    pub fn new() -> Self {
        Self {
            cart: Cart::new(),
            last_seen: Instant::now(),
        }
    }

    /// Marks the session as used now.
    pub fn touch(&mut self) {
        self.last_seen = Instant::now();
    }

    /// Checks whether the session has been unused for at least `ttl`.
    pub fn is_idle(&self, ttl: Duration) -> bool {
        self.last_seen.elapsed() >= ttl
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
