//! Screen routing
//!
//! Three routes with a history stack. `replace` swaps the top entry, so the
//! screen it replaces cannot be navigated back to.

use std::fmt;

use crate::error::Result;
use crate::session::{KeyValueStore, LoginSession};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Splash,
    Login,
    Report,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Splash => write!(f, "splash"),
            Route::Login => write!(f, "login"),
            Route::Report => write!(f, "report"),
        }
    }
}

/// Navigation history
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Navigator {
    pub fn new(root: Route) -> Self {
        Self { stack: vec![root] }
    }

    /// Open the app: start on the splash screen and skip straight to the
    /// report screen when a session was persisted earlier.
    pub async fn launch(store: &dyn KeyValueStore) -> Result<Self> {
        let mut nav = Self::new(Route::Splash);
        if LoginSession::is_logged_in(store).await? {
            tracing::debug!("Existing session found, redirecting to report");
            nav.replace(Route::Report);
        }
        Ok(nav)
    }

    pub fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or(Route::Splash)
    }

    pub fn push(&mut self, route: Route) {
        self.stack.push(route);
    }

    pub fn replace(&mut self, route: Route) {
        self.stack.pop();
        self.stack.push(route);
    }

    /// Go back one screen. The root entry is never popped.
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
