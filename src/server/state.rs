//! Server state.

use crate::config::Config;
use crate::dispatch::Dispatcher;

/// Application state shared across handlers.
///
/// Everything here is set up once at startup: the configuration snapshot
/// and the dispatcher (which owns the relay client's connection pool and
/// the simulation artifact lock).
pub struct AppState {
    pub config: Config,
    pub dispatcher: Dispatcher,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let dispatcher = Dispatcher::new(&config);
        Self { config, dispatcher }
    }
}
