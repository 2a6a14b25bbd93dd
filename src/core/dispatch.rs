//! Action dispatch.
//!
//! Handlers are registered per [`Action`] at startup; the dispatcher knows
//! nothing about what they do.

use std::collections::BTreeMap;

use tracing::debug;

use crate::core::actions;
use crate::core::resolve::{Action, ResolvedConfiguration};
use crate::error::{Error, Result};

/// Implementation of one action.
pub trait ActionHandler {
    /// Run the action and return the text to print.
    fn execute(&self, config: &ResolvedConfiguration<'_>) -> Result<String>;
}

/// Action → handler table.
pub struct Dispatcher {
    handlers: BTreeMap<Action, Box<dyn ActionHandler>>,
}

impl Dispatcher {
    /// Create a dispatcher with no handlers.
    pub fn new() -> Self {
        Self {
            handlers: BTreeMap::new(),
        }
    }

    /// Dispatcher with a handler for every action.
    pub fn builtin() -> Self {
        Self::new()
            .with(Action::CreateKeys, actions::CreateKeys)
            .with(Action::Decrypt, actions::Decrypt)
            .with(Action::Encrypt, actions::Encrypt)
            .with(Action::Edit, actions::Edit)
    }

    /// Register `handler` for `action`, replacing any previous one.
    pub fn with(mut self, action: Action, handler: impl ActionHandler + 'static) -> Self {
        self.handlers.insert(action, Box::new(handler));
        self
    }

    /// Run the handler for the configuration's action.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownAction` if no handler is registered, otherwise
    /// whatever the handler returns.
    pub fn dispatch(&self, config: &ResolvedConfiguration<'_>) -> Result<String> {
        let handler = self
            .handlers
            .get(&config.action)
            .ok_or_else(|| Error::UnknownAction(config.action.name().to_string()))?;

        debug!(action = %config.action, "dispatching");
        handler.execute(config)
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::builtin()
    }
}
