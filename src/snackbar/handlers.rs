// SPDX-License-Identifier: MPL-2.0
//! Ordered handler lists for close/entered/exited notifications.
//!
//! Per-snackbar handlers and provider-wide handlers are kept in separate
//! chains and dispatched one after the other, each handler receiving the same
//! event. Handlers run in registration order; empty chains are skipped.

use super::key::SnackbarKey;
use super::options::CloseReason;
use std::fmt;
use std::sync::Arc;

/// Arguments passed to close handlers.
///
/// `key` is `None` when every snackbar is being closed at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseEvent {
    pub reason: CloseReason,
    pub key: Option<SnackbarKey>,
}

/// Arguments passed to entered handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnteredEvent {
    /// True when the snackbar entered as part of its first appearance.
    pub is_appearing: bool,
    pub key: SnackbarKey,
}

/// Arguments passed to exited handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitedEvent {
    pub key: SnackbarKey,
}

type Handler<E> = Arc<dyn Fn(&E) + Send + Sync>;

/// An ordered list of handlers for one kind of event.
pub struct HandlerChain<E> {
    handlers: Vec<Handler<E>>,
}

impl<E> HandlerChain<E> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Appends a handler; it runs after every handler already registered.
    pub fn push(&mut self, handler: impl Fn(&E) + Send + Sync + 'static) {
        self.handlers.push(Arc::new(handler));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Invokes every handler with `event`.
    pub fn dispatch(&self, event: &E) {
        for handler in &self.handlers {
            handler(event);
        }
    }

    /// Invokes the chains in the given order, all with the same `event`.
    pub fn dispatch_all(chains: &[&HandlerChain<E>], event: &E) {
        for chain in chains {
            chain.dispatch(event);
        }
    }
}

impl<E> Default for HandlerChain<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for HandlerChain<E> {
    fn clone(&self) -> Self {
        Self {
            handlers: self.handlers.clone(),
        }
    }
}

impl<E> fmt::Debug for HandlerChain<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerChain")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
