//! Load state of a detail panel.
//!
//! A [`Panel`] starts `Unloaded` and settles exactly once, into `Loaded` or
//! `Failed`. It never goes back to `Unloaded`; showing the data again after a
//! failure means building a fresh panel with its own loader.

use std::future::Future;

use log::warn;

use crate::api::FetchError;
use crate::loader::{MountContext, MountLoader};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelState<T> {
    Unloaded,
    Loaded(T),
    Failed(String),
}

impl<T> PanelState<T> {
    pub fn is_unloaded(&self) -> bool {
        matches!(self, PanelState::Unloaded)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            PanelState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

pub struct Panel<T> {
    state: PanelState<T>,
    loader: MountLoader<T>,
}

impl<T: Send + 'static> Panel<T> {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            state: PanelState::Unloaded,
            loader: MountLoader::new(label),
        }
    }

    pub fn state(&self) -> &PanelState<T> {
        &self.state
    }

    pub fn data(&self) -> Option<&T> {
        self.state.loaded()
    }

    pub fn is_mounted(&self) -> bool {
        self.loader.is_mounted()
    }

    /// Start the panel's single load. Later calls are no-ops.
    pub fn mount<F>(&mut self, ctx: &MountContext, fetch: F) -> bool
    where
        F: Future<Output = Result<T, FetchError>> + Send + 'static,
    {
        self.loader.mount(ctx, fetch)
    }

    /// Apply an arrived result. Returns `true` when the state changed.
    pub fn poll(&mut self) -> bool {
        let Some(result) = self.loader.poll() else {
            return false;
        };
        if !self.state.is_unloaded() {
            return false;
        }

        self.state = match result {
            Ok(data) => PanelState::Loaded(data),
            Err(err) => {
                warn!("{}: load failed: {}", self.loader.label(), err);
                PanelState::Failed(err.to_string())
            }
        };
        true
    }

    /// Stop listening for the pending result, e.g. when the view is removed.
    pub fn unmount(&mut self) {
        self.loader.teardown();
    }
}
