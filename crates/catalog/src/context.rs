//! Scoped store-context emulation.
//!
//! Image URL resolution must run under the target store's context (locale,
//! domain) even when triggered from an unrelated context such as an admin
//! save. The switch is modeled as a scoped resource: entering returns a
//! guard, and dropping the guard restores the previous context on every exit
//! path, including early returns and panics.

use recsync_core::StoreId;

/// Switches the active store context for the lifetime of a [`ContextGuard`].
pub trait ContextSwitcher {
    /// Enter the given store's context. The previous context is restored
    /// when the returned guard is dropped.
    fn enter(&self, store: StoreId) -> ContextGuard<'_>;
}

/// RAII guard over an active store-context switch.
///
/// Runs its restore action exactly once, on drop.
pub struct ContextGuard<'a> {
    restore: Option<Box<dyn FnOnce() + 'a>>,
}

impl<'a> ContextGuard<'a> {
    pub fn new(restore: impl FnOnce() + 'a) -> Self {
        Self {
            restore: Some(Box::new(restore)),
        }
    }

    /// A guard that restores nothing, for switchers with no ambient state.
    pub fn noop() -> Self {
        Self { restore: None }
    }
}

impl core::fmt::Debug for ContextGuard<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ContextGuard")
            .field("armed", &self.restore.is_some())
            .finish()
    }
}

impl Drop for ContextGuard<'_> {
    fn drop(&mut self) {
        if let Some(restore) = self.restore.take() {
            restore();
        }
    }
}
