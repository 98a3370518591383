//! Settings round-trip for the tracker.

use super::core::ActiveToolTracker;
use crate::config::{SettingsStore, codec};

impl ActiveToolTracker {
    /// Writes all canonical tools and the toolbar selection to `store`.
    pub fn save_settings<S: SettingsStore + ?Sized>(&self, store: &mut S) {
        codec::save(&self.registry, self.toolbar_selected, store);
    }

    /// Restores canonical tools from `store`, selects the stored toolbar
    /// tool and re-broadcasts the eraser mode.
    pub fn load_settings<S: SettingsStore + ?Sized>(&mut self, store: &S) {
        if let Some(kind) = codec::load(&mut self.registry, store) {
            self.select_toolbar_tool(kind);
        }
        self.broadcast_eraser_mode();
    }
}
