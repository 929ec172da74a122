//! Shared viewer context

use std::sync::Arc;

use crate::detail::DetailView;
use crate::navigation::NavigationEngine;
use crate::records::{self, Record};
use crate::settings::AppSettings;

/// Context handed to every view
#[derive(Clone)]
pub struct ViewerContext {
    /// Immutable record store
    pub records: &'static [Record],

    /// Navigation engine, the only writer of the current index
    pub navigation: Arc<NavigationEngine>,

    /// Application settings
    pub settings: Arc<AppSettings>,
}

impl ViewerContext {
    /// Build a context over the compiled-in store
    pub fn new(settings: AppSettings) -> Self {
        let records = records::all();
        let navigation = NavigationEngine::new(records.len(), settings.gestures.clone());
        Self {
            records,
            navigation: Arc::new(navigation),
            settings: Arc::new(settings),
        }
    }

    /// Record at the current index
    pub fn current_record(&self) -> Option<&'static Record> {
        self.records.get(self.navigation.current_index())
    }

    /// Snapshot the current record into a detail overlay
    pub fn open_detail(&self) -> Option<DetailView> {
        self.current_record()
            .map(|record| DetailView::open(record, self.settings.gestures.detail_dismiss_threshold))
    }
}

impl Default for ViewerContext {
    fn default() -> Self {
        Self::new(AppSettings::default())
    }
}
