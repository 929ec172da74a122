use crate::navigation::{NavigationChange, NavigationContext, NavigationSubscriber};
use crate::records::Record;
use crate::settings::TimelineSettings;
use parking_lot::Mutex;

/// One dot on the bottom timeline strip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripMarker {
    pub index: usize,
    pub year: u16,
    pub selected: bool,
    /// No connector is drawn to the left of the first marker
    pub is_first: bool,
    /// No connector is drawn to the right of the last marker
    pub is_last: bool,
    pub dot_size: f32,
    pub label_size: f32,
    pub strong: bool,
}

/// One portrait column in the full timeline browser
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrowserCard {
    pub index: usize,
    pub number: u8,
    pub year: u16,
    pub selected: bool,
    pub photo_size: f32,
}

pub fn strip_markers(
    records: &[Record],
    current: usize,
    settings: &TimelineSettings,
) -> Vec<StripMarker> {
    let last = records.len().saturating_sub(1);
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let selected = index == current;
            StripMarker {
                index,
                year: record.term_start,
                selected,
                is_first: index == 0,
                is_last: index == last,
                dot_size: if selected { settings.selected_dot_size } else { settings.dot_size },
                label_size: if selected { settings.selected_label_size } else { settings.label_size },
                strong: selected,
            }
        })
        .collect()
}

pub fn browser_cards(
    records: &[Record],
    current: usize,
    settings: &TimelineSettings,
) -> Vec<BrowserCard> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let selected = index == current;
            BrowserCard {
                index,
                number: record.number,
                year: record.term_start,
                selected,
                photo_size: if selected { settings.selected_photo_size } else { settings.photo_size },
            }
        })
        .collect()
}

/// Horizontal scroll offset that centres item `index` in `viewport`.
///
/// Items are `item_width` wide with `padding` on both ends of the row. The
/// result is clamped so the row never scrolls past either end.
pub fn centered_scroll_offset(
    index: usize,
    item_width: f32,
    padding: f32,
    count: usize,
    viewport: f32,
) -> f32 {
    let content = padding * 2.0 + item_width * count as f32;
    let max_offset = (content - viewport).max(0.0);
    let center = padding + item_width * (index as f32 + 0.5);
    (center - viewport / 2.0).clamp(0.0, max_offset)
}

/// Keeps a timeline centred on the current index.
///
/// Reacts to navigation changes by recording a scroll target. The owning
/// view consumes it on its next frame; the scroller never writes back to the
/// engine, so scrolling can't be mistaken for a gesture.
#[derive(Debug, Default)]
pub struct TimelineScroller {
    pending: Mutex<Option<usize>>,
}

impl TimelineScroller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for `index` to be centred on the next frame
    pub fn request(&self, index: usize) {
        *self.pending.lock() = Some(index);
    }

    /// Take the pending scroll target, if any
    pub fn take_pending(&self) -> Option<usize> {
        self.pending.lock().take()
    }
}

impl NavigationSubscriber for TimelineScroller {
    fn on_navigation_change(&self, change: &NavigationChange, context: &NavigationContext) {
        match change {
            NavigationChange::IndexChanged { to, .. } => self.request(*to),
            // The browser reappears after a toggle and has to catch up
            NavigationChange::ModeChanged { .. } => self.request(context.current_index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::NavigationEngine;
    use crate::records;
    use crate::settings::GestureSettings;
    use std::sync::Arc;

    #[test]
    fn test_strip_markers_emphasise_current() {
        let markers = strip_markers(records::all(), 23, &TimelineSettings::default());
        assert_eq!(markers.len(), 24);
        assert!(markers[0].is_first && !markers[0].is_last);
        assert!(markers[23].is_last);

        let selected: Vec<_> = markers.iter().filter(|m| m.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].index, 23);
        assert_eq!(selected[0].year, 2025);
        assert_eq!(selected[0].dot_size, 12.0);
        assert!(selected[0].strong);
        assert_eq!(markers[3].dot_size, 8.0);
        assert_eq!(markers[3].label_size, 10.0);
    }

    #[test]
    fn test_browser_cards_grow_selected_photo() {
        let cards = browser_cards(records::all(), 10, &TimelineSettings::default());
        assert_eq!(cards[10].photo_size, 70.0);
        assert_eq!(cards[10].number, 11);
        assert_eq!(cards[9].photo_size, 50.0);
    }

    #[test]
    fn test_centered_scroll_offset() {
        // 24 * 52 + 32 = 1280 wide content in a 400 wide viewport
        assert_eq!(centered_scroll_offset(0, 52.0, 16.0, 24, 400.0), 0.0);
        assert_eq!(centered_scroll_offset(23, 52.0, 16.0, 24, 400.0), 880.0);
        let mid = centered_scroll_offset(12, 52.0, 16.0, 24, 400.0);
        assert!((mid - (16.0 + 52.0 * 12.5 - 200.0)).abs() < 1e-3);
        // Content narrower than the viewport never scrolls
        assert_eq!(centered_scroll_offset(3, 52.0, 16.0, 4, 400.0), 0.0);
    }

    #[test]
    fn test_scroller_follows_engine() {
        let nav = NavigationEngine::new(24, GestureSettings::default());
        let scroller = Arc::new(TimelineScroller::new());
        nav.add_subscriber(scroller.clone());

        assert_eq!(scroller.take_pending(), None);

        nav.set_index(23);
        assert_eq!(scroller.take_pending(), Some(23));
        assert_eq!(scroller.take_pending(), None);
        assert_eq!(nav.current_index(), 23);

        nav.toggle_mode();
        assert_eq!(scroller.take_pending(), Some(23));
    }
}
