//! Application settings
//!
//! All tunables are compiled-in defaults. Nothing is read from the
//! environment or persisted between runs.

use serde::{Deserialize, Serialize};

/// Application-wide settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub gestures: GestureSettings,
    pub card_stack: CardStackSettings,
    pub timeline: TimelineSettings,
    pub animation: AnimationSettings,
}

/// Minimum translation, in points, that commits a gesture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureSettings {
    /// Vertical swipe on the card stack
    pub card_stack_threshold: f32,
    /// Horizontal swipe on the bottom timeline strip
    pub timeline_strip_threshold: f32,
    /// Horizontal swipe in the full timeline browser
    pub timeline_browser_threshold: f32,
    /// Rightward swipe that dismisses the detail overlay
    pub detail_dismiss_threshold: f32,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            card_stack_threshold: 50.0,
            timeline_strip_threshold: 30.0,
            timeline_browser_threshold: 50.0,
            detail_dismiss_threshold: 100.0,
        }
    }
}

/// Stacked card presentation constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardStackSettings {
    /// Distance between neighbouring cards as a fraction of the viewport height
    pub extent_factor: f32,
    /// How closely the current card follows the finger
    pub active_drag_factor: f32,
    /// How closely the other cards follow the finger
    pub parallax_factor: f32,
    pub neighbor_opacity: f32,
    pub inactive_scale: f32,
}

impl Default for CardStackSettings {
    fn default() -> Self {
        Self {
            extent_factor: 0.85,
            active_drag_factor: 0.5,
            parallax_factor: 0.3,
            neighbor_opacity: 0.3,
            inactive_scale: 0.9,
        }
    }
}

/// Timeline strip and browser geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineSettings {
    pub strip_marker_width: f32,
    pub strip_padding: f32,
    pub browser_card_width: f32,
    pub browser_padding: f32,
    pub selected_dot_size: f32,
    pub dot_size: f32,
    pub selected_label_size: f32,
    pub label_size: f32,
    pub selected_photo_size: f32,
    pub photo_size: f32,
}

impl Default for TimelineSettings {
    fn default() -> Self {
        Self {
            strip_marker_width: 52.0,
            strip_padding: 16.0,
            browser_card_width: 90.0,
            browser_padding: 20.0,
            selected_dot_size: 12.0,
            dot_size: 8.0,
            selected_label_size: 12.0,
            label_size: 10.0,
            selected_photo_size: 70.0,
            photo_size: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    /// Seconds for index transitions and auto-scroll
    pub transition_secs: f32,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self { transition_secs: 0.4 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: AppSettings =
            serde_json::from_str(r#"{ "gestures": { "card_stack_threshold": 80.0 } }"#).unwrap();
        assert_eq!(settings.gestures.card_stack_threshold, 80.0);
        assert_eq!(settings.gestures.timeline_strip_threshold, 30.0);
        assert_eq!(settings.card_stack, CardStackSettings::default());
    }
}
