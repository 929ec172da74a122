use crate::settings::CardStackSettings;

/// Where and how one card is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPresentation {
    pub index: usize,
    /// Vertical offset from the resting position
    pub offset: f32,
    pub opacity: f32,
    pub scale: f32,
    /// Higher draws on top
    pub z_index: u8,
}

impl CardPresentation {
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}

/// Presentation of the card at `index` while `current` is selected.
///
/// `drag_offset` is the live vertical translation of the card stack gesture
/// and `extent` the height of the viewport.
pub fn card_presentation(
    index: usize,
    current: usize,
    drag_offset: f32,
    extent: f32,
    settings: &CardStackSettings,
) -> CardPresentation {
    let delta = index as f32 - current as f32;
    let distance = index.abs_diff(current);

    let offset = if distance == 0 {
        drag_offset * settings.active_drag_factor
    } else {
        delta * extent * settings.extent_factor + drag_offset * settings.parallax_factor
    };

    let opacity = match distance {
        0 => 1.0,
        1 => settings.neighbor_opacity,
        _ => 0.0,
    };

    let scale = if distance == 0 { 1.0 } else { settings.inactive_scale };

    CardPresentation {
        index,
        offset,
        opacity,
        scale,
        z_index: u8::from(distance == 0),
    }
}

/// Presentation of every card, in index order
pub fn card_stack_layout(
    count: usize,
    current: usize,
    drag_offset: f32,
    extent: f32,
    settings: &CardStackSettings,
) -> Vec<CardPresentation> {
    (0..count)
        .map(|index| card_presentation(index, current, drag_offset, extent, settings))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(current: usize, drag: f32) -> Vec<CardPresentation> {
        card_stack_layout(24, current, drag, 800.0, &CardStackSettings::default())
    }

    #[test]
    fn test_current_card_at_rest() {
        let cards = layout(5, 0.0);
        let card = cards[5];
        assert_eq!(card.offset, 0.0);
        assert_eq!(card.opacity, 1.0);
        assert_eq!(card.scale, 1.0);
        assert_eq!(card.z_index, 1);
    }

    #[test]
    fn test_neighbours_and_far_cards() {
        let cards = layout(5, 0.0);
        assert_eq!(cards[4].opacity, 0.3);
        assert_eq!(cards[6].opacity, 0.3);
        assert_eq!(cards[7].opacity, 0.0);
        assert!(!cards[0].is_visible());
        assert_eq!(cards[6].scale, 0.9);
        assert_eq!(cards[6].z_index, 0);
        assert!((cards[6].offset - 680.0).abs() < 1e-3);
        assert!((cards[4].offset + 680.0).abs() < 1e-3);
    }

    #[test]
    fn test_drag_parallax() {
        let cards = layout(5, -100.0);
        assert!((cards[5].offset + 50.0).abs() < 1e-3);
        assert!((cards[6].offset - 650.0).abs() < 1e-3);
    }

    #[test]
    fn test_only_current_is_on_top() {
        let cards = layout(0, 0.0);
        let on_top: Vec<_> = cards.iter().filter(|c| c.z_index > 0).map(|c| c.index).collect();
        assert_eq!(on_top, vec![0]);
    }
}
