//! Drag gestures and the single-step threshold policy

/// Views that turn drags into index steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureSurface {
    CardStack,
    TimelineStrip,
    TimelineBrowser,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureAxis {
    Vertical,
    Horizontal,
}

impl GestureSurface {
    pub fn axis(&self) -> GestureAxis {
        match self {
            GestureSurface::CardStack => GestureAxis::Vertical,
            GestureSurface::TimelineStrip | GestureSurface::TimelineBrowser => {
                GestureAxis::Horizontal
            }
        }
    }
}

/// Direction a gesture asks to move in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Forward,
    Backward,
}

/// Result of ending a drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    Advanced,
    Retreated,
    /// Below threshold, or blocked at a boundary
    Unchanged,
}

/// Map a finished drag to at most one step.
///
/// Up/left (negative) moves forward, down/right (positive) moves back. The
/// magnitude must be strictly greater than `threshold`; anything past that
/// is still a single step.
pub fn resolve_step(translation: f32, threshold: f32) -> Option<StepDirection> {
    if translation < -threshold {
        Some(StepDirection::Forward)
    } else if translation > threshold {
        Some(StepDirection::Backward)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_step() {
        assert_eq!(resolve_step(-80.0, 50.0), Some(StepDirection::Forward));
        assert_eq!(resolve_step(80.0, 50.0), Some(StepDirection::Backward));
        assert_eq!(resolve_step(-500.0, 50.0), Some(StepDirection::Forward));
        assert_eq!(resolve_step(-50.0, 50.0), None);
        assert_eq!(resolve_step(49.0, 50.0), None);
        assert_eq!(resolve_step(0.0, 30.0), None);
        assert_eq!(resolve_step(f32::NAN, 30.0), None);
    }

    #[test]
    fn test_surface_axes() {
        assert_eq!(GestureSurface::CardStack.axis(), GestureAxis::Vertical);
        assert_eq!(GestureSurface::TimelineStrip.axis(), GestureAxis::Horizontal);
        assert_eq!(GestureSurface::TimelineBrowser.axis(), GestureAxis::Horizontal);
    }
}
