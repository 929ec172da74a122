/// Eased interpolation between two scalar values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    elapsed: f32,
    duration: f32,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        Self {
            from,
            to,
            elapsed: 0.0,
            duration: duration.max(0.0),
        }
    }

    /// Advance by `dt` seconds and return the new value
    pub fn step(&mut self, dt: f32) -> f32 {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
        self.value()
    }

    pub fn value(&self) -> f32 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = self.elapsed / self.duration;
        // Cubic ease-out
        let eased = 1.0 - (1.0 - t).powi(3);
        self.from + (self.to - self.from) * eased
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tween_eases_to_target() {
        let mut tween = Tween::new(0.0, 100.0, 0.4);
        assert_eq!(tween.value(), 0.0);

        let mid = tween.step(0.2);
        assert!(mid > 50.0 && mid < 100.0);
        assert!(!tween.is_finished());

        assert_eq!(tween.step(1.0), 100.0);
        assert!(tween.is_finished());
    }

    #[test]
    fn test_zero_duration_jumps() {
        let tween = Tween::new(10.0, 20.0, 0.0);
        assert_eq!(tween.value(), 20.0);
        assert!(tween.is_finished());
    }
}
