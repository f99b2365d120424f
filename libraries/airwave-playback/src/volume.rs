//! Volume and mute state
//!
//! Volume is a 0-100 level; the engine receives a linear 0.0-1.0 gain.
//! Muting swaps the engine gain to zero while preserving the stored level.

/// Volume controller
#[derive(Debug, Clone)]
pub struct Volume {
    /// Volume level (0-100)
    level: u8,

    /// Mute state (preserves volume level)
    muted: bool,
}

impl Volume {
    /// Create new volume controller
    ///
    /// # Arguments
    /// * `level` - Initial volume (0-100, default: 70)
    pub fn new(level: u8) -> Self {
        Self {
            level: level.min(100),
            muted: level == 0,
        }
    }

    /// Set volume level (0-100)
    ///
    /// Level 0 forces mute; any non-zero level unmutes.
    pub fn set_level(&mut self, level: u8) {
        self.level = level.min(100);
        if self.level == 0 {
            self.muted = true;
        } else if self.muted {
            self.muted = false;
        }
    }

    /// Get current volume level (0-100)
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Toggle mute state
    ///
    /// The stored level is untouched; only the engine gain changes.
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Gain to hand the audio engine
    ///
    /// Returns 0.0 when muted, otherwise the level mapped linearly into
    /// 0.0-1.0. The platform engine owns any perceptual curve.
    pub fn engine_gain(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            f32::from(self.level) / 100.0
        }
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(70)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_volume() {
        let vol = Volume::new(70);
        assert_eq!(vol.level(), 70);
        assert!(!vol.is_muted());
    }

    #[test]
    fn set_level_clamps() {
        let mut vol = Volume::new(50);
        vol.set_level(150);
        assert_eq!(vol.level(), 100);
    }

    #[test]
    fn zero_level_forces_mute() {
        let mut vol = Volume::new(70);
        vol.set_level(0);
        assert!(vol.is_muted());
        assert_eq!(vol.engine_gain(), 0.0);
    }

    #[test]
    fn nonzero_level_unmutes() {
        let mut vol = Volume::new(70);
        vol.set_level(0);
        assert!(vol.is_muted());

        vol.set_level(40);
        assert!(!vol.is_muted());
        assert_eq!(vol.level(), 40);
    }

    #[test]
    fn toggle_mute_preserves_level() {
        let mut vol = Volume::new(80);
        vol.toggle_mute();
        assert!(vol.is_muted());
        assert_eq!(vol.level(), 80);
        assert_eq!(vol.engine_gain(), 0.0);

        vol.toggle_mute();
        assert!(!vol.is_muted());
        assert_eq!(vol.level(), 80);
        assert!((vol.engine_gain() - 0.8).abs() < f32::EPSILON);
    }

    #[test]
    fn gain_is_linear() {
        assert_eq!(Volume::new(0).engine_gain(), 0.0);
        assert_eq!(Volume::new(100).engine_gain(), 1.0);
        assert!((Volume::new(50).engine_gain() - 0.5).abs() < f32::EPSILON);
    }
}
