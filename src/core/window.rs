use derive_getters::Getters;
use derive_more::Constructor;

use crate::core::errors::ProfileError;

/// Largest accepted half-width, broadening or shift of a profile window.
/// The widest allelic profile then takes 6 rows of `2^21 + 1` cells.
pub const MAX_HALF_WIDTH: i64 = 1 << 20;

/// Profile window `[-max_up, max_down]` around the reference position.
///
/// `shift` translates every anchor before it is mapped. Anchors that land at most `broaden`
/// positions past a window edge are counted in that edge cell, so with `broaden > 0` the edge
/// cells are not directly comparable to the interior ones.
#[derive(Constructor, Getters, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct WindowConfig {
    shift: i64,
    broaden: i64,
    max_up: i64,
    max_down: i64,
}

/// Where an anchor lands in the profile.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Mapping {
    Inside(usize),
    Clamped(usize),
    Outside,
}

impl WindowConfig {
    pub fn validate(&self) -> Result<(), ProfileError> {
        for (name, value) in [("maxUp", self.max_up), ("maxDown", self.max_down), ("broaden", self.broaden)] {
            if value < 0 {
                return Err(ProfileError::config(format!("{} must be non-negative, got {}", name, value)));
            }
            if value > MAX_HALF_WIDTH {
                return Err(ProfileError::config(format!("{} must not exceed {}, got {}", name, MAX_HALF_WIDTH, value)));
            }
        }
        if !(-MAX_HALF_WIDTH..=MAX_HALF_WIDTH).contains(&self.shift) {
            return Err(ProfileError::config(format!("|shift| must not exceed {}, got {}", MAX_HALF_WIDTH, self.shift)));
        }
        Ok(())
    }

    /// Number of cells in the profile.
    #[inline]
    pub fn width(&self) -> usize {
        (self.max_up + self.max_down + 1) as usize
    }

    #[inline]
    pub fn offset(&self, anchor: i64, refpos: i64) -> i64 {
        anchor.saturating_sub(refpos).saturating_add(self.shift)
    }

    pub fn map(&self, anchor: i64, refpos: i64) -> Mapping {
        let offset = self.offset(anchor, refpos);
        let (low, high) = (-self.max_up, self.max_down);

        if offset >= low && offset <= high {
            Mapping::Inside((offset - low) as usize)
        } else if offset < low && offset >= low - self.broaden {
            Mapping::Clamped(0)
        } else if offset > high && offset <= high + self.broaden {
            Mapping::Clamped((high - low) as usize)
        } else {
            Mapping::Outside
        }
    }
}
