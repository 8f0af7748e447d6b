pub use allelic::AllelicProfile;
pub use flat::Profile;

use crate::core::allele::AlleleCaller;
use crate::core::classify::SkipReason;
use crate::core::read::AlignedRead;

mod allelic;
mod flat;

/// Accumulation strategy plugged into the profiling scan.
pub trait Accumulator<R: AlignedRead> {
    type Output;

    /// Whether records must cover the profiled reference position to be counted.
    fn requires_span(&self) -> bool;
    /// Counts an accepted record at the given profile cell.
    fn accumulate(&mut self, read: &R, cell: usize) -> Result<(), SkipReason>;
    fn finish(self) -> Self::Output;
}

// Offsets are clamped by the window, a miss here is a bug
#[inline]
fn increment(profile: &mut Profile, cell: usize) -> Result<(), SkipReason> {
    if profile.increment(cell) {
        Ok(())
    } else {
        debug_assert!(false, "cell {} is outside of the profile ({} cells)", cell, profile.len());
        Err(SkipReason::OutsideWindow)
    }
}

/// Plain read counts.
#[derive(Clone, Debug)]
pub struct NonAllelic {
    profile: Profile,
}

impl NonAllelic {
    pub fn new(profile: Profile) -> Self {
        Self { profile }
    }
}

impl<R: AlignedRead> Accumulator<R> for NonAllelic {
    type Output = Profile;

    #[inline]
    fn requires_span(&self) -> bool {
        false
    }

    #[inline]
    fn accumulate(&mut self, _: &R, cell: usize) -> Result<(), SkipReason> {
        increment(&mut self.profile, cell)
    }

    fn finish(self) -> Profile {
        self.profile
    }
}

/// Read counts split by the allele each read shows at the profiled position.
#[derive(Clone, Debug)]
pub struct Allelic {
    profile: AllelicProfile,
    caller: AlleleCaller,
}

impl Allelic {
    pub fn new(profile: AllelicProfile, caller: AlleleCaller) -> Self {
        Self { profile, caller }
    }
}

impl<R: AlignedRead> Accumulator<R> for Allelic {
    type Output = AllelicProfile;

    #[inline]
    fn requires_span(&self) -> bool {
        true
    }

    fn accumulate(&mut self, read: &R, cell: usize) -> Result<(), SkipReason> {
        let allele = self.caller.call(read)?;
        increment(&mut self.profile[allele], cell)
    }

    fn finish(self) -> AllelicProfile {
        self.profile
    }
}
