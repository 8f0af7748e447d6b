pub use collider::ProfileCollider;
pub use engine::ScanEngine;
pub use summary::{ScanSummary, SkipCounts};

use crate::core::errors::ProfileError;
use crate::core::read::AlignedRead;
use crate::core::workload::Region;

mod collider;
mod engine;
mod summary;

// A function computed on top of the reads overlapping a region
pub trait ReadsCollider<R: AlignedRead> {
    type ColliderResult;

    fn collide(&mut self, read: &R);
    fn finalize(&mut self);
    fn result(self) -> Self::ColliderResult;
}

// Drives a collider over all reads of a region
pub trait ReadsCollidingEngine<R: AlignedRead, Collider: ReadsCollider<R>> {
    fn run(&mut self, region: &Region, collider: &mut Collider) -> Result<(), ProfileError>;
}
