use bio_types::strand::ReqStrand;
use log::trace;

use crate::core::classify::{RecordClassifier, SkipReason};
use crate::core::profile::Accumulator;
use crate::core::read::{AlignedRead, SequencedRead};
use crate::core::window::{Mapping, WindowConfig};

use super::{ReadsCollider, ScanSummary};

/// Filtering -> mapping -> accumulation for each record of a scan.
pub struct ProfileCollider<A> {
    classifier: RecordClassifier,
    window: WindowConfig,
    accumulator: A,
    summary: ScanSummary,
}

impl<A> ProfileCollider<A> {
    pub fn new(classifier: RecordClassifier, window: WindowConfig, accumulator: A) -> Self {
        Self { classifier, window, accumulator, summary: ScanSummary::default() }
    }

    #[inline]
    pub fn summary(&self) -> &ScanSummary {
        &self.summary
    }

    fn process<R: AlignedRead>(&mut self, read: &R) -> Result<(ReqStrand, bool), SkipReason>
    where
        A: Accumulator<R>,
    {
        let anchor = self.classifier.classify(read)?;
        let (cell, clamped) = match self.window.map(anchor.position, *self.classifier.refpos()) {
            Mapping::Inside(cell) => (cell, false),
            Mapping::Clamped(cell) => (cell, true),
            Mapping::Outside => return Err(SkipReason::OutsideWindow),
        };
        self.accumulator.accumulate(read, cell)?;
        Ok((anchor.strand, clamped))
    }
}

impl<R: AlignedRead, A: Accumulator<R>> ReadsCollider<R> for ProfileCollider<A> {
    type ColliderResult = (A::Output, ScanSummary);

    fn collide(&mut self, read: &R) {
        match self.process(read) {
            Ok((strand, clamped)) => self.summary.counted_one(strand, clamped),
            Err(reason) => {
                trace!("Skipped {} at {}: {:?}", String::from_utf8_lossy(read.name()), read.pos(), reason);
                self.summary.skipped_one(reason);
            }
        }
    }

    fn finalize(&mut self) {
        debug_assert_eq!(
            *self.summary.scanned(),
            self.summary.counted().total() + self.summary.skipped().total()
        );
    }

    fn result(self) -> Self::ColliderResult {
        (self.accumulator.finish(), self.summary)
    }
}
