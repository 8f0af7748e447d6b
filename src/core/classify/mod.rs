use bio_types::strand::ReqStrand;
use derive_getters::Getters;
use serde::Serialize;

pub use anchor::{aligned_blocks, ReadPositionSelector};

use crate::core::filtering::reads::{QualityFilter, ReadFlagMask, ReadsFilter, StrandFilter};
use crate::core::read::{flags, AlignedRead};

mod anchor;

/// Why a record didn't make it into the profile.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
pub enum SkipReason {
    Flags,
    Strand,
    Unmapped,
    NotSpanningRefPos,
    LowMappingQuality,
    OutsideWindow,
    UnresolvedAllele,
    LowBaseQuality,
}

impl SkipReason {
    pub const ALL: [SkipReason; 8] = [
        SkipReason::Flags,
        SkipReason::Strand,
        SkipReason::Unmapped,
        SkipReason::NotSpanningRefPos,
        SkipReason::LowMappingQuality,
        SkipReason::OutsideWindow,
        SkipReason::UnresolvedAllele,
        SkipReason::LowBaseQuality,
    ];
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Anchor {
    pub position: i64,
    pub strand: ReqStrand,
}

/// Decides whether a record qualifies and where it is anchored.
#[derive(Getters, Copy, Clone, Debug)]
pub struct RecordClassifier {
    flags: ReadFlagMask,
    strand: StrandFilter,
    quality: QualityFilter,
    selector: ReadPositionSelector,
    refpos: i64,
    // records must cover refpos (allelic profiles)
    spanning: bool,
}

impl RecordClassifier {
    pub fn new(
        flags: ReadFlagMask,
        strand: StrandFilter,
        quality: QualityFilter,
        selector: ReadPositionSelector,
        refpos: i64,
        spanning: bool,
    ) -> Self {
        Self { flags, strand, quality, selector, refpos, spanning }
    }

    pub fn classify<R: AlignedRead>(&self, read: &R) -> Result<Anchor, SkipReason> {
        if !self.flags.is_read_ok(read) {
            return Err(SkipReason::Flags);
        }
        if !self.strand.is_read_ok(read) {
            return Err(SkipReason::Strand);
        }
        if read.flags() & flags::UNMAPPED != 0 {
            return Err(SkipReason::Unmapped);
        }

        let (pos, cigar) = (read.pos(), read.cigar());
        if self.spanning && !(pos <= self.refpos && self.refpos < cigar.end_pos()) {
            return Err(SkipReason::NotSpanningRefPos);
        }
        if !self.quality.is_read_ok(read) {
            return Err(SkipReason::LowMappingQuality);
        }

        let strand = *read.strand();
        match anchor::select(self.selector, strand, pos, &cigar, self.refpos) {
            Some(position) => Ok(Anchor { position, strand }),
            // Nothing is aligned to the reference
            None => Err(SkipReason::Unmapped),
        }
    }
}
