use std::ops::{Index, IndexMut};

use bio_types::strand::ReqStrand;
use derive_getters::Getters;
use serde::Serialize;

use crate::core::classify::SkipReason;
use crate::core::strandutil::StrandedData;

/// Records excluded from a profile, by reason.
#[derive(Default, Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SkipCounts {
    pub flags: u64,
    pub strand: u64,
    pub unmapped: u64,
    pub not_spanning: u64,
    pub low_mapq: u64,
    pub outside_window: u64,
    pub unresolved_allele: u64,
    pub low_base_qual: u64,
}

impl SkipCounts {
    pub fn total(&self) -> u64 {
        SkipReason::ALL.iter().map(|x| self[*x]).sum()
    }
}

impl Index<SkipReason> for SkipCounts {
    type Output = u64;

    fn index(&self, index: SkipReason) -> &Self::Output {
        match index {
            SkipReason::Flags => &self.flags,
            SkipReason::Strand => &self.strand,
            SkipReason::Unmapped => &self.unmapped,
            SkipReason::NotSpanningRefPos => &self.not_spanning,
            SkipReason::LowMappingQuality => &self.low_mapq,
            SkipReason::OutsideWindow => &self.outside_window,
            SkipReason::UnresolvedAllele => &self.unresolved_allele,
            SkipReason::LowBaseQuality => &self.low_base_qual,
        }
    }
}

impl IndexMut<SkipReason> for SkipCounts {
    fn index_mut(&mut self, index: SkipReason) -> &mut Self::Output {
        match index {
            SkipReason::Flags => &mut self.flags,
            SkipReason::Strand => &mut self.strand,
            SkipReason::Unmapped => &mut self.unmapped,
            SkipReason::NotSpanningRefPos => &mut self.not_spanning,
            SkipReason::LowMappingQuality => &mut self.low_mapq,
            SkipReason::OutsideWindow => &mut self.outside_window,
            SkipReason::UnresolvedAllele => &mut self.unresolved_allele,
            SkipReason::LowBaseQuality => &mut self.low_base_qual,
        }
    }
}

/// Bookkeeping of a single scan. `scanned == counted.total() + skipped.total()` always holds.
#[derive(Getters, Default, Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ScanSummary {
    scanned: u64,
    counted: StrandedData<u64>,
    // counted in an edge cell after broadening
    clamped: u64,
    skipped: SkipCounts,
}

impl ScanSummary {
    #[inline]
    pub(crate) fn counted_one(&mut self, strand: ReqStrand, clamped: bool) {
        self.scanned += 1;
        self.counted[strand] += 1;
        if clamped {
            self.clamped += 1;
        }
    }

    #[inline]
    pub(crate) fn skipped_one(&mut self, reason: SkipReason) {
        self.scanned += 1;
        self.skipped[reason] += 1;
    }
}
