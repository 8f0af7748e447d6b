use std::ops::Range;
use std::str::FromStr;

use bio_types::strand::ReqStrand;
use rust_htslib::bam::record::{Cigar, CigarStringView};

use crate::core::errors::ProfileError;

/// Point of a read that represents it in the profile.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ReadPositionSelector {
    /// 5'-most aligned reference base (read start in sequencing direction).
    FivePrime,
    /// 3'-most aligned reference base.
    ThreePrime,
    /// Aligned reference base closest to the profiled position.
    RefPos,
}

impl FromStr for ReadPositionSelector {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" | "5p" | "5'" => Ok(ReadPositionSelector::FivePrime),
            "end" | "3p" | "3'" => Ok(ReadPositionSelector::ThreePrime),
            "refpos" => Ok(ReadPositionSelector::RefPos),
            _ => Err(ProfileError::config(format!("Unknown read position: {}", s))),
        }
    }
}

// Integer codes used by host bindings
impl TryFrom<i32> for ReadPositionSelector {
    type Error = ProfileError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(ReadPositionSelector::FivePrime),
            1 => Ok(ReadPositionSelector::ThreePrime),
            2 => Ok(ReadPositionSelector::RefPos),
            _ => Err(ProfileError::config(format!("Unknown read position code: {}", code))),
        }
    }
}

/// Reference intervals covered by aligned (M/=/X) bases of a read starting at `pos`, in increasing order.
pub fn aligned_blocks(pos: i64, cigar: &CigarStringView) -> impl Iterator<Item = Range<i64>> + '_ {
    let mut refpos = pos;
    cigar
        .iter()
        .filter_map(move |op| {
            let start = refpos;
            match op {
                Cigar::Match(ops) | Cigar::Equal(ops) | Cigar::Diff(ops) => {
                    refpos += *ops as i64;
                    Some(start..refpos)
                }
                Cigar::Del(ops) | Cigar::RefSkip(ops) => {
                    refpos += *ops as i64;
                    None
                }
                Cigar::SoftClip(_) | Cigar::Ins(_) | Cigar::HardClip(_) | Cigar::Pad(_) => None,
            }
        })
        .filter(|block| !block.is_empty())
}

/// Anchor of a read or `None` if it has no aligned bases.
pub fn select(
    selector: ReadPositionSelector,
    strand: ReqStrand,
    pos: i64,
    cigar: &CigarStringView,
    refpos: i64,
) -> Option<i64> {
    match selector {
        ReadPositionSelector::FivePrime | ReadPositionSelector::ThreePrime => {
            let mut blocks = aligned_blocks(pos, cigar);
            let first = blocks.next()?;
            let last = blocks.last().unwrap_or_else(|| first.clone());
            let (leftmost, rightmost) = (first.start, last.end - 1);

            match (selector, strand) {
                (ReadPositionSelector::FivePrime, ReqStrand::Forward)
                | (ReadPositionSelector::ThreePrime, ReqStrand::Reverse) => Some(leftmost),
                _ => Some(rightmost),
            }
        }
        // Ties go to the lower coordinate
        ReadPositionSelector::RefPos => aligned_blocks(pos, cigar)
            .map(|block| refpos.clamp(block.start, block.end - 1))
            .min_by_key(|closest| (closest - refpos).abs()),
    }
}
