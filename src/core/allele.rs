use derive_getters::Getters;
use derive_more::Constructor;
use rust_htslib::bam::record::Cigar;

use crate::core::classify::SkipReason;
use crate::core::dna::Allele;
use crate::core::filtering::reads::{QualityFilter, ReadsFilter};
use crate::core::read::AlignedRead;

/// Resolves the call a record makes at a single reference position.
///
/// Indels follow the pileup convention: a deletion covering the position, as well as an insertion
/// or deletion that starts right after the aligned base at the position, is reported as `Gap`.
#[derive(Constructor, Getters, Copy, Clone, Debug)]
pub struct AlleleCaller {
    refpos: i64,
    quality: QualityFilter,
}

impl AlleleCaller {
    pub fn call<R: AlignedRead>(&self, read: &R) -> Result<Allele, SkipReason> {
        let (mut refpos, mut seqpos) = (read.pos(), 0usize);

        let cigar = read.cigar();
        let mut ops = cigar.iter().peekable();
        while let Some(op) = ops.next() {
            if refpos > self.refpos {
                break;
            }
            match op {
                Cigar::Match(len) | Cigar::Equal(len) | Cigar::Diff(len) => {
                    let len = *len as i64;
                    if self.refpos < refpos + len {
                        if self.refpos == refpos + len - 1 && matches!(ops.peek(), Some(Cigar::Ins(_) | Cigar::Del(_))) {
                            return Ok(Allele::Gap);
                        }

                        let base = seqpos + (self.refpos - refpos) as usize;
                        // SEQ and QUAL may be absent (`*`), e.g. in secondary alignments
                        if base >= read.len() {
                            return Err(SkipReason::UnresolvedAllele);
                        }
                        if !self.quality.is_base_ok(read, base) {
                            return Err(SkipReason::LowBaseQuality);
                        }
                        return Ok(Allele::from(read.base(base)));
                    }
                    refpos += len;
                    seqpos += len as usize;
                }
                Cigar::Del(len) => {
                    if self.refpos < refpos + *len as i64 {
                        return Ok(Allele::Gap);
                    }
                    refpos += *len as i64;
                }
                Cigar::RefSkip(len) => {
                    if self.refpos < refpos + *len as i64 {
                        return Err(SkipReason::UnresolvedAllele);
                    }
                    refpos += *len as i64;
                }
                Cigar::SoftClip(len) | Cigar::Ins(len) => {
                    seqpos += *len as usize;
                }
                Cigar::HardClip(_) | Cigar::Pad(_) => {}
            }
        }
        Err(SkipReason::UnresolvedAllele)
    }
}
