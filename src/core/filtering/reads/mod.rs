pub use by_flags::ReadFlagMask;
pub use by_quality::QualityFilter;
pub use by_strand::{region_strand, StrandFilter, StrandSelection};

use crate::core::read::AlignedRead;

mod by_flags;
mod by_quality;
mod by_strand;

pub trait ReadsFilter<R: AlignedRead> {
    fn is_read_ok(&self, record: &R) -> bool;
    fn is_base_ok(&self, record: &R, base: usize) -> bool;
}
