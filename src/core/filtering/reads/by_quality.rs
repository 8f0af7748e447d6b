use derive_getters::Getters;
use derive_more::Constructor;

use super::{AlignedRead, ReadsFilter};

/// Mapping-quality floor for records and phred floor for the base called at the profiled position.
/// Zero disables either check.
#[derive(Constructor, Getters, Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct QualityFilter {
    mapq: u8,
    phred: u8,
}

impl<R: AlignedRead> ReadsFilter<R> for QualityFilter {
    #[inline]
    fn is_read_ok(&self, record: &R) -> bool {
        record.mapq() >= self.mapq
    }

    #[inline]
    fn is_base_ok(&self, record: &R, base: usize) -> bool {
        // 255 = quality is not available
        self.phred == 0 || {
            let qual = record.base_qual(base);
            qual != 255 && qual >= self.phred
        }
    }
}
