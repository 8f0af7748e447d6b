use derive_getters::Getters;
use derive_more::Constructor;

use super::{AlignedRead, ReadsFilter};

/// Records must carry every `include` bit and none of the `exclude` bits.
#[derive(Constructor, Getters, Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ReadFlagMask {
    include: u16,
    exclude: u16,
}

impl ReadFlagMask {
    #[inline]
    pub fn excluding(exclude: u16) -> Self {
        Self { include: 0, exclude }
    }
}

impl<R: AlignedRead> ReadsFilter<R> for ReadFlagMask {
    #[inline]
    fn is_read_ok(&self, record: &R) -> bool {
        ((record.flags() & self.include) == self.include) && ((record.flags() & self.exclude) == 0)
    }

    #[inline]
    fn is_base_ok(&self, _: &R, _: usize) -> bool {
        true
    }
}
