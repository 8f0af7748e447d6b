use std::ops::{Add, Index, IndexMut};

use bio_types::strand::ReqStrand;
use serde::Serialize;

#[derive(Default, Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct StrandedData<T> {
    pub forward: T,
    pub reverse: T,
}

impl<T> Index<ReqStrand> for StrandedData<T> {
    type Output = T;

    fn index(&self, index: ReqStrand) -> &Self::Output {
        match index {
            ReqStrand::Forward => &self.forward,
            ReqStrand::Reverse => &self.reverse,
        }
    }
}

impl<T> IndexMut<ReqStrand> for StrandedData<T> {
    fn index_mut(&mut self, index: ReqStrand) -> &mut Self::Output {
        match index {
            ReqStrand::Forward => &mut self.forward,
            ReqStrand::Reverse => &mut self.reverse,
        }
    }
}

impl<T: Add<Output = T> + Copy> StrandedData<T> {
    #[inline]
    pub fn total(&self) -> T {
        self.forward + self.reverse
    }
}
