use derive_getters::Getters;
use derive_more::Constructor;

use crate::core::errors::ProfileError;

/// Half-open interval `[start, end)` on the reference sequence `tid`.
#[derive(Constructor, Getters, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Region {
    tid: u32,
    start: i64,
    end: i64,
}

impl Region {
    #[inline]
    pub fn len(&self) -> u64 {
        (self.end - self.start).max(0) as u64
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    #[inline]
    pub fn overlaps(&self, start: i64, end: i64) -> bool {
        start < self.end && end > self.start
    }

    /// Checks the region against the length of its reference sequence (`None` = unknown `tid`).
    pub fn validate(&self, reflen: Option<u64>) -> Result<(), ProfileError> {
        let reason = if self.start < 0 {
            Some("start is negative".to_string())
        } else if self.start > self.end {
            Some("start is greater than end".to_string())
        } else {
            match reflen {
                None => Some("reference sequence is unknown to the alignment store".to_string()),
                Some(len) if self.end as u64 > len => {
                    Some(format!("end exceeds the reference sequence length ({})", len))
                }
                Some(_) => None,
            }
        };

        match reason {
            None => Ok(()),
            Some(reason) => Err(ProfileError::InvalidRegion { tid: self.tid, start: self.start, end: self.end, reason }),
        }
    }
}
