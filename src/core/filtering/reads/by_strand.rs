use std::str::FromStr;

use bio_types::strand::ReqStrand;
use derive_getters::Getters;
use derive_more::Constructor;

use crate::core::errors::ProfileError;

use super::{AlignedRead, ReadsFilter};

/// Which reads to keep, relative to the strand of the profiled region.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum StrandSelection {
    /// Reads on the same strand as the region ("+").
    Same,
    /// Reads on the opposite strand ("-").
    Opposite,
    /// Any strand ("*").
    Either,
}

impl FromStr for StrandSelection {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" | "same" => Ok(StrandSelection::Same),
            "-" | "opposite" => Ok(StrandSelection::Opposite),
            "*" | "any" | "either" => Ok(StrandSelection::Either),
            _ => Err(ProfileError::config(format!("Unknown strand selection: {}", s))),
        }
    }
}

/// Parses the strand of the profiled region ("+" or "-").
pub fn region_strand(s: &str) -> Result<ReqStrand, ProfileError> {
    match s {
        "+" => Ok(ReqStrand::Forward),
        "-" => Ok(ReqStrand::Reverse),
        _ => Err(ProfileError::config(format!("Unknown region strand: {}", s))),
    }
}

#[derive(Constructor, Getters, Copy, Clone, Debug, Eq, PartialEq)]
pub struct StrandFilter {
    selected: StrandSelection,
    region: ReqStrand,
}

impl<R: AlignedRead> ReadsFilter<R> for StrandFilter {
    #[inline]
    fn is_read_ok(&self, record: &R) -> bool {
        match self.selected {
            StrandSelection::Either => true,
            StrandSelection::Same => *record.strand() == self.region,
            StrandSelection::Opposite => *record.strand() != self.region,
        }
    }

    #[inline]
    fn is_base_ok(&self, _: &R, _: usize) -> bool {
        true
    }
}
