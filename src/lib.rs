//! Positional alignment profiles around a reference position.
//!
//! For every offset relative to `refpos` the profile counts the reads overlapping a region whose
//! anchor (5' end, 3' end or the base aligned closest to `refpos`) lands there after shifting.
//! The allelic variant splits the counts by the base each read shows at `refpos`.
//!
//! Records are read through [`AlignmentSource`]: [`HTSSource`] for indexed BAM/CRAM files,
//! [`InMemorySource`] for records the caller already holds.

pub mod core;

pub use crate::core::classify::{ReadPositionSelector, SkipReason};
pub use crate::core::dna::Allele;
pub use crate::core::errors::ProfileError;
pub use crate::core::filtering::reads::{region_strand, QualityFilter, ReadFlagMask, StrandFilter, StrandSelection};
pub use crate::core::io::{AlignmentSource, HTSSource, InMemorySource};
pub use crate::core::profile::{AllelicProfile, Profile};
pub use crate::core::profiler::{
    profile_alignments_allelic, profile_alignments_non_allelic, ProfileParams, ProfileReport, Profiler,
};
pub use crate::core::scan::{ScanSummary, SkipCounts};
pub use crate::core::window::WindowConfig;
pub use crate::core::workload::Region;
