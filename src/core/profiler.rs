use bio_types::strand::ReqStrand;
use derive_getters::Getters;
use derive_more::Constructor;
use log::debug;

use crate::core::allele::AlleleCaller;
use crate::core::classify::{ReadPositionSelector, RecordClassifier};
use crate::core::errors::ProfileError;
use crate::core::filtering::reads::{QualityFilter, ReadFlagMask, StrandFilter, StrandSelection};
use crate::core::io::AlignmentSource;
use crate::core::profile::{Accumulator, Allelic, AllelicProfile, NonAllelic, Profile};
use crate::core::scan::{ProfileCollider, ReadsCollider, ReadsCollidingEngine, ScanEngine, ScanSummary};
use crate::core::window::WindowConfig;
use crate::core::workload::Region;

/// Everything a profiling call needs besides the store and the target buffer.
#[derive(Constructor, Getters, Copy, Clone, Debug)]
pub struct ProfileParams {
    region: Region,
    refpos: i64,
    strand: StrandFilter,
    selector: ReadPositionSelector,
    flags: ReadFlagMask,
    window: WindowConfig,
    quality: QualityFilter,
}

#[derive(Clone, Debug)]
pub struct ProfileReport<P> {
    pub profile: P,
    pub summary: ScanSummary,
}

/// Validated profiling request. Reusable across stores, each call owns its target buffer.
#[derive(Copy, Clone, Debug)]
pub struct Profiler {
    params: ProfileParams,
}

impl Profiler {
    pub fn new(params: ProfileParams) -> Result<Self, ProfileError> {
        params.window.validate()?;
        if params.refpos < 0 {
            return Err(ProfileError::config(format!("refpos must be non-negative, got {}", params.refpos)));
        }
        Ok(Self { params })
    }

    #[inline]
    pub fn params(&self) -> &ProfileParams {
        &self.params
    }

    #[inline]
    fn shape(&self) -> (u32, u32) {
        // validated in new
        (*self.params.window.max_up() as u32, *self.params.window.max_down() as u32)
    }

    pub fn empty_profile(&self) -> Profile {
        let (up, down) = self.shape();
        Profile::zeros(up, down)
    }

    pub fn empty_allelic_profile(&self) -> AllelicProfile {
        let (up, down) = self.shape();
        AllelicProfile::zeros(up, down)
    }

    // Every row of the target must cover exactly [-max_up, max_down]
    fn check_target(&self, has_shape: impl Fn(u32, u32) -> bool) -> Result<(), ProfileError> {
        let (up, down) = self.shape();
        if has_shape(up, down) {
            Ok(())
        } else {
            Err(ProfileError::config(format!("target profile must cover offsets [-{}, {}]", up, down)))
        }
    }

    pub fn non_allelic<S: AlignmentSource>(
        &self,
        source: &mut S,
        target: Profile,
    ) -> Result<ProfileReport<Profile>, ProfileError> {
        self.check_target(|up, down| target.has_shape(up, down))?;
        self.scan(source, NonAllelic::new(target))
    }

    pub fn allelic<S: AlignmentSource>(
        &self,
        source: &mut S,
        target: AllelicProfile,
    ) -> Result<ProfileReport<AllelicProfile>, ProfileError> {
        self.check_target(|up, down| target.has_shape(up, down))?;
        let caller = AlleleCaller::new(self.params.refpos, self.params.quality);
        self.scan(source, Allelic::new(target, caller))
    }

    fn scan<S, A>(&self, source: &mut S, accumulator: A) -> Result<ProfileReport<A::Output>, ProfileError>
    where
        S: AlignmentSource,
        A: Accumulator<S::Read>,
    {
        let params = &self.params;
        params.region.validate(source.reference_len(*params.region.tid()))?;

        let classifier = RecordClassifier::new(
            params.flags,
            params.strand,
            params.quality,
            params.selector,
            params.refpos,
            accumulator.requires_span(),
        );
        let mut collider = ProfileCollider::new(classifier, params.window, accumulator);
        if !params.region.is_empty() {
            ScanEngine::new(source).run(&params.region, &mut collider)?;
        }

        let (profile, summary) = ReadsCollider::<S::Read>::result(collider);
        debug!(
            "Profiled {} of {} records around {} ({} clamped, {} skipped)",
            summary.counted().total(),
            summary.scanned(),
            params.refpos,
            summary.clamped(),
            summary.skipped().total()
        );
        Ok(ProfileReport { profile, summary })
    }
}

/// Counts the reads overlapping `[start, end)` of `tid` per offset around `refpos`.
///
/// `target` must be shaped `[-max_up, max_down]`; counts are added to it and it is handed back.
/// On failure the target is dropped.
#[allow(clippy::too_many_arguments)]
pub fn profile_alignments_non_allelic<S: AlignmentSource>(
    store: &mut S,
    target: Profile,
    tid: u32,
    start: i64,
    end: i64,
    refpos: i64,
    selstrand: StrandSelection,
    regstrand: ReqStrand,
    read_position: ReadPositionSelector,
    read_flags: ReadFlagMask,
    shift: i64,
    broaden: i64,
    max_up: i64,
    max_down: i64,
) -> Result<Profile, ProfileError> {
    let params = ProfileParams::new(
        Region::new(tid, start, end),
        refpos,
        StrandFilter::new(selstrand, regstrand),
        read_position,
        read_flags,
        WindowConfig::new(shift, broaden, max_up, max_down),
        QualityFilter::default(),
    );
    Ok(Profiler::new(params)?.non_allelic(store, target)?.profile)
}

/// Same as [`profile_alignments_non_allelic`], with counts split by the allele observed at `refpos`.
/// Only reads covering `refpos` are counted.
#[allow(clippy::too_many_arguments)]
pub fn profile_alignments_allelic<S: AlignmentSource>(
    store: &mut S,
    target: AllelicProfile,
    tid: u32,
    start: i64,
    end: i64,
    refpos: i64,
    selstrand: StrandSelection,
    regstrand: ReqStrand,
    read_position: ReadPositionSelector,
    read_flags: ReadFlagMask,
    shift: i64,
    broaden: i64,
    max_up: i64,
    max_down: i64,
) -> Result<AllelicProfile, ProfileError> {
    let params = ProfileParams::new(
        Region::new(tid, start, end),
        refpos,
        StrandFilter::new(selstrand, regstrand),
        read_position,
        read_flags,
        WindowConfig::new(shift, broaden, max_up, max_down),
        QualityFilter::default(),
    );
    Ok(Profiler::new(params)?.allelic(store, target)?.profile)
}
