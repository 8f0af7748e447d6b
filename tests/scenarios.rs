use bio_types::strand::ReqStrand;
use rust_htslib::bam::Record;

use alignprof::*;
use common::*;

mod common;

const START: i64 = 1000;
const END: i64 = 1100;
const REFPOS: i64 = 1050;

fn non_allelic(
    records: Vec<Record>,
    selector: ReadPositionSelector,
    strand: StrandSelection,
    flags: ReadFlagMask,
    shift: i64,
    broaden: i64,
) -> Result<Profile, ProfileError> {
    profile_alignments_non_allelic(
        &mut source(records),
        Profile::zeros(5, 5),
        CHR1,
        START,
        END,
        REFPOS,
        strand,
        ReqStrand::Forward,
        selector,
        flags,
        shift,
        broaden,
        5,
        5,
    )
}

fn five_prime(records: Vec<Record>) -> Profile {
    non_allelic(records, ReadPositionSelector::FivePrime, StrandSelection::Either, ReadFlagMask::default(), 0, 0)
        .unwrap()
}

fn allelic(records: Vec<Record>, selector: ReadPositionSelector, shift: i64) -> Result<AllelicProfile, ProfileError> {
    profile_alignments_allelic(
        &mut source(records),
        AllelicProfile::zeros(5, 5),
        CHR1,
        START,
        END,
        REFPOS,
        StrandSelection::Either,
        ReqStrand::Forward,
        selector,
        ReadFlagMask::default(),
        shift,
        0,
        5,
        5,
    )
}

fn nonzero(profile: &Profile) -> Vec<(i64, u32)> {
    profile.iter().filter(|(_, cnt)| *cnt > 0).collect()
}

#[test]
fn counts_five_prime_offsets() {
    let profile = five_prime(vec![forward(1048, 20), forward(1050, 20), forward(1050, 30)]);
    assert_eq!(profile.len(), 11);
    assert_eq!(nonzero(&profile), vec![(-2, 1), (0, 2)]);
}

#[test]
fn reverse_reads_anchor_at_their_rightmost_base() {
    // 5' end of a reverse read is its last aligned base
    let profile = five_prime(vec![reverse(1030, 22), reverse(1040, 14)]);
    assert_eq!(nonzero(&profile), vec![(1, 1), (3, 1)]);

    let profile = non_allelic(
        vec![reverse(1045, 22), forward(1049, 10)],
        ReadPositionSelector::ThreePrime,
        StrandSelection::Either,
        ReadFlagMask::default(),
        0,
        0,
    )
    .unwrap();
    assert_eq!(nonzero(&profile), vec![(-5, 1)]);
}

#[test]
fn broaden_clamps_into_edge_cells() {
    let records = || vec![forward(1048, 20), forward(1050, 20), forward(1050, 30), forward(1057, 20), forward(1041, 20)];
    let all = ReadPositionSelector::FivePrime;

    let profile = non_allelic(records(), all, StrandSelection::Either, ReadFlagMask::default(), 0, 2).unwrap();
    assert_eq!(nonzero(&profile), vec![(-2, 1), (0, 2), (5, 1)]);

    let profile = non_allelic(records(), all, StrandSelection::Either, ReadFlagMask::default(), 0, 0).unwrap();
    assert_eq!(nonzero(&profile), vec![(-2, 1), (0, 2)]);

    // 1041 lands at -9, still too far for broaden = 3
    let profile = non_allelic(records(), all, StrandSelection::Either, ReadFlagMask::default(), 0, 3).unwrap();
    assert_eq!(nonzero(&profile), vec![(-2, 1), (0, 2), (5, 1)]);
}

#[test]
fn shift_translates_offsets() {
    let records = || vec![forward(1048, 20), forward(1050, 20)];
    let all = ReadPositionSelector::FivePrime;

    let profile = non_allelic(records(), all, StrandSelection::Either, ReadFlagMask::default(), 3, 0).unwrap();
    assert_eq!(nonzero(&profile), vec![(1, 1), (3, 1)]);

    let profile = non_allelic(records(), all, StrandSelection::Either, ReadFlagMask::default(), -4, 0).unwrap();
    assert_eq!(nonzero(&profile), vec![(-4, 1)]);
}

#[test]
fn strand_selection_is_relative_to_region() {
    let records = || vec![forward(1050, 20), forward(1052, 20), reverse(1030, 21)];
    let run = |strand, regstrand| {
        profile_alignments_non_allelic(
            &mut source(records()),
            Profile::zeros(5, 5),
            CHR1,
            START,
            END,
            REFPOS,
            strand,
            regstrand,
            ReadPositionSelector::FivePrime,
            ReadFlagMask::default(),
            0,
            0,
            5,
            5,
        )
        .unwrap()
        .total()
    };

    assert_eq!(run(StrandSelection::Same, ReqStrand::Forward), 2);
    assert_eq!(run(StrandSelection::Opposite, ReqStrand::Forward), 1);
    assert_eq!(run(StrandSelection::Same, ReqStrand::Reverse), 1);
    assert_eq!(run(StrandSelection::Opposite, ReqStrand::Reverse), 2);
    assert_eq!(run(StrandSelection::Either, ReqStrand::Reverse), 3);
}

#[test]
fn flags_exclude_records() {
    let records = || {
        vec![
            forward(1050, 20),
            matched(1050, 20, DUPLICATE),
            matched(1051, 20, SECONDARY),
            matched(1052, 20, UNMAPPED),
        ]
    };
    let all = ReadPositionSelector::FivePrime;

    let profile = non_allelic(records(), all, StrandSelection::Either, ReadFlagMask::default(), 0, 0).unwrap();
    // unmapped records are never counted
    assert_eq!(nonzero(&profile), vec![(0, 2), (1, 1)]);

    let mask = ReadFlagMask::excluding(DUPLICATE | SECONDARY);
    let profile = non_allelic(records(), all, StrandSelection::Either, mask, 0, 0).unwrap();
    assert_eq!(nonzero(&profile), vec![(0, 1)]);

    let mask = ReadFlagMask::new(DUPLICATE, 0);
    let profile = non_allelic(records(), all, StrandSelection::Either, mask, 0, 0).unwrap();
    assert_eq!(nonzero(&profile), vec![(0, 1)]);
}

#[test]
fn refpos_selector_uses_the_closest_aligned_base() {
    let records = vec![
        // covers refpos
        forward(1040, 20),
        // ends before refpos, closest base is 1047
        forward(1030, 18),
        // spliced around refpos, ties resolve to the lower coordinate
        record(CHR1, 1040, vec![M(9), N(3), M(9)], &[b'A'; 18], 0),
    ];
    let profile =
        non_allelic(records, ReadPositionSelector::RefPos, StrandSelection::Either, ReadFlagMask::default(), 0, 0)
            .unwrap();
    assert_eq!(nonzero(&profile), vec![(-3, 1), (-2, 1), (0, 1)]);
}

#[test]
fn records_outside_region_are_ignored() {
    let records = vec![forward(900, 50), forward(1100, 20), record(0, 1050, vec![M(20)], &[b'A'; 20], 0), forward(1050, 10)];
    let profile = five_prime(records);
    assert_eq!(nonzero(&profile), vec![(0, 1)]);
}

#[test]
fn target_is_accumulated_into() {
    let first = five_prime(vec![forward(1048, 20)]);
    let second = profile_alignments_non_allelic(
        &mut source(vec![forward(1048, 20), forward(1050, 20)]),
        first,
        CHR1,
        START,
        END,
        REFPOS,
        StrandSelection::Either,
        ReqStrand::Forward,
        ReadPositionSelector::FivePrime,
        ReadFlagMask::default(),
        0,
        0,
        5,
        5,
    )
    .unwrap();
    assert_eq!(nonzero(&second), vec![(-2, 2), (0, 1)]);
}

#[test]
fn empty_region_yields_empty_profile() {
    let profile = profile_alignments_non_allelic(
        &mut source(vec![forward(1050, 20)]),
        Profile::zeros(2, 3),
        CHR1,
        1050,
        1050,
        REFPOS,
        StrandSelection::Either,
        ReqStrand::Forward,
        ReadPositionSelector::FivePrime,
        ReadFlagMask::default(),
        0,
        0,
        2,
        3,
    )
    .unwrap();
    assert_eq!(profile.len(), 6);
    assert_eq!(profile.total(), 0);
}

#[test]
fn allelic_splits_by_base_at_refpos() {
    let mut seq = vec![b'A'; 10];
    seq[8] = b'G';
    // 3' end at 1051, G at 1050
    let records = vec![record(CHR1, 1042, vec![M(10)], &seq, 0)];

    let profile = allelic(records, ReadPositionSelector::ThreePrime, 0).unwrap();
    assert_eq!(profile.total(), 1);
    assert_eq!(profile.get(Allele::G, 1), Some(1));
    for allele in Allele::ALL {
        if allele != Allele::G {
            assert_eq!(profile[allele].total(), 0);
        }
    }

    // RefPos anchors at refpos itself, the shift moves it to +1
    let records = vec![record(CHR1, 1042, vec![M(10)], &seq, 0)];
    let profile = allelic(records, ReadPositionSelector::RefPos, 1).unwrap();
    assert_eq!(profile.get(Allele::G, 1), Some(1));
    assert_eq!(profile.total(), 1);
}

#[test]
fn allelic_skips_records_not_covering_refpos() {
    let records = vec![
        forward(1030, 10),
        forward(1051, 10),
        // spliced over refpos
        record(CHR1, 1045, vec![M(3), N(5), M(3)], &[b'A'; 6], 0),
        // N base at refpos
        record(CHR1, 1048, vec![M(4)], b"ACNT", 0),
        // deletion over refpos
        record(CHR1, 1046, vec![M(3), D(2), M(3)], b"CCCTTT", REVERSE),
        // insertion right after refpos
        record(CHR1, 1049, vec![M(2), I(2), M(2)], b"TTGGTT", 0),
        forward(1049, 3),
    ];
    let profile = allelic(records, ReadPositionSelector::FivePrime, 0).unwrap();

    assert_eq!(profile.total(), 4);
    assert_eq!(profile.get(Allele::A, -1), Some(1));
    assert_eq!(profile.get(Allele::N, -2), Some(1));
    // reverse read ending at 1053
    assert_eq!(profile.get(Allele::Gap, 3), Some(1));
    assert_eq!(profile.get(Allele::Gap, -1), Some(1));
}

#[test]
fn allelic_collapses_to_non_allelic_for_spanning_reads() {
    let records = || vec![forward(1046, 10), forward(1048, 10), reverse(1040, 12), forward(1050, 3)];
    let collapsed = allelic(records(), ReadPositionSelector::FivePrime, 0).unwrap().collapse();
    let flat = five_prime(records());
    assert_eq!(collapsed, flat);
}

#[test]
fn profiler_reports_skipped_records() {
    let params = ProfileParams::new(
        Region::new(CHR1, START, END),
        REFPOS,
        StrandFilter::new(StrandSelection::Same, ReqStrand::Forward),
        ReadPositionSelector::FivePrime,
        ReadFlagMask::excluding(DUPLICATE),
        WindowConfig::new(0, 1, 5, 5),
        QualityFilter::new(20, 0),
    );
    let profiler = Profiler::new(params).unwrap();

    let mut lowq = forward(1050, 10);
    lowq.set_mapq(10);
    let records = vec![
        forward(1050, 10),
        forward(1056, 10),
        forward(1080, 10),
        reverse(1040, 11),
        matched(1050, 10, DUPLICATE),
        matched(1050, 10, UNMAPPED),
        lowq,
    ];
    let report = profiler.non_allelic(&mut source(records), profiler.empty_profile()).unwrap();

    let summary = report.summary;
    assert_eq!(*summary.scanned(), 7);
    assert_eq!(summary.counted()[ReqStrand::Forward], 2);
    assert_eq!(summary.counted()[ReqStrand::Reverse], 0);
    assert_eq!(*summary.clamped(), 1);

    let skipped = summary.skipped();
    assert_eq!(skipped[SkipReason::Flags], 1);
    assert_eq!(skipped[SkipReason::Strand], 1);
    assert_eq!(skipped[SkipReason::Unmapped], 1);
    assert_eq!(skipped[SkipReason::LowMappingQuality], 1);
    assert_eq!(skipped[SkipReason::OutsideWindow], 1);
    assert_eq!(*summary.scanned(), summary.counted().total() + skipped.total());

    assert_eq!(nonzero(&report.profile), vec![(0, 1), (5, 1)]);
}

#[test]
fn invalid_regions() {
    let run = |tid, start, end| {
        profile_alignments_non_allelic(
            &mut source(vec![forward(1050, 20)]),
            Profile::zeros(5, 5),
            tid,
            start,
            end,
            REFPOS,
            StrandSelection::Either,
            ReqStrand::Forward,
            ReadPositionSelector::FivePrime,
            ReadFlagMask::default(),
            0,
            0,
            5,
            5,
        )
    };

    for (tid, start, end) in [(CHR1, 1100, 1000), (CHR1, -1, 100), (CHR1, 4000, 6000), (7, 0, 100)] {
        assert!(
            matches!(run(tid, start, end), Err(ProfileError::InvalidRegion { .. })),
            "{} {} {}",
            tid,
            start,
            end
        );
    }
    assert!(run(CHR1, 0, 5000).is_ok());
}

#[test]
fn invalid_configuration() {
    let run = |refpos, max_up, max_down, broaden, target: Profile| {
        profile_alignments_non_allelic(
            &mut source(vec![forward(1050, 20)]),
            target,
            CHR1,
            START,
            END,
            refpos,
            StrandSelection::Either,
            ReqStrand::Forward,
            ReadPositionSelector::FivePrime,
            ReadFlagMask::default(),
            0,
            broaden,
            max_up,
            max_down,
        )
    };

    for result in [
        run(REFPOS, -1, 5, 0, Profile::zeros(5, 5)),
        run(REFPOS, 5, -3, 0, Profile::zeros(5, 5)),
        run(REFPOS, 5, 5, -1, Profile::zeros(5, 5)),
        run(-10, 5, 5, 0, Profile::zeros(5, 5)),
        run(REFPOS, 5, 5, 0, Profile::zeros(5, 4)),
        run(REFPOS, 5, 5, 0, Profile::zeros(4, 6)),
    ] {
        assert!(matches!(result, Err(ProfileError::Configuration(_))), "{:?}", result);
    }

    let result = profile_alignments_allelic(
        &mut source(vec![]),
        AllelicProfile::zeros(3, 3),
        CHR1,
        START,
        END,
        REFPOS,
        StrandSelection::Either,
        ReqStrand::Forward,
        ReadPositionSelector::FivePrime,
        ReadFlagMask::default(),
        0,
        0,
        5,
        5,
    );
    assert!(matches!(result, Err(ProfileError::Configuration(_))));
}

#[test]
fn selector_codes() {
    assert_eq!(ReadPositionSelector::try_from(0).unwrap(), ReadPositionSelector::FivePrime);
    assert_eq!(ReadPositionSelector::try_from(1).unwrap(), ReadPositionSelector::ThreePrime);
    assert_eq!(ReadPositionSelector::try_from(2).unwrap(), ReadPositionSelector::RefPos);
    assert!(matches!(ReadPositionSelector::try_from(3), Err(ProfileError::Configuration(_))));

    assert_eq!("5'".parse::<ReadPositionSelector>().unwrap(), ReadPositionSelector::FivePrime);
    assert_eq!("+".parse::<StrandSelection>().unwrap(), StrandSelection::Same);
    assert_eq!(region_strand("-").unwrap(), ReqStrand::Reverse);
    assert!(matches!(region_strand("?"), Err(ProfileError::Configuration(_))));
}

#[test]
fn allelic_skips_records_without_sequence() {
    let records = || vec![record(CHR1, 1045, vec![M(10)], b"", SECONDARY), forward(1050, 10)];

    let profile = allelic(records(), ReadPositionSelector::FivePrime, 0).unwrap();
    assert_eq!(profile.total(), 1);
    assert_eq!(profile.get(Allele::A, 0), Some(1));

    // the alignment itself is still counted
    let profile = five_prime(records());
    assert_eq!(nonzero(&profile), vec![(-5, 1), (0, 1)]);
}

#[test]
fn every_allelic_row_must_match_the_window() {
    let mut seq = vec![b'A'; 10];
    seq[5] = b'G';
    let params = ProfileParams::new(
        Region::new(CHR1, START, END),
        REFPOS,
        StrandFilter::new(StrandSelection::Either, ReqStrand::Forward),
        ReadPositionSelector::FivePrime,
        ReadFlagMask::default(),
        WindowConfig::new(0, 0, 5, 5),
        QualityFilter::default(),
    );
    let profiler = Profiler::new(params).unwrap();

    let mut target = profiler.empty_allelic_profile();
    target[Allele::G] = Profile::zeros(0, 0);
    let result = profiler.allelic(&mut source(vec![record(CHR1, 1045, vec![M(10)], &seq, 0)]), target);
    assert!(matches!(result, Err(ProfileError::Configuration(_))));

    let mut target = profiler.empty_allelic_profile();
    target[Allele::Gap] = Profile::zeros(5, 6);
    assert!(matches!(profiler.allelic(&mut source(vec![]), target), Err(ProfileError::Configuration(_))));

    let report = profiler
        .allelic(&mut source(vec![record(CHR1, 1045, vec![M(10)], &seq, 0)]), profiler.empty_allelic_profile())
        .unwrap();
    assert_eq!(report.profile.get(Allele::G, -5), Some(1));
}
