#![allow(dead_code, non_snake_case)]

use rust_htslib::bam::record::{Cigar, CigarString};
use rust_htslib::bam::Record;

use alignprof::InMemorySource;

pub const CHR1: u32 = 1;
pub const REFLENS: [u64; 2] = [5000, 5000];

pub const REVERSE: u16 = 0x10;
pub const UNMAPPED: u16 = 0x4;
pub const SECONDARY: u16 = 0x100;
pub const DUPLICATE: u16 = 0x400;

pub fn M(x: u32) -> Cigar {
    Cigar::Match(x)
}
pub fn D(x: u32) -> Cigar {
    Cigar::Del(x)
}
pub fn I(x: u32) -> Cigar {
    Cigar::Ins(x)
}
pub fn N(x: u32) -> Cigar {
    Cigar::RefSkip(x)
}
pub fn S(x: u32) -> Cigar {
    Cigar::SoftClip(x)
}

pub fn record(tid: u32, pos: i64, cigar: Vec<Cigar>, seq: &[u8], flags: u16) -> Record {
    let qname = format!("r{}-{}", pos, flags);
    let qual = vec![30u8; seq.len()];

    let mut record = Record::new();
    record.set(qname.as_bytes(), Some(&CigarString(cigar)), seq, &qual);
    record.set_tid(tid as i32);
    record.set_pos(pos);
    record.set_flags(flags);
    record.set_mapq(60);
    record.set_mtid(-1);
    record.set_mpos(-1);
    record
}

/// Fully matched read of `len` bases on chromosome 1.
pub fn matched(pos: i64, len: u32, flags: u16) -> Record {
    record(CHR1, pos, vec![M(len)], &vec![b'A'; len as usize], flags)
}

pub fn forward(pos: i64, len: u32) -> Record {
    matched(pos, len, 0)
}

pub fn reverse(pos: i64, len: u32) -> Record {
    matched(pos, len, REVERSE)
}

pub fn source(records: Vec<Record>) -> InMemorySource {
    InMemorySource::new(REFLENS.to_vec(), records)
}
