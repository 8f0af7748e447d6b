use bio_types::strand::ReqStrand;
#[cfg(test)]
use mockall::mock;
use rust_htslib::bam::record::CigarStringView;
use rust_htslib::bam::Record;

/// SAM flag bits used by the filters.
pub mod flags {
    pub const PAIRED: u16 = 0x1;
    pub const UNMAPPED: u16 = 0x4;
    pub const REVERSE: u16 = 0x10;
    pub const FIRST_IN_PAIR: u16 = 0x40;
    pub const SECONDARY: u16 = 0x100;
    pub const QC_FAIL: u16 = 0x200;
    pub const DUPLICATE: u16 = 0x400;
    pub const SUPPLEMENTARY: u16 = 0x800;
}

#[allow(clippy::len_without_is_empty)]
pub trait SequencedRead {
    fn name(&self) -> &[u8];
    fn strand(&self) -> &ReqStrand;

    fn seq(&self) -> Vec<u8>;
    fn base(&self, i: usize) -> u8 {
        self.seq()[i]
    }

    fn qual(&self) -> &[u8];
    fn base_qual(&self, i: usize) -> u8 {
        self.qual()[i]
    }

    fn len(&self) -> usize;
}

pub trait AlignedRead: SequencedRead {
    fn cigar(&self) -> CigarStringView;
    fn mapq(&self) -> u8;
    fn pos(&self) -> i64;
    fn tid(&self) -> i32;
    fn flags(&self) -> u16;
}

#[cfg(test)]
mock! {
    pub Read {}
    impl AlignedRead for Read {
        fn cigar(&self) -> CigarStringView;
        fn mapq(&self) -> u8;
        fn pos(&self) -> i64;
        fn tid(&self) -> i32;
        fn flags(&self) -> u16;
    }

    impl SequencedRead for Read {
        fn name(&self) -> &[u8];
        fn strand(&self) -> &ReqStrand;

        fn seq(&self) -> Vec<u8>;
        fn base(&self, i: usize) -> u8;

        fn qual(&self) -> &[u8];
        fn base_qual(&self, i: usize) -> u8;

        fn len(&self) -> usize;
    }
}

impl SequencedRead for Record {
    #[inline]
    fn name(&self) -> &[u8] {
        self.qname()
    }

    #[inline]
    fn strand(&self) -> &ReqStrand {
        if self.is_reverse() {
            &ReqStrand::Reverse
        } else {
            &ReqStrand::Forward
        }
    }

    #[inline]
    fn seq(&self) -> Vec<u8> {
        self.seq().as_bytes()
    }

    #[inline]
    fn base(&self, i: usize) -> u8 {
        self.seq()[i]
    }

    #[inline]
    fn qual(&self) -> &[u8] {
        self.qual()
    }

    #[inline]
    fn len(&self) -> usize {
        self.seq_len()
    }
}

impl AlignedRead for Record {
    #[inline]
    fn cigar(&self) -> CigarStringView {
        self.cigar()
    }

    #[inline]
    fn mapq(&self) -> u8 {
        self.mapq()
    }

    #[inline]
    fn pos(&self) -> i64 {
        self.pos()
    }

    #[inline]
    fn tid(&self) -> i32 {
        self.tid()
    }

    #[inline]
    fn flags(&self) -> u16 {
        self.flags()
    }
}
