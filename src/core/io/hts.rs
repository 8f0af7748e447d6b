use std::path::Path;

use itertools::Itertools;
pub use rust_htslib::bam::IndexedReader;
use rust_htslib::bam::{Read, Record};

use crate::core::errors::ProfileError;
use crate::core::workload::Region;

use super::AlignmentSource;

/// Indexed BAM/CRAM file.
pub struct HTSSource {
    reader: IndexedReader,
}

impl HTSSource {
    /// Opens an indexed alignment file (the index must sit next to it, e.g. after `samtools index`).
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let reader = IndexedReader::from_path(path.as_ref())?;
        Ok(Self { reader })
    }

    #[inline]
    pub fn reader(&self) -> &IndexedReader {
        &self.reader
    }

    /// Names and lengths of the reference sequences, in `tid` order.
    pub fn references(&self) -> Vec<(String, u64)> {
        let header = self.reader.header();
        (0..header.target_count())
            .map(|tid| {
                let name = String::from_utf8_lossy(header.tid2name(tid)).to_string();
                (name, header.target_len(tid).unwrap_or(0))
            })
            .collect_vec()
    }
}

impl From<IndexedReader> for HTSSource {
    fn from(reader: IndexedReader) -> Self {
        Self { reader }
    }
}

impl AlignmentSource for HTSSource {
    type Read = Record;

    #[inline]
    fn new_record(&self) -> Record {
        Record::new()
    }

    fn reference_len(&self, tid: u32) -> Option<u64> {
        let header = self.reader.header();
        if tid < header.target_count() {
            header.target_len(tid)
        } else {
            None
        }
    }

    fn fetch(&mut self, region: &Region) -> Result<(), ProfileError> {
        self.reader.fetch((*region.tid(), *region.start(), *region.end()))?;
        Ok(())
    }

    #[inline]
    fn read(&mut self, record: &mut Record) -> Option<Result<(), ProfileError>> {
        self.reader.read(record).map(|r| r.map_err(ProfileError::from))
    }
}
