use itertools::Itertools;
use rust_htslib::bam::Record;

use crate::core::errors::ProfileError;
use crate::core::read::AlignedRead;
use crate::core::workload::Region;

use super::AlignmentSource;

/// Records held in memory, e.g. already fetched by the host or built in tests.
#[derive(Clone, Debug, Default)]
pub struct InMemorySource {
    reflens: Vec<u64>,
    records: Vec<Record>,
    // indices of the records selected by the last fetch
    selected: Vec<usize>,
    cursor: usize,
}

impl InMemorySource {
    pub fn new(reflens: Vec<u64>, mut records: Vec<Record>) -> Self {
        records.sort_by_key(|r| (r.tid(), r.pos()));
        Self { reflens, records, selected: Vec::new(), cursor: 0 }
    }

    #[inline]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    // Same convention as htslib: a record without reference-consuming operations covers one base
    fn span(record: &Record) -> (i64, i64) {
        let start = AlignedRead::pos(record);
        let end = AlignedRead::cigar(record).end_pos();
        (start, end.max(start + 1))
    }
}

impl AlignmentSource for InMemorySource {
    type Read = Record;

    #[inline]
    fn new_record(&self) -> Record {
        Record::new()
    }

    #[inline]
    fn reference_len(&self, tid: u32) -> Option<u64> {
        self.reflens.get(tid as usize).copied()
    }

    fn fetch(&mut self, region: &Region) -> Result<(), ProfileError> {
        self.selected = self
            .records
            .iter()
            .positions(|r| {
                let (start, end) = Self::span(r);
                AlignedRead::tid(r) == *region.tid() as i32 && region.overlaps(start, end)
            })
            .collect();
        self.cursor = 0;
        Ok(())
    }

    fn read(&mut self, record: &mut Record) -> Option<Result<(), ProfileError>> {
        let next = *self.selected.get(self.cursor)?;
        self.cursor += 1;
        *record = self.records[next].clone();
        Some(Ok(()))
    }
}
