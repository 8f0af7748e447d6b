use log::debug;

use crate::core::errors::ProfileError;
use crate::core::io::AlignmentSource;
use crate::core::workload::Region;

use super::{ReadsCollider, ReadsCollidingEngine};

/// Streams the records of a region from an alignment source into a collider.
pub struct ScanEngine<'a, Source> {
    source: &'a mut Source,
}

impl<'a, Source: AlignmentSource> ScanEngine<'a, Source> {
    pub fn new(source: &'a mut Source) -> Self {
        Self { source }
    }
}

impl<'a, Source, Collider> ReadsCollidingEngine<Source::Read, Collider> for ScanEngine<'a, Source>
where
    Source: AlignmentSource,
    Collider: ReadsCollider<Source::Read>,
{
    fn run(&mut self, region: &Region, collider: &mut Collider) -> Result<(), ProfileError> {
        debug!("Scanning {}:{}-{}", region.tid(), region.start(), region.end());
        self.source.fetch(region)?;

        let mut record = self.source.new_record();
        let mut scanned = 0u64;
        while let Some(r) = self.source.read(&mut record) {
            r?;
            collider.collide(&record);
            scanned += 1;
        }
        collider.finalize();

        debug!("Scanned {} records in {}:{}-{}", scanned, region.tid(), region.start(), region.end());
        Ok(())
    }
}
