pub use hts::HTSSource;
pub use mem::InMemorySource;

use crate::core::errors::ProfileError;
use crate::core::read::AlignedRead;
use crate::core::workload::Region;

mod hts;
mod mem;

/// Range-query capability over an indexed alignment store.
///
/// A scan is `fetch` followed by `read` until it returns `None`. Records come in increasing
/// start-coordinate order and a scan can't be restarted; call `fetch` again instead.
/// Sources are not meant to be shared between threads: open one per worker.
pub trait AlignmentSource {
    type Read: AlignedRead;

    /// Empty record buffer reused across `read` calls.
    fn new_record(&self) -> Self::Read;
    /// Length of the reference sequence `tid`, `None` if the store doesn't know it.
    fn reference_len(&self, tid: u32) -> Option<u64>;
    /// Positions the source on records whose aligned span intersects the region.
    fn fetch(&mut self, region: &Region) -> Result<(), ProfileError>;
    /// Loads the next record into `record`.
    fn read(&mut self, record: &mut Self::Read) -> Option<Result<(), ProfileError>>;
}
