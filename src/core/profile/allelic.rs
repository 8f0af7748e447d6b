use std::ops::{Index, IndexMut};

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::core::dna::Allele;

use super::Profile;

/// One profile row per allele, all with the same window.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct AllelicProfile {
    rows: Vec<Profile>,
}

impl AllelicProfile {
    pub fn zeros(max_up: u32, max_down: u32) -> Self {
        Self { rows: Allele::ALL.iter().map(|_| Profile::zeros(max_up, max_down)).collect() }
    }

    #[inline]
    pub fn max_up(&self) -> u32 {
        self.rows[0].max_up()
    }

    #[inline]
    pub fn max_down(&self) -> u32 {
        self.rows[0].max_down()
    }

    #[inline]
    pub fn has_shape(&self, max_up: u32, max_down: u32) -> bool {
        self.rows.len() == Allele::ALL.len() && self.rows.iter().all(|x| x.has_shape(max_up, max_down))
    }

    #[inline]
    pub fn get(&self, allele: Allele, offset: i64) -> Option<u32> {
        self[allele].get(offset)
    }

    /// `(allele, row)` pairs in `Allele::ALL` order.
    pub fn rows(&self) -> impl Iterator<Item = (Allele, &Profile)> {
        Allele::ALL.iter().copied().zip(self.rows.iter())
    }

    pub fn total(&self) -> u64 {
        self.rows.iter().map(|x| x.total()).sum()
    }

    /// Sums the alleles into a single profile.
    pub fn collapse(&self) -> Profile {
        let mut result = Profile::zeros(self.max_up(), self.max_down());
        for row in &self.rows {
            for (sum, cnt) in result.cells_mut().iter_mut().zip(row.cells()) {
                *sum += *cnt;
            }
        }
        result
    }
}

impl Index<Allele> for AllelicProfile {
    type Output = Profile;

    fn index(&self, index: Allele) -> &Self::Output {
        &self.rows[index.index()]
    }
}

impl IndexMut<Allele> for AllelicProfile {
    fn index_mut(&mut self, index: Allele) -> &mut Self::Output {
        &mut self.rows[index.index()]
    }
}

impl Serialize for AllelicProfile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("AllelicProfile", 2 + Allele::ALL.len())?;
        state.serialize_field("max_up", &self.max_up())?;
        state.serialize_field("max_down", &self.max_down())?;
        for (allele, row) in self.rows() {
            state.serialize_field(allele.symbol(), row.cells())?;
        }
        state.end()
    }
}
