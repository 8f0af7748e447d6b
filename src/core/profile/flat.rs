use serde::Serialize;

/// Read counts per offset in `[-max_up, max_down]`.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize)]
pub struct Profile {
    max_up: u32,
    max_down: u32,
    counts: Vec<u32>,
}

impl Profile {
    pub fn zeros(max_up: u32, max_down: u32) -> Self {
        let counts = vec![0; max_up as usize + max_down as usize + 1];
        Self { max_up, max_down, counts }
    }

    #[inline]
    pub fn max_up(&self) -> u32 {
        self.max_up
    }

    #[inline]
    pub fn max_down(&self) -> u32 {
        self.max_down
    }

    #[inline]
    pub fn has_shape(&self, max_up: u32, max_down: u32) -> bool {
        self.max_up == max_up && self.max_down == max_down
    }

    /// Number of cells, `max_up + max_down + 1`.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Counts in offset order, the first cell is `-max_up`.
    #[inline]
    pub fn cells(&self) -> &[u32] {
        &self.counts
    }

    #[inline]
    pub fn cells_mut(&mut self) -> &mut [u32] {
        &mut self.counts
    }

    pub fn get(&self, offset: i64) -> Option<u32> {
        if offset < -(self.max_up as i64) || offset > self.max_down as i64 {
            return None;
        }
        self.counts.get((offset + self.max_up as i64) as usize).copied()
    }

    /// `(offset, count)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (i64, u32)> + '_ {
        let first = -(self.max_up as i64);
        self.counts.iter().enumerate().map(move |(cell, cnt)| (first + cell as i64, *cnt))
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|x| *x as u64).sum()
    }

    #[inline]
    pub fn into_cells(self) -> Vec<u32> {
        self.counts
    }

    #[inline]
    pub(crate) fn increment(&mut self, cell: usize) -> bool {
        match self.counts.get_mut(cell) {
            Some(cnt) => {
                *cnt += 1;
                true
            }
            None => false,
        }
    }
}
