use std::fmt::{Display, Formatter};

/// Call observed at the profiled reference position.
#[derive(Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash, Debug)]
pub enum Allele {
    A,
    C,
    G,
    T,
    N,
    Gap,
}

impl Allele {
    pub const ALL: [Allele; 6] = [Allele::A, Allele::C, Allele::G, Allele::T, Allele::N, Allele::Gap];

    #[inline]
    pub fn index(&self) -> usize {
        match self {
            Allele::A => 0,
            Allele::C => 1,
            Allele::G => 2,
            Allele::T => 3,
            Allele::N => 4,
            Allele::Gap => 5,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Allele::A => "A",
            Allele::C => "C",
            Allele::G => "G",
            Allele::T => "T",
            Allele::N => "N",
            Allele::Gap => "-",
        }
    }
}

impl Display for Allele {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Default for Allele {
    fn default() -> Self {
        Allele::N
    }
}

// From the SAM specification: No assumptions can be made on the letter cases
impl From<u8> for Allele {
    fn from(symbol: u8) -> Self {
        match symbol {
            b'A' | b'a' => Allele::A,
            b'C' | b'c' => Allele::C,
            b'G' | b'g' => Allele::G,
            b'T' | b't' => Allele::T,
            b'-' | b'*' => Allele::Gap,
            _ => Allele::N,
        }
    }
}
