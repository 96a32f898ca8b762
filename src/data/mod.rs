use std::fmt;
pub mod rehash;

pub use rehash::{read_rehash_sizes, read_rehash_sizes_from_reader};

/// Column holding the number of insertions performed in a run
pub const INSERT_SIZE: &str = "insert size";
/// Column holding the number of rehash rounds triggered during a run
pub const REHASH_ROUNDS: &str = "rehash rounds";

/// A single benchmark run, i.e. one data row of the CSV file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RehashSample {
    pub insert_size: u64,
    pub rehash_rounds: u64,
}

impl RehashSample {
    pub fn new(insert_size: u64, rehash_rounds: u64) -> Self {
        RehashSample {
            insert_size,
            rehash_rounds,
        }
    }
}

/// [RehashData] holds the benchmark runs in file order
///
/// Both sequences (insert sizes and rehash rounds) are derived from the same
/// samples, so they always have the same length and share indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RehashData {
    samples: Vec<RehashSample>,
}

impl RehashData {
    pub fn new(samples: Vec<RehashSample>) -> Self {
        RehashData { samples }
    }

    pub fn samples(&self) -> &[RehashSample] {
        &self.samples
    }

    /// Insertion sizes in row order
    pub fn insert_sizes(&self) -> Vec<u64> {
        self.samples.iter().map(|s| s.insert_size).collect()
    }

    /// Rehash round counts in row order
    pub fn rehash_rounds(&self) -> Vec<u64> {
        self.samples.iter().map(|s| s.rehash_rounds).collect()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Largest rehash round count, if any rows were loaded
    pub fn max_rehash_rounds(&self) -> Option<u64> {
        self.samples.iter().map(|s| s.rehash_rounds).max()
    }
}

impl From<Vec<(u64, u64)>> for RehashData {
    fn from(pairs: Vec<(u64, u64)>) -> Self {
        RehashData::new(
            pairs
                .into_iter()
                .map(|(size, rounds)| RehashSample::new(size, rounds))
                .collect(),
        )
    }
}

impl fmt::Display for RehashData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} {:?}", self.insert_sizes(), self.rehash_rounds())
    }
}
