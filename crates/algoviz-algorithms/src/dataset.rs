//! Dataset parameters and random dataset generation.

use std::ops::RangeInclusive;

use algoviz_engine::EngineConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::searching::SearchDataset;

/// Sizes and value ranges for generated and user-supplied datasets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetConfig {
    /// Length of a generated sort dataset.
    pub sort_len: usize,
    /// Values a generated sort dataset draws from.
    pub sort_range: RangeInclusive<u32>,
    /// Length of a generated search dataset.
    pub search_len: usize,
    /// Values a generated search dataset draws from.
    pub search_range: RangeInclusive<u32>,
    /// Most values custom input may contain.
    pub input_limit: usize,
    /// Values custom input may contain.
    pub input_range: RangeInclusive<u32>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            sort_len: 15,
            sort_range: 15..=99,
            search_len: 14,
            search_range: 10..=99,
            input_limit: 20,
            input_range: 1..=100,
        }
    }
}

impl DatasetConfig {
    #[must_use]
    pub fn with_sort_len(mut self, len: usize) -> Self {
        self.sort_len = len;
        self
    }

    #[must_use]
    pub fn with_search_len(mut self, len: usize) -> Self {
        self.search_len = len;
        self
    }
}

/// Draws fresh datasets. Seeded generators repeat their sequence.
#[derive(Debug)]
pub struct DatasetGenerator {
    rng: StdRng,
    config: DatasetConfig,
}

impl DatasetGenerator {
    pub fn new(config: DatasetConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng, config }
    }

    /// Generator seeded from the engine configuration, with default sizes.
    pub fn from_engine(engine: &EngineConfig) -> Self {
        Self::new(DatasetConfig::default(), engine.seed)
    }

    pub fn config(&self) -> &DatasetConfig {
        &self.config
    }

    /// Unsorted values for the sorting family.
    pub fn sort_values(&mut self) -> Vec<u32> {
        let values: Vec<u32> = (0..self.config.sort_len)
            .map(|_| self.rng.gen_range(self.config.sort_range.clone()))
            .collect();
        debug!(len = values.len(), "generated sort dataset");
        values
    }

    /// Sorted values for the searching family, targeting one of them.
    pub fn search_dataset(&mut self) -> SearchDataset {
        let values: Vec<u32> = (0..self.config.search_len)
            .map(|_| self.rng.gen_range(self.config.search_range.clone()))
            .collect();
        let target = if values.is_empty() {
            *self.config.search_range.start()
        } else {
            values[self.rng.gen_range(0..values.len())]
        };
        debug!(len = values.len(), target, "generated search dataset");
        SearchDataset::new(values, target)
    }
}
