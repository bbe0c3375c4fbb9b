//! Configuration of the `sort_bench` comparison driver.

use std::env;

use regex::Regex;
use sort_test_tools::patterns::{self, Pattern};

use crate::algorithm::Algorithm;
use crate::error::SortError;
use crate::partition::PartitionScheme;

/// Environment variable overriding the quicksort partition scheme.
pub const SCHEME_ENV: &str = "SORT_BENCH_SCHEME";

/// Environment variable fixing the input seed, shared with the test tools.
pub const SEED_ENV: &str = "OVERRIDE_SEED";

/// Length of generated inputs unless configured otherwise, `0..=10_000` for ascending input.
pub const DEFAULT_LEN: usize = 10_001;

/// Longest generated input, so that every ascending value fits an `i32`.
pub const MAX_LEN: usize = i32::MAX as usize;

/// One labelled input the driver sorts with every selected algorithm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Input {
    pub label: String,
    pub values: Vec<i32>,
}

#[derive(Clone, Debug)]
pub struct BenchConfig {
    pub len: usize,
    pub scheme: PartitionScheme,
    /// Generated input patterns. Empty selects the classic unsorted fixture plus ascending input.
    pub patterns: Vec<Pattern>,
    pub filter: Option<Regex>,
    pub seed: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            len: DEFAULT_LEN,
            scheme: PartitionScheme::default(),
            patterns: Vec::new(),
            filter: None,
            seed: patterns::random_init_seed(),
        }
    }
}

impl BenchConfig {
    /// Defaults with overrides from the process environment.
    pub fn from_env() -> Result<Self, SortError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults with overrides from `lookup`, which maps a variable name to its value.
    pub fn from_lookup<L>(lookup: L) -> Result<Self, SortError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(scheme) = lookup(SCHEME_ENV) {
            config.scheme = scheme.parse()?;
        }

        if let Some(seed) = lookup(SEED_ENV) {
            config.seed = patterns::parse_seed(&seed).map_err(SortError::InvalidSeed)?;
        }

        Ok(config)
    }

    pub fn with_len(mut self, len: usize) -> Result<Self, SortError> {
        if len > MAX_LEN {
            return Err(SortError::InvalidLength { len, max: MAX_LEN });
        }
        self.len = len;
        Ok(self)
    }

    /// Restricts the driver to algorithms whose name matches `filter`.
    pub fn with_filter(mut self, filter: &str) -> Result<Self, SortError> {
        let regex = Regex::new(filter).map_err(|err| SortError::InvalidFilter(err.to_string()))?;
        self.filter = Some(regex);
        Ok(self)
    }

    /// Adds a generated input pattern by name.
    pub fn with_pattern(mut self, name: &str) -> Result<Self, SortError> {
        let pattern = name.parse::<Pattern>().map_err(SortError::UnknownPattern)?;
        self.patterns.push(pattern);
        Ok(self)
    }

    pub fn selects(&self, algorithm: Algorithm) -> bool {
        self.filter
            .as_ref()
            .map_or(true, |filter| filter.is_match(algorithm.name()))
    }

    pub fn algorithms(&self) -> Vec<Algorithm> {
        Algorithm::ALL
            .into_iter()
            .filter(|algorithm| self.selects(*algorithm))
            .collect()
    }

    pub fn inputs(&self) -> Vec<Input> {
        if self.patterns.is_empty() {
            return vec![
                Input {
                    label: "classic unsorted fixture".into(),
                    values: patterns::classic_fixture(),
                },
                Input {
                    label: format!("ascending 0..{}", self.len),
                    values: Pattern::Ascending.generate(self.len, self.seed),
                },
            ];
        }

        self.patterns
            .iter()
            .map(|pattern| Input {
                label: format!("{pattern} len {}", self.len),
                values: pattern.generate(self.len, self.seed),
            })
            .collect()
    }
}
