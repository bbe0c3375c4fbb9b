use std::env;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use rand::prelude::*;
use zipf::ZipfDistribution;

/// Length of the unsorted input the comparison driver has always used.
pub const CLASSIC_FIXTURE_LEN: usize = 634;

const CLASSIC_FIXTURE_SEED: u64 = 6307;

static SEED: Lazy<u64> = Lazy::new(|| match env::var("OVERRIDE_SEED") {
    Ok(seed) => parse_seed(&seed).unwrap_or_else(|err| panic!("OVERRIDE_SEED: {err}")),
    Err(env::VarError::NotPresent) => rand::random(),
    Err(err) => panic!("OVERRIDE_SEED: {err}"),
});

/// Parses a seed override. Surrounding whitespace is ignored.
pub fn parse_seed(seed: &str) -> Result<u64, String> {
    seed.trim()
        .parse()
        .map_err(|err| format!("invalid seed `{seed}`: {err}"))
}

/// Seed shared by all unseeded pattern functions in this process. Set `OVERRIDE_SEED` to
/// reproduce a failing run.
pub fn random_init_seed() -> u64 {
    *SEED
}

/// Input shapes used by the tests, the benchmarks and the `sort_bench` driver.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Pattern {
    Random,
    RandomNarrow,
    RandomZipf,
    Ascending,
    Descending,
    SawAscending,
    PipeOrgan,
    AllEqual,
}

impl Pattern {
    pub const ALL: [Pattern; 8] = [
        Pattern::Random,
        Pattern::RandomNarrow,
        Pattern::RandomZipf,
        Pattern::Ascending,
        Pattern::Descending,
        Pattern::SawAscending,
        Pattern::PipeOrgan,
        Pattern::AllEqual,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pattern::Random => "random",
            Pattern::RandomNarrow => "random_narrow",
            Pattern::RandomZipf => "random_zipf",
            Pattern::Ascending => "ascending",
            Pattern::Descending => "descending",
            Pattern::SawAscending => "saw_ascending",
            Pattern::PipeOrgan => "pipe_organ",
            Pattern::AllEqual => "all_equal",
        }
    }

    /// Generates `len` values. Equal `(len, seed)` pairs always yield equal output.
    pub fn generate(self, len: usize, seed: u64) -> Vec<i32> {
        let mut rng = StdRng::seed_from_u64(seed);

        match self {
            Pattern::Random => (0..len).map(|_| rng.gen::<i32>()).collect(),
            Pattern::RandomNarrow => {
                // Roughly eight copies of every value.
                let upper = i32::try_from((len / 8).max(1)).unwrap_or(i32::MAX);
                (0..len).map(|_| rng.gen_range(0..upper)).collect()
            }
            Pattern::RandomZipf => {
                if len == 0 {
                    return Vec::new();
                }

                let dist = ZipfDistribution::new(len, 1.0).expect("len and exponent are positive");
                (0..len)
                    .map(|_| i32::try_from(dist.sample(&mut rng)).unwrap_or(i32::MAX))
                    .collect()
            }
            Pattern::Ascending => ascending_from(0, len),
            Pattern::Descending => {
                let mut v = ascending_from(0, len);
                v.reverse();
                v
            }
            Pattern::SawAscending => {
                let tooth = (len / 5).max(1);
                (0..len).map(|i| saturating_i32(i % tooth)).collect()
            }
            Pattern::PipeOrgan => {
                let half = len / 2;
                let mut v = ascending_from(0, half);
                v.extend((0..len - half).rev().map(saturating_i32));
                v
            }
            Pattern::AllEqual => vec![66; len],
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::ALL
            .into_iter()
            .find(|pattern| pattern.name() == s)
            .ok_or_else(|| s.to_string())
    }
}

fn ascending_from(start: i32, len: usize) -> Vec<i32> {
    (0..len)
        .map(|i| start.saturating_add(saturating_i32(i)))
        .collect()
}

/// Values past `i32::MAX` repeat the maximum instead of wrapping.
fn saturating_i32(i: usize) -> i32 {
    i32::try_from(i).unwrap_or(i32::MAX)
}

/// The fixed unsorted comparison input: values in `0..10_000`, with repeats.
pub fn classic_fixture() -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(CLASSIC_FIXTURE_SEED);
    (0..CLASSIC_FIXTURE_LEN)
        .map(|_| rng.gen_range(0..10_000))
        .collect()
}

pub fn random(len: usize) -> Vec<i32> {
    Pattern::Random.generate(len, random_init_seed())
}

pub fn random_narrow(len: usize) -> Vec<i32> {
    Pattern::RandomNarrow.generate(len, random_init_seed())
}

pub fn random_zipf(len: usize) -> Vec<i32> {
    Pattern::RandomZipf.generate(len, random_init_seed())
}

pub fn ascending(len: usize) -> Vec<i32> {
    Pattern::Ascending.generate(len, random_init_seed())
}

pub fn descending(len: usize) -> Vec<i32> {
    Pattern::Descending.generate(len, random_init_seed())
}

pub fn saw_ascending(len: usize) -> Vec<i32> {
    Pattern::SawAscending.generate(len, random_init_seed())
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    Pattern::PipeOrgan.generate(len, random_init_seed())
}

pub fn all_equal(len: usize) -> Vec<i32> {
    Pattern::AllEqual.generate(len, random_init_seed())
}
