//! Test and benchmark utilities.
//!
//! This module is only available when the `testutil` feature is enabled.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const HEADER: &str = "city,population,area,density,country";

/// RNG seed for deterministic dataset generation
pub const BENCH_RNG_SEED: u64 = 42;

/// Upper bound on generated densities, keeps `area * density` well inside `u64`.
pub const MAX_GENERATED_DENSITY: u64 = u32::MAX as u64;

/// Generate a deterministic CSV table with `num_rows` data rows.
///
/// City names are `city_0`, `city_1`, ... and countries `country_0` .. `country_9`.
/// Densities are drawn from `1..=max_density`, clamped to `MAX_GENERATED_DENSITY`,
/// and are consistent with population / area.
pub fn generate_csv(num_rows: usize, max_density: u64) -> String {
    let max_density = max_density.clamp(1, MAX_GENERATED_DENSITY);
    let mut rng = StdRng::seed_from_u64(BENCH_RNG_SEED);
    let mut out = String::from(HEADER);
    for i in 0..num_rows {
        let area: u64 = rng.gen_range(100..10_000);
        let density: u64 = rng.gen_range(1..=max_density);
        let population = area * density;
        out.push_str(&format!(
            "\ncity_{},{},{},{},country_{}",
            i,
            population,
            area,
            density,
            i % 10
        ));
    }
    out
}
