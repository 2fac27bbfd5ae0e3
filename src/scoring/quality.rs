use crate::domain::MeasureCode;
use crate::thresholds::{BenchmarkTier, ThresholdTables};

/// Places an observed measure value into its national benchmark band.
///
/// A measure with no benchmark entry resolves to `Poor` so the caller still
/// gets a renderable tier for partial table sets.
pub fn benchmark_tier(code: MeasureCode, observed: f64, tables: &ThresholdTables) -> BenchmarkTier {
    match tables.benchmark(code) {
        Some(benchmark) => benchmark.tier(observed),
        None => BenchmarkTier::Poor,
    }
}
