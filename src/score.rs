use crate::error::ScoreError;
use crate::profile::{Profile, ProfileWeights};
use crate::types::{BenchmarkTable, HardwareKind, Product, ScoredProduct};

/// RAM at or above this size earns the full bonus
const RAM_BONUS_CAP_GB: f64 = 32.0;
const RAM_BONUS_MAX: f64 = 5.0;
const SSD_BONUS: f64 = 3.0;

/// Decimal places kept on every derived score
const SCORE_DECIMALS: usize = 2;

/// Round to a fixed number of decimals, the way `Number.prototype.toFixed` does:
/// the exact binary value decides, so 58.135 (stored as 58.13499..) becomes 58.13,
/// and an exact tie such as 10.25 goes away from zero to 10.3
pub fn round_to(value: f64, decimals: usize) -> f64 {
    // Long enough to show any tie at the precisions used here in full
    let expanded = format!("{:.60}", value);
    let digits = expanded.trim_end_matches('0');
    match digits.split_once('.') {
        Some((_, frac)) if frac.len() == decimals + 1 && frac.ends_with('5') => {
            bump_last_digit(&digits[..digits.len() - 1])
                .parse()
                .unwrap_or(value)
        }
        _ => format!("{:.*}", decimals, value).parse().unwrap_or(value),
    }
}

/// Add one unit in the last place of a decimal string, away from zero
fn bump_last_digit(truncated: &str) -> String {
    let mut chars: Vec<char> = truncated.trim_end_matches('.').chars().collect();
    for i in (0..chars.len()).rev() {
        match chars[i] {
            '9' => chars[i] = '0',
            c @ '0'..='8' => {
                chars[i] = (c as u8 + 1) as char;
                return chars.into_iter().collect();
            }
            _ => {}
        }
    }
    // Carried past the leading digit, e.g. 99.5 -> 100
    let at = usize::from(chars.first() == Some(&'-'));
    chars.insert(at, '1');
    chars.into_iter().collect()
}

/// Scale a raw benchmark onto 0-100 relative to the strongest entry
pub fn normalize(value: f64, max: f64) -> f64 {
    (value / max) * 100.0
}

/// Linear in RAM up to 32GB, flat at 5 points after that
pub fn ram_bonus(ram_gb: f64) -> f64 {
    (ram_gb / RAM_BONUS_CAP_GB).min(1.0) * RAM_BONUS_MAX
}

/// 3 points when the storage label contains "ssd" (any case), otherwise 0.
/// A bare "NVMe" label does not qualify.
pub fn ssd_bonus(storage_type: &str) -> f64 {
    if storage_type.to_lowercase().contains("ssd") {
        SSD_BONUS
    } else {
        0.0
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Largest value in a table, after checking every entry is a positive number.
/// With several bad entries the first model in name order is reported.
fn table_max(table: &BenchmarkTable, kind: HardwareKind) -> Result<f64, ScoreError> {
    let invalid = table
        .iter()
        .filter(|&(_, &s)| !is_positive(s))
        .min_by(|a, b| a.0.cmp(b.0));
    if let Some((model, &score)) = invalid {
        return Err(ScoreError::NonPositiveBenchmark {
            kind,
            model: model.clone(),
            score,
        });
    }
    Ok(table.values().copied().fold(f64::MIN, f64::max))
}

fn lookup(
    table: &BenchmarkTable,
    kind: HardwareKind,
    model: &str,
    product: &Product,
) -> Result<f64, ScoreError> {
    table
        .get(model)
        .copied()
        .ok_or_else(|| ScoreError::MissingBenchmarkKey {
            product: product.product_name.clone(),
            kind,
            model: model.to_string(),
        })
}

/// Table maxima and weights shared by every product in one scoring run
struct ScoringContext<'a> {
    cpu_bench: &'a BenchmarkTable,
    gpu_bench: &'a BenchmarkTable,
    cpu_max: f64,
    gpu_max: f64,
    weights: ProfileWeights,
}

impl ScoringContext<'_> {
    fn score(&self, product: &Product) -> Result<ScoredProduct, ScoreError> {
        let cpu_raw = lookup(self.cpu_bench, HardwareKind::Cpu, &product.cpu, product)?;
        let gpu_raw = lookup(self.gpu_bench, HardwareKind::Gpu, &product.gpu, product)?;

        if !is_positive(product.price) {
            return Err(ScoreError::NonPositivePrice {
                product: product.product_name.clone(),
                price: product.price,
            });
        }
        for (field, value) in [("ramGB", product.ram_gb), ("storageGB", product.storage_gb)] {
            if !is_positive(value) {
                return Err(ScoreError::NonPositiveSize {
                    product: product.product_name.clone(),
                    field,
                    value,
                });
            }
        }

        let cpu_score = normalize(cpu_raw, self.cpu_max);
        let gpu_score = normalize(gpu_raw, self.gpu_max);
        let w = &self.weights;

        let perf_score = w.gpu_weight * gpu_score
            + w.cpu_weight * cpu_score
            + w.ram_bonus_weight * ram_bonus(product.ram_gb)
            + w.ssd_bonus_weight * ssd_bonus(&product.storage_type);
        // Scaled x100 for display only
        let value_score = (perf_score / product.price) * 100.0;

        Ok(ScoredProduct {
            product: product.clone(),
            cpu_score: round_to(cpu_score, SCORE_DECIMALS),
            gpu_score: round_to(gpu_score, SCORE_DECIMALS),
            perf_score: round_to(perf_score, SCORE_DECIMALS),
            value_score: round_to(value_score, SCORE_DECIMALS),
        })
    }
}

/// Score every product under a profile.
///
/// Fails without partial results if either table is empty or holds a
/// non-positive score, or if any product names a model missing from its
/// table or has a non-positive price, RAM or storage size. Output keeps
/// the input order.
pub fn score_products(
    products: &[Product],
    cpu_bench: &BenchmarkTable,
    gpu_bench: &BenchmarkTable,
    profile: Profile,
) -> Result<Vec<ScoredProduct>, ScoreError> {
    if cpu_bench.is_empty() {
        return Err(ScoreError::EmptyBenchmarkTable(HardwareKind::Cpu));
    }
    if gpu_bench.is_empty() {
        return Err(ScoreError::EmptyBenchmarkTable(HardwareKind::Gpu));
    }

    let ctx = ScoringContext {
        cpu_bench,
        gpu_bench,
        cpu_max: table_max(cpu_bench, HardwareKind::Cpu)?,
        gpu_max: table_max(gpu_bench, HardwareKind::Gpu)?,
        weights: profile.weights(),
    };

    products.iter().map(|p| ctx.score(p)).collect()
}
