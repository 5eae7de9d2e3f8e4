use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::profile::Profile;

/// Benchmark table: hardware model name -> raw benchmark score
pub type BenchmarkTable = HashMap<String, f64>;

/// Which benchmark table a model name is looked up in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HardwareKind {
    Cpu,
    Gpu,
}

impl fmt::Display for HardwareKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HardwareKind::Cpu => write!(f, "CPU"),
            HardwareKind::Gpu => write!(f, "GPU"),
        }
    }
}

/// A PC bundle as listed in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_name: String,
    pub cpu: String,
    pub gpu: String,
    #[serde(rename = "ramGB")]
    pub ram_gb: f64,
    #[serde(rename = "storageGB")]
    pub storage_gb: f64,
    pub storage_type: String,
    pub price: f64,
}

/// Product with its derived scores, rounded to 2 decimals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredProduct {
    #[serde(flatten)]
    pub product: Product,
    pub cpu_score: f64,
    pub gpu_score: f64,
    pub perf_score: f64,
    pub value_score: f64,
}

/// Everything the engine needs: the product list and both benchmark tables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub cpu_bench: BenchmarkTable,
    pub gpu_bench: BenchmarkTable,
    pub products: Vec<Product>,
}

/// Summary statistics over a filtered row set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub count: usize,
    pub avg_perf_score: f64,
    pub avg_price: f64,
    pub best_value: Option<ScoredProduct>,
}

/// One page of the dashboard table plus the summary over every filtered row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub profile: Profile,
    pub rows: Vec<ScoredProduct>,
    pub total_rows: usize,
    pub summary: Summary,
}
