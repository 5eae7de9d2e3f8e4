use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::types::ScoredProduct;

/// Rows shown per page unless the caller asks otherwise
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Sortable table columns, named by the row field they read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortKey {
    #[serde(rename = "productName")]
    ProductName,
    #[serde(rename = "cpu")]
    Cpu,
    #[serde(rename = "gpu")]
    Gpu,
    #[serde(rename = "ramGB")]
    RamGb,
    #[serde(rename = "storageGB")]
    StorageGb,
    #[serde(rename = "price")]
    Price,
    #[serde(rename = "cpuScore")]
    CpuScore,
    #[serde(rename = "gpuScore")]
    GpuScore,
    #[serde(rename = "perfScore")]
    PerfScore,
    #[default]
    #[serde(rename = "valueScore")]
    ValueScore,
}

fn compare(a: &ScoredProduct, b: &ScoredProduct, key: SortKey) -> Ordering {
    match key {
        SortKey::ProductName => a.product.product_name.cmp(&b.product.product_name),
        SortKey::Cpu => a.product.cpu.cmp(&b.product.cpu),
        SortKey::Gpu => a.product.gpu.cmp(&b.product.gpu),
        SortKey::RamGb => a.product.ram_gb.total_cmp(&b.product.ram_gb),
        SortKey::StorageGb => a.product.storage_gb.total_cmp(&b.product.storage_gb),
        SortKey::Price => a.product.price.total_cmp(&b.product.price),
        SortKey::CpuScore => a.cpu_score.total_cmp(&b.cpu_score),
        SortKey::GpuScore => a.gpu_score.total_cmp(&b.gpu_score),
        SortKey::PerfScore => a.perf_score.total_cmp(&b.perf_score),
        SortKey::ValueScore => a.value_score.total_cmp(&b.value_score),
    }
}

/// Stable sort by one column. Equal rows keep their relative order in
/// both directions.
pub fn sort_rows(rows: &mut [ScoredProduct], key: SortKey, descending: bool) {
    rows.sort_by(|a, b| {
        let ord = compare(a, b, key);
        if descending {
            ord.reverse()
        } else {
            ord
        }
    });
}

/// Zero-based page of rows; out-of-range pages are empty
pub fn paginate(rows: &[ScoredProduct], page: usize, page_size: usize) -> &[ScoredProduct] {
    let size = if page_size == 0 { DEFAULT_PAGE_SIZE } else { page_size };
    let start = page.saturating_mul(size).min(rows.len());
    let end = start.saturating_add(size).min(rows.len());
    &rows[start..end]
}
