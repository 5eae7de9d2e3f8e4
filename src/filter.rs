use crate::types::ScoredProduct;

/// Optional inclusive price range
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriceBounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PriceBounds {
    /// Build bounds from the raw text of the min/max inputs
    pub fn parse(min_text: &str, max_text: &str) -> Self {
        PriceBounds {
            min: parse_price_bound(min_text),
            max: parse_price_bound(max_text),
        }
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min.map_or(true, |min| price >= min) && self.max.map_or(true, |max| price <= max)
    }
}

/// Read a price bound typed by a user. Blank, non-numeric or non-finite
/// text means "no bound" rather than an error or zero.
pub fn parse_price_bound(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Text a search query is matched against: product name, CPU and GPU
fn searchable_text(row: &ScoredProduct) -> String {
    format!(
        "{} {} {}",
        row.product.product_name, row.product.cpu, row.product.gpu
    )
    .to_lowercase()
}

/// Case-insensitive substring match; an empty query matches everything
pub fn matches_search(row: &ScoredProduct, search: &str) -> bool {
    search.is_empty() || searchable_text(row).contains(&search.to_lowercase())
}

/// Keep rows passing both the search and price filters, in input order
pub fn filter_products(
    scored: &[ScoredProduct],
    search: &str,
    bounds: PriceBounds,
) -> Vec<ScoredProduct> {
    scored
        .iter()
        .filter(|row| matches_search(row, search) && bounds.contains(row.product.price))
        .cloned()
        .collect()
}
