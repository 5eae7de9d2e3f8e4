use crate::score::round_to;
use crate::types::{ScoredProduct, Summary};

/// Count, mean perf score (1 decimal), mean price (2 decimals) and the
/// best-value row. Ties on value go to the earliest row.
pub fn summarize(filtered: &[ScoredProduct]) -> Summary {
    let count = filtered.len();
    if count == 0 {
        return Summary {
            count,
            avg_perf_score: 0.0,
            avg_price: 0.0,
            best_value: None,
        };
    }

    let n = count as f64;
    let perf_total: f64 = filtered.iter().map(|r| r.perf_score).sum();
    let price_total: f64 = filtered.iter().map(|r| r.product.price).sum();

    let best_value = filtered
        .iter()
        .fold(None::<&ScoredProduct>, |best, row| match best {
            Some(b) if b.value_score >= row.value_score => Some(b),
            _ => Some(row),
        })
        .cloned();

    Summary {
        count,
        avg_perf_score: round_to(perf_total / n, 1),
        avg_price: round_to(price_total / n, 2),
        best_value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{filter_products, PriceBounds};
    use crate::profile::Profile;
    use crate::sample::sample_catalog;
    use crate::score::score_products;

    fn scored(profile: Profile) -> Vec<ScoredProduct> {
        let c = sample_catalog().unwrap();
        score_products(&c.products, &c.cpu_bench, &c.gpu_bench, profile).unwrap()
    }

    #[test]
    fn test_summarize_empty() {
        let s = summarize(&[]);
        assert_eq!(s.count, 0);
        assert_eq!(s.avg_perf_score, 0.0);
        assert_eq!(s.avg_price, 0.0);
        assert!(s.best_value.is_none());
    }

    #[test]
    fn test_summarize_gaming_catalog() {
        let s = summarize(&scored(Profile::Gaming));
        assert_eq!(s.count, 4);
        // (58.13 + 95.21 + 80.47 + 70.88) / 4 = 76.1725
        assert_eq!(s.avg_perf_score, 76.2);
        assert_eq!(s.avg_price, 1287.49);
        let best = s.best_value.unwrap();
        assert!(best.product.product_name.starts_with("Budget Build"));
        assert_eq!(best.value_score, 7.66);
    }

    #[test]
    fn test_summarize_filtered_subset() {
        let rows = filter_products(
            &scored(Profile::Office),
            "",
            PriceBounds::parse("1000", "1500"),
        );
        let s = summarize(&rows);
        assert_eq!(s.count, 2);
        assert_eq!(s.avg_price, 1224.99);
        // High-End Rig (5.77) beats Budget Build (5.65) for office work
        assert!(s
            .best_value
            .unwrap()
            .product
            .product_name
            .starts_with("High-End Rig"));
    }

    #[test]
    fn test_averages_round_ties_up() {
        let mut rows = scored(Profile::Gaming);
        rows.truncate(2);
        rows[0].perf_score = 10.0;
        rows[1].perf_score = 10.5;
        rows[0].product.price = 1.0;
        rows[1].product.price = 1.25;
        let s = summarize(&rows);
        // 10.25 -> 10.3 and 1.125 -> 1.13, as the dashboard displays them
        assert_eq!(s.avg_perf_score, 10.3);
        assert_eq!(s.avg_price, 1.13);
    }

    #[test]
    fn test_best_value_tie_keeps_first() {
        let mut rows = scored(Profile::Gaming);
        rows.truncate(2);
        rows[1].value_score = rows[0].value_score;
        let s = summarize(&rows);
        assert_eq!(
            s.best_value.unwrap().product.product_name,
            rows[0].product.product_name
        );
    }
}
