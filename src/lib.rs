use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use wasm_bindgen::prelude::*;

pub mod console;
pub mod error;
pub mod filter;
pub mod profile;
pub mod sample;
pub mod score;
pub mod summary;
pub mod table;
pub mod types;

use crate::error::{EngineError, ScoreError};
use crate::filter::{filter_products, PriceBounds};
use crate::profile::{Profile, ProfileWeights};
use crate::table::SortKey;
use types::{Catalog, DashboardView, ScoredProduct};

/// Query coming from the dashboard controls. Price bounds are the raw text
/// of the inputs; anything unparseable is treated as no bound.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewRequest {
    pub profile: String,
    pub search: String,
    pub min_price: String,
    pub max_price: String,
    pub sort_by: Option<SortKey>,
    pub descending: Option<bool>,
    pub page: usize,
    pub page_size: usize,
}

/// Profile name with its weights, for populating the profile picker
#[derive(Debug, Clone, Serialize)]
pub struct ProfileInfo {
    pub profile: Profile,
    pub weights: ProfileWeights,
}

/// Dashboard state: the loaded catalog plus scored rows cached per profile
pub struct Dashboard {
    catalog: Catalog,
    scored: HashMap<Profile, Vec<ScoredProduct>>,
}

impl Dashboard {
    pub fn new(catalog: Catalog) -> Self {
        Dashboard {
            catalog,
            scored: HashMap::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Scored rows for a profile in catalog order, computed once per profile
    pub fn scored(&mut self, profile: Profile) -> Result<&[ScoredProduct], ScoreError> {
        match self.scored.entry(profile) {
            Entry::Occupied(e) => Ok(e.into_mut().as_slice()),
            Entry::Vacant(e) => {
                let c = &self.catalog;
                let rows = score::score_products(&c.products, &c.cpu_bench, &c.gpu_bench, profile)
                    .map_err(|err| {
                        console::log(&format!("[score] profile={} failed: {}", profile, err));
                        err
                    })?;
                Ok(e.insert(rows).as_slice())
            }
        }
    }

    /// Score, filter, summarize, then sort and cut one page for display.
    /// The summary covers every filtered row, not just the page.
    pub fn view(&mut self, request: &ViewRequest) -> Result<DashboardView, EngineError> {
        let start_total = console::now();
        let profile: Profile = request.profile.parse()?;

        let start_scoring = console::now();
        let scored = self.scored(profile)?;
        let catalog_rows = scored.len();
        let scoring_time = console::now() - start_scoring;

        let start_filter = console::now();
        let bounds = PriceBounds::parse(&request.min_price, &request.max_price);
        let mut rows = filter_products(scored, &request.search, bounds);
        let summary = summary::summarize(&rows);
        let total_rows = rows.len();
        let filter_time = console::now() - start_filter;

        table::sort_rows(
            &mut rows,
            request.sort_by.unwrap_or_default(),
            request.descending.unwrap_or(true),
        );
        let page = table::paginate(&rows, request.page, request.page_size).to_vec();

        let total_time = console::now() - start_total;
        console::log(&format!(
            "[perf] profile={} search='{}' rows={}/{} page={} | score={:.1}ms filter={:.1}ms | total={:.1}ms",
            profile, request.search, total_rows, catalog_rows, page.len(),
            scoring_time, filter_time, total_time
        ));

        Ok(DashboardView {
            profile,
            rows: page,
            total_rows,
            summary,
        })
    }
}

// Use thread_local with RefCell for lazy initialization from JS
thread_local! {
    static DASHBOARD: RefCell<Option<Dashboard>> = const { RefCell::new(None) };
}

fn install(catalog: Catalog) {
    console::log(&format!(
        "[catalog] products={} cpus={} gpus={}",
        catalog.products.len(),
        catalog.cpu_bench.len(),
        catalog.gpu_bench.len()
    ));
    DASHBOARD.with(|dashboard| {
        *dashboard.borrow_mut() = Some(Dashboard::new(catalog));
    });
}

fn with_dashboard<T>(
    f: impl FnOnce(&mut Dashboard) -> Result<T, EngineError>,
) -> Result<T, EngineError> {
    DASHBOARD.with(|dashboard| match dashboard.borrow_mut().as_mut() {
        Some(d) => f(d),
        None => Err(EngineError::NotInitialized),
    })
}

fn profile_infos() -> Vec<ProfileInfo> {
    Profile::ALL
        .into_iter()
        .map(|profile| ProfileInfo {
            profile,
            weights: profile.weights(),
        })
        .collect()
}

fn scored_rows(profile: &str) -> Result<Vec<ScoredProduct>, EngineError> {
    let profile: Profile = profile.parse()?;
    with_dashboard(|d| Ok(d.scored(profile)?.to_vec()))
}

fn query(request_json: &str) -> Result<DashboardView, EngineError> {
    let request: ViewRequest = serde_json::from_str(request_json)
        .map_err(|e| EngineError::InvalidRequest(e.to_string()))?;
    with_dashboard(|d| d.view(&request))
}

fn to_js_error(err: EngineError) -> JsError {
    JsError::new(&err.to_string())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsError> {
    serde_json::to_string(value)
        .map_err(|e| JsError::new(&format!("Failed to serialize result: {}", e)))
}

/// Load a catalog from JavaScript
/// catalog_json: JSON string of Catalog ({ cpuBench, gpuBench, products })
#[wasm_bindgen]
pub fn init_catalog(catalog_json: &str) -> Result<(), JsError> {
    let catalog = sample::parse_catalog(catalog_json).map_err(to_js_error)?;
    install(catalog);
    Ok(())
}

/// Load the built-in demo catalog
#[wasm_bindgen]
pub fn init_sample_catalog() -> Result<(), JsError> {
    let catalog = sample::sample_catalog().map_err(to_js_error)?;
    install(catalog);
    Ok(())
}

/// Check if a catalog has been loaded
#[wasm_bindgen]
pub fn is_catalog_ready() -> bool {
    DASHBOARD.with(|dashboard| dashboard.borrow().is_some())
}

/// All profiles with their fixed weights, as JSON
#[wasm_bindgen]
pub fn list_profiles() -> Result<String, JsError> {
    to_json(&profile_infos())
}

/// Every catalog product scored under a profile, in catalog order, as JSON
#[wasm_bindgen]
pub fn score_catalog(profile: &str) -> Result<String, JsError> {
    to_json(&scored_rows(profile).map_err(to_js_error)?)
}

/// Filtered, summarized and paged view for the dashboard, as JSON
/// request_json: JSON string of ViewRequest
#[wasm_bindgen]
pub fn query_catalog(request_json: &str) -> Result<String, JsError> {
    to_json(&query(request_json).map_err(to_js_error)?)
}

/// Get total number of products in the loaded catalog
#[wasm_bindgen]
pub fn get_product_count() -> Result<usize, JsError> {
    with_dashboard(|d| Ok(d.catalog().products.len())).map_err(to_js_error)
}
