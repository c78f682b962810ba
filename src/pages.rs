// src/pages.rs
// Page shape as served by the facts API, read leniently.

use serde_json::Value;

use crate::core::coerce::safe_int_opt;
use crate::error::AppError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FactRecord {
    pub fact: Option<String>,
}

impl FactRecord {
    pub fn new(fact: impl Into<String>) -> Self {
        Self { fact: Some(fact.into()) }
    }

    /// Non-object records and non-string `fact` values count as absent.
    pub fn from_value(v: &Value) -> Self {
        let fact = v.get("fact").and_then(Value::as_str).map(str::to_owned);
        Self { fact }
    }
}

/// `total` and `per_page` are untrusted; they are coerced, not validated, here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FactsPage {
    pub total: i64,
    pub per_page: i64,
    pub data: Vec<FactRecord>,
}

impl FactsPage {
    pub fn from_value(v: &Value) -> Self {
        let data = match v.get("data") {
            Some(Value::Array(items)) => items.iter().map(FactRecord::from_value).collect(),
            _ => Vec::new(),
        };
        Self {
            total: safe_int_opt(v.get("total"), 0),
            per_page: safe_int_opt(v.get("per_page"), 1),
            data,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageInfo {
    pub total: u64,
    pub per_page: u64,
    pub last_page: u64,
}

/// Validate the first page's counters and work out the last page number.
///
/// `raw_total` is only used for the diagnostic when `total <= 0`.
pub fn page_info(page: &FactsPage, raw_total: Option<&Value>) -> Result<PageInfo, AppError> {
    let last = last_page(page.total, page.per_page).map_err(|_| AppError::InvalidTotal {
        raw: raw_total.map_or_else(|| "missing".to_string(), Value::to_string),
    })?;
    Ok(PageInfo {
        total: page.total as u64,
        per_page: normalize_per_page(page.per_page),
        last_page: last,
    })
}

/// `ceil(total / per_page)`. Errors when `total <= 0`; `per_page <= 0` counts as 1.
pub fn last_page(total: i64, per_page: i64) -> Result<u64, AppError> {
    if total <= 0 {
        return Err(AppError::InvalidTotal { raw: total.to_string() });
    }
    Ok(ceil_div(total as u64, normalize_per_page(per_page)))
}

fn normalize_per_page(per_page: i64) -> u64 {
    if per_page <= 0 { 1 } else { per_page as u64 }
}

// (total + per_page - 1) / per_page, minus the overflow
fn ceil_div(total: u64, per_page: u64) -> u64 {
    total.div_ceil(per_page)
}
