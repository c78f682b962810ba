// src/runner.rs
use std::io::Write;

use crate::{
    config::{consts::PAGE_PARAM, FetchOptions},
    core::{facts::char_len, fetch_json, shortest_fact},
    error::AppError,
    pages::{page_info, FactsPage, PageInfo},
};

/// What a run found. The same facts are also written to `out`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub info: PageInfo,
    pub shortest: Option<String>,
}

/// Page 1 -> last page number -> last page -> shortest fact.
///
/// Report lines go to `out`. Any fetch, parse, or validation failure stops
/// the run before the next request is made.
pub fn run(opts: &FetchOptions, out: &mut impl Write) -> Result<RunSummary, AppError> {
    let first = fetch_json(&opts.url, None, opts.timeout)?;
    let info = page_info(&FactsPage::from_value(&first), first.get("total"))?;
    tracing::info!(total = info.total, per_page = info.per_page, last_page = info.last_page, "pagination");

    writeln!(
        out,
        "Total facts: {}. Per page: {}. Last page: {}",
        info.total, info.per_page, info.last_page
    )?;

    let params = [(PAGE_PARAM, info.last_page.to_string())];
    let last = fetch_json(&opts.url, Some(&params[..]), opts.timeout)?;
    let page = FactsPage::from_value(&last);
    tracing::debug!(records = page.data.len(), "last page");

    let shortest = shortest_fact(&page.data).map(str::to_owned);
    match &shortest {
        None => writeln!(out, "No non-empty fact found on the last page.")?,
        Some(fact) => {
            writeln!(out)?;
            writeln!(out, "Shortest fact on the last page:")?;
            writeln!(out, "{fact}")?;
            writeln!(out, "Length (chars): {}", char_len(fact))?;
        }
    }

    Ok(RunSummary { info, shortest })
}
