// src/runner.rs
use std::path::PathBuf;

use crate::{
    config::options::AppOptions,
    core::net::{Fetch, HttpClient},
    error::Error,
    file::{load_store_domains, write_report},
    progress::Progress,
    scrape,
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub stores: usize,
    pub with_email: usize,
    pub with_products: usize,
    pub output: PathBuf,
}

/// Top-level pipeline over the network: load → scrape → write.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    opts: &AppOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Error> {
    let client = HttpClient::new(&opts.scrape)?;
    run_with(&client, opts, progress)
}

/// Same pipeline with a caller-supplied fetcher.
pub fn run_with<F: Fetch>(
    fetcher: &F,
    opts: &AppOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Error> {
    let stores = load_store_domains(&opts.input).inspect_err(|e| log::error!("{e}"))?;
    log::info!("Loaded {} store domains from {}", stores.len(), opts.input.display());

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Found {} store domains", stores.len()));
    }

    let rows = scrape::collect_stores(fetcher, &stores, &opts.scrape, progress);

    write_report(&opts.output, &rows).inspect_err(|e| log::error!("{e}"))?;
    log::info!("Wrote {} rows to {}", rows.len(), opts.output.display());

    Ok(RunSummary {
        stores: rows.len(),
        with_email: rows.iter().filter(|r| r.contact.email.is_some()).count(),
        with_products: rows.iter().filter(|r| r.products_found() > 0).count(),
        output: opts.output.clone(),
    })
}
