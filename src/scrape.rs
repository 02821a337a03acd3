// src/scrape.rs
use std::{
    thread,
    sync::{ mpsc, atomic::{ AtomicUsize, Ordering }},
};

use crate::{
    config::consts::{ CANDIDATE_PAGES, COLLECTION_PATH, PRODUCT_JSON_TMPL, PRODUCT_LIMIT },
    config::options::ScrapeOptions,
    core::net::Fetch,
    data::{ ContactInfo, Product, ReportRow, Store },
    progress::Progress,
    specs::{ collection, contact, product },
};

/// Scrape every store and return one row per store, in input order.
///
/// Stores are handed out to `opts.workers` threads through a shared counter;
/// finished rows come back over a channel and are slotted by index, so the
/// result does not depend on the worker count.
pub fn collect_stores<F: Fetch>(
    fetcher: &F,
    stores: &[Store],
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Vec<ReportRow> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(stores.len());
    }

    let mut slots: Vec<Option<ReportRow>> = stores.iter().map(|_| None).collect();
    let counter = AtomicUsize::new(0);
    let workers = opts.workers.min(stores.len()).max(1);
    let pause = opts.pause();

    thread::scope(|scope| {
        let (res_tx, res_rx) = mpsc::channel::<(usize, ReportRow)>();

        for _ in 0..workers {
            let tx = res_tx.clone();
            let counter = &counter;
            scope.spawn(move || {
                loop {
                    let i = counter.fetch_add(1, Ordering::Relaxed);
                    let Some(store) = stores.get(i) else { break };
                    let row = collect_store(fetcher, store);
                    if tx.send((i, row)).is_err() {
                        break;
                    }
                    if !pause.is_zero() {
                        thread::sleep(pause); // be polite
                    }
                }
            });
        }
        drop(res_tx); // this thread is the sole receiver now

        for (i, row) in res_rx {
            if let Some(p) = progress.as_deref_mut() {
                p.item_done(&row);
            }
            slots[i] = Some(row);
        }
    });

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    slots
        .into_iter()
        .zip(stores)
        .map(|(slot, store)| slot.unwrap_or_else(|| ReportRow::empty(store)))
        .collect()
}

/// Contact info plus up to `PRODUCT_LIMIT` products for one store.
pub fn collect_store<F: Fetch + ?Sized>(fetcher: &F, store: &Store) -> ReportRow {
    log::debug!("Scraping {}", store.domain);
    let contact = find_contact(fetcher, store);
    let products = load_products(fetcher, store, PRODUCT_LIMIT);
    ReportRow { domain: store.domain.clone(), contact, products }
}

/// Walk the candidate pages in order; first hit per field wins.
/// Stops fetching once every field is known.
pub fn find_contact<F: Fetch + ?Sized>(fetcher: &F, store: &Store) -> ContactInfo {
    let mut info = ContactInfo::default();

    for path in CANDIDATE_PAGES {
        let Some(body) = fetch_page(fetcher, &store.url(path)) else { continue };

        if info.email.is_none() {
            info.email = contact::extract_email(&body);
        }
        if info.facebook_url.is_none() || info.twitter_url.is_none() {
            let links = contact::extract_social_links(&body);
            if info.facebook_url.is_none() {
                info.facebook_url = links.facebook;
            }
            if info.twitter_url.is_none() {
                info.twitter_url = links.twitter;
            }
        }

        if info.is_complete() {
            break;
        }
    }
    info
}

/// Product slots follow the handle order from the listing page. A handle whose
/// JSON cannot be fetched or parsed keeps its slot with empty fields.
pub fn load_products<F: Fetch + ?Sized>(fetcher: &F, store: &Store, limit: usize) -> Vec<Product> {
    let Some(listing) = fetch_page(fetcher, &store.url(COLLECTION_PATH)) else {
        return Vec::new();
    };

    collection::product_handles(&listing, &store.base_url(), limit)
        .iter()
        .map(|handle| {
            let url = store.url(&PRODUCT_JSON_TMPL.replace("{handle}", handle));
            let Some(body) = fetch_page(fetcher, &url) else { return Product::default() };
            product::parse_product(&body).unwrap_or_else(|e| {
                log::warn!("{url}: {e}");
                Product::default()
            })
        })
        .collect()
}

/// One GET; failures are logged and read as "no content".
fn fetch_page<F: Fetch + ?Sized>(fetcher: &F, url: &str) -> Option<String> {
    match fetcher.get(url) {
        Ok(body) => Some(body),
        Err(e) => {
            log::warn!("{e}");
            None
        }
    }
}
