// src/scrape/archive.rs
use std::thread;

use crate::{
    config::options::BuildOptions,
    core::{Fetch, html},
    data::Proverb,
    error::{Error, Result},
    progress::Progress,
    specs::proverbs::{page_url, parse_proverb_page},
};

/// Fetch every proverb page in `opts.pages()` and collect the records in page order.
///
/// Missing pages (404) are skipped; any other fetch error aborts the build.
/// Pages are fetched one at a time with `opts.pause` between them.
pub fn build_archive(
    fetcher: &dyn Fetch,
    opts: &BuildOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<Proverb>> {
    let pages = opts.pages();

    if let Some(p) = progress.as_deref_mut() {
        p.log("Fetching proverb pages from ETCSL...");
        p.begin(pages.clone().count());
    }

    let mut archive = Vec::new();
    for page in pages {
        let url = page_url(page);

        let doc = match fetcher.fetch(&url) {
            Ok(Some(doc)) => doc,
            Ok(None) => {
                // e.g. 6.1.06 does not exist
                logf!("{url}: not found, skipping");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_skipped(page);
                }
                continue;
            }
            Err(e) => {
                loge!("{url}: {e}");
                if let Some(p) = progress.as_deref_mut() {
                    p.finish();
                }
                return Err(Error::Fetch { url, source: Box::new(e) });
            }
        };

        let proverbs = parse_proverb_page(&doc, &url, opts.include_editorial_noise);
        if proverbs.is_empty() && html::paragraph_texts(&doc).is_empty() {
            if let Some(p) = progress.as_deref_mut() {
                p.finish();
            }
            return Err(Error::Parse { url, reason: s!("no paragraphs in page") });
        }

        logf!("{url}: {} proverbs", proverbs.len());
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(page, proverbs.len());
        }
        archive.extend(proverbs);

        if !opts.pause.is_zero() {
            thread::sleep(opts.pause);
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(archive)
}
