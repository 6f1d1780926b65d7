// tests/build_archive.rs
//
// Archive builder against a stub fetcher: page order, 404 skips, failures.
//
use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use proverbs::config::options::BuildOptions;
use proverbs::core::Fetch;
use proverbs::progress::{NullProgress, Progress};
use proverbs::scrape::build_archive;
use proverbs::specs::proverbs::page_url;
use proverbs::{Error, Result};

const PAGE: &str = include_str!("fixtures/t.6.1.03.html");

/// Serves canned pages; unknown URLs fail like a dropped connection.
struct StubFetcher {
    pages: HashMap<String, Option<String>>,
    seen: RefCell<Vec<String>>,
}

impl StubFetcher {
    fn new(pages: &[(u32, Option<&str>)]) -> Self {
        Self {
            pages: pages.iter().map(|(n, doc)| (page_url(*n), doc.map(String::from))).collect(),
            seen: RefCell::new(Vec::new()),
        }
    }
}

impl Fetch for StubFetcher {
    fn fetch(&self, url: &str) -> Result<Option<String>> {
        self.seen.borrow_mut().push(url.to_string());
        match self.pages.get(url) {
            Some(doc) => Ok(doc.clone()),
            None => Err(std::io::Error::other("connection reset").into()),
        }
    }
}

#[derive(Default)]
struct Recorder {
    total: usize,
    done: Vec<(u32, usize)>,
    skipped: Vec<u32>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn item_done(&mut self, page: u32, proverbs: usize) { self.done.push((page, proverbs)); }
    fn item_skipped(&mut self, page: u32) { self.skipped.push(page); }
    fn finish(&mut self) { self.finished = true; }
}

fn opts(first_page: u32, last_page: u32) -> BuildOptions {
    BuildOptions { first_page, last_page, pause: Duration::ZERO, ..BuildOptions::default() }
}

#[test]
fn missing_pages_are_skipped_and_order_kept() {
    let other = PAGE.replace("collection 3", "collection 5");
    let fetcher = StubFetcher::new(&[(5, Some(PAGE)), (6, None), (7, Some(other.as_str()))]);
    let mut progress = Recorder::default();

    let archive = build_archive(&fetcher, &opts(5, 7), Some(&mut progress)).unwrap();

    assert_eq!(archive.len(), 10);
    assert!(archive[..5].iter().all(|p| p.composition == "6.1.05" && p.collection == "3"));
    assert!(archive[5..].iter().all(|p| p.composition == "6.1.07" && p.collection == "5"));
    assert_eq!(archive[5].proverb_number, 1);

    assert_eq!(fetcher.seen.borrow().len(), 3);
    assert_eq!(progress.total, 3);
    assert_eq!(progress.done, vec![(5, 5), (7, 5)]);
    assert_eq!(progress.skipped, vec![6]);
    assert!(progress.finished);
}

#[test]
fn editorial_noise_flag_reaches_the_parser() {
    let fetcher = StubFetcher::new(&[(1, Some(PAGE))]);
    let opts = BuildOptions { include_editorial_noise: true, ..opts(1, 1) };
    let archive = build_archive(&fetcher, &opts, Some(&mut NullProgress)).unwrap();
    assert_eq!(archive.len(), 7);
}

#[test]
fn fetch_failure_aborts_with_url() {
    let fetcher = StubFetcher::new(&[(1, Some(PAGE))]);
    let err = build_archive(&fetcher, &opts(1, 3), None).unwrap_err();

    match &err {
        Error::Fetch { url, .. } => assert_eq!(url, &page_url(2)),
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().starts_with("Failed to fetch https://"));
    // nothing past the failing page is requested
    assert_eq!(fetcher.seen.borrow().len(), 2);
}

#[test]
fn page_without_markup_is_a_parse_error() {
    let fetcher = StubFetcher::new(&[(1, Some("Service temporarily unavailable"))]);
    let err = build_archive(&fetcher, &opts(1, 1), None).unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
}

#[test]
fn tags_that_only_look_like_paragraphs_are_a_parse_error() {
    let doc = "<html><body><pre>Service temporarily unavailable</pre><param name=\"x\"></body></html>";
    let fetcher = StubFetcher::new(&[(1, Some(doc))]);
    let err = build_archive(&fetcher, &opts(1, 1), None).unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
}

#[test]
fn page_of_only_editorial_notes_is_not_an_error() {
    let doc = "<html><body><p>1. 3 lines unclear</p><p>2. 1 line fragmentary</p></body></html>";
    let fetcher = StubFetcher::new(&[(1, Some(doc))]);
    assert!(build_archive(&fetcher, &opts(1, 1), None).unwrap().is_empty());
}

#[test]
fn empty_range_builds_empty_archive() {
    let fetcher = StubFetcher::new(&[]);
    assert!(build_archive(&fetcher, &opts(3, 2), None).unwrap().is_empty());
    assert!(fetcher.seen.borrow().is_empty());
}
