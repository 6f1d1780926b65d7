// tests/parse_page.rs
//
// Offline parsing of a captured proverb page.
//
use proverbs::specs::proverbs::{page_url, parse_proverb_page};

const PAGE: &str = include_str!("fixtures/t.6.1.03.html");

fn url() -> String {
    page_url(3)
}

#[test]
fn substantive_proverbs_only_by_default() {
    let got = parse_proverb_page(PAGE, &url(), false);
    let texts: Vec<(u32, &str)> = got.iter().map(|p| (p.proverb_number, p.text.as_str())).collect();

    assert_eq!(
        texts,
        vec![
            (1, "Whoever has walked with truth generates life."),
            (2, "Do not cut off the neck of that which has had its neck cut off."),
            (3, "A sweet word is everybody's friend."),
            (5, "The fox said to his wife: \"Come! Let us crush Uruk like a leek.\""),
            (7, "Into an open mouth a fly enters."),
        ]
    );
}

#[test]
fn records_carry_collection_composition_and_score() {
    let got = parse_proverb_page(PAGE, &url(), false);
    assert!(got.iter().all(|p| p.collection == "3" && p.composition == "6.1.03"));

    let scores: Vec<u8> = got.iter().map(|p| p.wisdom_score).collect();
    assert_eq!(scores, vec![4, 6, 4, 6, 4]);
}

#[test]
fn editorial_noise_kept_on_request() {
    let got = parse_proverb_page(PAGE, &url(), true);
    assert_eq!(got.len(), 7);
    assert_eq!(got[3].text, "3 lines unclear");
    assert_eq!(got[5].text, "approx. 4 lines missing");
    // numbering is a running index, not the page's own line numbers
    let numbers: Vec<u32> = got.iter().map(|p| p.proverb_number).collect();
    assert_eq!(numbers, (1..=7).collect::<Vec<_>>());
}

#[test]
fn unknown_url_gives_empty_composition_and_default_collection() {
    let doc = "<html><body><p>1. A dog that barks does not bite the hand.</p></body></html>";
    let got = parse_proverb_page(doc, "file:///tmp/page.html", false);
    assert_eq!(got.len(), 1);
    assert_eq!(got[0].composition, "");
    assert_eq!(got[0].collection, "1");
}

#[test]
fn page_without_paragraphs_yields_nothing() {
    assert!(parse_proverb_page("<html><body><h1>Not found</h1></body></html>", &url(), true).is_empty());
}
