// src/core/html.rs
use scraper::{ElementRef, Html, Selector};

/// Text of every `<p>` in document order. Each text node is trimmed and the
/// non-empty ones are joined with a single space, so `<p>a <i>b</i></p>`
/// reads as `"a b"`.
pub fn paragraph_texts(doc: &str) -> Vec<String> {
    let html = Html::parse_document(doc);
    let Ok(p) = Selector::parse("p") else {
        return Vec::new();
    };
    html.select(&p).map(joined_text).collect()
}

/// All visible text in the document, nodes joined with a space (untrimmed).
/// Text inside `<script>` and `<style>` is left out.
pub fn page_text(doc: &str) -> String {
    let html = Html::parse_document(doc);
    html.root_element()
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let hidden = node.ancestors().any(|a| {
                a.value()
                    .as_element()
                    .is_some_and(|el| matches!(el.name(), "script" | "style"))
            });
            (!hidden).then_some(&**text)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn joined_text(el: ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
