// src/data.rs
use serde::{Deserialize, Serialize};

use crate::wisdom::wisdom_score;

/// One proverb as stored in the archive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proverb {
    /// Collection number from the page heading ("Proverbs: collection 1" → "1").
    pub collection: String,
    /// Running index within the page, starting at 1.
    pub proverb_number: u32,
    /// Composition id from the page URL, e.g. "6.1.01".
    pub composition: String,
    pub text: String,
    #[serde(default)]
    pub wisdom_score: u8,
}

impl Proverb {
    /// Build a record, scoring the text at ingestion.
    pub fn new(collection: &str, proverb_number: u32, composition: &str, text: String) -> Self {
        Self {
            collection: s!(collection),
            proverb_number,
            composition: s!(composition),
            wisdom_score: wisdom_score(&text),
            text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_field_names_match_archive_format() {
        let p = Proverb::new("1", 3, "6.1.01", s!("A sweet word, a friend."));
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v["collection"], "1");
        assert_eq!(v["proverb_number"], 3);
        assert_eq!(v["composition"], "6.1.01");
        assert_eq!(v["text"], "A sweet word, a friend.");
        assert_eq!(v["wisdom_score"], 5);
    }

    #[test]
    fn older_archives_without_score_still_load() {
        let json = r#"{"collection":"2","proverb_number":1,"composition":"6.1.02","text":"x"}"#;
        let p: Proverb = serde_json::from_str(json).unwrap();
        assert_eq!(p.wisdom_score, 0);
        assert_eq!(p.composition, "6.1.02");
    }
}
