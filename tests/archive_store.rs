// tests/archive_store.rs
//
// Encrypted archive on disk.
//
use std::fs;

use rand::SeedableRng;
use rand::rngs::StdRng;

use proverbs::store::{ArchiveKey, load_archive, random_proverb, save_archive};
use proverbs::{Error, Proverb};

fn key() -> ArchiveKey {
    ArchiveKey::parse(&ArchiveKey::generate()).unwrap()
}

fn sample() -> Vec<Proverb> {
    vec![
        Proverb::new("1", 1, "6.1.01", "Whoever has walked with truth generates life.".into()),
        Proverb::new("1", 2, "6.1.01", "The fox said to his wife: \"Come! Let us crush Uruk.\"".into()),
        Proverb::new("2", 1, "6.1.02", "Into an open mouth a fly enters — šu.".into()),
    ]
}

#[test]
fn saved_archive_is_encrypted_and_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("ancient_wisdoms.json");
    let key = key();

    save_archive(&path, &sample(), &key).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    assert!(!raw.contains("Uruk"));
    assert!(!raw.contains("proverb_number"));

    assert_eq!(load_archive(&path, &key).unwrap(), sample());
}

#[test]
fn wrong_key_fails_to_decrypt() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.json");
    save_archive(&path, &sample(), &key()).unwrap();

    let err = load_archive(&path, &key()).unwrap_err();
    assert!(matches!(err, Error::Decrypt(_)));
    assert!(err.to_string().contains("wrong key"));
}

#[test]
fn plain_json_is_not_an_archive() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plain.json");
    fs::write(&path, serde_json::to_vec_pretty(&sample()).unwrap()).unwrap();

    assert!(matches!(load_archive(&path, &key()), Err(Error::Decrypt(_))));
}

#[test]
fn missing_archive_is_reported_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");
    let err = load_archive(&path, &key()).unwrap_err();
    assert!(matches!(err, Error::ArchiveNotFound(_)));
    assert!(err.to_string().contains("nope.json"));
}

#[test]
fn random_pick_comes_from_the_archive() {
    let archive = sample();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        let p = random_proverb(&archive, &mut rng).unwrap();
        assert!(archive.contains(p));
    }
}
