// src/store.rs
//
// Encrypted archive on disk: the proverb list as pretty JSON, sealed in a
// Fernet token (AES-128-CBC + HMAC-SHA256). The key lives in the environment
// (or a `.env` file), never next to the archive.

use std::{fs, path::Path};

use fernet::Fernet;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::config::consts::ENV_KEY;
use crate::data::Proverb;
use crate::error::{Error, Result};
use crate::wisdom::wisdom_score;

pub struct ArchiveKey(Fernet);

impl ArchiveKey {
    /// Key from `PROVERB_ARCHIVE_KEY`, loading `.env` first if one exists.
    pub fn from_env() -> Result<Self> {
        // A missing .env is normal; the variable may be set directly.
        let _ = dotenvy::dotenv();
        match std::env::var(ENV_KEY) {
            Ok(key) if !key.trim().is_empty() => Self::parse(&key),
            _ => Err(Error::MissingKey),
        }
    }

    pub fn parse(key: &str) -> Result<Self> {
        Fernet::new(key.trim()).map(Self).ok_or(Error::InvalidKey)
    }

    /// A fresh url-safe base64 key, suitable for `PROVERB_ARCHIVE_KEY`.
    pub fn generate() -> String {
        Fernet::generate_key()
    }

    fn seal(&self, plain: &[u8]) -> String {
        self.0.encrypt(plain)
    }

    fn open(&self, token: &str) -> Option<Vec<u8>> {
        self.0.decrypt(token.trim()).ok()
    }
}

/// Write `proverbs` to `path`, creating parent directories.
pub fn save_archive(path: &Path, proverbs: &[Proverb], key: &ArchiveKey) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let payload = serde_json::to_vec_pretty(proverbs)?;
    fs::write(path, key.seal(&payload))?;
    logf!("saved {} proverbs to {}", proverbs.len(), path.display());
    Ok(())
}

pub fn load_archive(path: &Path, key: &ArchiveKey) -> Result<Vec<Proverb>> {
    if !path.exists() {
        return Err(Error::ArchiveNotFound(path.to_path_buf()));
    }
    let raw = fs::read(path)?;
    let token = String::from_utf8(raw).map_err(|_| Error::Decrypt(path.to_path_buf()))?;
    let plain = key.open(&token).ok_or_else(|| Error::Decrypt(path.to_path_buf()))?;
    let mut proverbs: Vec<Proverb> = serde_json::from_slice(&plain)?;
    // Scores run 1..=10; 0 means the record was written without one.
    for p in proverbs.iter_mut().filter(|p| p.wisdom_score == 0) {
        p.wisdom_score = wisdom_score(&p.text);
    }
    logd!("loaded {} proverbs from {}", proverbs.len(), path.display());
    Ok(proverbs)
}

pub fn random_proverb<'a, R: Rng + ?Sized>(proverbs: &'a [Proverb], rng: &mut R) -> Result<&'a Proverb> {
    proverbs.choose(rng).ok_or(Error::EmptyArchive)
}
