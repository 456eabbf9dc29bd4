//! Anonymous user identity, kept in client-local storage.
//!
//! The token has no authentication semantics; it only names the collection
//! the bot saves into. It is generated once on first run and replaced at
//! most once per session by the dashboard's auto-switch.

use once_cell::sync::Lazy;
use rand::Rng;
use std::collections::HashMap;
use std::sync::Mutex;

#[cfg(not(target_arch = "wasm32"))]
use std::{fs, path::PathBuf};

/// Fixed storage key holding the current identity token.
pub const IDENTITY_STORAGE_KEY: &str = "social_saver_user_id";

const TOKEN_PREFIX: &str = "user_";
const TOKEN_SUFFIX_LEN: usize = 9;
const TOKEN_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// In-memory storage for WASM, and the fallback when the local data
/// directory is not writable (degraded: the token lives for this session).
static MEMORY_STORE: Lazy<Mutex<HashMap<String, String>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

#[cfg(not(target_arch = "wasm32"))]
fn storage_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        return data_dir.join("socialsaver");
    }
    PathBuf::from("cache").join("socialsaver")
}

#[cfg(not(target_arch = "wasm32"))]
fn storage_get(key: &str) -> Option<String> {
    let file_path = storage_dir().join(format!("{key}.txt"));
    match fs::read_to_string(file_path) {
        Ok(value) => Some(value),
        Err(_) => MEMORY_STORE.lock().ok()?.get(key).cloned(),
    }
}

#[cfg(target_arch = "wasm32")]
fn storage_get(key: &str) -> Option<String> {
    MEMORY_STORE.lock().ok()?.get(key).cloned()
}

#[cfg(not(target_arch = "wasm32"))]
fn storage_set(key: &str, value: &str) {
    let dir = storage_dir();
    let written =
        fs::create_dir_all(&dir).and_then(|_| fs::write(dir.join(format!("{key}.txt")), value));
    if let Err(err) = written {
        tracing::warn!("identity storage unavailable, keeping token in memory: {err}");
    }
    if let Ok(mut store) = MEMORY_STORE.lock() {
        store.insert(key.to_string(), value.to_string());
    }
}

#[cfg(target_arch = "wasm32")]
fn storage_set(key: &str, value: &str) {
    if let Ok(mut store) = MEMORY_STORE.lock() {
        store.insert(key.to_string(), value.to_string());
    }
}

/// New token: fixed prefix plus a random base-36 suffix. Collisions are
/// treated as negligible; the server never checks uniqueness.
pub fn generate_user_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..TOKEN_SUFFIX_LEN)
        .map(|_| TOKEN_CHARSET[rng.gen_range(0..TOKEN_CHARSET.len())] as char)
        .collect();
    format!("{TOKEN_PREFIX}{suffix}")
}

/// Resolves and persists the identity token. Passed by handle into whatever
/// owns the Content Browser so tests can inject a fake.
pub trait IdentityStore: Send + Sync {
    /// The persisted token; generates and persists one first if storage is
    /// empty.
    fn get(&self) -> String;

    /// Overwrite the persisted token. The token shape is not validated.
    fn set(&self, token: &str);
}

/// Production store backed by the platform's local data directory.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalIdentityStore;

impl IdentityStore for LocalIdentityStore {
    fn get(&self) -> String {
        if let Some(token) = storage_get(IDENTITY_STORAGE_KEY) {
            let token = token.trim();
            if !token.is_empty() {
                return token.to_string();
            }
        }
        let token = generate_user_id();
        storage_set(IDENTITY_STORAGE_KEY, &token);
        token
    }

    fn set(&self, token: &str) {
        storage_set(IDENTITY_STORAGE_KEY, token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_token_has_expected_shape() {
        let token = generate_user_id();
        assert!(token.starts_with(TOKEN_PREFIX));
        let suffix = &token[TOKEN_PREFIX.len()..];
        assert_eq!(suffix.len(), TOKEN_SUFFIX_LEN);
        assert!(
            suffix
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        );
    }

    #[test]
    fn generated_tokens_differ() {
        assert_ne!(generate_user_id(), generate_user_id());
    }

    #[test]
    fn storage_roundtrip() {
        storage_set("identity_test_key", "user_roundtrip");
        assert_eq!(
            storage_get("identity_test_key").as_deref(),
            Some("user_roundtrip")
        );
    }

    // The store is process-global; serialize the tests that touch it.
    static STORE_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn get_generates_once_and_then_repeats() {
        let _guard = STORE_LOCK.lock().unwrap();
        let store = LocalIdentityStore;
        // Blank storage counts as empty, so this exercises the generate path.
        store.set("");
        let first = store.get();
        assert!(first.starts_with(TOKEN_PREFIX));
        let second = store.get();
        assert_eq!(first, second);
    }

    #[test]
    fn set_overwrites_the_token() {
        let _guard = STORE_LOCK.lock().unwrap();
        let store = LocalIdentityStore;
        store.set("user_explicit1");
        assert_eq!(store.get(), "user_explicit1");
    }
}
