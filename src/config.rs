use crate::persistence::{
    keys,
    KeyValueStore,
};

/// Google API keys carry this prefix; the check is deliberately shallow.
const API_KEY_PREFIX: &str = "AIza";

pub fn looks_like_api_key(value: &str) -> bool {
    !value.trim().is_empty() && value.trim().starts_with(API_KEY_PREFIX)
}

/// Resolves the generator credential: process configuration first, then the
/// persisted store, then the injected interactive prompt. A key obtained
/// from the prompt is written back to the store for next time.
pub fn resolve_api_key<F>(
    env_value: Option<String>,
    store: &dyn KeyValueStore,
    prompt: F,
) -> Option<String>
where
    F: FnOnce() -> Option<String>,
{
    if let Some(key) = env_value {
        if looks_like_api_key(&key) {
            return Some(key.trim().to_string());
        }
    }

    if let Some(key) = store.read(keys::API_KEY) {
        if looks_like_api_key(&key) {
            return Some(key.trim().to_string());
        }
    }

    let key = prompt()?;
    if looks_like_api_key(&key) {
        let key = key.trim().to_string();
        store.write(keys::API_KEY, &key);
        Some(key)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_env_value_wins() {
        let store = MemoryStore::new();
        store.write(keys::API_KEY, "AIzaStored");

        let key = resolve_api_key(Some("AIzaFromEnv".to_string()), &store, || {
            panic!("prompt should not run")
        });
        assert_eq!(key.as_deref(), Some("AIzaFromEnv"));
    }

    #[test]
    fn test_store_consulted_when_env_missing() {
        let store = MemoryStore::new();
        store.write(keys::API_KEY, "AIzaStored");

        let key = resolve_api_key(None, &store, || panic!("prompt should not run"));
        assert_eq!(key.as_deref(), Some("AIzaStored"));
    }

    #[test]
    fn test_prompted_key_is_persisted() {
        let store = MemoryStore::new();

        let key = resolve_api_key(None, &store, || Some("AIzaTyped".to_string()));

        assert_eq!(key.as_deref(), Some("AIzaTyped"));
        assert_eq!(store.read(keys::API_KEY).as_deref(), Some("AIzaTyped"));
    }

    #[test]
    fn test_malformed_keys_are_rejected() {
        let store = MemoryStore::new();
        store.write(keys::API_KEY, "not-a-key");

        let key = resolve_api_key(Some("".to_string()), &store, || None);
        assert!(key.is_none());
    }
}
