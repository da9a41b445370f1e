//! Translated pattern caching.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Mutex, PoisonError};

use crate::grammar::DateDialect;
use crate::pattern::translate;

type Key = (String, &'static str, &'static str);

/// Global cache of translations between built-in dialects.
static CACHE: Mutex<Option<LruCache<Key, String>>> = Mutex::new(None);

const CACHE_SIZE: NonZeroUsize = match NonZeroUsize::new(100) {
    Some(size) => size,
    None => panic!("cache size must be non-zero"),
};

/// Translate a pattern, using the cache.
pub fn translate_cached(pattern: &str, source: &DateDialect, dest: &DateDialect) -> String {
    let mut cache_guard = CACHE.lock().unwrap_or_else(PoisonError::into_inner);

    let cache = cache_guard.get_or_insert_with(|| LruCache::new(CACHE_SIZE));

    let key = (pattern.to_string(), source.name, dest.name);
    if let Some(translated) = cache.get(&key) {
        return translated.clone();
    }

    let translated = translate(pattern, source, dest);
    cache.put(key, translated.clone());
    translated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{DATEPICKER, MOMENT};

    #[test]
    fn test_cached_matches_uncached() {
        let first = translate_cached("dd/mm/yyyy", &DATEPICKER, &MOMENT);
        let second = translate_cached("dd/mm/yyyy", &DATEPICKER, &MOMENT);
        assert_eq!(first, "DD/MM/YYYY");
        assert_eq!(first, second);
    }
}
