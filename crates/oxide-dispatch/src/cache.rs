//! Memoised template compilation.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::Result;
use crate::template::CompiledTemplate;

/// A cache of compiled templates keyed by template string.
///
/// Compilation is pure, so a cached template behaves exactly like a fresh
/// one. Failed compilations are not cached.
#[derive(Debug, Default)]
pub struct TemplateCache {
    size_limit: Option<usize>,
    entries: RwLock<HashMap<String, Arc<CompiledTemplate>>>,
}

impl TemplateCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty cache that compiles with the given regex size limit.
    pub fn with_size_limit(size_limit: usize) -> Self {
        Self {
            size_limit: Some(size_limit),
            entries: RwLock::default(),
        }
    }

    /// Returns the compiled template, compiling and storing it on first use.
    pub fn get_or_compile(&self, template: &str) -> Result<Arc<CompiledTemplate>> {
        if let Some(compiled) = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(template)
        {
            return Ok(Arc::clone(compiled));
        }

        let compiled = Arc::new(match self.size_limit {
            Some(limit) => CompiledTemplate::compile_with_size_limit(template, limit)?,
            None => CompiledTemplate::compile(template)?,
        });

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(
            entries.entry(template.to_string()).or_insert(compiled),
        ))
    }

    /// Returns the number of cached templates.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true if nothing has been cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every cached template.
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reuses_compiled_template() {
        let cache = TemplateCache::new();
        let first = cache.get_or_compile("/users/{id}").unwrap();
        let second = cache.get_or_compile("/users/{id}").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_matches_uncached_compilation() {
        let cache = TemplateCache::new();
        let cached = cache.get_or_compile("/a/{b}/c").unwrap();
        let fresh = CompiledTemplate::compile("/a/{b}/c").unwrap();
        assert_eq!(cached.expression(), fresh.expression());
        assert_eq!(cached.literal_count(), fresh.literal_count());
        assert_eq!(cached.var_count(), fresh.var_count());
    }

    #[test]
    fn test_failures_are_not_cached() {
        let cache = TemplateCache::with_size_limit(16);
        assert!(cache.get_or_compile("/a/{b}").is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_clear() {
        let cache = TemplateCache::new();
        cache.get_or_compile("/a").unwrap();
        cache.get_or_compile("/b").unwrap();
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert!(cache.is_empty());
    }
}
