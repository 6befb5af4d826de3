//! Compiled rule cache

use crate::error::Result;
use crate::rule::ast::{CompiledRule, Outcome};
use crate::rule::{evaluator, parser};
use ahash::AHashMap;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::debug;

/// Most compiled rules kept at once; the cache is emptied when full
pub const MAX_CACHED_RULES: usize = 4096;

/// Successfully compiled rules keyed by rule text, bounded by `capacity`
pub struct RuleCache {
    map: RwLock<AHashMap<String, CompiledRule>>,
    capacity: usize,
}

impl RuleCache {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: RwLock::new(AHashMap::with_capacity(capacity.min(256))),
            capacity: capacity.max(1),
        }
    }

    /// Get or parse a rule string, using cache for repeated rules
    pub fn get_or_parse(&self, rule: &str) -> Result<CompiledRule> {
        // Fast path: check read lock first
        if let Some(compiled) = self.map.read().get(rule) {
            return Ok(*compiled);
        }

        let compiled = parser::parse(rule)?;

        let mut map = self.map.write();
        if map.len() >= self.capacity {
            debug!(evicted = map.len(), "scale rule cache full, clearing");
            map.clear();
        }
        debug!(rule, "compiled scale rule");
        map.insert(rule.to_string(), compiled);

        Ok(compiled)
    }

    pub fn clear(&self) {
        self.map.write().clear();
    }

    pub fn len(&self) -> usize {
        self.map.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.read().is_empty()
    }

    pub fn contains(&self, rule: &str) -> bool {
        self.map.read().contains_key(rule)
    }
}

/// Global cache used by [`Rule`](crate::rule::Rule) evaluation
static RULE_CACHE: Lazy<RuleCache> = Lazy::new(|| RuleCache::with_capacity(MAX_CACHED_RULES));

/// Get or parse a rule string through the global cache
#[inline]
pub fn get_or_parse(rule: &str) -> Result<CompiledRule> {
    RULE_CACHE.get_or_parse(rule)
}

/// Evaluate a rule string against a value, using the cached compiled form
#[inline]
pub fn evaluate(rule: &str, value: f64) -> Result<Outcome> {
    let compiled = get_or_parse(rule)?;
    Ok(evaluator::check(&compiled, value))
}

/// Clear the rule cache
pub fn clear_cache() {
    RULE_CACHE.clear();
}

/// Number of compiled rules currently cached
pub fn cache_size() -> usize {
    RULE_CACHE.len()
}

/// Whether a rule string is currently cached
pub fn is_cached(rule: &str) -> bool {
    RULE_CACHE.contains(rule)
}
