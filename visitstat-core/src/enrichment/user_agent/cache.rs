use crate::enrichment::user_agent::{Classification, UserAgentClassifier};
use dashmap::DashMap;
use std::sync::Arc;

/// Memoizes user-agent classification per distinct raw string.
///
/// Each string is classified at most once, even under concurrent callers, and every caller
/// asking for the same string gets the same `Arc`.
pub struct ClassificationCache {
    classifier: Box<dyn UserAgentClassifier>,
    entries: DashMap<String, Arc<Classification>>,
}

impl ClassificationCache {
    pub fn new(classifier: impl UserAgentClassifier + 'static) -> Self {
        Self {
            classifier: Box::new(classifier),
            entries: DashMap::new(),
        }
    }

    pub fn classify(&self, ua: &str) -> Arc<Classification> {
        if let Some(hit) = self.entries.get(ua) {
            return Arc::clone(hit.value());
        }

        // The entry holds the shard lock until the value is inserted.
        let entry = self.entries.entry(ua.to_string()).or_insert_with(|| {
            tracing::debug!(user_agent = ua, "classifying new user agent");
            Arc::new(self.classifier.classify(ua))
        });

        Arc::clone(entry.value())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
