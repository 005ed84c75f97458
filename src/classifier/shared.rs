//! A classifier that can be shared across threads.

use std::sync::{Arc, RwLock, RwLockReadGuard};

use crate::{Category, Classifier};

/// A [Classifier] behind a reader/writer lock for multi-threaded hosts.
///
/// `classify` takes the read lock and `add_pattern` the write lock, so
/// writers are serialized and readers never observe a half-extended table.
/// Single-threaded callers should use a plain [Classifier]; the borrow
/// checker already enforces the single-writer discipline there.
///
/// A poisoned lock is recovered rather than surfaced: the operations exposed
/// here cannot leave the table in an inconsistent state, so the value behind
/// a poisoned lock is still valid.
#[derive(Debug, Clone, Default)]
pub struct SharedClassifier {
    inner: Arc<RwLock<Classifier>>,
}

impl SharedClassifier {
    /// Wrap a classifier for shared use. Clones of the returned value all
    /// point at the same table.
    pub fn new(classifier: Classifier) -> Self {
        Self {
            inner: Arc::new(RwLock::new(classifier)),
        }
    }

    /// Classify a description into a category. See [Classifier::classify].
    pub fn classify(&self, description: &str) -> Category {
        self.read().classify(description)
    }

    /// Classify a description that may be missing entirely. See
    /// [Classifier::classify_opt].
    pub fn classify_opt(&self, description: Option<&str>) -> Category {
        self.read().classify_opt(description)
    }

    /// The fixed taxonomy, in canonical order.
    pub fn categories(&self) -> &'static [Category] {
        &Category::ALL
    }

    /// Add a keyword pattern for the category named by `label`, serialized
    /// behind the write lock. See [Classifier::add_pattern].
    pub fn add_pattern(&self, label: &str, pattern: &str) -> bool {
        match self.inner.write() {
            Ok(mut classifier) => classifier.add_pattern(label, pattern),
            Err(poisoned) => poisoned.into_inner().add_pattern(label, pattern),
        }
    }

    /// A point-in-time copy of the underlying classifier, e.g. for handing a
    /// stable table to a batch job while writers keep extending the shared
    /// one.
    pub fn snapshot(&self) -> Classifier {
        self.read().clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, Classifier> {
        match self.inner.read() {
            Ok(classifier) => classifier,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
