use moka::future::Cache;
use std::any::Any;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::broadcast;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKey {
    Members,
    Partners,
    Projects,
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Members => "members",
            Self::Partners => "partners",
            Self::Projects => "projects",
        };
        write!(f, "{name}")
    }
}

type Slot = Arc<dyn Any + Send + Sync>;

// Process-wide read cache for backend resources. One slot per resource key,
// no eviction: entries live until a mutation invalidates them. Concurrent
// fetches of the same key share a single in-flight load, and failed loads
// are never stored.
#[derive(Clone)]
pub struct QueryCache {
    entries: Cache<ResourceKey, Slot>,
    invalidations: broadcast::Sender<ResourceKey>,
}

impl QueryCache {
    pub fn new() -> Self {
        let entries = Cache::builder().build();
        let (invalidations, _) = broadcast::channel(16);
        Self {
            entries,
            invalidations,
        }
    }

    // Return the cached value for `key`, or run `loader` to populate it.
    // At most one loader runs per key at a time; every concurrent caller
    // gets the same outcome.
    pub async fn fetch<T, E, F, Fut>(
        &self,
        key: ResourceKey,
        loader: F,
    ) -> Result<Arc<T>, Arc<E>>
    where
        T: Send + Sync + 'static,
        E: Send + Sync + 'static,
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = Result<T, E>> + Send,
    {
        let slot = self
            .entries
            .try_get_with(key, async move {
                tracing::debug!("cache miss, loading {key}");
                loader().await.map(|value| Arc::new(value) as Slot)
            })
            .await?;

        // A key always stores the one type its panel loads under it.
        Ok(slot
            .downcast::<T>()
            .expect("query cache slot holds an unexpected type"))
    }

    // Drop the entry so the next fetch re-reads the backend, and tell any
    // subscriber which resource changed.
    pub async fn invalidate(&self, key: ResourceKey) {
        tracing::debug!("invalidating {key}");
        self.entries.invalidate(&key).await;
        let _ = self.invalidations.send(key);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ResourceKey> {
        self.invalidations.subscribe()
    }

    pub fn contains(&self, key: ResourceKey) -> bool {
        self.entries.contains_key(&key)
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}
