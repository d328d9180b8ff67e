//! Keyed de-duplication of in-flight loads.
//!
//! Several widgets may trigger the same `load_*` call at once (tab open,
//! refresh button, selector change). Instead of a boolean "loading" flag that
//! makes the second caller return empty-handed, concurrent callers with the
//! same key share one future and all receive its result. Entries are dropped
//! as soon as the load completes; nothing is cached afterwards.

use futures::future::{FutureExt, LocalBoxFuture, Shared};
use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::rc::Rc;

type SharedLoad<V> = Shared<LocalBoxFuture<'static, V>>;

pub struct InflightCache<K, V>
where
    V: Clone + 'static,
{
    pending: Rc<RefCell<HashMap<K, SharedLoad<V>>>>,
}

impl<K, V> Clone for InflightCache<K, V>
where
    V: Clone + 'static,
{
    fn clone(&self) -> Self {
        Self {
            pending: Rc::clone(&self.pending),
        }
    }
}

impl<K, V> Default for InflightCache<K, V>
where
    K: Eq + Hash + Clone + 'static,
    V: Clone + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> InflightCache<K, V>
where
    K: Eq + Hash + Clone + 'static,
    V: Clone + 'static,
{
    pub fn new() -> Self {
        Self {
            pending: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    pub fn is_pending(&self, key: &K) -> bool {
        self.pending.borrow().contains_key(key)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Join the in-flight load for `key`, or start it with `load`.
    ///
    /// `load` is only invoked when no load for `key` is running.
    pub fn run<F, Fut>(&self, key: K, load: F) -> LocalBoxFuture<'static, V>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = V> + 'static,
    {
        let existing = self.pending.borrow().get(&key).cloned();
        if let Some(shared) = existing {
            return shared.boxed_local();
        }

        let pending = Rc::clone(&self.pending);
        let done_key = key.clone();
        let fut = load();
        let shared = async move {
            let value = fut.await;
            pending.borrow_mut().remove(&done_key);
            value
        }
        .boxed_local()
        .shared();

        self.pending.borrow_mut().insert(key, shared.clone());
        shared.boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::future::join;
    use std::cell::Cell;

    #[test]
    fn concurrent_loads_issue_one_request() {
        let cache: InflightCache<&'static str, Result<Vec<u32>, String>> = InflightCache::new();
        let calls = Rc::new(Cell::new(0));
        let (tx, rx) = oneshot::channel::<Vec<u32>>();

        let first = {
            let calls = Rc::clone(&calls);
            cache.run("users", move || {
                calls.set(calls.get() + 1);
                async move { rx.await.map_err(|e| e.to_string()) }
            })
        };
        assert!(cache.is_pending(&"users"));

        let second = {
            let calls = Rc::clone(&calls);
            cache.run("users", move || {
                calls.set(calls.get() + 1);
                async move { Ok(vec![]) }
            })
        };
        assert_eq!(calls.get(), 1);

        tx.send(vec![1, 2, 3]).unwrap();
        let (a, b) = block_on(join(first, second));
        assert_eq!(a, Ok(vec![1, 2, 3]));
        assert_eq!(b, Ok(vec![1, 2, 3]));
        assert_eq!(cache.pending_count(), 0);
    }

    #[test]
    fn completed_loads_are_not_cached() {
        let cache: InflightCache<u32, u32> = InflightCache::new();
        let calls = Rc::new(Cell::new(0));

        for expected in 1..=2 {
            let calls_in = Rc::clone(&calls);
            let value = block_on(cache.run(7, move || {
                calls_in.set(calls_in.get() + 1);
                let n = calls_in.get();
                async move { n * 10 }
            }));
            assert_eq!(value, expected * 10);
        }
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn different_keys_load_independently() {
        let cache: InflightCache<u32, u32> = InflightCache::new();
        let a = cache.run(1, || async { 1 });
        let b = cache.run(2, || async { 2 });
        assert_eq!(cache.pending_count(), 2);
        assert_eq!(block_on(join(a, b)), (1, 2));
    }
}
