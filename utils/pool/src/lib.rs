/*!
# Depot Pool

Minimal allocate-or-reuse object pool shared across depot components that
recycle expensive-to-build values (scratch buffers, parsers, connections).

[`SimplePool`] keeps released values on a mutex-guarded free list;
[`SimplePool::acquire`] pops one when available and allocates otherwise. The
pool never shrinks and places no bound on the free list.
*/

use std::sync::{Mutex, PoisonError};

/// Free-list pool handing out reusable values
pub struct SimplePool<T> {
    allocate: Box<dyn Fn() -> T + Send + Sync>,
    values: Mutex<Vec<T>>,
}

impl<T> SimplePool<T> {
    /// Create a pool allocating fresh values with `allocate`
    pub fn new(allocate: impl Fn() -> T + Send + Sync + 'static) -> Self {
        Self {
            allocate: Box::new(allocate),
            values: Mutex::new(Vec::new()),
        }
    }

    /// Take a pooled value, allocating when the free list is empty
    pub fn acquire(&self) -> T {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        match values.pop() {
            Some(value) => value,
            None => (self.allocate)(),
        }
    }

    /// Return a value to the free list for later reuse
    pub fn release(&self, value: T) {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_acquire_allocates_when_empty() {
        let allocations = Arc::new(AtomicUsize::new(0));
        let counter = allocations.clone();
        let pool = SimplePool::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            String::new()
        });

        let _first = pool.acquire();
        let _second = pool.acquire();
        assert_eq!(allocations.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_release_then_acquire_reuses() {
        let allocations = Arc::new(AtomicUsize::new(0));
        let counter = allocations.clone();
        let pool = SimplePool::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Vec::<u8>::with_capacity(64)
        });

        let buffer = pool.acquire();
        pool.release(buffer);
        let _reused = pool.acquire();

        assert_eq!(allocations.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_released_value_keeps_state() {
        let pool = SimplePool::new(String::new);

        let mut value = pool.acquire();
        value.push_str("scratch");
        pool.release(value);

        assert_eq!(pool.acquire(), "scratch");
    }

    #[test]
    fn test_pool_shared_across_threads() {
        let pool = Arc::new(SimplePool::new(|| vec![0u8; 16]));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let pool = pool.clone();
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        let value = pool.acquire();
                        pool.release(value);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("pool worker panicked");
        }
    }
}
