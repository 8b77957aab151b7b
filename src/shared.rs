//! Thread-safe handle over an [`ElementList`].

use std::sync::{Arc, Mutex, MutexGuard};

use log::warn;

use crate::element_list::ElementList;
use crate::error::Result;

/// A cloneable handle to one `ElementList` shared between threads.
///
/// Each call locks the list for its own duration, so concurrent appends
/// land in some serial order and none are lost.
#[derive(Debug)]
pub struct SharedElementList<T> {
    inner: Arc<Mutex<ElementList<T>>>,
}

impl<T> Clone for SharedElementList<T> {
    fn clone(&self) -> Self {
        SharedElementList {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> SharedElementList<T> {
    pub fn new() -> Self {
        Self::from_list(ElementList::new())
    }

    pub fn from_list(list: ElementList<T>) -> Self {
        SharedElementList {
            inner: Arc::new(Mutex::new(list)),
        }
    }

    // A panic in another holder cannot leave the list half-appended, so the
    // poisoned data is still usable.
    fn lock(&self) -> MutexGuard<'_, ElementList<T>> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                warn!("element list mutex was poisoned, recovering");
                poisoned.into_inner()
            }
        }
    }

    pub fn append(&self, element: T) {
        self.lock().append(element);
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl<T: Clone> SharedElementList<T> {
    pub fn last_element(&self) -> Result<T> {
        self.lock().last_element()
    }

    /// Copies the current contents, in insertion order.
    pub fn snapshot(&self) -> Vec<T> {
        self.lock().as_slice().to_vec()
    }
}

impl<T> Default for SharedElementList<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_concurrent_appends_are_all_kept() {
        let list = SharedElementList::new();

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let list = list.clone();
                thread::spawn(move || {
                    for i in 0..100 {
                        list.append(t * 100 + i);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let mut all = list.snapshot();
        assert_eq!(all.len(), 400);
        all.sort();
        assert_eq!(all, (0..400).collect::<Vec<_>>());
    }

    #[test]
    fn test_per_thread_order_preserved() {
        let list = SharedElementList::new();
        let writer = list.clone();
        thread::spawn(move || {
            for i in 0..50 {
                writer.append(i);
            }
        })
        .join()
        .unwrap();

        assert_eq!(list.snapshot(), (0..50).collect::<Vec<_>>());
        assert_eq!(list.last_element().unwrap(), 49);
    }

    #[test]
    fn test_empty_shared_list() {
        let list: SharedElementList<String> = SharedElementList::default();
        assert!(list.is_empty());
        assert!(list.last_element().unwrap_err().is_empty_container());
    }

    #[test]
    fn test_recovers_from_poisoned_lock() {
        let list = SharedElementList::from_list(vec![1, 2].into_iter().collect());
        let poisoner = list.clone();

        let _ = thread::spawn(move || {
            let _guard = poisoner.inner.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        list.append(3);
        assert_eq!(list.snapshot(), vec![1, 2, 3]);
    }
}
