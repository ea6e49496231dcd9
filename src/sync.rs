use alloc::sync::Arc;
use std::sync::{MutexGuard, PoisonError};

/// A cloneable handle to state behind one mutex.
///
/// A panic while the lock is held does not poison later access.
pub struct Shared<T>(Arc<std::sync::Mutex<T>>);

impl<T> Shared<T> {
    pub fn new(value: T) -> Self {
        Self(Arc::new(std::sync::Mutex::new(value)))
    }

    pub fn lock(&self) -> MutexGuard<'_, T> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}
