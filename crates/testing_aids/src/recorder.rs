// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::Debug;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Records the calls made to a fake, for later assertions.
///
/// Clones share the same record, so a test can keep one handle while handing another to
/// the code under test.
///
/// ```
/// use testing_aids::Recorder;
///
/// let calls = Recorder::new();
/// let handle = calls.clone();
///
/// handle.record((1, "data"));
///
/// calls.assert_called_once_with(&(1, "data"));
/// ```
#[derive(Debug)]
pub struct Recorder<T> {
    calls: Arc<Mutex<Vec<T>>>,
}

impl<T> Recorder<T> {
    /// Creates a recorder with no calls recorded.
    #[must_use]
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Appends a call to the record.
    pub fn record(&self, call: T) {
        self.lock().push(call);
    }

    /// Number of calls recorded so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.lock().len()
    }

    /// Forgets all calls recorded so far.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Copies of all calls recorded so far, oldest first.
    #[must_use]
    pub fn calls(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.lock().clone()
    }

    /// Asserts that exactly one call was recorded and that it equals `expected`.
    ///
    /// # Panics
    ///
    /// Panics if the recorded calls are anything but `[expected]`.
    #[cfg_attr(test, mutants::skip)] // This is test logic - pointless to mutate.
    #[track_caller]
    pub fn assert_called_once_with(&self, expected: &T)
    where
        T: PartialEq + Debug,
    {
        let calls = self.lock();

        assert!(
            calls.len() == 1 && calls[0] == *expected,
            "expected exactly one call with {expected:?}, got {:?}",
            *calls
        );
    }

    fn lock(&self) -> MutexGuard<'_, Vec<T>> {
        // A panicking test may poison the lock; the record itself is still meaningful.
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Clone for Recorder<T> {
    fn clone(&self) -> Self {
        Self {
            calls: Arc::clone(&self.calls),
        }
    }
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self::new()
    }
}
