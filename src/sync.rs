//! A lock that never reports poisoning.
//!
//! Game state is only ever touched by one logical thread of control; the lock
//! exists so a host can share a [`Game`](crate::Game) behind `&self`.

/// Mutual exclusion over game state.
#[derive(Debug)]
pub struct Mutex<T>(Inner<T>);

#[cfg(feature = "std")]
type Inner<T> = std::sync::Mutex<T>;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
type Inner<T> = spin::Mutex<T>;

/// Guard returned by [`Mutex::lock`].
#[cfg(feature = "std")]
pub type MutexGuard<'a, T> = std::sync::MutexGuard<'a, T>;

/// Guard returned by [`Mutex::lock`].
#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub type MutexGuard<'a, T> = spin::MutexGuard<'a, T>;

impl<T> Mutex<T> {
    /// Wraps `value` in a lock.
    pub const fn new(value: T) -> Self {
        Self(Inner::<T>::new(value))
    }

    /// Acquires the lock. A poisoned lock is recovered.
    #[cfg(feature = "std")]
    pub fn lock(&self) -> MutexGuard<'_, T> {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Acquires the lock.
    #[cfg(all(not(feature = "std"), feature = "alloc"))]
    pub fn lock(&self) -> MutexGuard<'_, T> {
        self.0.lock()
    }
}
