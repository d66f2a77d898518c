// src/pool.rs - Reusable scratch buffers for assembling ids
use std::{
    fmt, mem,
    ops::{Deref, DerefMut},
    sync::{Mutex, MutexGuard, PoisonError},
};

use log::trace;

/// Idle buffers kept by [`BufferPool::default`]
pub const DEFAULT_MAX_IDLE: usize = 64;

/// Buffers that grew beyond this are dropped instead of being kept idle
const MAX_RETAINED_CAPACITY: usize = 4096;

/// Thread-safe free list of `String` buffers.
///
/// Buffers are handed out empty through [`acquire`](Self::acquire) and come
/// back when the returned guard is dropped, on success and error paths alike.
/// At most `max_idle` buffers are kept; the rest are freed on release.
pub struct BufferPool {
    free: Mutex<Vec<String>>,
    max_idle: usize,
}

impl BufferPool {
    /// Creates a pool that keeps up to `max_idle` idle buffers
    pub fn new(max_idle: usize) -> Self {
        Self {
            free: Mutex::new(Vec::with_capacity(max_idle)),
            max_idle,
        }
    }

    /// Rents an empty buffer, reusing an idle one when available
    pub fn acquire(&self) -> PooledBuffer<'_> {
        let buffer = self.lock().pop().unwrap_or_default();
        debug_assert!(buffer.is_empty());

        PooledBuffer { pool: self, buffer }
    }

    /// Number of buffers currently waiting to be reused
    pub fn idle(&self) -> usize {
        self.lock().len()
    }

    fn release(&self, mut buffer: String) {
        if buffer.capacity() > MAX_RETAINED_CAPACITY {
            trace!("Dropping oversized buffer of {} bytes", buffer.capacity());
            return;
        }

        buffer.clear();
        let mut free = self.lock();
        if free.len() < self.max_idle {
            free.push(buffer);
        } else {
            trace!("Pool full, dropping released buffer");
        }
    }

    // A panic while holding the lock cannot leave the list half-updated
    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.free.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_IDLE)
    }
}

impl fmt::Debug for BufferPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferPool")
            .field("idle", &self.idle())
            .field("max_idle", &self.max_idle)
            .finish()
    }
}

/// A rented buffer; returns itself to the pool when dropped
pub struct PooledBuffer<'a> {
    pool: &'a BufferPool,
    buffer: String,
}

impl PooledBuffer<'_> {
    /// Returns the buffer to the pool now instead of at end of scope
    pub fn release(self) {
        drop(self);
    }
}

impl Deref for PooledBuffer<'_> {
    type Target = String;

    fn deref(&self) -> &String {
        &self.buffer
    }
}

impl DerefMut for PooledBuffer<'_> {
    fn deref_mut(&mut self) -> &mut String {
        &mut self.buffer
    }
}

impl Drop for PooledBuffer<'_> {
    fn drop(&mut self) {
        self.pool.release(mem::take(&mut self.buffer));
    }
}
