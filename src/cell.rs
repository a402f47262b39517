//! Lock-free single-value holder shared between the input and render
//! contexts.
//!
//! Each cell is one `AtomicU8`. Writers publish with `Release`, readers
//! observe with `Acquire`, so a read always sees a whole, completed write.
//! There is no ordering promise *between* cells: protocols such as the
//! scroll hand-shake are built on top by the callers.

use core::marker::PhantomData;
use core::sync::atomic::{AtomicU8, Ordering};

use crate::error::{Error, Result};

/// A value that fits in one byte and can be decoded back.
pub trait CellValue: Copy {
    fn into_raw(self) -> u8;
    fn from_raw(raw: u8) -> Option<Self>;
}

impl CellValue for bool {
    fn into_raw(self) -> u8 {
        self as u8
    }

    fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(false),
            1 => Some(true),
            _ => None,
        }
    }
}

/// Atomically readable / writable cell for a [`CellValue`].
pub struct SharedCell<T> {
    raw: AtomicU8,
    _value: PhantomData<T>,
}

impl<T: CellValue> SharedCell<T> {
    pub fn new(value: T) -> Self {
        Self {
            raw: AtomicU8::new(value.into_raw()),
            _value: PhantomData,
        }
    }

    /// Replace the stored value.
    pub fn write(&self, value: T) {
        self.raw.store(value.into_raw(), Ordering::Release);
    }

    /// Most recently completed write.
    ///
    /// Fails with [`Error::InvalidState`] when the stored byte does not
    /// decode, which means the hand-shake itself is broken.
    pub fn read(&self) -> Result<T> {
        let raw = self.raw.load(Ordering::Acquire);
        T::from_raw(raw).ok_or(Error::InvalidState { raw })
    }

    /// Write `new` only if the cell still holds `current`.
    ///
    /// Returns whether the write happened. Used at the request-acceptance
    /// boundary so two racing requests cannot both be accepted.
    pub fn replace_if(&self, current: T, new: T) -> bool {
        self.raw
            .compare_exchange(
                current.into_raw(),
                new.into_raw(),
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok()
    }

    /// Store a raw byte without encoding, to simulate a corrupted cell.
    #[cfg(test)]
    pub(crate) fn write_raw(&self, raw: u8) {
        self.raw.store(raw, Ordering::Release);
    }
}

impl<T: CellValue + Default> Default for SharedCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: CellValue + core::fmt::Debug> core::fmt::Debug for SharedCell<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.read() {
            Ok(value) => f.debug_tuple("SharedCell").field(&value).finish(),
            Err(_) => f
                .debug_tuple("SharedCell")
                .field(&self.raw.load(Ordering::Relaxed))
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_returns_last_write() {
        let cell = SharedCell::new(false);
        assert_eq!(cell.read(), Ok(false));
        cell.write(true);
        assert_eq!(cell.read(), Ok(true));
    }

    #[test]
    fn replace_if_only_swaps_expected_value() {
        let cell = SharedCell::new(false);
        assert!(cell.replace_if(false, true));
        assert!(!cell.replace_if(false, true));
        assert_eq!(cell.read(), Ok(true));
    }

    #[test]
    fn undecodable_byte_is_invalid_state() {
        let cell = SharedCell::new(false);
        cell.write_raw(7);
        assert_eq!(cell.read(), Err(Error::InvalidState { raw: 7 }));
    }

    #[test]
    fn writes_from_another_thread_are_whole() {
        let cell = SharedCell::new(false);
        std::thread::scope(|s| {
            s.spawn(|| {
                for i in 0..1000 {
                    cell.write(i % 2 == 0);
                }
            });
            for _ in 0..1000 {
                assert!(cell.read().is_ok());
            }
        });
    }
}
