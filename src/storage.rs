//! Persistent key-value storage
//!
//! Values survive a restart of the watchface as long as the same backend is
//! handed to the next instance.

use heapless::FnvIndexMap;

/// Error returned when a value cannot be persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
    /// No free slot for a new key
    Full,
}

/// Abstract persistent storage
///
/// Implement this trait on top of flash, NVS or a file. Values are scalar
/// and keyed by the same numeric keys the companion app uses.
pub trait Storage {
    /// Check if a value is stored under `key`
    fn exists(&self, key: u32) -> bool;

    /// Read a boolean. Returns `None` if the key is missing.
    fn read_bool(&self, key: u32) -> Option<bool>;

    /// Read an integer. Returns `None` if the key is missing.
    fn read_int(&self, key: u32) -> Option<i32>;

    fn write_bool(&mut self, key: u32, value: bool) -> Result<(), StorageError>;

    fn write_int(&mut self, key: u32, value: i32) -> Result<(), StorageError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StoredValue {
    Bool(bool),
    Int(i32),
}

/// Fixed-capacity in-memory storage
///
/// N is the number of keys and must be a power of two.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage<const N: usize> {
    values: FnvIndexMap<u32, StoredValue, N>,
}

impl<const N: usize> MemoryStorage<N> {
    pub fn new() -> Self {
        Self {
            values: FnvIndexMap::new(),
        }
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn write(&mut self, key: u32, value: StoredValue) -> Result<(), StorageError> {
        self.values
            .insert(key, value)
            .map(|_| ())
            .map_err(|_| StorageError::Full)
    }
}

impl<const N: usize> Storage for MemoryStorage<N> {
    fn exists(&self, key: u32) -> bool {
        self.values.contains_key(&key)
    }

    fn read_bool(&self, key: u32) -> Option<bool> {
        match self.values.get(&key)? {
            StoredValue::Bool(value) => Some(*value),
            StoredValue::Int(value) => Some(*value != 0),
        }
    }

    fn read_int(&self, key: u32) -> Option<i32> {
        match self.values.get(&key)? {
            StoredValue::Int(value) => Some(*value),
            StoredValue::Bool(value) => Some(i32::from(*value)),
        }
    }

    fn write_bool(&mut self, key: u32, value: bool) -> Result<(), StorageError> {
        self.write(key, StoredValue::Bool(value))
    }

    fn write_int(&mut self, key: u32, value: i32) -> Result<(), StorageError> {
        self.write(key, StoredValue::Int(value))
    }
}
