//! InMemorySlot - メモリ上の key-value スロット
//!
//! ブラウザの localStorage に相当する最小実装です。
//! テストでは書き込み失敗（quota exceeded 相当）を再現するためにも使います。

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::ports::slot::{KeyValueSlot, SlotError, validate_key};

/// InMemorySlot はメモリ上の key-value スロット
///
/// # 実装詳細
/// - HashMap<String, String> を Mutex で保護
/// - `fail_writes` が立っている間は write が `SlotError::Unavailable` を返す
#[derive(Debug, Default)]
pub struct InMemorySlot {
    values: Mutex<HashMap<String, String>>,
    fail_writes: AtomicBool,
}

impl InMemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `key` already holding `value`.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let slot = Self::new();
        slot.lock().insert(key.into(), value.into());
        slot
    }

    /// Make every following write fail until switched back.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.values
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueSlot for InMemorySlot {
    fn read(&self, key: &str) -> Result<Option<String>, SlotError> {
        validate_key(key)?;
        Ok(self.lock().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SlotError> {
        validate_key(key)?;
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(SlotError::Unavailable("quota exceeded".to_string()));
        }
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_none() {
        let slot = InMemorySlot::new();
        assert_eq!(slot.read("jobs").unwrap(), None);
    }

    #[test]
    fn write_overwrites_previous_value() {
        let slot = InMemorySlot::new();
        slot.write("jobs", "[1]").unwrap();
        slot.write("jobs", "[2]").unwrap();
        assert_eq!(slot.read("jobs").unwrap().as_deref(), Some("[2]"));
    }

    #[test]
    fn failing_writes_leave_value_untouched() {
        let slot = InMemorySlot::with_value("jobs", "[]");
        slot.set_fail_writes(true);

        assert!(matches!(
            slot.write("jobs", "[1]"),
            Err(SlotError::Unavailable(_))
        ));
        assert_eq!(slot.read("jobs").unwrap().as_deref(), Some("[]"));

        slot.set_fail_writes(false);
        slot.write("jobs", "[1]").unwrap();
        assert_eq!(slot.read("jobs").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn invalid_key_is_rejected() {
        let slot = InMemorySlot::new();
        assert!(matches!(slot.read("../x"), Err(SlotError::InvalidKey(_))));
    }
}
