//! KeyValueSlot port - 永続化先（名前付き key-value スロット）
//!
//! JobStore はジョブ列全体を JSON 文字列として 1 つのキーに書き込みます。
//!
//! # 実装
//! - `InMemorySlot`: テスト・埋め込み用
//! - `FileSlot`: ディレクトリ配下の `<key>.json`

use std::path::PathBuf;

/// SlotError はスロットの読み書きエラー
#[derive(Debug, thiserror::Error)]
pub enum SlotError {
    #[error("invalid slot key {0:?}: only ASCII letters, digits, '-' and '_' are allowed")]
    InvalidKey(String),

    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("slot unavailable: {0}")]
    Unavailable(String),
}

/// A named key-value store holding whole text values.
///
/// # 設計原則
/// - 値は丸ごと上書き（last write wins）
/// - 存在しないキーの read は `Ok(None)`
pub trait KeyValueSlot {
    fn read(&self, key: &str) -> Result<Option<String>, SlotError>;

    fn write(&self, key: &str, value: &str) -> Result<(), SlotError>;
}

impl<S: KeyValueSlot + ?Sized> KeyValueSlot for &S {
    fn read(&self, key: &str) -> Result<Option<String>, SlotError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SlotError> {
        (**self).write(key, value)
    }
}

/// Keys end up in file names, so they are kept to a safe alphabet everywhere.
pub fn validate_key(key: &str) -> Result<(), SlotError> {
    let ok = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if ok {
        Ok(())
    } else {
        Err(SlotError::InvalidKey(key.to_string()))
    }
}
