//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **InMemorySlot**: テスト・埋め込み用のスロット
//! - **FileSlot**: ファイルベースのスロット（CLI が使う）

pub mod file_slot;
pub mod memory_slot;

// 主要な型を再エクスポート
pub use self::file_slot::FileSlot;
pub use self::memory_slot::InMemorySlot;
