//! Ports - 抽象化レイヤー
//!
//! このモジュールは Hexagonal Architecture の「ポート」を定義します。
//! JobStore は時刻・ID 生成・永続化スロット・変更通知をすべて trait 越しに扱い、
//! 実装の詳細（ファイル、メモリ、端末表示など）を知りません。

pub mod clock;
pub mod id_generator;
pub mod listener;
pub mod slot;

// 主要な trait を再エクスポート
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::id_generator::{IdGenerator, UlidGenerator};
pub use self::listener::ChangeListener;
pub use self::slot::{KeyValueSlot, SlotError};
