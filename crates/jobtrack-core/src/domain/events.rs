//! Events - ストアの状態変化イベント
//!
//! プレゼンテーション層は `ChangeListener` 経由でこれを受け取り、再描画します。

use super::ids::JobId;
use super::status::{JobStatus, StatusFilter};

/// StoreEvent は JobStore で発生した状態変化
///
/// # 発火条件
/// - 状態が実際に変わったときだけ発火する
/// - 入力検証で拒否された操作や lookup miss では発火しない
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Added(JobId),

    StatusChanged {
        id: JobId,
        from: JobStatus,
        to: JobStatus,
    },

    Deleted(JobId),

    FilterChanged(StatusFilter),

    /// Writing the slot failed. The in-memory change still stands.
    PersistFailed { reason: String },
}
