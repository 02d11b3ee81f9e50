//! Errors - 入力検証とストア操作のエラー
//!
//! # 分類
//! - Validation: 入力が不正（状態は変更されない）
//! - UnknownStatus: 4 つの status 以外の文字列（状態は変更されない）
//!
//! lookup miss（存在しない id への update/delete）はエラーではなく no-op として扱います。
//! 永続化の失敗もエラーとしては返さず、ログと `StoreEvent::PersistFailed` で通知します。

use super::status::UnknownStatus;

/// Why `add` refused its input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("company must not be empty")]
    EmptyCompany,

    #[error("role must not be empty")]
    EmptyRole,
}

/// StoreError は JobStore の操作が拒否された理由
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    UnknownStatus(#[from] UnknownStatus),
}
