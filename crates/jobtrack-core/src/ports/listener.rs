//! ChangeListener port - 状態変化の通知
//!
//! プレゼンテーション層は listener を登録し、通知を受けたら再描画します。
//! クロージャもそのまま listener として登録できます。

use crate::domain::StoreEvent;

/// ChangeListener は StoreEvent を受け取る
pub trait ChangeListener {
    fn on_change(&self, event: &StoreEvent);
}

impl<F> ChangeListener for F
where
    F: Fn(&StoreEvent),
{
    fn on_change(&self, event: &StoreEvent) {
        self(event)
    }
}
