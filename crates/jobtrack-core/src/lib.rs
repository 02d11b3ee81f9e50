//! jobtrack-core
//!
//! Core building blocks for the job application tracker.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, status, job, errors, events）
//! - **ports**: 抽象化レイヤー（Clock, IdGenerator, KeyValueSlot, ChangeListener）
//! - **impls**: ports の実装（InMemorySlot, FileSlot）
//! - **store**: JobStore とスロットの codec
//! - **config**: TOML 設定
//! - **observability**: status ごとの集計

pub mod config;
pub mod domain;
pub mod impls;
pub mod observability;
pub mod ports;
pub mod store;

pub use config::TrackerConfig;
pub use domain::{JobId, JobRecord, JobStatus, NewJob, StatusFilter, StoreError, StoreEvent};
pub use store::JobStore;
