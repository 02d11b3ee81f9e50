//! IdGenerator port - ID 生成の抽象化
//!
//! テスト容易性のために、trait として抽象化しています。
//!
//! # 実装
//! - **UlidGenerator**: ULID ベース（Clock から timestamp を取る）

use std::sync::Mutex;

use tracing::debug;
use ulid::Ulid;

use crate::domain::JobId;
use crate::ports::Clock;

/// IdGenerator は JobRecord の ID を生成
///
/// # 要件
/// - 同じ生成器から返る ID は必ず一意
/// - 時計の分解能に依存しない（同じミリ秒内に 2 回呼ばれても衝突しない）
pub trait IdGenerator: Send + Sync {
    fn generate_job_id(&self) -> JobId;
}

/// UlidGenerator は ULID ベースの ID 生成器
///
/// Clock の現在時刻 + ランダム部分で ULID を作り、
/// 直前に返した ULID 以下になった場合は直前の値を increment して返します。
/// これにより出力は厳密に単調増加になります。
pub struct UlidGenerator<C> {
    clock: C,
    last: Mutex<Option<Ulid>>,
}

impl<C: Clock> UlidGenerator<C> {
    /// 新しい UlidGenerator を作成
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            last: Mutex::new(None),
        }
    }

    fn next_ulid(&self) -> Ulid {
        let timestamp_ms = self.clock.now().timestamp_millis().max(0) as u64;
        let candidate = Ulid::from_parts(timestamp_ms, rand::random());

        let mut last = self.last.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let next = match *last {
            Some(prev) if candidate <= prev => match prev.increment() {
                Some(bumped) => {
                    debug!(%prev, "clock did not advance, incrementing previous id");
                    bumped
                }
                // Random part exhausted within this millisecond: move to the next one.
                None => Ulid::from_parts(prev.timestamp_ms() + 1, 0),
            },
            _ => candidate,
        };
        *last = Some(next);
        next
    }
}

impl<C: Clock> IdGenerator for UlidGenerator<C> {
    fn generate_job_id(&self) -> JobId {
        JobId::from(self.next_ulid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{FixedClock, SystemClock};
    use chrono::{TimeZone, Utc};

    #[test]
    fn ulid_generator_generates_unique_ids() {
        let id_gen = UlidGenerator::new(SystemClock);

        let id1 = id_gen.generate_job_id();
        let id2 = id_gen.generate_job_id();
        let id3 = id_gen.generate_job_id();

        assert_ne!(id1, id2);
        assert_ne!(id2, id3);
        assert_ne!(id1, id3);
    }

    #[test]
    fn fixed_clock_ids_are_strictly_increasing() {
        let fixed_time = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let id_gen = UlidGenerator::new(FixedClock::new(fixed_time));

        let ids: Vec<JobId> = (0..100).map(|_| id_gen.generate_job_id()).collect();
        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }

        // timestamp 部分は固定時刻のまま
        assert_eq!(
            ids[0].as_ulid().timestamp_ms(),
            fixed_time.timestamp_millis() as u64
        );
    }

    #[test]
    fn clock_going_backwards_still_increases() {
        let later = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        let earlier = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

        let id_gen = UlidGenerator::new(FixedClock::new(later));
        let first = id_gen.generate_job_id();

        let rewound = UlidGenerator {
            clock: FixedClock::new(earlier),
            last: Mutex::new(Some(first.as_ulid())),
        };
        let second = rewound.generate_job_id();

        assert!(first < second);
    }

    #[test]
    fn exhausted_random_part_rolls_into_next_millisecond() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let max_in_tick = Ulid::from_parts(at.timestamp_millis() as u64, (1u128 << 80) - 1);

        let id_gen = UlidGenerator {
            clock: FixedClock::new(at),
            last: Mutex::new(Some(max_in_tick)),
        };
        let next = id_gen.generate_job_id().as_ulid();

        assert!(next > max_in_tick);
        assert_eq!(next.timestamp_ms(), max_in_tick.timestamp_ms() + 1);
    }
}
