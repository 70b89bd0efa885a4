//! 단일 스레드 협력형 타이머 큐
//!
//! 가상 시계(세션 시작 후 경과 시간) 위에서 지연 작업을 예약합니다.
//! 같은 마감 시각의 작업은 예약 순서대로 실행되고, 취소된 작업은 건너뜁니다.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::time::Duration;

/// 예약된 작업 핸들 (취소용)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug)]
pub struct Scheduler<T> {
    now: Duration,
    next_seq: u64,
    queue: BinaryHeap<Reverse<(Duration, u64)>>,
    tasks: HashMap<u64, T>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            queue: BinaryHeap::new(),
            tasks: HashMap::new(),
        }
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 현재 가상 시각
    pub fn now(&self) -> Duration {
        self.now
    }

    /// `delay` 뒤에 실행할 작업 예약
    pub fn schedule(&mut self, delay: Duration, task: T) -> TimerHandle {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Reverse((self.now + delay, seq)));
        self.tasks.insert(seq, task);
        TimerHandle(seq)
    }

    /// 아직 실행되지 않은 작업 취소 (이미 실행/취소됐으면 false)
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.tasks.remove(&handle.0).is_some()
    }

    /// `until`까지 마감된 다음 작업을 꺼냄
    ///
    /// 꺼낸 작업의 마감 시각으로 시계를 옮기므로, 작업 안에서 예약한
    /// 후속 작업의 지연은 그 마감 시각 기준이 됩니다.
    pub fn pop_due(&mut self, until: Duration) -> Option<T> {
        while let Some(&Reverse((deadline, seq))) = self.queue.peek() {
            if deadline > until {
                return None;
            }
            self.queue.pop();
            if let Some(task) = self.tasks.remove(&seq) {
                self.now = self.now.max(deadline);
                return Some(task);
            }
        }
        None
    }

    /// 마감된 작업을 모두 꺼낸 뒤 시계를 `until`로 옮김
    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    /// 다음 유효 작업의 마감 시각
    pub fn next_deadline(&mut self) -> Option<Duration> {
        while let Some(&Reverse((deadline, seq))) = self.queue.peek() {
            if self.tasks.contains_key(&seq) {
                return Some(deadline);
            }
            self.queue.pop();
        }
        None
    }
}
