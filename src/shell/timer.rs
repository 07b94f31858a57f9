//! 周期刷新计时器
//!
//! 由界面线程在每帧调用 [`RefreshTimer::poll`]。到期后无论刷新是否真正执行都重新排期，
//! 下一次截止时间从上一次截止时间顺延，避免节奏漂移。

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct RefreshTimer {
    period: Duration,
    deadline: Instant,
}

impl RefreshTimer {
    /// 从 `now` 开始计时，第一次在一个周期后到期
    pub fn new(period: Duration, now: Instant) -> Self {
        Self {
            period,
            deadline: now + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// 到期时返回 `true` 并排定下一次截止时间
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.deadline {
            return false;
        }

        self.deadline += self.period;
        // 停顿超过一个周期时从当前时刻重新计时，不补发
        if self.deadline <= now {
            self.deadline = now + self.period;
        }
        true
    }

    /// 距离下一次到期的时间
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_secs(30);

    #[test]
    fn test_fires_once_per_period() {
        let start = Instant::now();
        let mut timer = RefreshTimer::new(PERIOD, start);

        assert!(!timer.poll(start));
        assert!(!timer.poll(start + Duration::from_secs(29)));
        assert!(timer.poll(start + PERIOD));
        assert!(!timer.poll(start + PERIOD));
        assert_eq!(timer.deadline(), start + PERIOD * 2);
    }

    #[test]
    fn test_late_poll_keeps_cadence() {
        let start = Instant::now();
        let mut timer = RefreshTimer::new(PERIOD, start);

        assert!(timer.poll(start + Duration::from_secs(31)));
        assert_eq!(timer.deadline(), start + PERIOD * 2);
    }

    #[test]
    fn test_long_stall_does_not_burst() {
        let start = Instant::now();
        let mut timer = RefreshTimer::new(PERIOD, start);
        let resumed = start + Duration::from_secs(300);

        assert!(timer.poll(resumed));
        assert!(!timer.poll(resumed + Duration::from_secs(1)));
        assert_eq!(timer.deadline(), resumed + PERIOD);
    }

    #[test]
    fn test_remaining() {
        let start = Instant::now();
        let timer = RefreshTimer::new(PERIOD, start);

        assert_eq!(timer.remaining(start + Duration::from_secs(10)), Duration::from_secs(20));
        assert_eq!(timer.remaining(start + Duration::from_secs(40)), Duration::ZERO);
    }
}
