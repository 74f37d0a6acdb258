//! Clock and random implementations.

use crate::infrastructure::ports::{ClockPort, RandomPort};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// System clock - uses real time.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// System random - uses real randomness.
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPort for SystemRandom {
    fn unit(&self) -> f64 {
        use rand::Rng;
        rand::thread_rng().gen::<f64>()
    }

    fn gen_range(&self, min: i64, max: i64) -> i64 {
        use rand::Rng;
        if min >= max {
            return min;
        }
        rand::thread_rng().gen_range(min..=max)
    }

    fn gen_uuid(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Clock for testing that only moves when told to.
#[cfg(test)]
pub struct ManualClock(std::sync::Mutex<DateTime<Utc>>);

#[cfg(test)]
impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self(std::sync::Mutex::new(start))
    }

    pub fn advance(&self, by: chrono::Duration) {
        let mut now = self.0.lock().unwrap();
        *now += by;
    }
}

#[cfg(test)]
impl ClockPort for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}

/// Fixed random for testing.
///
/// `unit` always yields the stored draw; `gen_range` yields the lower bound.
#[cfg(test)]
pub struct FixedRandom(pub f64);

#[cfg(test)]
impl RandomPort for FixedRandom {
    fn unit(&self) -> f64 {
        self.0
    }

    fn gen_range(&self, min: i64, _max: i64) -> i64 {
        min
    }

    fn gen_uuid(&self) -> Uuid {
        Uuid::nil()
    }
}

/// Random for testing that replays unit draws in order, repeating the last.
#[cfg(test)]
pub struct SequenceRandom {
    draws: Vec<f64>,
    next: std::sync::atomic::AtomicUsize,
}

#[cfg(test)]
impl SequenceRandom {
    pub fn new(draws: Vec<f64>) -> Self {
        Self {
            draws,
            next: std::sync::atomic::AtomicUsize::new(0),
        }
    }
}

#[cfg(test)]
impl RandomPort for SequenceRandom {
    fn unit(&self) -> f64 {
        let i = self.next.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        self.draws
            .get(i)
            .or(self.draws.last())
            .copied()
            .unwrap_or(0.0)
    }

    fn gen_range(&self, min: i64, max: i64) -> i64 {
        let span = (max - min) as f64;
        min + (self.unit() * (span + 1.0)).floor().min(span) as i64
    }

    fn gen_uuid(&self) -> Uuid {
        Uuid::nil()
    }
}
