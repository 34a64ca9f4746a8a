use std::{
    fmt,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread,
    time::Duration,
};

use crate::error::{Result, SimilarityError};

/// Cost charged once per processing unit of a scan
/// (a chunk pair, a character, a word pair).
///
/// Scans only produce a timing figure; the cost stands in for real per-unit
/// work. Any `Fn()` closure can be used as a cost.
pub trait UnitCost: Send + Sync {
    fn charge(&self);
}

impl<F> UnitCost for F
where
    F: Fn() + Send + Sync,
{
    fn charge(&self) {
        self()
    }
}

/// Free processing, the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCost;

impl UnitCost for NoCost {
    #[inline]
    fn charge(&self) {}
}

/// Block the calling thread for a fixed duration per unit.
#[derive(Debug, Clone, Copy)]
pub struct SleepCost(pub Duration);

impl SleepCost {
    pub fn from_millis(millis: u64) -> Self {
        SleepCost(Duration::from_millis(millis))
    }
}

impl UnitCost for SleepCost {
    fn charge(&self) {
        if !self.0.is_zero() {
            thread::sleep(self.0);
        }
    }
}

/// Shared cancellation flag, checked between scan units.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Per-call execution context of a scan.
#[derive(Clone)]
pub struct ScanContext {
    unit_cost: Arc<dyn UnitCost>,
    cancel: Option<CancelFlag>,
}

impl ScanContext {
    pub fn new() -> Self {
        Self {
            unit_cost: Arc::new(NoCost),
            cancel: None,
        }
    }

    pub fn with_unit_cost<C>(mut self, cost: C) -> Self
    where
        C: UnitCost + 'static,
    {
        self.unit_cost = Arc::new(cost);
        self
    }

    /// Sleep `millis` per unit; 0 means no pacing.
    pub fn with_pace_millis(self, millis: u64) -> Self {
        if millis == 0 {
            self.with_unit_cost(NoCost)
        } else {
            self.with_unit_cost(SleepCost::from_millis(millis))
        }
    }

    pub fn with_cancel_flag(mut self, flag: CancelFlag) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Account for one processing unit.
    /// Fails with `Cancelled` once the flag is raised.
    #[inline]
    pub fn step(&self) -> Result<()> {
        if self.cancel.as_ref().is_some_and(CancelFlag::is_cancelled) {
            return Err(SimilarityError::Cancelled);
        }
        self.unit_cost.charge();
        Ok(())
    }
}

impl Default for ScanContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ScanContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScanContext")
            .field("cancel", &self.cancel)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn closure_cost_is_charged_per_step() {
        let counter = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&counter);
        let ctx = ScanContext::new().with_unit_cost(move || {
            seen.fetch_add(1, Ordering::Relaxed);
        });
        for _ in 0..3 {
            ctx.step().unwrap();
        }
        assert_eq!(counter.load(Ordering::Relaxed), 3);
    }

    #[test]
    fn raised_flag_stops_the_next_step() {
        let flag = CancelFlag::new();
        let ctx = ScanContext::new().with_cancel_flag(flag.clone());
        assert!(ctx.step().is_ok());
        flag.cancel();
        assert_eq!(ctx.step(), Err(SimilarityError::Cancelled));
    }
}
