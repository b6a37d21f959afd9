//! Cooperative cancellation for long conversions.

use crate::error::{BomTreeError, Result};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

/// Cancellation flag and deadline, checked at every node and edge boundary.
///
/// The default value never fires.
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    flag: Option<Arc<AtomicBool>>,
    deadline: Option<Instant>,
}

impl Interrupt {
    /// An interrupt that never fires
    #[must_use]
    pub const fn none() -> Self {
        Self {
            flag: None,
            deadline: None,
        }
    }

    /// Abort once `flag` is set to `true`
    #[must_use]
    pub fn with_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.flag = Some(flag);
        self
    }

    /// Abort once `deadline` has passed
    #[must_use]
    pub const fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Whether the interrupt has fired
    #[must_use]
    pub fn is_triggered(&self) -> bool {
        self.flag
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
            || self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// Return a `Cancelled` error naming `stage` if the interrupt fired
    pub fn check(&self, stage: &str) -> Result<()> {
        if let Some(flag) = &self.flag
            && flag.load(Ordering::Relaxed)
        {
            return Err(BomTreeError::cancelled(format!("cancelled during {stage}")));
        }
        if let Some(deadline) = self.deadline
            && Instant::now() >= deadline
        {
            return Err(BomTreeError::cancelled(format!(
                "deadline exceeded during {stage}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_default_never_fires() {
        let interrupt = Interrupt::default();
        assert!(!interrupt.is_triggered());
        assert!(interrupt.check("registry population").is_ok());
    }

    #[test]
    fn test_flag_fires() {
        let flag = Arc::new(AtomicBool::new(false));
        let interrupt = Interrupt::none().with_flag(Arc::clone(&flag));
        assert!(interrupt.check("edges").is_ok());

        flag.store(true, Ordering::Relaxed);
        match interrupt.check("edges") {
            Err(BomTreeError::Cancelled { context }) => assert!(context.contains("edges")),
            other => panic!("Expected Cancelled, got {other:?}"),
        }
    }

    #[test]
    fn test_past_deadline_fires() {
        let past = Instant::now()
            .checked_sub(Duration::from_secs(1))
            .unwrap_or_else(Instant::now);
        let interrupt = Interrupt::none().with_deadline(past);
        assert!(interrupt.is_triggered());
        assert!(interrupt.check("nodes").is_err());
    }

    #[test]
    fn test_future_deadline_does_not_fire() {
        let interrupt = Interrupt::none().with_deadline(Instant::now() + Duration::from_secs(3600));
        assert!(interrupt.check("nodes").is_ok());
    }
}
