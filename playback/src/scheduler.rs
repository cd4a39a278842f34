use std::collections::BTreeSet;

pub type FrameHandle = u64;

/// The host's display-refresh callback primitive, the one capability the
/// driver needs from its environment. A scheduled frame fires at most once,
/// by the host calling `AnimationDriver::on_frame` with the handle and the
/// current time; cancelling first drops it instead.
pub trait FrameScheduler {
    fn schedule_frame(&mut self) -> FrameHandle;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Deterministic scheduler for tests and headless hosts: the caller drains
/// pending handles and invokes the driver with explicit timestamps.
pub struct ManualScheduler {
    next_handle: FrameHandle,
    pending: BTreeSet<FrameHandle>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self {
            next_handle: 0,
            pending: BTreeSet::new(),
        }
    }

    /// The oldest still-scheduled frame, removed from the queue.
    pub fn take_pending(&mut self) -> Option<FrameHandle> {
        let handle = *self.pending.iter().next()?;
        self.pending.remove(&handle);
        Some(handle)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler for ManualScheduler {
    fn schedule_frame(&mut self) -> FrameHandle {
        let handle = self.next_handle;
        self.next_handle += 1;
        self.pending.insert(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.remove(&handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_and_drain() {
        let mut scheduler = ManualScheduler::new();
        assert_eq!(scheduler.take_pending(), None);

        let a = scheduler.schedule_frame();
        let b = scheduler.schedule_frame();
        assert_ne!(a, b);
        assert_eq!(scheduler.pending_count(), 2);

        assert_eq!(scheduler.take_pending(), Some(a));
        assert_eq!(scheduler.take_pending(), Some(b));
        assert_eq!(scheduler.take_pending(), None);
    }

    #[test]
    fn test_cancel_drops_frame() {
        let mut scheduler = ManualScheduler::new();
        let a = scheduler.schedule_frame();
        scheduler.cancel_frame(a);
        assert_eq!(scheduler.pending_count(), 0);
        assert_eq!(scheduler.take_pending(), None);
    }
}
