//! Scroll-intersection trigger for infinite scrolling.
//!
//! A sentinel is registered once, then fed its visibility every time the
//! viewport changes. Only a hidden→visible transition arms the trigger;
//! it fires once the debounce delay has elapsed, regardless of what the
//! sentinel did in between.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Handle for a registered sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SentinelId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityEvent {
    BecameVisible,
    BecameHidden,
}

#[derive(Debug, Default)]
struct Sentinel {
    visible: bool,
    fire_at: Option<Instant>,
}

#[derive(Debug)]
pub struct ScrollTrigger {
    delay: Duration,
    sentinels: HashMap<SentinelId, Sentinel>,
    next_id: u64,
}

impl ScrollTrigger {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            sentinels: HashMap::new(),
            next_id: 0,
        }
    }

    /// Register a sentinel. It starts out hidden.
    pub fn subscribe(&mut self) -> SentinelId {
        let id = SentinelId(self.next_id);
        self.next_id += 1;
        self.sentinels.insert(id, Sentinel::default());
        id
    }

    /// Stop observing `id`; a pending fire is dropped with it.
    pub fn unsubscribe(&mut self, id: SentinelId) {
        self.sentinels.remove(&id);
    }

    /// Report the current visibility of a sentinel.
    ///
    /// Returns the transition, if any. Repeated reports of the same
    /// visibility are ignored.
    pub fn observe(&mut self, id: SentinelId, visible: bool, now: Instant) -> Option<VisibilityEvent> {
        let delay = self.delay;
        let sentinel = self.sentinels.get_mut(&id)?;
        if sentinel.visible == visible {
            return None;
        }
        sentinel.visible = visible;

        if visible {
            if sentinel.fire_at.is_none() {
                sentinel.fire_at = Some(now + delay);
            }
            Some(VisibilityEvent::BecameVisible)
        } else {
            Some(VisibilityEvent::BecameHidden)
        }
    }

    /// Returns `true` once per armed sentinel whose delay has elapsed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let mut fired = false;
        for sentinel in self.sentinels.values_mut() {
            if sentinel.fire_at.is_some_and(|at| now >= at) {
                sentinel.fire_at = None;
                fired = true;
            }
        }
        fired
    }

    /// Earliest pending fire time, for scheduling the next wake-up.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.sentinels.values().filter_map(|s| s.fire_at).min()
    }
}
