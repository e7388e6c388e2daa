//! Debounced sentinel visibility trigger.

use pawmatch::dashboard::trigger::{ScrollTrigger, VisibilityEvent};
use std::time::{Duration, Instant};

const DELAY: Duration = Duration::from_millis(200);

#[test]
fn test_fires_once_after_debounce() {
    let mut trigger = ScrollTrigger::new(DELAY);
    let sentinel = trigger.subscribe();
    let t0 = Instant::now();

    assert_eq!(
        trigger.observe(sentinel, true, t0),
        Some(VisibilityEvent::BecameVisible)
    );
    assert_eq!(trigger.next_deadline(), Some(t0 + DELAY));
    assert!(!trigger.poll(t0 + Duration::from_millis(199)));
    assert!(trigger.poll(t0 + DELAY));
    assert!(!trigger.poll(t0 + Duration::from_secs(5)));
    assert_eq!(trigger.next_deadline(), None);
}

#[test]
fn test_repeated_visible_reports_do_not_rearm() {
    let mut trigger = ScrollTrigger::new(DELAY);
    let sentinel = trigger.subscribe();
    let t0 = Instant::now();

    trigger.observe(sentinel, true, t0);
    assert_eq!(trigger.observe(sentinel, true, t0 + Duration::from_millis(150)), None);
    assert_eq!(trigger.next_deadline(), Some(t0 + DELAY));
    assert!(trigger.poll(t0 + DELAY));

    // Still visible: no further transition, no further fire.
    trigger.observe(sentinel, true, t0 + Duration::from_millis(300));
    assert!(!trigger.poll(t0 + Duration::from_secs(1)));
}

#[test]
fn test_hiding_before_deadline_still_fires() {
    let mut trigger = ScrollTrigger::new(DELAY);
    let sentinel = trigger.subscribe();
    let t0 = Instant::now();

    trigger.observe(sentinel, true, t0);
    assert_eq!(
        trigger.observe(sentinel, false, t0 + Duration::from_millis(50)),
        Some(VisibilityEvent::BecameHidden)
    );
    assert_eq!(
        trigger.observe(sentinel, false, t0 + Duration::from_millis(60)),
        None
    );
    assert!(trigger.poll(t0 + DELAY));
}

#[test]
fn test_reentering_rearms_after_fire() {
    let mut trigger = ScrollTrigger::new(DELAY);
    let sentinel = trigger.subscribe();
    let t0 = Instant::now();

    trigger.observe(sentinel, true, t0);
    assert!(trigger.poll(t0 + DELAY));

    let t1 = t0 + Duration::from_millis(400);
    trigger.observe(sentinel, false, t1);
    trigger.observe(sentinel, true, t1 + Duration::from_millis(10));
    assert!(trigger.poll(t1 + Duration::from_millis(210)));
}

#[test]
fn test_unsubscribe_drops_pending_fire() {
    let mut trigger = ScrollTrigger::new(DELAY);
    let sentinel = trigger.subscribe();
    let t0 = Instant::now();

    trigger.observe(sentinel, true, t0);
    trigger.unsubscribe(sentinel);

    assert!(!trigger.poll(t0 + DELAY));
    assert_eq!(trigger.observe(sentinel, true, t0 + DELAY), None);
}

#[test]
fn test_fresh_subscription_starts_hidden() {
    let mut trigger = ScrollTrigger::new(DELAY);
    let first = trigger.subscribe();
    let t0 = Instant::now();
    trigger.observe(first, true, t0);
    trigger.unsubscribe(first);

    let second = trigger.subscribe();
    assert_ne!(first, second);
    assert_eq!(
        trigger.observe(second, true, t0),
        Some(VisibilityEvent::BecameVisible)
    );
}
