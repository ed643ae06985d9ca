// crates/sbb-core/tests/scheduler.rs

use sbb_core::clock::{Clock, ManualClock};
use sbb_core::scheduler::Scheduler;

#[test]
fn fires_only_after_strictly_more_than_interval() {
    let mut s = Scheduler::new(1000);
    assert!(!s.should_sample(0));
    assert!(!s.should_sample(1000));
    assert!(s.should_sample(1001));
    assert_eq!(s.last_sample(), 1001);

    assert!(!s.should_sample(1500));
    assert!(!s.should_sample(2001));
    assert!(s.should_sample(2002));
}

#[test]
fn starvation_yields_a_single_sample() {
    let mut s = Scheduler::armed(1000, 0);
    assert!(s.should_sample(60_000));
    assert!(!s.should_sample(60_001));
    assert!(!s.should_sample(61_000));
    assert!(s.should_sample(61_001));
}

#[test]
fn survives_clock_wraparound() {
    let mut s = Scheduler::armed(100, u64::MAX - 50);
    assert!(!s.should_sample(u64::MAX));
    assert!(!s.should_sample(49));
    assert!(s.should_sample(60));
    assert_eq!(s.last_sample(), 60);
}

#[test]
fn interval_change_applies_to_next_check() {
    let mut s = Scheduler::armed(1000, 0);
    s.set_interval(100);
    assert_eq!(s.interval(), 100);
    assert!(s.should_sample(101));
}

#[test]
fn manual_clock_moves_on_request() {
    let clock = ManualClock::new(5);
    assert_eq!(clock.now_millis(), 5);
    clock.advance(10);
    assert_eq!(clock.now_millis(), 15);
    clock.set(2);
    assert_eq!((&clock).now_millis(), 2);
}
