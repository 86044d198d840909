use super::*;

#[test]
fn three_quick_taps_toggle_the_flag() {
    let mut tracker = TapTracker::default();
    assert!(!tracker.revealed());
    assert!(!tracker.pointer_down(0.0, Point::new(100.0, 100.0)));
    assert!(!tracker.pointer_down(120.0, Point::new(105.0, 98.0)));
    assert!(tracker.pointer_down(250.0, Point::new(98.0, 103.0)));
    assert!(tracker.revealed());
}

#[test]
fn three_more_taps_toggle_back() {
    let mut tracker = TapTracker::default();
    for t in [0.0, 100.0, 200.0] {
        tracker.pointer_down(t, Point::new(10.0, 10.0));
    }
    assert!(tracker.revealed());
    for t in [1000.0, 1100.0, 1200.0] {
        tracker.pointer_down(t, Point::new(10.0, 10.0));
    }
    assert!(!tracker.revealed());
}

#[test]
fn slow_taps_never_accumulate() {
    let mut tracker = TapTracker::default();
    // Each tap is outside the window of the previous one, so the buffer
    // keeps shrinking back to a single entry.
    assert!(!tracker.pointer_down(0.0, Point::new(10.0, 10.0)));
    assert!(!tracker.pointer_down(500.0, Point::new(10.0, 10.0)));
    assert!(!tracker.pointer_down(1000.0, Point::new(10.0, 10.0)));
    assert!(!tracker.pointer_down(1500.0, Point::new(10.0, 10.0)));
    assert!(!tracker.revealed());
}

#[test]
fn spread_out_taps_do_not_toggle() {
    let mut tracker = TapTracker::default();
    assert!(!tracker.pointer_down(0.0, Point::new(0.0, 0.0)));
    assert!(!tracker.pointer_down(100.0, Point::new(200.0, 0.0)));
    assert!(!tracker.pointer_down(200.0, Point::new(400.0, 0.0)));
    assert!(!tracker.revealed());
}

#[test]
fn taps_on_the_radius_boundary_count() {
    let mut tracker = TapTracker::new(DEFAULT_WINDOW_MS, DEFAULT_RADIUS_PX);
    assert!(!tracker.pointer_down(0.0, Point::new(0.0, 0.0)));
    assert!(!tracker.pointer_down(100.0, Point::new(DEFAULT_RADIUS_PX, 0.0)));
    assert!(tracker.pointer_down(200.0, Point::new(0.0, DEFAULT_RADIUS_PX)));
}

#[test]
fn buffer_clears_after_a_toggle() {
    let mut tracker = TapTracker::default();
    for t in [0.0, 50.0, 100.0] {
        tracker.pointer_down(t, Point::new(10.0, 10.0));
    }
    assert!(tracker.revealed());
    // Two taps right after the toggle must not count the pre-toggle ones.
    assert!(tracker.pointer_down(150.0, Point::new(10.0, 10.0)));
    assert!(tracker.pointer_down(200.0, Point::new(10.0, 10.0)));
    assert!(tracker.revealed());
}

#[test]
fn custom_window_and_radius_are_honored() {
    let mut tracker = TapTracker::new(50.0, 5.0);
    assert!(!tracker.pointer_down(0.0, Point::new(0.0, 0.0)));
    // Within the default window but outside the custom one.
    assert!(!tracker.pointer_down(100.0, Point::new(0.0, 0.0)));
    assert!(!tracker.pointer_down(140.0, Point::new(0.0, 0.0)));
    // Fresh burst inside the tight window and radius toggles.
    let mut tight = TapTracker::new(50.0, 5.0);
    for t in [0.0, 10.0, 20.0] {
        tight.pointer_down(t, Point::new(1.0, 1.0));
    }
    assert!(tight.revealed());
}
