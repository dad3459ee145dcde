use std::time::{Duration, Instant};

use rand::Rng;
use vitrine_core::{
    CarouselController, CenteringStrategy, ControllerSettings, GestureOutcome,
    NavKey, StripGeometry, SwipeDirection,
};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn mounted(len: usize, t0: Instant) -> CarouselController {
    CarouselController::mount(len, ControllerSettings::default(), t0)
}

#[test]
fn next_cycles_back_after_len_steps() {
    let mut rng = rand::rng();
    for len in 1..=12 {
        let t0 = Instant::now();
        let mut controller = mounted(len, t0);
        let start = rng.random_range(0..len);
        controller.select_index(start, t0).unwrap();

        for step in 0..len {
            controller.next(t0 + ms(step as u64));
        }
        assert_eq!(controller.active_index(), Some(start), "len={len}");
    }
}

#[test]
fn prev_undoes_next() {
    for len in 1..=9 {
        for start in 0..len {
            let t0 = Instant::now();
            let mut controller = mounted(len, t0);
            controller.select_index(start, t0).unwrap();
            controller.next(t0);
            controller.prev(t0);
            assert_eq!(controller.active_index(), Some(start));
        }
    }
}

#[test]
fn select_index_sets_any_valid_index() {
    let mut rng = rand::rng();
    let t0 = Instant::now();
    let mut controller = mounted(20, t0);
    for _ in 0..100 {
        let k = rng.random_range(0..20);
        controller.select_index(k, t0).unwrap();
        assert_eq!(controller.active_index(), Some(k));
    }
}

#[test]
fn swipe_right_to_left_moves_forward() {
    let t0 = Instant::now();
    let mut controller = mounted(5, t0);
    assert_eq!(controller.active_index(), Some(2));

    controller.pointer_pressed(400.0, t0);
    assert_eq!(controller.drag_start_x(), Some(400.0));
    let outcome = controller.pointer_released(340.0, None, t0 + ms(80));

    assert_eq!(outcome, GestureOutcome::Swipe(SwipeDirection::Forward));
    assert_eq!(controller.active_index(), Some(3));
    assert_eq!(controller.drag_start_x(), None);
}

#[test]
fn swipe_left_to_right_moves_backward() {
    let t0 = Instant::now();
    let mut controller = mounted(5, t0);

    controller.pointer_pressed(340.0, t0);
    let outcome = controller.pointer_released(400.0, None, t0 + ms(80));

    assert_eq!(outcome, GestureOutcome::Swipe(SwipeDirection::Backward));
    assert_eq!(controller.active_index(), Some(1));
}

#[test]
fn short_drag_resolves_as_click_on_card_under_pointer() {
    let t0 = Instant::now();
    let mut controller = mounted(5, t0);
    let geometry = StripGeometry::settled(&controller.settings().metrics, 5, 2);
    let card4 = geometry.card(4).unwrap();
    controller.set_viewport(1_000.0, card4.start - 200.0);

    controller.pointer_pressed(240.0, t0);
    let target = controller.card_at(220.0, t0);
    assert_eq!(target, Some(4));
    let outcome = controller.pointer_released(220.0, target, t0 + ms(50));

    assert_eq!(outcome, GestureOutcome::Click);
    assert_eq!(controller.active_index(), Some(4));
    assert_eq!(controller.drag_start_x(), None);
}

#[test]
fn click_in_gap_between_cards_changes_nothing() {
    let t0 = Instant::now();
    let mut controller = mounted(5, t0);
    controller.pointer_pressed(10.0, t0);
    let outcome = controller.pointer_released(12.0, None, t0);
    assert_eq!(outcome, GestureOutcome::Click);
    assert_eq!(controller.active_index(), Some(2));
}

#[test]
fn leaving_mid_drag_cancels_without_navigation() {
    let t0 = Instant::now();
    let mut controller = mounted(5, t0);
    controller.pointer_pressed(400.0, t0);
    controller.pointer_left(t0 + ms(10));

    assert_eq!(controller.drag_start_x(), None);
    assert!(!controller.is_paused());
    let outcome = controller.pointer_released(100.0, None, t0 + ms(20));
    assert_eq!(outcome, GestureOutcome::Ignored);
    assert_eq!(controller.active_index(), Some(2));
}

#[test]
fn autoplay_advances_once_per_interval() {
    let t0 = Instant::now();
    let mut controller = mounted(5, t0);
    let mut advances = 0;

    // Poll every 50ms for 9.2 seconds.
    for step in 1..=184 {
        if controller.tick(t0 + ms(step * 50)).advanced {
            advances += 1;
        }
    }

    assert_eq!(advances, 3);
    // 2 -> 3 -> 4 -> 0
    assert_eq!(controller.active_index(), Some(0));
}

#[test]
fn autoplay_is_silent_while_paused() {
    let t0 = Instant::now();
    let mut controller = mounted(5, t0);
    controller.pointer_entered(t0 + ms(100));
    assert!(controller.is_paused());

    for step in 1..=200 {
        assert!(!controller.tick(t0 + ms(step * 50)).advanced);
    }
    assert_eq!(controller.active_index(), Some(2));
}

#[test]
fn resuming_restarts_a_full_interval() {
    let t0 = Instant::now();
    let mut controller = mounted(5, t0);
    controller.pointer_entered(t0 + ms(2_900));
    controller.pointer_left(t0 + ms(4_000));

    assert!(!controller.tick(t0 + ms(6_999)).advanced);
    assert!(controller.tick(t0 + ms(7_000)).advanced);
}

#[test]
fn keyboard_pauses_and_only_pointer_leave_resumes() {
    let t0 = Instant::now();
    let mut controller = mounted(5, t0);

    assert!(controller.key_pressed(NavKey::Right, t0));
    assert_eq!(controller.active_index(), Some(3));
    assert!(controller.is_paused());

    assert!(controller.key_pressed(NavKey::Left, t0 + ms(10)));
    assert!(!controller.key_pressed(NavKey::Other, t0 + ms(20)));
    assert_eq!(controller.active_index(), Some(2));

    // Neither time nor further clicks un-pause.
    assert!(!controller.tick(t0 + ms(10_000)).advanced);
    controller.pointer_pressed(100.0, t0 + ms(10_010));
    controller.pointer_released(100.0, None, t0 + ms(10_020));
    assert!(controller.is_paused());

    controller.pointer_left(t0 + ms(10_030));
    assert!(!controller.is_paused());
    assert!(controller.tick(t0 + ms(13_030)).advanced);
}

#[test]
fn manual_navigation_keeps_autoplay_schedule() {
    let t0 = Instant::now();
    let settings = ControllerSettings {
        centering: CenteringStrategy::SettleDelay,
        ..ControllerSettings::default()
    };
    let mut controller = CarouselController::mount(5, settings, t0);
    controller.next(t0 + ms(2_000));
    assert!(controller.tick(t0 + ms(3_000)).advanced);
    assert_eq!(controller.active_index(), Some(4));
}

#[test]
fn disabled_autoplay_never_advances() {
    let t0 = Instant::now();
    let settings = ControllerSettings {
        autoplay: false,
        ..ControllerSettings::default()
    };
    let mut controller = CarouselController::mount(5, settings, t0);
    controller.pointer_entered(t0);
    controller.pointer_left(t0 + ms(1));
    for step in 1..=100 {
        assert!(!controller.tick(t0 + ms(step * 100)).advanced);
    }
}

#[test]
fn unmount_stops_all_mutation() {
    let t0 = Instant::now();
    let settings = ControllerSettings {
        centering: CenteringStrategy::SettleDelay,
        ..ControllerSettings::default()
    };
    let mut controller = CarouselController::mount(5, settings, t0);
    controller.set_viewport(1_000.0, 0.0);
    controller.next(t0 + ms(100));
    controller.pointer_pressed(50.0, t0 + ms(200));
    controller.unmount();

    let before = controller.active_index();
    assert!(!controller.has_pending_timers());
    assert_eq!(controller.next_deadline(), None);
    assert_eq!(controller.drag_start_x(), None);

    for step in 1..=100 {
        assert!(controller.tick(t0 + ms(step * 100)).is_idle());
    }
    assert!(!controller.next(t0));
    assert!(!controller.prev(t0));
    assert!(!controller.key_pressed(NavKey::Right, t0));
    controller.pointer_pressed(0.0, t0);
    assert_eq!(
        controller.pointer_released(500.0, Some(0), t0),
        GestureOutcome::Ignored
    );
    assert!(controller.select_index(0, t0).is_err());
    controller.pointer_left(t0);
    controller.set_viewport(10.0, 10.0);

    assert_eq!(controller.active_index(), before);
    assert_eq!(controller.viewport().map(|v| v.width), Some(1_000.0));
    assert!(!controller.is_mounted());
}
