use std::cell::RefCell;
use std::rc::Rc;

use rebound_scroller::{
    names, Axis, Bounds, ConfigDiagnostic, Easing, EventArgs, MomentumResult, PluginError, Point,
    ScrollerConfig, ScrollerError,
};
use rebound_testing::{ScrollTestRule, TestHost, TransitionRecord};

fn vertical(config: ScrollerConfig) -> ScrollTestRule {
    ScrollTestRule::new(TestHost::vertical(400.0, 1000.0), config)
}

#[test]
fn scrolling_to_the_current_position_does_nothing() {
    let mut rule = vertical(ScrollerConfig::new());
    let events = rule.record(&[names::SCROLL, names::SCROLL_END]);
    rule.host().clear_commits();

    rule.scroller_mut()
        .scroll_to(0.0, 0.0, Some(300), None)
        .expect("scroll");
    assert!(rule.host().commits().is_empty());
    assert!(events.events().is_empty());
    assert_eq!(rule.host().pending_tick_count(), 0);
}

#[test]
fn jumps_commit_notify_and_end_at_once() {
    let mut rule = vertical(ScrollerConfig::new());
    let events = rule.record(&[names::SCROLL, names::SCROLL_END]);

    rule.scroller_mut()
        .scroll_to(0.0, -100.0, None, None)
        .expect("scroll");
    assert_eq!(rule.host().last_commit(), Some(Point::new(0.0, -100.0)));
    assert_eq!(
        events.names(),
        vec![names::SCROLL.to_owned(), names::SCROLL_END.to_owned()]
    );
    assert!(!rule.scroller().is_in_motion());
}

#[test]
fn timed_scroll_interpolates_per_tick() {
    let mut rule = vertical(ScrollerConfig::new());
    let events = rule.record(&[names::SCROLL, names::SCROLL_END]);

    rule.scroller_mut()
        .scroll_to(0.0, -200.0, Some(300), Some(Easing::Linear))
        .expect("scroll");
    assert!(rule.scroller().is_in_motion());
    assert_eq!(rule.scroller().direction().y, 1);

    rule.advance_frame(150).expect("frame");
    assert_eq!(rule.position(), Point::new(0.0, -100.0));

    let frames = rule.pump_until_idle().expect("motion completes");
    assert!(frames > 0);
    assert_eq!(rule.position(), Point::new(0.0, -200.0));
    assert!(events.count(names::SCROLL) >= 2);
    assert_eq!(events.positions(names::SCROLL_END), vec![Point::new(0.0, -200.0)]);
}

#[test]
fn edge_helpers_keep_the_horizontal_position() {
    let mut rule = vertical(ScrollerConfig::new());
    rule.scroller_mut()
        .scroll_to_bottom(None, None)
        .expect("bottom");
    assert_eq!(rule.position(), Point::new(0.0, -600.0));

    rule.scroller_mut().scroll_to_top(None, None).expect("top");
    assert_eq!(rule.position(), Point::ZERO);
}

#[test]
fn host_transitions_carry_timed_motion() {
    let host = TestHost::vertical(400.0, 1000.0).with_transitions();
    let mut rule = ScrollTestRule::new(host, ScrollerConfig::new().with_use_transition(true));
    assert_eq!(
        rule.scroller().diagnostics(),
        &[ConfigDiagnostic::DebounceDisabledByTransition]
    );
    let events = rule.record(&[names::SCROLL_END]);

    rule.scroller_mut()
        .scroll_to(0.0, -200.0, Some(300), Some(Easing::EaseOut))
        .expect("scroll");
    assert_eq!(
        rule.host().transitions(),
        vec![TransitionRecord {
            target: Point::new(0.0, -200.0),
            duration_millis: 300,
            curve: Easing::EaseOut.bezier(),
        }]
    );
    assert_eq!(rule.host().pending_tick_count(), 0);
    assert_eq!(rule.position(), Point::new(0.0, -200.0));
    assert!(rule.scroller().is_in_motion());
    assert_eq!(events.count(names::SCROLL_END), 0);

    rule.finish_transition().expect("transition end");
    assert!(!rule.scroller().is_in_motion());
    assert_eq!(events.positions(names::SCROLL_END), vec![Point::new(0.0, -200.0)]);
}

#[test]
fn interrupted_transition_reads_back_the_rendered_position() {
    let host = TestHost::vertical(400.0, 1000.0).with_transitions();
    let mut rule = ScrollTestRule::new(host, ScrollerConfig::new().with_use_transition(true));
    rule.scroller_mut()
        .scroll_to(0.0, -400.0, Some(300), None)
        .expect("scroll");
    rule.host().set_rendered(Point::new(0.0, -300.0));

    rule.press(0.0, 0.0).expect("press");
    assert!(!rule.host().is_transition_running());
    assert_eq!(rule.position(), Point::new(0.0, -300.0));
    assert_eq!(rule.host().last_commit(), Some(Point::new(0.0, -300.0)));
}

#[test]
fn transition_request_without_host_support_falls_back_to_ticks() {
    let mut rule = vertical(ScrollerConfig::new().with_use_transition(true));
    assert_eq!(
        rule.scroller().diagnostics(),
        &[ConfigDiagnostic::TransitionUnsupported]
    );
    assert!(!rule.scroller().config().use_transition);
    assert!(rule.scroller().config().debounce);

    rule.scroller_mut()
        .scroll_to(0.0, -200.0, Some(300), None)
        .expect("scroll");
    assert_eq!(rule.host().pending_tick_count(), 1);
    assert!(rule.host().transitions().is_empty());
}

#[test]
fn lock_on_the_only_scrolling_axis_is_dropped() {
    let rule = vertical(ScrollerConfig::new().with_lock_on_direction(Some(Axis::Vertical)));
    assert_eq!(
        rule.scroller().diagnostics(),
        &[ConfigDiagnostic::DirectionLockDisabled {
            axis: Axis::Vertical
        }]
    );
    assert_eq!(rule.scroller().config().lock_on_direction, None);
}

#[test]
fn failing_listener_stops_the_chain_and_reaches_the_caller() {
    let mut rule = vertical(ScrollerConfig::new());
    let later_calls = Rc::new(RefCell::new(0));
    rule.scroller_mut()
        .on(names::SCROLL_END, |_| Err(PluginError::msg("listener failed")));
    {
        let later_calls = Rc::clone(&later_calls);
        rule.scroller_mut().on(names::SCROLL_END, move |_| {
            *later_calls.borrow_mut() += 1;
            Ok(())
        });
    }

    let result = rule.scroller_mut().scroll_to(0.0, -100.0, None, None);
    assert!(matches!(result, Err(ScrollerError::Plugin { .. })));
    assert_eq!(*later_calls.borrow(), 0);
    assert_eq!(rule.position(), Point::new(0.0, -100.0));
}

#[test]
fn scroll_to_interceptors_wrap_the_operation() {
    let mut rule = vertical(ScrollerConfig::new());
    let calls = Rc::new(RefCell::new(Vec::new()));
    for label in ["first", "second"] {
        let calls = Rc::clone(&calls);
        rule.scroller_mut().hooks_mut().scroll_to.before(move |args| {
            calls.borrow_mut().push(format!("{label} {}", args.target.y));
            Ok(())
        });
    }
    {
        let calls = Rc::clone(&calls);
        rule.scroller_mut().hooks_mut().scroll_to.after(move |_, ()| {
            calls.borrow_mut().push("after".to_owned());
            Ok(())
        });
    }

    rule.scroller_mut()
        .scroll_to(0.0, -50.0, None, None)
        .expect("scroll");
    assert_eq!(
        *calls.borrow(),
        vec!["second -50".to_owned(), "first -50".to_owned(), "after".to_owned()]
    );
}

#[test]
fn rejecting_before_interceptor_aborts_the_scroll() {
    let mut rule = vertical(ScrollerConfig::new());
    rule.scroller_mut()
        .hooks_mut()
        .scroll_to
        .before(|_| Err(PluginError::msg("vetoed")));

    let result = rule.scroller_mut().scroll_to(0.0, -50.0, None, None);
    assert!(matches!(result, Err(ScrollerError::Plugin { .. })));
    assert_eq!(rule.position(), Point::ZERO);
}

#[test]
fn momentum_interceptors_see_the_inputs_and_may_replace_the_result() {
    let mut rule = vertical(ScrollerConfig::new().with_debounce(false));
    let seen = Rc::new(RefCell::new(Vec::new()));
    {
        let seen = Rc::clone(&seen);
        rule.scroller_mut().hooks_mut().momentum.before(move |args| {
            seen.borrow_mut().push(*args);
            Ok(())
        });
    }
    rule.scroller_mut()
        .hooks_mut()
        .momentum
        .after(|_, result: MomentumResult| {
            Ok(MomentumResult {
                destination: -100.0,
                duration_ms: 200.0,
                ..result
            })
        });

    rule.press(0.0, 0.0).expect("press");
    rule.host().advance_clock(100);
    rule.move_pointer(0.0, -50.0).expect("move");
    rule.release(0.0, -50.0).expect("release");
    rule.pump_until_idle().expect("motion completes");

    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].axis, Axis::Vertical);
    assert_eq!(seen[0].velocity, -0.5);
    assert_eq!(seen[0].position, -50.0);
    assert_eq!(seen[0].lower_bound, -600.0);
    assert_eq!(seen[0].wrapper_size, 400.0);
    assert_eq!(rule.position(), Point::new(0.0, -100.0));
}

#[test]
fn disabled_momentum_ends_where_the_finger_left() {
    let mut rule = vertical(
        ScrollerConfig::new()
            .with_debounce(false)
            .with_momentum(false),
    );
    let events = rule.record(&[names::SCROLL_END]);
    rule.press(0.0, 0.0).expect("press");
    rule.host().advance_clock(100);
    rule.move_pointer(0.0, -50.0).expect("move");
    rule.release(0.0, -50.0).expect("release");

    assert!(!rule.scroller().is_in_motion());
    assert_eq!(events.positions(names::SCROLL_END), vec![Point::new(0.0, -50.0)]);
}

#[test]
fn refresh_requests_coalesce_into_one_measurement() {
    let mut rule = vertical(ScrollerConfig::new());
    let events = rule.record(&[names::REFRESH, names::RESIZE]);
    let measured_at_creation = rule.host().measure_count();

    rule.scroller_mut().refresh().expect("refresh");
    rule.scroller_mut().refresh().expect("refresh");
    rule.scroller_mut().resize().expect("resize");
    assert_eq!(rule.host().pending_tick_count(), 1);

    rule.advance_frame(16).expect("frame");
    assert_eq!(rule.host().measure_count(), measured_at_creation + 1);
    assert_eq!(events.count(names::REFRESH), 1);
    assert_eq!(events.count(names::RESIZE), 1);
    assert_eq!(
        events.events().last().map(|(_, args)| *args),
        Some(EventArgs::Bounds(*rule.scroller().bounds()))
    );
}

#[test]
fn shrinking_content_pulls_an_idle_scroller_back_into_bounds() {
    let mut rule = vertical(ScrollerConfig::new());
    rule.scroller_mut()
        .scroll_to(0.0, -500.0, None, None)
        .expect("scroll");

    rule.host()
        .set_bounds(Bounds::from_sizes(300.0, 400.0, 300.0, 600.0, false, true));
    rule.scroller_mut().refresh().expect("refresh");
    rule.advance_frame(16).expect("frame");

    assert_eq!(rule.scroller().bounds().max_scroll_y, -200.0);
    assert_eq!(rule.position(), Point::new(0.0, -200.0));
    assert!(!rule.scroller().is_in_motion());
}

#[test]
fn refresh_interceptor_adjusts_measured_bounds() {
    let mut rule = vertical(ScrollerConfig::new());
    rule.scroller_mut()
        .hooks_mut()
        .refresh
        .after(|_, bounds: Bounds| {
            Ok(Bounds {
                max_scroll_y: bounds.max_scroll_y - 50.0,
                ..bounds
            })
        });
    rule.scroller_mut().refresh().expect("refresh");
    rule.advance_frame(16).expect("frame");
    assert_eq!(rule.scroller().bounds().max_scroll_y, -650.0);
}

#[test]
fn destroy_stops_motion_and_rejects_later_calls() {
    let mut rule = vertical(ScrollerConfig::new());
    let events = rule.record(&[names::DESTROY, names::SCROLL]);
    rule.scroller_mut()
        .scroll_to(0.0, -300.0, Some(300), None)
        .expect("scroll");
    let pending = rule.host().take_ticks();
    assert_eq!(pending.len(), 1);

    rule.scroller_mut().destroy().expect("destroy");
    assert!(rule.host().is_unbound());
    assert!(rule.scroller().is_destroyed());
    assert_eq!(events.count(names::DESTROY), 1);

    let commits = rule.host().commit_count();
    let now = rule.host().advance_clock(16);
    rule.scroller_mut()
        .on_tick(pending[0], now)
        .expect("ticks after destroy are ignored");
    assert_eq!(rule.host().commit_count(), commits);
    assert_eq!(events.count(names::SCROLL), 0);

    assert!(matches!(
        rule.scroller_mut().scroll_to(0.0, 0.0, None, None),
        Err(ScrollerError::Destroyed)
    ));
    assert!(matches!(
        rule.scroller_mut().destroy(),
        Err(ScrollerError::Destroyed)
    ));
    assert!(matches!(rule.press(0.0, 0.0), Err(ScrollerError::Destroyed)));
}

#[test]
fn destroy_cancels_pending_ticks() {
    let mut rule = vertical(ScrollerConfig::new());
    rule.scroller_mut()
        .scroll_to(0.0, -300.0, Some(300), None)
        .expect("scroll");
    rule.scroller_mut().refresh().expect("refresh");
    assert_eq!(rule.host().pending_tick_count(), 2);

    rule.scroller_mut().destroy().expect("destroy");
    assert_eq!(rule.host().pending_tick_count(), 0);
    assert_eq!(rule.host().cancelled_ticks().len(), 2);
}

#[test]
fn start_position_is_committed_on_creation() {
    let rule = vertical(ScrollerConfig::new().with_start(0.0, -120.0));
    assert_eq!(rule.host().commits(), vec![Point::new(0.0, -120.0)]);
    assert_eq!(rule.position(), Point::new(0.0, -120.0));
}

#[test]
fn declarative_snap_hands_over_to_the_bounce_back_before_ending() {
    let host = TestHost::vertical(400.0, 1000.0).with_transitions();
    let mut rule = ScrollTestRule::new(
        host,
        ScrollerConfig::new()
            .with_use_transition(true)
            .with_start(0.0, -350.0),
    );
    let events = rule.record(&[names::SCROLL_END]);

    rule.press(0.0, 0.0).expect("press");
    rule.host().advance_clock(100);
    rule.move_pointer(0.0, -50.0).expect("move");
    rule.release(0.0, -50.0).expect("release");

    let transitions = rule.host().transitions();
    assert_eq!(transitions.len(), 1);
    assert!((transitions[0].target.y + 612.5).abs() < 1e-2);
    assert_eq!(transitions[0].duration_millis, 425);
    assert_eq!(transitions[0].curve, Easing::SwipeBounce.bezier());
    assert_eq!(events.count(names::SCROLL_END), 0);

    rule.finish_transition().expect("snap lands");
    assert_eq!(
        rule.host().transitions()[1],
        TransitionRecord {
            target: Point::new(0.0, -600.0),
            duration_millis: 600,
            curve: Easing::Swipe.bezier(),
        }
    );
    assert!(rule.scroller().is_in_motion());
    assert_eq!(events.count(names::SCROLL_END), 0);

    rule.finish_transition().expect("bounce back lands");
    assert!(!rule.scroller().is_in_motion());
    assert_eq!(events.positions(names::SCROLL_END), vec![Point::new(0.0, -600.0)]);
    assert_eq!(rule.host().pending_tick_count(), 0);
}

#[test]
fn failing_scroll_listener_still_starts_the_bounce_back() {
    let mut rule = vertical(ScrollerConfig::new());
    rule.scroller_mut().on(names::SCROLL, |args| {
        if args.position() == Some(Point::new(0.0, -700.0)) {
            Err(PluginError::msg("listener failed"))
        } else {
            Ok(())
        }
    });

    let result = rule.scroller_mut().scroll_to(0.0, -700.0, None, None);
    assert!(matches!(result, Err(ScrollerError::Plugin { .. })));
    assert!(rule.scroller().is_in_motion());
    assert_eq!(rule.host().pending_tick_count(), 1);

    rule.pump_until_idle().expect("bounce back completes");
    assert_eq!(rule.position(), Point::new(0.0, -600.0));
}

#[test]
fn failing_listener_on_the_last_tick_still_starts_the_bounce_back() {
    let mut rule = vertical(ScrollerConfig::new());
    let events = rule.record(&[names::SCROLL_END]);
    rule.scroller_mut().on(names::SCROLL, |args| {
        if args.position() == Some(Point::new(0.0, -700.0)) {
            Err(PluginError::msg("listener failed"))
        } else {
            Ok(())
        }
    });

    rule.scroller_mut()
        .scroll_to(0.0, -700.0, Some(100), Some(Easing::Linear))
        .expect("scroll");
    assert!(matches!(
        rule.advance_frame(100),
        Err(ScrollerError::Plugin { .. })
    ));
    assert_eq!(rule.position(), Point::new(0.0, -700.0));
    assert!(rule.scroller().is_in_motion());
    assert_eq!(events.count(names::SCROLL_END), 0);

    rule.pump_until_idle().expect("bounce back completes");
    assert_eq!(rule.position(), Point::new(0.0, -600.0));
    assert_eq!(events.positions(names::SCROLL_END), vec![Point::new(0.0, -600.0)]);
}
