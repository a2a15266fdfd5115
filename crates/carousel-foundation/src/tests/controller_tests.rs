use std::cell::RefCell;
use std::rc::Rc;

use carousel_core::CarouselConfig;

use crate::controller::{CarouselController, ScrollCommand, ScrollToOutcome};
use crate::host::ScrollHost;
use crate::scroll_state::GesturePhase;

// Mock host recording every scroll command it receives.
#[derive(Default)]
struct MockHost {
    scrolls: Vec<(f32, bool)>,
}

impl ScrollHost for MockHost {
    fn scroll_to_offset(&mut self, offset: f32, animated: bool) {
        self.scrolls.push((offset, animated));
    }
}

// Host that appends to a shared event log, for ordering assertions.
struct LoggingHost {
    log: Rc<RefCell<Vec<String>>>,
}

impl ScrollHost for LoggingHost {
    fn scroll_to_offset(&mut self, offset: f32, _animated: bool) {
        self.log.borrow_mut().push(format!("scroll:{offset}"));
    }
}

// Exactly representable geometry: container 300, item 270, separator 10,
// inactive scale 0.5 => total margin -57.5, span 212.5, so offsets are
// clean halves and float asserts can be exact. offset(1) = 197.5,
// offset(2) = 410, offset(3) = 622.5.
fn exact_config() -> CarouselConfig {
    let mut config = CarouselConfig::new(300.0, 0);
    config.item_width = 270.0;
    config.inactive_scale = 0.5;
    config
}

fn controller(initial_index: usize, count: usize) -> CarouselController<&'static str> {
    let labels = ["a", "b", "c", "d", "e", "f", "g", "h"];
    let mut config = exact_config();
    config.initial_index = initial_index;
    CarouselController::new(config, labels[..count].to_vec()).expect("valid config")
}

#[test]
fn scroll_to_index_out_of_range_is_a_reported_no_op() {
    let mut controller = controller(2, 5);
    assert_eq!(controller.scroll_to_index(5), ScrollToOutcome::OutOfRange);
    assert_eq!(controller.scroll_to_index(usize::MAX), ScrollToOutcome::OutOfRange);
    assert_eq!(controller.current_index(), 2);
    assert_eq!(controller.pending_command(), None);

    let mut host = MockHost::default();
    assert!(!controller.flush(&mut host));
    assert!(host.scrolls.is_empty());
}

#[test]
fn scroll_to_index_commits_then_applies_on_flush() {
    let mut controller = controller(0, 5);
    assert_eq!(
        controller.scroll_to_index(1),
        ScrollToOutcome::Committed { offset: 197.5 }
    );
    assert_eq!(controller.current_index(), 1);
    assert_eq!(controller.state().phase(), GesturePhase::Settling);
    assert_eq!(
        controller.pending_command(),
        Some(ScrollCommand {
            offset: 197.5,
            animated: true
        })
    );

    let mut host = MockHost::default();
    assert!(controller.flush(&mut host));
    assert_eq!(host.scrolls, vec![(197.5, true)]);
    assert_eq!(controller.state().phase(), GesturePhase::Idle);

    // Nothing left queued: flush is once per committed target.
    assert!(!controller.flush(&mut host));
    assert_eq!(host.scrolls.len(), 1);
}

#[test]
fn settle_callback_fires_before_the_host_sees_any_scroll() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut controller = controller(0, 5);
    let callback_log = log.clone();
    controller.set_on_scroll_end(move |item, index| {
        callback_log.borrow_mut().push(format!("settle:{item}:{index}"));
    });

    controller.scroll_to_index(2);
    let mut host = LoggingHost { log: log.clone() };
    controller.flush(&mut host);

    assert_eq!(
        *log.borrow(),
        vec!["settle:c:2".to_string(), "scroll:410".to_string()]
    );
}

#[test]
fn backward_drag_settles_one_index_down() {
    // Drag from 100 to 80: distance -20, past the threshold of 5.
    let mut controller = controller(2, 5);
    controller.on_scroll(100.0);
    controller.on_drag_begin();
    controller.on_scroll(90.0);
    controller.on_drag_end(80.0);

    assert_eq!(controller.current_index(), 1);
    assert_eq!(controller.state().phase(), GesturePhase::Settling);
    assert_eq!(
        controller.pending_command(),
        Some(ScrollCommand {
            offset: 197.5,
            animated: true
        })
    );
}

#[test]
fn short_drag_snaps_back_to_the_current_index() {
    // Drag from 100 to 102: |2| is under the threshold of 5.
    let mut controller = controller(2, 5);
    controller.on_scroll(100.0);
    controller.on_drag_begin();
    controller.on_drag_end(102.0);

    assert_eq!(controller.current_index(), 2);
    // Snap-back still re-centers the strip on the current item.
    assert_eq!(
        controller.pending_command(),
        Some(ScrollCommand {
            offset: 410.0,
            animated: true
        })
    );
}

#[test]
fn negative_release_offset_ignores_the_gesture() {
    let mut controller = controller(0, 5);
    controller.on_scroll(10.0);
    controller.on_drag_begin();
    controller.on_drag_end(-3.0);

    assert_eq!(controller.current_index(), 0);
    assert_eq!(controller.state().phase(), GesturePhase::Idle);
    assert_eq!(controller.pending_command(), None);
}

#[test]
fn forward_drag_past_the_last_index_is_dropped() {
    let mut controller = controller(4, 5);
    controller.on_scroll(900.0);
    controller.on_drag_begin();
    controller.on_drag_end(950.0);

    assert_eq!(controller.current_index(), 4);
    assert_eq!(controller.state().phase(), GesturePhase::Idle);
    assert_eq!(controller.pending_command(), None);
}

#[test]
fn recommitting_replaces_the_queued_command() {
    let mut controller = controller(0, 5);
    controller.scroll_to_index(1);
    controller.scroll_to_index(3);

    let mut host = MockHost::default();
    assert!(controller.flush(&mut host));
    assert!(!controller.flush(&mut host));
    // Only the re-targeted command reaches the host.
    assert_eq!(host.scrolls, vec![(622.5, true)]);
    assert_eq!(controller.current_index(), 3);
}

#[test]
fn drag_callbacks_fire_on_begin_and_end() {
    let begins = Rc::new(RefCell::new(0));
    let ends = Rc::new(RefCell::new(0));
    let mut controller = controller(2, 5);
    let begins_cb = begins.clone();
    controller.set_on_scroll_begin_drag(move || *begins_cb.borrow_mut() += 1);
    let ends_cb = ends.clone();
    controller.set_on_scroll_end_drag(move || *ends_cb.borrow_mut() += 1);

    controller.on_scroll(100.0);
    controller.on_drag_begin();
    controller.on_drag_end(102.0);

    assert_eq!(*begins.borrow(), 1);
    assert_eq!(*ends.borrow(), 1);
}

#[test]
fn visuals_follow_the_live_offset() {
    let mut controller = controller(0, 5);
    controller.on_scroll(197.5);

    let visuals = controller.visuals();
    assert_eq!(visuals.len(), 5);
    // Item 1 is at its midpoint: fully active.
    assert_eq!(visuals[1].scale, 1.0);
    assert_eq!(visuals[1].opacity, 1.0);
    // Item 0 is at its end breakpoint: rest-inactive.
    assert_eq!(visuals[0].scale, 0.5);
    assert_eq!(visuals[0].opacity, 0.8);
    // Item 4 is far outside its range: clamped to rest-inactive.
    assert_eq!(visuals[4].scale, 0.5);
}

#[test]
fn opacity_interpolates_independently_of_scale() {
    let mut config = exact_config();
    config.inactive_opacity = 0.25;
    let mut controller =
        CarouselController::new(config, vec!["a", "b", "c", "d", "e"]).expect("valid config");
    controller.on_scroll(0.0);

    let visuals = controller.visuals();
    // Item 1 sits at its start breakpoint: scale and opacity at their own
    // rest endpoints.
    assert_eq!(visuals[1].scale, 0.5);
    assert_eq!(visuals[1].opacity, 0.25);
}

#[test]
fn single_item_strip_is_always_active() {
    let controller = controller(0, 1);
    let visuals = controller.visuals();
    assert_eq!(visuals.len(), 1);
    assert_eq!(visuals[0].scale, 1.0);
    assert_eq!(visuals[0].opacity, 1.0);
}

#[test]
fn empty_strip_accepts_events_and_drops_commands() {
    let mut controller = CarouselController::new(exact_config(), Vec::<&str>::new())
        .expect("valid config");
    controller.on_scroll(10.0);
    controller.on_drag_begin();
    controller.on_drag_end(50.0);

    assert_eq!(controller.scroll_to_index(0), ScrollToOutcome::OutOfRange);
    assert_eq!(controller.pending_command(), None);
    assert!(controller.visuals().is_empty());
}

#[test]
fn item_layout_hints_cover_only_the_strip() {
    let controller = controller(0, 5);
    let layout = controller.item_layout(3).expect("in range");
    assert_eq!(layout.offset, 637.5);
    assert_eq!(layout.length, 212.5);
    assert!(controller.item_layout(5).is_none());
}

#[test]
fn render_options_forward_the_configuration() {
    let mut config = exact_config();
    config.inverted = true;
    config.bounces = false;
    config.initial_index = 1;
    let controller =
        CarouselController::new(config, vec!["a", "b", "c"]).expect("valid config");

    let options = controller.render_options();
    assert!(options.horizontal);
    assert!(options.paging);
    assert!(options.inverted);
    assert!(!options.bounces);
    assert!(!options.shows_scroll_indicator);
    assert_eq!(options.initial_index, 1);
}

#[test]
fn shrinking_the_items_clamps_the_current_index() {
    let mut controller = controller(4, 5);
    controller.set_items(vec!["a", "b"]);
    assert_eq!(controller.current_index(), 1);
    assert_eq!(controller.items().len(), 2);
}
