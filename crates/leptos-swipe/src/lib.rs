//! Leptos Swipe Utilities
//!
//! Touch swipe-to-act for list rows.
//! Uses a tap tolerance to distinguish tap from swipe and a commit
//! threshold to distinguish swipe from a cancelled drag.

pub mod gesture;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

pub use gesture::{
    classify_release, reveal_for, Axis, MoveEffect, Phase, Release, Reveal, SwipeConfig, SwipeDirection,
    SwipeTracker,
};

/// Controls inside a row that handle their own clicks
const INTERACTIVE_SELECTOR: &str = "a, button, input, select, textarea, label";

/// How long the emulated click after a touch is ignored (ms)
const CLICK_SUPPRESS_MS: i32 = 400;

/// Swipe state signals, shared by every row of one list
#[derive(Clone, Copy)]
pub struct SwipeSignals {
    /// Row owning the current gesture
    pub active_row_read: ReadSignal<Option<u32>>,
    pub active_row_write: WriteSignal<Option<u32>>,
    /// Horizontal translation of the active row
    pub offset_read: ReadSignal<f64>,
    pub offset_write: WriteSignal<f64>,
    pub reveal_read: ReadSignal<Option<Reveal>>,
    pub reveal_write: WriteSignal<Option<Reveal>>,
    /// Row is animating back to rest
    pub settling_read: ReadSignal<bool>,
    pub settling_write: WriteSignal<bool>,
    /// Set briefly after touchend so the emulated click is swallowed
    pub touch_just_ended_read: ReadSignal<bool>,
    pub touch_just_ended_write: WriteSignal<bool>,
    tracker: StoredValue<SwipeTracker>,
    snap_back_ms: i32,
}

pub fn create_swipe_signals(config: SwipeConfig, snap_back_ms: u32) -> SwipeSignals {
    let (active_row_read, active_row_write) = signal(None::<u32>);
    let (offset_read, offset_write) = signal(0.0f64);
    let (reveal_read, reveal_write) = signal(None::<Reveal>);
    let (settling_read, settling_write) = signal(false);
    let (touch_just_ended_read, touch_just_ended_write) = signal(false);
    SwipeSignals {
        active_row_read,
        active_row_write,
        offset_read,
        offset_write,
        reveal_read,
        reveal_write,
        settling_read,
        settling_write,
        touch_just_ended_read,
        touch_just_ended_write,
        tracker: StoredValue::new(SwipeTracker::new(config)),
        snap_back_ms: i32::try_from(snap_back_ms).unwrap_or(i32::MAX),
    }
}

impl SwipeSignals {
    /// Is `row_id` the row currently owning the gesture?
    pub fn is_active(&self, row_id: u32) -> bool {
        self.active_row_read.get() == Some(row_id)
    }

    /// CSS transform for a row
    pub fn transform_for(&self, row_id: u32) -> String {
        if self.is_active(row_id) {
            format!("transform: translateX({}px);", self.offset_read.get())
        } else {
            String::new()
        }
    }

    /// Affordance opacity for a row and direction
    pub fn opacity_for(&self, row_id: u32, direction: SwipeDirection) -> f64 {
        if !self.is_active(row_id) {
            return 0.0;
        }
        match self.reveal_read.get() {
            Some(reveal) if reveal.direction == direction => reveal.opacity,
            _ => 0.0,
        }
    }
}

fn set_timeout(ms: i32, f: impl FnOnce() + 'static) {
    if let Some(win) = web_sys::window() {
        let cb = wasm_bindgen::closure::Closure::once(f);
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), ms);
        cb.forget();
    }
}

fn first_changed_touch(ev: &web_sys::TouchEvent) -> Option<(f64, f64)> {
    ev.changed_touches()
        .get(0)
        .map(|touch| (f64::from(touch.screen_x()), f64::from(touch.screen_y())))
}

fn targets_interactive_control(ev: &web_sys::TouchEvent) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(INTERACTIVE_SELECTOR).ok().flatten())
        .is_some()
}

/// Return a row to rest: clear transform and affordance, animate the snap
pub fn snap_back(swipe: &SwipeSignals, row_id: u32) {
    if swipe.active_row_read.get_untracked() != Some(row_id) {
        return;
    }
    swipe.offset_write.set(0.0);
    swipe.reveal_write.set(None);
    swipe.settling_write.set(true);

    let settling = swipe.settling_write;
    let active = swipe.active_row_write;
    let active_read = swipe.active_row_read;
    set_timeout(swipe.snap_back_ms, move || {
        settling.set(false);
        // Another row may have taken over in the meantime
        if active_read.get_untracked() == Some(row_id) {
            active.set(None);
        }
    });
}

/// Create touchstart handler for a row
pub fn make_on_touchstart(swipe: SwipeSignals, row_id: u32) -> impl Fn(web_sys::TouchEvent) + Copy + 'static {
    move |ev: web_sys::TouchEvent| {
        // Let buttons and links handle their own taps
        if targets_interactive_control(&ev) {
            return;
        }
        let Some((x, y)) = first_changed_touch(&ev) else { return };
        swipe.tracker.update_value(|t| t.begin(x, y));
        swipe.settling_write.set(false);
        swipe.offset_write.set(0.0);
        swipe.reveal_write.set(None);
        swipe.active_row_write.set(Some(row_id));
    }
}

/// Create touchmove handler for a row
pub fn make_on_touchmove(swipe: SwipeSignals, row_id: u32) -> impl Fn(web_sys::TouchEvent) + Copy + 'static {
    move |ev: web_sys::TouchEvent| {
        if swipe.active_row_read.get_untracked() != Some(row_id) {
            return;
        }
        let Some((x, y)) = first_changed_touch(&ev) else { return };
        let mut effect = MoveEffect::Ignored;
        swipe.tracker.update_value(|t| effect = t.update(x, y));

        match effect {
            MoveEffect::Drag { offset, reveal } => {
                if ev.cancelable() {
                    ev.prevent_default();
                }
                swipe.offset_write.set(offset);
                swipe.reveal_write.set(reveal);
            }
            MoveEffect::Scroll => {
                swipe.offset_write.set(0.0);
                swipe.reveal_write.set(None);
            }
            MoveEffect::Ignored | MoveEffect::Pending => {}
        }
    }
}

/// Create touchend handler for a row.
///
/// `on_release` receives every finished gesture. Snap-backs and scrolls are
/// already reset here; for taps and commits the caller decides, and must
/// call [`snap_back`] once a commit has been resolved.
pub fn make_on_touchend<F>(swipe: SwipeSignals, row_id: u32, on_release: F) -> impl Fn(web_sys::TouchEvent) + Clone + 'static
where
    F: Fn(u32, Release) + Clone + 'static,
{
    move |ev: web_sys::TouchEvent| {
        if swipe.active_row_read.get_untracked() != Some(row_id) {
            return;
        }
        let end = first_changed_touch(&ev);
        let mut release = None;
        swipe.tracker.update_value(|t| release = t.finish(end));
        let Some(release) = release else { return };

        if release.suppresses_click() {
            swipe.touch_just_ended_write.set(true);
            let clear = swipe.touch_just_ended_write;
            set_timeout(CLICK_SUPPRESS_MS, move || clear.set(false));
        }

        match release {
            Release::SnapBack | Release::Scroll | Release::Tap => snap_back(&swipe, row_id),
            Release::Commit(_) => {}
        }
        on_release(row_id, release);
    }
}

/// Create touchcancel handler for a row
pub fn make_on_touchcancel(swipe: SwipeSignals, row_id: u32) -> impl Fn(web_sys::TouchEvent) + Copy + 'static {
    move |_ev: web_sys::TouchEvent| {
        if swipe.active_row_read.get_untracked() != Some(row_id) {
            return;
        }
        swipe.tracker.update_value(|t| t.cancel());
        snap_back(&swipe, row_id);
    }
}
