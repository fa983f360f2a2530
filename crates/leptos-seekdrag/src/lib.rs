//! Leptos Seek-Drag Utilities
//!
//! Press-drag-release seeking on a horizontal track using pointer events.
//! The track reports a position fraction in `[0, 1]`. While a drag is active
//! the owner should stop applying playback position updates to the display,
//! otherwise the handle fights the pointer.

use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Seek state signals
#[derive(Clone, Copy)]
pub struct SeekSignals {
    /// Pointer is pressed on the track
    pub dragging_read: ReadSignal<bool>,
    pub dragging_write: WriteSignal<bool>,
    /// Last fraction reported by the pointer
    pub fraction_read: ReadSignal<f64>,
    pub fraction_write: WriteSignal<f64>,
}

pub fn create_seek_signals() -> SeekSignals {
    let (dragging_read, dragging_write) = signal(false);
    let (fraction_read, fraction_write) = signal(0.0f64);
    SeekSignals {
        dragging_read,
        dragging_write,
        fraction_read,
        fraction_write,
    }
}

/// Horizontal position of `client_x` along a track, clamped to `[0, 1]`.
///
/// A collapsed track (zero or negative width) always maps to the start.
pub fn fraction_at(client_x: f64, left: f64, width: f64) -> f64 {
    if !(width > 0.0) {
        return 0.0;
    }
    ((client_x - left) / width).clamp(0.0, 1.0)
}

fn fraction_on_track(track: &web_sys::Element, client_x: i32) -> f64 {
    let rect = track.get_bounding_client_rect();
    fraction_at(f64::from(client_x), rect.left(), rect.width())
}

/// End seek operation
pub fn end_seek(seek: &SeekSignals) {
    seek.dragging_write.set(false);
}

/// Create pointerdown handler for the track element.
/// Starts a drag and seeks immediately to the pressed position.
pub fn make_on_pointerdown(
    seek: SeekSignals,
    on_seek: Callback<f64>,
) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |ev: web_sys::PointerEvent| {
        // Primary button only
        if ev.button() != 0 {
            return;
        }
        let Some(target) = ev.current_target() else { return };
        let Some(track) = target.dyn_ref::<web_sys::Element>() else { return };
        ev.prevent_default();

        let fraction = fraction_on_track(track, ev.client_x());
        seek.dragging_write.set(true);
        seek.fraction_write.set(fraction);
        on_seek.run(fraction);
    }
}

/// Window listeners installed by [`bind_global_seek`]
pub struct SeekListeners {
    on_move: WindowListenerHandle,
    on_up: WindowListenerHandle,
    on_cancel: WindowListenerHandle,
}

impl SeekListeners {
    /// Detach all listeners
    pub fn remove(self) {
        self.on_move.remove();
        self.on_up.remove();
        self.on_cancel.remove();
    }
}

/// Bind window-level pointermove/pointerup handlers for an active drag.
///
/// `on_seek` fires for every move while pressed; `on_release` fires once
/// with the final fraction when the pointer is released or cancelled.
pub fn bind_global_seek(
    seek: SeekSignals,
    track: NodeRef<Div>,
    on_seek: Callback<f64>,
    on_release: Callback<f64>,
) -> SeekListeners {
    let on_move = window_event_listener(ev::pointermove, move |ev: web_sys::PointerEvent| {
        if !seek.dragging_read.get_untracked() {
            return;
        }
        if let Some(el) = track.get_untracked() {
            let fraction = fraction_on_track(&el, ev.client_x());
            seek.fraction_write.set(fraction);
            on_seek.run(fraction);
        }
    });

    let release = move || {
        if seek.dragging_read.get_untracked() {
            end_seek(&seek);
            on_release.run(seek.fraction_read.get_untracked());
        }
    };
    let on_up = window_event_listener(ev::pointerup, move |_| release());
    let on_cancel = window_event_listener(ev::pointercancel, move |_| release());

    SeekListeners {
        on_move,
        on_up,
        on_cancel,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_inside_track() {
        assert_eq!(fraction_at(150.0, 100.0, 200.0), 0.25);
        assert_eq!(fraction_at(300.0, 100.0, 200.0), 1.0);
        assert_eq!(fraction_at(100.0, 100.0, 200.0), 0.0);
    }

    #[test]
    fn test_fraction_clamped_outside_track() {
        assert_eq!(fraction_at(20.0, 100.0, 200.0), 0.0);
        assert_eq!(fraction_at(900.0, 100.0, 200.0), 1.0);
    }

    #[test]
    fn test_collapsed_track_maps_to_start() {
        assert_eq!(fraction_at(150.0, 100.0, 0.0), 0.0);
        assert_eq!(fraction_at(150.0, 100.0, -5.0), 0.0);
        assert_eq!(fraction_at(150.0, 100.0, f64::NAN), 0.0);
    }
}
