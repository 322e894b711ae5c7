//! Gesture interpretation: a state machine over pointer, wheel and
//! two-finger touch input that reduces raw events to camera actions.
//!
//! The interpreter owns only ephemeral gesture state (current drag anchor,
//! pinch baseline, wheel accumulator). It never touches the camera; it
//! emits [`Action`]s for the viewer to apply.

use crate::core::geometry::Point;
use crate::input::events::{EventHandled, InputEvent, MouseButton};

/// Camera update requested by a gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Screen-space drag delta.
    Pan { dx: f64, dy: f64 },
    /// Relative zoom by `delta` levels, anchored at a container-local
    /// point (wheel zoom).
    ZoomStep { delta: i32, anchor: Point },
    /// Absolute zoom target, pre-clamp, anchored at a container-local
    /// point (pinch zoom).
    ZoomTo { zoom: i32, anchor: Point },
}

/// Signed wheel accumulator. A sign reversal resets it so a reversed
/// gesture never inherits stale accumulation; crossing the threshold
/// consumes the whole accumulation for a single one-level step.
#[derive(Debug, Clone)]
pub struct ScrollAccumulator {
    accumulated: f64,
    threshold: f64,
}

impl ScrollAccumulator {
    pub fn new(threshold: f64) -> Self {
        Self {
            accumulated: 0.0,
            threshold,
        }
    }

    /// Feeds one wheel delta; returns the zoom step to apply, if any.
    /// Positive accumulated delta (scroll down/away) zooms out. A
    /// non-finite delta is ignored rather than poisoning the
    /// accumulation.
    pub fn feed(&mut self, delta_y: f64) -> Option<i32> {
        if !delta_y.is_finite() {
            return None;
        }
        if (delta_y > 0.0 && self.accumulated < 0.0)
            || (delta_y < 0.0 && self.accumulated > 0.0)
        {
            self.accumulated = 0.0;
        }
        self.accumulated += delta_y;

        if self.accumulated.abs() < self.threshold {
            return None;
        }
        let step = if self.accumulated > 0.0 { -1 } else { 1 };
        self.accumulated = 0.0;
        Some(step)
    }

    pub fn value(&self) -> f64 {
        self.accumulated
    }
}

/// Phase of the active gesture session. Created on gesture start, consumed
/// on every move, cleared on gesture end; never persists across gestures.
#[derive(Debug, Clone, Copy, PartialEq)]
enum GesturePhase {
    Idle,
    Dragging { last: Point },
    Pinching { start_distance: f64, start_zoom: u8 },
}

/// State machine turning input events into [`Action`]s.
pub struct GestureInterpreter {
    phase: GesturePhase,
    scroll: ScrollAccumulator,
}

impl GestureInterpreter {
    pub fn new(scroll_threshold: f64) -> Self {
        Self {
            phase: GesturePhase::Idle,
            scroll: ScrollAccumulator::new(scroll_threshold),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, GesturePhase::Dragging { .. })
    }

    pub fn is_pinching(&self) -> bool {
        matches!(self.phase, GesturePhase::Pinching { .. })
    }

    /// Clears all gesture state (used at teardown).
    pub fn reset(&mut self) {
        self.phase = GesturePhase::Idle;
    }

    #[cfg(test)]
    fn scroll_value(&self) -> f64 {
        self.scroll.value()
    }

    /// Interprets one event against the current gesture phase.
    /// `current_zoom` seeds pinch sessions with the zoom at pinch start.
    pub fn handle(
        &mut self,
        event: &InputEvent,
        current_zoom: u8,
    ) -> (Vec<Action>, EventHandled) {
        let mut actions = Vec::new();
        let handled = match event {
            InputEvent::PointerDown { position, button } => match button {
                MouseButton::Left => {
                    self.phase = GesturePhase::Dragging { last: *position };
                    EventHandled::Handled
                }
                // Consumed without starting a drag, so the host suppresses
                // the context menu over the surface.
                MouseButton::Right => EventHandled::Handled,
                _ => EventHandled::NotHandled,
            },

            InputEvent::PointerMove { position } => match self.phase {
                GesturePhase::Dragging { last } => {
                    actions.push(Action::Pan {
                        dx: position.x - last.x,
                        dy: position.y - last.y,
                    });
                    self.phase = GesturePhase::Dragging { last: *position };
                    EventHandled::Handled
                }
                _ => EventHandled::NotHandled,
            },

            InputEvent::PointerUp => {
                if self.is_dragging() {
                    self.phase = GesturePhase::Idle;
                    EventHandled::Handled
                } else {
                    EventHandled::NotHandled
                }
            }

            InputEvent::Wheel { delta_y, position } => {
                if let Some(delta) = self.scroll.feed(*delta_y) {
                    actions.push(Action::ZoomStep {
                        delta,
                        anchor: *position,
                    });
                }
                // Wheel over the surface is always consumed, even while
                // the accumulator is still filling, so the page does not
                // scroll underneath.
                EventHandled::Handled
            }

            InputEvent::TouchStart { touches } => match touches.len() {
                1 => {
                    self.phase = GesturePhase::Dragging {
                        last: touches[0].position,
                    };
                    EventHandled::Handled
                }
                2 => {
                    self.phase = GesturePhase::Pinching {
                        start_distance: touches[0].position.distance_to(&touches[1].position),
                        start_zoom: current_zoom,
                    };
                    EventHandled::Handled
                }
                // Gestures beyond two fingers are out of scope.
                _ => EventHandled::NotHandled,
            },

            InputEvent::TouchMove { touches } => match (self.phase, touches.len()) {
                (GesturePhase::Dragging { last }, 1) => {
                    let position = touches[0].position;
                    actions.push(Action::Pan {
                        dx: position.x - last.x,
                        dy: position.y - last.y,
                    });
                    self.phase = GesturePhase::Dragging { last: position };
                    EventHandled::Handled
                }
                (
                    GesturePhase::Pinching {
                        start_distance,
                        start_zoom,
                    },
                    2,
                ) => {
                    let distance = touches[0].position.distance_to(&touches[1].position);
                    if let Some(delta) = pinch_zoom_delta(start_distance, distance) {
                        actions.push(Action::ZoomTo {
                            zoom: start_zoom as i32 + delta,
                            anchor: touches[0].position.midpoint(&touches[1].position),
                        });
                    }
                    EventHandled::Handled
                }
                _ => EventHandled::NotHandled,
            },

            InputEvent::TouchEnd { touches } => {
                let was_active = self.phase != GesturePhase::Idle;
                // Dropping from two fingers to one starts a fresh drag from
                // the remaining touch; stale single-touch state is never
                // reused.
                self.phase = match touches.first() {
                    Some(touch) if touches.len() == 1 => GesturePhase::Dragging {
                        last: touch.position,
                    },
                    _ => GesturePhase::Idle,
                };
                if was_active {
                    EventHandled::Handled
                } else {
                    EventHandled::NotHandled
                }
            }

            // Resize is the viewer's concern, not a gesture.
            InputEvent::Resize { .. } => EventHandled::NotHandled,
        };
        (actions, handled)
    }
}

/// Discrete zoom delta for a pinch: `round(log2(current / initial))`.
/// Degenerate input (zero/near-zero baseline, non-finite ratio) yields
/// `None` instead of propagating a non-finite zoom.
fn pinch_zoom_delta(start_distance: f64, current_distance: f64) -> Option<i32> {
    if start_distance <= f64::EPSILON || current_distance <= 0.0 {
        return None;
    }
    let ratio = current_distance / start_distance;
    let delta = ratio.log2().round();
    if delta.is_finite() {
        Some(delta as i32)
    } else {
        None
    }
}
