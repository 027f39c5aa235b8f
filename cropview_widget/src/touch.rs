// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch sequence tracking: turn raw touch events into pan, pinch and tap
//! outcomes.
//!
//! A touch sequence starts when the first touch goes down and completes when
//! the last active touch is lifted. Until some touch travels further than the
//! tap slop from where it went down, the sequence is a tap candidate and
//! produces no motion. Once it does, the sequence is consumed by a gesture:
//! - With one active touch, each move yields a pan delta.
//! - With two or more, moves of the first two touches yield a pinch.

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

/// Identifier of one touch, stable from `Down` to `Up`/`Cancel`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TouchId(pub u64);

/// Raw touch input in view coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TouchEvent {
    /// A touch went down.
    Down {
        /// Touch identifier.
        id: TouchId,
        /// Position in view coordinates.
        pos: Point,
    },
    /// A touch moved.
    Move {
        /// Touch identifier.
        id: TouchId,
        /// Position in view coordinates.
        pos: Point,
    },
    /// A touch was lifted.
    Up {
        /// Touch identifier.
        id: TouchId,
        /// Position in view coordinates.
        pos: Point,
    },
    /// A touch was cancelled by the system; the sequence cannot be a tap.
    Cancel {
        /// Touch identifier.
        id: TouchId,
    },
}

/// What a single touch event amounts to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Gesture {
    /// Nothing to apply.
    Idle,
    /// Single‑touch motion; the pointer delta in view space.
    Pan(Vec2),
    /// Two‑touch motion.
    Pinch {
        /// Midpoint of the two touches after the move.
        anchor: Point,
        /// Ratio of the new touch distance to the old one.
        factor: f64,
        /// Motion of the midpoint.
        pan: Vec2,
    },
    /// The last touch was lifted or cancelled.
    Ended {
        /// `true` if the sequence completed without being consumed.
        tapped: bool,
    },
}

#[derive(Clone, Copy, Debug)]
struct ActiveTouch {
    id: TouchId,
    start: Point,
    last: Point,
}

/// Tracks the active touches of the current sequence.
#[derive(Clone, Debug)]
pub(crate) struct TouchTracker {
    touches: SmallVec<[ActiveTouch; 2]>,
    consumed: bool,
    tap_slop: f64,
}

impl TouchTracker {
    /// Creates a tracker; a negative or NaN slop is treated as zero.
    pub(crate) fn new(tap_slop: f64) -> Self {
        Self {
            touches: SmallVec::new(),
            consumed: false,
            tap_slop: if tap_slop >= 0.0 { tap_slop } else { 0.0 },
        }
    }

    /// Returns `true` while any touch is down.
    pub(crate) fn is_active(&self) -> bool {
        !self.touches.is_empty()
    }

    /// Forgets all touches without completing the sequence.
    pub(crate) fn reset(&mut self) {
        self.touches.clear();
        self.consumed = false;
    }

    pub(crate) fn handle(&mut self, event: TouchEvent) -> Gesture {
        match event {
            TouchEvent::Down { id, pos } => {
                if self.touches.is_empty() {
                    self.consumed = false;
                }
                if let Some(index) = self.index_of(id) {
                    self.touches[index].start = pos;
                    self.touches[index].last = pos;
                } else {
                    self.touches.push(ActiveTouch {
                        id,
                        start: pos,
                        last: pos,
                    });
                }
                Gesture::Idle
            }
            TouchEvent::Move { id, pos } => self.on_move(id, pos),
            TouchEvent::Up { id, pos } => {
                let Some(index) = self.index_of(id) else {
                    return Gesture::Idle;
                };
                if (pos - self.touches[index].start).hypot() > self.tap_slop {
                    self.consumed = true;
                }
                self.remove(index)
            }
            TouchEvent::Cancel { id } => {
                let Some(index) = self.index_of(id) else {
                    return Gesture::Idle;
                };
                self.consumed = true;
                self.remove(index)
            }
        }
    }

    fn on_move(&mut self, id: TouchId, pos: Point) -> Gesture {
        let Some(index) = self.index_of(id) else {
            return Gesture::Idle;
        };
        let touch = self.touches[index];
        let before = if self.consumed {
            touch.last
        } else {
            if (pos - touch.start).hypot() <= self.tap_slop {
                self.touches[index].last = pos;
                return Gesture::Idle;
            }
            self.consumed = true;
            // Motion below the slop was held back; release it with the
            // first gesture step.
            touch.start
        };
        self.touches[index].last = pos;

        if self.touches.len() == 1 {
            return Gesture::Pan(pos - before);
        }
        if index > 1 {
            return Gesture::Idle;
        }
        let other = self.touches[1 - index].last;
        let old_mid = before.midpoint(other);
        let new_mid = pos.midpoint(other);
        let old_distance = before.distance(other);
        let new_distance = pos.distance(other);
        if old_distance <= 0.0 || new_distance <= 0.0 {
            return Gesture::Pan(new_mid - old_mid);
        }
        Gesture::Pinch {
            anchor: new_mid,
            factor: new_distance / old_distance,
            pan: new_mid - old_mid,
        }
    }

    fn remove(&mut self, index: usize) -> Gesture {
        self.touches.remove(index);
        // Remaining touches continue from where they are now.
        for touch in &mut self.touches {
            touch.start = touch.last;
        }
        if self.touches.is_empty() {
            Gesture::Ended {
                tapped: !self.consumed,
            }
        } else {
            Gesture::Idle
        }
    }

    fn index_of(&self, id: TouchId) -> Option<usize> {
        self.touches.iter().position(|t| t.id == id)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{Gesture, TouchEvent, TouchId, TouchTracker};

    const A: TouchId = TouchId(1);
    const B: TouchId = TouchId(2);

    fn down(id: TouchId, x: f64, y: f64) -> TouchEvent {
        TouchEvent::Down {
            id,
            pos: Point::new(x, y),
        }
    }

    fn moved(id: TouchId, x: f64, y: f64) -> TouchEvent {
        TouchEvent::Move {
            id,
            pos: Point::new(x, y),
        }
    }

    fn up(id: TouchId, x: f64, y: f64) -> TouchEvent {
        TouchEvent::Up {
            id,
            pos: Point::new(x, y),
        }
    }

    #[test]
    fn stationary_sequence_is_a_tap() {
        let mut tracker = TouchTracker::new(10.0);
        assert_eq!(tracker.handle(down(A, 50.0, 50.0)), Gesture::Idle);
        assert!(tracker.is_active());
        assert_eq!(tracker.handle(moved(A, 53.0, 52.0)), Gesture::Idle);
        assert_eq!(
            tracker.handle(up(A, 53.0, 52.0)),
            Gesture::Ended { tapped: true }
        );
        assert!(!tracker.is_active());
    }

    #[test]
    fn drag_beyond_slop_pans_and_is_not_a_tap() {
        let mut tracker = TouchTracker::new(10.0);
        tracker.handle(down(A, 0.0, 0.0));
        assert_eq!(tracker.handle(moved(A, 4.0, 0.0)), Gesture::Idle);
        // Crossing the slop releases the full motion since the touch went down.
        assert_eq!(
            tracker.handle(moved(A, 15.0, 0.0)),
            Gesture::Pan(Vec2::new(15.0, 0.0))
        );
        assert_eq!(
            tracker.handle(moved(A, 20.0, 5.0)),
            Gesture::Pan(Vec2::new(5.0, 5.0))
        );
        assert_eq!(
            tracker.handle(up(A, 20.0, 5.0)),
            Gesture::Ended { tapped: false }
        );
    }

    #[test]
    fn two_touches_spreading_apart_pinch() {
        let mut tracker = TouchTracker::new(10.0);
        tracker.handle(down(A, 100.0, 100.0));
        tracker.handle(down(B, 200.0, 100.0));
        let gesture = tracker.handle(moved(B, 300.0, 100.0));
        assert_eq!(
            gesture,
            Gesture::Pinch {
                anchor: Point::new(200.0, 100.0),
                factor: 2.0,
                pan: Vec2::new(50.0, 0.0),
            }
        );

        assert_eq!(tracker.handle(up(B, 300.0, 100.0)), Gesture::Idle);
        assert_eq!(
            tracker.handle(up(A, 100.0, 100.0)),
            Gesture::Ended { tapped: false }
        );
    }

    #[test]
    fn cancel_prevents_tap() {
        let mut tracker = TouchTracker::new(10.0);
        tracker.handle(down(A, 10.0, 10.0));
        tracker.handle(down(B, 20.0, 20.0));
        assert_eq!(tracker.handle(TouchEvent::Cancel { id: B }), Gesture::Idle);
        assert_eq!(
            tracker.handle(up(A, 10.0, 10.0)),
            Gesture::Ended { tapped: false }
        );

        // The next sequence starts fresh.
        tracker.handle(down(A, 10.0, 10.0));
        assert_eq!(
            tracker.handle(up(A, 10.0, 10.0)),
            Gesture::Ended { tapped: true }
        );
    }

    #[test]
    fn invalid_slop_behaves_as_zero() {
        for slop in [-5.0, f64::NAN] {
            let mut tracker = TouchTracker::new(slop);
            tracker.handle(down(A, 10.0, 10.0));
            assert_eq!(
                tracker.handle(up(A, 10.0, 10.0)),
                Gesture::Ended { tapped: true }
            );

            tracker.handle(down(A, 10.0, 10.0));
            assert_eq!(
                tracker.handle(moved(A, 11.0, 10.0)),
                Gesture::Pan(Vec2::new(1.0, 0.0))
            );
            assert_eq!(
                tracker.handle(up(A, 11.0, 10.0)),
                Gesture::Ended { tapped: false }
            );
        }
    }

    #[test]
    fn unknown_touches_are_ignored() {
        let mut tracker = TouchTracker::new(10.0);
        assert_eq!(tracker.handle(moved(A, 1.0, 1.0)), Gesture::Idle);
        assert_eq!(tracker.handle(up(A, 1.0, 1.0)), Gesture::Idle);
        assert_eq!(tracker.handle(TouchEvent::Cancel { id: A }), Gesture::Idle);

        tracker.handle(down(A, 0.0, 0.0));
        tracker.reset();
        assert!(!tracker.is_active());
    }
}
