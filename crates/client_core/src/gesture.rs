//! Touch/pointer drag tracking for the carousel strip.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drag {
    pub origin: Point,
    /// Horizontal scroll offset of the strip when the drag began.
    pub start_offset: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging(Drag),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved right-to-left: show the next slide.
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    Commit(SwipeDirection),
    SnapBack,
    /// End without a matching start.
    Ignored,
}

impl GestureState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, GestureState::Dragging(_))
    }

    /// A new start replaces any drag still in progress.
    pub fn start(&mut self, x: f32, y: f32, scroll_offset: f32) {
        *self = GestureState::Dragging(Drag {
            origin: Point { x, y },
            start_offset: scroll_offset,
        });
    }

    /// Returns the scroll offset to apply when the move is horizontal-dominant,
    /// `None` when the page should keep its native vertical scroll.
    pub fn drag(&self, x: f32, y: f32) -> Option<f32> {
        let GestureState::Dragging(drag) = self else {
            return None;
        };
        let dx = x - drag.origin.x;
        let dy = y - drag.origin.y;
        (dx.abs() > dy.abs()).then_some(drag.start_offset - dx)
    }

    pub fn finish(&mut self, x: f32, commit_threshold: f32) -> GestureOutcome {
        let GestureState::Dragging(drag) = std::mem::take(self) else {
            return GestureOutcome::Ignored;
        };
        let dx = x - drag.origin.x;
        if dx.abs() > commit_threshold {
            if dx < 0.0 {
                GestureOutcome::Commit(SwipeDirection::Forward)
            } else {
                GestureOutcome::Commit(SwipeDirection::Backward)
            }
        } else {
            GestureOutcome::SnapBack
        }
    }
}
