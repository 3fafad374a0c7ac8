//! Experience carousel state: which slide is active, where navigation is
//! heading, and how on-screen visibility settles the two.
//!
//! The controller is a reducer. Every input returns the [`CarouselEffect`]s
//! the rendering layer must perform; it never touches the screen itself.
//! `active_index` only moves when a visibility report confirms a dominant
//! slide, so rapid navigation cannot desynchronize it from what is shown.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::CarouselError,
    gesture::{GestureOutcome, GestureState, SwipeDirection},
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// A slide must be visible by strictly more than this fraction to become active.
    pub dominance_threshold: f32,
    /// Net horizontal drag, in device-independent pixels, that commits a swipe.
    pub commit_threshold_px: f32,
    #[serde(rename = "auto_advance_interval_ms", with = "millis")]
    pub auto_advance_interval: Duration,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            dominance_threshold: 0.5,
            commit_threshold_px: 50.0,
            auto_advance_interval: Duration::from_millis(5000),
        }
    }
}

impl CarouselConfig {
    pub fn validate(&self) -> Result<(), CarouselError> {
        if !(0.0..1.0).contains(&self.dominance_threshold) {
            return Err(CarouselError::InvalidConfig(format!(
                "dominance_threshold must be in [0, 1), got {}",
                self.dominance_threshold
            )));
        }
        if !self.commit_threshold_px.is_finite() || self.commit_threshold_px < 0.0 {
            return Err(CarouselError::InvalidConfig(format!(
                "commit_threshold_px must be a non-negative number, got {}",
                self.commit_threshold_px
            )));
        }
        if self.auto_advance_interval.is_zero() {
            return Err(CarouselError::InvalidConfig(
                "auto_advance_interval_ms must be positive".into(),
            ));
        }
        Ok(())
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityEntry {
    pub index: usize,
    pub visible_fraction: f32,
}

impl VisibilityEntry {
    pub fn new(index: usize, visible_fraction: f32) -> Self {
        Self {
            index,
            visible_fraction,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CarouselEffect {
    /// Smooth-scroll the slide so it is centered in the strip.
    ScrollIntoView { index: usize },
    /// Set the strip's horizontal scroll offset directly (drag in progress).
    SetScrollOffset { offset: f32 },
    /// Suppress the platform's default handling of the current touch move.
    PreventDefault,
    ActiveChanged { index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualWeight {
    Active,
    Adjacent,
    Distant,
}

impl VisualWeight {
    pub fn scale(self) -> f32 {
        match self {
            VisualWeight::Active => 1.0,
            VisualWeight::Adjacent => 0.9,
            VisualWeight::Distant => 0.8,
        }
    }

    pub fn opacity(self) -> f32 {
        match self {
            VisualWeight::Active => 1.0,
            VisualWeight::Adjacent => 0.6,
            VisualWeight::Distant => 0.3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideState {
    pub index: usize,
    pub weight: VisualWeight,
}

pub fn circular_distance(a: usize, b: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let d = a.abs_diff(b) % len;
    d.min(len - d)
}

pub fn visual_weight(active: usize, index: usize, len: usize) -> VisualWeight {
    if index == active {
        return VisualWeight::Active;
    }
    if index >= len {
        return VisualWeight::Distant;
    }
    match circular_distance(active, index, len) {
        1 => VisualWeight::Adjacent,
        _ => VisualWeight::Distant,
    }
}

/// The strip scrolls linearly, so a request from `from` to `to` only crosses
/// the slides strictly between them, whichever way the index wrapped.
fn scroll_passes(from: usize, to: usize, index: usize) -> bool {
    index > from.min(to) && index < from.max(to)
}

/// Inputs accepted by [`CarouselController::apply`].
#[derive(Debug, Clone, PartialEq)]
pub enum CarouselEvent {
    Next,
    Prev,
    GoTo(usize),
    Visibility(Vec<VisibilityEntry>),
    GestureStart { x: f32, y: f32, scroll_offset: f32 },
    GestureMove { x: f32, y: f32 },
    GestureEnd { x: f32, y: f32 },
}

impl CarouselEvent {
    /// Discrete navigation the user asked for. Observer feedback and the
    /// individual moves of a drag do not restart the auto-advance dwell.
    pub fn restarts_dwell(&self) -> bool {
        matches!(
            self,
            CarouselEvent::Next
                | CarouselEvent::Prev
                | CarouselEvent::GoTo(_)
                | CarouselEvent::GestureEnd { .. }
        )
    }
}

#[derive(Debug, Clone)]
pub struct CarouselController {
    len: usize,
    active_index: usize,
    pending_target: Option<usize>,
    gesture: GestureState,
    config: CarouselConfig,
}

impl CarouselController {
    pub fn new(len: usize, config: CarouselConfig) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::Empty);
        }
        config.validate()?;
        Ok(Self {
            len,
            active_index: 0,
            pending_target: None,
            gesture: GestureState::Idle,
            config,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Last requested navigation that has not been confirmed by visibility yet.
    pub fn pending_target(&self) -> Option<usize> {
        self.pending_target
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    pub fn apply(&mut self, event: CarouselEvent) -> Vec<CarouselEffect> {
        match event {
            CarouselEvent::Next => self.advance(),
            CarouselEvent::Prev => self.retreat(),
            CarouselEvent::GoTo(index) => self.go_to(index),
            CarouselEvent::Visibility(entries) => self.reconcile(&entries),
            CarouselEvent::GestureStart {
                x,
                y,
                scroll_offset,
            } => {
                self.gesture_start(x, y, scroll_offset);
                Vec::new()
            }
            CarouselEvent::GestureMove { x, y } => self.gesture_move(x, y),
            CarouselEvent::GestureEnd { x, y } => self.gesture_end(x, y),
        }
    }

    fn navigation_base(&self) -> usize {
        self.pending_target.unwrap_or(self.active_index)
    }

    fn request(&mut self, index: usize) -> Vec<CarouselEffect> {
        debug!(from = self.active_index, to = index, "carousel navigation requested");
        self.pending_target = Some(index);
        vec![CarouselEffect::ScrollIntoView { index }]
    }

    pub fn advance(&mut self) -> Vec<CarouselEffect> {
        let target = (self.navigation_base() + 1) % self.len;
        self.request(target)
    }

    pub fn retreat(&mut self) -> Vec<CarouselEffect> {
        let target = (self.navigation_base() + self.len - 1) % self.len;
        self.request(target)
    }

    /// Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) -> Vec<CarouselEffect> {
        if index >= self.len {
            debug!(index, len = self.len, "ignoring out-of-range carousel target");
            return Vec::new();
        }
        self.request(index)
    }

    pub fn reconcile(&mut self, entries: &[VisibilityEntry]) -> Vec<CarouselEffect> {
        let dominant = entries
            .iter()
            .filter(|e| e.index < self.len && e.visible_fraction.is_finite())
            .fold(None::<&VisibilityEntry>, |best, e| match best {
                Some(b) if b.visible_fraction >= e.visible_fraction => Some(b),
                _ => Some(e),
            });
        let Some(dominant) = dominant else {
            return Vec::new();
        };
        if dominant.visible_fraction <= self.config.dominance_threshold {
            return Vec::new();
        }

        let index = dominant.index;
        if let Some(target) = self.pending_target {
            if !scroll_passes(self.active_index, target, index) {
                self.pending_target = None;
            }
        }
        if index == self.active_index {
            return Vec::new();
        }
        debug!(from = self.active_index, to = index, "carousel settled");
        self.active_index = index;
        vec![CarouselEffect::ActiveChanged { index }]
    }

    /// The user takes over: any navigation still in flight is dropped.
    pub fn gesture_start(&mut self, x: f32, y: f32, scroll_offset: f32) {
        self.pending_target = None;
        self.gesture.start(x, y, scroll_offset);
    }

    pub fn gesture_move(&mut self, x: f32, y: f32) -> Vec<CarouselEffect> {
        match self.gesture.drag(x, y) {
            Some(offset) => vec![
                CarouselEffect::PreventDefault,
                CarouselEffect::SetScrollOffset { offset },
            ],
            None => Vec::new(),
        }
    }

    pub fn gesture_end(&mut self, x: f32, _y: f32) -> Vec<CarouselEffect> {
        match self.gesture.finish(x, self.config.commit_threshold_px) {
            GestureOutcome::Commit(SwipeDirection::Forward) => self.advance(),
            GestureOutcome::Commit(SwipeDirection::Backward) => self.retreat(),
            GestureOutcome::SnapBack => vec![CarouselEffect::ScrollIntoView {
                index: self.active_index,
            }],
            GestureOutcome::Ignored => Vec::new(),
        }
    }

    pub fn visual_weight(&self, index: usize) -> VisualWeight {
        visual_weight(self.active_index, index, self.len)
    }

    pub fn slides(&self) -> Vec<SlideState> {
        (0..self.len)
            .map(|index| SlideState {
                index,
                weight: self.visual_weight(index),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/carousel_tests.rs"]
mod tests;
