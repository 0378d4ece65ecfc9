//! Animation sequencer: time-based property tweens on stage entities.
//!
//! A [`Tween`] moves one entity's position and rotation toward target values
//! over a duration, with an easing curve and an optional start delay. The
//! [`Sequencer`] advances every running tween once per display tick from a
//! monotonic clock.
//!
//! Sequencing has exactly one primitive: a tween's completion callback, which
//! runs once after the tween's final write and may start further tweens.
//! Callbacks receive the sequencer only, never the stage or the table's
//! registry; anything they change happens through the tweens they start.
//!
//! Starting a tween supersedes older tweens on the same entity for the
//! properties they share. The older tween keeps its timing and still
//! completes, it just stops writing those properties.
//!
//! Visibility is not interpolated: `visible: true` is applied when the tween
//! begins (after its delay), `visible: false` when it completes.
//!
//! A retired entity is never written again. Its pending tweens finish on the
//! next tick and still fire their callbacks, so chains keep running.

#[cfg(test)]
#[path = "tween_test.rs"]
mod tween_test;

use std::fmt;

use crate::consts::DEFAULT_DURATION_MS;
use crate::entity::{EntityId, Stage};
use crate::layout::Coord;

/// Easing curves, matching the classic Penner equations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    QuadraticOut,
    QuadraticInOut,
    CubicInOut,
}

impl Easing {
    /// Map linear progress `k` in `[0, 1]` onto the curve.
    #[must_use]
    pub fn apply(self, k: f64) -> f64 {
        match self {
            Self::Linear => k,
            Self::QuadraticOut => k * (2.0 - k),
            Self::QuadraticInOut => {
                let k = k * 2.0;
                if k < 1.0 {
                    0.5 * k * k
                } else {
                    let k = k - 1.0;
                    -0.5 * (k * (k - 2.0) - 1.0)
                }
            }
            Self::CubicInOut => {
                let k = k * 2.0;
                if k < 1.0 {
                    0.5 * k * k * k
                } else {
                    let k = k - 2.0;
                    0.5 * (k * k * k + 2.0)
                }
            }
        }
    }
}

/// Target property values. Only present fields are animated.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Props {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub rotation: Option<f64>,
    pub visible: Option<bool>,
}

impl Props {
    /// Move to a full transform.
    #[must_use]
    pub fn to(coord: Coord) -> Self {
        Self { x: Some(coord.x), y: Some(coord.y), rotation: Some(coord.rotation), visible: None }
    }

    /// Move to a position, leaving rotation alone.
    #[must_use]
    pub fn to_point(x: f64, y: f64) -> Self {
        Self { x: Some(x), y: Some(y), ..Self::default() }
    }

    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none() && self.rotation.is_none() && self.visible.is_none()
    }

    /// Drop every property that `other` also sets.
    #[must_use]
    fn without(self, other: &Props) -> Self {
        Self {
            x: self.x.filter(|_| other.x.is_none()),
            y: self.y.filter(|_| other.y.is_none()),
            rotation: self.rotation.filter(|_| other.rotation.is_none()),
            visible: self.visible.filter(|_| other.visible.is_none()),
        }
    }
}

/// Completion callback; may start further tweens.
pub type OnComplete = Box<dyn FnOnce(&mut Sequencer)>;

/// A scheduled change to one entity.
pub struct Tween {
    target: EntityId,
    to: Props,
    duration_ms: f64,
    delay_ms: f64,
    easing: Easing,
    retire_on_complete: bool,
    on_complete: Option<OnComplete>,
}

impl Tween {
    #[must_use]
    pub fn new(target: EntityId, to: Props) -> Self {
        Self {
            target,
            to,
            duration_ms: DEFAULT_DURATION_MS,
            delay_ms: 0.0,
            easing: Easing::Linear,
            retire_on_complete: false,
            on_complete: None,
        }
    }

    #[must_use]
    pub fn duration(mut self, ms: f64) -> Self {
        self.duration_ms = ms;
        self
    }

    #[must_use]
    pub fn delay(mut self, ms: f64) -> Self {
        self.delay_ms = ms;
        self
    }

    #[must_use]
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Retire the target from the stage once this tween lands.
    #[must_use]
    pub fn retiring(mut self) -> Self {
        self.retire_on_complete = true;
        self
    }

    #[must_use]
    pub fn on_complete(mut self, callback: impl FnOnce(&mut Sequencer) + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn target(&self) -> EntityId {
        self.target
    }

    #[must_use]
    pub fn props(&self) -> Props {
        self.to
    }

    #[must_use]
    pub fn delay_ms(&self) -> f64 {
        self.delay_ms
    }

    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }
}

impl fmt::Debug for Tween {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tween")
            .field("target", &self.target)
            .field("to", &self.to)
            .field("duration_ms", &self.duration_ms)
            .field("delay_ms", &self.delay_ms)
            .field("easing", &self.easing)
            .field("retiring", &self.retire_on_complete)
            .field("chained", &self.on_complete.is_some())
            .finish()
    }
}

/// A tween that has been started, with its absolute start time and the
/// entity's values captured when its delay elapsed.
struct Running {
    tween: Tween,
    start_ms: f64,
    from: Option<Coord>,
}

impl Running {
    /// Write this tick's values. Returns `true` once the tween has finished.
    fn advance(&mut self, now_ms: f64, stage: &mut Stage) -> bool {
        if now_ms < self.start_ms {
            return false;
        }
        let Some(entity) = stage.get_mut(self.tween.target) else {
            return true;
        };
        if entity.is_retired() {
            return true;
        }
        let to = self.tween.to;

        let from = match self.from {
            Some(from) => from,
            None => {
                if to.visible == Some(true) {
                    entity.visible = true;
                }
                let from = entity.transform();
                self.from = Some(from);
                from
            }
        };

        let duration = self.tween.duration_ms;
        let progress = if duration <= 0.0 { 1.0 } else { ((now_ms - self.start_ms) / duration).clamp(0.0, 1.0) };

        if progress >= 1.0 {
            if let Some(x) = to.x {
                entity.x = x;
            }
            if let Some(y) = to.y {
                entity.y = y;
            }
            if let Some(r) = to.rotation {
                entity.rotation = r;
            }
            if to.visible == Some(false) {
                entity.visible = false;
            }
            if self.tween.retire_on_complete {
                stage.retire(self.tween.target);
            }
            return true;
        }

        let k = self.tween.easing.apply(progress);
        if let Some(x) = to.x {
            entity.x = lerp(from.x, x, k);
        }
        if let Some(y) = to.y {
            entity.y = lerp(from.y, y, k);
        }
        if let Some(r) = to.rotation {
            entity.rotation = lerp(from.rotation, r, k);
        }
        false
    }
}

fn lerp(a: f64, b: f64, k: f64) -> f64 {
    a + (b - a) * k
}

/// Owns every running tween and the monotonic clock they are timed against.
#[derive(Default)]
pub struct Sequencer {
    clock_ms: f64,
    running: Vec<Running>,
}

impl Sequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock reading; new tweens start from here.
    #[must_use]
    pub fn now(&self) -> f64 {
        self.clock_ms
    }

    /// Move the clock forward to `now_ms` without advancing tweens.
    /// The clock never runs backward.
    pub fn sync_clock(&mut self, now_ms: f64) {
        self.clock_ms = self.clock_ms.max(now_ms);
    }

    /// Schedule `tween` to begin after its delay, superseding older tweens
    /// on the same entity for the properties it sets.
    pub fn start(&mut self, tween: Tween) {
        for run in &mut self.running {
            if run.tween.target == tween.target {
                run.tween.to = run.tween.to.without(&tween.to);
            }
        }
        let start_ms = self.clock_ms + tween.delay_ms.max(0.0);
        self.running.push(Running { tween, start_ms, from: None });
    }

    /// Advance every running tween to `now_ms`, then fire the completion
    /// callbacks of those that finished, in the order they were started.
    pub fn tick(&mut self, now_ms: f64, stage: &mut Stage) {
        self.sync_clock(now_ms);
        let now = self.clock_ms;

        let mut completed = Vec::new();
        let mut still_running = Vec::with_capacity(self.running.len());
        for mut run in std::mem::take(&mut self.running) {
            if run.advance(now, stage) {
                if let Some(callback) = run.tween.on_complete.take() {
                    completed.push(callback);
                }
            } else {
                still_running.push(run);
            }
        }
        self.running = still_running;

        for callback in completed {
            callback(self);
        }
    }

    /// Number of scheduled or running tweens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.running.len()
    }

    /// Whether nothing is scheduled or running.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.running.is_empty()
    }

    /// Whether a tween targeting `id` is scheduled or running.
    #[must_use]
    pub fn is_animating(&self, id: EntityId) -> bool {
        self.running.iter().any(|run| run.tween.target == id)
    }
}

impl fmt::Debug for Sequencer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequencer")
            .field("clock_ms", &self.clock_ms)
            .field("running", &self.running.len())
            .finish()
    }
}

/// Start delay for card `index` of a staggered run of `total` cards. The
/// last index moves first, index 0 last.
#[must_use]
pub fn stagger_delay(total: usize, index: usize, stagger_ms: f64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let steps = total.saturating_sub(1).saturating_sub(index) as f64;
    steps * stagger_ms
}
