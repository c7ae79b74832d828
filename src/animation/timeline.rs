//! Sequencing of tweens with fixed, precomputed start offsets

use super::tween::Tween;

/// Where a step starts relative to the timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    /// When the previous step ends.
    End,
    /// Offset from the previous step's end; negative values overlap (`"-=0.4"`).
    Relative(f64),
    /// Absolute time from the start of the timeline.
    At(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Step<K> {
    pub target: K,
    pub tween: Tween,
    pub start: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Timeline<K> {
    steps: Vec<Step<K>>,
    cursor: f64,
    duration: f64,
}

impl<K> Default for Timeline<K> {
    fn default() -> Self {
        Self {
            steps: Vec::new(),
            cursor: 0.0,
            duration: 0.0,
        }
    }
}

impl<K> Timeline<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step. The tween's own delay is folded into the step start.
    pub fn add(mut self, target: K, tween: Tween, position: Position) -> Self {
        let start = match position {
            Position::End => self.cursor,
            Position::Relative(offset) => self.cursor + offset,
            Position::At(t) => t,
        }
        .max(0.0)
            + tween.delay;
        let end = start + tween.active_duration().unwrap_or(tween.duration);
        self.cursor = end;
        self.duration = self.duration.max(end);
        self.steps.push(Step {
            target,
            tween: Tween { delay: 0.0, ..tween },
            start,
        });
        self
    }

    pub fn steps(&self) -> &[Step<K>] {
        &self.steps
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn starts(&self) -> Vec<f64> {
        self.steps.iter().map(|s| s.start).collect()
    }
}

/// Start offsets for `count` items staggered by `each` seconds.
pub fn stagger_offsets(count: usize, each: f64) -> Vec<f64> {
    (0..count).map(|i| i as f64 * each).collect()
}
