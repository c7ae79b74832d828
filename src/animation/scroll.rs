//! Viewport-linked triggers: entering on a scroll position and scrubbing between two.

use std::str::FromStr;

use thiserror::Error;

/// Bounding box relative to the viewport, as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TriggerParseError {
    #[error("expected \"<element> <viewport>\", got {0:?}")]
    Shape(String),
    #[error("invalid edge: {0:?}")]
    Edge(String),
}

fn parse_edge(s: &str) -> Result<f64, TriggerParseError> {
    match s {
        "top" => Ok(0.0),
        "center" => Ok(0.5),
        "bottom" => Ok(1.0),
        pct => pct
            .strip_suffix('%')
            .and_then(|n| n.parse::<f64>().ok())
            .map(|n| n / 100.0)
            .ok_or_else(|| TriggerParseError::Edge(s.to_string())),
    }
}

/// A point on the element meeting a point on the viewport, both as fractions of height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerPosition {
    pub element: f64,
    pub viewport: f64,
}

impl TriggerPosition {
    /// Scroll distance left before the position is reached; negative once passed.
    fn remaining(&self, rect: &Rect, viewport_height: f64) -> f64 {
        rect.top + self.element * rect.height - self.viewport * viewport_height
    }
}

impl FromStr for TriggerPosition {
    type Err = TriggerParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(element), Some(viewport), None) => Ok(Self {
                element: parse_edge(element)?,
                viewport: parse_edge(viewport)?,
            }),
            _ => Err(TriggerParseError::Shape(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEvent {
    /// Start position crossed scrolling down.
    Enter,
    /// Start position crossed scrolling back up.
    LeaveBack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TriggerState {
    Unmeasured,
    Before,
    After,
    Done,
}

/// How scroll progress drives a scrubbed animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scrub {
    Immediate,
    /// Catch up with the scroll position over roughly this many seconds.
    Smooth(f64),
}

impl Scrub {
    pub fn approach(&self, current: f64, target: f64, dt: f64) -> f64 {
        match self {
            Scrub::Immediate => target,
            Scrub::Smooth(secs) if *secs <= 0.0 => target,
            Scrub::Smooth(secs) => {
                let next = current + (target - current) * (dt / secs).min(1.0);
                if (target - next).abs() < 1e-4 {
                    target
                } else {
                    next
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTrigger {
    start: TriggerPosition,
    end: TriggerPosition,
    once: bool,
    state: TriggerState,
}

impl ScrollTrigger {
    pub fn new(start: TriggerPosition, end: TriggerPosition) -> Self {
        Self {
            start,
            end,
            once: false,
            state: TriggerState::Unmeasured,
        }
    }

    /// Parses both positions, e.g. `ScrollTrigger::parse("top 80%", "top 20%")`.
    pub fn parse(start: &str, end: &str) -> Result<Self, TriggerParseError> {
        Ok(Self::new(start.parse()?, end.parse()?))
    }

    pub fn once(mut self, once: bool) -> Self {
        self.once = once;
        self
    }

    pub fn is_done(&self) -> bool {
        self.state == TriggerState::Done
    }

    /// Scrub progress between start and end, clamped to `[0, 1]`.
    pub fn progress(&self, rect: &Rect, viewport_height: f64) -> f64 {
        let from_start = -self.start.remaining(rect, viewport_height);
        let span =
            self.end.remaining(rect, viewport_height) - self.start.remaining(rect, viewport_height);
        if span <= 0.0 {
            return if from_start >= 0.0 { 1.0 } else { 0.0 };
        }
        (from_start / span).clamp(0.0, 1.0)
    }

    /// Re-evaluates the start position. Emits at most one event per crossing;
    /// unchanged geometry never emits twice.
    pub fn update(&mut self, rect: &Rect, viewport_height: f64) -> Option<TriggerEvent> {
        let passed = self.start.remaining(rect, viewport_height) <= 0.0;
        let (next, event) = match (self.state, passed) {
            (TriggerState::Done, _) => return None,
            (TriggerState::Unmeasured | TriggerState::Before, true) => {
                (TriggerState::After, Some(TriggerEvent::Enter))
            }
            (TriggerState::Unmeasured | TriggerState::Before, false) => (TriggerState::Before, None),
            (TriggerState::After, true) => (TriggerState::After, None),
            (TriggerState::After, false) => (TriggerState::Before, Some(TriggerEvent::LeaveBack)),
        };
        self.state = if self.once && event == Some(TriggerEvent::Enter) {
            TriggerState::Done
        } else {
            next
        };
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VH: f64 = 1000.0;

    fn at(top: f64) -> Rect {
        Rect {
            left: 0.0,
            top,
            width: 300.0,
            height: 200.0,
        }
    }

    #[test]
    fn test_parse_positions() {
        let p: TriggerPosition = "top 80%".parse().unwrap();
        assert_eq!(p, TriggerPosition { element: 0.0, viewport: 0.8 });
        let p: TriggerPosition = "bottom top".parse().unwrap();
        assert_eq!(p, TriggerPosition { element: 1.0, viewport: 0.0 });
        assert!(matches!("top".parse::<TriggerPosition>(), Err(TriggerParseError::Shape(_))));
        assert!(matches!("top 80".parse::<TriggerPosition>(), Err(TriggerParseError::Edge(_))));
        assert!("middle 50%".parse::<TriggerPosition>().is_err());
    }

    #[test]
    fn test_enter_fires_once_per_forward_crossing() {
        let mut trigger = ScrollTrigger::parse("top 80%", "top 20%").unwrap();
        assert_eq!(trigger.update(&at(900.0), VH), None);
        assert_eq!(trigger.update(&at(900.0), VH), None);
        assert_eq!(trigger.update(&at(790.0), VH), Some(TriggerEvent::Enter));
        // rapid re-evaluation with the same geometry
        for _ in 0..5 {
            assert_eq!(trigger.update(&at(790.0), VH), None);
        }
        assert_eq!(trigger.update(&at(400.0), VH), None);
        assert_eq!(trigger.update(&at(850.0), VH), Some(TriggerEvent::LeaveBack));
        assert_eq!(trigger.update(&at(700.0), VH), Some(TriggerEvent::Enter));
    }

    #[test]
    fn test_already_visible_enters_on_first_measure() {
        let mut trigger = ScrollTrigger::parse("top 80%", "top 20%").unwrap();
        assert_eq!(trigger.update(&at(100.0), VH), Some(TriggerEvent::Enter));
    }

    #[test]
    fn test_once_stops_after_enter() {
        let mut trigger = ScrollTrigger::parse("top 80%", "top 20%").unwrap().once(true);
        assert_eq!(trigger.update(&at(500.0), VH), Some(TriggerEvent::Enter));
        assert!(trigger.is_done());
        assert_eq!(trigger.update(&at(950.0), VH), None);
        assert_eq!(trigger.update(&at(500.0), VH), None);
    }

    #[test]
    fn test_scrub_progress() {
        let trigger = ScrollTrigger::parse("top 80%", "top 20%").unwrap();
        assert_eq!(trigger.progress(&at(900.0), VH), 0.0);
        assert!((trigger.progress(&at(500.0), VH) - 0.5).abs() < 1e-9);
        assert_eq!(trigger.progress(&at(0.0), VH), 1.0);

        // parallax range covers the element's whole pass through the viewport
        let parallax = ScrollTrigger::parse("top bottom", "bottom top").unwrap();
        assert_eq!(parallax.progress(&at(1000.0), VH), 0.0);
        assert!((parallax.progress(&at(400.0), VH) - 0.5).abs() < 1e-9);
        assert_eq!(parallax.progress(&at(-200.0), VH), 1.0);
    }

    #[test]
    fn test_smooth_scrub_converges() {
        let scrub = Scrub::Smooth(1.0);
        let mut p = 0.0;
        for _ in 0..600 {
            p = scrub.approach(p, 1.0, 1.0 / 60.0);
        }
        assert_eq!(p, 1.0);
        assert_eq!(Scrub::Immediate.approach(0.2, 0.7, 0.0), 0.7);
    }
}
