//! The site's named effects. Each returns a tween (plus trigger settings where the
//! effect is scroll-linked); binding to elements happens in the UI layer.

use thiserror::Error;

use super::{
    easing::Ease,
    props::Props,
    scroll::{Rect, Scrub, ScrollTrigger, TriggerPosition, Viewport},
    timeline::{Position, Timeline},
    tween::Tween,
};

/// Overlap between consecutive entrance steps (`"-=0.4"`).
pub const ENTRANCE_OVERLAP: f64 = -0.4;
pub const MAGNETIC_STRENGTH: f64 = 0.3;
pub const TEXT_REVEAL_STAGGER: f64 = 0.02;
pub const CURSOR_HOVER_SCALE: f64 = 1.5;
pub const FLOAT_OPACITY: f64 = 0.25;

/// Element top crossing 80% of the viewport height.
pub const REVEAL_START: TriggerPosition = TriggerPosition {
    element: 0.0,
    viewport: 0.8,
};
const REVEAL_END: TriggerPosition = TriggerPosition {
    element: 0.0,
    viewport: 0.2,
};
const PASS_START: TriggerPosition = TriggerPosition {
    element: 0.0,
    viewport: 1.0,
};
const PASS_END: TriggerPosition = TriggerPosition {
    element: 1.0,
    viewport: 0.0,
};

pub fn fade_in(duration: Option<f64>) -> Tween {
    Tween::from(Props::new().opacity(0.0))
        .duration(duration.unwrap_or(1.0))
        .ease(Ease::Power2Out)
}

pub fn slide_up(duration: Option<f64>) -> Tween {
    Tween::from(Props::new().y(100.0).opacity(0.0))
        .duration(duration.unwrap_or(1.0))
        .ease(Ease::Power3Out)
}

/// Per-child tween and the stagger increment.
pub fn stagger_children(each: Option<f64>) -> (Tween, f64) {
    let tween = Tween::from(Props::new().opacity(0.0).y(50.0))
        .duration(0.8)
        .ease(Ease::Power2Out);
    (tween, each.unwrap_or(0.1))
}

/// Per-character tween and the stagger increment.
pub fn text_reveal() -> (Tween, f64) {
    let tween = Tween::from(Props::new().opacity(0.0))
        .duration(0.5)
        .ease(Ease::Power2Out);
    (tween, TEXT_REVEAL_STAGGER)
}

pub fn parallax(speed: Option<f64>) -> (Tween, ScrollTrigger, Scrub) {
    let tween = Tween::to(Props::new().y_percent(speed.unwrap_or(0.5) * 100.0))
        .duration(1.0)
        .ease(Ease::None);
    (tween, ScrollTrigger::new(PASS_START, PASS_END), Scrub::Immediate)
}

pub fn scroll_fade_in() -> (Tween, ScrollTrigger, Scrub) {
    let tween = Tween::from(Props::new().opacity(0.0).y(50.0))
        .duration(1.0)
        .ease(Ease::None);
    (tween, ScrollTrigger::new(REVEAL_START, REVEAL_END), Scrub::Smooth(1.0))
}

/// One-shot reveal when the element scrolls into view.
pub fn reveal_on_enter() -> ScrollTrigger {
    ScrollTrigger::new(REVEAL_START, REVEAL_END).once(true)
}

/// Enter and leave tweens.
pub fn hover_scale(scale: Option<f64>) -> (Tween, Tween) {
    let to = |s: f64| {
        Tween::to(Props::new().scale(s))
            .duration(0.3)
            .ease(Ease::Power2Out)
            .overwrite(true)
    };
    (to(scale.unwrap_or(1.05)), to(1.0))
}

/// Offset of the pointer from the element centre, scaled by `strength`.
pub fn magnetic_offset(rect: &Rect, client_x: f64, client_y: f64, strength: f64) -> (f64, f64) {
    let (cx, cy) = rect.center();
    ((client_x - cx) * strength, (client_y - cy) * strength)
}

pub fn magnetic_pull(rect: &Rect, client_x: f64, client_y: f64) -> Tween {
    let (x, y) = magnetic_offset(rect, client_x, client_y, MAGNETIC_STRENGTH);
    Tween::to(Props::new().x(x).y(y))
        .duration(0.5)
        .ease(Ease::Power2Out)
        .overwrite(true)
}

pub fn magnetic_release() -> Tween {
    Tween::to(Props::new().x(0.0).y(0.0))
        .duration(0.5)
        .ease(Ease::Power2Out)
        .overwrite(true)
}

pub fn cursor_follow(client_x: f64, client_y: f64) -> Tween {
    Tween::to(Props::new().x(client_x).y(client_y))
        .duration(0.1)
        .ease(Ease::Power2Out)
        .overwrite(true)
}

pub fn cursor_grow(hovering: bool) -> Tween {
    let scale = if hovering { CURSOR_HOVER_SCALE } else { 1.0 };
    Tween::to(Props::new().scale(scale))
        .duration(0.3)
        .ease(Ease::Power2Out)
        .overwrite(true)
}

/// Card entrance used by the skills grid.
pub fn scale_in() -> Tween {
    Tween::from(Props::new().opacity(0.0).scale(0.9).y(20.0))
        .duration(0.6)
        .ease(Ease::Power2Out)
}

/// Timeline entry entrance used by the experience section.
pub fn fade_in_left() -> Tween {
    Tween::from(Props::new().opacity(0.0).x(-50.0))
        .duration(0.8)
        .ease(Ease::Power2Out)
}

/// Fade-up step used by the section entrance timelines.
pub fn entrance_step() -> Tween {
    Tween::from(Props::new().opacity(0.0).y(30.0))
        .duration(0.8)
        .ease(Ease::Power3Out)
}

/// Builds the fixed-offset overlapping entrance sequence over `targets`, in order.
pub fn entrance<K>(targets: impl IntoIterator<Item = K>) -> Timeline<K> {
    targets
        .into_iter()
        .enumerate()
        .fold(Timeline::new(), |tl, (i, target)| {
            let position = if i == 0 {
                Position::End
            } else {
                Position::Relative(ENTRANCE_OVERLAP)
            };
            tl.add(target, entrance_step(), position)
        })
}

/// Fades `target` out and back in, one half after the other.
pub fn page_transition<K: Clone>(target: K) -> Timeline<K> {
    let half = |opacity: f64| {
        Tween::to(Props::new().opacity(opacity))
            .duration(0.5)
            .ease(Ease::Power2InOut)
    };
    Timeline::new()
        .add(target.clone(), half(0.0), Position::End)
        .add(target, half(1.0), Position::End)
}

/// Start position and endless drift of one floating background element.
#[derive(Debug, Clone, PartialEq)]
pub struct Float {
    pub start: Props,
    pub drift: Tween,
    pub size_rem: f64,
}

/// Random placement slightly overflowing the viewport; `rand` yields values in `[0, 1)`.
pub fn floating(viewport: Viewport, mut rand: impl FnMut() -> f64) -> Float {
    let (vw, vh) = (viewport.width / 100.0, viewport.height / 100.0);
    let x = (rand() * 120.0 - 10.0) * vw;
    let y = (rand() * 120.0 - 10.0) * vh;
    let size_rem = rand() * 1.5 + 1.0;
    let drift = Tween::to(
        Props::new()
            .x(x + (rand() * 40.0 - 20.0) * vw)
            .y(y + (rand() * 40.0 - 20.0) * vh)
            .rotation(rand() * 360.0),
    )
    .duration(rand() * 3.0 + 7.0)
    .delay(rand() * 5.0)
    .ease(Ease::None)
    .repeat(-1)
    .yoyo(true);
    Float {
        start: Props::new().x(x).y(y).opacity(FLOAT_OPACITY),
        drift,
        size_rem,
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SplitError {
    #[error("element has no text to split")]
    Empty,
    #[error("element contains nested markup")]
    NotPlainText,
}

/// Splits text into per-character pieces for the reveal effect.
pub fn split_chars(text: &str) -> Result<Vec<String>, SplitError> {
    if text.trim().is_empty() {
        return Err(SplitError::Empty);
    }
    Ok(text.chars().map(String::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{props::Prop, tween::Direction};

    #[test]
    fn test_defaults_match_motion_design() {
        assert_eq!(fade_in(None).duration, 1.0);
        assert_eq!(fade_in(Some(2.0)).duration, 2.0);
        assert_eq!(slide_up(None).props.get(Prop::Y), Some(100.0));
        assert_eq!(slide_up(None).ease, Ease::Power3Out);
        let (tween, each) = stagger_children(None);
        assert_eq!((tween.duration, each), (0.8, 0.1));
        let (enter, leave) = hover_scale(None);
        assert_eq!(enter.props.get(Prop::Scale), Some(1.05));
        assert_eq!(leave.props.get(Prop::Scale), Some(1.0));
        let (tween, _, _) = parallax(None);
        assert_eq!(tween.props.get(Prop::YPercent), Some(50.0));
        assert_eq!(tween.direction, Direction::To);
    }

    #[test]
    fn test_magnetic_offset_from_centre() {
        let rect = Rect {
            left: 100.0,
            top: 100.0,
            width: 200.0,
            height: 100.0,
        };
        assert_eq!(magnetic_offset(&rect, 200.0, 150.0, 0.3), (0.0, 0.0));
        let (x, y) = magnetic_offset(&rect, 300.0, 100.0, 0.3);
        assert!((x - 30.0).abs() < 1e-9);
        assert!((y + 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_entrance_is_fixed_overlap_queue() {
        let tl = entrance(["badge", "title", "line", "about", "buttons", "scroll"]);
        let starts = tl.starts();
        assert_eq!(starts.len(), 6);
        for (i, s) in starts.iter().enumerate() {
            assert!((s - i as f64 * 0.4).abs() < 1e-9);
        }
    }

    #[test]
    fn test_page_transition_fades_out_then_in() {
        let tl = page_transition("content");
        assert_eq!(tl.starts(), vec![0.0, 0.5]);
        assert_eq!(tl.duration(), 1.0);
        let opacities = tl
            .steps()
            .iter()
            .map(|s| s.tween.props.get(Prop::Opacity))
            .collect::<Vec<_>>();
        assert_eq!(opacities, vec![Some(0.0), Some(1.0)]);
        assert!(tl
            .steps()
            .iter()
            .all(|s| s.tween.ease == Ease::Power2InOut && s.tween.direction == Direction::To));
    }

    #[test]
    fn test_floating_placement() {
        let viewport = Viewport {
            width: 1000.0,
            height: 500.0,
        };
        let mut seq = [0.0, 0.5, 1.0, 0.5, 0.5, 0.25, 0.5, 0.2].into_iter();
        let float = floating(viewport, move || seq.next().unwrap_or(0.0));
        assert_eq!(
            float.start,
            Props::new().x(-100.0).y(250.0).opacity(FLOAT_OPACITY)
        );
        assert_eq!(float.size_rem, 2.5);
        assert_eq!(float.drift.props.get(Prop::X), Some(-100.0));
        assert_eq!(float.drift.props.get(Prop::Y), Some(250.0));
        assert_eq!(float.drift.props.get(Prop::Rotation), Some(90.0));
        assert_eq!(float.drift.duration, 8.5);
        assert_eq!(float.drift.delay, 1.0);
        assert_eq!(float.drift.repeat, -1);
        assert!(float.drift.yoyo);
    }

    #[test]
    fn test_split_chars() {
        assert_eq!(split_chars("Hi ü").unwrap(), vec!["H", "i", " ", "ü"]);
        assert_eq!(split_chars("  "), Err(SplitError::Empty));
    }
}
