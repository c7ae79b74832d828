//! The animation engine: owns targets, clock- and scroll-driven tracks, and triggers.
//!
//! Everything here is framework-agnostic; the browser side only supplies a
//! [`Target`] implementation, a frame clock calling [`Engine::tick`] and scroll
//! events calling [`Engine::on_scroll`].

use super::{
    props::{Prop, Props, Transform},
    scroll::{Rect, Scrub, ScrollTrigger, TriggerEvent, Viewport},
    timeline::{stagger_offsets, Timeline},
    tween::{Direction, Tween},
};

/// Something the engine can render into and measure.
pub trait Target {
    fn apply(&self, transform: &Transform);
    fn rect(&self) -> Rect;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetId(u64);

/// Groups every track and trigger created under it so they can be killed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationHandle(u64);

#[derive(Debug, Clone, Copy, PartialEq)]
enum Driver {
    Clock,
    Scroll {
        progress: f64,
        goal: f64,
        scrub: Scrub,
        span: f64,
    },
}

#[derive(Debug, Clone)]
struct Track {
    group: AnimationHandle,
    target: TargetId,
    tween: Tween,
    from: Props,
    to: Props,
    resolved: bool,
    elapsed: f64,
    waiting: bool,
    driver: Driver,
}

impl Track {
    fn finished(&self) -> bool {
        self.driver == Driver::Clock
            && !self.waiting
            && self.tween.is_complete(self.elapsed - self.tween.delay)
    }
}

struct Slot<T> {
    id: TargetId,
    target: T,
    current: Transform,
    owners: Vec<AnimationHandle>,
    dirty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TriggerAction {
    Play,
    Scrub,
}

struct TriggerSlot {
    group: AnimationHandle,
    target: TargetId,
    trigger: ScrollTrigger,
    action: TriggerAction,
}

pub struct Engine<T> {
    slots: Vec<Slot<T>>,
    tracks: Vec<Track>,
    triggers: Vec<TriggerSlot>,
    next_id: u64,
    viewport: Viewport,
}

fn evaluate<T: Target>(
    slot: &mut TriggerSlot,
    slots: &[Slot<T>],
    tracks: &mut [Track],
    viewport: Viewport,
) {
    let Some(rect) = slots
        .iter()
        .find(|s| s.id == slot.target)
        .map(|s| s.target.rect())
    else {
        return;
    };
    let group_tracks = tracks.iter_mut().filter(|t| t.group == slot.group);
    match slot.action {
        TriggerAction::Play => {
            if slot.trigger.update(&rect, viewport.height) == Some(TriggerEvent::Enter) {
                log::debug!("scroll trigger fired for {:?}", slot.target);
                for track in group_tracks {
                    track.waiting = false;
                }
            }
        }
        TriggerAction::Scrub => {
            let p = slot.trigger.progress(&rect, viewport.height);
            for track in group_tracks {
                if let Driver::Scroll { goal, .. } = &mut track.driver {
                    *goal = p;
                }
            }
        }
    }
}

impl<T: Target + PartialEq> Engine<T> {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            slots: Vec::new(),
            tracks: Vec::new(),
            triggers: Vec::new(),
            next_id: 0,
            viewport,
        }
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Registers a target, returning the existing id if it is already known.
    pub fn add_target(&mut self, target: T) -> TargetId {
        if let Some(slot) = self.slots.iter().find(|s| s.target == target) {
            return slot.id;
        }
        let id = TargetId(self.next_id());
        self.slots.push(Slot {
            id,
            target,
            current: Transform::default(),
            owners: Vec::new(),
            dirty: false,
        });
        id
    }

    pub fn group(&mut self) -> AnimationHandle {
        AnimationHandle(self.next_id())
    }

    fn own(&mut self, group: AnimationHandle, target: TargetId) -> Option<&mut Slot<T>> {
        let slot = self.slots.iter_mut().find(|s| s.id == target)?;
        if !slot.owners.contains(&group) {
            slot.owners.push(group);
        }
        Some(slot)
    }

    /// Value a property settles at once pending `from` tweens complete.
    fn natural(&self, target: TargetId, prop: Prop, current: &Transform) -> f64 {
        self.tracks
            .iter()
            .filter(|t| t.target == target && t.tween.direction == Direction::From)
            .find_map(|t| t.to.get(prop))
            .unwrap_or_else(|| current.get(prop))
    }

    /// Applies values immediately, without animating.
    pub fn set(&mut self, group: AnimationHandle, target: TargetId, props: Props) {
        if let Some(slot) = self.own(group, target) {
            slot.current.merge(&props);
            slot.target.apply(&slot.current);
        }
    }

    pub fn play(&mut self, group: AnimationHandle, target: TargetId, tween: Tween) {
        let Some(current) = self.own(group, target).map(|s| s.current) else {
            log::warn!("animation target {target:?} is not registered");
            return;
        };
        if tween.overwrite {
            self.tracks.retain(|t| {
                !(t.target == target
                    && t.driver == Driver::Clock
                    && t.tween.props.overlaps(&tween.props))
            });
        }
        let (from, to, resolved) = match tween.direction {
            Direction::From => {
                let to = tween.props.iter().fold(Props::new(), |acc, (p, _)| {
                    acc.with(p, self.natural(target, p, &current))
                });
                if let Some(slot) = self.slots.iter_mut().find(|s| s.id == target) {
                    // from-tweens render their start state straight away
                    slot.current.merge(&tween.props);
                    slot.target.apply(&slot.current);
                }
                (tween.props, to, true)
            }
            Direction::To => (Props::new(), tween.props, false),
        };
        self.tracks.push(Track {
            group,
            target,
            tween,
            from,
            to,
            resolved,
            elapsed: 0.0,
            waiting: false,
            driver: Driver::Clock,
        });
    }

    /// Plays a single tween under a fresh handle.
    pub fn tween(&mut self, target: TargetId, tween: Tween) -> AnimationHandle {
        let group = self.group();
        self.play(group, target, tween);
        group
    }

    pub fn play_timeline(&mut self, group: AnimationHandle, timeline: &Timeline<TargetId>) {
        for step in timeline.steps() {
            self.play(group, step.target, step.tween.delay(step.start));
        }
    }

    /// Same tween on every target, item `i` delayed by `i * each`.
    pub fn stagger(&mut self, group: AnimationHandle, targets: &[TargetId], tween: Tween, each: f64) {
        for (target, offset) in targets.iter().zip(stagger_offsets(targets.len(), each)) {
            self.play(group, *target, tween.delay(tween.delay + offset));
        }
    }

    /// Holds the group's tracks until `anchor` crosses the trigger's start position.
    pub fn play_on_enter(&mut self, group: AnimationHandle, anchor: TargetId, trigger: ScrollTrigger) {
        for track in self.tracks.iter_mut().filter(|t| t.group == group) {
            track.waiting = true;
        }
        self.add_trigger(group, anchor, trigger.once(true), TriggerAction::Play);
    }

    /// Drives the group's tracks from scroll position instead of time.
    pub fn scrub(&mut self, group: AnimationHandle, anchor: TargetId, trigger: ScrollTrigger, scrub: Scrub) {
        let span = self
            .tracks
            .iter()
            .filter(|t| t.group == group)
            .map(|t| t.tween.end_time().unwrap_or(t.tween.delay + t.tween.duration))
            .fold(0.0, f64::max);
        for track in self.tracks.iter_mut().filter(|t| t.group == group) {
            track.driver = Driver::Scroll {
                progress: 0.0,
                goal: 0.0,
                scrub,
                span,
            };
        }
        self.add_trigger(group, anchor, trigger, TriggerAction::Scrub);
        // start from the current scroll position rather than easing in on load
        for track in self.tracks.iter_mut().filter(|t| t.group == group) {
            if let Driver::Scroll { progress, goal, .. } = &mut track.driver {
                *progress = *goal;
            }
        }
    }

    fn add_trigger(
        &mut self,
        group: AnimationHandle,
        anchor: TargetId,
        trigger: ScrollTrigger,
        action: TriggerAction,
    ) {
        if self.own(group, anchor).is_none() {
            log::warn!("scroll trigger anchor {anchor:?} is not registered");
            return;
        }
        let mut slot = TriggerSlot {
            group,
            target: anchor,
            trigger,
            action,
        };
        evaluate(&mut slot, &self.slots, &mut self.tracks, self.viewport);
        if !slot.trigger.is_done() {
            self.triggers.push(slot);
        }
    }

    /// Removes every track and trigger created under `handle`.
    pub fn kill(&mut self, handle: AnimationHandle) {
        self.tracks.retain(|t| t.group != handle);
        self.triggers.retain(|t| t.group != handle);
        for slot in self.slots.iter_mut() {
            slot.owners.retain(|g| *g != handle);
        }
        self.slots.retain(|s| !s.owners.is_empty());
    }

    /// Advances clock-driven tracks by `dt` seconds and renders changed targets.
    pub fn tick(&mut self, dt: f64) {
        let Self { slots, tracks, .. } = self;
        for track in tracks.iter_mut().filter(|t| !t.waiting) {
            let local = match &mut track.driver {
                Driver::Clock => {
                    track.elapsed += dt;
                    let local = track.elapsed - track.tween.delay;
                    if local < 0.0 {
                        continue;
                    }
                    local
                }
                Driver::Scroll {
                    progress,
                    goal,
                    scrub,
                    span,
                } => {
                    *progress = scrub.approach(*progress, *goal, dt);
                    *progress * *span - track.tween.delay
                }
            };
            let Some(slot) = slots.iter_mut().find(|s| s.id == track.target) else {
                continue;
            };
            if !track.resolved {
                track.from = track.tween.props.pick(&slot.current);
                track.resolved = true;
            }
            let value = track.from.lerp(&track.to, track.tween.progress(local));
            slot.current.merge(&value);
            slot.dirty = true;
        }
        tracks.retain(|t| !t.finished());
        for slot in slots.iter_mut().filter(|s| s.dirty) {
            slot.target.apply(&slot.current);
            slot.dirty = false;
        }
    }

    /// Re-evaluates every trigger against the new scroll position.
    pub fn on_scroll(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let Self {
            slots,
            tracks,
            triggers,
            ..
        } = self;
        for trigger in triggers.iter_mut() {
            evaluate(trigger, slots, tracks, viewport);
        }
        triggers.retain(|t| !t.trigger.is_done());
    }

    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    pub fn trigger_count(&self) -> usize {
        self.triggers.len()
    }

    pub fn target_count(&self) -> usize {
        self.slots.len()
    }

    /// No running tracks and no armed triggers.
    pub fn is_idle(&self) -> bool {
        self.tracks.is_empty() && self.triggers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{easing::Ease, timeline::Position};
    use std::{
        cell::{Cell, RefCell},
        rc::Rc,
    };

    const VIEWPORT: Viewport = Viewport {
        width: 1200.0,
        height: 1000.0,
    };

    #[derive(Clone)]
    struct Mock {
        id: u32,
        top: Rc<Cell<f64>>,
        renders: Rc<RefCell<Vec<Transform>>>,
    }

    impl Mock {
        fn new(id: u32) -> Self {
            Self {
                id,
                top: Rc::new(Cell::new(2000.0)),
                renders: Rc::default(),
            }
        }

        fn last(&self) -> Transform {
            *self.renders.borrow().last().expect("target was never rendered")
        }
    }

    impl PartialEq for Mock {
        fn eq(&self, other: &Self) -> bool {
            self.id == other.id
        }
    }

    impl Target for Mock {
        fn apply(&self, transform: &Transform) {
            self.renders.borrow_mut().push(*transform);
        }

        fn rect(&self) -> Rect {
            Rect {
                left: 0.0,
                top: self.top.get(),
                width: 400.0,
                height: 300.0,
            }
        }
    }

    fn fade_up() -> Tween {
        Tween::from(Props::new().opacity(0.0).y(50.0))
            .duration(1.0)
            .ease(Ease::None)
    }

    fn run(engine: &mut Engine<Mock>, seconds: f64) {
        let frames = (seconds * 100.0).round() as usize;
        for _ in 0..frames {
            engine.tick(0.01);
        }
    }

    #[test]
    fn test_from_renders_start_then_settles() {
        let mut engine = Engine::new(VIEWPORT);
        let el = Mock::new(1);
        let id = engine.add_target(el.clone());
        engine.tween(id, fade_up());
        assert_eq!(el.last().get(Prop::Opacity), 0.0);
        assert_eq!(el.last().get(Prop::Y), 50.0);

        run(&mut engine, 0.5);
        assert!((el.last().get(Prop::Opacity) - 0.5).abs() < 1e-6);

        run(&mut engine, 0.6);
        assert_eq!(el.last(), Transform::default());
        assert!(engine.is_idle());
    }

    #[test]
    fn test_to_resolves_from_current_when_started() {
        let mut engine = Engine::new(VIEWPORT);
        let el = Mock::new(1);
        let id = engine.add_target(el.clone());
        let g = engine.group();
        engine.set(g, id, Props::new().x(100.0));
        engine.play(
            g,
            id,
            Tween::to(Props::new().x(0.0)).duration(1.0).delay(0.5).ease(Ease::None),
        );
        run(&mut engine, 0.49);
        assert!((el.last().get(Prop::X) - 100.0).abs() < 1e-6);
        run(&mut engine, 0.51);
        assert!((el.last().get(Prop::X) - 50.0).abs() < 1e-6);
    }

    #[test]
    fn test_repeated_from_tweens_settle_at_natural_values() {
        let mut engine = Engine::new(VIEWPORT);
        let el = Mock::new(1);
        let id = engine.add_target(el.clone());
        let g = engine.group();
        // fade_in followed by slide_up on the same node
        engine.play(g, id, Tween::from(Props::new().opacity(0.0)).duration(1.0));
        engine.play(g, id, Tween::from(Props::new().opacity(0.0).y(100.0)).duration(1.0));
        run(&mut engine, 1.1);
        assert_eq!(el.last().get(Prop::Opacity), 1.0);
        assert_eq!(el.last().get(Prop::Y), 0.0);
    }

    #[test]
    fn test_timeline_runs_in_declared_order() {
        let mut engine = Engine::new(VIEWPORT);
        let els = (0..3).map(Mock::new).collect::<Vec<_>>();
        let ids = els
            .iter()
            .map(|e| engine.add_target(e.clone()))
            .collect::<Vec<_>>();
        let tl = ids.iter().fold(Timeline::new(), |tl, id| {
            tl.add(*id, fade_up(), Position::Relative(-0.4))
        });
        let g = engine.group();
        engine.play_timeline(g, &tl);

        run(&mut engine, 0.8);
        let opacities = els
            .iter()
            .map(|e| e.last().get(Prop::Opacity))
            .collect::<Vec<_>>();
        assert!(opacities[0] > opacities[1]);
        assert!(opacities[1] > 0.0);
        assert_eq!(opacities[2], 0.0);

        run(&mut engine, 2.0);
        assert!(els.iter().all(|e| e.last() == Transform::default()));
        assert!(engine.is_idle());
    }

    #[test]
    fn test_stagger_offsets_start_times() {
        let mut engine = Engine::new(VIEWPORT);
        let els = (0..4).map(Mock::new).collect::<Vec<_>>();
        let ids = els
            .iter()
            .map(|e| engine.add_target(e.clone()))
            .collect::<Vec<_>>();
        let g = engine.group();
        engine.stagger(g, &ids, fade_up(), 0.2);

        run(&mut engine, 0.25);
        let started = els
            .iter()
            .filter(|e| e.last().get(Prop::Opacity) > 0.0)
            .count();
        assert_eq!(started, 2);
        run(&mut engine, 0.2);
        let started = els
            .iter()
            .filter(|e| e.last().get(Prop::Opacity) > 0.0)
            .count();
        assert_eq!(started, 3);
    }

    #[test]
    fn test_play_on_enter_waits_for_scroll() {
        let mut engine = Engine::new(VIEWPORT);
        let el = Mock::new(1);
        let id = engine.add_target(el.clone());
        let g = engine.group();
        engine.play(g, id, fade_up());
        engine.play_on_enter(g, id, ScrollTrigger::parse("top 80%", "top 20%").unwrap());
        assert_eq!(engine.trigger_count(), 1);

        run(&mut engine, 2.0);
        assert_eq!(el.last().get(Prop::Opacity), 0.0);

        el.top.set(700.0);
        engine.on_scroll(VIEWPORT);
        assert_eq!(engine.trigger_count(), 0);
        run(&mut engine, 1.1);
        assert_eq!(el.last().get(Prop::Opacity), 1.0);

        // scrolling back and forth does not replay
        el.top.set(900.0);
        engine.on_scroll(VIEWPORT);
        el.top.set(600.0);
        engine.on_scroll(VIEWPORT);
        assert!(engine.is_idle());
    }

    #[test]
    fn test_already_visible_plays_immediately() {
        let mut engine = Engine::new(VIEWPORT);
        let el = Mock::new(1);
        el.top.set(100.0);
        let id = engine.add_target(el.clone());
        let g = engine.group();
        engine.play(g, id, fade_up());
        engine.play_on_enter(g, id, ScrollTrigger::parse("top 80%", "top 20%").unwrap());
        assert_eq!(engine.trigger_count(), 0);
        run(&mut engine, 1.1);
        assert_eq!(el.last().get(Prop::Opacity), 1.0);
    }

    #[test]
    fn test_scrub_follows_scroll() {
        let mut engine = Engine::new(VIEWPORT);
        let el = Mock::new(1);
        el.top.set(900.0);
        let id = engine.add_target(el.clone());
        let g = engine.group();
        engine.play(g, id, fade_up());
        engine.scrub(
            g,
            id,
            ScrollTrigger::parse("top 80%", "top 20%").unwrap(),
            Scrub::Immediate,
        );
        engine.tick(0.01);
        assert_eq!(el.last().get(Prop::Opacity), 0.0);

        el.top.set(500.0);
        engine.on_scroll(VIEWPORT);
        engine.tick(0.01);
        assert!((el.last().get(Prop::Opacity) - 0.5).abs() < 1e-6);

        // scrubbed tracks never finish on their own
        el.top.set(0.0);
        engine.on_scroll(VIEWPORT);
        run(&mut engine, 5.0);
        assert_eq!(el.last().get(Prop::Opacity), 1.0);
        assert_eq!(engine.track_count(), 1);
        assert_eq!(engine.trigger_count(), 1);
    }

    #[test]
    fn test_overwrite_replaces_pointer_tweens() {
        let mut engine = Engine::new(VIEWPORT);
        let el = Mock::new(1);
        let id = engine.add_target(el.clone());
        let g = engine.group();
        for i in 0..20 {
            let tween = Tween::to(Props::new().x(i as f64).y(i as f64))
                .duration(0.5)
                .overwrite(true);
            engine.play(g, id, tween);
            engine.tick(0.01);
        }
        assert_eq!(engine.track_count(), 1);
        run(&mut engine, 0.6);
        assert_eq!(el.last().get(Prop::X), 19.0);
    }

    #[test]
    fn test_kill_releases_everything() {
        let mut engine = Engine::new(VIEWPORT);
        let a = engine.add_target(Mock::new(1));
        let b = engine.add_target(Mock::new(2));
        let looping = engine.tween(
            a,
            Tween::to(Props::new().rotation(360.0)).repeat(-1).yoyo(true),
        );
        let g = engine.group();
        engine.play(g, b, fade_up());
        engine.play_on_enter(g, b, ScrollTrigger::parse("top 80%", "top 20%").unwrap());
        run(&mut engine, 1.0);
        assert_eq!(engine.track_count(), 2);

        engine.kill(looping);
        engine.kill(g);
        assert!(engine.is_idle());
        assert_eq!(engine.target_count(), 0);
    }

    #[test]
    fn test_targets_are_deduplicated() {
        let mut engine = Engine::new(VIEWPORT);
        let a = engine.add_target(Mock::new(7));
        let b = engine.add_target(Mock::new(7));
        assert_eq!(a, b);
        assert_eq!(engine.target_count(), 1);
    }
}
