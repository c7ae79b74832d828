//! Binds the animation engine to the DOM.

use leptos::{ev, html::ElementType, prelude::*};
use leptos_use::{use_event_listener, use_raf_fn, UseRafFnCallbackArgs};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

use crate::animation::{
    presets::{self, Float, SplitError},
    AnimationHandle, Disposers, Engine, Position, Props, Rect, Scrub, ScrollTrigger, Target,
    TargetId, Timeline, Transform, Tween, Viewport,
};

/// Frames longer than this are clamped so a backgrounded tab doesn't jump to the end.
const MAX_FRAME_SECS: f64 = 0.1;

#[derive(Debug, Clone, PartialEq)]
pub struct DomTarget(HtmlElement);

impl Target for DomTarget {
    fn apply(&self, transform: &Transform) {
        let style = self.0.style();
        if let Err(e) = style
            .set_property("opacity", &transform.css_opacity())
            .and_then(|_| style.set_property("transform", &transform.css_transform()))
        {
            log::warn!("failed to write animation styles: {e:?}");
        }
    }

    fn rect(&self) -> Rect {
        let r = self.0.get_bounding_client_rect();
        Rect {
            left: r.left(),
            top: r.top(),
            width: r.width(),
            height: r.height(),
        }
    }
}

pub fn viewport() -> Viewport {
    let w = window();
    let dim = |v: Result<wasm_bindgen::JsValue, _>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport {
        width: dim(w.inner_width()),
        height: dim(w.inner_height()),
    }
}

/// Tracked read of a node ref as a plain `HtmlElement`.
pub fn html_element<E>(node: NodeRef<E>) -> Option<HtmlElement>
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
    node.get().map(|el| el.unchecked_into())
}

pub fn child_elements(parent: &HtmlElement) -> Vec<HtmlElement> {
    let children = parent.children();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Shared engine, one per app.
#[derive(Clone, Copy)]
pub struct AnimationEngine(StoredValue<Engine<DomTarget>, LocalStorage>);

impl AnimationEngine {
    /// Runs `f` against the engine; `None` once the app has been torn down.
    pub fn with<U>(&self, f: impl FnOnce(&mut Engine<DomTarget>) -> U) -> Option<U> {
        self.0.try_update_value(f)
    }

    pub fn kill(&self, handle: AnimationHandle) {
        self.with(|e| e.kill(handle));
    }

    pub fn viewport(&self) -> Viewport {
        self.with(|e| e.viewport()).unwrap_or(Viewport {
            width: 0.0,
            height: 0.0,
        })
    }
}

/// Creates the engine and, once mounted, drives it from animation frames and
/// window scroll/resize events.
pub fn provide_animation_engine() -> AnimationEngine {
    let engine = AnimationEngine(StoredValue::new_local(Engine::new(Viewport {
        width: 0.0,
        height: 0.0,
    })));
    provide_context(engine);

    Effect::new(move |_| {
        engine.with(|e| e.on_scroll(viewport()));
        let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
            let dt = (args.delta / 1000.0).min(MAX_FRAME_SECS);
            engine.with(|e| e.tick(dt));
        });
        let _ = use_event_listener(window(), ev::scroll, move |_| {
            engine.with(|e| e.on_scroll(viewport()));
        });
        let _ = use_event_listener(window(), ev::resize, move |_| {
            engine.with(|e| e.on_scroll(viewport()));
        });
        log::debug!("animation engine running");
    });
    engine
}

pub fn init_smooth_scroll() {
    let Some(root) = document()
        .document_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    if let Err(e) = root.style().set_property("scroll-behavior", "smooth") {
        log::warn!("smooth scrolling unavailable: {e:?}");
    }
}

/// Every animation and listener registered through a scope is released when the
/// owning component unmounts.
#[derive(Clone, Copy)]
pub struct AnimationScope {
    engine: AnimationEngine,
    disposers: StoredValue<Disposers>,
}

pub fn use_animation_scope() -> AnimationScope {
    let engine = expect_context::<AnimationEngine>();
    let disposers = StoredValue::new(Disposers::new());
    on_cleanup(move || {
        // dropped outside the arena so disposers can reach the engine
        let taken = disposers.try_update_value(std::mem::take);
        drop(taken);
    });
    AnimationScope { engine, disposers }
}

impl AnimationScope {
    fn register(&self, key: Option<&'static str>, disposer: impl FnOnce() + Send + Sync + 'static) {
        self.disposers.try_update_value(|d| match key {
            Some(key) => d.replace(key, disposer),
            None => d.push(disposer),
        });
    }

    /// Builds under a fresh handle that is killed with the scope.
    fn animate(
        &self,
        key: Option<&'static str>,
        build: impl FnOnce(&mut Engine<DomTarget>, AnimationHandle),
    ) {
        let engine = self.engine;
        let Some(handle) = engine.with(|e| {
            let handle = e.group();
            build(e, handle);
            handle
        }) else {
            return;
        };
        self.register(key, move || engine.kill(handle));
    }

    pub fn viewport(&self) -> Viewport {
        self.engine.viewport()
    }

    /// Registers `el` under a fresh handle the caller is responsible for killing.
    fn own(&self, el: &HtmlElement) -> Option<(AnimationHandle, TargetId)> {
        self.engine.with(|e| {
            let g = e.group();
            let id = e.add_target(DomTarget(el.clone()));
            e.set(g, id, Props::new());
            (g, id)
        })
    }

    fn targets(e: &mut Engine<DomTarget>, els: &[HtmlElement]) -> Vec<TargetId> {
        els.iter()
            .map(|el| e.add_target(DomTarget(el.clone())))
            .collect()
    }

    pub fn play(&self, key: Option<&'static str>, el: &HtmlElement, tween: Tween) {
        self.animate(key, |e, g| {
            let id = e.add_target(DomTarget(el.clone()));
            e.play(g, id, tween);
        });
    }

    pub fn scrub(
        &self,
        key: Option<&'static str>,
        el: &HtmlElement,
        (tween, trigger, scrub): (Tween, ScrollTrigger, Scrub),
    ) {
        self.animate(key, |e, g| {
            let id = e.add_target(DomTarget(el.clone()));
            e.play(g, id, tween);
            e.scrub(g, id, trigger, scrub);
        });
    }

    pub fn stagger(&self, key: Option<&'static str>, items: &[HtmlElement], tween: Tween, each: f64) {
        self.animate(key, |e, g| {
            let ids = Self::targets(e, items);
            e.stagger(g, &ids, tween, each);
        });
    }

    /// Staggers `items` once `anchor` scrolls into view.
    pub fn stagger_on_enter(
        &self,
        key: Option<&'static str>,
        anchor: &HtmlElement,
        items: &[HtmlElement],
        tween: Tween,
        each: f64,
    ) {
        self.animate(key, |e, g| {
            let ids = Self::targets(e, items);
            e.stagger(g, &ids, tween, each);
            let anchor = e.add_target(DomTarget(anchor.clone()));
            e.play_on_enter(g, anchor, presets::reveal_on_enter());
        });
    }

    pub fn timeline(&self, key: Option<&'static str>, timeline: Timeline<HtmlElement>) {
        self.animate(key, |e, g| {
            let mut ids = Timeline::new();
            for step in timeline.steps() {
                let id = e.add_target(DomTarget(step.target.clone()));
                ids = ids.add(id, step.tween, Position::At(step.start));
            }
            e.play_timeline(g, &ids);
        });
    }

    /// Places a floating element and starts its endless drift.
    pub fn float(&self, el: &HtmlElement, float: Float) {
        self.animate(None, |e, g| {
            let id = e.add_target(DomTarget(el.clone()));
            e.set(g, id, float.start);
            e.play(g, id, float.drift);
        });
    }

    /// Scales up on pointer enter and back on leave.
    pub fn hover(&self, key: &'static str, el: &HtmlElement, (enter, leave): (Tween, Tween)) {
        let engine = self.engine;
        let Some((handle, id)) = self.own(el) else {
            return;
        };
        let stop_enter = use_event_listener(el.clone(), ev::mouseenter, move |_| {
            engine.with(|e| e.play(handle, id, enter));
        });
        let stop_leave = use_event_listener(el.clone(), ev::mouseleave, move |_| {
            engine.with(|e| e.play(handle, id, leave));
        });
        self.register(Some(key), move || {
            stop_enter();
            stop_leave();
            engine.kill(handle);
        });
    }

    /// Pulls the element toward the pointer while hovered.
    pub fn magnetic(&self, key: &'static str, el: &HtmlElement) {
        let engine = self.engine;
        let Some((handle, id)) = self.own(el) else {
            return;
        };
        let measured = DomTarget(el.clone());
        let stop_move = use_event_listener(el.clone(), ev::mousemove, move |ev: MouseEvent| {
            let pull = presets::magnetic_pull(
                &measured.rect(),
                ev.client_x() as f64,
                ev.client_y() as f64,
            );
            engine.with(|e| e.play(handle, id, pull));
        });
        let stop_leave = use_event_listener(el.clone(), ev::mouseleave, move |_| {
            engine.with(|e| e.play(handle, id, presets::magnetic_release()));
        });
        self.register(Some(key), move || {
            stop_move();
            stop_leave();
            engine.kill(handle);
        });
    }

    /// Ring trails the pointer, dot tracks it exactly, and the ring grows over
    /// interactive elements present at call time.
    pub fn cursor(&self, ring: &HtmlElement, dot: &HtmlElement) {
        let engine = self.engine;
        let Some((handle, ring_id, dot_id)) = engine.with(|e| {
            let g = e.group();
            let ring = e.add_target(DomTarget(ring.clone()));
            let dot = e.add_target(DomTarget(dot.clone()));
            let centred = Props::new().x_percent(-50.0).y_percent(-50.0);
            e.set(g, ring, centred);
            e.set(g, dot, centred);
            (g, ring, dot)
        }) else {
            return;
        };

        let mut stops: Vec<Box<dyn Fn() + Send + Sync>> = Vec::new();
        stops.push(Box::new(use_event_listener(
            document(),
            ev::mousemove,
            move |ev: MouseEvent| {
                let (x, y) = (ev.client_x() as f64, ev.client_y() as f64);
                engine.with(|e| {
                    e.play(handle, ring_id, presets::cursor_follow(x, y));
                    e.set(handle, dot_id, Props::new().x(x).y(y));
                });
            },
        )));

        let interactive = document()
            .query_selector_all("a, button, [role=\"button\"]")
            .map_err(|e| log::warn!("cursor hover targets unavailable: {e:?}"))
            .ok();
        for node in interactive.iter().flat_map(|list| {
            (0..list.length()).filter_map(move |i| list.get(i))
        }) {
            let Ok(el) = node.dyn_into::<HtmlElement>() else {
                continue;
            };
            stops.push(Box::new(use_event_listener(
                el.clone(),
                ev::mouseenter,
                move |_| {
                    engine.with(|e| e.play(handle, ring_id, presets::cursor_grow(true)));
                },
            )));
            stops.push(Box::new(use_event_listener(el, ev::mouseleave, move |_| {
                engine.with(|e| e.play(handle, ring_id, presets::cursor_grow(false)));
            })));
        }
        self.register(Some("cursor"), move || {
            for stop in stops {
                stop();
            }
            engine.kill(handle);
        });
    }
}

/// Element-bound effects returned by [`use_animations`].
pub struct Animate<E>
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
    node: NodeRef<E>,
    scope: AnimationScope,
}

impl<E> Clone for Animate<E>
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Animate<E>
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
}

/// Node ref plus the named effects bound to it. Call effects from an `Effect`
/// once the ref is populated; re-running one replaces its earlier registration.
pub fn use_animations<E>() -> (NodeRef<E>, Animate<E>)
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
    let node = NodeRef::<E>::new();
    let scope = use_animation_scope();
    (node, Animate { node, scope })
}

impl<E> Animate<E>
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
    fn element(&self) -> Option<HtmlElement> {
        self.node.get_untracked().map(|el| el.unchecked_into())
    }

    pub fn fade_in(&self, duration: Option<f64>) {
        if let Some(el) = self.element() {
            self.scope
                .play(Some("fade_in"), &el, presets::fade_in(duration));
        }
    }

    pub fn page_transition(&self) {
        if let Some(el) = self.element() {
            self.scope
                .timeline(Some("page_transition"), presets::page_transition(el));
        }
    }

    pub fn slide_up(&self, duration: Option<f64>) {
        if let Some(el) = self.element() {
            self.scope
                .play(Some("slide_up"), &el, presets::slide_up(duration));
        }
    }

    pub fn stagger_children(&self, each: Option<f64>) {
        if let Some(el) = self.element() {
            let (tween, each) = presets::stagger_children(each);
            self.scope
                .stagger(Some("stagger_children"), &child_elements(&el), tween, each);
        }
    }

    /// Splits the element's text into per-character spans and fades them in.
    pub fn text_reveal(&self) {
        let Some(el) = self.element() else {
            return;
        };
        if el.child_element_count() > 0 {
            log::warn!("text reveal skipped: {}", SplitError::NotPlainText);
            return;
        }
        let chars = match presets::split_chars(&el.text_content().unwrap_or_default()) {
            Ok(chars) => chars,
            Err(e) => {
                log::warn!("text reveal skipped: {e}");
                return;
            }
        };
        el.set_text_content(None);
        let doc = document();
        let mut spans = Vec::with_capacity(chars.len());
        for ch in chars {
            let Some(span) = doc
                .create_element("span")
                .ok()
                .and_then(|s| s.dyn_into::<HtmlElement>().ok())
            else {
                continue;
            };
            span.set_text_content(Some(&ch));
            let style = span.style();
            if let Err(e) = style
                .set_property("display", "inline-block")
                .and_then(|_| style.set_property("white-space", "pre"))
            {
                log::warn!("failed to style revealed character: {e:?}");
            }
            if el.append_child(&span).is_ok() {
                spans.push(span);
            }
        }
        let (tween, each) = presets::text_reveal();
        self.scope.stagger(Some("text_reveal"), &spans, tween, each);
    }

    /// Scroll-linked vertical drift; negative speeds move against the scroll.
    pub fn parallax(&self, speed: Option<f64>) {
        if let Some(el) = self.element() {
            self.scope
                .scrub(Some("parallax"), &el, presets::parallax(speed));
        }
    }

    pub fn magnetic(&self) {
        if let Some(el) = self.element() {
            self.scope.magnetic("magnetic", &el);
        }
    }

    pub fn scroll_fade_in(&self) {
        if let Some(el) = self.element() {
            self.scope
                .scrub(Some("scroll_fade_in"), &el, presets::scroll_fade_in());
        }
    }

    pub fn hover_scale(&self, scale: Option<f64>) {
        if let Some(el) = self.element() {
            self.scope
                .hover("hover_scale", &el, presets::hover_scale(scale));
        }
    }
}
