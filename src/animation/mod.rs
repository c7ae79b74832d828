//! Tween/timeline/scroll-trigger engine behind the site's motion design.

pub mod easing;
pub mod engine;
pub mod presets;
pub mod props;
pub mod scope;
pub mod scroll;
pub mod timeline;
pub mod tween;

pub use easing::Ease;
pub use engine::{AnimationHandle, Engine, Target, TargetId};
pub use props::{Prop, Props, Transform};
pub use scope::Disposers;
pub use scroll::{Rect, Scrub, ScrollTrigger, Viewport};
pub use timeline::{Position, Timeline};
pub use tween::Tween;
