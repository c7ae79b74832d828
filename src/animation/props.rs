use std::fmt::Write;

/// An animatable property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prop {
    Opacity,
    X,
    Y,
    XPercent,
    YPercent,
    Scale,
    Rotation,
}

impl Prop {
    pub const ALL: [Prop; 7] = [
        Prop::Opacity,
        Prop::X,
        Prop::Y,
        Prop::XPercent,
        Prop::YPercent,
        Prop::Scale,
        Prop::Rotation,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// Value of an untouched element.
    pub fn identity(self) -> f64 {
        match self {
            Prop::Opacity | Prop::Scale => 1.0,
            _ => 0.0,
        }
    }
}

/// A sparse set of property values; only the set properties are animated.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Props([Option<f64>; 7]);

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, prop: Prop, value: f64) -> Self {
        self.0[prop.index()] = Some(value);
        self
    }

    pub fn opacity(self, v: f64) -> Self {
        self.with(Prop::Opacity, v)
    }

    pub fn x(self, v: f64) -> Self {
        self.with(Prop::X, v)
    }

    pub fn y(self, v: f64) -> Self {
        self.with(Prop::Y, v)
    }

    pub fn x_percent(self, v: f64) -> Self {
        self.with(Prop::XPercent, v)
    }

    pub fn y_percent(self, v: f64) -> Self {
        self.with(Prop::YPercent, v)
    }

    pub fn scale(self, v: f64) -> Self {
        self.with(Prop::Scale, v)
    }

    pub fn rotation(self, v: f64) -> Self {
        self.with(Prop::Rotation, v)
    }

    pub fn get(&self, prop: Prop) -> Option<f64> {
        self.0[prop.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Prop, f64)> + '_ {
        Prop::ALL
            .iter()
            .filter_map(|p| self.get(*p).map(|v| (*p, v)))
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    pub fn overlaps(&self, other: &Props) -> bool {
        self.iter().any(|(p, _)| other.get(p).is_some())
    }

    /// Current values of `transform` for the properties set in `self`.
    pub fn pick(&self, transform: &Transform) -> Props {
        self.iter()
            .fold(Props::new(), |acc, (p, _)| acc.with(p, transform.get(p)))
    }

    /// Interpolates every property of `self` towards `to` by `t`.
    pub fn lerp(&self, to: &Props, t: f64) -> Props {
        self.iter().fold(Props::new(), |acc, (p, from)| {
            let to = to.get(p).unwrap_or(from);
            let v = if t >= 1.0 { to } else { from + (to - from) * t };
            acc.with(p, v)
        })
    }
}

/// Full render state of one target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform([f64; 7]);

impl Default for Transform {
    fn default() -> Self {
        let mut values = [0.0; 7];
        for p in Prop::ALL {
            values[p.index()] = p.identity();
        }
        Self(values)
    }
}

impl Transform {
    pub fn get(&self, prop: Prop) -> f64 {
        self.0[prop.index()]
    }

    pub fn merge(&mut self, props: &Props) {
        for (p, v) in props.iter() {
            self.0[p.index()] = v;
        }
    }

    pub fn css_opacity(&self) -> String {
        format!("{}", self.get(Prop::Opacity))
    }

    /// CSS `transform` value; percentages first so centring offsets compose with motion.
    pub fn css_transform(&self) -> String {
        let mut out = String::new();
        let (xp, yp) = (self.get(Prop::XPercent), self.get(Prop::YPercent));
        if xp != 0.0 || yp != 0.0 {
            let _ = write!(out, "translate({xp}%, {yp}%) ");
        }
        let (x, y) = (self.get(Prop::X), self.get(Prop::Y));
        if x != 0.0 || y != 0.0 {
            let _ = write!(out, "translate({x}px, {y}px) ");
        }
        let r = self.get(Prop::Rotation);
        if r != 0.0 {
            let _ = write!(out, "rotate({r}deg) ");
        }
        let s = self.get(Prop::Scale);
        if s != 1.0 {
            let _ = write!(out, "scale({s}) ");
        }
        if out.is_empty() {
            "none".to_string()
        } else {
            out.trim_end().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_only_touches_set_props() {
        let from = Props::new().opacity(0.0).y(50.0);
        let to = Props::new().opacity(1.0).y(0.0).scale(3.0);
        let mid = from.lerp(&to, 0.5);
        assert_eq!(mid.get(Prop::Opacity), Some(0.5));
        assert_eq!(mid.get(Prop::Y), Some(25.0));
        assert_eq!(mid.get(Prop::Scale), None);
    }

    #[test]
    fn test_pick_reads_current_values() {
        let mut t = Transform::default();
        t.merge(&Props::new().x(12.0));
        let picked = Props::new().x(0.0).opacity(0.0).pick(&t);
        assert_eq!(picked, Props::new().x(12.0).opacity(1.0));
    }

    #[test]
    fn test_css_output() {
        assert_eq!(Transform::default().css_transform(), "none");
        let mut t = Transform::default();
        t.merge(&Props::new().x_percent(-50.0).y_percent(-50.0).x(10.0).scale(1.5));
        assert_eq!(
            t.css_transform(),
            "translate(-50%, -50%) translate(10px, 0px) scale(1.5)"
        );
        t.merge(&Props::new().opacity(0.25));
        assert_eq!(t.css_opacity(), "0.25");
    }

    #[test]
    fn test_overlaps() {
        let a = Props::new().x(1.0).y(1.0);
        assert!(a.overlaps(&Props::new().y(0.0)));
        assert!(!a.overlaps(&Props::new().scale(2.0)));
        assert!(Props::new().is_empty());
    }
}
