use super::{easing::Ease, props::Props};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Direction {
    /// Animate from the given values to the target's current state.
    From,
    /// Animate from the target's current state to the given values.
    To,
}

/// One property animation, not yet bound to a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub props: Props,
    pub direction: Direction,
    pub duration: f64,
    pub delay: f64,
    pub ease: Ease,
    /// Extra iterations after the first; `-1` repeats forever.
    pub repeat: i32,
    pub yoyo: bool,
    /// Kill other clock-driven tweens on the same target animating the same properties.
    pub overwrite: bool,
}

impl Tween {
    fn new(props: Props, direction: Direction) -> Self {
        Self {
            props,
            direction,
            duration: 0.5,
            delay: 0.0,
            ease: Ease::default(),
            repeat: 0,
            yoyo: false,
            overwrite: false,
        }
    }

    pub fn from(props: Props) -> Self {
        Self::new(props, Direction::From)
    }

    pub fn to(props: Props) -> Self {
        Self::new(props, Direction::To)
    }

    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = seconds.max(0.0);
        self
    }

    pub fn delay(mut self, seconds: f64) -> Self {
        self.delay = seconds.max(0.0);
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn repeat(mut self, repeat: i32) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn yoyo(mut self, yoyo: bool) -> Self {
        self.yoyo = yoyo;
        self
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Length of all iterations, `None` when repeating forever.
    pub fn active_duration(&self) -> Option<f64> {
        if self.repeat < 0 {
            None
        } else {
            Some(self.duration * (self.repeat as f64 + 1.0))
        }
    }

    /// Delay plus active duration.
    pub fn end_time(&self) -> Option<f64> {
        self.active_duration().map(|d| self.delay + d)
    }

    pub fn is_complete(&self, local: f64) -> bool {
        self.active_duration().is_some_and(|d| local >= d)
    }

    /// Eased progress at `local` seconds after the delay, folding repeats and yoyo.
    pub fn progress(&self, local: f64) -> f64 {
        if local <= 0.0 {
            return 0.0;
        }
        if self.duration <= 0.0 {
            return self.ease.apply(1.0);
        }
        let last_iteration = if self.repeat < 0 {
            u64::MAX
        } else {
            self.repeat as u64
        };
        let raw_iteration = (local / self.duration).floor() as u64;
        let (iteration, t) = if raw_iteration > last_iteration {
            (last_iteration, 1.0)
        } else {
            (raw_iteration, (local % self.duration) / self.duration)
        };
        let t = if self.yoyo && iteration % 2 == 1 {
            1.0 - t
        } else {
            t
        };
        self.ease.apply(t)
    }
}
