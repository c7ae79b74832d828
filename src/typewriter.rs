use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TypewriterError {
    #[error("typewriter needs at least one text")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Pausing,
    Deleting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub speed: Duration,
    pub delete_speed: Duration,
    pub delay_between: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            speed: Duration::from_millis(100),
            delete_speed: Duration::from_millis(50),
            delay_between: Duration::from_millis(2000),
        }
    }
}

/// Cycles through `texts`, typing each one out, holding it, then deleting it
/// one character at a time.
#[derive(Debug, Clone)]
pub struct Typewriter {
    texts: Vec<Vec<char>>,
    index: usize,
    shown: usize,
    phase: Phase,
    timing: Timing,
}

impl Typewriter {
    pub fn new(texts: &[String], timing: Timing) -> Result<Self, TypewriterError> {
        if texts.is_empty() {
            return Err(TypewriterError::Empty);
        }
        Ok(Self {
            texts: texts.iter().map(|s| s.chars().collect()).collect(),
            index: 0,
            shown: 0,
            phase: Phase::Typing,
            timing,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn text(&self) -> String {
        self.target()[..self.shown].iter().collect()
    }

    fn target(&self) -> &[char] {
        &self.texts[self.index]
    }

    /// Delay before the first step.
    pub fn initial_delay(&self) -> Duration {
        self.timing.speed
    }

    fn remove_char(&mut self) -> Duration {
        self.shown = self.shown.saturating_sub(1);
        if self.shown == 0 {
            self.index = (self.index + 1) % self.texts.len();
            self.phase = Phase::Typing;
            self.timing.speed
        } else {
            self.phase = Phase::Deleting;
            self.timing.delete_speed
        }
    }

    /// Advances one step and returns how long to wait before the next one.
    pub fn step(&mut self) -> Duration {
        match self.phase {
            Phase::Typing if self.shown < self.target().len() => {
                self.shown += 1;
                self.timing.speed
            }
            Phase::Typing => {
                self.phase = Phase::Pausing;
                self.timing.delay_between
            }
            Phase::Pausing | Phase::Deleting => self.remove_char(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    fn immediate() -> Timing {
        Timing {
            speed: Duration::ZERO,
            delete_speed: Duration::ZERO,
            delay_between: Duration::ZERO,
        }
    }

    #[test]
    fn test_cycle_sequence() {
        let mut tw = Typewriter::new(&texts(&["A", "BB"]), immediate()).unwrap();
        let mut seen = vec![(tw.text(), tw.phase())];
        for _ in 0..9 {
            tw.step();
            seen.push((tw.text(), tw.phase()));
        }
        let expected = vec![
            ("", Phase::Typing),
            ("A", Phase::Typing),
            ("A", Phase::Pausing),
            ("", Phase::Typing),
            ("B", Phase::Typing),
            ("BB", Phase::Typing),
            ("BB", Phase::Pausing),
            ("B", Phase::Deleting),
            ("", Phase::Typing),
            ("A", Phase::Typing),
        ];
        let expected = expected
            .into_iter()
            .map(|(s, p)| (s.to_string(), p))
            .collect::<Vec<_>>();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_delays_follow_phase() {
        let timing = Timing::default();
        let mut tw = Typewriter::new(&texts(&["ab"]), timing).unwrap();
        assert_eq!(tw.step(), timing.speed); // "a"
        assert_eq!(tw.step(), timing.speed); // "ab"
        assert_eq!(tw.step(), timing.delay_between); // hold
        assert_eq!(tw.step(), timing.delete_speed); // "a"
        assert_eq!(tw.step(), timing.speed); // "", wraps to the same text
        assert_eq!(tw.index(), 0);
    }

    #[test]
    fn test_bounds_hold_over_many_steps() {
        let list = texts(&["héllo", "", "wörld!"]);
        let mut tw = Typewriter::new(&list, immediate()).unwrap();
        for _ in 0..500 {
            tw.step();
            assert!(tw.index() < list.len());
            assert!(tw.text().chars().count() <= list[tw.index()].chars().count());
            assert!(list[tw.index()].starts_with(&tw.text()));
        }
    }

    #[test]
    fn test_empty_list_rejected() {
        assert_eq!(
            Typewriter::new(&[], Timing::default()).unwrap_err(),
            TypewriterError::Empty
        );
    }
}
