//! Teardown bookkeeping: every listener or animation registration hands back a
//! disposer, and all of them run when the owning scope is torn down.

pub type Disposer = Box<dyn FnOnce() + Send + Sync>;

#[derive(Default)]
pub struct Disposers {
    entries: Vec<(Option<&'static str>, Disposer)>,
}

impl Disposers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, disposer: impl FnOnce() + Send + Sync + 'static) {
        self.entries.push((None, Box::new(disposer)));
    }

    /// Registers under `key`, first disposing whatever the key held.
    pub fn replace(&mut self, key: &'static str, disposer: impl FnOnce() + Send + Sync + 'static) {
        self.dispose(key);
        self.entries.push((Some(key), Box::new(disposer)));
    }

    pub fn dispose(&mut self, key: &'static str) {
        let (matching, rest) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition::<Vec<_>, _>(|(k, _)| *k == Some(key));
        self.entries = rest;
        for (_, d) in matching {
            d();
        }
    }

    pub fn dispose_all(&mut self) {
        for (_, d) in self.entries.drain(..) {
            d();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Drop for Disposers {
    fn drop(&mut self) {
        self.dispose_all();
    }
}

impl std::fmt::Debug for Disposers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Disposers")
            .field("len", &self.entries.len())
            .finish()
    }
}
