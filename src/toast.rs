use std::time::Duration;

pub const TOAST_LIMIT: usize = 3;
pub const TOAST_LIFETIME: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

/// Visible notifications, newest last; the oldest is evicted past the limit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: ToastKind, title: impl Into<String>, description: Option<String>) -> u64 {
        self.next_id += 1;
        self.toasts.push(Toast {
            id: self.next_id,
            kind,
            title: title.into(),
            description,
        });
        if self.toasts.len() > TOAST_LIMIT {
            let excess = self.toasts.len() - TOAST_LIMIT;
            self.toasts.drain(..excess);
        }
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut q = ToastQueue::new();
        let a = q.push(ToastKind::Success, "Sent", None);
        let b = q.push(ToastKind::Error, "Failed", Some("try again".into()));
        assert_ne!(a, b);
        q.dismiss(a);
        assert_eq!(q.len(), 1);
        assert_eq!(q.toasts()[0].title, "Failed");
        // unknown ids are ignored
        q.dismiss(999);
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn test_oldest_evicted_past_limit() {
        let mut q = ToastQueue::new();
        for i in 0..5 {
            q.push(ToastKind::Success, format!("t{i}"), None);
        }
        let titles = q.toasts().iter().map(|t| t.title.as_str()).collect::<Vec<_>>();
        assert_eq!(titles, vec!["t2", "t3", "t4"]);
    }
}
