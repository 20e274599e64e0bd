use std::collections::VecDeque;

/// Action performed once a notice is dismissed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    Reload,
}

/// A modal message; input is blocked until it is dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub follow_up: Option<FollowUp>,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            follow_up: None,
        }
    }

    pub fn then(mut self, follow_up: FollowUp) -> Self {
        self.follow_up = Some(follow_up);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct Notices {
    queue: VecDeque<Notice>,
}

impl Notices {
    pub fn push(&mut self, notice: Notice) {
        self.queue.push_back(notice);
    }

    pub fn current(&self) -> Option<&Notice> {
        self.queue.front()
    }

    pub fn is_open(&self) -> bool {
        !self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Closes the front notice and hands back its follow-up, if any
    pub fn dismiss(&mut self) -> Option<FollowUp> {
        self.queue.pop_front().and_then(|n| n.follow_up)
    }
}
