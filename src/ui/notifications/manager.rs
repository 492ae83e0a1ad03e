// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle: queuing, auto-dismiss timing, and removal.

use super::notification::{Notification, NotificationId};
use std::collections::VecDeque;
use std::time::Instant;

/// Cap on simultaneously displayed toasts; the rest wait in the backlog.
const MAX_VISIBLE: usize = 3;

/// State changes the toast overlay can request.
#[derive(Debug, Clone)]
pub enum Message {
    /// The dismiss button of one toast was pressed.
    Dismiss(NotificationId),
    /// Periodic check for expired toasts.
    Tick,
}

/// Holds the on-screen toasts and the overflow backlog.
#[derive(Debug, Default)]
pub struct Manager {
    /// Toasts currently rendered, newest first.
    on_screen: VecDeque<Notification>,
    /// Overflow waiting for a free slot.
    backlog: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts a notification for display.
    ///
    /// It shows immediately while fewer than `MAX_VISIBLE` toasts are on
    /// screen and waits in the backlog otherwise.
    pub fn push(&mut self, toast: Notification) {
        if self.on_screen.len() == MAX_VISIBLE {
            self.backlog.push_back(toast);
        } else {
            self.on_screen.push_front(toast);
        }
    }

    /// Removes one notification wherever it currently lives.
    ///
    /// Returns `false` when the id matches nothing, which happens when a
    /// dismiss press races an auto-dismiss tick.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let population = self.on_screen.len() + self.backlog.len();
        self.on_screen.retain(|toast| toast.id() != id);
        self.backlog.retain(|toast| toast.id() != id);

        let removed = self.on_screen.len() + self.backlog.len() < population;
        if removed {
            self.refill_screen();
        }
        removed
    }

    /// Expires on-screen toasts against the wall clock.
    ///
    /// The application drives this from its tick subscription while any
    /// notification is alive.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Expires on-screen toasts as of `now`.
    pub fn tick_at(&mut self, now: Instant) {
        let shown = self.on_screen.len();
        self.on_screen
            .retain(|toast| !toast.should_auto_dismiss_at(now));

        if self.on_screen.len() < shown {
            self.refill_screen();
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => self.tick(),
        }
    }

    /// Toasts currently on screen, newest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.on_screen.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.on_screen.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.backlog.len()
    }

    /// Whether anything is on screen or waiting.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !(self.on_screen.is_empty() && self.backlog.is_empty())
    }

    /// Drops every notification, shown and waiting alike.
    pub fn clear(&mut self) {
        self.on_screen.clear();
        self.backlog.clear();
    }

    /// Dismisses every notification whose message key starts with `prefix`.
    ///
    /// Called when a new operation supersedes the outcome of a previous one,
    /// e.g. starting a fresh import batch while stale import toasts are still
    /// on screen.
    pub fn dismiss_by_prefix(&mut self, prefix: &str) {
        let shown = self.on_screen.len();
        self.on_screen
            .retain(|toast| !toast.message_key().starts_with(prefix));
        self.backlog
            .retain(|toast| !toast.message_key().starts_with(prefix));

        if self.on_screen.len() < shown {
            self.refill_screen();
        }
    }

    /// Moves backlog entries into freed slots, oldest first.
    fn refill_screen(&mut self) {
        while self.on_screen.len() < MAX_VISIBLE {
            match self.backlog.pop_front() {
                Some(next) => self.on_screen.push_back(next),
                None => break,
            }
        }
    }
}
