//! Status lines emitted by rides while they are operated.
//!
//! Rides never print directly. Every lifecycle method receives an
//! [`Announcements`] sink and pushes its text there; the
//! `print_announcements` system later writes pending lines to stdout and keeps
//! the last [`ANNOUNCEMENT_HISTORY_LEN`] printed lines for inspection.

use bevy::prelude::*;

use crate::config::ANNOUNCEMENT_HISTORY_LEN;

#[derive(Resource, Debug, Clone, Default)]
pub struct Announcements {
    pending: Vec<String>,
    history: Vec<String>,
}

impl Announcements {
    /// Queue a line for printing.
    pub fn push(&mut self, line: impl Into<String>) {
        self.pending.push(line.into());
    }

    /// Lines queued but not yet printed.
    pub fn pending(&self) -> &[String] {
        &self.pending
    }

    /// Take every pending line, recording it in the history. If the history is
    /// full the oldest entries are evicted.
    pub fn drain_pending(&mut self) -> Vec<String> {
        let drained = std::mem::take(&mut self.pending);
        for line in &drained {
            if self.history.len() >= ANNOUNCEMENT_HISTORY_LEN {
                self.history.remove(0);
            }
            self.history.push(line.clone());
        }
        drained
    }

    /// Previously printed lines, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Whether nothing is waiting to be printed.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Write pending announcements to stdout.
pub fn print_announcements(mut announcements: ResMut<Announcements>) {
    for line in announcements.drain_pending() {
        println!("{line}");
    }
}
