use std::collections::VecDeque;

use chrono::{DateTime, Local};
use eframe::egui::Color32;

use crate::sanitize::sanitize;

/// Maximum entries kept in the log before the oldest is evicted
pub const MESSAGES_LIMIT: usize = 64;
/// Separator placed between coalesced messages
pub const LINE_SEPARATOR: &str = "\n";

/// One block of consecutive messages from a single sender.
///
/// `H` is the renderer's handle for the visual row bound to this entry.
#[derive(Clone, Debug)]
pub struct LogEntry<H> {
    pub sender_name: String,
    pub text: String,
    /// Display color, taken from the first message of the block
    pub color: Color32,
    pub last_updated: DateTime<Local>,
    pub render_handle: Option<H>,
}

impl<H> LogEntry<H> {
    pub fn new(sender_name: String, text: String, color: Color32, now: DateTime<Local>) -> Self {
        Self {
            sender_name,
            text,
            color,
            last_updated: now,
            render_handle: None,
        }
    }

    /// Bind the renderer's row to this entry.
    pub fn attach(&mut self, handle: H) {
        self.render_handle = Some(handle);
    }

    /// Number of messages coalesced into this entry
    pub fn segment_count(&self) -> usize {
        self.text.split(LINE_SEPARATOR).count()
    }

    fn push_segment(&mut self, text: &str, now: DateTime<Local>) {
        self.text.push_str(LINE_SEPARATOR);
        self.text.push_str(text);
        self.last_updated = now;
    }
}

/// Whether an append started a new entry or extended the last one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppendKind {
    Created,
    Merged,
}

/// The entry touched by an append.
#[derive(Debug)]
pub enum AppendResult<'a, H> {
    Created(&'a mut LogEntry<H>),
    Merged(&'a mut LogEntry<H>),
}

impl<'a, H> AppendResult<'a, H> {
    pub fn kind(&self) -> AppendKind {
        match self {
            AppendResult::Created(_) => AppendKind::Created,
            AppendResult::Merged(_) => AppendKind::Merged,
        }
    }

    pub fn entry(&self) -> &LogEntry<H> {
        match self {
            AppendResult::Created(entry) | AppendResult::Merged(entry) => entry,
        }
    }

    pub fn into_entry(self) -> &'a mut LogEntry<H> {
        match self {
            AppendResult::Created(entry) | AppendResult::Merged(entry) => entry,
        }
    }
}

/// Outcome of [`ChatLogBuffer::append`].
#[derive(Debug)]
pub struct Appended<'a, H> {
    pub result: AppendResult<'a, H>,
    /// Handle of the entry evicted to make room; the renderer must release it
    pub evicted: Option<H>,
}

/// Bounded chat log, oldest entry first.
#[derive(Clone, Debug)]
pub struct ChatLogBuffer<H> {
    entries: VecDeque<LogEntry<H>>,
}

impl<H> Default for ChatLogBuffer<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> ChatLogBuffer<H> {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(MESSAGES_LIMIT),
        }
    }

    /// Add a message, coalescing it into the last entry when the sender matches.
    pub fn append(&mut self, sender_name: &str, raw_text: &str, color: Color32) -> Appended<'_, H> {
        self.append_at(sender_name, raw_text, color, Local::now())
    }

    /// [`append`](Self::append) with an explicit timestamp.
    pub fn append_at(
        &mut self,
        sender_name: &str,
        raw_text: &str,
        color: Color32,
        now: DateTime<Local>,
    ) -> Appended<'_, H> {
        // Capacity is enforced even when the message ends up merging
        let evicted = if self.entries.len() >= MESSAGES_LIMIT {
            self.entries.pop_front().and_then(|old| {
                tracing::debug!(sender = %old.sender_name, "evicting oldest chat entry");
                old.render_handle
            })
        } else {
            None
        };

        let text = sanitize(raw_text);

        let merges = self
            .entries
            .back()
            .is_some_and(|last| last.sender_name == sender_name);

        let result = if merges {
            let idx = self.entries.len() - 1;
            let last = &mut self.entries[idx];
            last.push_segment(&text, now);
            AppendResult::Merged(last)
        } else {
            self.entries
                .push_back(LogEntry::new(sender_name.to_string(), text, color, now));
            let idx = self.entries.len() - 1;
            AppendResult::Created(&mut self.entries[idx])
        };

        Appended { result, evicted }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&LogEntry<H>> {
        self.entries.back()
    }

    /// Entries in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry<H>> {
        self.entries.iter()
    }

    /// Drop every entry, returning their handles for disposal.
    pub fn clear(&mut self) -> Vec<H> {
        self.entries
            .drain(..)
            .filter_map(|entry| entry.render_handle)
            .collect()
    }
}
