//! Contract between the chat panel and whatever draws it.

use crate::buffer::LogEntry;

/// Visual side of the chat log.
///
/// The panel calls these in lockstep with the buffer: `create` for every new
/// entry, `refresh` when a message is coalesced into an existing one, and
/// `dispose` for entries pushed out of the log.
pub trait LogRenderer {
    type Handle: Clone;

    /// Build a row for a freshly created entry.
    fn create(&mut self, entry: &LogEntry<Self::Handle>) -> Self::Handle;

    /// Redraw the row for an entry whose text or timestamp changed.
    fn refresh(&mut self, handle: &Self::Handle, entry: &LogEntry<Self::Handle>);

    /// Release the row of an evicted entry.
    fn dispose(&mut self, handle: Self::Handle);

    /// Show an informational notice outside the log.
    fn notice(&mut self, text: &str) {
        tracing::info!(notice = text, "chat notice");
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Renderer that records every call, for asserting panel behaviour.
    #[derive(Default)]
    pub struct RecordingRenderer {
        next_id: u32,
        pub created: Vec<(u32, String)>,
        pub refreshed: Vec<(u32, String)>,
        pub disposed: Vec<u32>,
        pub notices: Vec<String>,
    }

    impl LogRenderer for RecordingRenderer {
        type Handle = u32;

        fn create(&mut self, entry: &LogEntry<u32>) -> u32 {
            let id = self.next_id;
            self.next_id += 1;
            self.created.push((id, entry.text.clone()));
            id
        }

        fn refresh(&mut self, handle: &u32, entry: &LogEntry<u32>) {
            self.refreshed.push((*handle, entry.text.clone()));
        }

        fn dispose(&mut self, handle: u32) {
            self.disposed.push(handle);
        }

        fn notice(&mut self, text: &str) {
            self.notices.push(text.to_string());
        }
    }
}
