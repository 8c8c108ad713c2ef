//! The chat panel: log buffer, visibility and the interaction state around them.
//!
//! `ChatPanel` is owned by whatever hosts the overlay. Everything is driven
//! from a single thread by explicit calls; `update` is expected once per frame.

use std::time::Duration;

use eframe::egui::Color32;

use crate::buffer::{AppendKind, AppendResult, Appended, ChatLogBuffer};
use crate::config::ChatSettings;
use crate::render::LogRenderer;
use crate::sanitize::sanitize;
use crate::visibility::{FadeState, VisibilityController, BACKGROUND_FADE};

/// Idle time after which an unpinned, unfocused panel hides itself
pub const CHAT_VISIBILITY_TIME: Duration = Duration::from_secs(6);

pub const SILENCED_NOTICE: &str = "Chat is silenced. Incoming messages are still logged.";

pub struct ChatPanel<R: LogRenderer> {
    buffer: ChatLogBuffer<R::Handle>,
    visibility: VisibilityController,
    renderer: R,

    /// Pinned panels stay up until explicitly hidden
    pinned: bool,
    /// Input field focus, as reported by the host
    focused: bool,
    idle: Duration,

    /// Line being composed in the input field
    input: String,
}

impl<R: LogRenderer> ChatPanel<R> {
    pub fn new(renderer: R, settings: &ChatSettings) -> Self {
        let mut panel = Self {
            buffer: ChatLogBuffer::new(),
            visibility: VisibilityController::new(),
            renderer,
            pinned: settings.start_pinned,
            focused: false,
            idle: Duration::ZERO,
            input: String::new(),
        };

        if settings.start_transparent {
            panel.visibility.toggle_transparency();
            panel.visibility.advance_background(BACKGROUND_FADE);
        }
        if settings.silence_chat {
            panel.renderer.notice(SILENCED_NOTICE);
        }
        panel
    }

    /// Log an incoming message and keep the renderer in sync.
    pub fn receive(&mut self, sender: &str, text: &str, color: Color32) -> AppendKind {
        let Appended { result, evicted } = self.buffer.append(sender, text, color);

        if let Some(handle) = evicted {
            self.renderer.dispose(handle);
        }

        let kind = result.kind();
        match result {
            AppendResult::Created(entry) => {
                let handle = self.renderer.create(entry);
                entry.attach(handle);
            }
            AppendResult::Merged(entry) => {
                if let Some(handle) = &entry.render_handle {
                    self.renderer.refresh(handle, entry);
                }
            }
        }
        kind
    }

    /// Fade the panel in and restart the idle timer.
    pub fn show(&mut self) {
        self.idle = Duration::ZERO;
        self.visibility.show();
    }

    pub fn hide(&mut self) {
        self.visibility.hide();
    }

    pub fn toggle_transparency(&mut self) -> bool {
        self.visibility.toggle_transparency()
    }

    pub fn toggle_pin(&mut self) -> bool {
        self.pinned = !self.pinned;
        self.idle = Duration::ZERO;
        self.pinned
    }

    pub fn set_focused(&mut self, focused: bool) {
        if focused {
            self.idle = Duration::ZERO;
        }
        self.focused = focused;
    }

    /// Per-frame step: one fade tick, background cross-fade and idle auto-hide.
    pub fn update(&mut self, dt: Duration) -> FadeState {
        let state = self.visibility.tick();
        self.visibility.advance_background(dt);

        let armed = !self.pinned
            && !self.focused
            && matches!(state, FadeState::FadingIn | FadeState::Visible);
        if armed {
            self.idle += dt;
            if self.idle >= CHAT_VISIBILITY_TIME {
                tracing::debug!(idle_ms = self.idle.as_millis() as u64, "chat idle, hiding");
                self.hide();
            }
        }
        state
    }

    /// Remove every entry from the log.
    pub fn clear(&mut self) {
        for handle in self.buffer.clear() {
            self.renderer.dispose(handle);
        }
    }

    pub fn input_text(&self) -> &str {
        &self.input
    }

    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    /// Take the composed line, cleaned up. Blank input yields `None` and is
    /// discarded.
    pub fn take_input(&mut self) -> Option<String> {
        let line = sanitize(&std::mem::take(&mut self.input));
        (!line.is_empty()).then_some(line)
    }

    pub fn buffer(&self) -> &ChatLogBuffer<R::Handle> {
        &self.buffer
    }

    pub fn visibility(&self) -> &VisibilityController {
        &self.visibility
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }
}
