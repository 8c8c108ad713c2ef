//! Panel fade state machine and background transparency toggle.
//!
//! Both are advanced by the host: [`VisibilityController::tick`] performs one
//! opacity step per call, [`VisibilityController::advance_background`] moves
//! the background cross-fade by a wall-clock delta. The controller only
//! reports its own values; combining them is the renderer's job.

use std::time::Duration;

/// Opacity change applied per tick
pub const FADE_STEP: f32 = 0.01;
/// Background alpha while transparency is toggled on
pub const TOGGLED_TRANSPARENCY: f32 = 0.4;
/// Duration of the background cross-fade
pub const BACKGROUND_FADE: Duration = Duration::from_millis(500);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FadeDirection {
    #[default]
    None,
    FadingIn,
    FadingOut,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadeState {
    Hidden,
    FadingIn,
    Visible,
    FadingOut,
}

/// Linear alpha transition of the panel background.
#[derive(Clone, Copy, Debug)]
struct BackgroundFade {
    from: f32,
    to: f32,
    elapsed: Duration,
}

impl BackgroundFade {
    fn settled(alpha: f32) -> Self {
        Self {
            from: alpha,
            to: alpha,
            elapsed: BACKGROUND_FADE,
        }
    }

    fn alpha(&self) -> f32 {
        let t = (self.elapsed.as_secs_f32() / BACKGROUND_FADE.as_secs_f32()).min(1.0);
        self.from + (self.to - self.from) * t
    }
}

#[derive(Clone, Debug)]
pub struct VisibilityController {
    opacity: f32,
    direction: FadeDirection,
    transparent: bool,
    background: BackgroundFade,
}

impl Default for VisibilityController {
    fn default() -> Self {
        Self::new()
    }
}

impl VisibilityController {
    /// A hidden, opaque-background controller.
    pub fn new() -> Self {
        Self {
            opacity: 0.0,
            direction: FadeDirection::None,
            transparent: false,
            background: BackgroundFade::settled(1.0),
        }
    }

    /// A fully visible controller with no fade in progress.
    pub fn visible() -> Self {
        Self {
            opacity: 1.0,
            ..Self::new()
        }
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn direction(&self) -> FadeDirection {
        self.direction
    }

    pub fn is_transparent(&self) -> bool {
        self.transparent
    }

    pub fn state(&self) -> FadeState {
        match self.direction {
            FadeDirection::FadingIn => FadeState::FadingIn,
            FadeDirection::FadingOut => FadeState::FadingOut,
            FadeDirection::None if self.opacity <= 0.0 => FadeState::Hidden,
            FadeDirection::None => FadeState::Visible,
        }
    }

    /// Whether any part of the panel can currently be seen.
    pub fn is_shown(&self) -> bool {
        self.opacity > 0.0 || self.direction == FadeDirection::FadingIn
    }

    /// Start fading in. Restarts the animation without touching the opacity.
    pub fn show(&mut self) {
        self.direction = FadeDirection::FadingIn;
    }

    /// Start fading out, overriding any fade in progress.
    pub fn hide(&mut self) {
        self.direction = FadeDirection::FadingOut;
    }

    /// Advance the fade by one step.
    pub fn tick(&mut self) -> FadeState {
        match self.direction {
            FadeDirection::FadingIn => {
                self.opacity = (self.opacity + FADE_STEP).min(1.0);
                if self.opacity >= 1.0 {
                    self.direction = FadeDirection::None;
                }
            }
            FadeDirection::FadingOut => {
                self.opacity = (self.opacity - FADE_STEP).max(0.0);
                if self.opacity <= 0.0 {
                    self.direction = FadeDirection::None;
                }
            }
            FadeDirection::None => {}
        }
        self.state()
    }

    /// Flip background transparency and start the cross-fade toward the new
    /// target. Returns the new value.
    pub fn toggle_transparency(&mut self) -> bool {
        self.transparent = !self.transparent;
        self.background = BackgroundFade {
            from: self.background.alpha(),
            to: self.background_target(),
            elapsed: Duration::ZERO,
        };
        self.transparent
    }

    /// Alpha the background is fading toward.
    pub fn background_target(&self) -> f32 {
        if self.transparent {
            TOGGLED_TRANSPARENCY
        } else {
            1.0
        }
    }

    pub fn advance_background(&mut self, dt: Duration) {
        self.background.elapsed = (self.background.elapsed + dt).min(BACKGROUND_FADE);
    }

    /// Current background alpha, between the previous and the target value.
    pub fn background_alpha(&self) -> f32 {
        self.background.alpha()
    }
}
