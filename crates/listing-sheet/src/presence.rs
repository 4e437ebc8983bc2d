//! Open/close presence of the sheet
//!
//! Opening mounts the sheet at once and starts the slide-in after the enter
//! delay. Closing starts the slide-out at once and unmounts after the exit
//! delay. Time is passed in by the caller so the machine needs no timers.

use crate::config::SheetConfig;
use std::time::{Duration, Instant};

/// Presence phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresencePhase {
    /// Not mounted
    Hidden,
    /// Mounted, waiting to slide in
    Entering {
        /// When the sheet was mounted
        since: Instant,
    },
    /// Mounted and slid in
    Shown,
    /// Sliding out, waiting to unmount
    Leaving {
        /// When the slide-out started
        since: Instant,
    },
}

/// Two-phase visibility machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presence {
    phase: PresencePhase,
    enter_delay: Duration,
    exit_delay: Duration,
}

impl Presence {
    /// Hidden presence with the given delays
    #[must_use]
    pub fn new(enter_delay: Duration, exit_delay: Duration) -> Self {
        Self {
            phase: PresencePhase::Hidden,
            enter_delay,
            exit_delay,
        }
    }

    /// Hidden presence using configured delays
    #[must_use]
    pub fn from_config(config: &SheetConfig) -> Self {
        Self::new(config.enter_delay(), config.exit_delay())
    }

    /// Current phase
    #[inline]
    #[must_use]
    pub fn phase(&self) -> PresencePhase {
        self.phase
    }

    /// Whether the sheet is mounted
    #[inline]
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !matches!(self.phase, PresencePhase::Hidden)
    }

    /// Whether the sheet is slid in (overlay opaque, panel on screen)
    #[inline]
    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, PresencePhase::Shown)
    }

    /// React to the host's open flag
    #[must_use]
    pub fn set_open(self, open: bool, now: Instant) -> Self {
        let phase = match (self.phase, open) {
            (PresencePhase::Hidden | PresencePhase::Leaving { .. }, true) => {
                PresencePhase::Entering { since: now }
            }
            (PresencePhase::Entering { .. } | PresencePhase::Shown, false) => {
                PresencePhase::Leaving { since: now }
            }
            (phase, _) => phase,
        };
        Self { phase, ..self }
    }

    /// Advance pending transitions whose delay has elapsed
    #[must_use]
    pub fn advance(self, now: Instant) -> Self {
        let phase = match self.phase {
            PresencePhase::Entering { since }
                if now.saturating_duration_since(since) >= self.enter_delay =>
            {
                PresencePhase::Shown
            }
            PresencePhase::Leaving { since }
                if now.saturating_duration_since(since) >= self.exit_delay =>
            {
                PresencePhase::Hidden
            }
            phase => phase,
        };
        Self { phase, ..self }
    }

    /// When the next transition is due, if one is pending
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.phase {
            PresencePhase::Entering { since } => Some(since + self.enter_delay),
            PresencePhase::Leaving { since } => Some(since + self.exit_delay),
            PresencePhase::Hidden | PresencePhase::Shown => None,
        }
    }
}

impl Default for Presence {
    fn default() -> Self {
        Self::from_config(&SheetConfig::default())
    }
}
