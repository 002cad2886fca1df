//! Transient toast alerts
//!
//! Each toast walks a fixed lifecycle:
//!
//! ```text
//! Pending --(entrance delay)--> Visible --(display duration)--> Dismissing --(exit done)--> removed
//! ```
//!
//! The display duration is measured from insertion and depends on severity:
//! escalations stay twice as long as everything else. A dismissing toast is
//! only removed once the renderer reports its exit transition finished via
//! [`ToastStack::transition_complete`].
//!
//! Time is always passed in as an [`Instant`] so the lifecycle can be driven
//! deterministically.

use crate::config::AlertConfig;
use crate::types::{Notification, Severity};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Stable toast identifier
pub type ToastId = u64;

/// Lifecycle phase of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Inserted, entrance not started yet
    Pending,
    /// On screen
    Visible,
    /// Exit transition running
    Dismissing,
}

/// Timing parameters of the toast lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTimings {
    pub entrance_delay: Duration,
    pub normal_duration: Duration,
    pub escalation_duration: Duration,
    pub exit_transition: Duration,
}

impl ToastTimings {
    /// Time on screen for a severity, measured from insertion
    pub fn display_duration(&self, severity: &Severity) -> Duration {
        if severity.is_escalation() {
            self.escalation_duration
        } else {
            self.normal_duration
        }
    }
}

impl Default for ToastTimings {
    fn default() -> Self {
        Self::from(&AlertConfig::default())
    }
}

impl From<&AlertConfig> for ToastTimings {
    fn from(config: &AlertConfig) -> Self {
        Self {
            entrance_delay: Duration::from_millis(config.entrance_delay_ms),
            normal_duration: Duration::from_millis(config.normal_duration_ms),
            escalation_duration: Duration::from_millis(config.escalation_duration_ms),
            exit_transition: Duration::from_millis(config.exit_transition_ms),
        }
    }
}

/// One toast on the stack
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    notification: Notification,
    phase: ToastPhase,
    visible_at: Instant,
    dismiss_at: Instant,
    dismissed_at: Option<Instant>,
}

impl Toast {
    pub fn id(&self) -> ToastId {
        self.id
    }

    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    pub fn phase(&self) -> ToastPhase {
        self.phase
    }

    /// When the exit transition started, if it has
    pub fn dismissed_at(&self) -> Option<Instant> {
        self.dismissed_at
    }

    /// Title line, e.g. `[CRITICAL] Smoke detected`
    pub fn heading(&self) -> String {
        format!(
            "[{}] {}",
            self.notification.severity.as_str().to_uppercase(),
            self.notification.title
        )
    }

    fn begin_dismiss(&mut self, now: Instant) {
        if self.phase != ToastPhase::Dismissing {
            self.phase = ToastPhase::Dismissing;
            self.dismissed_at = Some(now);
        }
    }
}

/// Ordered collection of live toasts, most recent first
#[derive(Debug, Clone)]
pub struct ToastStack {
    toasts: VecDeque<Toast>,
    timings: ToastTimings,
    max_visible: Option<usize>,
    next_id: ToastId,
}

impl Default for ToastStack {
    fn default() -> Self {
        Self::new(ToastTimings::default(), None)
    }
}

impl ToastStack {
    pub fn new(timings: ToastTimings, max_visible: Option<usize>) -> Self {
        Self {
            toasts: VecDeque::new(),
            timings,
            max_visible: max_visible.map(|m| m.max(1)),
            next_id: 1,
        }
    }

    pub fn from_config(config: &AlertConfig) -> Self {
        Self::new(ToastTimings::from(config), config.max_visible)
    }

    /// Insert a toast at the top of the stack
    ///
    /// When the visible cap is exceeded the oldest non-dismissing toasts start
    /// their exit early.
    pub fn push(&mut self, notification: Notification, now: Instant) -> ToastId {
        let id = self.next_id;
        self.next_id += 1;

        let duration = self.timings.display_duration(&notification.severity);
        tracing::debug!(
            "Toast {} ({}) shown for {:?}",
            id,
            notification.severity,
            duration
        );

        self.toasts.push_front(Toast {
            id,
            notification,
            phase: ToastPhase::Pending,
            visible_at: now + self.timings.entrance_delay,
            dismiss_at: now + duration,
            dismissed_at: None,
        });

        self.enforce_cap(now);
        id
    }

    fn enforce_cap(&mut self, now: Instant) {
        let Some(max) = self.max_visible else {
            return;
        };

        let mut live = self
            .toasts
            .iter()
            .filter(|t| t.phase != ToastPhase::Dismissing)
            .count();

        // Oldest toasts sit at the back
        for toast in self.toasts.iter_mut().rev() {
            if live <= max {
                break;
            }
            if toast.phase != ToastPhase::Dismissing {
                toast.begin_dismiss(now);
                live -= 1;
            }
        }
    }

    /// Advance every toast's phase to match `now`
    pub fn advance(&mut self, now: Instant) {
        for toast in &mut self.toasts {
            if toast.phase == ToastPhase::Pending && now >= toast.visible_at {
                toast.phase = ToastPhase::Visible;
            }
            if toast.phase != ToastPhase::Dismissing && now >= toast.dismiss_at {
                toast.begin_dismiss(now);
            }
        }
    }

    /// Start the exit of a toast ahead of its timer
    pub fn dismiss(&mut self, id: ToastId, now: Instant) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) => {
                toast.begin_dismiss(now);
                true
            }
            None => false,
        }
    }

    /// Remove a toast whose exit transition has finished
    ///
    /// Ignored for toasts that are not dismissing.
    pub fn transition_complete(&mut self, id: ToastId) -> bool {
        let position = self
            .toasts
            .iter()
            .position(|t| t.id == id && t.phase == ToastPhase::Dismissing);

        match position {
            Some(index) => {
                self.toasts.remove(index);
                true
            }
            None => false,
        }
    }

    /// Time until the next scheduled phase change
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        self.toasts
            .iter()
            .filter_map(|t| match t.phase {
                ToastPhase::Pending => Some(t.visible_at),
                ToastPhase::Visible => Some(t.dismiss_at),
                ToastPhase::Dismissing => None,
            })
            .min()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Toasts, most recent first
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
