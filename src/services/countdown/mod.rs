mod closing;
mod format;
mod models;
mod notifications;
mod service;

pub use closing::{resolve_closing_time, resolve_closing_time_with_default, DEFAULT_CLOSING_HOUR};
pub use format::{format_duration, time_remaining, urgency_tier};
pub use models::{Countdown, CountdownConfig, UrgencyThresholds, UrgencyTier};
pub use notifications::{closed_message, escalation_message, is_escalation};
pub use service::{CountdownBoard, CountdownChange, Escalation, TickReport, TrackedCountdown};
