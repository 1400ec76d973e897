//! Live countdowns for the currently visible places.
//!
//! A [`CountdownBoard`] holds the closing instant resolved for each visible
//! place when the list was rendered. Every tick recomputes the label and
//! tier against those stored instants and reports what changed. A place
//! whose countdown reaches zero stays on the board as closed and is no
//! longer ticked.

use chrono::{DateTime, TimeZone};

use crate::models::place::PlaceId;

use super::models::{Countdown, UrgencyThresholds, UrgencyTier};
use super::notifications::is_escalation;

#[derive(Debug, Clone)]
pub struct TrackedCountdown<Tz: TimeZone> {
    pub place_id: PlaceId,
    pub closes_at: DateTime<Tz>,
    pub last_label: String,
    pub last_tier: UrgencyTier,
    pub closed: bool,
}

/// A place whose label or tier changed on a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownChange {
    pub place_id: PlaceId,
    pub label: String,
    pub tier: UrgencyTier,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Escalation {
    pub place_id: PlaceId,
    pub from: UrgencyTier,
    pub to: UrgencyTier,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    pub changed: Vec<CountdownChange>,
    pub escalations: Vec<Escalation>,
    pub newly_closed: Vec<PlaceId>,
}

impl TickReport {
    pub fn is_empty(&self) -> bool {
        self.changed.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct CountdownBoard<Tz: TimeZone> {
    entries: Vec<TrackedCountdown<Tz>>,
    thresholds: UrgencyThresholds,
}

impl<Tz: TimeZone> CountdownBoard<Tz> {
    pub fn new(thresholds: UrgencyThresholds) -> Self {
        Self {
            entries: Vec::new(),
            thresholds,
        }
    }

    /// Drop every tracked countdown and track `closings` instead.
    pub fn replace<I>(&mut self, closings: I, now: &DateTime<Tz>)
    where
        I: IntoIterator<Item = (PlaceId, DateTime<Tz>)>,
    {
        let thresholds = self.thresholds;
        self.entries = closings
            .into_iter()
            .map(|(place_id, closes_at)| {
                let countdown = Countdown::towards(closes_at, now, &thresholds);
                TrackedCountdown {
                    place_id,
                    closed: countdown.is_closed(),
                    last_label: countdown.label,
                    last_tier: countdown.tier,
                    closes_at: countdown.closes_at,
                }
            })
            .collect();
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[TrackedCountdown<Tz>] {
        &self.entries
    }

    pub fn entry(&self, place_id: &str) -> Option<&TrackedCountdown<Tz>> {
        self.entries.iter().find(|entry| entry.place_id == place_id)
    }

    pub fn closing_for(&self, place_id: &str) -> Option<&DateTime<Tz>> {
        self.entry(place_id).map(|entry| &entry.closes_at)
    }

    /// Places that are still counting down.
    pub fn active_ids(&self) -> Vec<PlaceId> {
        self.entries
            .iter()
            .filter(|entry| !entry.closed)
            .map(|entry| entry.place_id.clone())
            .collect()
    }

    pub fn has_active(&self) -> bool {
        self.entries.iter().any(|entry| !entry.closed)
    }

    /// Recompute every active countdown at `now`.
    pub fn refresh(&mut self, now: &DateTime<Tz>) -> TickReport {
        let mut report = TickReport::default();

        for entry in self.entries.iter_mut().filter(|entry| !entry.closed) {
            let countdown = Countdown::towards(entry.closes_at.clone(), now, &self.thresholds);
            let closed = countdown.is_closed();

            if is_escalation(entry.last_tier, countdown.tier) {
                report.escalations.push(Escalation {
                    place_id: entry.place_id.clone(),
                    from: entry.last_tier,
                    to: countdown.tier,
                });
            }

            if countdown.label != entry.last_label || countdown.tier != entry.last_tier {
                report.changed.push(CountdownChange {
                    place_id: entry.place_id.clone(),
                    label: countdown.label.clone(),
                    tier: countdown.tier,
                });
                entry.last_label = countdown.label;
                entry.last_tier = countdown.tier;
            }

            if closed {
                entry.closed = true;
                report.newly_closed.push(entry.place_id.clone());
            }
        }

        report
    }
}
