use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Context, DayRecord, MoodLabel};

/// In-memory mood history, keyed by date. `NaiveDate` orders
/// chronologically and its ISO form sorts the same way as text, so the
/// persisted blob stays sortable without any extra bookkeeping.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct MoodStore {
    days: BTreeMap<NaiveDate, DayRecord>,
}

impl MoodStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `mood` for `context` on `date`. Creates the day's record
    /// if absent; sibling contexts and other dates are untouched.
    pub fn upsert(&mut self, date: NaiveDate, context: Context, mood: MoodLabel) {
        self.days.entry(date).or_default().set(context, mood);
    }

    pub fn sorted_dates(&self) -> Vec<NaiveDate> {
        self.days.keys().copied().collect()
    }

    /// One point per date in `sorted_dates()` order. `None` marks a date
    /// with no recording for `context` and is distinct from `Some(0)`,
    /// which is a recorded Angry.
    pub fn chart_series(&self, context: Context) -> Vec<Option<u8>> {
        self.days
            .values()
            .map(|record| record.get(context).map(|mood| mood.score()))
            .collect()
    }

    /// The record for the chronologically last date, if any.
    pub fn latest_day_record(&self) -> Option<(NaiveDate, &DayRecord)> {
        self.days
            .iter()
            .next_back()
            .map(|(date, record)| (*date, record))
    }

    pub fn day_record(&self, date: NaiveDate) -> Option<&DayRecord> {
        self.days.get(&date)
    }
}
