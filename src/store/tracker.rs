use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context as _, Result};
use chrono::{Local, NaiveDate};
use log::{debug, warn};
use tokio::sync::Mutex;

use super::state::MoodStore;
use crate::models::{Context, DayRecord, MoodLabel, MoodLogEntry};

struct TrackerState {
    store: MoodStore,
    /// Session-scoped entry feed, newest first. Not persisted.
    journal: Vec<MoodLogEntry>,
}

/// Shared owner of the mood history. All mutation goes through
/// `record_mood`, which writes the full store back to disk before
/// returning.
#[derive(Clone)]
pub struct MoodTracker {
    path: Arc<PathBuf>,
    inner: Arc<Mutex<TrackerState>>,
}

impl MoodTracker {
    /// Open the tracker backed by `path`. A missing, unreadable, or
    /// corrupt data file starts an empty history; restoring never fails
    /// the app.
    pub fn new(path: PathBuf) -> Self {
        let store = load_store(&path);
        Self {
            path: Arc::new(path),
            inner: Arc::new(Mutex::new(TrackerState {
                store,
                journal: Vec::new(),
            })),
        }
    }

    /// Record a mood for `context` on the date in `raw_date`. An empty
    /// or unparseable date means no date is selected yet and the call is
    /// a no-op returning `Ok(None)`. Otherwise returns the updated
    /// record for that date.
    pub async fn record_mood(
        &self,
        raw_date: &str,
        context: Context,
        mood: MoodLabel,
    ) -> Result<Option<DayRecord>> {
        let Some(date) = parse_date_key(raw_date) else {
            debug!("Ignoring mood recording without a selected date");
            return Ok(None);
        };

        let mut state = self.inner.lock().await;
        state.store.upsert(date, context, mood);

        // Re-recording a (date, context) pair replaces its feed line
        // instead of duplicating it; fresh entries go to the head.
        state
            .journal
            .retain(|entry| !(entry.date == date && entry.context == context));
        state
            .journal
            .insert(0, MoodLogEntry::new(date, context, mood, Local::now()));

        persist(&self.path, &state.store)?;

        Ok(state.store.day_record(date).cloned())
    }

    pub async fn sorted_dates(&self) -> Vec<NaiveDate> {
        self.inner.lock().await.store.sorted_dates()
    }

    pub async fn chart_series(&self, context: Context) -> Vec<Option<u8>> {
        self.inner.lock().await.store.chart_series(context)
    }

    pub async fn latest_day_record(&self) -> Option<(NaiveDate, DayRecord)> {
        self.inner
            .lock()
            .await
            .store
            .latest_day_record()
            .map(|(date, record)| (date, record.clone()))
    }

    pub async fn day_record(&self, raw_date: &str) -> Option<DayRecord> {
        let date = parse_date_key(raw_date)?;
        self.inner.lock().await.store.day_record(date).cloned()
    }

    pub async fn entries(&self) -> Vec<MoodLogEntry> {
        self.inner.lock().await.journal.clone()
    }

    pub async fn snapshot(&self) -> MoodStore {
        self.inner.lock().await.store.clone()
    }
}

/// Dates arrive from the UI as `YYYY-MM-DD` strings; anything else is
/// treated as "no date selected".
fn parse_date_key(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(err) => {
            debug!("Ignoring unparseable date '{trimmed}': {err}");
            None
        }
    }
}

fn load_store(path: &Path) -> MoodStore {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return MoodStore::new(),
        Err(err) => {
            warn!("Failed to read mood data from {}: {err}", path.display());
            return MoodStore::new();
        }
    };

    serde_json::from_str(&contents).unwrap_or_else(|err| {
        warn!("Discarding corrupt mood data at {}: {err}", path.display());
        MoodStore::new()
    })
}

fn persist(path: &Path, store: &MoodStore) -> Result<()> {
    let serialized = serde_json::to_string_pretty(store)?;
    fs::write(path, serialized)
        .with_context(|| format!("Failed to write mood data to {}", path.display()))
}
