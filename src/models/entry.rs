use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::mood::{Context, MoodLabel};

/// One line in the mood entries feed. Display-only: the timestamp is
/// formatted once when the mood is recorded and never recomputed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MoodLogEntry {
    pub id: String,
    pub date: NaiveDate,
    pub context: Context,
    pub mood: MoodLabel,
    pub glyph: String,
    pub recorded_at: String,
}

impl MoodLogEntry {
    pub fn new(
        date: NaiveDate,
        context: Context,
        mood: MoodLabel,
        recorded_at: DateTime<Local>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            context,
            mood,
            glyph: mood.glyph().to_string(),
            recorded_at: format_recorded_at(recorded_at),
        }
    }
}

/// "Monday, 04 Mar 2024, 3:04 PM"
pub fn format_recorded_at(at: DateTime<Local>) -> String {
    at.format("%A, %d %b %Y, %-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn recorded_at_is_human_readable() {
        let at = Local.with_ymd_and_hms(2024, 3, 4, 15, 4, 0).unwrap();
        assert_eq!(format_recorded_at(at), "Monday, 04 Mar 2024, 3:04 PM");
    }

    #[test]
    fn new_entry_captures_glyph_and_identity() {
        let date = "2024-03-04".parse().unwrap();
        let entry = MoodLogEntry::new(
            date,
            Context::AfterWorkout,
            MoodLabel::Stressed,
            Local.with_ymd_and_hms(2024, 3, 4, 9, 30, 0).unwrap(),
        );

        assert!(!entry.id.is_empty());
        assert_eq!(entry.date, date);
        assert_eq!(entry.glyph, "😣");
        assert_eq!(entry.recorded_at, "Monday, 04 Mar 2024, 9:30 AM");
    }
}
