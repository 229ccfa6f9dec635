use serde::{Deserialize, Serialize};

use super::mood::{Context, MoodLabel};

/// Moods recorded for a single date. Contexts not yet recorded are
/// absent from the serialized form, never a null placeholder.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub daily_check_in: Option<MoodLabel>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub after_workout: Option<MoodLabel>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub after_meditation: Option<MoodLabel>,
}

impl DayRecord {
    pub fn get(&self, context: Context) -> Option<MoodLabel> {
        match context {
            Context::DailyCheckIn => self.daily_check_in,
            Context::AfterWorkout => self.after_workout,
            Context::AfterMeditation => self.after_meditation,
        }
    }

    pub fn set(&mut self, context: Context, mood: MoodLabel) {
        match context {
            Context::DailyCheckIn => self.daily_check_in = Some(mood),
            Context::AfterWorkout => self.after_workout = Some(mood),
            Context::AfterMeditation => self.after_meditation = Some(mood),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_round_trips_each_context() {
        let mut record = DayRecord::default();
        record.set(Context::DailyCheckIn, MoodLabel::Neutral);
        record.set(Context::AfterWorkout, MoodLabel::Happy);
        record.set(Context::AfterMeditation, MoodLabel::Content);

        assert_eq!(record.get(Context::DailyCheckIn), Some(MoodLabel::Neutral));
        assert_eq!(record.get(Context::AfterWorkout), Some(MoodLabel::Happy));
        assert_eq!(
            record.get(Context::AfterMeditation),
            Some(MoodLabel::Content)
        );
    }

    #[test]
    fn new_record_has_no_contexts() {
        let record = DayRecord::default();
        for context in Context::ALL {
            assert_eq!(record.get(context), None);
        }
    }

    #[test]
    fn absent_contexts_are_skipped_in_json() {
        let mut record = DayRecord::default();
        record.set(Context::AfterWorkout, MoodLabel::Sad);

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("afterWorkout"));
        assert!(!json.contains("dailyCheckIn"));
        assert!(!json.contains("null"));

        let back: DayRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
