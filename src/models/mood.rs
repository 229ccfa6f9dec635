use serde::{Deserialize, Serialize};

/// The six moods a user can record. Each carries a fixed chart ordinal
/// and display glyph; the ordinal is only a plot position, not an
/// ordering the rest of the code compares against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum MoodLabel {
    Happy,
    Content,
    Neutral,
    Stressed,
    Sad,
    Angry,
}

impl MoodLabel {
    pub const ALL: [MoodLabel; 6] = [
        MoodLabel::Happy,
        MoodLabel::Content,
        MoodLabel::Neutral,
        MoodLabel::Stressed,
        MoodLabel::Sad,
        MoodLabel::Angry,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodLabel::Happy => "Happy",
            MoodLabel::Content => "Content",
            MoodLabel::Neutral => "Neutral",
            MoodLabel::Stressed => "Stressed",
            MoodLabel::Sad => "Sad",
            MoodLabel::Angry => "Angry",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            MoodLabel::Happy => "😊",
            MoodLabel::Content => "🙂",
            MoodLabel::Neutral => "😐",
            MoodLabel::Stressed => "😣",
            MoodLabel::Sad => "😢",
            MoodLabel::Angry => "😡",
        }
    }

    /// Chart ordinal, Happy=5 down to Angry=0.
    pub fn score(&self) -> u8 {
        match self {
            MoodLabel::Happy => 5,
            MoodLabel::Content => 4,
            MoodLabel::Neutral => 3,
            MoodLabel::Stressed => 2,
            MoodLabel::Sad => 1,
            MoodLabel::Angry => 0,
        }
    }
}

/// The recording slot a mood is filed under. Each context is settable
/// independently for every date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Context {
    DailyCheckIn,
    AfterWorkout,
    AfterMeditation,
}

impl Context {
    pub const ALL: [Context; 3] = [
        Context::DailyCheckIn,
        Context::AfterWorkout,
        Context::AfterMeditation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Context::DailyCheckIn => "Daily Check-In",
            Context::AfterWorkout => "After Workout",
            Context::AfterMeditation => "After Meditation",
        }
    }
}
