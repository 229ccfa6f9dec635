use chrono::NaiveDate;
use serde::Serialize;
use tauri::State;

use super::state::MoodStore;
use crate::{
    models::{Context, DayRecord, MoodLabel, MoodLogEntry},
    AppState,
};

/// One selectable mood in the button grid.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodOption {
    pub mood: MoodLabel,
    pub name: &'static str,
    pub glyph: &'static str,
    pub score: u8,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub context: Context,
    pub label: &'static str,
    pub data: Vec<Option<u8>>,
    pub border_color: &'static str,
    pub point_style: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestDayRecord {
    pub date: NaiveDate,
    pub record: DayRecord,
}

/// Series colors and point markers are fixed per context so every view
/// renders the same series identity.
fn series_color(context: Context) -> &'static str {
    match context {
        Context::DailyCheckIn => "#f59e42",
        Context::AfterWorkout => "#22c55e",
        Context::AfterMeditation => "#3b82f6",
    }
}

fn point_style(context: Context) -> &'static str {
    match context {
        Context::DailyCheckIn => "rect",
        Context::AfterWorkout => "circle",
        Context::AfterMeditation => "triangle",
    }
}

pub(crate) fn build_chart_data(store: &MoodStore) -> ChartData {
    let labels = store
        .sorted_dates()
        .iter()
        .map(|date| date.to_string())
        .collect();

    let datasets = Context::ALL
        .iter()
        .map(|&context| ChartDataset {
            context,
            label: context.as_str(),
            data: store.chart_series(context),
            border_color: series_color(context),
            point_style: point_style(context),
        })
        .collect();

    ChartData { labels, datasets }
}

#[tauri::command]
pub async fn record_mood(
    state: State<'_, AppState>,
    date: String,
    context: Context,
    mood: MoodLabel,
) -> Result<Option<DayRecord>, String> {
    state
        .tracker
        .record_mood(&date, context, mood)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn get_day_record(
    state: State<'_, AppState>,
    date: String,
) -> Result<Option<DayRecord>, String> {
    Ok(state.tracker.day_record(&date).await)
}

#[tauri::command]
pub async fn get_sorted_dates(state: State<'_, AppState>) -> Result<Vec<NaiveDate>, String> {
    Ok(state.tracker.sorted_dates().await)
}

#[tauri::command]
pub async fn get_chart_series(
    state: State<'_, AppState>,
    context: Context,
) -> Result<Vec<Option<u8>>, String> {
    Ok(state.tracker.chart_series(context).await)
}

#[tauri::command]
pub async fn get_chart_data(state: State<'_, AppState>) -> Result<ChartData, String> {
    let store = state.tracker.snapshot().await;
    Ok(build_chart_data(&store))
}

#[tauri::command]
pub async fn get_latest_day_record(
    state: State<'_, AppState>,
) -> Result<Option<LatestDayRecord>, String> {
    Ok(state
        .tracker
        .latest_day_record()
        .await
        .map(|(date, record)| LatestDayRecord { date, record }))
}

#[tauri::command]
pub async fn get_mood_entries(state: State<'_, AppState>) -> Result<Vec<MoodLogEntry>, String> {
    Ok(state.tracker.entries().await)
}

#[tauri::command]
pub fn get_mood_catalog() -> Result<Vec<MoodOption>, String> {
    Ok(MoodLabel::ALL
        .iter()
        .map(|&mood| MoodOption {
            mood,
            name: mood.as_str(),
            glyph: mood.glyph(),
            score: mood.score(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_data_has_one_dataset_per_context() {
        let mut store = MoodStore::new();
        store.upsert(
            "2024-03-04".parse().unwrap(),
            Context::DailyCheckIn,
            MoodLabel::Sad,
        );
        store.upsert(
            "2024-03-05".parse().unwrap(),
            Context::DailyCheckIn,
            MoodLabel::Happy,
        );

        let chart = build_chart_data(&store);
        assert_eq!(chart.labels, ["2024-03-04", "2024-03-05"]);
        assert_eq!(chart.datasets.len(), 3);

        let daily = &chart.datasets[0];
        assert_eq!(daily.label, "Daily Check-In");
        assert_eq!(daily.data, vec![Some(1), Some(5)]);
        assert_eq!(daily.border_color, "#f59e42");
        assert_eq!(daily.point_style, "rect");

        // Contexts never recorded still get a dataset, all gaps.
        let workout = &chart.datasets[1];
        assert_eq!(workout.label, "After Workout");
        assert_eq!(workout.data, vec![None, None]);
    }

    #[test]
    fn chart_data_for_empty_store_is_empty_but_shaped() {
        let chart = build_chart_data(&MoodStore::new());
        assert!(chart.labels.is_empty());
        assert_eq!(chart.datasets.len(), 3);
        assert!(chart.datasets.iter().all(|ds| ds.data.is_empty()));
    }
}
