mod models;
mod store;

use log::info;
use store::{
    commands::{
        get_chart_data, get_chart_series, get_day_record, get_latest_day_record, get_mood_catalog,
        get_mood_entries, get_sorted_dates, record_mood,
    },
    MoodTracker,
};
use tauri::Manager;

pub(crate) struct AppState {
    pub(crate) tracker: MoodTracker,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("MoodTrack starting up...");

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let result = (|| -> anyhow::Result<()> {
                let app_data_dir = app
                    .path()
                    .app_data_dir()
                    .map_err(|err| anyhow::anyhow!(err))?;
                std::fs::create_dir_all(&app_data_dir)?;

                let data_path = app_data_dir.join("moods.json");
                app.manage(AppState {
                    tracker: MoodTracker::new(data_path),
                });

                Ok(())
            })();

            result.map_err(|err| err.into())
        })
        .invoke_handler(tauri::generate_handler![
            record_mood,
            get_day_record,
            get_sorted_dates,
            get_chart_series,
            get_chart_data,
            get_latest_day_record,
            get_mood_entries,
            get_mood_catalog,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
