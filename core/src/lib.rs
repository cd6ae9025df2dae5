pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;
pub mod sheet;
pub mod time;
pub mod usecase;

pub use config::AppConfig;
pub use error::RecordError;
pub use input::{expand_name, expand_names};
pub use model::daily_record::{DailyRecord, TeaCollect, Transport, Weather};
pub use model::draft::DailyDraft;
pub use model::roster::Roster;
pub use model::worker::{Task, WorkPeriod, WorkType, WorkerRow, WorkerTaskRecord, MAX_TASKS};
pub use repository::{DailyRecordRepository, FileRosterRepository, FileSheetRepository};
pub use service::aggregate::{missing_dates, section_progress, section_totals, weather_series, worker_progress};
pub use service::daily_record_service::DailyRecordService;
pub use service::dto::{
    AnalysisReport, DatedSeries, DatedValue, SectionEntry, SectionProgress, WeatherSeries, WorkTypeTotal,
    WorkerDaySummary, WorkerProgress,
};
pub use service::normalize::{find_worker_row, format_tasks, parse_tasks};
pub use service::payment::{compute_payment, day_payment, net_payment};
pub use time::{parse_date, parse_human_date};
pub use usecase::analysis::AnalysisUseCase;
