use anyhow::Result;
use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::repository::DailyRecordRepository;
use crate::service::aggregate::{missing_dates, section_progress, weather_series, worker_progress};
use crate::service::dto::AnalysisReport;

pub struct AnalysisUseCase<'a, R: DailyRecordRepository> {
    repo: &'a R,
}

impl<'a, R: DailyRecordRepository> AnalysisUseCase<'a, R> {
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    /// Reads `start..=end` once and builds every view of it.
    pub fn analyze<W, S>(&self, start: NaiveDate, end: NaiveDate, workers: &[W], sections: &[S]) -> Result<AnalysisReport>
    where
        W: AsRef<str>,
        S: AsRef<str>,
    {
        let records = self.repo.list_range(start, end)?;
        debug!(%start, %end, days = records.len(), "building analysis");

        let missing = missing_dates(&records, start, end);
        if !missing.is_empty() {
            warn!(count = missing.len(), "no record for some days in range");
        }

        Ok(AnalysisReport {
            start,
            end,
            missing_dates: missing,
            weather: weather_series(&records),
            workers: worker_progress(&records, workers),
            sections: section_progress(&records, sections),
            records,
        })
    }
}
