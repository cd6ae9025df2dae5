use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::info;

use crate::model::daily_record::DailyRecord;
use crate::model::draft::DailyDraft;
use crate::repository::DailyRecordRepository;

pub struct DailyRecordService<R: DailyRecordRepository> {
    repo: R,
}

impl<R: DailyRecordRepository> DailyRecordService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn get_record(&self, date: NaiveDate) -> Result<Option<DailyRecord>> {
        self.repo.get(date)
    }

    /// Commits the draft and stores it as that day's sheet.
    pub fn submit(&self, draft: DailyDraft) -> Result<DailyRecord> {
        let date = draft.date;
        let record = draft
            .commit()
            .with_context(|| format!("Draft for {} is not valid", date))?;
        self.repo.upsert(record.clone())?;
        info!(%date, arrived = record.arrived_count(), "daily record submitted");
        Ok(record)
    }

    pub fn has_record(&self, date: NaiveDate) -> Result<bool> {
        Ok(self.repo.get(date)?.is_some())
    }
}
