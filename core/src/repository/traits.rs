use anyhow::Result;
use chrono::NaiveDate;

use crate::model::daily_record::DailyRecord;

pub trait DailyRecordRepository {
    fn get(&self, date: NaiveDate) -> Result<Option<DailyRecord>>;
    /// Replaces any sheet already stored for the record's date.
    fn upsert(&self, record: DailyRecord) -> Result<()>;
    /// Stored records in `start..=end`, ascending by date.
    fn list_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<DailyRecord>>;
}
