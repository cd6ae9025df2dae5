use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::model::daily_record::DailyRecord;
use crate::repository::traits::DailyRecordRepository;
use crate::service::normalize::refresh_payment;
use crate::sheet::{self, Sheet};
use crate::time::{days_inclusive, format_date};

/// One JSON grid per day, named after the date like the spreadsheet tabs.
#[derive(Clone, Debug)]
pub struct FileSheetRepository {
    dir: PathBuf,
}

impl FileSheetRepository {
    pub fn new(dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Could not create sheet directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    fn sheet_path(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!("{}.json", format_date(date)))
    }

    fn read_sheet(&self, path: &Path) -> Result<Sheet> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let sheet: Sheet = serde_json::from_reader(reader)?;
        Ok(sheet)
    }

    fn write_sheet(&self, path: &Path, sheet: &Sheet) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, sheet)?;
        writer.flush()?;
        Ok(())
    }
}

impl DailyRecordRepository for FileSheetRepository {
    fn get(&self, date: NaiveDate) -> Result<Option<DailyRecord>> {
        let path = self.sheet_path(date);
        if !path.exists() {
            return Ok(None);
        }
        let grid = self
            .read_sheet(&path)
            .with_context(|| format!("Could not read sheet {}", path.display()))?;
        let record = sheet::parse(date, &grid)
            .with_context(|| format!("Malformed sheet {}", format_date(date)))?;
        Ok(Some(record))
    }

    fn upsert(&self, mut record: DailyRecord) -> Result<()> {
        for row in record.rows.iter_mut() {
            refresh_payment(row)
                .with_context(|| format!("Could not compute payment for {}", row.worker_name))?;
        }

        let path = self.sheet_path(record.date);
        self.write_sheet(&path, &sheet::render(&record))?;
        info!(sheet = %record.sheet_name(), workers = record.rows.len(), "sheet written");
        Ok(())
    }

    fn list_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<DailyRecord>> {
        debug!(%start, %end, "reading sheets");
        let mut records = Vec::new();
        for date in days_inclusive(start, end) {
            match self.get(date) {
                Ok(Some(record)) => records.push(record),
                Ok(None) => {}
                Err(e) => {
                    let reason = format!("{:#}", e);
                    warn!(sheet = %format_date(date), error = %reason, "skipping unreadable sheet");
                }
            }
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::worker::WorkerRow;
    use tempfile::TempDir;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, day).unwrap()
    }

    fn record(day: u32) -> DailyRecord {
        let mut record = DailyRecord::new(date(day));
        record.rows.push(WorkerRow {
            worker_name: "M7 - Sirinayaka".into(),
            arrived: true,
            sections: "3B-1".into(),
            work_period: "7.30-1.30".into(),
            work_type: "Tea_Plucking".into(),
            amount_kg: "16".into(),
            num_tasks: 1,
            ..Default::default()
        });
        record.notes = format!("day {}", day);
        record
    }

    #[test]
    fn test_upsert_then_get() {
        let tmp = TempDir::new().unwrap();
        let repo = FileSheetRepository::new(tmp.path().join("sheets")).unwrap();

        assert!(repo.get(date(1)).unwrap().is_none());
        repo.upsert(record(1)).unwrap();

        let stored = repo.get(date(1)).unwrap().unwrap();
        assert_eq!(stored.notes, "day 1");
        assert_eq!(stored.rows[0].payment, Some(700));
        assert!(tmp.path().join("sheets/2024-07-01.json").exists());
    }

    #[test]
    fn test_upsert_replaces_sheet() {
        let tmp = TempDir::new().unwrap();
        let repo = FileSheetRepository::new(tmp.path().to_path_buf()).unwrap();
        repo.upsert(record(2)).unwrap();

        let mut changed = record(2);
        changed.rows[0].amount_kg = "30".into();
        changed.rows[0].payment = Some(1);
        repo.upsert(changed).unwrap();

        let stored = repo.get(date(2)).unwrap().unwrap();
        assert_eq!(stored.rows[0].amount_kg, "30");
        assert_eq!(stored.rows[0].payment, Some(1400));
    }

    #[test]
    fn test_upsert_rejects_malformed_amount() {
        let tmp = TempDir::new().unwrap();
        let repo = FileSheetRepository::new(tmp.path().to_path_buf()).unwrap();
        let mut bad = record(3);
        bad.rows[0].amount_kg = "a lot".into();
        assert!(repo.upsert(bad).is_err());
        assert!(repo.get(date(3)).unwrap().is_none());
    }

    #[test]
    fn test_list_range_skips_missing_and_unreadable() {
        let tmp = TempDir::new().unwrap();
        let repo = FileSheetRepository::new(tmp.path().to_path_buf()).unwrap();
        repo.upsert(record(4)).unwrap();
        repo.upsert(record(6)).unwrap();
        fs::write(tmp.path().join("2024-07-05.json"), r#"[["Worker Name"]]"#).unwrap();
        fs::write(tmp.path().join("2024-07-07.json"), "not json").unwrap();

        let records = repo.list_range(date(3), date(7)).unwrap();
        let dates: Vec<_> = records.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![date(4), date(6)]);
        assert!(repo.get(date(5)).is_err());
    }
}
