use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::daily_record::DailyRecord;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct DatedValue {
    pub date: NaiveDate,
    pub value: f64,
}

/// Date-keyed values kept in insertion order. Re-inserting a date replaces
/// its value in place.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct DatedSeries {
    points: Vec<DatedValue>,
}

impl DatedSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, date: NaiveDate, value: f64) {
        match self.points.iter_mut().find(|p| p.date == date) {
            Some(point) => point.value = value,
            None => self.points.push(DatedValue { date, value }),
        }
    }

    pub fn get(&self, date: NaiveDate) -> Option<f64> {
        self.points.iter().find(|p| p.date == date).map(|p| p.value)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.get(date).is_some()
    }

    pub fn points(&self) -> &[DatedValue] {
        &self.points
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct WeatherSeries {
    pub temperature: DatedSeries,
    pub humidity: DatedSeries,
}

/// One day of a worker's progress series, with task columns as stored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WorkerDaySummary {
    pub date: NaiveDate,
    pub arrived: bool,
    pub num_tasks: u32,
    pub work_period: String,
    pub sections: String,
    pub work_type: String,
    pub amount_kg: String,
    pub advanced_payment: u32,
    pub payment: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WorkerProgress {
    pub worker_name: String,
    pub days: Vec<WorkerDaySummary>,
}

/// One task performed in a section.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SectionEntry {
    pub date: NaiveDate,
    pub work_type: String,
    pub amount: String,
    pub worker_name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SectionProgress {
    pub section: String,
    pub entries: Vec<SectionEntry>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WorkTypeTotal {
    pub work_type: String,
    pub tasks: usize,
    pub amount_kg: u64,
}

/// Everything the analysis view shows for a date range.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub records: Vec<DailyRecord>,
    pub missing_dates: Vec<NaiveDate>,
    pub weather: WeatherSeries,
    pub workers: Vec<WorkerProgress>,
    pub sections: Vec<SectionProgress>,
}

impl AnalysisReport {
    pub fn worker(&self, name: &str) -> Option<&WorkerProgress> {
        self.workers.iter().find(|w| w.worker_name == name)
    }

    pub fn section(&self, name: &str) -> Option<&SectionProgress> {
        self.sections.iter().find(|s| s.section == name)
    }
}
