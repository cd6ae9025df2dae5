use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::worker::WorkerRow;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Transport {
    pub login: bool,
    pub logout: bool,
    pub payment: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TeaCollect {
    pub attended: bool,
    pub payment: u32,
}

/// Weather over the working period, already resolved by the weather client.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Weather {
    #[serde(default)]
    pub period_start_hour: Option<u32>,
    #[serde(default)]
    pub period_end_hour: Option<u32>,
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub avg_temp: Option<f64>,
    #[serde(default)]
    pub avg_humidity: Option<f64>,
    #[serde(default)]
    pub temp_24h: Vec<f64>,
    #[serde(default)]
    pub humidity_24h: Vec<f64>,
}

/// Everything captured for one calendar day.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub rows: Vec<WorkerRow>,
    #[serde(default)]
    pub transport: Transport,
    #[serde(default)]
    pub tea_collect: TeaCollect,
    #[serde(default)]
    pub weather: Weather,
    #[serde(default)]
    pub notes: String,
}

impl DailyRecord {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            rows: Vec::new(),
            transport: Transport::default(),
            tea_collect: TeaCollect::default(),
            weather: Weather::default(),
            notes: String::new(),
        }
    }

    /// Sheet name the record is stored under.
    pub fn sheet_name(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn arrived_count(&self) -> usize {
        self.rows.iter().filter(|r| r.arrived).count()
    }

    /// Sum of the stored payment column.
    pub fn total_payment(&self) -> i64 {
        self.rows.iter().filter_map(|r| r.payment).sum()
    }
}
