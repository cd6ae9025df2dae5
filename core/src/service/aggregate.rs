use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;

use crate::model::daily_record::DailyRecord;
use crate::service::dto::{
    SectionEntry, SectionProgress, WeatherSeries, WorkTypeTotal, WorkerDaySummary, WorkerProgress,
};
use crate::service::normalize::{find_worker_row, task_tokens};
use crate::time::days_inclusive;

/// Days in `start..=end` with no record, ascending.
pub fn missing_dates(records: &[DailyRecord], start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let present: HashSet<NaiveDate> = records.iter().map(|r| r.date).collect();
    days_inclusive(start, end)
        .filter(|d| !present.contains(d))
        .collect()
}

/// Average temperature and humidity per date, in record order. Each series
/// only holds dates where that value was recorded.
pub fn weather_series(records: &[DailyRecord]) -> WeatherSeries {
    let mut series = WeatherSeries::default();
    for record in records {
        if let Some(temp) = record.weather.avg_temp {
            series.temperature.insert(record.date, temp);
        }
        if let Some(humidity) = record.weather.avg_humidity {
            series.humidity.insert(record.date, humidity);
        }
    }
    series
}

// Requested names, first occurrence wins.
fn unique_names<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .iter()
        .map(|n| n.as_ref())
        .filter(|n| seen.insert(*n))
        .map(str::to_string)
        .collect()
}

/// Per-worker series of the days each worker has a row. Every requested
/// worker is present, possibly with no days.
pub fn worker_progress<S: AsRef<str>>(records: &[DailyRecord], worker_names: &[S]) -> Vec<WorkerProgress> {
    let mut progress: Vec<WorkerProgress> = unique_names(worker_names)
        .into_iter()
        .map(|worker_name| WorkerProgress { worker_name, days: Vec::new() })
        .collect();

    for record in records {
        for worker in progress.iter_mut() {
            let Some(row) = find_worker_row(record, &worker.worker_name) else {
                continue;
            };
            worker.days.push(WorkerDaySummary {
                date: record.date,
                arrived: row.arrived,
                num_tasks: row.num_tasks,
                work_period: row.work_period.clone(),
                sections: row.sections.clone(),
                work_type: row.work_type.clone(),
                amount_kg: row.amount_kg.clone(),
                advanced_payment: row.advanced_payment,
                payment: row.payment,
            });
        }
    }

    progress
}

/// Per-section log of tasks, one entry per task slot, in record, row and
/// slot order. Amounts stay as the stored tokens.
pub fn section_progress<S: AsRef<str>>(records: &[DailyRecord], section_names: &[S]) -> Vec<SectionProgress> {
    let mut progress: Vec<SectionProgress> = unique_names(section_names)
        .into_iter()
        .map(|section| SectionProgress { section, entries: Vec::new() })
        .collect();
    let index: HashMap<String, usize> = progress
        .iter()
        .enumerate()
        .map(|(i, p)| (p.section.clone(), i))
        .collect();

    for record in records {
        for row in record.rows.iter().filter(|r| !r.sections.is_empty()) {
            for task in task_tokens(&row.sections, &row.work_type, &row.amount_kg) {
                let Some(&i) = index.get(task.section) else {
                    continue;
                };
                progress[i].entries.push(SectionEntry {
                    date: record.date,
                    work_type: task.work_type.to_string(),
                    amount: task.amount.to_string(),
                    worker_name: row.worker_name.clone(),
                });
            }
        }
    }

    progress
}

/// Task count and weighed kg per work type, in first-seen order. Amounts
/// that are not whole numbers count as a task but add no weight.
pub fn section_totals(entries: &[SectionEntry]) -> Vec<WorkTypeTotal> {
    let mut totals: Vec<WorkTypeTotal> = Vec::new();
    for entry in entries {
        let amount = entry.amount.trim().parse::<u64>().unwrap_or(0);
        match totals.iter_mut().find(|t| t.work_type == entry.work_type) {
            Some(total) => {
                total.tasks += 1;
                total.amount_kg += amount;
            }
            None => totals.push(WorkTypeTotal {
                work_type: entry.work_type.clone(),
                tasks: 1,
                amount_kg: amount,
            }),
        }
    }
    totals
}
