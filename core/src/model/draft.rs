use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::RecordError;
use crate::model::daily_record::{DailyRecord, TeaCollect, Transport, Weather};
use crate::model::roster::Roster;
use crate::model::worker::{Task, WorkPeriod, WorkerTaskRecord, MAX_TASKS};
use crate::service::normalize::flatten_record;

/// Editable buffer for one day's entry. Nothing is stored until
/// [`DailyDraft::commit`] turns it into a [`DailyRecord`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DailyDraft {
    pub date: NaiveDate,
    #[serde(default)]
    pub workers: Vec<WorkerTaskRecord>,
    #[serde(default)]
    pub transport: Transport,
    #[serde(default)]
    pub tea_collect: TeaCollect,
    #[serde(default)]
    pub weather: Weather,
    #[serde(default)]
    pub notes: String,
}

impl DailyDraft {
    /// Starts a day with every rostered worker marked as not arrived.
    pub fn new(date: NaiveDate, roster: &Roster) -> Self {
        Self {
            date,
            workers: roster.workers.iter().map(WorkerTaskRecord::new).collect(),
            transport: Transport::default(),
            tea_collect: TeaCollect::default(),
            weather: Weather::default(),
            notes: String::new(),
        }
    }

    pub fn add_worker(&mut self, name: &str) -> Result<(), RecordError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RecordError::EmptyWorkerName);
        }
        if self.workers.iter().any(|w| w.worker_name == name) {
            return Err(RecordError::DuplicateWorker(name.to_string()));
        }
        self.workers.push(WorkerTaskRecord::new(name));
        Ok(())
    }

    pub fn worker_mut(&mut self, name: &str) -> Result<&mut WorkerTaskRecord, RecordError> {
        self.workers
            .iter_mut()
            .find(|w| w.worker_name == name)
            .ok_or_else(|| RecordError::UnknownWorker(name.to_string()))
    }

    pub fn set_arrived(&mut self, name: &str, arrived: bool) -> Result<(), RecordError> {
        let worker = self.worker_mut(name)?;
        if arrived {
            worker.arrived = true;
        } else {
            worker.reset();
        }
        Ok(())
    }

    pub fn set_work(&mut self, name: &str, period: WorkPeriod, advanced_payment: u32) -> Result<(), RecordError> {
        let worker = self.worker_mut(name)?;
        worker.arrived = true;
        worker.work_period = Some(period);
        worker.advanced_payment = advanced_payment;
        Ok(())
    }

    pub fn set_tasks(&mut self, name: &str, tasks: Vec<Task>) -> Result<(), RecordError> {
        if tasks.len() > MAX_TASKS {
            return Err(RecordError::TooManyTasks {
                worker: name.to_string(),
                count: tasks.len(),
                max: MAX_TASKS,
            });
        }
        let worker = self.worker_mut(name)?;
        worker.arrived = true;
        worker.tasks = tasks;
        Ok(())
    }

    pub fn set_notes(&mut self, notes: &str) {
        self.notes = notes.trim().to_string();
    }

    /// Validates the buffer and produces the stored form, with payments
    /// filled in.
    pub fn commit(self) -> Result<DailyRecord, RecordError> {
        let mut rows = Vec::with_capacity(self.workers.len());
        for mut worker in self.workers {
            if !worker.arrived {
                worker.reset();
            }
            if worker.tasks.len() > MAX_TASKS {
                return Err(RecordError::TooManyTasks {
                    worker: worker.worker_name,
                    count: worker.tasks.len(),
                    max: MAX_TASKS,
                });
            }
            for task in worker.tasks.iter_mut() {
                if !task.kind().is_some_and(|t| t.is_weighed()) {
                    task.amount_kg = 0;
                }
            }
            rows.push(flatten_record(&worker));
        }

        Ok(DailyRecord {
            date: self.date,
            rows,
            transport: self.transport,
            tea_collect: self.tea_collect,
            weather: self.weather,
            notes: self.notes.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::worker::WorkType;

    fn roster() -> Roster {
        Roster {
            workers: vec!["M1 - Kokila".into(), "F1 - Seetha".into()],
            sections: vec!["2B".into()],
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_new_draft_from_roster() {
        let draft = DailyDraft::new(date(), &roster());
        assert_eq!(draft.workers.len(), 2);
        assert!(draft.workers.iter().all(|w| !w.arrived));
    }

    #[test]
    fn test_add_worker_rejects_duplicates() {
        let mut draft = DailyDraft::new(date(), &roster());
        draft.add_worker(" F30 - Nadee ").unwrap();
        assert_eq!(draft.workers.last().unwrap().worker_name, "F30 - Nadee");
        assert_eq!(
            draft.add_worker("M1 - Kokila").unwrap_err(),
            RecordError::DuplicateWorker("M1 - Kokila".into())
        );
        assert_eq!(draft.add_worker("  ").unwrap_err(), RecordError::EmptyWorkerName);
    }

    #[test]
    fn test_not_arrived_resets_work() {
        let mut draft = DailyDraft::new(date(), &roster());
        draft.set_work("F1 - Seetha", WorkPeriod::Long, 250).unwrap();
        draft
            .set_tasks("F1 - Seetha", vec![Task::new("2B", WorkType::Plucking, 20)])
            .unwrap();
        draft.set_arrived("F1 - Seetha", false).unwrap();

        let worker = draft.worker_mut("F1 - Seetha").unwrap();
        assert_eq!(*worker, WorkerTaskRecord::new("F1 - Seetha"));
    }

    #[test]
    fn test_too_many_tasks() {
        let mut draft = DailyDraft::new(date(), &roster());
        let tasks = vec![Task::new("2B", WorkType::Weeding, 0); 4];
        assert!(matches!(
            draft.set_tasks("M1 - Kokila", tasks),
            Err(RecordError::TooManyTasks { count: 4, max: 3, .. })
        ));
        assert!(matches!(
            draft.set_arrived("Nobody", true),
            Err(RecordError::UnknownWorker(_))
        ));
    }

    #[test]
    fn test_commit_fills_payments() {
        let mut draft = DailyDraft::new(date(), &roster());
        draft.set_work("M1 - Kokila", WorkPeriod::Medium, 100).unwrap();
        draft
            .set_tasks(
                "M1 - Kokila",
                vec![
                    Task::new("2B", WorkType::Plucking, 25),
                    Task { section: "2B".into(), work_type: "Tea_Pruning".into(), amount_kg: 9 },
                ],
            )
            .unwrap();
        draft.set_notes("  Fertilizer delivered  ");

        let record = draft.commit().unwrap();
        assert_eq!(record.rows.len(), 2);

        let kokila = &record.rows[0];
        assert_eq!(kokila.payment, Some(1150 + 800));
        assert_eq!(kokila.amount_kg, "25, 0");
        assert_eq!(kokila.num_tasks, 2);
        assert_eq!(kokila.advanced_payment, 100);

        let seetha = &record.rows[1];
        assert!(!seetha.arrived);
        assert_eq!(seetha.payment, Some(0));
        assert_eq!(seetha.sections, "");
        assert_eq!(record.notes, "Fertilizer delivered");
    }

    #[test]
    fn test_commit_drops_work_of_absent_worker() {
        let mut draft = DailyDraft::new(date(), &roster());
        let worker = draft.worker_mut("F1 - Seetha").unwrap();
        worker.work_period = Some(WorkPeriod::Long);
        worker.advanced_payment = 50;

        let record = draft.commit().unwrap();
        assert_eq!(record.rows[1].work_period, "");
        assert_eq!(record.rows[1].advanced_payment, 0);
    }
}
