//! Conversion between the joined task columns of a stored worker row and the
//! typed task list.

use crate::error::RecordError;
use crate::model::daily_record::DailyRecord;
use crate::model::worker::{Task, WorkPeriod, WorkerRow, WorkerTaskRecord};
use crate::service::payment::day_payment;

pub const TOKEN_SEPARATOR: &str = ", ";

/// Raw tokens of one task slot, borrowed from the stored columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskTokens<'a> {
    pub section: &'a str,
    pub work_type: &'a str,
    pub amount: &'a str,
}

/// Splits a joined column. Empty input is an empty list.
pub fn split_tokens(joined: &str) -> Vec<&str> {
    if joined.trim().is_empty() {
        return Vec::new();
    }
    joined.split(',').map(str::trim).collect()
}

/// Zips the three columns against the sections column. Positions missing from
/// a shorter column come back as empty tokens.
pub fn task_tokens<'a>(sections: &'a str, work_types: &'a str, amounts: &'a str) -> Vec<TaskTokens<'a>> {
    let work_types = split_tokens(work_types);
    let amounts = split_tokens(amounts);

    split_tokens(sections)
        .into_iter()
        .enumerate()
        .map(|(i, section)| TaskTokens {
            section,
            work_type: work_types.get(i).copied().unwrap_or(""),
            amount: amounts.get(i).copied().unwrap_or(""),
        })
        .collect()
}

pub fn parse_amount(token: &str) -> Result<u32, RecordError> {
    let token = token.trim();
    if token.is_empty() {
        return Ok(0);
    }
    token.parse().map_err(|_| RecordError::InvalidInteger {
        field: "Amount (kg)",
        value: token.to_string(),
    })
}

pub fn parse_tasks(sections: &str, work_types: &str, amounts: &str) -> Result<Vec<Task>, RecordError> {
    task_tokens(sections, work_types, amounts)
        .into_iter()
        .map(|t| {
            Ok(Task {
                section: t.section.to_string(),
                work_type: t.work_type.to_string(),
                amount_kg: parse_amount(t.amount)?,
            })
        })
        .collect()
}

pub fn format_tasks(tasks: &[Task]) -> (String, String, String) {
    let sections: Vec<&str> = tasks.iter().map(|t| t.section.as_str()).collect();
    let work_types: Vec<&str> = tasks.iter().map(|t| t.work_type.as_str()).collect();
    let amounts: Vec<String> = tasks.iter().map(|t| t.amount_kg.to_string()).collect();

    (
        sections.join(TOKEN_SEPARATOR),
        work_types.join(TOKEN_SEPARATOR),
        amounts.join(TOKEN_SEPARATOR),
    )
}

/// Exact-name lookup. `None` means the worker has no row that day.
pub fn find_worker_row<'a>(record: &'a DailyRecord, worker_name: &str) -> Option<&'a WorkerRow> {
    record.rows.iter().find(|r| r.worker_name == worker_name)
}

/// Flattens a worker-day for storage and fills in its payment.
pub fn flatten_record(record: &WorkerTaskRecord) -> WorkerRow {
    let (sections, work_type, amount_kg) = format_tasks(&record.tasks);
    WorkerRow {
        worker_name: record.worker_name.clone(),
        arrived: record.arrived,
        sections,
        work_period: record.work_period.map(|p| p.label().to_string()).unwrap_or_default(),
        work_type,
        amount_kg,
        advanced_payment: record.advanced_payment,
        num_tasks: record.tasks.len() as u32,
        payment: Some(day_payment(record)),
    }
}

/// Reads a stored row back into a typed worker-day. A worker who did not
/// arrive comes back with no period, tasks or advance whatever the row holds.
pub fn expand_row(row: &WorkerRow) -> Result<WorkerTaskRecord, RecordError> {
    let mut record = WorkerTaskRecord::new(row.worker_name.clone());
    if !row.arrived {
        return Ok(record);
    }

    record.arrived = true;
    record.work_period = WorkPeriod::from_label(&row.work_period);
    record.tasks = parse_tasks(&row.sections, &row.work_type, &row.amount_kg)?;
    record.advanced_payment = row.advanced_payment;
    Ok(record)
}

/// Recomputes the payment and task count from the row's current task columns.
pub fn refresh_payment(row: &mut WorkerRow) -> Result<(), RecordError> {
    let record = expand_row(row)?;
    row.num_tasks = record.tasks.len() as u32;
    row.payment = Some(day_payment(&record));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::worker::WorkType;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    #[test]
    fn test_split_tokens() {
        assert!(split_tokens("").is_empty());
        assert!(split_tokens("   ").is_empty());
        assert_eq!(split_tokens("1A -1, 2B"), vec!["1A -1", "2B"]);
        assert_eq!(split_tokens("1D"), vec!["1D"]);
    }

    #[test]
    fn test_parse_tasks_pads_short_columns() {
        let tasks = parse_tasks("2B, 1D, 4", "Tea_Plucking", "21").unwrap();
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[0], Task::new("2B", WorkType::Plucking, 21));
        assert_eq!(
            tasks[1],
            Task { section: "1D".into(), work_type: String::new(), amount_kg: 0 }
        );
        assert_eq!(tasks[2].section, "4");
    }

    #[test]
    fn test_parse_tasks_ignores_extra_tokens() {
        let tasks = parse_tasks("2B", "Weeding, Tea_Plucking", "0, 30").unwrap();
        assert_eq!(tasks, vec![Task::new("2B", WorkType::Weeding, 0)]);
    }

    #[test]
    fn test_parse_tasks_without_sections() {
        assert!(parse_tasks("", "Weeding", "3").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_amount_is_an_error() {
        let err = parse_tasks("2B", "Tea_Plucking", "twenty").unwrap_err();
        assert_eq!(
            err,
            RecordError::InvalidInteger { field: "Amount (kg)", value: "twenty".into() }
        );
    }

    #[test]
    fn test_parse_then_format_restores_columns() {
        let columns = ("1A -1, 2B", "Tea_Plucking, Weeding", "20, 0");
        let tasks = parse_tasks(columns.0, columns.1, columns.2).unwrap();
        let (s, w, a) = format_tasks(&tasks);
        assert_eq!((s.as_str(), w.as_str(), a.as_str()), columns);
    }

    #[test]
    fn test_parse_then_format_keeps_written_labels() {
        for columns in [("A, B", "Plucking, Weeding", "20, 0"), ("A", "Harvesting", "5")] {
            let tasks = parse_tasks(columns.0, columns.1, columns.2).unwrap();
            let (s, w, a) = format_tasks(&tasks);
            assert_eq!((s.as_str(), w.as_str(), a.as_str()), columns);
        }

        let tasks = parse_tasks("A", "Harvesting", "5").unwrap();
        assert_eq!(tasks[0].kind(), None);
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_tasks(&[]), (String::new(), String::new(), String::new()));
    }

    #[test]
    fn test_find_worker_row() {
        let mut record = DailyRecord::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        record.rows.push(WorkerRow { worker_name: "F3 - Soma".into(), ..Default::default() });

        assert!(find_worker_row(&record, "F3 - Soma").is_some());
        assert!(find_worker_row(&record, "F3").is_none());
    }

    #[test]
    fn test_flatten_and_expand() {
        let mut record = WorkerTaskRecord::new("M6 - Sarath");
        record.arrived = true;
        record.work_period = Some(WorkPeriod::Long);
        record.advanced_payment = 500;
        record.tasks = vec![
            Task::new("3A-1", WorkType::Plucking, 22),
            Task::new("3A-2", WorkType::Fertilizing, 40),
        ];

        let row = flatten_record(&record);
        assert_eq!(row.sections, "3A-1, 3A-2");
        assert_eq!(row.work_type, "Tea_Plucking, Fertilizing");
        assert_eq!(row.amount_kg, "22, 40");
        assert_eq!(row.work_period, "7.30-4.30");
        assert_eq!(row.num_tasks, 2);
        assert_eq!(row.payment, Some(1400 + 1200));

        assert_eq!(expand_row(&row).unwrap(), record);
    }

    #[test]
    fn test_expand_not_arrived_resets() {
        let row = WorkerRow {
            worker_name: "F4 - Sawrna".into(),
            arrived: false,
            sections: "2B".into(),
            work_period: "7.30-4.30".into(),
            work_type: "Weeding".into(),
            amount_kg: "0".into(),
            advanced_payment: 200,
            num_tasks: 1,
            payment: None,
        };
        assert_eq!(expand_row(&row).unwrap(), WorkerTaskRecord::new("F4 - Sawrna"));
    }

    #[test]
    fn test_refresh_payment_recounts_tasks() {
        let mut row = WorkerRow {
            worker_name: "F8 - Lakmali".into(),
            arrived: true,
            sections: "2B".into(),
            work_period: "7.30-10.30".into(),
            work_type: "Weeding".into(),
            amount_kg: "0".into(),
            num_tasks: 1,
            ..Default::default()
        };
        row.sections = "2B, 1D".into();
        row.work_type = "Weeding, Weeding".into();
        refresh_payment(&mut row).unwrap();
        assert_eq!(row.num_tasks, 2);
        assert_eq!(row.payment, Some(800));

        row.arrived = false;
        refresh_payment(&mut row).unwrap();
        assert_eq!(row.num_tasks, 0);
        assert_eq!(row.payment, Some(0));
    }

    #[test]
    fn test_refresh_payment_follows_amount() {
        let mut row = WorkerRow {
            worker_name: "F1 - Seetha".into(),
            arrived: true,
            sections: "2B".into(),
            work_period: "7.30-10.30".into(),
            work_type: "Tea_Plucking".into(),
            amount_kg: "18".into(),
            num_tasks: 1,
            ..Default::default()
        };
        refresh_payment(&mut row).unwrap();
        assert_eq!(row.payment, Some(400));

        row.amount_kg = "20".into();
        refresh_payment(&mut row).unwrap();
        assert_eq!(row.payment, Some(500));
    }

    fn arb_task() -> impl Strategy<Value = Task> {
        (
            "[0-9][A-D0-9 -]{0,4}[0-9A-D]",
            proptest::sample::select(vec![
                "Tea_Plucking",
                "Plucking",
                "Fertilizing",
                "Tea_Pruning",
                "Pruning",
                "Weeding",
                "Harvesting",
                "",
            ])
            .prop_map(str::to_string),
            0u32..200,
        )
            .prop_map(|(section, work_type, amount_kg)| Task { section, work_type, amount_kg })
    }

    proptest! {
        #[test]
        fn prop_format_then_parse_is_identity(tasks in proptest::collection::vec(arb_task(), 0..=3)) {
            let (s, w, a) = format_tasks(&tasks);
            prop_assert_eq!(parse_tasks(&s, &w, &a).unwrap(), tasks);
        }
    }
}
