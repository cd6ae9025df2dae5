use crate::model::daily_record::DailyRecord;
use crate::model::worker::WorkerRow;
use crate::repository::DailyRecordRepository;
use crate::usecase::analysis::AnalysisUseCase;
use anyhow::Result;
use chrono::NaiveDate;

struct MockRecordRepo {
    records: Vec<DailyRecord>,
}

impl DailyRecordRepository for MockRecordRepo {
    fn get(&self, date: NaiveDate) -> Result<Option<DailyRecord>> {
        Ok(self.records.iter().find(|r| r.date == date).cloned())
    }
    fn upsert(&self, _record: DailyRecord) -> Result<()> { unimplemented!() }
    fn list_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<DailyRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.date >= start && r.date <= end)
            .cloned()
            .collect())
    }
}

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, day).unwrap()
}

fn plucking_row(name: &str, sections: &str, amounts: &str) -> WorkerRow {
    let count = sections.split(", ").count();
    WorkerRow {
        worker_name: name.to_string(),
        arrived: true,
        sections: sections.to_string(),
        work_period: "7.30-4.30".to_string(),
        work_type: vec!["Tea_Plucking"; count].join(", "),
        amount_kg: amounts.to_string(),
        num_tasks: count as u32,
        ..Default::default()
    }
}

#[test]
fn test_analyze_range() {
    let mut first = DailyRecord::new(date(2));
    first.rows = vec![
        plucking_row("F1 - Seetha", "2B", "19"),
        plucking_row("M2 - Sunil", "2B, 1D", "10, 12"),
    ];
    first.weather.avg_temp = Some(24.1);
    first.weather.avg_humidity = Some(79.0);

    let mut second = DailyRecord::new(date(4));
    second.rows = vec![plucking_row("M2 - Sunil", "1D", "22")];
    second.weather.avg_temp = Some(21.7);

    let outside = DailyRecord::new(date(20));

    let repo = MockRecordRepo { records: vec![first, second, outside] };
    let usecase = AnalysisUseCase::new(&repo);

    let report = usecase
        .analyze(date(1), date(5), &["F1 - Seetha", "M2 - Sunil", "F3 - Soma"], &["2B", "1D"])
        .unwrap();

    assert_eq!(report.records.len(), 2);
    assert_eq!(report.missing_dates, vec![date(1), date(3), date(5)]);

    assert_eq!(report.weather.temperature.dates(), vec![date(2), date(4)]);
    assert_eq!(report.weather.humidity.dates(), vec![date(2)]);

    assert_eq!(report.worker("F1 - Seetha").unwrap().days.len(), 1);
    assert_eq!(report.worker("M2 - Sunil").unwrap().days.len(), 2);
    assert!(report.worker("F3 - Soma").unwrap().days.is_empty());

    let section_1d = report.section("1D").unwrap();
    let amounts: Vec<&str> = section_1d.entries.iter().map(|e| e.amount.as_str()).collect();
    assert_eq!(amounts, vec!["12", "22"]);
    assert_eq!(report.section("2B").unwrap().entries.len(), 2);
}

#[test]
fn test_analyze_inverted_range() {
    let repo = MockRecordRepo { records: vec![DailyRecord::new(date(3))] };
    let report = AnalysisUseCase::new(&repo)
        .analyze(date(5), date(1), &["F1 - Seetha"], &["2B"])
        .unwrap();

    assert!(report.records.is_empty());
    assert!(report.missing_dates.is_empty());
    assert_eq!(report.workers.len(), 1);
    assert!(report.sections[0].entries.is_empty());
}
