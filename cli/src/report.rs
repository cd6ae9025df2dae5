use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};
use teaestate_core::time::format_date;
use teaestate_core::{section_totals, AnalysisReport, DailyRecord, SectionProgress, WorkerProgress};

#[derive(Tabled)]
struct WorkerDayRow {
    #[tabled(rename = "Worker")]
    worker: String,
    #[tabled(rename = "Arrived")]
    arrived: String,
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Sections")]
    sections: String,
    #[tabled(rename = "Work Type")]
    work_type: String,
    #[tabled(rename = "Amount (kg)")]
    amount: String,
    #[tabled(rename = "Advance")]
    advance: String,
    #[tabled(rename = "Payment")]
    payment: String,
    #[tabled(rename = "Net")]
    net: String,
}

#[derive(Tabled)]
struct WeatherRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Condition")]
    condition: String,
    #[tabled(rename = "Avg Temp (°C)")]
    temp: String,
    #[tabled(rename = "Avg Humidity (%)")]
    humidity: String,
}

#[derive(Tabled)]
struct ProgressRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Arrived")]
    arrived: String,
    #[tabled(rename = "Tasks")]
    tasks: u32,
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Sections")]
    sections: String,
    #[tabled(rename = "Work Type")]
    work_type: String,
    #[tabled(rename = "Amount (kg)")]
    amount: String,
    #[tabled(rename = "Advance")]
    advance: u32,
    #[tabled(rename = "Payment")]
    payment: String,
}

#[derive(Tabled)]
struct SectionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Worker")]
    worker: String,
    #[tabled(rename = "Work Type")]
    work_type: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

fn styled<T: Tabled>(rows: Vec<T>) -> Table {
    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN)); // Header color
    table
}

fn yes_no(value: bool) -> String {
    if value { "✅" } else { "❌" }.to_string()
}

fn dash(value: &str) -> String {
    if value.is_empty() { "-".to_string() } else { value.to_string() }
}

fn money(value: Option<i64>) -> String {
    value.map(|v| format!("Rs {}", v)).unwrap_or_else(|| "-".to_string())
}

pub fn show_day(record: &DailyRecord) {
    println!("\n\x1b[1;36m{} ({})\x1b[0m", format_date(record.date), record.date.format("%a"));

    let rows: Vec<WorkerDayRow> = record
        .rows
        .iter()
        .map(|r| WorkerDayRow {
            worker: r.worker_name.clone(),
            arrived: yes_no(r.arrived),
            period: dash(&r.work_period),
            sections: dash(&r.sections),
            work_type: dash(&r.work_type),
            amount: dash(&r.amount_kg),
            advance: format!("Rs {}", r.advanced_payment),
            payment: money(r.payment),
            net: money(r.payment.map(|p| p - i64::from(r.advanced_payment))),
        })
        .collect();
    println!("{}", styled(rows));
    println!(
        "Arrived: {}/{}  Total payment: Rs {}",
        record.arrived_count(),
        record.rows.len(),
        record.total_payment()
    );

    let t = &record.transport;
    println!(
        "\nTransport: login {} logout {} payment Rs {}",
        yes_no(t.login),
        yes_no(t.logout),
        t.payment
    );
    let c = &record.tea_collect;
    println!("Tea collect: {} payment Rs {}", yes_no(c.attended), c.payment);

    let w = &record.weather;
    match (w.avg_temp, w.avg_humidity) {
        (Some(temp), Some(humidity)) => println!(
            "Weather: {} | Avg Temp: {}°C | Avg Humidity: {}%",
            dash(&w.condition),
            temp,
            humidity
        ),
        _ => println!("\x1b[33mWeather: {}\x1b[0m", dash(&w.condition)),
    }

    if record.notes.is_empty() {
        println!("Notes: none");
    } else {
        println!("Notes: {}", record.notes);
    }
}

pub fn show_analysis(report: &AnalysisReport) {
    println!(
        "\n\x1b[1;36mAnalysis {} to {}\x1b[0m ({} days recorded)",
        format_date(report.start),
        format_date(report.end),
        report.records.len()
    );

    if !report.missing_dates.is_empty() {
        let dates: Vec<String> = report.missing_dates.iter().map(|d| format_date(*d)).collect();
        println!("\x1b[33m⚠ No data for: {}\x1b[0m", dates.join(", "));
    }

    show_weather(report);

    println!("\n\x1b[1mWorker progress\x1b[0m");
    for worker in &report.workers {
        show_worker(worker);
    }

    println!("\n\x1b[1mSection progress\x1b[0m");
    for section in &report.sections {
        show_section(section);
    }
}

fn show_weather(report: &AnalysisReport) {
    println!("\n\x1b[1mWeather\x1b[0m");
    if report.weather.temperature.is_empty() && report.weather.humidity.is_empty() {
        println!("No weather data.");
        return;
    }

    let value = |v: Option<f64>| v.map(|v| format!("{:.1}", v)).unwrap_or_else(|| "-".to_string());
    let rows: Vec<WeatherRow> = report
        .records
        .iter()
        .map(|r| WeatherRow {
            date: format_date(r.date),
            condition: dash(&r.weather.condition),
            temp: value(report.weather.temperature.get(r.date)),
            humidity: value(report.weather.humidity.get(r.date)),
        })
        .collect();
    println!("{}", styled(rows));
}

fn show_worker(worker: &WorkerProgress) {
    println!("\n👷 {}", worker.worker_name);
    if worker.days.is_empty() {
        println!("No data for {} in this range.", worker.worker_name);
        return;
    }

    let rows: Vec<ProgressRow> = worker
        .days
        .iter()
        .map(|d| ProgressRow {
            date: format_date(d.date),
            arrived: yes_no(d.arrived),
            tasks: d.num_tasks,
            period: dash(&d.work_period),
            sections: dash(&d.sections),
            work_type: dash(&d.work_type),
            amount: dash(&d.amount_kg),
            advance: d.advanced_payment,
            payment: money(d.payment),
        })
        .collect();
    println!("{}", styled(rows));

    let arrived = worker.days.iter().filter(|d| d.arrived).count();
    let paid: i64 = worker.days.iter().filter_map(|d| d.payment).sum();
    let advanced: i64 = worker.days.iter().map(|d| i64::from(d.advanced_payment)).sum();
    println!(
        "Days arrived: {}  Payment: Rs {}  Advanced: Rs {}  Balance: Rs {}",
        arrived,
        paid,
        advanced,
        paid - advanced
    );
}

fn show_section(section: &SectionProgress) {
    println!("\n🌿 {}", section.section);
    if section.entries.is_empty() {
        println!("No data for section {} in this range.", section.section);
        return;
    }

    let rows: Vec<SectionRow> = section
        .entries
        .iter()
        .map(|e| SectionRow {
            date: format_date(e.date),
            worker: e.worker_name.clone(),
            work_type: dash(&e.work_type),
            amount: dash(&e.amount),
        })
        .collect();
    println!("{}", styled(rows));

    let totals: Vec<String> = section_totals(&section.entries)
        .iter()
        .map(|t| format!("{}: {} tasks, {} kg", dash(&t.work_type), t.tasks, t.amount_kg))
        .collect();
    println!("Totals: {}", totals.join(" | "));
}
