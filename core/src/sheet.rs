//! Grid layout of a stored daily sheet.
//!
//! A sheet is the worker table (header row first) followed by marker rows
//! that open the transport, tea collect, weather and notes blocks.

use chrono::NaiveDate;

use crate::error::RecordError;
use crate::model::daily_record::{DailyRecord, TeaCollect, Transport, Weather};
use crate::model::worker::WorkerRow;

pub type Sheet = Vec<Vec<String>>;

pub const HEADER: [&str; 9] = [
    "Worker Name",
    "Arrived",
    "Sections",
    "Work Period",
    "Work Type",
    "Amount (kg)",
    "Advanced Payment",
    "Num Tasks",
    "Payment",
];

// Existing sheets carry this spelling.
pub const TRANSPORT_MARKER: &str = "==== Trasnport ====";
pub const TEA_COLLECT_MARKER: &str = "==== Tea Collect ====";
pub const WEATHER_MARKER: &str = "==== Weather ====";
pub const NOTES_MARKER: &str = "==== Additional Notes ====";

const TRANSPORT_ARRIVED: &str = "transport Arrived (Login/Logout)";
const TRANSPORT_PAID: &str = "transport Paid";
const TEA_COLLECT_ARRIVED: &str = "tea collect Arrived";
const TEA_COLLECT_RECEIVED: &str = "tea collect Received";
const TEMP_24H: &str = "Temp 24hr";
const HUMIDITY_24H: &str = "Humidity 24hr";
const NO_NOTES: &str = "No additional notes.";

fn bool_cell(value: bool) -> String {
    if value { "TRUE" } else { "FALSE" }.to_string()
}

fn row_cells(row: &WorkerRow) -> Vec<String> {
    vec![
        row.worker_name.clone(),
        bool_cell(row.arrived),
        row.sections.clone(),
        row.work_period.clone(),
        row.work_type.clone(),
        row.amount_kg.clone(),
        row.advanced_payment.to_string(),
        row.num_tasks.to_string(),
        row.payment.map(|p| p.to_string()).unwrap_or_default(),
    ]
}

fn labelled(label: &str, values: impl IntoIterator<Item = String>) -> Vec<String> {
    std::iter::once(label.to_string()).chain(values).collect()
}

pub fn render(record: &DailyRecord) -> Sheet {
    let mut sheet: Sheet = Vec::new();
    sheet.push(HEADER.iter().map(|h| h.to_string()).collect());
    sheet.extend(record.rows.iter().map(row_cells));

    sheet.push(vec![TRANSPORT_MARKER.to_string()]);
    sheet.push(labelled(
        TRANSPORT_ARRIVED,
        [bool_cell(record.transport.login), bool_cell(record.transport.logout)],
    ));
    sheet.push(labelled(TRANSPORT_PAID, [record.transport.payment.to_string()]));

    sheet.push(vec![TEA_COLLECT_MARKER.to_string()]);
    sheet.push(labelled(TEA_COLLECT_ARRIVED, [bool_cell(record.tea_collect.attended)]));
    sheet.push(labelled(TEA_COLLECT_RECEIVED, [record.tea_collect.payment.to_string()]));

    let weather = &record.weather;
    let period = match (weather.period_start_hour, weather.period_end_hour) {
        (Some(start), Some(end)) => format!("{}:00 - {}:00", start, end),
        _ => String::new(),
    };
    sheet.push(vec![WEATHER_MARKER.to_string()]);
    sheet.push(vec![
        period,
        weather.condition.clone(),
        weather.avg_temp.map(|t| t.to_string()).unwrap_or_default(),
        weather.avg_humidity.map(|h| h.to_string()).unwrap_or_default(),
    ]);
    sheet.push(labelled(TEMP_24H, weather.temp_24h.iter().map(|v| v.to_string())));
    sheet.push(labelled(HUMIDITY_24H, weather.humidity_24h.iter().map(|v| v.to_string())));

    sheet.push(vec![NOTES_MARKER.to_string()]);
    if record.notes.is_empty() {
        sheet.push(vec![NO_NOTES.to_string()]);
    } else {
        sheet.push(vec![record.notes.clone()]);
    }

    sheet
}

fn cell(row: &[String], i: usize) -> &str {
    row.get(i).map(|c| c.trim()).unwrap_or("")
}

fn find_label(sheet: &[Vec<String>], label: &str) -> Option<usize> {
    sheet.iter().position(|row| cell(row, 0) == label)
}

fn parse_bool(field: &'static str, value: &str) -> Result<bool, RecordError> {
    match value.to_ascii_uppercase().as_str() {
        "TRUE" => Ok(true),
        "FALSE" | "" => Ok(false),
        _ => Err(RecordError::InvalidBool { field, value: value.to_string() }),
    }
}

fn parse_uint(field: &'static str, value: &str) -> Result<u32, RecordError> {
    if value.is_empty() {
        return Ok(0);
    }
    value
        .parse()
        .map_err(|_| RecordError::InvalidInteger { field, value: value.to_string() })
}

fn parse_optional_int(field: &'static str, value: &str) -> Result<Option<i64>, RecordError> {
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| RecordError::InvalidInteger { field, value: value.to_string() })
}

fn parse_optional_float(field: &'static str, value: &str) -> Result<Option<f64>, RecordError> {
    if value.is_empty() || value.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| RecordError::InvalidNumber { field, value: value.to_string() })
}

fn parse_floats(field: &'static str, cells: &[String]) -> Result<Vec<f64>, RecordError> {
    cells
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .map(|c| {
            c.parse()
                .map_err(|_| RecordError::InvalidNumber { field, value: c.to_string() })
        })
        .collect()
}

// Cells are looked up by header name, so column order on the sheet is free.
fn column<'a>(header: &[String], cells: &'a [String], name: &str) -> &'a str {
    header
        .iter()
        .position(|h| h.trim() == name)
        .map(|i| cell(cells, i))
        .unwrap_or("")
}

fn parse_worker_row(header: &[String], cells: &[String]) -> Result<WorkerRow, RecordError> {
    let column = |name: &str| column(header, cells, name);

    Ok(WorkerRow {
        worker_name: column("Worker Name").to_string(),
        arrived: parse_bool("Arrived", column("Arrived"))?,
        sections: column("Sections").to_string(),
        work_period: column("Work Period").to_string(),
        work_type: column("Work Type").to_string(),
        amount_kg: column("Amount (kg)").to_string(),
        advanced_payment: parse_uint("Advanced Payment", column("Advanced Payment"))?,
        num_tasks: parse_uint("Num Tasks", column("Num Tasks"))?,
        payment: parse_optional_int("Payment", column("Payment"))?,
    })
}

// "6:00 - 18:00"
fn parse_period(value: &str) -> (Option<u32>, Option<u32>) {
    let hour = |s: &str| s.trim().trim_end_matches(":00").parse().ok();
    match value.split_once('-') {
        Some((start, end)) => (hour(start), hour(end)),
        None => (None, None),
    }
}

fn parse_weather(sheet: &[Vec<String>], marker: usize) -> Result<Weather, RecordError> {
    let mut weather = Weather::default();

    if let Some(row) = sheet.get(marker + 1) {
        let (start, end) = parse_period(cell(row, 0));
        weather.period_start_hour = start;
        weather.period_end_hour = end;
        weather.condition = cell(row, 1).to_string();
        weather.avg_temp = parse_optional_float("avg_temp", cell(row, 2))?;
        weather.avg_humidity = parse_optional_float("avg_humidity", cell(row, 3))?;
    }
    if let Some(i) = find_label(sheet, TEMP_24H) {
        weather.temp_24h = parse_floats(TEMP_24H, &sheet[i][1..])?;
    }
    if let Some(i) = find_label(sheet, HUMIDITY_24H) {
        weather.humidity_24h = parse_floats(HUMIDITY_24H, &sheet[i][1..])?;
    }

    Ok(weather)
}

/// Rebuilds a daily record from a stored sheet. Only the transport marker is
/// required; missing blocks keep their defaults.
pub fn parse(date: NaiveDate, sheet: &[Vec<String>]) -> Result<DailyRecord, RecordError> {
    let transport_idx =
        find_label(sheet, TRANSPORT_MARKER).ok_or(RecordError::MissingMarker(TRANSPORT_MARKER))?;

    let mut record = DailyRecord::new(date);

    if let Some((header, rows)) = sheet[..transport_idx].split_first() {
        for cells in rows.iter().filter(|r| r.iter().any(|c| !c.trim().is_empty())) {
            record.rows.push(parse_worker_row(header, cells)?);
        }
    }

    let mut transport = Transport::default();
    if let Some(i) = find_label(sheet, TRANSPORT_ARRIVED) {
        transport.login = parse_bool("transport login", cell(&sheet[i], 1))?;
        transport.logout = parse_bool("transport logout", cell(&sheet[i], 2))?;
    }
    if let Some(i) = find_label(sheet, TRANSPORT_PAID) {
        transport.payment = parse_uint("transport payment", cell(&sheet[i], 1))?;
    }
    record.transport = transport;

    let mut tea_collect = TeaCollect::default();
    if let Some(i) = find_label(sheet, TEA_COLLECT_ARRIVED) {
        tea_collect.attended = parse_bool("tea collect attended", cell(&sheet[i], 1))?;
    }
    if let Some(i) = find_label(sheet, TEA_COLLECT_RECEIVED) {
        tea_collect.payment = parse_uint("tea collect payment", cell(&sheet[i], 1))?;
    }
    record.tea_collect = tea_collect;

    if let Some(i) = find_label(sheet, WEATHER_MARKER) {
        record.weather = parse_weather(sheet, i)?;
    }

    if let Some(i) = find_label(sheet, NOTES_MARKER) {
        let notes = sheet.get(i + 1).map(|r| cell(r, 0)).unwrap_or("");
        if notes != NO_NOTES {
            record.notes = notes.to_string();
        }
    }

    Ok(record)
}
