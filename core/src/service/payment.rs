use crate::model::worker::{WorkPeriod, WorkType, WorkerTaskRecord};

// Rates (Rs)
pub const BASE_RATE: i64 = 400;
pub const EXPECTED_KG: i64 = 18;
pub const EXTRA_KG_RATE: i64 = 50;

pub fn unit_count(period: Option<WorkPeriod>) -> i64 {
    period.map(WorkPeriod::units).unwrap_or(0)
}

/// Pay for a single task slot.
///
/// Plucking earns the base rate plus a signed quota adjustment, so a shortfall
/// below [`EXPECTED_KG`] lowers the pay and may take it below zero. The other
/// work types earn the base rate and ignore the amount. An unset period or
/// work type pays nothing.
pub fn compute_payment(period: Option<WorkPeriod>, work_type: Option<WorkType>, amount_kg: u32) -> i64 {
    let units = unit_count(period);
    if units == 0 {
        return 0;
    }

    match work_type {
        Some(WorkType::Plucking) => {
            let adjustment = (i64::from(amount_kg) - EXPECTED_KG) * EXTRA_KG_RATE;
            BASE_RATE * units + adjustment
        }
        Some(WorkType::Fertilizing | WorkType::Pruning | WorkType::Weeding) => BASE_RATE * units,
        None => 0,
    }
}

/// Same rule keyed by the stored labels; unknown labels pay nothing.
pub fn compute_payment_for_labels(period: &str, work_type: &str, amount_kg: u32) -> i64 {
    compute_payment(
        WorkPeriod::from_label(period),
        WorkType::from_label(work_type),
        amount_kg,
    )
}

/// Worker-day total: every task is paid at the day's period.
pub fn day_payment(record: &WorkerTaskRecord) -> i64 {
    if !record.arrived {
        return 0;
    }
    record
        .tasks
        .iter()
        .map(|t| compute_payment(record.work_period, t.kind(), t.amount_kg))
        .sum()
}

/// Day total less what was already advanced.
pub fn net_payment(record: &WorkerTaskRecord) -> i64 {
    day_payment(record) - i64::from(record.advanced_payment)
}
