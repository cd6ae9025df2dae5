use serde::{Deserialize, Serialize};

/// Task slots a worker can fill in one day.
pub const MAX_TASKS: usize = 3;

/// Fixed block of work time. Serialized with the labels used on the estate.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkPeriod {
    #[serde(rename = "7.30-10.30", alias = "short")]
    Short,
    #[serde(rename = "7.30-1.30", alias = "medium")]
    Medium,
    #[serde(rename = "7.30-4.30", alias = "long")]
    Long,
}

impl WorkPeriod {
    pub const ALL: [WorkPeriod; 3] = [WorkPeriod::Short, WorkPeriod::Medium, WorkPeriod::Long];

    pub fn label(self) -> &'static str {
        match self {
            WorkPeriod::Short => "7.30-10.30",
            WorkPeriod::Medium => "7.30-1.30",
            WorkPeriod::Long => "7.30-4.30",
        }
    }

    /// Payment multiplier for this period.
    pub fn units(self) -> i64 {
        match self {
            WorkPeriod::Short => 1,
            WorkPeriod::Medium => 2,
            WorkPeriod::Long => 3,
        }
    }

    /// Accepts the stored label or the plain name (`short`, `medium`, `long`).
    /// Anything else is unset.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        WorkPeriod::ALL.into_iter().find(|p| {
            p.label() == label || format!("{:?}", p).eq_ignore_ascii_case(label)
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkType {
    #[serde(rename = "Tea_Plucking", alias = "Plucking")]
    Plucking,
    #[serde(rename = "Fertilizing")]
    Fertilizing,
    #[serde(rename = "Tea_Pruning", alias = "Pruning")]
    Pruning,
    #[serde(rename = "Weeding")]
    Weeding,
}

impl WorkType {
    pub const ALL: [WorkType; 4] = [
        WorkType::Plucking,
        WorkType::Fertilizing,
        WorkType::Pruning,
        WorkType::Weeding,
    ];

    pub fn label(self) -> &'static str {
        match self {
            WorkType::Plucking => "Tea_Plucking",
            WorkType::Fertilizing => "Fertilizing",
            WorkType::Pruning => "Tea_Pruning",
            WorkType::Weeding => "Weeding",
        }
    }

    /// Only plucked tea and spread fertilizer are weighed.
    pub fn is_weighed(self) -> bool {
        matches!(self, WorkType::Plucking | WorkType::Fertilizing)
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        WorkType::ALL.into_iter().find(|t| {
            t.label() == label || format!("{:?}", t).eq_ignore_ascii_case(label)
        })
    }
}

/// One task slot of a worker-day. The work type keeps the label as it was
/// written, so a stored row reads back unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub section: String,
    #[serde(default)]
    pub work_type: String,
    #[serde(default)]
    pub amount_kg: u32,
}

impl Task {
    pub fn new(section: impl Into<String>, work_type: WorkType, amount_kg: u32) -> Self {
        let amount_kg = if work_type.is_weighed() { amount_kg } else { 0 };
        Self {
            section: section.into(),
            work_type: work_type.label().to_string(),
            amount_kg,
        }
    }

    /// The recognised work type, if any. Unknown labels pay nothing.
    pub fn kind(&self) -> Option<WorkType> {
        WorkType::from_label(&self.work_type)
    }
}

/// A worker's work for one day.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WorkerTaskRecord {
    pub worker_name: String,
    #[serde(default)]
    pub arrived: bool,
    #[serde(default)]
    pub work_period: Option<WorkPeriod>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub advanced_payment: u32,
}

impl WorkerTaskRecord {
    pub fn new(worker_name: impl Into<String>) -> Self {
        Self {
            worker_name: worker_name.into(),
            arrived: false,
            work_period: None,
            tasks: Vec::new(),
            advanced_payment: 0,
        }
    }

    pub fn num_tasks(&self) -> usize {
        self.tasks.len()
    }

    /// Clears everything a worker who did not arrive cannot have.
    pub fn reset(&mut self) {
        self.arrived = false;
        self.work_period = None;
        self.tasks.clear();
        self.advanced_payment = 0;
    }
}

/// A worker-day as stored on the daily sheet: task fields stay joined by
/// `", "` exactly as written.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct WorkerRow {
    #[serde(rename = "Worker Name")]
    pub worker_name: String,
    #[serde(rename = "Arrived")]
    pub arrived: bool,
    #[serde(rename = "Sections")]
    pub sections: String,
    #[serde(rename = "Work Period")]
    pub work_period: String,
    #[serde(rename = "Work Type")]
    pub work_type: String,
    #[serde(rename = "Amount (kg)")]
    pub amount_kg: String,
    #[serde(rename = "Advanced Payment")]
    pub advanced_payment: u32,
    #[serde(rename = "Num Tasks")]
    pub num_tasks: u32,
    #[serde(rename = "Payment")]
    pub payment: Option<i64>,
}
