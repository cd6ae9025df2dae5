use serde::{Deserialize, Serialize};

const DEFAULT_WORKERS: [&str; 17] = [
    "M1 - Kokila",
    "M2 - Sunil",
    "M3 - Nimal - Podi",
    "M4 - Nimal - Loku",
    "M6 - Sarath",
    "M7 - Sirinayaka",
    "F1 - Seetha",
    "F3 - Soma",
    "F4 - Sawrna",
    "F6 - Nilanthi",
    "F8 - Lakmali",
    "F11 - Samathi Udapotha",
    "F20 - Surangi",
    "F24 - Anusha",
    "F23 - Deepa Kumari",
    "F26 - Dilshani",
    "F27 - Irosha",
];

const DEFAULT_SECTIONS: [&str; 22] = [
    "1A -1", "1A -2", "1A -3", "1B-1", "1B-2", "1B-3", "1B-4", "1C-1", "1C-2", "1C-3", "1D",
    "2A-1", "2B", "2C-1", "2C-2", "2C-3", "3A-1", "3A-2", "3B-1", "3B-2", "3B-3", "4",
];

/// Worker names and estate sections known to the daily form and reports.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Roster {
    #[serde(default = "default_workers")]
    pub workers: Vec<String>,
    #[serde(default = "default_sections")]
    pub sections: Vec<String>,
}

fn default_workers() -> Vec<String> {
    DEFAULT_WORKERS.iter().map(|w| w.to_string()).collect()
}

fn default_sections() -> Vec<String> {
    DEFAULT_SECTIONS.iter().map(|s| s.to_string()).collect()
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            sections: default_sections(),
        }
    }
}
