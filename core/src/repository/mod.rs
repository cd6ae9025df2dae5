pub mod file;
pub mod roster;
pub mod traits;

// Re-export
pub use file::FileSheetRepository;
pub use roster::FileRosterRepository;
pub use traits::DailyRecordRepository;
