pub mod daily_record;
pub mod draft;
pub mod roster;
pub mod worker;
