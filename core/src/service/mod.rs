pub mod aggregate;
pub mod daily_record_service;
pub mod dto;
pub mod normalize;
pub mod payment;
