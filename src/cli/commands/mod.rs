pub mod add;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod notify;
pub mod summary;

use crate::errors::{AppError, AppResult};
use crate::models::RenewalType;
use crate::utils::date;
use chrono::NaiveDate;

pub(crate) fn parse_start_date(input: &str) -> AppResult<NaiveDate> {
    date::parse_date(input).ok_or_else(|| AppError::InvalidDate(input.to_string()))
}

pub(crate) fn parse_renewal_type(input: &str) -> AppResult<RenewalType> {
    RenewalType::from_code(input).ok_or_else(|| AppError::InvalidRenewalType(input.to_string()))
}
