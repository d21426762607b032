use chrono::NaiveDate;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub enum PayType {
    MissionReward,
    Prepay,
    OvertimePay,
    /// Any tag the report has no dedicated bucket for.
    Other(String),
}

impl From<&str> for PayType {
    fn from(tag: &str) -> Self {
        match tag {
            "missionReward" => PayType::MissionReward,
            "prepay" => PayType::Prepay,
            "overtimePay" => PayType::OvertimePay,
            other => PayType::Other(other.to_string()),
        }
    }
}

/// A single line of the earnings export.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub date: NaiveDate,
    /// `workDate` as spelled in the export.
    pub date_label: String,
    /// Raw duration text, only parsed for rows that carry time.
    pub duration: String,
    pub pay_type: PayType,
    pub payout: Decimal,
}
