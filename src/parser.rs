use serde::Deserialize;

use crate::{
    error::Error,
    record::Record,
    units::{parse_date, parse_money},
};

#[derive(Deserialize, Debug, PartialEq)]
struct ParsedRecord {
    #[serde(rename = "workDate")]
    work_date: String,
    #[serde(default)]
    duration: Option<String>,
    #[serde(rename = "payType")]
    pay_type: String,
    payout: String,
}

pub fn parse<R>(rdr: csv::Reader<R>) -> impl Iterator<Item = Result<Record, Error>>
where
    R: std::io::Read,
{
    rdr.into_deserialize::<ParsedRecord>().map(|record| {
        let record = record.map_err(|e| Error::ParsingFailure(e.to_string()))?;

        // Duration stays textual: mission rewards never look at it, and a bad
        // duration only voids the row's time, not the whole run.
        Ok(Record {
            date: parse_date(&record.work_date)?,
            payout: parse_money(&record.payout)?,
            pay_type: record.pay_type.as_str().into(),
            duration: record.duration.unwrap_or_default(),
            date_label: record.work_date,
        })
    })
}
