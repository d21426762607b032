use std::collections::BTreeMap;

use chrono::NaiveDate;
use log::warn;

use crate::{error::Error, record::Record, totals::Totals};

#[derive(Debug, Clone, PartialEq)]
pub struct Day {
    /// First spelling of the date seen in the input.
    pub label: String,
    pub totals: Totals,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Earnings {
    // Keyed by the parsed date so differently spelled copies of one day
    // share a bucket.
    days: BTreeMap<NaiveDate, Day>,
    grand: Totals,
}

impl Earnings {
    /// Fold a record into its day and into the grand totals.
    ///
    /// A record with an unparsable duration still has its payout booked as
    /// earnings before the error is returned; only its time is dropped.
    pub fn apply(&mut self, record: Record) -> Result<(), Error> {
        let day = self.days.entry(record.date).or_insert_with(|| Day {
            label: record.date_label.clone(),
            totals: Totals::default(),
        });

        let (contribution, result) = match Totals::contribution(&record) {
            Ok(contribution) => (contribution, Ok(())),
            Err((contribution, error)) => (contribution, Err(error)),
        };
        day.totals += contribution;
        self.grand += contribution;
        result
    }

    /// Days, most recent first.
    pub fn days(&self) -> impl Iterator<Item = &Day> {
        self.days.values().rev()
    }

    #[cfg(test)]
    pub fn day(&self, date: NaiveDate) -> Option<&Day> {
        self.days.get(&date)
    }

    pub fn grand(&self) -> &Totals {
        &self.grand
    }
}

/// Aggregate a stream of records.
///
/// Bad durations are reported and skipped, anything else stops the run.
pub fn aggregate<I>(records: I) -> Result<Earnings, Error>
where
    I: IntoIterator<Item = Result<Record, Error>>,
{
    let mut earnings = Earnings::default();
    for record in records {
        let record = record?;
        let (label, duration) = (record.date_label.clone(), record.duration.clone());
        if let Err(error) = earnings.apply(record) {
            warn!(
                "Error processing row with date {}, duration {}: {}",
                label, duration, error
            );
        }
    }
    Ok(earnings)
}
