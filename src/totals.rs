use std::ops::AddAssign;

use rust_decimal::Decimal;

use crate::{
    error::Error,
    record::{PayType, Record},
    units::{parse_duration, Seconds},
};

/// Time and pay accumulated over some set of records.
///
/// Only prepay and overtime rows feed the time sub-buckets, while every
/// non-mission row feeds `total_seconds`, so
/// `total_seconds >= prepay_seconds + overtime_seconds` always holds.
/// Mission rewards carry money but never time.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Totals {
    pub total_seconds: Seconds,
    pub prepay_seconds: Seconds,
    pub overtime_seconds: Seconds,
    pub total_earnings: Decimal,
    pub prepay_earnings: Decimal,
    pub overtime_earnings: Decimal,
    pub mission_earnings: Decimal,
}

impl AddAssign for Totals {
    fn add_assign(&mut self, other: Self) {
        self.total_seconds = self.total_seconds.saturating_add(other.total_seconds);
        self.prepay_seconds = self.prepay_seconds.saturating_add(other.prepay_seconds);
        self.overtime_seconds = self.overtime_seconds.saturating_add(other.overtime_seconds);
        self.total_earnings += other.total_earnings;
        self.prepay_earnings += other.prepay_earnings;
        self.overtime_earnings += other.overtime_earnings;
        self.mission_earnings += other.mission_earnings;
    }
}

impl Totals {
    /// What a single record adds to the totals it belongs to.
    ///
    /// The payout always lands in `total_earnings`. If the duration cannot be
    /// parsed, the error is returned together with that payout-only
    /// contribution so the caller can still book it.
    pub fn contribution(record: &Record) -> Result<Self, (Self, Error)> {
        let payout = record.payout;
        let mut totals = Totals {
            total_earnings: payout,
            ..Totals::default()
        };

        if record.pay_type == PayType::MissionReward {
            totals.mission_earnings = payout;
            return Ok(totals);
        }

        let seconds = match parse_duration(&record.duration) {
            Ok(seconds) => seconds,
            Err(error) => return Err((totals, error)),
        };
        totals.total_seconds = seconds;
        match record.pay_type {
            PayType::Prepay => {
                totals.prepay_seconds = seconds;
                totals.prepay_earnings = payout;
            }
            PayType::OvertimePay => {
                totals.overtime_seconds = seconds;
                totals.overtime_earnings = payout;
            }
            PayType::MissionReward | PayType::Other(_) => {}
        }
        Ok(totals)
    }
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use crate::{
        error::Error,
        record::{PayType, Record},
        totals::Totals,
    };

    fn record(duration: &str, pay_type: PayType, payout: rust_decimal::Decimal) -> Record {
        Record {
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            date_label: "Jan 2, 2024".to_string(),
            duration: duration.to_string(),
            pay_type,
            payout,
        }
    }

    macro_rules! check_time {
        ($t:ident has total:$total:literal prepay:$prepay:literal overtime:$overtime:literal) => {
            assert_eq!(
                ($total, $prepay, $overtime),
                ($t.total_seconds, $t.prepay_seconds, $t.overtime_seconds)
            );
        };
    }

    macro_rules! check_earnings {
        ($t:ident has total:$total:literal prepay:$prepay:literal overtime:$overtime:literal mission:$mission:literal) => {
            assert_eq!(
                (dec!($total), dec!($prepay), dec!($overtime), dec!($mission)),
                (
                    $t.total_earnings,
                    $t.prepay_earnings,
                    $t.overtime_earnings,
                    $t.mission_earnings
                )
            );
        };
    }

    #[test]
    fn prepay() {
        let t = Totals::contribution(&record("30m", PayType::Prepay, dec!(10))).unwrap();
        check_time!(t has total:1800 prepay:1800 overtime:0);
        check_earnings!(t has total:10 prepay:10 overtime:0 mission:0);
    }

    #[test]
    fn overtime() {
        let t = Totals::contribution(&record("15m", PayType::OvertimePay, dec!(5))).unwrap();
        check_time!(t has total:900 prepay:0 overtime:900);
        check_earnings!(t has total:5 prepay:0 overtime:5 mission:0);
    }

    #[test]
    fn mission_reward_has_no_time() {
        let t = Totals::contribution(&record("", PayType::MissionReward, dec!(3))).unwrap();
        check_time!(t has total:0 prepay:0 overtime:0);
        check_earnings!(t has total:3 prepay:0 overtime:0 mission:3);
    }

    #[test]
    fn mission_reward_ignores_duration() {
        let t = Totals::contribution(&record("1xm", PayType::MissionReward, dec!(3))).unwrap();
        check_time!(t has total:0 prepay:0 overtime:0);
        check_earnings!(t has total:3 prepay:0 overtime:0 mission:3);
    }

    #[test]
    fn other_pay_type_only_counts_in_totals() {
        let t = Totals::contribution(&record(
            "1m 8s",
            PayType::Other("payAdjustment".to_string()),
            dec!(0.75),
        ))
        .unwrap();
        check_time!(t has total:68 prepay:0 overtime:0);
        check_earnings!(t has total:0.75 prepay:0 overtime:0 mission:0);
    }

    #[test]
    fn bad_duration_keeps_payout() {
        let (t, error) =
            Totals::contribution(&record("1xm", PayType::Prepay, dec!(2.5))).unwrap_err();
        assert!(matches!(error, Error::InvalidDuration { .. }));
        check_time!(t has total:0 prepay:0 overtime:0);
        check_earnings!(t has total:2.5 prepay:0 overtime:0 mission:0);
    }

    #[test]
    fn add_assign() {
        let mut t = Totals::default();
        t += Totals::contribution(&record("30m", PayType::Prepay, dec!(10))).unwrap();
        t += Totals::contribution(&record("15m", PayType::OvertimePay, dec!(5))).unwrap();
        t += Totals::contribution(&record("-", PayType::MissionReward, dec!(3))).unwrap();
        check_time!(t has total:2700 prepay:1800 overtime:900);
        check_earnings!(t has total:18 prepay:10 overtime:5 mission:3);
    }

    #[test]
    fn time_saturates_instead_of_wrapping() {
        let mut t = Totals::contribution(&record(
            "18446744073709551615s",
            PayType::Prepay,
            dec!(1),
        ))
        .unwrap();
        t += Totals::contribution(&record("1m", PayType::Prepay, dec!(1))).unwrap();
        assert_eq!((u64::MAX, u64::MAX), (t.total_seconds, t.prepay_seconds));
        check_earnings!(t has total:2 prepay:2 overtime:0 mission:0);
    }

    #[test]
    fn overflowing_duration_keeps_payout() {
        let (t, error) = Totals::contribution(&record(
            "307445734561825861m",
            PayType::OvertimePay,
            dec!(4),
        ))
        .unwrap_err();
        assert!(matches!(error, Error::InvalidDuration { .. }));
        check_time!(t has total:0 prepay:0 overtime:0);
        check_earnings!(t has total:4 prepay:0 overtime:0 mission:0);
    }
}
