use std::io::Write;

use rust_decimal::Decimal;

use crate::{
    earnings::Earnings,
    totals::Totals,
    units::{format_duration, format_money},
};

const RULE_WIDTH: usize = 65;
const DURATION_WIDTH: usize = 15;

fn write_totals(output: &mut impl Write, indent: &str, totals: &Totals) -> std::io::Result<()> {
    writeln!(
        output,
        "{}Total time:     {:width$} Total earnings:    {}",
        indent,
        format_duration(totals.total_seconds),
        format_money(totals.total_earnings),
        width = DURATION_WIDTH
    )?;
    writeln!(
        output,
        "{}Prepay time:    {:width$} Prepay earnings:   {}",
        indent,
        format_duration(totals.prepay_seconds),
        format_money(totals.prepay_earnings),
        width = DURATION_WIDTH
    )?;
    writeln!(
        output,
        "{}Overtime time:  {:width$} Overtime earnings: {}",
        indent,
        format_duration(totals.overtime_seconds),
        format_money(totals.overtime_earnings),
        width = DURATION_WIDTH
    )?;
    if totals.mission_earnings > Decimal::ZERO {
        writeln!(
            output,
            "{}Mission rewards: {}",
            indent,
            format_money(totals.mission_earnings)
        )?;
    }
    Ok(())
}

/// Print the per-day breakdown, most recent day first, followed by the grand totals.
pub fn write_report(earnings: &Earnings, mut output: impl Write) -> std::io::Result<()> {
    let rule = "-".repeat(RULE_WIDTH);

    writeln!(output, "Daily Totals:")?;
    writeln!(output, "{}", rule)?;
    for day in earnings.days() {
        writeln!(output, "\n{}:", day.label)?;
        write_totals(&mut output, "  ", &day.totals)?;
    }

    writeln!(output, "\nGrand Totals:")?;
    writeln!(output, "{}", rule)?;
    write_totals(&mut output, "", earnings.grand())?;
    output.flush()
}
