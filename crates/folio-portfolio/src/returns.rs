//! Return arithmetic shared by the portfolio valuation methods.

/// Annualizes a realized total return earned over `days` whole days.
///
/// Compounds `1 + total_return` to a `days_per_year` horizon:
/// `(1 + r) ^ (days_per_year / days) - 1`. A window of zero whole days
/// annualizes to `0.0`, whatever the realized return.
#[must_use]
pub fn annualize(total_return: f64, days: i64, days_per_year: u32) -> f64 {
    if days == 0 {
        return 0.0;
    }
    let exponent = f64::from(days_per_year) / days as f64;
    (1.0 + total_return).powf(exponent) - 1.0
}
