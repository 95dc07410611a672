use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Human-readable volume with a K/M/B suffix and two decimal places;
/// below one thousand the plain integer.
pub fn format_volume(volume: u64) -> String {
    let value = Decimal::from(volume);

    // Round before formatting: Decimal's precision formatting truncates,
    // so 999.999 would print as "999.99" instead of "1000.00".
    if volume >= 1_000_000_000 {
        format!("{:.2}B", (value / dec!(1_000_000_000)).round_dp(2))
    } else if volume >= 1_000_000 {
        format!("{:.2}M", (value / dec!(1_000_000)).round_dp(2))
    } else if volume >= 1_000 {
        format!("{:.2}K", (value / dec!(1_000)).round_dp(2))
    } else {
        volume.to_string()
    }
}
