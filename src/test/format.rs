#[cfg(test)]
mod tests {
    use crate::gateway::format_volume;

    #[test]
    fn below_one_thousand_is_plain() {
        assert_eq!(format_volume(0), "0");
        assert_eq!(format_volume(500), "500");
        assert_eq!(format_volume(999), "999");
    }

    #[test]
    fn thousands_get_k_suffix() {
        assert_eq!(format_volume(1_000), "1.00K");
        assert_eq!(format_volume(1_500), "1.50K");
    }

    #[test]
    fn millions_get_m_suffix() {
        assert_eq!(format_volume(1_000_000), "1.00M");
        assert_eq!(format_volume(2_500_000), "2.50M");
    }

    #[test]
    fn billions_get_b_suffix() {
        assert_eq!(format_volume(3_000_000_000), "3.00B");
        assert_eq!(format_volume(1_000_000_000), "1.00B");
    }

    #[test]
    fn threshold_boundaries_round_up() {
        assert_eq!(format_volume(999_999), "1000.00K");
        assert_eq!(format_volume(1_999_999), "2.00M");
        assert_eq!(format_volume(999_999_999), "1000.00M");
        assert_eq!(format_volume(1_999_999_999), "2.00B");
    }

    #[test]
    fn fractions_round_half_even() {
        assert_eq!(format_volume(1_005), "1.00K");
        assert_eq!(format_volume(1_006), "1.01K");
        assert_eq!(format_volume(1_234), "1.23K");
    }
}
