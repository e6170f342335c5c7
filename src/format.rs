//! Human readable byte sizes for the tile footers and the total line

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// Format a byte count as `"N bytes"`, `"N.N KB"` or `"N.N MB"`
///
/// Thresholds are strict, so exactly 1024 bytes stays `"1024 bytes"` and
/// exactly 1 MiB is still reported in KB (`"1024.0 KB"`).
pub fn format_size(size: u64) -> String {
    if size > MIB {
        format!("{:.1} MB", round_one_decimal(size as f64 / MIB as f64))
    } else if size > KIB {
        format!("{:.1} KB", round_one_decimal(size as f64 / KIB as f64))
    } else {
        format!("{} bytes", size)
    }
}

/// Round half away from zero to one decimal digit
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_range() {
        assert_eq!(format_size(0), "0 bytes");
        assert_eq!(format_size(1), "1 bytes");
        assert_eq!(format_size(1024), "1024 bytes");
    }

    #[test]
    fn test_kilobyte_range() {
        assert_eq!(format_size(1025), "1.0 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1_048_576), "1024.0 KB");
    }

    #[test]
    fn test_megabyte_range() {
        assert_eq!(format_size(1_048_577), "1.0 MB");
        assert_eq!(format_size(2_000_500), "1.9 MB");
        assert_eq!(format_size(10 * MIB), "10.0 MB");
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        // 1280 / 1024 == 1.25 exactly
        assert_eq!(format_size(1280), "1.3 KB");
        // 1153434 / 1048576 ~= 1.1000003, no tie, stays 1.1
        assert_eq!(format_size(1_153_434), "1.1 MB");
        // 1101004.8 would be 1.05 MiB exactly; nearest integer rounds up
        assert_eq!(format_size(1_101_005), "1.1 MB");
    }
}
