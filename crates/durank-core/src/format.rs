//! Human-readable size and path formatting.

use std::path::Path;

use serde::Serializer;

const KB: u64 = 1_000;
const MB: u64 = 1_000_000;
const GB: u64 = 1_000_000_000;
const TB: u64 = 1_000_000_000_000;

/// Format a byte count on the decimal (1000-based) scale.
///
/// Values below 1000 are printed as raw bytes; everything else gets two
/// decimal places and the largest unit that keeps the value below 1000,
/// topping out at TB.
pub fn format_size(bytes: u64) -> String {
    if bytes < KB {
        return format!("{bytes} bytes");
    }

    let (unit, divisor) = if bytes < MB {
        ("KB", KB)
    } else if bytes < GB {
        ("MB", MB)
    } else if bytes < TB {
        ("GB", GB)
    } else {
        ("TB", TB)
    };

    format!("{:.2} {unit}", bytes as f64 / divisor as f64)
}

/// Serialize a path as a string, replacing invalid UTF-8 with `U+FFFD`.
///
/// Use with `#[serde(serialize_with = "...")]` on path fields so that an
/// oddly named file cannot fail a whole report.
pub fn serialize_path_lossy<P, S>(path: &P, serializer: S) -> Result<S::Ok, S::Error>
where
    P: AsRef<Path>,
    S: Serializer,
{
    serializer.serialize_str(&path.as_ref().to_string_lossy())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_bytes() {
        assert_eq!(format_size(0), "0 bytes");
        assert_eq!(format_size(999), "999 bytes");
    }

    #[test]
    fn test_unit_boundaries() {
        assert_eq!(format_size(1_000), "1.00 KB");
        assert_eq!(format_size(1_536), "1.54 KB");
        assert_eq!(format_size(999_999), "1000.00 KB");
        assert_eq!(format_size(1_000_000), "1.00 MB");
        assert_eq!(format_size(2_500_000_000), "2.50 GB");
        assert_eq!(format_size(1_000_000_000_000), "1.00 TB");
    }

    #[test]
    fn test_terabytes_do_not_roll_over() {
        assert_eq!(format_size(5_000_000_000_000_000), "5000.00 TB");
    }
}
