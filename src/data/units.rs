//! Binary-unit formatting for byte counts and throughput values.
//!
//! Values are scaled to the largest unit whose boundary they exceed and
//! rendered with a `kiB` / `MiB` / `GiB` style suffix.

pub const KIB: f64 = 1024.0;
pub const MIB: f64 = KIB * KIB;
pub const GIB: f64 = MIB * KIB;

// ─────────────────────────────────────────────────────────────────────────────
// Unit table
// ─────────────────────────────────────────────────────────────────────────────

/// One row of the unit threshold table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryUnit {
    /// Values strictly above this boundary use this unit.
    pub boundary: f64,
    /// Divisor applied to the raw value.
    pub divisor: f64,
    /// Scale prefix placed before the suffix (`"k"`, `"M"`, `"G"`).
    pub prefix: &'static str,
    /// Decimal places shown after scaling.
    pub decimals: usize,
}

/// Threshold table in strictly increasing boundary order.
pub const BINARY_UNITS: [BinaryUnit; 3] = [
    BinaryUnit {
        boundary: KIB,
        divisor: KIB,
        prefix: "k",
        decimals: 0,
    },
    BinaryUnit {
        boundary: MIB,
        divisor: MIB,
        prefix: "M",
        decimals: 0,
    },
    BinaryUnit {
        boundary: GIB,
        divisor: GIB,
        prefix: "G",
        decimals: 1,
    },
];

/// Largest unit whose boundary `value` exceeds, or `None` for base units.
pub fn unit_for(value: f64) -> Option<&'static BinaryUnit> {
    BINARY_UNITS.iter().rev().find(|u| value > u.boundary)
}

// ─────────────────────────────────────────────────────────────────────────────
// Formatting
// ─────────────────────────────────────────────────────────────────────────────

/// Format `value` with a binary scale prefix followed by `suffix_unit`.
///
/// Values at or below 1024 stay in base units with no decimals. The scaled
/// value is rounded half away from zero, so `1536` bytes becomes `2 kiB`.
///
/// ```
/// # use benchplot::data::units::format_with_suffix;
/// assert_eq!(format_with_suffix(3.0 * 1024.0 * 1024.0 * 1024.0, "iB"), "3.0 GiB");
/// assert_eq!(format_with_suffix(512.0, "iB/s"), "512 iB/s");
/// ```
pub fn format_with_suffix(value: f64, suffix_unit: &str) -> String {
    match unit_for(value) {
        Some(unit) => format!(
            "{} {}{}",
            fixed(value / unit.divisor, unit.decimals),
            unit.prefix,
            suffix_unit
        ),
        None => format!("{} {}", fixed(value, 0), suffix_unit),
    }
}

/// Format a byte count, e.g. `2048.0` becomes `"2 kiB"`.
pub fn format_bytes(value: f64) -> String {
    format_with_suffix(value, "iB")
}

/// Format a throughput in bytes per second, e.g. `1536.0` becomes `"2 kiB/s"`.
pub fn format_bytes_per_second(value: f64) -> String {
    format_with_suffix(value, "iB/s")
}

/// Render `value` with `decimals` places, rounding the exact decimal value of
/// the double and sending exact ties away from zero.
///
/// `{:.*}` already rounds the exact value but sends ties to even. A tie is
/// only taken when `value * 10^decimals` lands on `.5` with no rounding
/// error, so `1.45` (stored as `1.4499…`) stays `1.4`.
fn fixed(value: f64, decimals: usize) -> String {
    let scale = 10f64.powi(decimals as i32);
    let scaled = value * scale;
    let exact_tie = scaled.fract().abs() == 0.5 && value.mul_add(scale, -scaled) == 0.0;
    if exact_tie {
        format!("{:.*}", decimals, scaled.round() / scale)
    } else {
        format!("{:.*}", decimals, value)
    }
}

/// Round to two decimals, matching what cursor readouts display.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
