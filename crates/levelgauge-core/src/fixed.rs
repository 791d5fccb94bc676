use fixed::types::I64F64;

/// Q64.64 fixed-point: 64 integer bits, 64 fractional bits.
///
/// Whole fleets of large tanks sum to well past `i32::MAX` litres, so the
/// integer part needs the full 64 bits.
pub type Fixed64 = I64F64;

/// Fill level in percent. Nominally 0..=100 but never clamped.
pub type Percentage = f32;

/// Convert an f64 to Fixed64. Use only at host boundaries.
///
/// Out-of-range values saturate and NaN maps to zero, so a misbehaving host
/// reading can never panic the aggregation.
#[inline]
pub fn f64_to_fixed64(v: f64) -> Fixed64 {
    if v.is_nan() {
        Fixed64::ZERO
    } else {
        Fixed64::saturating_from_num(v)
    }
}

/// Convert Fixed64 to f64. Use only for display.
#[inline]
pub fn fixed64_to_f64(v: Fixed64) -> f64 {
    v.to_num::<f64>()
}

/// Ratio of two quantities in percent, computed on the raw bit patterns.
///
/// Returns 0 when either side is zero.
#[inline]
pub fn raw_ratio_percent(current: Fixed64, max: Fixed64) -> Percentage {
    if current == Fixed64::ZERO || max == Fixed64::ZERO {
        return 0.0;
    }
    let ratio = current.to_bits() as f64 * (1.0 / max.to_bits() as f64);
    (ratio * 100.0) as Percentage
}
