//! Zahlen- und Byte-Formatierung für den Info-String.

use crate::shared::ByteUnits;

/// Formatiert eine Zahl mit Tausendergruppen, z.B. `1234567` → `1,234,567`.
pub fn format_grouped(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

/// Skaliert Bytes auf die größte passende Einheit.
///
/// Liefert den skalierten Wert und den Index der Einheit in [`ByteUnits::labels`].
pub fn scale_bytes(bytes: u64, units: ByteUnits) -> (f64, usize) {
    let base = units.base() as f64;
    let max_order = units.labels().len() - 1;
    let mut value = bytes as f64;
    let mut order = 0;
    while value >= base && order < max_order {
        value /= base;
        order += 1;
    }
    (value, order)
}

/// Formatiert eine Byte-Anzahl als Einheiten-String, z.B. `1500000` → `1.5 MB`.
///
/// Ab MB werden `order - 1` Nachkommastellen gezeigt, überflüssige Nullen
/// entfernt (mindestens eine Stelle bleibt).
pub fn format_byte_unit(bytes: u64, units: ByteUnits) -> String {
    let (value, order) = scale_bytes(bytes, units);
    let decimals = order.saturating_sub(1);
    let mut number = format!("{value:.decimals$}");
    strip_float_zeros(&mut number);
    format!("{number} {}", units.labels()[order])
}

/// `2.500` → `2.5`, `2.000` → `2.0`; Zahlen ohne Punkt bleiben unverändert.
fn strip_float_zeros(number: &mut String) {
    let Some(dot) = number.find('.') else {
        return;
    };
    let keep = number.trim_end_matches('0').len().max(dot + 2);
    number.truncate(keep);
}

/// Kürzt `text` auf höchstens `max_bytes` Bytes an einer Zeichengrenze.
pub fn truncate_to_boundary(text: &mut String, max_bytes: usize) {
    if text.len() <= max_bytes {
        return;
    }
    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_grouped_digits() {
        assert_eq!(format_grouped(0, ','), "0");
        assert_eq!(format_grouped(999, ','), "999");
        assert_eq!(format_grouped(1000, ','), "1,000");
        assert_eq!(format_grouped(1_234_567, ','), "1,234,567");
        assert_eq!(format_grouped(12_345, '.'), "12.345");
        assert_eq!(format_grouped(u64::MAX, ','), "18,446,744,073,709,551,615");
    }

    #[test]
    fn test_scale_bytes() {
        let (value, order) = scale_bytes(1_500_000, ByteUnits::Decimal);
        assert_relative_eq!(value, 1.5);
        assert_eq!(order, 2);

        let (value, order) = scale_bytes(3 * 1024 * 1024 * 1024, ByteUnits::Binary);
        assert_relative_eq!(value, 3.0);
        assert_eq!(order, 3);

        let (value, order) = scale_bytes(512, ByteUnits::Binary);
        assert_relative_eq!(value, 512.0);
        assert_eq!(order, 0);
    }

    #[test]
    fn test_byte_unit_strings() {
        assert_eq!(format_byte_unit(0, ByteUnits::Decimal), "0 B");
        assert_eq!(format_byte_unit(999, ByteUnits::Decimal), "999 B");
        assert_eq!(format_byte_unit(1_234, ByteUnits::Decimal), "1 KB");
        assert_eq!(format_byte_unit(1_500_000, ByteUnits::Decimal), "1.5 MB");
        assert_eq!(format_byte_unit(2_000_000, ByteUnits::Decimal), "2.0 MB");
        assert_eq!(format_byte_unit(2_500_000_000, ByteUnits::Decimal), "2.5 GB");
        assert_eq!(format_byte_unit(2_000_000_000, ByteUnits::Decimal), "2.0 GB");
        assert_eq!(format_byte_unit(1_048_576, ByteUnits::Binary), "1.0 MiB");
    }

    #[test]
    fn test_huge_values_stay_in_largest_unit() {
        assert_eq!(format_byte_unit(u64::MAX, ByteUnits::Decimal), "18446.7441 PB");
    }

    #[test]
    fn test_truncate_respects_char_boundary() {
        let mut text = String::from("Würfel");
        truncate_to_boundary(&mut text, 2);
        assert_eq!(text, "W");

        let mut short = String::from("Cube");
        truncate_to_boundary(&mut short, 10);
        assert_eq!(short, "Cube");
    }
}
