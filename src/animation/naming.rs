//! Output file naming for numbered frames.

/// Number of decimal digits in `value`.
#[inline]
pub fn decimal_digits(mut value: u32) -> usize {
    let mut digits = 1;
    while value >= 10 {
        value /= 10;
        digits += 1;
    }
    digits
}

/// Left-pad the decimal form of `value` with `fill` up to `width` characters.
///
/// Longer numbers are returned unchanged, never truncated.
pub fn pad_number(value: u32, width: usize, fill: char) -> String {
    let len = decimal_digits(value);
    let mut out = String::with_capacity(width.max(len));
    for _ in len..width {
        out.push(fill);
    }
    out.push_str(&value.to_string());
    out
}

/// File name for `frame`, e.g. `metaballs-007.ppm`.
pub fn frame_file_name(prefix: &str, frame: u32, padding: usize) -> String {
    format!("{}-{}.ppm", prefix, pad_number(frame, padding, '0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_digits() {
        assert_eq!(decimal_digits(0), 1);
        assert_eq!(decimal_digits(9), 1);
        assert_eq!(decimal_digits(10), 2);
        assert_eq!(decimal_digits(99_999), 5);
        assert_eq!(decimal_digits(u32::MAX), 10);
    }

    #[test]
    fn test_pad_number() {
        assert_eq!(pad_number(7, 3, '0'), "007");
        assert_eq!(pad_number(0, 3, '0'), "000");
        assert_eq!(pad_number(159, 3, '0'), "159");
        assert_eq!(pad_number(1234, 3, '0'), "1234");
        assert_eq!(pad_number(42, 5, ' '), "   42");
        assert_eq!(pad_number(5, 0, '0'), "5");
    }

    #[test]
    fn test_frame_file_name() {
        assert_eq!(frame_file_name("metaballs", 7, 3), "metaballs-007.ppm");
        assert_eq!(frame_file_name("metaballs", 1234, 3), "metaballs-1234.ppm");
    }
}
