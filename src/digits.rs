//! Next bigger integer with the same decimal digits

use crate::error::{Error, Result};

/// Finds the smallest integer greater than `number` that is a rearrangement
/// of its decimal digits, or `None` when no such integer exists (the digits
/// are already in non-increasing order, or the rearrangement leaves the i32
/// range).
///
/// Non-positive input is rejected as [Error::OutOfRange].
pub fn next_bigger_with_same_digits(number: i32) -> Result<Option<i32>> {
    if number <= 0 {
        return Err(Error::OutOfRange("the number must be positive"));
    }
    let mut digits = to_digits(number);

    // pivot: rightmost position whose digit exceeds its left neighbor
    let mut i = digits.len() - 1;
    while i > 0 && digits[i] <= digits[i - 1] {
        i -= 1;
    }
    if i == 0 {
        // digits never increase from left to right, already the maximum
        return Ok(None);
    }

    // smallest digit in the suffix that still exceeds the pivot's neighbor
    let mut min_from_right = i;
    for j in i + 1..digits.len() {
        if digits[j] < digits[min_from_right] && digits[j] > digits[i - 1] {
            min_from_right = j;
        }
    }
    digits.swap(i - 1, min_from_right);

    // the smallest completion of the suffix is its ascending order
    digits[i..].sort_unstable();

    Ok(from_digits(&digits))
}

/// Decimal digits of a positive number, most significant first.
fn to_digits(mut number: i32) -> Vec<i32> {
    let mut digits = Vec::new();
    while number != 0 {
        digits.push(number % 10);
        number /= 10;
    }
    digits.reverse();
    digits
}

/// Reassembles most-significant-first digits, or `None` when the value no
/// longer fits in an i32.
fn from_digits(digits: &[i32]) -> Option<i32> {
    let mut number = 0i32;
    for &digit in digits {
        number = number.checked_mul(10)?.checked_add(digit)?;
    }
    Some(number)
}
