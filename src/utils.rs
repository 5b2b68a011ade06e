//! Assorted utilities and helpers.

use std::cmp::Ordering;

/// Compare the ratios `a_num / a_den` and `b_num / b_den` exactly.
///
/// Cross-multiplies in `u128`, so no precision is lost for any pair of `u64`
/// inputs. A zero denominator ranks as an infinite ratio; two zero
/// denominators compare equal.
#[inline]
pub fn ratio_cmp(a_num: u64, a_den: u64, b_num: u64, b_den: u64) -> Ordering {
    match (a_den, b_den) {
        (0, 0) => Ordering::Equal,
        (0, _) => Ordering::Greater,
        (_, 0) => Ordering::Less,
        _ => {
            let lhs = a_num as u128 * b_den as u128;
            let rhs = b_num as u128 * a_den as u128;
            lhs.cmp(&rhs)
        }
    }
}
