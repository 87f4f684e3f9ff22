//! Binary GCD over magnitudes: strip the shared power of two, then
//! subtract-and-strip until the operands meet. Only shifts, subtractions and
//! parity tests, no division.

use crate::limb::Limb;
use crate::ll::{
	cmp_unsigned, is_zero, shl_bits_in_place, shr_bits_in_place, sub_unsigned_in_place,
	trailing_zeros, trim_unsigned,
};

/// Greatest common divisor of the two working buffers.
///
/// Both buffers are equal-length scratch copies of the (non-negative)
/// operands and are destroyed. The result is written to `x`; the returned
/// value is its trimmed limb length (0 for `gcd(0, 0)`).
pub fn gcd_in_place(x: &mut [Limb], y: &mut [Limb]) -> usize {
	assert_eq!(x.len(), y.len(), "ll::gcd_in_place: buffers must have equal length");

	if is_zero(x) {
		x.copy_from_slice(y);
		return trim_unsigned(x).len();
	}
	if is_zero(y) {
		return trim_unsigned(x).len();
	}

	let k = {
		let tx = trailing_zeros(x);
		let ty = trailing_zeros(y);
		shr_bits_in_place(x, tx);
		shr_bits_in_place(y, ty);
		tx.min(ty)
	};

	// both odd from here on
	let mut a: &mut [Limb] = x;
	let mut b: &mut [Limb] = y;
	let mut a_is_x = true;

	loop {
		match cmp_unsigned(a, b) {
			std::cmp::Ordering::Equal => break,
			std::cmp::Ordering::Less => {
				std::mem::swap(&mut a, &mut b);
				a_is_x = !a_is_x;
			},
			std::cmp::Ordering::Greater => {},
		}

		// odd - odd is even and non-zero here, so the strip terminates and
		// every round loses at least one bit
		let borrow = sub_unsigned_in_place(a, b);
		debug_assert!(!borrow);
		let tz = trailing_zeros(a);
		shr_bits_in_place(a, tz);
	}

	// restore the shared power of two and make sure the result sits in x
	let result: &mut [Limb] = if a_is_x {
		a
	} else {
		b.copy_from_slice(a);
		b
	};
	shl_bits_in_place(result, k);
	trim_unsigned(result).len()
}
