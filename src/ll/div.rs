//! Unsigned division: scalar long division for single-limb divisors, Knuth
//! algorithm D otherwise. Sign handling lives in the façade.
//!
//! Division by zero is fatal.

use crate::limb::{Double, Limb, Value};
use crate::ll::{add_unsigned_in_place, shl_small, shr_small_in_place, submul_1, trim_unsigned};
use crate::scratch::ScratchArena;

const BASE: Double = 1 << Limb::BITS;

/// `q[..u.len()] = u / d`, returning the remainder. `d` must be non-zero.
pub fn div_rem_1(q: &mut [Limb], u: &[Limb], d: Limb) -> Limb {
	if d.is_zero() {
		panic!("division by zero");
	}
	assert!(q.len() >= u.len(), "ll::div_rem_1: destination too small");

	let d = d.0 as Double;
	let mut rem: Double = 0;
	for i in (0..u.len()).rev() {
		let cur = (rem << Limb::BITS) | (u[i].0 as Double);
		q[i] = Limb((cur / d) as Value);
		rem = cur % d;
	}
	Limb(rem as Value)
}

/// The aliased (quotient overwrites dividend) form of [`div_rem_1`].
pub fn div_rem_1_in_place(u: &mut [Limb], d: Limb) -> Limb {
	if d.is_zero() {
		panic!("division by zero");
	}

	let d = d.0 as Double;
	let mut rem: Double = 0;
	for i in (0..u.len()).rev() {
		let cur = (rem << Limb::BITS) | (u[i].0 as Double);
		u[i] = Limb((cur / d) as Value);
		rem = cur % d;
	}
	Limb(rem as Value)
}

/// Limb capacity the scratch arena needs for [`div_rem`].
pub fn div_scratch_limbs(u_len: usize, v_len: usize) -> usize {
	u_len + v_len + 8
}

/// `q = u / v` over magnitudes; the remainder is left in the low limbs of
/// `u` and the rest of `u` is zeroed.
///
/// Requires `q.len() >= u.len() - |v| + 1` where `|v|` is the trimmed divisor
/// length (`q.len() >= u.len()` always suffices). `v` must be non-zero.
pub fn div_rem(q: &mut [Limb], u: &mut [Limb], v: &[Limb], scratch: &ScratchArena) {
	let v = trim_unsigned(v);
	if v.is_empty() {
		panic!("division by zero");
	}

	q.fill(Limb::ZERO);

	let ut = trim_unsigned(u).len();
	if ut < v.len() {
		// quotient is zero, the dividend already is the remainder
		return;
	}

	if v.len() == 1 {
		let rem = div_rem_1_in_place(&mut u[..ut], v[0]);
		assert!(q.len() >= ut, "ll::div_rem: destination too small");
		q[..ut].copy_from_slice(&u[..ut]);
		u[0] = rem;
		u[1..ut].fill(Limb::ZERO);
		return;
	}

	let n = v.len();
	let m = ut - n;
	assert!(q.len() > m, "ll::div_rem: destination too small");

	// D1: normalize so the divisor's top bit is set; the dividend gets one
	// extra high limb for the shifted-out bits.
	let shift = v[n - 1].leading_zeros();

	let mut vn = scratch.alloc(n);
	let carry = shl_small(&mut vn, v, shift);
	debug_assert!(carry.is_zero());

	let mut un = scratch.alloc(ut + 1);
	let carry = shl_small(&mut un[..ut], &u[..ut], shift);
	un[ut] = carry;

	let vtop = vn[n - 1].0 as Double;
	let vsecond = vn[n - 2].0 as Double;

	for j in (0..=m).rev() {
		// D3: estimate from the top two dividend limbs over the top divisor
		// limb, clamp to the limb range, refine downward with the three-limb
		// test. For a normalized divisor this corrects at most twice.
		let u2 = Limb::make_double(un[j + n - 1], un[j + n]);
		let mut qhat = u2 / vtop;
		let mut rhat = u2 % vtop;

		loop {
			if qhat >= BASE || qhat * vsecond > (rhat << Limb::BITS) | (un[j + n - 2].0 as Double) {
				qhat -= 1;
				rhat += vtop;
				if rhat < BASE {
					continue;
				}
			}
			break;
		}

		// D4: subtract qhat * v from the remainder window.
		let mut qh = Limb(qhat as Value);
		let borrow = submul_1(&mut un[j..j + n], &vn, qh);
		let (top, under) = Limb::subb(un[j + n], borrow, false);
		un[j + n] = top;

		if under {
			// D6: the estimate was still one too high; add the divisor back.
			qh = qh.wrapping_sub(Limb::ONE);
			let carry = add_unsigned_in_place(&mut un[j..j + n], &vn);
			un[j + n] = un[j + n].wrapping_add(Limb::from_bool(carry));
		}

		q[j] = qh;
	}

	// D8: un-normalize the remainder back into the dividend.
	debug_assert!(un[n..ut + 1].iter().all(|l| l.is_zero()));
	let carry = shr_small_in_place(&mut un[..n], shift);
	debug_assert!(carry.is_zero());
	u[..n].copy_from_slice(&un[..n]);
	u[n..].fill(Limb::ZERO);
}
