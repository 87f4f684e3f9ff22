//! Unsigned multiplication kernels.
//!
//! [`mul_unsigned`] is the entry point: operands are magnitudes (the façade
//! strips signs first), the destination must hold `|a| + |b|` limbs and be
//! zeroed, because every kernel accumulates. Single-limb rows, a comba kernel
//! for operands up to 4 limbs, schoolbook below [`KARATSUBA_THRESHOLD`] and
//! Karatsuba recursion above it, with temporaries from the scratch arena.

use crate::limb::{Double, Limb, Value};
use crate::ll::{add_unsigned, add_unsigned_in_place, is_zero, sub_unsigned_in_place, trim_unsigned};
use crate::scratch::ScratchArena;

/// Operand size (in limbs) above which multiplication splits recursively.
pub const KARATSUBA_THRESHOLD: usize = 32;

/// `r[..a.len()] = a * b`, returning the high carry limb.
pub fn mul_1(r: &mut [Limb], a: &[Limb], b: Limb) -> Limb {
	assert!(r.len() >= a.len(), "ll::mul_1: destination too small");

	let mut carry = Limb::ZERO;
	for i in 0..a.len() {
		let [lo, hi] = Limb::mul(a[i], b, carry, Limb::ZERO);
		r[i] = lo;
		carry = hi;
	}
	carry
}

/// `r = r * b + carry`, returning the new high limb. The workhorse of
/// parsing: one call per digit chunk.
pub fn mul_1_in_place(r: &mut [Limb], b: Limb, carry: Limb) -> Limb {
	let mut carry = carry;
	for limb in r.iter_mut() {
		let [lo, hi] = Limb::mul(*limb, b, carry, Limb::ZERO);
		*limb = lo;
		carry = hi;
	}
	carry
}

/// `r[..a.len()] += a * b`, returning the carry limb to add at `r[a.len()]`.
pub fn addmul_1(r: &mut [Limb], a: &[Limb], b: Limb) -> Limb {
	assert!(r.len() >= a.len(), "ll::addmul_1: destination too small");

	let mut carry = Limb::ZERO;
	for i in 0..a.len() {
		let [lo, hi] = Limb::mul(a[i], b, carry, r[i]);
		r[i] = lo;
		carry = hi;
	}
	carry
}

/// `r[..a.len()] -= a * b`, returning the borrow limb to subtract at
/// `r[a.len()]`. The quotient-refinement step of Knuth D.
pub fn submul_1(r: &mut [Limb], a: &[Limb], b: Limb) -> Limb {
	assert!(r.len() >= a.len(), "ll::submul_1: destination too small");

	let mut carry = Limb::ZERO;
	for i in 0..a.len() {
		let t = (a[i].0 as Double) * (b.0 as Double) + (carry.0 as Double);
		let lo = t as Value;
		let hi = (t >> Limb::BITS) as Value;
		let (d, borrow) = r[i].0.overflowing_sub(lo);
		r[i] = Limb(d);
		// hi == MAX forces lo == 0, so this cannot overflow
		carry = Limb(hi + borrow as Value);
	}
	carry
}

/// Limb capacity the scratch arena needs for `mul_unsigned` on operands of
/// the given lengths.
pub fn mul_scratch_limbs(a_len: usize, b_len: usize) -> usize {
	if a_len.min(b_len) <= KARATSUBA_THRESHOLD {
		0
	} else {
		6 * (a_len + b_len) + 256
	}
}

/// `r = a * b` over magnitudes. `r` must hold at least `a.len() + b.len()`
/// limbs and be zeroed.
pub fn mul_unsigned(r: &mut [Limb], a: &[Limb], b: &[Limb], scratch: &ScratchArena) {
	let a = trim_unsigned(a);
	let b = trim_unsigned(b);
	assert!(r.len() >= a.len() + b.len(), "ll::mul_unsigned: destination too small");
	debug_assert!(is_zero(&r[..a.len() + b.len()]), "ll::mul_unsigned: destination not zeroed");

	let (a, b) = if a.len() >= b.len() { (a, b) } else { (b, a) };

	if b.is_empty() {
		return;
	}
	if b.len() == 1 {
		let carry = mul_1(&mut r[..a.len()], a, b[0]);
		r[a.len()] = carry;
		return;
	}
	if a.len() <= 4 {
		mul_comba(r, a, b);
		return;
	}
	if b.len() <= KARATSUBA_THRESHOLD {
		mul_schoolbook(r, a, b);
		return;
	}
	mul_karatsuba(r, a, b, scratch);
}

/// Column-wise kernel for small fixed sizes (up to 4x4 limbs): one pass over
/// the result positions with a three-limb accumulator, no carry ripples.
fn mul_comba(r: &mut [Limb], a: &[Limb], b: &[Limb]) {
	debug_assert!(!a.is_empty() && a.len() <= 4);
	debug_assert!(!b.is_empty() && b.len() <= 4);

	let mut acc0 = Limb::ZERO;
	let mut acc1 = Limb::ZERO;
	let mut acc2 = Limb::ZERO;

	for k in 0..a.len() + b.len() - 1 {
		let lo_i = (k + 1).saturating_sub(b.len());
		let hi_i = a.len().min(k + 1);
		for i in lo_i..hi_i {
			let [lo, hi] = Limb::mul(a[i], b[k - i], Limb::ZERO, Limb::ZERO);
			let (s0, c0) = Limb::addc(acc0, lo, false);
			let (s1, c1) = Limb::addc(acc1, hi, c0);
			acc0 = s0;
			acc1 = s1;
			acc2 = Limb(acc2.0 + c1 as Value);
		}
		r[k] = acc0;
		acc0 = acc1;
		acc1 = acc2;
		acc2 = Limb::ZERO;
	}
	r[a.len() + b.len() - 1] = acc0;
}

/// Row-by-row accumulation. `a` is the longer operand.
fn mul_schoolbook(r: &mut [Limb], a: &[Limb], b: &[Limb]) {
	let carry = mul_1(&mut r[..a.len()], a, b[0]);
	r[a.len()] = carry;
	for i in 1..b.len() {
		let carry = addmul_1(&mut r[i..i + a.len()], a, b[i]);
		// this position is above every previous row's carry, still zero
		r[i + a.len()] = carry;
	}
}

/// Karatsuba split at `h = a.len() / 2`:
///
/// ```text
/// a = a1*B^h + a0, b = b1*B^h + b0
/// a*b = z2*B^2h + ((a0+a1)(b0+b1) - z0 - z2)*B^h + z0
/// ```
///
/// `z0` and `z2` land directly in the (zeroed) destination; only the middle
/// product needs scratch space. When `b` does not reach the split point, `a`
/// is chopped into `h`-limb pieces instead and each piece-product is
/// accumulated at its offset.
fn mul_karatsuba(r: &mut [Limb], a: &[Limb], b: &[Limb], scratch: &ScratchArena) {
	let h = a.len() / 2;

	if b.len() <= h {
		let mut offset = 0;
		for chunk in a.chunks(h) {
			let mut tmp = scratch.alloc_zeroed(chunk.len() + b.len());
			mul_unsigned(&mut tmp, chunk, b, scratch);
			let carry = add_unsigned_in_place(&mut r[offset..], trim_unsigned(&tmp));
			debug_assert!(!carry);
			offset += h;
		}
		return;
	}

	let (a0, a1) = a.split_at(h);
	let (b0, b1) = b.split_at(h);

	let z0_len = 2 * h;
	let z2_len = a1.len() + b1.len();

	mul_unsigned(&mut r[..z0_len], a0, b0, scratch);
	mul_unsigned(&mut r[z0_len..z0_len + z2_len], a1, b1, scratch);

	let mut asum = scratch.alloc(a1.len() + 1);
	let carry = add_unsigned(&mut asum, a0, a1);
	debug_assert!(!carry);

	let mut bsum = scratch.alloc(b0.len().max(b1.len()) + 1);
	let carry = add_unsigned(&mut bsum, b0, b1);
	debug_assert!(!carry);

	let mut zmid = scratch.alloc_zeroed(asum.len() + bsum.len());
	mul_unsigned(&mut zmid, &asum, &bsum, scratch);

	// (a0+a1)(b0+b1) >= z0 + z2, so neither subtraction can borrow
	let borrow = sub_unsigned_in_place(&mut zmid, &r[..z0_len]);
	debug_assert!(!borrow);
	let borrow = sub_unsigned_in_place(&mut zmid, &r[z0_len..z0_len + z2_len]);
	debug_assert!(!borrow);

	let carry = add_unsigned_in_place(&mut r[h..], trim_unsigned(&zmid));
	debug_assert!(!carry);
}
