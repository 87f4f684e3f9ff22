//! The signed arbitrary-precision integer.
//!
//! `Int` owns one limb container and stores the value in two's complement
//! with variable width: the sign is the top bit of the highest limb,
//! conceptually extended to infinity. The container always holds at least
//! one limb; a single zero limb is the integer zero.
//!
//! The façade sizes destinations, dispatches to the `ll` kernels and handles
//! the sign-based pre/post processing. Results are trimmed back to canonical
//! length, although every consumer tolerates non-canonical input.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use rand::RngCore;
use smallvec::SmallVec;

use crate::base_info::{digit_char, digit_value, BaseInfo};
use crate::buf::IntBuf;
use crate::error::{assert, Error};
use crate::limb::Limb;
use crate::ll;
use crate::scratch::ScratchArena;

#[derive(Clone, Default)]
pub struct Int {
	buf: IntBuf,
}

impl Int {
	pub fn new_zero() -> Self {
		Self { buf: IntBuf::new_zero() }
	}

	/// Builds a value from a raw little-endian limb view, interpreted as
	/// two's complement. An empty view is zero.
	pub fn from_limbs(limbs: &[Limb]) -> Self {
		if limbs.is_empty() {
			return Self::new_zero();
		}
		Self::from_buf(IntBuf::from_slice(limbs))
	}

	#[inline]
	fn view(&self) -> &[Limb] {
		self.buf.as_slice()
	}

	/// The canonical (shortest) view of the value.
	#[inline]
	fn trimmed(&self) -> &[Limb] {
		ll::trim(self.view())
	}

	fn from_buf(buf: IntBuf) -> Self {
		let mut int = Self { buf };
		int.finish();
		int
	}

	/// Restores the canonical form: shortest limb sequence, at least one limb.
	fn finish(&mut self) {
		let len = ll::trim(self.buf.as_slice()).len().max(1);
		self.buf.truncate(len);
	}

	/// Sign-extends the container to at least `n` limbs.
	fn grow_to(&mut self, n: usize) {
		if self.buf.len() < n {
			let fill = ll::sign_limb(self.buf.as_slice());
			self.buf.resize(n, fill);
		}
	}

	/// `|self|` as an unsigned limb buffer (top limb may be a plain zero).
	fn magnitude(&self) -> IntBuf {
		let mut buf = IntBuf::from_slice(self.trimmed());
		if ll::is_negative(&buf) {
			if let Some(carry) = ll::negate_in_place(&mut buf) {
				buf.push(carry);
			}
		}
		buf
	}

	/// Wraps an unsigned magnitude back into the signed representation,
	/// appending a zero sign limb when the top bit is taken.
	fn from_magnitude(buf: IntBuf, negative: bool) -> Self {
		let mut int = Self { buf };
		if int.buf.is_empty() {
			int.buf.push(Limb::ZERO);
		}
		if ll::is_negative(int.view()) {
			int.buf.push(Limb::ZERO);
		}
		if negative {
			if let Some(carry) = ll::negate_in_place(int.buf.as_mut_slice()) {
				int.buf.push(carry);
			}
		}
		int.finish();
		int
	}

	//----------------------------------------------------------------------------------------------
	// queries

	pub fn is_zero(&self) -> bool {
		ll::is_zero(self.view())
	}

	pub fn is_negative(&self) -> bool {
		ll::is_negative(self.view())
	}

	pub fn is_positive(&self) -> bool {
		!self.is_negative() && !self.is_zero()
	}

	pub fn signum(&self) -> i32 {
		ll::signum(self.view())
	}

	/// Minimum number of bits needed to represent the absolute value.
	/// Zero reports 1.
	pub fn length(&self) -> usize {
		if self.is_negative() {
			return self.abs().length();
		}
		ll::bit_width(self.view()).max(1)
	}

	/// `k + 1` when the value equals `2**k`, 0 otherwise.
	pub fn is_pow_2(&self) -> usize {
		if self.is_negative() {
			return 0;
		}
		let v = ll::trim_unsigned(self.view());
		let Some((&top, rest)) = v.split_last() else {
			return 0;
		};
		if top.0.count_ones() != 1 {
			return 0;
		}
		if rest.iter().any(|limb| limb.is_not_zero()) {
			return 0;
		}
		rest.len() * Limb::BITS + top.trailing_zeros() + 1
	}

	/// Best-effort conversion built from the top two limbs.
	pub fn to_f64(&self) -> f64 {
		fn exp2(k: usize) -> f64 {
			(2.0f64).powi(k as i32)
		}

		let v = self.trimmed();
		match v.len() {
			0 => 0.0,
			1 => v[0].0 as i64 as f64,
			n => {
				if ll::is_negative(v) {
					-((!v[n - 1].0) as f64 * exp2((n - 1) * Limb::BITS)
						+ (!v[n - 2].0) as f64 * exp2((n - 2) * Limb::BITS))
				} else {
					v[n - 1].0 as f64 * exp2((n - 1) * Limb::BITS)
						+ v[n - 2].0 as f64 * exp2((n - 2) * Limb::BITS)
				}
			},
		}
	}

	pub fn to_f32(&self) -> f32 {
		self.to_f64() as f32
	}

	/// Narrows to a primitive integer; `None` when the value is out of range.
	pub fn get<T: FromInt>(&self) -> Option<T> {
		T::from_int(self)
	}

	fn to_i128_checked(&self) -> Option<i128> {
		let v = self.trimmed();
		match v.len() {
			1 => Some(v[0].0 as i64 as i128),
			2 => Some(Limb::make_double(v[0], v[1]) as i128),
			_ => None,
		}
	}

	fn to_u128_checked(&self) -> Option<u128> {
		if self.is_negative() {
			return None;
		}
		let v = ll::trim_unsigned(self.view());
		match v.len() {
			0 => Some(0),
			1 => Some(v[0].0 as u128),
			2 => Some(Limb::make_double(v[0], v[1])),
			_ => None,
		}
	}

	//----------------------------------------------------------------------------------------------
	// arithmetic

	pub fn abs(&self) -> Int {
		if self.is_negative() {
			-self
		} else {
			self.clone()
		}
	}

	fn negate_in_place(&mut self) {
		if let Some(carry) = ll::negate_in_place(self.buf.as_mut_slice()) {
			self.buf.push(carry);
		}
		self.finish();
	}

	fn add_impl(lhs: &Int, rhs: &Int, sub: bool) -> Int {
		let n = lhs.buf.len().max(rhs.buf.len());
		let mut buf = IntBuf::with_len(n, Limb::ZERO);
		let carry = if sub {
			ll::ripple_sub(&mut buf, lhs.view(), rhs.view())
		} else {
			ll::ripple_add(&mut buf, lhs.view(), rhs.view())
		};
		let mut r = Self { buf };
		if let Some(c) = carry {
			r.buf.push(c);
		}
		r.finish();
		r
	}

	fn add_assign_impl(&mut self, rhs: &Int, sub: bool) {
		self.grow_to(rhs.buf.len());
		let carry = if sub {
			ll::sub_in_place(self.buf.as_mut_slice(), rhs.view())
		} else {
			ll::add_in_place(self.buf.as_mut_slice(), rhs.view())
		};
		if let Some(c) = carry {
			self.buf.push(c);
		}
		self.finish();
	}

	fn mul_impl(lhs: &Int, rhs: &Int) -> Int {
		let negative = lhs.is_negative() != rhs.is_negative();
		let a = lhs.magnitude();
		let b = rhs.magnitude();
		let at = ll::trim_unsigned(&a);
		let bt = ll::trim_unsigned(&b);

		let mut buf = IntBuf::with_len(at.len() + bt.len() + 1, Limb::ZERO);
		let scratch = ScratchArena::with_capacity(ll::mul_scratch_limbs(at.len(), bt.len()));
		ll::mul_unsigned(&mut buf, at, bt, &scratch);

		let mut r = Self { buf };
		if negative {
			r.negate_in_place();
		}
		r.finish();
		r
	}

	/// Truncating division with remainder: `self = q * rhs + r` with
	/// `|r| < |rhs|` and `sign(r) == sign(self)`.
	///
	/// Division by zero is fatal.
	pub fn div_rem(&self, rhs: &Int) -> (Int, Int) {
		let q_negative = self.is_negative() != rhs.is_negative();
		let r_negative = self.is_negative();

		let mut u = self.magnitude();
		let v = rhs.magnitude();
		let vt = ll::trim_unsigned(&v);
		if vt.is_empty() {
			panic!("division by zero");
		}

		let ut = ll::trim_unsigned(&u).len();
		let mut qbuf = IntBuf::with_len(ut.max(1), Limb::ZERO);
		let scratch = ScratchArena::with_capacity(ll::div_scratch_limbs(ut, vt.len()));
		ll::div_rem(&mut qbuf, u.as_mut_slice(), vt, &scratch);

		let q = Self::from_magnitude(qbuf, q_negative);
		let r = Self::from_magnitude(u, r_negative);
		(q, r)
	}

	/// Square-and-multiply exponentiation with a non-negative exponent.
	pub fn pow(&self, exp: u32) -> Int {
		let mut res = Int::from(1i64);
		if exp == 0 {
			return res;
		}
		for i in (0..=31 - exp.leading_zeros()).rev() {
			res = Self::mul_impl(&res, &res);
			if (exp >> i) & 1 == 1 {
				res = Self::mul_impl(&res, self);
			}
		}
		res
	}

	/// Greatest common divisor; always non-negative,
	/// `gcd(x, 0) == |x|`, `gcd(0, 0) == 0`.
	pub fn gcd(&self, rhs: &Int) -> Int {
		let a = self.magnitude();
		let b = rhs.magnitude();
		let at = ll::trim_unsigned(&a);
		let bt = ll::trim_unsigned(&b);
		let n = at.len().max(bt.len());
		if n == 0 {
			return Int::new_zero();
		}

		let mut x = IntBuf::with_len(n, Limb::ZERO);
		x[..at.len()].copy_from_slice(at);
		let mut y = IntBuf::with_len(n, Limb::ZERO);
		y[..bt.len()].copy_from_slice(bt);

		let len = ll::gcd_in_place(&mut x, &mut y);
		x.truncate(len.max(1));
		Self::from_magnitude(x, false)
	}

	/// Least common multiple: `|x| * (|y| / gcd(x, y))`, 0 for zero operands.
	pub fn lcm(&self, rhs: &Int) -> Int {
		if self.is_zero() || rhs.is_zero() {
			return Int::new_zero();
		}
		let a = self.abs();
		let b = rhs.abs();
		let g = a.gcd(&b);
		let (q, _) = a.div_rem(&g);
		Self::mul_impl(&q, &b)
	}

	//----------------------------------------------------------------------------------------------
	// bit manipulation

	pub fn set_bit(&mut self, i: usize, value: bool) {
		self.grow_to(i / Limb::BITS + 2);
		let mask = 1u64 << (i % Limb::BITS);
		let limb = &mut self.buf[i / Limb::BITS];
		if value {
			limb.0 |= mask;
		} else {
			limb.0 &= !mask;
		}
		self.finish();
	}

	/// Bits past the stored width report the sign bit.
	pub fn bit_is_set(&self, i: usize) -> bool {
		let v = self.view();
		if i < v.len() * Limb::BITS {
			(v[i / Limb::BITS].0 >> (i % Limb::BITS)) & 1 != 0
		} else {
			self.is_negative()
		}
	}

	/// Non-negative residue modulo `2**n`.
	pub fn mod_pow_2(&self, n: usize) -> Int {
		if n == 0 {
			return Int::new_zero();
		}
		let limbs = n / Limb::BITS;
		let bits = n % Limb::BITS;
		// one limb above the masked range keeps the result non-negative
		let total = limbs + (bits != 0) as usize + 1;

		let src = self.view();
		let mut buf = IntBuf::with_len(total, ll::sign_limb(src));
		let common = total.min(src.len());
		buf[..common].copy_from_slice(&src[..common]);

		if bits != 0 {
			buf[limbs] = Limb(buf[limbs].0 & ((1u64 << bits) - 1));
			buf[limbs + 1..].fill(Limb::ZERO);
		} else {
			buf[limbs..].fill(Limb::ZERO);
		}
		Self::from_buf(buf)
	}

	/// The `count`-bit slice starting at bit `low`, zero-extended.
	pub fn get_bit_range(&self, count: usize, low: usize) -> Int {
		if count == 0 {
			return Int::new_zero();
		}
		(self >> low).mod_pow_2(count)
	}

	/// ORs in `amount` consecutive one bits starting at bit `size`; anything
	/// above them is cleared. Used to sign-fill a truncated bit field.
	pub fn one_extend(&self, size: usize, amount: usize) -> Int {
		let mut r = self.mod_pow_2(size + amount);
		for i in size..size + amount {
			r.set_bit(i, true);
		}
		r
	}

	//----------------------------------------------------------------------------------------------
	// text

	/// Parses a string in the given base (2..=36). Base 0 detects a prefix:
	/// `0x`/`0X` hexadecimal, `0b`/`0B` binary, leading `0` octal, decimal
	/// otherwise. The sign comes before the prefix. `_` separators are
	/// skipped; any other non-digit rejects the input.
	pub fn from_str_radix(s: &str, base: u32) -> Result<Int, Error> {
		let mut bytes = s.as_bytes();
		assert(!bytes.is_empty(), || Error::new_parse_error("empty string"))?;

		let negative = match bytes[0] {
			b'+' => {
				bytes = &bytes[1..];
				false
			},
			b'-' => {
				bytes = &bytes[1..];
				true
			},
			_ => false,
		};

		let base = if base == 0 {
			if bytes.starts_with(b"0x") || bytes.starts_with(b"0X") {
				bytes = &bytes[2..];
				16
			} else if bytes.starts_with(b"0b") || bytes.starts_with(b"0B") {
				bytes = &bytes[2..];
				2
			} else if bytes.first() == Some(&b'0') {
				// the leading zero itself stays, so a bare "0" still parses
				8
			} else {
				10
			}
		} else {
			base
		};

		let info = BaseInfo::get(base)
			.ok_or_else(|| Error::new_invalid_base("base must be in 2..=36"))?;

		let mut digits: SmallVec<[u8; 128]> = SmallVec::new();
		for &c in bytes {
			if c == b'_' {
				continue;
			}
			match digit_value(c) {
				Some(d) if d < info.base => digits.push(d as u8),
				_ => return Err(Error::new_parse_error("invalid digit")),
			}
		}
		assert(!digits.is_empty(), || Error::new_parse_error("no digits"))?;

		let est = info.digits_to_limbs(digits.len()) + 1;
		let mut buf = IntBuf::with_len(est, Limb::ZERO);
		let dpl = info.digits_per_limb as usize;

		let mut len = 0usize;
		let mut pos = digits.len() % dpl;
		if pos > 0 {
			let top = parse_chunk(&digits[..pos], info.base);
			buf[0] = top;
			len = top.is_not_zero() as usize;
		}
		while pos < digits.len() {
			let chunk = parse_chunk(&digits[pos..pos + dpl], info.base);
			let top = ll::mul_1_in_place(&mut buf[..len], info.big_base, chunk);
			if top.is_not_zero() {
				buf[len] = top;
				len += 1;
			}
			pos += dpl;
		}

		buf.truncate(len.max(1));
		Ok(Self::from_magnitude(buf, negative))
	}

	/// Formats in the given base (2..=36), lowercase digits, leading `-` for
	/// negative values.
	pub fn to_string_radix(&self, base: u32) -> String {
		let info = BaseInfo::get(base).expect("base must be in 2..=36");

		if self.is_zero() {
			return "0".to_string();
		}
		let negative = self.is_negative();
		let mut mag = self.magnitude();
		let mut len = ll::trim_unsigned(&mag).len();

		let mut out: SmallVec<[u8; 128]> = SmallVec::new();
		out.reserve(info.bits_to_digits(len * Limb::BITS) + 1);

		let base = info.base;
		loop {
			let rem = ll::div_rem_1_in_place(&mut mag[..len], info.big_base);
			while len > 0 && mag[len - 1].is_zero() {
				len -= 1;
			}
			let mut r = rem.0;
			if len == 0 {
				// top chunk: no zero padding
				while r > 0 {
					out.push(digit_char(r % base));
					r /= base;
				}
				break;
			}
			for _ in 0..info.digits_per_limb {
				out.push(digit_char(r % base));
				r /= base;
			}
		}

		if negative {
			out.push(b'-');
		}
		out.reverse();
		out.iter().map(|&b| b as char).collect()
	}

	//----------------------------------------------------------------------------------------------
	// random

	/// Fills `bits / Limb::BITS + 1` limbs from the generator and clears the
	/// top bit, producing a non-negative value of at least `bits` bits of
	/// entropy.
	pub fn random_of_length_at_least<R: RngCore + ?Sized>(bits: usize, rng: &mut R) -> Int {
		let n = bits / Limb::BITS + 1;
		let mut buf = IntBuf::with_len(n, Limb::ZERO);
		for limb in buf.iter_mut() {
			*limb = Limb(rng.next_u64());
		}
		let last = n - 1;
		buf[last] = Limb(buf[last].0 >> 1);
		Self { buf }
	}
}

fn parse_chunk(digits: &[u8], base: u64) -> Limb {
	let mut val: u64 = 0;
	for &d in digits {
		val = val * base + d as u64;
	}
	Limb(val)
}

//--------------------------------------------------------------------------------------------------
// conversions from primitives

macro_rules! from_signed {
	($($t:ty),*) => {$(
		impl From<$t> for Int {
			fn from(x: $t) -> Int {
				Int { buf: IntBuf::from_slice(&[Limb(x as i64 as u64)]) }
			}
		}
	)*};
}

macro_rules! from_unsigned {
	($($t:ty),*) => {$(
		impl From<$t> for Int {
			fn from(x: $t) -> Int {
				let mut buf = IntBuf::from_slice(&[Limb(x as u64)]);
				if ll::is_negative(&buf) {
					buf.push(Limb::ZERO);
				}
				Int { buf }
			}
		}
	)*};
}

from_signed!(i8, i16, i32, i64, isize);
from_unsigned!(u8, u16, u32, u64, usize);

impl From<i128> for Int {
	fn from(x: i128) -> Int {
		let buf =
			IntBuf::from_slice(&[Limb::from_low_half(x as u128), Limb::from_high_half(x as u128)]);
		Int::from_buf(buf)
	}
}

impl From<u128> for Int {
	fn from(x: u128) -> Int {
		let mut buf = IntBuf::from_slice(&[Limb::from_low_half(x), Limb::from_high_half(x)]);
		if ll::is_negative(&buf) {
			buf.push(Limb::ZERO);
		}
		Int::from_buf(buf)
	}
}

/// Checked narrowing from an [`Int`], used by [`Int::get`].
pub trait FromInt: Sized {
	fn from_int(int: &Int) -> Option<Self>;
}

macro_rules! narrow_signed {
	($($t:ty),*) => {$(
		impl FromInt for $t {
			fn from_int(int: &Int) -> Option<$t> {
				<$t>::try_from(int.to_i128_checked()?).ok()
			}
		}
	)*};
}

macro_rules! narrow_unsigned {
	($($t:ty),*) => {$(
		impl FromInt for $t {
			fn from_int(int: &Int) -> Option<$t> {
				<$t>::try_from(int.to_u128_checked()?).ok()
			}
		}
	)*};
}

narrow_signed!(i8, i16, i32, i64, i128, isize);
narrow_unsigned!(u8, u16, u32, u64, u128, usize);

//--------------------------------------------------------------------------------------------------
// operators

macro_rules! impl_binop {
	($Imp:ident, $method:ident, $ImpAssign:ident, $method_assign:ident,
	 $impl_fn:expr, $assign_fn:expr) => {
		impl std::ops::$Imp<&Int> for &Int {
			type Output = Int;
			fn $method(self, rhs: &Int) -> Int {
				$impl_fn(self, rhs)
			}
		}

		impl std::ops::$Imp<Int> for &Int {
			type Output = Int;
			fn $method(self, rhs: Int) -> Int {
				$impl_fn(self, &rhs)
			}
		}

		impl std::ops::$Imp<&Int> for Int {
			type Output = Int;
			fn $method(mut self, rhs: &Int) -> Int {
				$assign_fn(&mut self, rhs);
				self
			}
		}

		impl std::ops::$Imp<Int> for Int {
			type Output = Int;
			fn $method(mut self, rhs: Int) -> Int {
				$assign_fn(&mut self, &rhs);
				self
			}
		}

		impl std::ops::$ImpAssign<&Int> for Int {
			fn $method_assign(&mut self, rhs: &Int) {
				$assign_fn(self, rhs)
			}
		}

		impl std::ops::$ImpAssign<Int> for Int {
			fn $method_assign(&mut self, rhs: Int) {
				$assign_fn(self, &rhs)
			}
		}
	};
}

impl_binop!(Add, add, AddAssign, add_assign,
	|a: &Int, b: &Int| Int::add_impl(a, b, false),
	|a: &mut Int, b: &Int| a.add_assign_impl(b, false));

impl_binop!(Sub, sub, SubAssign, sub_assign,
	|a: &Int, b: &Int| Int::add_impl(a, b, true),
	|a: &mut Int, b: &Int| a.add_assign_impl(b, true));

impl_binop!(Mul, mul, MulAssign, mul_assign,
	Int::mul_impl,
	|a: &mut Int, b: &Int| *a = Int::mul_impl(a, b));

impl_binop!(Div, div, DivAssign, div_assign,
	|a: &Int, b: &Int| a.div_rem(b).0,
	|a: &mut Int, b: &Int| *a = a.div_rem(b).0);

impl_binop!(Rem, rem, RemAssign, rem_assign,
	|a: &Int, b: &Int| a.div_rem(b).1,
	|a: &mut Int, b: &Int| *a = a.div_rem(b).1);

fn bit_assign_impl(a: &mut Int, b: &Int, op: fn(&mut [Limb], &[Limb])) {
	a.grow_to(b.buf.len());
	op(a.buf.as_mut_slice(), b.view());
	a.finish();
}

fn bit_op_impl(a: &Int, b: &Int, op: fn(&mut [Limb], &[Limb], &[Limb])) -> Int {
	let n = a.buf.len().max(b.buf.len());
	let mut buf = IntBuf::with_len(n, Limb::ZERO);
	op(&mut buf, a.view(), b.view());
	Int::from_buf(buf)
}

impl_binop!(BitAnd, bitand, BitAndAssign, bitand_assign,
	|a: &Int, b: &Int| bit_op_impl(a, b, ll::bit_and),
	|a: &mut Int, b: &Int| bit_assign_impl(a, b, ll::and_in_place));

impl_binop!(BitOr, bitor, BitOrAssign, bitor_assign,
	|a: &Int, b: &Int| bit_op_impl(a, b, ll::bit_or),
	|a: &mut Int, b: &Int| bit_assign_impl(a, b, ll::or_in_place));

impl_binop!(BitXor, bitxor, BitXorAssign, bitxor_assign,
	|a: &Int, b: &Int| bit_op_impl(a, b, ll::bit_xor),
	|a: &mut Int, b: &Int| bit_assign_impl(a, b, ll::xor_in_place));

impl std::ops::Neg for &Int {
	type Output = Int;
	fn neg(self) -> Int {
		let mut r = self.clone();
		r.negate_in_place();
		r
	}
}

impl std::ops::Neg for Int {
	type Output = Int;
	fn neg(mut self) -> Int {
		self.negate_in_place();
		self
	}
}

impl std::ops::Not for &Int {
	type Output = Int;
	fn not(self) -> Int {
		let mut r = self.clone();
		ll::not_in_place(r.buf.as_mut_slice());
		r.finish();
		r
	}
}

impl std::ops::Not for Int {
	type Output = Int;
	fn not(mut self) -> Int {
		ll::not_in_place(self.buf.as_mut_slice());
		self.finish();
		self
	}
}

impl std::ops::Shl<usize> for &Int {
	type Output = Int;

	fn shl(self, s: usize) -> Int {
		let words = s / Limb::BITS;
		let bits = s % Limb::BITS;
		let src = self.view();

		let n = src.len() + words + (bits != 0) as usize;
		let mut buf = IntBuf::with_len(n, Limb::ZERO);
		let carry = ll::shl_small(&mut buf[words..words + src.len()], src, bits);
		if bits != 0 {
			let mut c = carry;
			if self.is_negative() {
				c = Limb(c.0 | (Limb::MAX.0 << bits));
			}
			buf[words + src.len()] = c;
		}
		Int::from_buf(buf)
	}
}

impl std::ops::Shr<usize> for &Int {
	type Output = Int;

	/// Arithmetic shift: the sign bit flows in from the top.
	fn shr(self, s: usize) -> Int {
		let words = s / Limb::BITS;
		let bits = s % Limb::BITS;
		let src = self.view();

		if words >= src.len() {
			return if self.is_negative() { Int::from(-1i64) } else { Int::new_zero() };
		}

		let n = src.len() - words;
		let mut buf = IntBuf::with_len(n, Limb::ZERO);
		ll::shr_small(&mut buf, &src[words..], bits);
		if bits != 0 && self.is_negative() {
			buf[n - 1] = Limb(buf[n - 1].0 | (Limb::MAX.0 << (Limb::BITS - bits)));
		}
		Int::from_buf(buf)
	}
}

impl std::ops::Shl<usize> for Int {
	type Output = Int;
	fn shl(self, s: usize) -> Int {
		&self << s
	}
}

impl std::ops::Shr<usize> for Int {
	type Output = Int;
	fn shr(self, s: usize) -> Int {
		&self >> s
	}
}

impl std::ops::ShlAssign<usize> for Int {
	fn shl_assign(&mut self, s: usize) {
		*self = &*self << s;
	}
}

impl std::ops::ShrAssign<usize> for Int {
	fn shr_assign(&mut self, s: usize) {
		*self = &*self >> s;
	}
}

//--------------------------------------------------------------------------------------------------
// comparison, hashing, formatting

impl PartialEq for Int {
	fn eq(&self, other: &Self) -> bool {
		ll::cmp(self.view(), other.view()) == Ordering::Equal
	}
}

impl Eq for Int {}

impl PartialOrd for Int {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Int {
	fn cmp(&self, other: &Self) -> Ordering {
		ll::cmp(self.view(), other.view())
	}
}

impl Hash for Int {
	fn hash<H: Hasher>(&self, state: &mut H) {
		// the canonical view is unique per value, so equal values hash
		// equally even when their stored lengths differ
		for limb in self.trimmed() {
			limb.0.hash(state);
		}
	}
}

impl std::fmt::Display for Int {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.to_string_radix(10))
	}
}

impl std::fmt::Debug for Int {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.to_string_radix(10))
	}
}

impl std::str::FromStr for Int {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Error> {
		Int::from_str_radix(s, 10)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn int(s: &str) -> Int {
		Int::from_str_radix(s, 10).unwrap()
	}

	#[test]
	fn test_parse_roundtrip() {
		let v = int("-123456789012345678901234567890");
		assert_eq!(v.to_string(), "-123456789012345678901234567890");
		assert_eq!(v.signum(), -1);
		assert_eq!(v.length(), 97);
	}

	#[test]
	fn test_mul_grows() {
		let v = &int("18446744073709551615") * &int("18446744073709551615");
		assert_eq!(v.to_string(), "340282366920938463426481119284349108225");
	}

	#[test]
	fn test_div_rem() {
		let (q, r) = int("100000000000000000000").div_rem(&int("7"));
		assert_eq!(q.to_string(), "14285714285714285714");
		assert_eq!(r.to_string(), "2");

		let (q, r) = int("-7").div_rem(&int("3"));
		assert_eq!(q.to_string(), "-2");
		assert_eq!(r.to_string(), "-1");

		let (q, r) = int("7").div_rem(&int("-3"));
		assert_eq!(q.to_string(), "-2");
		assert_eq!(r.to_string(), "1");

		let (q, r) = int("-7").div_rem(&int("-3"));
		assert_eq!(q.to_string(), "2");
		assert_eq!(r.to_string(), "-1");
	}

	#[test]
	#[should_panic(expected = "division by zero")]
	fn test_div_by_zero_is_fatal() {
		let _ = int("1").div_rem(&Int::new_zero());
	}

	#[test]
	fn test_gcd_lcm() {
		assert_eq!(int("462").gcd(&int("1071")).to_string(), "21");
		assert_eq!(int("12").lcm(&int("18")).to_string(), "36");
		assert_eq!(int("-12").gcd(&int("18")).to_string(), "6");
		assert_eq!(int("7").gcd(&Int::new_zero()).to_string(), "7");
		assert_eq!(Int::new_zero().gcd(&Int::new_zero()).to_string(), "0");
	}

	#[test]
	fn test_bit_range() {
		let v = Int::from(0b1111_0000_1010_0101u64);
		assert_eq!(v.get_bit_range(4, 4).to_string(), "10");
		assert_eq!(v.get_bit_range(8, 8).to_string(), "240");
		assert_eq!(v.get_bit_range(0, 3), Int::new_zero());
	}

	#[test]
	fn test_is_pow_2() {
		assert_eq!((Int::from(1u64) << 100).is_pow_2(), 101);
		assert_eq!(Int::from(3i64).is_pow_2(), 0);
		assert_eq!(Int::from(1i64).is_pow_2(), 1);
		assert_eq!(Int::from(-4i64).is_pow_2(), 0);
		assert_eq!(Int::new_zero().is_pow_2(), 0);
	}

	#[test]
	fn test_shifts() {
		let v = int("12345678901234567890");
		assert_eq!((&(&v << 67) >> 67), v);

		assert_eq!((Int::from(-1i64) >> 1).to_string(), "-1");
		assert_eq!((Int::from(-8i64) >> 2).to_string(), "-2");
		assert_eq!((Int::from(-1i64) << 64).to_string(), "-18446744073709551616");
		assert_eq!((Int::from(1i64) << 128).to_string(), "340282366920938463463374607431768211456");
		assert_eq!(Int::from(5i64) >> 1000, Int::new_zero());
		assert_eq!(Int::from(-5i64) >> 1000, Int::from(-1i64));
	}

	#[test]
	fn test_set_bit_preserves_sign() {
		let mut v = Int::new_zero();
		v.set_bit(63, true);
		assert_eq!(v.to_string(), "9223372036854775808");
		assert!(!v.is_negative());

		v.set_bit(63, false);
		assert!(v.is_zero());

		let mut v = Int::from(-1i64);
		v.set_bit(2, false);
		assert_eq!(v.to_string(), "-5");
		assert!(v.is_negative());
	}

	#[test]
	fn test_bit_is_set_past_width() {
		assert!(Int::from(-1i64).bit_is_set(12345));
		assert!(!Int::from(1i64).bit_is_set(12345));
	}

	#[test]
	fn test_mod_pow_2() {
		assert_eq!(Int::from(-1i64).mod_pow_2(8).to_string(), "255");
		assert_eq!(Int::from(0x1ffi64).mod_pow_2(8).to_string(), "255");
		assert_eq!(Int::from(5i64).mod_pow_2(0), Int::new_zero());
		assert_eq!(Int::from(-1i64).mod_pow_2(64).to_string(), "18446744073709551615");
	}

	#[test]
	fn test_one_extend() {
		// 0b0101 one-extended by two bits at bit 4 -> 0b110101
		let v = Int::from(0b0101i64).one_extend(4, 2);
		assert_eq!(v, Int::from(0b110101i64));
	}

	#[test]
	fn test_pow() {
		assert_eq!(Int::from(2i64).pow(100), Int::from(1i64) << 100);
		assert_eq!(Int::from(10i64).pow(0), Int::from(1i64));
		assert_eq!(Int::from(-3i64).pow(3), Int::from(-27i64));
	}

	#[test]
	fn test_get_narrowing() {
		assert_eq!(int("-1").get::<i64>(), Some(-1));
		assert_eq!(int("-1").get::<u64>(), None);
		assert_eq!(int("255").get::<u8>(), Some(255u8));
		assert_eq!(int("256").get::<u8>(), None);
		assert_eq!(int("18446744073709551615").get::<u64>(), Some(u64::MAX));
		assert_eq!(int("18446744073709551616").get::<u64>(), None);
		assert_eq!(
			int("-170141183460469231731687303715884105728").get::<i128>(),
			Some(i128::MIN)
		);
	}

	#[test]
	fn test_from_primitives() {
		assert_eq!(Int::from(u64::MAX).to_string(), "18446744073709551615");
		assert_eq!(Int::from(i64::MIN).to_string(), "-9223372036854775808");
		assert_eq!(Int::from(u128::MAX).get::<u128>(), Some(u128::MAX));
		assert_eq!(Int::from(-1i8), Int::from(-1i64));
	}

	#[test]
	fn test_base_prefixes() {
		assert_eq!(Int::from_str_radix("0xff", 0).unwrap(), Int::from(255i64));
		assert_eq!(Int::from_str_radix("-0x10", 0).unwrap(), Int::from(-16i64));
		assert_eq!(Int::from_str_radix("0b101", 0).unwrap(), Int::from(5i64));
		assert_eq!(Int::from_str_radix("0777", 0).unwrap(), Int::from(511i64));
		assert_eq!(Int::from_str_radix("0", 0).unwrap(), Int::new_zero());
		assert_eq!(Int::from_str_radix("42", 0).unwrap(), Int::from(42i64));
	}

	#[test]
	fn test_parse_strict() {
		assert!(Int::from_str_radix("12x3", 10).is_err());
		assert!(Int::from_str_radix("", 10).is_err());
		assert!(Int::from_str_radix("-", 10).is_err());
		assert!(Int::from_str_radix("ff", 10).is_err());
		assert!(Int::from_str_radix("10", 37).is_err());
		assert_eq!(Int::from_str_radix("1_000_000", 10).unwrap(), Int::from(1000000i64));
	}

	#[test]
	fn test_to_f64() {
		assert_eq!(Int::from(0i64).to_f64(), 0.0);
		assert_eq!(Int::from(-5i64).to_f64(), -5.0);
		let big = Int::from(1u64) << 64;
		assert_eq!(big.to_f64(), 18446744073709551616.0);
		assert_eq!((-&big).to_f64(), -18446744073709551616.0);
	}

	#[test]
	fn test_random() {
		use rand::rngs::StdRng;
		use rand::SeedableRng;

		let mut rng = StdRng::seed_from_u64(99);
		let v = Int::random_of_length_at_least(256, &mut rng);
		assert!(!v.is_negative());
		assert!(v.length() <= 256 + Limb::BITS);
	}

	#[test]
	fn test_hash_eq_consistency() {
		use std::collections::hash_map::DefaultHasher;

		fn hash_of(v: &Int) -> u64 {
			let mut h = DefaultHasher::new();
			v.hash(&mut h);
			h.finish()
		}

		// same value built two different ways
		let a = int("12345678901234567890");
		let b = &int("12345678901234567891") - &int("1");
		assert_eq!(a, b);
		assert_eq!(hash_of(&a), hash_of(&b));
	}
}
