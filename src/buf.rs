//! Small-buffer limb container.
//!
//! An explicit tagged union: short values live in a fixed inline array
//! embedded in the container, longer ones promote to a heap allocation.
//! Promotion happens only on growth; the container never moves back inline.
//! Moving the container is a plain bitwise move.

use crate::limb::Limb;

/// Number of limbs stored without touching the heap. Build-time constant;
/// 192 bits covers the overwhelming share of real-world values.
pub const INLINE_CAP: usize = 3;

#[derive(Clone)]
enum Repr {
	Inline { len: u8, limbs: [Limb; INLINE_CAP] },
	Heap(Vec<Limb>),
}

#[derive(Clone)]
pub struct IntBuf {
	repr: Repr,
}

/// Growth policy for heap capacities: 1.5x, rounded up to the allocator's
/// granule so reallocations land on bucket boundaries.
fn expand_size(limbs: usize) -> usize {
	fn round_up(bytes: usize) -> usize {
		let mask = if bytes <= 992 {
			16 - 1
		} else if bytes <= (127 << 10) {
			512 - 1
		} else {
			(4 << 10) - 1
		};
		((bytes - 1) | mask) + 1
	}

	let bytes = limbs * std::mem::size_of::<Limb>();
	round_up(bytes * 2 - bytes / 2) / std::mem::size_of::<Limb>()
}

impl IntBuf {
	/// The container holding the integer zero: one limb, value 0.
	pub fn new_zero() -> Self {
		Self {
			repr: Repr::Inline { len: 1, limbs: [Limb::ZERO; INLINE_CAP] },
		}
	}

	pub fn with_len(len: usize, fill: Limb) -> Self {
		let mut buf = Self::new_zero();
		buf.truncate(0);
		buf.resize(len, fill);
		buf
	}

	pub fn from_slice(a: &[Limb]) -> Self {
		if a.len() <= INLINE_CAP {
			let mut limbs = [Limb::ZERO; INLINE_CAP];
			limbs[..a.len()].copy_from_slice(a);
			Self { repr: Repr::Inline { len: a.len() as u8, limbs } }
		} else {
			Self { repr: Repr::Heap(a.to_vec()) }
		}
	}

	pub fn len(&self) -> usize {
		match &self.repr {
			Repr::Inline { len, .. } => *len as usize,
			Repr::Heap(v) => v.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn capacity(&self) -> usize {
		match &self.repr {
			Repr::Inline { .. } => INLINE_CAP,
			Repr::Heap(v) => v.capacity(),
		}
	}

	pub fn is_inline(&self) -> bool {
		matches!(self.repr, Repr::Inline { .. })
	}

	pub fn as_slice(&self) -> &[Limb] {
		match &self.repr {
			Repr::Inline { len, limbs } => &limbs[..*len as usize],
			Repr::Heap(v) => v.as_slice(),
		}
	}

	pub fn as_mut_slice(&mut self) -> &mut [Limb] {
		match &mut self.repr {
			Repr::Inline { len, limbs } => &mut limbs[..*len as usize],
			Repr::Heap(v) => v.as_mut_slice(),
		}
	}

	/// Ensures room for `cap` limbs, promoting inline storage to the heap
	/// when the inline buffer cannot hold them.
	pub fn reserve(&mut self, cap: usize) {
		let promoted = match &mut self.repr {
			Repr::Inline { len, limbs } if cap > INLINE_CAP => {
				let mut v = Vec::with_capacity(expand_size(INLINE_CAP).max(cap));
				v.extend_from_slice(&limbs[..*len as usize]);
				Some(v)
			},
			Repr::Inline { .. } => None,
			Repr::Heap(v) => {
				if cap > v.capacity() {
					let target = expand_size(v.capacity()).max(cap);
					v.reserve_exact(target - v.len());
				}
				None
			},
		};
		if let Some(v) = promoted {
			self.repr = Repr::Heap(v);
		}
	}

	pub fn push(&mut self, limb: Limb) {
		self.reserve(self.len() + 1);
		match &mut self.repr {
			Repr::Inline { len, limbs } => {
				limbs[*len as usize] = limb;
				*len += 1;
			},
			Repr::Heap(v) => v.push(limb),
		}
	}

	/// Logically shortens the container. Heap storage is kept.
	pub fn truncate(&mut self, new_len: usize) {
		match &mut self.repr {
			Repr::Inline { len, .. } => {
				if new_len < *len as usize {
					*len = new_len as u8;
				}
			},
			Repr::Heap(v) => v.truncate(new_len),
		}
	}

	/// Extends with `fill` limbs or truncates, like `Vec::resize`. The façade
	/// passes the sign-extension limb as `fill`.
	pub fn resize(&mut self, new_len: usize, fill: Limb) {
		if new_len <= self.len() {
			self.truncate(new_len);
			return;
		}
		self.reserve(new_len);
		match &mut self.repr {
			Repr::Inline { len, limbs } => {
				limbs[*len as usize..new_len].fill(fill);
				*len = new_len as u8;
			},
			Repr::Heap(v) => v.resize(new_len, fill),
		}
	}
}

impl Default for IntBuf {
	fn default() -> Self {
		Self::new_zero()
	}
}

impl std::ops::Deref for IntBuf {
	type Target = [Limb];

	fn deref(&self) -> &[Limb] {
		self.as_slice()
	}
}

impl std::ops::DerefMut for IntBuf {
	fn deref_mut(&mut self) -> &mut [Limb] {
		self.as_mut_slice()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_inline_push_and_promotion() {
		let mut buf = IntBuf::new_zero();
		assert!(buf.is_inline());
		assert_eq!(buf.len(), 1);

		buf[0] = Limb(10);
		buf.push(Limb(11));
		buf.push(Limb(12));
		assert!(buf.is_inline());
		assert_eq!(buf.len(), INLINE_CAP);

		// the push over the inline capacity moves to the heap and keeps limbs
		buf.push(Limb(13));
		assert!(!buf.is_inline());
		assert_eq!(buf.as_slice(), &[Limb(10), Limb(11), Limb(12), Limb(13)]);
	}

	#[test]
	fn test_resize_fill() {
		let mut buf = IntBuf::new_zero();
		buf[0] = Limb(5);
		buf.resize(6, Limb::MAX);
		assert_eq!(buf.as_slice(), &[Limb(5), Limb::MAX, Limb::MAX, Limb::MAX, Limb::MAX, Limb::MAX]);

		buf.resize(2, Limb::ZERO);
		assert_eq!(buf.as_slice(), &[Limb(5), Limb::MAX]);
		// shrinking never goes back inline
		assert!(!buf.is_inline());
	}

	#[test]
	fn test_clone_is_value_copy() {
		let mut a = IntBuf::from_slice(&[Limb(1), Limb(2), Limb(3), Limb(4)]);
		let b = a.clone();
		a[0] = Limb(99);
		assert_eq!(b.as_slice()[0], Limb(1));
	}

	#[test]
	fn test_growth_is_geometric() {
		let mut buf = IntBuf::new_zero();
		let mut reallocs = 0;
		let mut last_cap = buf.capacity();
		for i in 0..1000 {
			buf.push(Limb(i));
			if buf.capacity() != last_cap {
				reallocs += 1;
				last_cap = buf.capacity();
			}
		}
		// amortized O(1) per push: far fewer reallocations than pushes
		assert!(reallocs < 32, "{} reallocations", reallocs);
	}

	#[test]
	fn test_from_slice() {
		let buf = IntBuf::from_slice(&[Limb(7)]);
		assert!(buf.is_inline());
		let buf = IntBuf::from_slice(&[Limb::ZERO; 10]);
		assert!(!buf.is_inline());
		assert_eq!(buf.len(), 10);
	}
}
