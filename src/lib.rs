//! Arbitrary-precision signed integers and exact rationals.
//!
//! The core is [`Int`]: a two's-complement integer of variable width stored
//! as a little-endian limb sequence with small-buffer optimization (values up
//! to three limbs never touch the heap). The limb-level algorithms live in
//! [`ll`] and operate on plain slices, so they are oblivious to the owning
//! container. [`Rational`] composes two integers under a canonicalization
//! invariant.
//!
//! Failure policy: division by zero and scratch-arena overflow are fatal and
//! panic with a diagnostic. Everything else is a normal return path: parsing
//! yields `Result`, narrowing conversions yield `Option`, and arithmetic
//! overflow past a destination's width is absorbed by growing the value.
//!
//! ```
//! use mpl::{Int, Rational};
//!
//! let a: Int = "123456789012345678901234567890".parse().unwrap();
//! let b = Int::from(7u64);
//! let (q, r) = a.div_rem(&b);
//! assert_eq!(&q * &b + &r, a);
//!
//! let x = Rational::from_str_radix("1/6", 10).unwrap();
//! let y = Rational::from_str_radix("1/10", 10).unwrap();
//! assert_eq!((x + y).to_string(), "4/15");
//! ```

pub mod base_info;
pub mod buf;
pub mod error;
mod int;
pub mod limb;
pub mod ll;
mod rational;
pub mod scratch;

pub use error::{Error, ErrorKind};
pub use int::{FromInt, Int};
pub use limb::Limb;
pub use rational::Rational;

/// Builds a `Vec<Limb>` from raw values; the limb-level tests speak in these.
#[macro_export]
macro_rules! limbs {
	($($x:expr),* $(,)?) => {
		vec![$($crate::limb::Limb($x)),*]
	};
}
