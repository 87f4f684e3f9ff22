//! Randomized properties of the rational type: canonical form after every
//! operation, field identities, rounding behavior.

use mpl::{Int, Rational};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_rational(rng: &mut StdRng, max_bits: usize) -> Rational {
	let num_bits = rng.gen_range(1..=max_bits);
	let den_bits = rng.gen_range(1..=max_bits);

	let mut num = Int::random_of_length_at_least(num_bits, rng);
	if rng.gen_bool(0.5) {
		num = -num;
	}
	if rng.gen_ratio(1, 10) {
		num = Int::new_zero();
	}
	let mut den = Int::random_of_length_at_least(den_bits, rng);
	if den.is_zero() {
		den = Int::from(1i64);
	}
	Rational::new(num, den)
}

fn assert_canonical(r: &Rational) {
	assert!(r.denom().is_positive(), "denominator must be positive: {:?}", r);
	assert_eq!(r.numer().abs().gcd(r.denom()), Int::from(1i64), "not reduced: {:?}", r);
	if r.numer().is_zero() {
		assert_eq!(r.denom(), &Int::from(1i64), "zero must be 0/1");
	}
}

#[test]
fn operations_stay_canonical() {
	let mut rng = StdRng::seed_from_u64(101);

	for _ in 0..60 {
		let a = random_rational(&mut rng, 120);
		let b = random_rational(&mut rng, 120);
		assert_canonical(&a);
		assert_canonical(&b);

		assert_canonical(&(&a + &b));
		assert_canonical(&(&a - &b));
		assert_canonical(&(&a * &b));
		if !b.is_zero() {
			assert_canonical(&(&a / &b));
		}
		assert_canonical(&-&a);
		assert_canonical(&a.abs());
	}
}

#[test]
fn field_identities() {
	let mut rng = StdRng::seed_from_u64(103);
	let zero = Rational::new_zero();
	let one = Rational::from(1i64);

	for _ in 0..60 {
		let a = random_rational(&mut rng, 120);
		let b = random_rational(&mut rng, 120);
		let c = random_rational(&mut rng, 60);

		// a + (-a) == 0/1
		assert_eq!(&a + &-&a, zero);
		assert_eq!(&a - &a, zero);

		// a * (1/a) == 1/1
		if !a.is_zero() {
			assert_eq!(&a * &(&one / &a), one);
			assert_eq!(&a / &a, one);
		}

		assert_eq!(&a + &b, &b + &a);
		assert_eq!(&(&a + &b) - &b, a);
		assert_eq!(&a * &b, &b * &a);

		// distributivity
		assert_eq!(&c * &(&a + &b), &(&c * &a) + &(&c * &b));
	}
}

#[test]
fn string_round_trip() {
	let mut rng = StdRng::seed_from_u64(107);

	for _ in 0..40 {
		let a = random_rational(&mut rng, 150);
		for base in [2u32, 10, 16, 36] {
			let s = a.to_string_radix(base);
			let back = Rational::from_str_radix(&s, base).unwrap();
			assert_eq!(back, a, "base {} string {:?}", base, s);
		}
	}
}

#[test]
fn floor_ceiling_bracket_the_value() {
	let mut rng = StdRng::seed_from_u64(109);

	for _ in 0..100 {
		let a = random_rational(&mut rng, 100);
		let floor = a.floor();
		let ceiling = a.ceiling();

		// they differ by 0 (integers) or 1
		let diff = &ceiling - &floor;
		assert!(diff == Int::new_zero() || diff == Int::from(1i64), "diff {:?}", diff);
		assert_eq!(diff.is_zero(), a.denom() == &Int::from(1i64));

		// floor <= a <= ceiling via cross-multiplication
		assert!(Rational::from(floor) <= a);
		assert!(a <= Rational::from(ceiling));
	}
}

#[test]
fn ordering_is_consistent() {
	let mut rng = StdRng::seed_from_u64(113);

	for _ in 0..100 {
		let a = random_rational(&mut rng, 80);
		let b = random_rational(&mut rng, 80);

		assert_eq!(a.cmp(&b), b.cmp(&a).reverse());

		// a < b  iff  a - b < 0
		let diff = &a - &b;
		assert_eq!(a < b, diff.signum() < 0);
		assert_eq!(a == b, diff.is_zero());
	}
}

#[test]
fn matches_native_fractions() {
	let mut rng = StdRng::seed_from_u64(127);

	for _ in 0..200 {
		let an: i64 = rng.gen_range(-1000..1000);
		let ad: i64 = rng.gen_range(1..1000);
		let bn: i64 = rng.gen_range(-1000..1000);
		let bd: i64 = rng.gen_range(1..1000);

		let a = Rational::new(Int::from(an), Int::from(ad));
		let b = Rational::new(Int::from(bn), Int::from(bd));

		// (an/ad) + (bn/bd) == (an*bd + bn*ad) / (ad*bd)
		let sum = Rational::new(Int::from(an * bd + bn * ad), Int::from(ad * bd));
		assert_eq!(&a + &b, sum);

		let prod = Rational::new(Int::from(an * bn), Int::from(ad * bd));
		assert_eq!(&a * &b, prod);

		assert_eq!(a.cmp(&b), (an as i128 * bd as i128).cmp(&(bn as i128 * ad as i128)));

		// floor against native floored division
		assert_eq!(a.floor(), Int::from((an as f64 / ad as f64).floor() as i64));
	}
}

#[test]
fn from_f64_round_trips_through_to_f64() {
	let mut rng = StdRng::seed_from_u64(131);

	for _ in 0..100 {
		let x = (rng.gen::<f64>() - 0.5) * 1e9;
		let r = Rational::from_f64(x).unwrap();
		assert_canonical(&r);
		assert_eq!(r.to_f64(), x);
	}
}

#[test]
fn decimal_parse() {
	assert_eq!(Rational::from_decimal_str("3.14", 10).unwrap().to_string(), "157/50");
	assert_eq!(
		Rational::from_decimal_str("0.125", 10).unwrap(),
		Rational::new(Int::from(1i64), Int::from(8i64))
	);
	assert_eq!(Rational::from_decimal_str("1.0", 10).unwrap(), Rational::from(1i64));
	assert!(Rational::from_decimal_str("1.2.3", 10).is_err());
}
