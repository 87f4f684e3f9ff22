// Generates the per-base conversion table. For every base in 2..=36:
// - bits_per_digit as a fixed point number with 16 fractional bits, rounded
//   both ways (parsing sizes with the ceiling, formatting with the floor),
// - digits_per_limb: the largest k with base**k <= u64::MAX,
// - big_base: base**digits_per_limb, the chunk multiplier/divisor.

const MIN_BASE: u64 = 2;
const MAX_BASE: u64 = 36;

fn base_info() -> String {
	let mut out = String::new();
	out.push_str("// Generated by build.rs. Do not edit.\n");
	out.push_str(&format!(
		"pub const BASE_INFO: [BaseInfo; {}] = [\n",
		MAX_BASE - MIN_BASE + 1
	));

	for base in MIN_BASE..=MAX_BASE {
		let bits_per_digit_ceil = ((base as f64).log2() * 65536.0).ceil() as u64;
		let bits_per_digit_floor = ((base as f64).log2() * 65536.0).floor() as u64;

		let mut digits_per_limb = 1u64;
		let mut big_base = base as u128;
		while big_base * (base as u128) <= u64::MAX as u128 {
			big_base *= base as u128;
			digits_per_limb += 1;
		}

		out.push_str("\tBaseInfo {\n");
		out.push_str(&format!("\t\tbase: {},\n", base));
		out.push_str(&format!(
			"\t\tbits_per_digit_ceil: {}, // {} << 16\n",
			bits_per_digit_ceil,
			bits_per_digit_ceil as f64 / 65536.0
		));
		out.push_str(&format!(
			"\t\tbits_per_digit_floor: {}, // {} << 16\n",
			bits_per_digit_floor,
			bits_per_digit_floor as f64 / 65536.0
		));
		out.push_str(&format!("\t\tdigits_per_limb: {},\n", digits_per_limb));
		out.push_str(&format!("\t\tbig_base: Limb({}),\n", big_base));
		out.push_str("\t},\n");
	}

	out.push_str("];\n");
	out
}

fn main() {
	let out_dir = std::env::var("OUT_DIR").unwrap();
	let path = std::path::Path::new(&out_dir).join("base_info_gen.rs");
	std::fs::write(path, base_info()).unwrap();
	println!("cargo:rerun-if-changed=build.rs");
}
