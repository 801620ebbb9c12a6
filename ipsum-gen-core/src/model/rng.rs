/// Multiplier of the linear congruential recurrence.
const LCG_MULTIPLIER: u64 = 9301;
/// Increment of the linear congruential recurrence.
const LCG_INCREMENT: u64 = 49297;
/// Modulus of the linear congruential recurrence (full period).
const LCG_MODULUS: u64 = 233280;

/// Seed offsets deriving independent random streams from one base seed.
///
/// Paragraph order uses the base seed itself; headings and the structural
/// decisions (block sizes, heading levels) each get their own offset.
pub struct SeedOffsets;

impl SeedOffsets {
	/// Offset of the heading shuffle stream.
	pub const HEADINGS: i64 = 500;
	/// Offset of the block-size / decoration decision stream.
	pub const BLOCK_SIZES: i64 = 1000;
}

/// Small deterministic RNG (LCG) with a period of 233280.
///
/// # Invariants
/// - `state` is always in `[0, 233280)`
/// - Every call to `next` or `next_int` advances the state exactly once
///
/// Negative seeds are reduced with an Euclidean remainder, so draws always
/// stay in range. For non-negative seeds the sequence matches the plain
/// `seed' = (seed * 9301 + 49297) % 233280` recurrence.
#[derive(Debug, Clone)]
pub struct SeededRng {
	state: u64,
}

impl SeededRng {
	/// Creates a generator from an arbitrary integer seed.
	pub fn new(seed: i64) -> Self {
		Self { state: reduce(seed) }
	}

	/// Creates a generator from `seed + offset` without overflowing.
	pub fn with_offset(seed: i64, offset: i64) -> Self {
		Self { state: (reduce(seed) + reduce(offset)) % LCG_MODULUS }
	}

	fn advance(&mut self) -> f64 {
		self.state = (self.state * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
		self.state as f64 / LCG_MODULUS as f64
	}

	/// Returns the next float in `[0, 1)`.
	pub fn next(&mut self) -> f64 {
		self.advance()
	}

	/// Returns the next integer in `[min, max]` (both inclusive).
	///
	/// Draws one float and maps it with `floor(x * (max - min + 1)) + min`.
	/// A reversed range is treated as `min == max`.
	pub fn next_int(&mut self, min: i64, max: i64) -> i64 {
		let x = self.advance();
		if max <= min {
			return min;
		}
		let span = (max - min + 1) as f64;
		// x < 1, but clamp in case the float product rounds up to span
		let offset = ((x * span).floor() as i64).min(max - min);
		min + offset
	}
}

/// Reduces any integer into the generator's state domain.
fn reduce(value: i64) -> u64 {
	value.rem_euclid(LCG_MODULUS as i64) as u64
}

/// Shuffles a slice deterministically using a seed.
///
/// Fisher-Yates from the last index down to 1, driven by a fresh
/// `SeededRng`. The input is left untouched; a new vector is returned.
pub fn shuffle_with_seed<T: Clone>(items: &[T], seed: i64) -> Vec<T> {
	shuffle_with_rng(items, SeededRng::new(seed))
}

/// Same as [`shuffle_with_seed`], seeding with `seed + offset`.
pub fn shuffle_with_offset<T: Clone>(items: &[T], seed: i64, offset: i64) -> Vec<T> {
	shuffle_with_rng(items, SeededRng::with_offset(seed, offset))
}

fn shuffle_with_rng<T: Clone>(items: &[T], mut rng: SeededRng) -> Vec<T> {
	let mut shuffled = items.to_vec();
	for i in (1..shuffled.len()).rev() {
		let j = ((rng.next() * (i + 1) as f64).floor() as usize).min(i);
		shuffled.swap(i, j);
	}
	shuffled
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn first_draw_follows_recurrence() {
		let mut rng = SeededRng::new(42);
		let expected = (42 * 9301 + 49297) % 233280;
		assert_eq!(rng.next(), expected as f64 / 233280.0);
	}

	#[test]
	fn same_seed_same_sequence() {
		let mut a = SeededRng::new(42);
		let mut b = SeededRng::new(42);
		let va: Vec<f64> = (0..10).map(|_| a.next()).collect();
		let vb: Vec<f64> = (0..10).map(|_| b.next()).collect();
		assert_eq!(va, vb);
	}

	#[test]
	fn different_seeds_differ() {
		let mut a = SeededRng::new(42);
		let mut b = SeededRng::new(43);
		let va: Vec<f64> = (0..10).map(|_| a.next()).collect();
		let vb: Vec<f64> = (0..10).map(|_| b.next()).collect();
		assert_ne!(va, vb);
	}

	#[test]
	fn floats_stay_in_unit_interval() {
		for seed in [12345, 0, -1, -987_654_321, i64::MIN, i64::MAX] {
			let mut rng = SeededRng::new(seed);
			for _ in 0..200 {
				let x = rng.next();
				assert!((0.0..1.0).contains(&x), "seed {seed} produced {x}");
			}
		}
	}

	#[test]
	fn next_int_is_inclusive_range() {
		let mut rng = SeededRng::new(12345);
		let mut seen = [false; 10];
		for _ in 0..500 {
			let v = rng.next_int(1, 10);
			assert!((1..=10).contains(&v));
			seen[(v - 1) as usize] = true;
		}
		assert!(seen.iter().all(|s| *s));
	}

	#[test]
	fn next_int_degenerate_range() {
		let mut rng = SeededRng::new(42);
		for _ in 0..50 {
			assert_eq!(rng.next_int(5, 5), 5);
		}
	}

	#[test]
	fn next_int_and_next_advance_identically() {
		let mut a = SeededRng::new(7);
		let mut b = SeededRng::new(7);
		a.next_int(1, 3);
		b.next();
		assert_eq!(a.next(), b.next());
	}

	#[test]
	fn next_int_maps_the_float_draw() {
		let mut a = SeededRng::new(999);
		let mut b = SeededRng::new(999);
		for _ in 0..20 {
			let x = b.next();
			assert_eq!(a.next_int(1, 100), (x * 100.0).floor() as i64 + 1);
		}
	}

	#[test]
	fn offset_matches_shifted_seed() {
		let mut a = SeededRng::with_offset(42, SeedOffsets::BLOCK_SIZES);
		let mut b = SeededRng::new(1042);
		assert_eq!(a.next(), b.next());
		// No overflow near the integer limits
		let mut c = SeededRng::with_offset(i64::MAX, SeedOffsets::HEADINGS);
		assert!((0.0..1.0).contains(&c.next()));
	}

	#[test]
	fn offsets_are_distinct_and_positive() {
		assert_ne!(SeedOffsets::HEADINGS, SeedOffsets::BLOCK_SIZES);
		assert!(SeedOffsets::HEADINGS > 0);
		assert!(SeedOffsets::BLOCK_SIZES > 0);
	}

	const ITEMS: [&str; 10] = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"];

	#[test]
	fn shuffle_is_deterministic() {
		assert_eq!(shuffle_with_seed(&ITEMS, 42), shuffle_with_seed(&ITEMS, 42));
	}

	#[test]
	fn shuffle_depends_on_seed() {
		assert_ne!(shuffle_with_seed(&ITEMS, 42), shuffle_with_seed(&ITEMS, 43));
	}

	#[test]
	fn shuffle_is_a_permutation() {
		let original = ITEMS;
		let mut shuffled = shuffle_with_seed(&ITEMS, 42);
		assert_eq!(ITEMS, original);
		assert_eq!(shuffled.len(), ITEMS.len());
		assert_ne!(shuffled, ITEMS.to_vec());
		shuffled.sort();
		assert_eq!(shuffled, ITEMS.to_vec());
	}

	#[test]
	fn shuffle_small_inputs() {
		let empty: [&str; 0] = [];
		assert!(shuffle_with_seed(&empty, 42).is_empty());
		assert_eq!(shuffle_with_seed(&["only"], 42), vec!["only"]);
	}

	#[test]
	fn shuffle_ignores_prior_rng_usage() {
		let mut unrelated = SeededRng::new(42);
		for _ in 0..17 {
			unrelated.next();
		}
		assert_eq!(shuffle_with_seed(&ITEMS, 42), shuffle_with_seed(&ITEMS, 42));
		assert_eq!(shuffle_with_offset(&ITEMS, 42, 500), shuffle_with_seed(&ITEMS, 542));
	}
}
