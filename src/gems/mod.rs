//! Catalogue of micro-optimization idioms.
//!
//! Every [`Gem`] pairs a plain expression (the baseline) with an optimized
//! rewrite (the candidate). [`Gem::workloads`] turns a gem into two
//! workloads that sweep the same pre-generated inputs, one image worth
//! (1000 x 1000) by default, ready for [`SpeedTest`](crate::SpeedTest).
//!
//! ```
//! use bitgems::{gems, SpeedTest};
//!
//! let gem = gems::find("mod-pow2").unwrap();
//! let mut pair = gem.workloads(10_000, gems::DEFAULT_SEED);
//! let report = SpeedTest::new()
//!     .trials(3)
//!     .compare_workloads(&mut pair.baseline, &mut pair.candidate);
//! if let Ok(report) = report {
//!     println!("{}: {report}", gem.name);
//! }
//! ```

pub mod arith;
pub mod color;

use std::hint::black_box;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::measurement::{from_fn, BoxedWorkload};

use self::color::{Rgb, Rgba};

/// Inputs per sweep: one 1000 x 1000 image.
pub const IMAGE_PIXELS: usize = 1000 * 1000;

/// Seed used for input generation unless overridden.
pub const DEFAULT_SEED: u64 = 0x0033_6699;

/// Baseline and candidate workloads for one gem.
pub struct GemPair {
    /// Sweep applying the plain expression.
    pub baseline: BoxedWorkload,
    /// Sweep applying the optimized expression.
    pub candidate: BoxedWorkload,
}

/// One catalogued idiom.
#[derive(Clone, Copy)]
pub struct Gem {
    /// Identifier used on the command line.
    pub name: &'static str,
    /// One-line description.
    pub summary: &'static str,
    /// Plain form, as source text.
    pub baseline: &'static str,
    /// Optimized form, as source text.
    pub candidate: &'static str,
    build: fn(&mut StdRng, usize) -> GemPair,
}

impl Gem {
    /// Build the workload pair over `size` inputs generated from `seed`.
    ///
    /// Both workloads share one input buffer, so they read identical data.
    pub fn workloads(&self, size: usize, seed: u64) -> GemPair {
        let mut rng = StdRng::seed_from_u64(seed);
        (self.build)(&mut rng, size)
    }
}

impl std::fmt::Debug for Gem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gem")
            .field("name", &self.name)
            .field("baseline", &self.baseline)
            .field("candidate", &self.candidate)
            .finish_non_exhaustive()
    }
}

/// Every catalogued gem, in listing order.
pub fn catalog() -> &'static [Gem] {
    &CATALOG
}

/// Look a gem up by name.
pub fn find(name: &str) -> Option<&'static Gem> {
    CATALOG.iter().find(|gem| gem.name == name)
}

/// Names of every gem.
pub fn names() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|gem| gem.name)
}

fn sweep<T, R>(inputs: Rc<[T]>, f: fn(T) -> R) -> BoxedWorkload
where
    T: Copy + 'static,
    R: 'static,
{
    Box::new(from_fn(move || {
        for &x in inputs.iter() {
            black_box(f(black_box(x)));
        }
    }))
}

fn pair<T, R>(inputs: Vec<T>, baseline: fn(T) -> R, candidate: fn(T) -> R) -> GemPair
where
    T: Copy + 'static,
    R: 'static,
{
    let inputs: Rc<[T]> = inputs.into();
    GemPair {
        baseline: sweep(Rc::clone(&inputs), baseline),
        candidate: sweep(inputs, candidate),
    }
}

// Input generators

fn signed_floats(rng: &mut StdRng, size: usize) -> Vec<f64> {
    (0..size).map(|_| rng.random_range(-1_000.0..1_000.0)).collect()
}

fn positive_floats(rng: &mut StdRng, size: usize) -> Vec<f64> {
    (0..size).map(|_| rng.random_range(0.0..1_000.0)).collect()
}

fn unsigned(rng: &mut StdRng, size: usize) -> Vec<u32> {
    (0..size).map(|_| rng.random()).collect()
}

fn signed(rng: &mut StdRng, size: usize) -> Vec<i32> {
    (0..size).map(|_| rng.random()).collect()
}

fn signed_pairs(rng: &mut StdRng, size: usize) -> Vec<(i32, i32)> {
    (0..size).map(|_| (rng.random(), rng.random())).collect()
}

fn colors24(rng: &mut StdRng, size: usize) -> Vec<u32> {
    (0..size).map(|_| rng.random_range(0..=0x00FF_FFFF)).collect()
}

fn rgb(rng: &mut StdRng, size: usize) -> Vec<Rgb> {
    (0..size)
        .map(|_| Rgb {
            r: rng.random(),
            g: rng.random(),
            b: rng.random(),
        })
        .collect()
}

fn rgba(rng: &mut StdRng, size: usize) -> Vec<Rgba> {
    (0..size)
        .map(|_| Rgba {
            r: rng.random(),
            g: rng.random(),
            b: rng.random(),
            a: rng.random(),
        })
        .collect()
}

fn pixels15(rng: &mut StdRng, size: usize) -> Vec<u16> {
    (0..size).map(|_| rng.random_range(0..0x8000)).collect()
}

static CATALOG: [Gem; 23] = [
    Gem {
        name: "round",
        summary: "Round via signed half offset and truncation",
        baseline: "n.round() as i32",
        candidate: "(n + if n < 0.0 { -0.5 } else { 0.5 }) as i32",
        build: |rng, size| pair(signed_floats(rng, size), arith::round, arith::round_truncate),
    },
    Gem {
        name: "ceil",
        summary: "Ceiling via offset and truncation (non-integral inputs)",
        baseline: "n.ceil() as i32",
        candidate: "(n + if n < 0.0 { 0.0 } else { 1.0 }) as i32",
        build: |rng, size| pair(signed_floats(rng, size), arith::ceil, arith::ceil_truncate),
    },
    Gem {
        name: "floor",
        summary: "Floor via offset and truncation (non-integral inputs)",
        baseline: "n.floor() as i32",
        candidate: "(n + if n < 0.0 { -1.0 } else { 0.0 }) as i32",
        build: |rng, size| pair(signed_floats(rng, size), arith::floor, arith::floor_truncate),
    },
    Gem {
        name: "round-positive",
        summary: "Round for values known to be non-negative",
        baseline: "n.round() as i32",
        candidate: "(n + 0.5) as i32",
        build: |rng, size| pair(positive_floats(rng, size), arith::round, arith::round_positive),
    },
    Gem {
        name: "ceil-positive",
        summary: "Ceiling for non-negative values",
        baseline: "n.ceil() as i32",
        candidate: "(n + 1.0) as i32",
        build: |rng, size| pair(positive_floats(rng, size), arith::ceil, arith::ceil_positive),
    },
    Gem {
        name: "floor-positive",
        summary: "Floor for non-negative values by truncation",
        baseline: "n.floor() as i32",
        candidate: "n as i32",
        build: |rng, size| pair(positive_floats(rng, size), arith::floor, arith::floor_positive),
    },
    Gem {
        name: "mod-pow2",
        summary: "Modulo by a power of two with a mask",
        baseline: "n % 4",
        candidate: "n & (4 - 1)",
        build: |rng, size| {
            pair(
                unsigned(rng, size),
                |n: u32| arith::modulo(n, 4),
                |n: u32| arith::modulo_pow2(n, 4),
            )
        },
    },
    Gem {
        name: "max",
        summary: "Maximum via comparison",
        baseline: "a.max(b)",
        candidate: "if a > b { a } else { b }",
        build: |rng, size| {
            pair(
                signed_pairs(rng, size),
                |(a, b): (i32, i32)| arith::max(a, b),
                |(a, b): (i32, i32)| arith::max_select(a, b),
            )
        },
    },
    Gem {
        name: "min",
        summary: "Minimum via comparison",
        baseline: "a.min(b)",
        candidate: "if a < b { a } else { b }",
        build: |rng, size| {
            pair(
                signed_pairs(rng, size),
                |(a, b): (i32, i32)| arith::min(a, b),
                |(a, b): (i32, i32)| arith::min_select(a, b),
            )
        },
    },
    Gem {
        name: "abs-select",
        summary: "Absolute value via comparison",
        baseline: "n.wrapping_abs()",
        candidate: "if n > 0 { n } else { -n }",
        build: |rng, size| pair(signed(rng, size), arith::abs, arith::abs_select),
    },
    Gem {
        name: "abs-mask",
        summary: "Absolute value via the sign mask",
        baseline: "n.wrapping_abs()",
        candidate: "(n ^ (n >> 31)) - (n >> 31)",
        build: |rng, size| pair(signed(rng, size), arith::abs, arith::abs_mask),
    },
    Gem {
        name: "even",
        summary: "Even test on the low bit",
        baseline: "n % 2 == 0",
        candidate: "n & 1 == 0",
        build: |rng, size| pair(signed(rng, size), arith::is_even, arith::is_even_mask),
    },
    Gem {
        name: "mul-shift",
        summary: "Multiply by 64 with a left shift",
        baseline: "n * 64",
        candidate: "n << 6",
        build: |rng, size| {
            pair(
                signed(rng, size),
                |n: i32| arith::mul_pow2(n, 6),
                |n: i32| arith::mul_shift(n, 6),
            )
        },
    },
    Gem {
        name: "div-shift",
        summary: "Divide by 64 with a right shift (unsigned)",
        baseline: "n / 64",
        candidate: "n >> 6",
        build: |rng, size| {
            pair(
                unsigned(rng, size),
                |n: u32| arith::div_pow2(n, 6),
                |n: u32| arith::div_shift(n, 6),
            )
        },
    },
    Gem {
        name: "swap-xor",
        summary: "Swap two integers without a temporary",
        baseline: "let tmp = a; a = b; b = tmp;",
        candidate: "a ^= b; b ^= a; a ^= b;",
        build: |rng, size| pair(signed_pairs(rng, size), arith::swap_temp, arith::swap_xor),
    },
    Gem {
        name: "negate-not",
        summary: "Sign flip via bitwise NOT",
        baseline: "-n",
        candidate: "!n + 1",
        build: |rng, size| pair(signed(rng, size), arith::negate, arith::negate_not),
    },
    Gem {
        name: "hex-rgb24",
        summary: "Unpack 0xRRGGBB with shifts",
        baseline: "hex.to_be_bytes()",
        candidate: "(hex >> 16, hex >> 8 & 0xFF, hex & 0xFF)",
        build: |rng, size| {
            pair(colors24(rng, size), color::unpack_rgb24_bytes, color::unpack_rgb24)
        },
    },
    Gem {
        name: "hex-rgba32",
        summary: "Unpack 0xRRGGBBAA with shifts",
        baseline: "hex.to_be_bytes()",
        candidate: "(hex >> 24, hex >> 16 & 0xFF, hex >> 8 & 0xFF, hex & 0xFF)",
        build: |rng, size| {
            pair(unsigned(rng, size), color::unpack_rgba32_bytes, color::unpack_rgba32)
        },
    },
    Gem {
        name: "rgb24-hex",
        summary: "Pack RGB into 0xRRGGBB with shifts",
        baseline: "u32::from_be_bytes([0, r, g, b])",
        candidate: "r << 16 | g << 8 | b",
        build: |rng, size| pair(rgb(rng, size), color::pack_rgb24_bytes, color::pack_rgb24),
    },
    Gem {
        name: "argb32-hex",
        summary: "Pack ARGB into 0xAARRGGBB with shifts",
        baseline: "u32::from_be_bytes([a, r, g, b])",
        candidate: "a << 24 | r << 16 | g << 8 | b",
        build: |rng, size| pair(rgba(rng, size), color::pack_argb32_bytes, color::pack_argb32),
    },
    Gem {
        name: "r5g5b5",
        summary: "Widen R5G5B5 to R8G8B8 by bit replication (approximate)",
        baseline: "(c * 255 + 15) / 31",
        candidate: "(c << 3) | (c >> 2)",
        build: |rng, size| {
            pair(pixels15(rng, size), color::r5g5b5_to_rgb_scaled, color::r5g5b5_to_rgb)
        },
    },
    Gem {
        name: "layout-array",
        summary: "Color channels in a stack array instead of a boxed struct",
        baseline: "Box::new(Rgb { r, g, b })",
        candidate: "[r, g, b]",
        build: |rng, size| {
            pair(colors24(rng, size), color::channel_sum_boxed, color::channel_sum_array)
        },
    },
    Gem {
        name: "layout-flat",
        summary: "Color channels in plain locals instead of a boxed struct",
        baseline: "Box::new(Rgb { r, g, b })",
        candidate: "let (r, g, b) = ...",
        build: |rng, size| {
            pair(colors24(rng, size), color::channel_sum_boxed, color::channel_sum_flat)
        },
    },
];
