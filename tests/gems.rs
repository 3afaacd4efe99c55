//! Catalogue integration: every idiom pair agrees and can be timed.

use bitgems::gems::{self, arith, color};
use bitgems::SpeedTest;

#[test]
fn every_gem_compares_on_a_small_image() {
    let test = SpeedTest::new().trials(2);
    for gem in gems::catalog() {
        let mut pair = gem.workloads(4_096, gems::DEFAULT_SEED);
        let report = test
            .compare_workloads(&mut pair.baseline, &mut pair.candidate)
            .unwrap_or_else(|e| panic!("{}: {e}", gem.name));
        assert!(report.candidate.mean_ns > 0.0, "{}", gem.name);
        assert!(report.to_string().ends_with('%'), "{}", gem.name);
    }
}

#[test]
fn catalogue_lists_source_idioms() {
    for name in [
        "round",
        "round-positive",
        "mod-pow2",
        "abs-mask",
        "even",
        "mul-shift",
        "div-shift",
        "swap-xor",
        "negate-not",
        "hex-rgb24",
        "rgb24-hex",
        "r5g5b5",
    ] {
        assert!(gems::find(name).is_some(), "missing {name}");
    }
}

#[test]
fn literal_examples() {
    // Values used in the idiom list.
    let n = 99_999;
    assert_eq!(arith::modulo(n, 4), arith::modulo_pow2(n, 4));
    assert_eq!(arith::is_even(n as i32), arith::is_even_mask(n as i32));
    assert_eq!(arith::mul_shift(n as i32, 1), 199_998);
    assert_eq!(arith::div_shift(n, 1), 49_999);
    assert_eq!(arith::negate_not(n as i32), -99_999);
    assert_eq!(arith::round_positive(std::f64::consts::PI), 3);
    assert_eq!(arith::swap_xor((1, 2)), (2, 1));

    let c = color::unpack_rgb24(0x336699);
    assert_eq!((c.r, c.g, c.b), (0x33, 0x66, 0x99));
    assert_eq!(color::pack_rgb24(c), 0x336699);
}
