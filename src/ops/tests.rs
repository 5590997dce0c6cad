//! Properties that tie several operations together.

use crate::common::consts::{NEG_ONE, ONE, TEN, ZERO};
use crate::defs::{EXPONENT_LIMIT, LAYER_REDUCTION_THRESHOLD, SLOG_ITERATIONS};
use crate::num::HyperFloat;
use rand::random;

fn is_normalized(d: &HyperFloat) -> bool {
    if d.is_nan() || d.is_inf() {
        return true;
    }
    if d.sign == 0.0 {
        return d.layer == 0.0 && d.mag == 0.0;
    }
    if d.layer.fract() != 0.0 || d.layer < 0.0 {
        return false;
    }
    if d.layer == 0.0 {
        d.mag > 0.0 && d.mag < EXPONENT_LIMIT
    } else {
        d.mag.abs() >= LAYER_REDUCTION_THRESHOLD * (1.0 - 1e-15) && d.mag.abs() < EXPONENT_LIMIT
    }
}

#[test]
fn test_normalized_results() {
    for _ in 0..10000 {
        let a = HyperFloat::random(4);
        let b = HyperFloat::random(4);
        for d in [
            a.add(&b),
            a.sub(&b),
            a.mul(&b),
            a.div(&b),
            a.abs().pow(&b),
            a.abs().log10(),
            a.ln(),
            a.exp(),
            a.pow10(),
            a.sqrt(),
            a.recip(),
        ] {
            assert!(is_normalized(&d), "{:?} {:?} {:?}", a, b, d);
        }
    }
}

#[test]
fn test_inverses() {
    assert!(ONE.add(&NEG_ONE) == ZERO);

    for _ in 0..10000 {
        let a = HyperFloat::random(4);
        if a.is_zero() || !a.is_finite() {
            continue;
        }
        assert!(a.recip().mul(&a).eq_tolerance(&ONE, 1e-9), "{:?}", a);
        assert!(a.add(&a.neg()).is_zero());
        if a.is_positive() {
            assert!(a.log10().pow10().eq_tolerance(&a, 1e-9), "{:?}", a);
            assert!(a.ln().exp().eq_tolerance(&a, 1e-9), "{:?}", a);
        }
    }
}

#[test]
fn test_ordering() {
    for _ in 0..10000 {
        let a = HyperFloat::random(4);
        let b = HyperFloat::random(4);
        if a.is_nan() || b.is_nan() {
            continue;
        }
        assert_eq!(a.cmp(&b), b.cmp(&a).map(|c| -c));
        assert_eq!(a.lt(&b), b.gt(&a));
        assert!(a.max(&b).ge(&a.min(&b)));
        if a.is_positive() && b.is_positive() && a.lt(&b) {
            assert!(a.log10().le(&b.log10()));
            assert!(a.pow10().le(&b.pow10()));
        }
    }
}

#[test]
fn test_hyperop_roundtrip() {
    for _ in 0..200 {
        let base = 2.0 + random::<f64>() * 8.0;
        let b = HyperFloat::from_f64(base);
        let h = 0.1 + random::<f64>() * 3.8;

        let t = b.tetrate(h, &ONE, false).unwrap();
        let s = t.slog(&b, SLOG_ITERATIONS, false).unwrap().to_f64();
        assert!((s - h).abs() < 1e-10, "{} {} {}", base, h, s);

        // super-logarithm is increasing in the value
        let t2 = t.pow10();
        let s2 = t2.slog(&b, SLOG_ITERATIONS, false).unwrap().to_f64();
        assert!(s2 > s);

        // one more layer through layeradd and through tetration agree
        let up = t.layeradd(1.0, &b, false).unwrap();
        let expected = b.tetrate(h + 1.0, &ONE, false).unwrap();
        assert!(up.eq_tolerance(&expected, 1e-9), "{} {}", base, h);
    }

    // bases below 2 scale the base 2 critical section
    for _ in 0..200 {
        let base = 1.05 + random::<f64>() * 0.95;
        let b = HyperFloat::from_f64(base);
        let h = 0.13 + random::<f64>() * 3.64;

        let t = b.tetrate(h, &ONE, false).unwrap();
        let s = t.slog(&b, SLOG_ITERATIONS, false).unwrap().to_f64();
        assert!((s - h).abs() < 1e-2, "{} {} {}", base, h, s);
    }

    // base 10 fractional layers
    for _ in 0..100 {
        let h = random::<f64>() * 5.0;
        let t = TEN.tetrate(h, &ONE, false).unwrap();
        let l = ONE.layeradd10(h, false).unwrap();
        assert!(t.eq_tolerance(&l, 1e-9), "{}", h);
    }
}
