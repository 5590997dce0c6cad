//! End-to-end checks of the public API.

use astro_hyperfloat::{
    Error, HyperFloat, InverseBounds, INF_POS, INVERSE_ITERATIONS, LAMBERTW_MIN_ARG, NAN, ONE,
    SLOG_ITERATIONS, TEN, TWO, ZERO,
};
use rand::random;

#[test]
fn concrete_scenarios() {
    let d = TEN.tetrate(2.0, &ONE, false).unwrap();
    assert!(d == HyperFloat::from(1e10));

    let d = TEN.tetrate(3.0, &ONE, false).unwrap();
    assert_eq!(d.to_string(), "1e10000000000");

    let s = HyperFloat::from(1e10).slog(&TEN, SLOG_ITERATIONS, false).unwrap();
    assert_eq!(s.to_f64(), 2.0);

    let d: HyperFloat = "eee5".parse().unwrap();
    assert!(d == HyperFloat::from_components(1.0, 3.0, 5.0));

    assert!(HyperFloat::from(1) + HyperFloat::from(-1) == ZERO);
    let huge = HyperFloat::from_components(-1.0, 40.0, 1e9);
    assert!((huge + huge.neg()).is_zero());

    for _ in 0..1000 {
        let x = HyperFloat::random(6);
        if x.is_zero() || !x.is_finite() {
            continue;
        }
        assert!((x.recip() * x).eq_tolerance(&ONE, 1e-9), "{:?}", x);
    }
}

#[test]
fn layeradd10_composition() {
    for _ in 0..200 {
        let x = HyperFloat::from(2.0 + random::<f64>() * 1000.0);
        let a = random::<f64>() * 100.0;
        let b = random::<f64>() * 100.0;

        let l1 = x.layeradd10(a, false).unwrap().layeradd10(b, false).unwrap();
        let l2 = x.layeradd10(a + b, false).unwrap();
        assert!(l1.eq_tolerance(&l2, 1e-6), "{:?} {} {} {:?} {:?}", x, a, b, l1, l2);
    }
}

#[test]
fn tetrate_iteratedlog_inverse() {
    for _ in 0..200 {
        let base = HyperFloat::from(2.0 + random::<f64>() * 8.0);
        let h1 = random::<f64>() * 3.0;
        let h2 = random::<f64>() * 3.0;

        let t = base.tetrate(h1 + h2, &ONE, true).unwrap();
        let l = t.iteratedlog(&base, h2, true).unwrap();
        let expected = base.tetrate(h1, &ONE, true).unwrap();
        assert!(l.eq_tolerance(&expected, 1e-7), "{:?} {} {}", base, h1, h2);
    }
}

#[test]
fn lambertw_self_consistency() {
    for _ in 0..1000 {
        let x = if random::<bool>() {
            HyperFloat::from(LAMBERTW_MIN_ARG + 0.01 + random::<f64>() * 100.0)
        } else {
            HyperFloat::from_components(1.0, 1.0, 16.0 + random::<f64>() * 1000.0)
        };
        let w = x.lambertw(true).unwrap();
        assert!((w * w.exp()).eq_tolerance(&x, 1e-8), "{:?} {:?}", x, w);
    }

    assert!(HyperFloat::from(-1.0).lambertw(true).unwrap().is_nan());
}

#[test]
fn monotonic_tetration() {
    for _ in 0..20 {
        let base = HyperFloat::from(1.5 + random::<f64>() * 3.5);
        let mut prev = base.tetrate(0.0, &ONE, false).unwrap();
        let mut h = 0.0;
        while h < 3.0 {
            h += 0.05;
            let t = base.tetrate(h, &ONE, false).unwrap();
            assert!(t >= prev, "{:?} {}", base, h);
            prev = t;
        }
    }
}

#[test]
fn super_roots() {
    for _ in 0..100 {
        let x = 1.1 + random::<f64>() * 3.0;
        let b = HyperFloat::from(x);

        let t = b.tetrate(2.0, &ONE, false).unwrap();
        assert!((t.ssqrt().unwrap().to_f64() - x).abs() < 1e-9, "{}", x);

        let t = b.tetrate(3.0, &ONE, true).unwrap();
        assert!((t.sroot(3.0, true).unwrap().to_f64() - x).abs() < 1e-6, "{}", x);
    }

    assert!(HyperFloat::from(0.5).sroot(3.0, false).unwrap().is_nan());
    assert!(TEN.sroot(1.0, false).unwrap() == TEN);
}

#[test]
fn pentation_roundtrip() {
    let p = TWO.pentate(3.0, &ONE, false).unwrap();
    assert!((p.to_f64() - 65536.0).abs() < 1e-9);

    let h = p.penta_log(&TWO, SLOG_ITERATIONS, false).unwrap();
    assert!((h.to_f64() - 3.0).abs() < 1e-9);

    let r = p.penta_root(3.0, false).unwrap();
    assert!((r.to_f64() - 2.0).abs() < 1e-6);
}

#[test]
fn generic_inverse() {
    let exp_inv = HyperFloat::increasing_inverse(
        |x: &HyperFloat| Ok(x.exp()),
        false,
        INVERSE_ITERATIONS,
        InverseBounds {
            min_y: ZERO,
            ..InverseBounds::default()
        },
    );

    for _ in 0..100 {
        let y = HyperFloat::random(2).abs();
        if y.is_zero() || y == ONE {
            continue;
        }
        let x = exp_inv(&y).unwrap();
        assert!(x.eq_tolerance(&y.ln(), 1e-6), "{:?} {:?} {:?}", y, x, y.ln());
    }

    assert!(exp_inv(&NAN).unwrap().is_nan());
    assert!(exp_inv(&HyperFloat::from(-1)).unwrap().is_nan());
}

#[test]
fn notations() {
    let cases = [
        ("1.5e300", HyperFloat::from(1.5e300)),
        ("ee20", HyperFloat::from_components(1.0, 2.0, 20.0)),
        ("(e^12)300", HyperFloat::from_components(1.0, 12.0, 300.0)),
        ("-(e^12)300", HyperFloat::from_components(-1.0, 12.0, 300.0)),
        ("10^^5", TEN.tetrate(5.0, &ONE, false).unwrap()),
        ("3PT5", TEN.tetrate(3.0, &HyperFloat::from(5), false).unwrap()),
        ("3p5", TEN.tetrate(3.0, &HyperFloat::from(5), false).unwrap()),
        ("5F3", TEN.tetrate(3.0, &HyperFloat::from(5), false).unwrap()),
        ("2^^^2;3", TWO.pentate(2.0, &HyperFloat::from(3), false).unwrap()),
        ("Infinity", INF_POS),
    ];

    for (s, expected) in cases {
        let d = HyperFloat::parse(s).unwrap();
        assert!(d == expected, "{} {:?} {:?}", s, d, expected);

        // printing reads back
        let d2 = HyperFloat::parse(&d.to_string()).unwrap();
        assert!(d2.eq_tolerance(&d, 1e-14), "{} {:?} {:?}", s, d, d2);
    }

    assert_eq!(HyperFloat::parse("hello"), Err(Error::InvalidArgument));
}
