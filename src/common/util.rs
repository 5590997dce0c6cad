//! Auxiliary scalar functions.

/// Sign of a number: -1, 0, 1, or NaN.
pub fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else if x == 0.0 {
        0.0
    } else {
        f64::NAN
    }
}

/// Signed decimal logarithm of the magnitude: `sign(n)·log10(|n|)`.
pub fn maglog10(n: f64) -> f64 {
    sign(n) * n.abs().log10()
}

/// Rounds `value` to `places` digits after the leading significant digit.
pub fn decimal_places(value: f64, places: usize) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    let len = places as f64 + 1.0;
    let num_digits = value.abs().log10().ceil();
    let rounded = (value * 10f64.powf(len - num_digits)).round() * 10f64.powf(num_digits - len);
    let fixed = (len - num_digits).max(0.0) as usize;
    format!("{:.*}", fixed, rounded).parse::<f64>().unwrap_or(rounded)
}

/// Gamma function of a native number by the Stirling series.
pub fn gamma(mut n: f64) -> f64 {
    if !n.is_finite() {
        return n;
    }
    if n < -50.0 {
        if n == n.trunc() {
            return f64::NEG_INFINITY;
        }
        return 0.0;
    }

    let mut scal1 = 1.0;
    while n < 10.0 {
        scal1 *= n;
        n += 1.0;
    }

    n -= 1.0;
    let mut l = 0.9189385332046727; // ln(2pi)/2
    l += (n + 0.5) * n.ln();
    l -= n;
    let n2 = n * n;
    let mut np = n;
    l += 1.0 / (12.0 * np);
    np *= n2;
    l -= 1.0 / (360.0 * np);
    np *= n2;
    l += 1.0 / (1260.0 * np);
    np *= n2;
    l -= 1.0 / (1680.0 * np);
    np *= n2;
    l += 1.0 / (1188.0 * np);
    np *= n2;
    l -= 691.0 / (360360.0 * np);
    np *= n2;
    l += 7.0 / (1092.0 * np);
    np *= n2;
    l -= 3617.0 / (122400.0 * np);

    l.exp() / scal1
}
