//! Critical-section grid: fractional-height tetration and super-logarithm values
//! for a fixed set of bases.
//!
//! Rows hold heights `0.0, 0.1, ..., 1.0`. The tetration rows run from `b^^0 = 1`
//! to `b^^1 = b`; the super-logarithm rows run from `slog(0) = -1` to `slog(1) = 0`.

use core::f64::consts::E;
use itertools::Itertools;

/// Bases of the grid rows.
pub(crate) const CRITICAL_HEADERS: [f64; 10] = [2.0, E, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];

/// `b^^h` for the header bases.
pub(crate) const CRITICAL_TETR_VALUES: [[f64; 11]; 10] = [
    [
        1.0,
        1.0891180521177084,
        1.1789767928083392,
        1.2701455439870437,
        1.3632090194997208,
        1.4587818179736514,
        1.5575237937039401,
        1.660157102499418,
        1.7674858200608365,
        1.88041921040913,
        2.0,
    ],
    [
        1.0,
        1.1121114602422522,
        1.2310389770362362,
        1.3583837615757748,
        1.4960519904034038,
        1.6463542692752926,
        1.8121385339572387,
        1.9969712857338406,
        2.205389494978593,
        2.443257399269571,
        E,
    ],
    [
        1.0,
        1.1187717494658858,
        1.2464843699198764,
        1.3852422854514777,
        1.5376213838229875,
        1.7068310930108748,
        1.8969386050863606,
        2.113185448066878,
        2.362443595219714,
        2.6538866364065923,
        3.0,
    ],
    [
        1.0,
        1.1367126548261783,
        1.2888871043043155,
        1.460532408530287,
        1.656867309536534,
        1.8848187957792382,
        2.1537686761035966,
        2.4766998520691685,
        2.8720047904061974,
        3.3664258859423657,
        4.0,
    ],
    [
        1.0,
        1.1494029307452154,
        1.3195735389541536,
        1.5164151937191512,
        1.747904669319464,
        2.0250611146777455,
        2.363472483036885,
        2.7857737894703334,
        3.325808394392784,
        4.035885744875069,
        5.0,
    ],
    [
        1.0,
        1.1591354896857262,
        1.3434931855629657,
        1.5607750898217476,
        1.821670198653731,
        2.1413818957532227,
        2.542125860957197,
        3.0573591804768974,
        3.7392263239963968,
        4.672268330078647,
        6.0,
    ],
    [
        1.0,
        1.1669828664131208,
        1.3630217208377158,
        1.5975058593754108,
        1.8837386844222088,
        2.241081039501595,
        2.6985615358423796,
        3.3011966611148384,
        4.121550835035692,
        5.281977042926419,
        7.0,
    ],
    [
        1.0,
        1.1735299465806874,
        1.3794792540375573,
        1.6288170535283255,
        1.9373489891659035,
        2.328514023176087,
        2.8382113663503437,
        3.5234873171327536,
        4.4789377449267676,
        5.869452967534477,
        8.0,
    ],
    [
        1.0,
        1.1791293726052416,
        1.393673348952235,
        1.6560826040048737,
        1.9845527217798569,
        2.406498693428977,
        2.9646760355706947,
        3.7284590589725077,
        4.815723983193796,
        6.4379471226697875,
        9.0,
    ],
    [
        1.0,
        1.1840096431202591,
        1.4061335845384924,
        1.6802156747891468,
        2.0267343120515062,
        2.4769698132954208,
        3.0804778471673506,
        3.9191436240268533,
        5.135106208705651,
        6.9899349566390105,
        10.0,
    ],
];

/// `slog_b(h)` for the header bases.
pub(crate) const CRITICAL_SLOG_VALUES: [[f64; 11]; 10] = [
    [
        -1.0,
        -0.9194172383934992,
        -0.8335647038531815,
        -0.7425628452022881,
        -0.6466639600616182,
        -0.5462637441643652,
        -0.4419039381897422,
        -0.334263727636664,
        -0.2241388984250432,
        -0.11240965016443073,
        0.0,
    ],
    [
        -1.0,
        -0.9060315924659069,
        -0.8078651138568129,
        -0.7064667433367195,
        -0.6029484117512365,
        -0.4984983973399228,
        -0.3943030309053604,
        -0.29147198935332547,
        -0.19097818126837246,
        -0.09361894449774343,
        0.0,
    ],
    [
        -1.0,
        -0.9021563242997951,
        -0.8005672625614395,
        -0.6964585702593986,
        -0.5911619198832747,
        -0.4860173728644546,
        -0.38227890578101237,
        -0.281038568851182,
        -0.18317874516915994,
        -0.08935428870841708,
        0.0,
    ],
    [
        -1.0,
        -0.8917053667078219,
        -0.7812143242715599,
        -0.670444536026529,
        -0.5612028670983912,
        -0.4550361254340245,
        -0.3531426590728488,
        -0.2563485213558638,
        -0.16513462260914596,
        -0.0796940243474954,
        0.0,
    ],
    [
        -1.0,
        -0.8842971308108842,
        -0.7677900734495603,
        -0.6528503527565923,
        -0.5414897081484142,
        -0.4352188892263125,
        -0.3350184505486714,
        -0.24139353360496954,
        -0.15447217646461484,
        -0.07411280822396055,
        0.0,
    ],
    [
        -1.0,
        -0.8786053419513392,
        -0.7576436313421605,
        -0.6397965611697275,
        -0.5271456466418668,
        -0.4210745736105002,
        -0.3223173605975827,
        -0.23108856223860696,
        -0.14723553520684698,
        -0.07037520745062621,
        0.0,
    ],
    [
        -1.0,
        -0.8740097408150524,
        -0.7495578412672489,
        -0.6295436700682758,
        -0.5160451317834864,
        -0.4102841112659516,
        -0.3127553707478654,
        -0.2234222500494562,
        -0.14190797566161245,
        -0.06764851540254238,
        0.0,
    ],
    [
        -1.0,
        -0.8701714748546739,
        -0.742877593215624,
        -0.6211726766540034,
        -0.5070888671164938,
        -0.40167498465397233,
        -0.30520356241987356,
        -0.21742172565111784,
        -0.13777036432676512,
        -0.06554493239727707,
        0.0,
    ],
    [
        -1.0,
        -0.8668859183996158,
        -0.7372120837106998,
        -0.6141434861959528,
        -0.4996415058902074,
        -0.3945811583541311,
        -0.29903140654769494,
        -0.2125521129116943,
        -0.1344329189572966,
        -0.06385689364193524,
        0.0,
    ],
    [
        -1.0,
        -0.8640205592074512,
        -0.732310889446852,
        -0.6081142763267128,
        -0.49330630639173034,
        -0.388592331465998,
        -0.293855481145442,
        -0.2084920064540304,
        -0.13166389621515054,
        -0.06246213468856051,
        0.0,
    ],
];

/// Interpolates `grid` at `(base, height)`.
///
/// The base is clamped to `[2, 10]` and interpolated linearly between rows. The height
/// is clamped to `[0, 1]` and interpolated in log space between columns, or linearly when
/// either neighbouring value is not positive.
pub(crate) fn critical_section(base: f64, height: f64, grid: &[[f64; 11]; 10]) -> f64 {
    let height = (height * 10.0).clamp(0.0, 10.0);
    let base = base.clamp(2.0, 10.0);

    let mut lower = 0.0;
    let mut upper = 0.0;

    if let Some(i) = CRITICAL_HEADERS.iter().position(|&h| h == base) {
        lower = grid[i][height.floor() as usize];
        upper = grid[i][height.ceil() as usize];
    } else if let Some((i, (&h0, &h1))) = CRITICAL_HEADERS
        .iter()
        .tuple_windows()
        .enumerate()
        .find(|(_, (h0, h1))| **h0 < base && base < **h1)
    {
        let basefrac = (base - h0) / (h1 - h0);
        let (fl, cl) = (height.floor() as usize, height.ceil() as usize);
        lower = grid[i][fl] * (1.0 - basefrac) + grid[i + 1][fl] * basefrac;
        upper = grid[i][cl] * (1.0 - basefrac) + grid[i + 1][cl] * basefrac;
    }

    let frac = height - height.floor();

    if lower <= 0.0 || upper <= 0.0 {
        lower * (1.0 - frac) + upper * frac
    } else {
        base.powf(lower.log(base) * (1.0 - frac) + upper.log(base) * frac)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use rand::random;

    #[test]
    fn test_critical_section() {
        // grid nodes are reproduced
        for (i, &b) in CRITICAL_HEADERS.iter().enumerate() {
            for j in 0..11 {
                let h = j as f64 / 10.0;
                let t = critical_section(b, h, &CRITICAL_TETR_VALUES);
                assert!((t - CRITICAL_TETR_VALUES[i][j]).abs() < 1e-12);
                let s = critical_section(b, h, &CRITICAL_SLOG_VALUES);
                assert!((s - CRITICAL_SLOG_VALUES[i][j]).abs() < 1e-12);
            }
            assert_eq!(critical_section(b, 1.0, &CRITICAL_TETR_VALUES), b);
        }

        // clamping
        assert_eq!(critical_section(1.5, 0.5, &CRITICAL_TETR_VALUES), critical_section(2.0, 0.5, &CRITICAL_TETR_VALUES));
        assert_eq!(critical_section(20.0, 2.0, &CRITICAL_TETR_VALUES), 10.0);

        // rows are increasing in height and base
        for _ in 0..1000 {
            let b = random::<f64>() * 8.0 + 2.0;
            let h1 = random::<f64>();
            let h2 = random::<f64>();
            let (lo, hi) = if h1 < h2 { (h1, h2) } else { (h2, h1) };
            assert!(critical_section(b, lo, &CRITICAL_TETR_VALUES) <= critical_section(b, hi, &CRITICAL_TETR_VALUES) + 1e-12);
            assert!(critical_section(b, lo, &CRITICAL_SLOG_VALUES) <= critical_section(b, hi, &CRITICAL_SLOG_VALUES) + 1e-12);
            let t = critical_section(b, h1, &CRITICAL_TETR_VALUES);
            assert!((1.0..=b + 1e-12).contains(&t));
        }
    }
}
