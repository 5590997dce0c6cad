//! Parser of the textual notations.
//!
//! Accepted forms, tried in this order:
//!
//!  - `a^^^h;p`: `p` pentated by `a` to height `h`;
//!  - `a^^h;p`: `p` tetrated by `a` to height `h`;
//!  - `a^b`: power;
//!  - `hPT(p)`, `hpp`, `(p)F(h)`, `pFh`: a base-10 tower of height `h` over `p`;
//!  - plain numbers that fit an `f64`;
//!  - `(e^N)X`: `N` layers over `X`;
//!  - `AeB`, `AeeB`, `eeeX`, `AeBeC`: one layer per `e`.
//!
//! Commas are ignored, and letters are case-insensitive.

use crate::cache::LruCache;
use crate::common::consts::{INF_NEG, INF_POS, NAN, TEN, ZERO};
use crate::common::util::{self, maglog10};
use crate::defs::{Error, DEFAULT_PARSE_CACHE_CAPACITY};
use crate::num::HyperFloat;
use core::cell::RefCell;
use core::str::Chars;
use log::trace;
use smallvec::SmallVec;

type Parts<'a> = SmallVec<[&'a str; 4]>;

thread_local! {
    static PARSE_CACHE: RefCell<LruCache<(String, bool), HyperFloat>> =
        RefCell::new(LruCache::new(DEFAULT_PARSE_CACHE_CAPACITY));
}

/// Sets the number of parsed strings remembered by the current thread.
/// A capacity of 0 disables the cache.
pub fn set_parse_cache_capacity(capacity: usize) {
    PARSE_CACHE.with(|c| c.borrow_mut().set_max_size(capacity));
}

/// Returns the number of parsed strings the current thread can remember.
pub fn parse_cache_capacity() -> usize {
    PARSE_CACHE.with(|c| c.borrow().max_size())
}

/// Scanner of the longest numeric prefix of a string.
struct ParserState<'a> {
    chars: Chars<'a>,
    cur_ch: Option<char>,
    prefix: String,
}

impl<'a> ParserState<'a> {
    fn new(s: &'a str) -> Self {
        let mut chars = s.chars();
        let cur_ch = chars.next();
        ParserState {
            chars,
            cur_ch,
            prefix: String::new(),
        }
    }

    fn cur_char(&self) -> Option<char> {
        self.cur_ch
    }

    /// Moves the current character into the prefix.
    fn accept(&mut self) {
        if let Some(c) = self.cur_ch {
            self.prefix.push(c);
        }
        self.cur_ch = self.chars.next();
    }

    /// Accepts a run of decimal digits and returns its length.
    fn accept_digits(&mut self) -> usize {
        let mut n = 0;
        while matches!(self.cur_ch, Some('0'..='9')) {
            self.accept();
            n += 1;
        }
        n
    }
}

/// Parses the longest numeric prefix of `s` and returns NaN if there is none.
pub(crate) fn parse_float(s: &str) -> f64 {
    let mut ps = ParserState::new(s.trim_start());

    if matches!(ps.cur_char(), Some('+' | '-')) {
        ps.accept();
    }

    let int_len = ps.accept_digits();
    let mut frac_len = 0;
    if ps.cur_char() == Some('.') {
        ps.accept();
        frac_len = ps.accept_digits();
    }

    if int_len + frac_len == 0 {
        return f64::NAN;
    }

    if matches!(ps.cur_char(), Some('e' | 'E')) {
        let mantissa_len = ps.prefix.len();
        ps.accept();
        if matches!(ps.cur_char(), Some('+' | '-')) {
            ps.accept();
        }
        if ps.accept_digits() == 0 {
            ps.prefix.truncate(mantissa_len);
        }
    }

    ps.prefix.parse::<f64>().unwrap_or(f64::NAN)
}

fn split<'a>(s: &'a str, pat: &str) -> Parts<'a> {
    s.split(pat).collect()
}

/// Payload of a tower notation: 1 when absent or unreadable.
fn payload(s: Option<&str>) -> f64 {
    let p = s.map_or(f64::NAN, |s| parse_float(&s.replacen('(', "", 1).replacen(')', "", 1)));
    if p.is_finite() {
        p
    } else {
        1.0
    }
}

impl HyperFloat {
    /// Parses a number from a string. Tower notations use the analytic approximation
    /// for fractional heights.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the string matches none of the notations.
    ///  - LambertWNoConvergence: evaluating a tower notation failed.
    pub fn parse(s: &str) -> Result<Self, Error> {
        Self::parse_cached(s, false)
    }

    /// Parses a number from a string. Tower notations use the linear approximation
    /// for fractional heights.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the string matches none of the notations.
    ///  - LambertWNoConvergence: evaluating a tower notation failed.
    pub fn parse_linear(s: &str) -> Result<Self, Error> {
        Self::parse_cached(s, true)
    }

    fn parse_cached(s: &str, linear: bool) -> Result<Self, Error> {
        let key = (s.to_owned(), linear);

        if let Some(d) = PARSE_CACHE.with(|c| c.borrow_mut().get(&key)) {
            trace!("parse cache hit: {}", s);
            return Ok(d);
        }

        let d = parse_notation(s, linear)?;

        PARSE_CACHE.with(|c| {
            let mut c = c.borrow_mut();
            if c.max_size() > 0 && c.size() == c.max_size() {
                trace!("parse cache full, evicting the least recently used entry");
            }
            c.set(key, d);
        });

        Ok(d)
    }
}

fn parse_notation(s: &str, linear: bool) -> Result<HyperFloat, Error> {
    let value: String = s.chars().filter(|c| *c != ',').collect();
    let value = value.trim().to_lowercase();

    match value.as_str() {
        "nan" => return Ok(NAN),
        "infinity" | "+infinity" | "inf" | "+inf" => return Ok(INF_POS),
        "-infinity" | "-inf" => return Ok(INF_NEG),
        "" => return Err(Error::InvalidArgument),
        _ => {}
    }

    if let Some(d) = parse_hyperop(&value, linear)? {
        return Ok(d);
    }

    if let Some(d) = parse_tower(&value, linear)? {
        return Ok(d);
    }

    parse_exponential(&value)
}

/// `a^^^h;p`, `a^^h;p`, and `a^b`.
fn parse_hyperop(value: &str, linear: bool) -> Result<Option<HyperFloat>, Error> {
    for (pat, pentation) in [("^^^", true), ("^^", false)] {
        let parts = split(value, pat);
        if parts.len() == 2 {
            let base = parse_float(parts[0]);
            let height = parse_float(parts[1]);
            let p = payload(parts[1].split(';').nth(1));

            if base.is_finite() && height.is_finite() {
                let base = HyperFloat::from_f64(base);
                let p = HyperFloat::from_f64(p);
                let d = if pentation {
                    base.pentate(height, &p, linear)?
                } else {
                    base.tetrate(height, &p, linear)?
                };
                return Ok(Some(d));
            }
        }
    }

    let parts = split(value, "^");
    if parts.len() == 2 {
        let base = parse_float(parts[0]);
        let exponent = parse_float(parts[1]);
        if base.is_finite() && exponent.is_finite() {
            let d = HyperFloat::from_f64(base).pow(&HyperFloat::from_f64(exponent));
            return Ok(Some(d));
        }
    }

    Ok(None)
}

/// Base-10 towers: `hPT(p)`, `hpp`, `(p)F(h)`, `pFh`.
fn parse_tower(value: &str, linear: bool) -> Result<Option<HyperFloat>, Error> {
    for (pat, height_first) in [("pt", true), ("p", true), ("f", false)] {
        let parts = split(value, pat);
        if parts.len() != 2 {
            continue;
        }

        let (lhs, negative) = match parts[0].strip_prefix('-') {
            Some(rest) => (rest, true),
            None => (parts[0], false),
        };

        let (height, p) = if height_first {
            (parse_float(lhs), payload(Some(parts[1])))
        } else {
            let h = parse_float(&parts[1].replacen('(', "", 1).replacen(')', "", 1));
            (h, payload(Some(lhs)))
        };

        if height.is_finite() {
            let d = TEN.tetrate(height, &HyperFloat::from_f64(p), linear)?;
            return Ok(Some(if negative { d.neg() } else { d }));
        }
    }

    Ok(None)
}

/// Plain numbers, `(e^N)X`, and the repeated-e forms.
fn parse_exponential(value: &str) -> Result<HyperFloat, Error> {
    let parts = split(value, "e");
    let ecount = parts.len() - 1;

    if ecount <= 1 {
        let n = parse_float(value);
        // subnormals lose digits, the layer-1 route below keeps them
        if (ecount == 0 && n.is_finite()) || n.is_normal() {
            return Ok(HyperFloat::from_f64(n));
        }
    }

    let layered = split(value, "e^");
    if layered.len() == 2 {
        let sign = if layered[0].starts_with('-') { -1.0 } else { 1.0 };
        let tail = layered[1];
        if let Some(end) = tail.find(|c: char| !matches!(c, '+'..='9' | 'e')) {
            let layer = parse_float(&tail[..end]);
            let mag = parse_float(&tail[end + 1..]);
            if layer.is_finite() && layer >= 0.0 && !mag.is_nan() {
                return Ok(HyperFloat::from_components(sign, layer.trunc(), mag));
            }
        }
        return Err(Error::InvalidArgument);
    }

    if ecount == 0 {
        return Err(Error::InvalidArgument);
    }

    let mantissa = parse_float(parts[0]);
    if mantissa == 0.0 {
        return Ok(ZERO);
    }

    let mut exponent = parse_float(parts[ecount]);
    if exponent.is_nan() {
        return Err(Error::InvalidArgument);
    }

    // AeBeC: B folds into the top exponent
    if ecount >= 2 {
        let me = parse_float(parts[ecount - 1]);
        if me.is_finite() {
            exponent *= util::sign(me);
            exponent += maglog10(me);
        }
    }

    let layer = ecount as f64;

    if !mantissa.is_finite() {
        // eee...X
        let sign = match parts[0] {
            "" | "+" => 1.0,
            "-" => -1.0,
            _ => return Err(Error::InvalidArgument),
        };
        Ok(HyperFloat::from_components(sign, layer, exponent))
    } else if ecount == 1 {
        Ok(HyperFloat::from_components(
            util::sign(mantissa),
            1.0,
            exponent + mantissa.abs().log10(),
        ))
    } else if ecount == 2 {
        let d = HyperFloat::from_components(1.0, 2.0, exponent);
        Ok(d.mul(&HyperFloat::from_f64(mantissa)))
    } else {
        // mantissa is below precision at three layers and above
        Ok(HyperFloat::from_components(util::sign(mantissa), layer, exponent))
    }
}
