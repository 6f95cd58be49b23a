//! Rounding helpers behind the label precision policy.

/// Rounds `f` up so that it has at most `places` non-zero decimal places after
/// any leading zero decimals.
///
/// Returns the rounded value and the number of leading zero decimals, e.g.
/// `(0.0371, 2)` yields `(0.038, 1)` and `(76.846, 2)` yields `(76.85, 0)`.
/// Integral values and `places == 0` return `f` unchanged.
pub(crate) fn round_to_non_zero_places(f: f64, places: i32) -> (f64, i32) {
    if f == 0.0 {
        return (0.0, 0);
    }

    let dec_only = f.fract();
    if dec_only == 0.0 || places == 0 {
        return (f, 0);
    }

    let zeroes = zero_decimal_places(dec_only.abs());
    let nz_mult = 10f64.powi(places.abs());
    let zero_mult = 10f64.powi(zeroes);
    ((f * nz_mult * zero_mult).ceil() / nz_mult / zero_mult, zeroes)
}

/// Number of zero decimal places before the first non-zero one.
///
/// The argument must be in the open interval (0, 1).
fn zero_decimal_places(mut f: f64) -> i32 {
    let mut count = 0;
    loop {
        f *= 10.0;
        if f >= 1.0 || f == 0.0 {
            break;
        }
        count += 1;
    }
    count
}

/// Formats `v` like C's `%.2e`: two mantissa decimals, signed exponent of at
/// least two digits.
pub(crate) fn scientific(v: f64) -> String {
    let formatted = format!("{v:.2e}");
    match formatted.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exp.abs())
        }
        None => formatted,
    }
}
