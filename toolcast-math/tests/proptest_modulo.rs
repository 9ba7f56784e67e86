//! Property-based tests for the modulo policy.

use proptest::prelude::*;
use toolcast_math::{MathError, modulo};

fn nonzero_divisor() -> impl Strategy<Value = f64> {
    prop_oneof![-1e9f64..-1e-3, 1e-3f64..1e9]
}

proptest! {
    /// For finite operands with a nonzero divisor, the remainder's magnitude
    /// is strictly below the divisor's, and nonzero results carry the
    /// dividend's sign.
    #[test]
    fn remainder_bounded_and_sign_follows_dividend(
        a in -1e12f64..1e12,
        b in nonzero_divisor(),
    ) {
        let r = modulo(a, b).unwrap();
        prop_assert!(r.abs() < b.abs(), "|{r}| >= |{b}| for a={a}");
        if r != 0.0 {
            prop_assert_eq!(r.signum(), a.signum());
        }
    }

    /// A zero divisor fails for every dividend, including NaN and infinities.
    #[test]
    fn zero_divisor_always_fails(a in proptest::num::f64::ANY) {
        prop_assert_eq!(modulo(a, 0.0).unwrap_err(), MathError::DivisionByZero);
        prop_assert_eq!(modulo(a, -0.0).unwrap_err(), MathError::DivisionByZero);
    }

    /// A NaN operand propagates as NaN for any nonzero divisor.
    #[test]
    fn nan_propagates(b in nonzero_divisor()) {
        prop_assert!(modulo(f64::NAN, b).unwrap().is_nan());
        prop_assert!(modulo(b, f64::NAN).unwrap().is_nan());
    }

    /// An infinite operand yields NaN for any finite nonzero partner.
    #[test]
    fn infinity_yields_nan(x in nonzero_divisor()) {
        prop_assert!(modulo(f64::INFINITY, x).unwrap().is_nan());
        prop_assert!(modulo(f64::NEG_INFINITY, x).unwrap().is_nan());
        prop_assert!(modulo(x, f64::INFINITY).unwrap().is_nan());
        prop_assert!(modulo(x, f64::NEG_INFINITY).unwrap().is_nan());
    }
}
