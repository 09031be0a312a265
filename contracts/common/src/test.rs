use soroban_sdk::Env;

use crate::*;

mod percent_mul {
    use super::*;

    #[test]
    fn should_apply_percentage() {
        let percent = 500; // 5%
        let value = 1000;

        assert_eq!(percent_mul(value, percent).unwrap(), 50);
        assert_eq!(percent_mul(value, PERCENTAGE_FACTOR).unwrap(), value);
    }

    #[test]
    fn should_round_down() {
        assert_eq!(percent_mul(19, LIQUIDATION_BONUS).unwrap(), 1);
        assert_eq!(percent_mul(1, LIQUIDATION_THRESHOLD).unwrap(), 0);
    }
}

mod mul_div {
    use super::*;

    #[test]
    fn should_compute_in_i128() {
        let env = Env::default();

        assert_eq!(mul_div(&env, 10, 3, 4).unwrap(), 7);
        assert_eq!(
            mul_div(&env, 100 * PRECISION, HEALTH_FACTOR_PRECISION, 50 * PRECISION).unwrap(),
            2 * HEALTH_FACTOR_PRECISION
        );
    }

    #[test]
    fn should_fallback_to_wide_product() {
        let env = Env::default();

        // 10 units at $1800: 10e18 * 1800e18 overflows i128
        let price = 1_800 * 100_000_000 * ADDITIONAL_FEED_PRECISION;
        let usd_value = mul_div(&env, 10 * PRECISION, price, PRECISION).unwrap();

        assert_eq!(usd_value, 18_000 * PRECISION);
    }

    #[test]
    fn should_fail_on_zero_denominator() {
        let env = Env::default();

        assert!(mul_div(&env, 1, 1, 0).is_none());
    }

    #[test]
    fn should_fail_when_quotient_overflows() {
        let env = Env::default();

        assert!(mul_div(&env, i128::MAX, i128::MAX, 1).is_none());
    }
}

#[test]
fn min_health_factor_is_one() {
    assert_eq!(MIN_HEALTH_FACTOR, HEALTH_FACTOR_PRECISION);
}
