use chrono::{Days, NaiveDate};
use period_series::core::{Granularity, PeriodKey, normalize_period};
use proptest::prelude::*;

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..20_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(1990, 1, 1)
            .and_then(|base| base.checked_add_days(Days::new(offset)))
            .expect("date in range")
    })
}

proptest! {
    #[test]
    fn normalizing_canonical_keys_is_identity(date in date_strategy()) {
        for granularity in Granularity::ALL {
            let key = PeriodKey::containing(date, granularity).to_string();
            prop_assert_eq!(normalize_period(&key, granularity), key);
        }
    }

    #[test]
    fn normalization_is_idempotent(raw in "\\PC{0,24}") {
        for granularity in Granularity::ALL {
            let once = normalize_period(&raw, granularity);
            let twice = normalize_period(&once, granularity);
            prop_assert_eq!(twice, once);
        }
    }
}
