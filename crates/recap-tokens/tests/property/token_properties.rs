use proptest::prelude::*;
use recap_tokens::{TokenBudget, TokenCounter};

proptest! {
    #[test]
    fn cached_equals_uncached(s in ".{0,200}") {
        let counter = TokenCounter::new().unwrap();
        prop_assert_eq!(counter.count(&s), counter.count_cached(&s));
    }

    #[test]
    fn subadditivity(a in ".{0,100}", b in ".{0,100}") {
        let counter = TokenCounter::new().unwrap();
        let combined = format!("{}{}", a, b);
        let count_a = counter.count(&a);
        let count_b = counter.count(&b);
        let count_combined = counter.count(&combined);
        prop_assert!(
            count_combined <= count_a + count_b + 1,
            "subadditivity: {} <= {} + {} + 1",
            count_combined, count_a, count_b
        );
    }

    #[test]
    fn check_fits_iff_projected_within_budget(s in ".{0,200}", budget in 0usize..200) {
        let counter = TokenCounter::new().unwrap();
        let check = TokenBudget::new(&counter, budget).check(&[s.as_str()]);
        prop_assert_eq!(check.fits(), check.projected <= budget);
    }
}
