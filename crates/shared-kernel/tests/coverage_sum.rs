use covsum_shared_kernel::Coverage;
use proptest::prelude::*;

#[test]
fn coverage_sum_adds_both_sides() {
    let total = [Coverage::new(1, 2), Coverage::new(3, 3), Coverage::zero()]
        .into_iter()
        .sum::<Coverage>();
    assert_eq!(total, Coverage::new(4, 5));
}

#[test]
fn coverage_sum_ref() {
    let values = [Coverage::new(5, 7), Coverage::new(0, 1)];
    let total: Coverage = values.iter().sum();
    assert_eq!(total, Coverage::new(5, 8));
}

#[test]
fn coverage_add_assign() {
    let mut cov = Coverage::new(1, 1);
    cov += Coverage::new(0, 4);
    assert_eq!(cov.covered(), 1);
    assert_eq!(cov.total(), 5);
}

#[test]
fn empty_sum_is_zero() {
    let total: Coverage = std::iter::empty::<Coverage>().sum();
    assert_eq!(total, Coverage::zero());
    assert!(!total.percent().is_applicable());
}

proptest! {
    #[test]
    fn covered_never_exceeds_total(hits in proptest::collection::vec(any::<bool>(), 0..200)) {
        let cov = Coverage::from_hits(hits.iter().copied());
        prop_assert!(cov.covered() <= cov.total());
        prop_assert_eq!(cov.total(), hits.len());
        if let Some(pct) = cov.percent().value() {
            prop_assert!((0.0..=100.0).contains(&pct));
        }
    }
}
