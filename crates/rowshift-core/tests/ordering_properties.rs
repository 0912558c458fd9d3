//! Property tests for the row comparators.

use std::cmp::Ordering;

use proptest::prelude::*;
use rowshift_core::classify::RowFacts;
use rowshift_core::sort::{compare_by_star, compare_by_subject};
use rowshift_core::star::StarColor;

fn arb_star() -> impl Strategy<Value = StarColor> {
    prop_oneof![
        Just(StarColor::None),
        Just(StarColor::Purple),
        Just(StarColor::Red),
        Just(StarColor::Yellow),
        Just(StarColor::Other),
    ]
}

fn arb_facts() -> impl Strategy<Value = RowFacts> {
    (
        any::<bool>(),
        arb_star(),
        "[a-z]{0,6}",
        -1_000_000i64..1_000_000i64,
    )
        .prop_map(|(pinned, star, subject, timestamp_ms)| RowFacts {
            pinned,
            star,
            subject,
            timestamp_ms,
        })
}

proptest! {
    #[test]
    fn by_star_is_antisymmetric(a in arb_facts(), b in arb_facts()) {
        prop_assert_eq!(compare_by_star(&a, &b), compare_by_star(&b, &a).reverse());
    }

    #[test]
    fn by_subject_is_antisymmetric(a in arb_facts(), b in arb_facts()) {
        prop_assert_eq!(
            compare_by_subject(&a, &b),
            compare_by_subject(&b, &a).reverse()
        );
    }

    #[test]
    fn by_star_is_transitive(
        mut rows in prop::collection::vec(arb_facts(), 3..12)
    ) {
        // A sort that completes and yields a monotone sequence under the
        // comparator is the practical transitivity check.
        rows.sort_by(compare_by_star);
        for pair in rows.windows(2) {
            prop_assert_ne!(compare_by_star(&pair[0], &pair[1]), Ordering::Greater);
        }
    }

    #[test]
    fn pinned_rows_always_precede_unpinned(
        mut rows in prop::collection::vec(arb_facts(), 2..16)
    ) {
        rows.sort_by(compare_by_star);
        let first_unpinned = rows.iter().position(|f| !f.pinned);
        if let Some(boundary) = first_unpinned {
            prop_assert!(rows[boundary..].iter().all(|f| !f.pinned));
        }
    }

    #[test]
    fn comparing_anything_to_itself_is_equal(a in arb_facts()) {
        prop_assert_eq!(compare_by_star(&a, &a), Ordering::Equal);
        prop_assert_eq!(compare_by_subject(&a, &a), Ordering::Equal);
    }
}
