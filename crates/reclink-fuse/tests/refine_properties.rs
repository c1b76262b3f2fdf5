use proptest::collection::vec;
use proptest::prelude::proptest;

use reclink_fuse::{is_left_unique, is_right_unique, refine};
use reclink_model::{PairIndex, PairTable};

fn table_from(pairs: &[(usize, usize)]) -> PairTable {
    PairTable::new(pairs.iter().map(|&(l, r)| PairIndex::new(l, r)))
}

proptest! {
    #[test]
    fn fully_refined_output_is_one_to_one(pairs in vec((0usize..8, 0usize..8), 0..64)) {
        let refined = refine(&table_from(&pairs), true, true);
        assert!(is_left_unique(&refined));
        assert!(is_right_unique(&refined));
    }

    #[test]
    fn refinement_output_is_an_ordered_subsequence(pairs in vec((0usize..8, 0usize..8), 0..64)) {
        let input = table_from(&pairs);
        let refined = refine(&input, true, true);

        let mut source = input.rows().iter();
        for row in refined.rows() {
            assert!(
                source.any(|candidate| candidate.index == row.index),
                "kept row missing from the input, or out of order"
            );
        }
    }

    #[test]
    fn one_sided_refinement_only_constrains_that_side(pairs in vec((0usize..4, 0usize..4), 0..32)) {
        let refined = refine(&table_from(&pairs), true, false);
        assert!(is_left_unique(&refined));
    }
}
