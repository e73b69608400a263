use diag_core::{BitString, BitWidth};
use diag_seq::BitStringSequence;
use proptest::prelude::*;

const WIDTH: usize = 6;

fn bit_string() -> impl Strategy<Value = BitString> {
    proptest::collection::vec(any::<bool>(), WIDTH)
        .prop_map(|bits| BitString::from_bits(bits).unwrap())
}

fn sequence() -> impl Strategy<Value = BitStringSequence> {
    proptest::collection::vec(bit_string(), 1..24).prop_map(|values| {
        BitStringSequence::from_elements(BitWidth::new(WIDTH).unwrap(), values).unwrap()
    })
}

proptest! {
    #[test]
    fn duplicate_is_equal_and_independent(seq in sequence(), extra in bit_string()) {
        let mut copy = seq.duplicate();
        prop_assert_eq!(copy.size(), seq.size());
        for pos in 0..seq.size() {
            prop_assert_eq!(copy.get(pos).unwrap(), seq.get(pos).unwrap());
        }

        let snapshot: Vec<BitString> = seq.iter().cloned().collect();
        copy.remove(0).unwrap();
        copy.append(extra.clone()).unwrap();
        copy.insert(extra, 0).unwrap();
        let after: Vec<BitString> = seq.iter().cloned().collect();
        prop_assert_eq!(after, snapshot);
    }

    #[test]
    fn insert_then_remove_restores(seq in sequence(), value in bit_string(), raw_pos in any::<usize>()) {
        let pos = raw_pos % (seq.size() + 1);
        let mut working = seq.duplicate();
        working.insert(value.clone(), pos).unwrap();
        prop_assert_eq!(working.size(), seq.size() + 1);
        prop_assert_eq!(working.get(pos).unwrap(), value.clone());
        let removed = working.remove(pos).unwrap();
        prop_assert_eq!(removed, value);
        prop_assert_eq!(working, seq);
    }
}
