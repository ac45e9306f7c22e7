use std::collections::LinkedList;

use proptest::prelude::*;
use scanbits::contiguous::lanes;
use scanbits::{contains, contains_by, contains_iter, position, scan, BitSlice, BitVector};

proptest! {
    #[test]
    fn test_bytes_match_generic_scan(
        data in prop::collection::vec(any::<u8>(), 0..300),
        target in any::<u8>(),
    ) {
        let expected = scan::position(&data, &&target);
        prop_assert_eq!(position(&data, &target), expected);
        prop_assert_eq!(contains(&data, &target), expected.is_some());
        prop_assert_eq!(contains_by(&data, &target, |x, t| x == t), expected.is_some());
    }

    #[test]
    fn test_ints_match_generic_scan(
        data in prop::collection::vec(0..8i32, 0..300),
        target in 0..9i32,
    ) {
        let expected = data.iter().position(|&x| x == target);
        prop_assert_eq!(position(&data, &target), expected);
        prop_assert_eq!(contains(&data, &target), expected.is_some());

        let list: LinkedList<i32> = data.iter().copied().collect();
        prop_assert_eq!(position(&list, &target), expected);
    }

    #[test]
    fn test_wide_ints_match_generic_scan(
        data in prop::collection::vec(0..4u128, 0..40),
        target in 0..5u128,
    ) {
        let expected = data.iter().position(|&x| x == target);
        prop_assert_eq!(position(&data, &target), expected);
        prop_assert_eq!(contains(&data, &target), expected.is_some());
    }

    #[test]
    fn test_bits_match_bools(
        bools in prop::collection::vec(any::<bool>(), 0..400),
        target in any::<bool>(),
    ) {
        let bv: BitVector = bools.iter().copied().collect();
        let expected = bools.iter().position(|&b| b == target);

        // Packed, contiguous bool bytes, and plain iteration agree.
        prop_assert_eq!(position(&bv, &target), expected);
        prop_assert_eq!(contains(&bv, &target), expected.is_some());
        prop_assert_eq!(position(&bools, &target), expected);
        prop_assert_eq!(contains_iter(bv.as_bits(), &target), expected.is_some());
    }

    #[test]
    fn test_bit_subranges(
        words in prop::collection::vec(any::<u64>(), 1..6),
        a in any::<usize>(),
        b in any::<usize>(),
        target in any::<bool>(),
    ) {
        let total = words.len() * 64;
        let (start, end) = {
            let (x, y) = (a % (total + 1), b % (total + 1));
            (x.min(y), x.max(y))
        };
        let bits = BitSlice::new(&words, start, end).unwrap();
        let expected = bits.iter().position(|bit| bit == target);
        prop_assert_eq!(position(&bits, &target), expected);
        prop_assert_eq!(contains(&bits, &target), expected.is_some());
    }

    #[test]
    fn test_single_hit_at_any_boundary(
        len_chunks in 0..4usize,
        extra in 0..17usize,
        at_end in any::<bool>(),
    ) {
        let n = len_chunks * lanes::<u32>() + extra;
        prop_assume!(n > 0);
        let mut data = vec![1u32; n];
        let at = if at_end { n - 1 } else { 0 };
        data[at] = 2;
        prop_assert_eq!(position(&data, &2), Some(at));
        prop_assert!(!contains(&data, &3));
    }
}

#[test]
fn test_uniform_sweeps() {
    for n in [16usize, 256, 1 << 20] {
        assert!(!contains(&vec![b'a'; n], &b'B'), "bytes n = {n}");
        assert!(contains(&vec![b'a'; n], &b'a'), "bytes n = {n}");
        assert!(!contains(&vec![1i32; n], &2), "ints n = {n}");
        assert!(contains(&vec![1i32; n], &1), "ints n = {n}");
    }
    for n in [1usize, 7, 8, 9, 63, 64, 65] {
        let bv = BitVector::repeat(true, n);
        assert!(!contains(&bv, &false), "bits n = {n}");
        assert!(contains(&bv, &true), "bits n = {n}");
    }
}

#[test]
fn test_every_offset_pair_in_one_word() {
    let lone = 37;
    for target in [false, true] {
        let mut bv = BitVector::repeat(!target, 64);
        bv.set(lone, target).unwrap();
        for start in 0..=64 {
            for end in start..=64 {
                let bits = bv.slice(start, end).unwrap();
                let hit = (start..end).contains(&lone);
                assert_eq!(contains(&bits, &target), hit, "{start}..{end}");
                assert_eq!(
                    position(&bits, &target),
                    hit.then(|| lone - start),
                    "{start}..{end}"
                );
            }
        }
    }
}

#[test]
fn test_cursor_ranges() {
    let bv = BitVector::repeat(false, 200);
    let (mut begin, end) = bv.as_bits().cursors();
    begin.advance_by(130);
    let bits = BitSlice::between(begin, end).unwrap();
    assert_eq!(bits.len(), 70);
    assert!(!contains(&bits, &true));
    assert!(!contains(&BitSlice::between(end, end).unwrap(), &false));
}

#[test]
fn test_std_composite_elements() {
    assert!(contains(&vec![(1, 2), (3, 4)], &(3, 4)));
    assert!(!contains(&vec![(1, 2), (3, 4)], &(4, 3)));
    assert!(contains_by(&vec![Some(1u8), None], &(), |x, _| x.is_none()));
    assert_eq!(position(&vec![Some("a"), None], &None), Some(1));
}
