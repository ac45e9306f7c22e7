#![no_main]
use libfuzzer_sys::fuzz_target;
use scanbits::{contains, position, BitSlice};

fuzz_target!(|data: (Vec<u64>, usize, usize, bool, u8)| {
    let (words, a, b, target, byte) = data;
    if words.is_empty() {
        return;
    }

    let total = words.len() * 64;
    let (start, end) = {
        let (x, y) = (a % (total + 1), b % (total + 1));
        (x.min(y), x.max(y))
    };

    // Packed path vs bit-by-bit.
    let bits = BitSlice::new(&words, start, end).unwrap();
    let expected = bits.iter().position(|bit| bit == target);
    assert_eq!(position(&bits, &target), expected);
    assert_eq!(contains(&bits, &target), expected.is_some());

    // Byte path vs element-wise, on the raw word bytes.
    let raw: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
    let expected = raw.iter().position(|&x| x == byte);
    assert_eq!(position(&raw, &byte), expected);

    // Wide path vs element-wise.
    let needle = words[a % words.len()];
    assert_eq!(
        position(&words, &needle),
        words.iter().position(|&w| w == needle)
    );
});
