//! Runs with `cargo test --features tracing`.
#![cfg(feature = "tracing")]

use scanbits::{contains, contains_by, position, BitVector};
use tracing_subscriber::EnvFilter;

#[test]
fn test_queries_under_trace_subscriber() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("scanbits=trace"))
        .with_test_writer()
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let bits = BitVector::repeat(true, 65);
        assert!(!contains(&bits, &false));
        assert_eq!(position(&vec![1i32, 2], &2), Some(1));
        assert!(contains_by(&vec![Some(1u8), None], &(), |x, _| x.is_none()));
    });
}
