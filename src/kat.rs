//! Known-answer test helpers shared by the algorithm modules.

use crate::descriptor::Descriptor;
use crate::engine::Engine;

pub struct TestElement {
    pub descriptor: &'static Descriptor,
    pub input: &'static str,
    pub output: &'static str,
}

/// `len` bytes counting up modulo 251, the message used by the boundary vectors.
pub fn counting_message(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

fn hash_chunked(descriptor: &'static Descriptor, input: &[u8], chunk: usize) -> String {
    let mut h = Engine::new(descriptor).unwrap();
    for piece in input.chunks(chunk.max(1)) {
        h.update(piece).unwrap();
    }
    let out = h.digest();
    assert_eq!(out.len(), descriptor.output_size);
    hex::encode(out)
}

fn check(descriptor: &'static Descriptor, input: &[u8], output: &str, what: &str) {
    // Test that it works when accepting the message all at once
    let whole = hash_chunked(descriptor, input, input.len());
    assert_eq!(
        whole, output,
        "{} {} failed! got {}, want {}",
        descriptor.name, what, whole, output
    );

    // Test that it works when accepting the message in pieces
    let mut h = Engine::new(descriptor).unwrap();
    let len = input.len();
    let mut left = len;
    while left > 0 {
        let take = (left + 1) / 2;
        h.update(&input[len - left..take + len - left]).unwrap();
        left -= take;
    }
    assert_eq!(hex::encode(h.digest()), output, "{} {} in halves", descriptor.name, what);

    // And one byte at a time
    let bytewise = hash_chunked(descriptor, input, 1);
    assert_eq!(bytewise, output, "{} {} bytewise", descriptor.name, what);
}

pub fn main_test(tests: &[TestElement]) {
    for (i, t) in tests.iter().enumerate() {
        let input = hex::decode(t.input).unwrap();
        check(t.descriptor, &input, t.output, &format!("vector {}", i));
    }
}

pub fn boundary_test(vectors: &[(&'static Descriptor, usize, &str)]) {
    for &(descriptor, len, output) in vectors {
        check(
            descriptor,
            &counting_message(len),
            output,
            &format!("{}-byte message", len),
        );
    }
}
