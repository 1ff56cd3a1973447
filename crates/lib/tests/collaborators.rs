//! Hash/XOF adapters and the injectable randomness source.

use kyber_arith::{Error, Polynomial, RandomSource, hash};
use rand_chacha::ChaCha20Rng;
use rand_core::{CryptoRng, RngCore, SeedableRng};

fn seeded(tag: u8) -> RandomSource<ChaCha20Rng> {
    RandomSource::new(ChaCha20Rng::from_seed([tag; 32]))
}

/// Generator whose entropy source is permanently unavailable.
struct Exhausted;

impl RngCore for Exhausted {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand_core::Error> {
        Err(rand_core::Error::new("entropy source offline"))
    }
}

impl CryptoRng for Exhausted {}

#[test]
fn sha3_256_empty_vector() {
    assert_eq!(
        hash::hash256(b""),
        hex::decode("a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a")
            .unwrap()[..]
    );
}

#[test]
fn shake128_empty_vector() {
    let out = hash::xof(b"", 32usize).unwrap();
    assert_eq!(
        out,
        hex::decode("7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef26").unwrap()
    );
}

#[test]
fn xof_exact_lengths() {
    for len in [0usize, 1, 31, 168, 169, 1000] {
        assert_eq!(hash::xof(b"len", len).unwrap().len(), len);
    }
}

#[test]
fn xof_deterministic_and_input_sensitive() {
    let a = hash::xof(b"input-a", 64).unwrap();
    assert_eq!(a, hash::xof(b"input-a", 64).unwrap());
    assert_ne!(a, hash::xof(b"input-b", 64).unwrap());
}

#[test]
fn negative_lengths_are_invalid_arguments() {
    assert!(matches!(hash::xof(b"x", -1i32), Err(Error::InvalidArgument(_))));
    assert!(matches!(seeded(0).random_bytes(-1i64), Err(Error::InvalidArgument(_))));
}

#[test]
fn hash512_differs_from_hash256_prefix() {
    let g = hash::hash512(b"abc");
    let h = hash::hash256(b"abc");
    assert_ne!(&g[..32], &h[..]);
}

#[test]
fn seeded_sources_reproduce() {
    let a = seeded(9).random_bytes(100).unwrap();
    let b = seeded(9).random_bytes(100).unwrap();
    let c = seeded(10).random_bytes(100).unwrap();
    assert_eq!(a.len(), 100);
    assert_eq!(*a, *b);
    assert_ne!(*a, *c);
}

#[test]
fn seed_draws_advance_the_stream() {
    let mut rng = seeded(1);
    let d = rng.seed::<32>().unwrap();
    let z = rng.seed::<32>().unwrap();
    assert_ne!(*d, *z);

    let mut whole = seeded(1);
    let both = whole.random_bytes(64).unwrap();
    assert_eq!(&both[..32], &d[..]);
    assert_eq!(&both[32..], &z[..]);
}

#[test]
fn xof_bytes_feed_ring_construction() {
    let bytes = hash::xof(b"poly", 2 * 256).unwrap();
    let coeffs: Vec<i32> = bytes
        .chunks_exact(2)
        .map(|c| i32::from(u16::from_le_bytes([c[0], c[1]])))
        .collect();
    let p = Polynomial::from_sequence(&coeffs).unwrap();
    assert!(p.coeffs().iter().all(|&c| (0..kyber_arith::Q).contains(&c)));

    let err = Polynomial::from_sequence(&coeffs[1..]).map_err(Error::from).unwrap_err();
    assert_eq!(
        err.to_string(),
        "length mismatch: expected 256 coefficients, got 255"
    );
}

#[test]
fn generator_failure_surfaces_as_rng_error() {
    let mut rng = RandomSource::new(Exhausted);
    assert!(matches!(rng.random_bytes(8), Err(Error::Rng(_))));
    assert!(matches!(rng.seed::<32>(), Err(Error::Rng(_))));
    let mut buf = [0u8; 16];
    assert!(matches!(rng.fill(&mut buf), Err(Error::Rng(_))));

    let err = rng.random_bytes(1).unwrap_err();
    assert!(err.to_string().contains("entropy source offline"));
}

#[test]
fn rng_core_forwards_to_inner_generator() {
    let mut failing = RandomSource::new(Exhausted);
    let mut buf = [0u8; 4];
    let err = failing.try_fill_bytes(&mut buf).unwrap_err();
    assert!(err.to_string().contains("entropy source offline"));

    let mut wrapped = seeded(5);
    let mut bare = ChaCha20Rng::from_seed([5; 32]);
    assert_eq!(wrapped.next_u32(), bare.next_u32());
    assert_eq!(wrapped.next_u64(), bare.next_u64());
    let (mut a, mut b) = ([0u8; 40], [0u8; 40]);
    wrapped.fill_bytes(&mut a);
    bare.fill_bytes(&mut b);
    assert_eq!(a, b);
    wrapped.try_fill_bytes(&mut a).unwrap();
    bare.try_fill_bytes(&mut b).unwrap();
    assert_eq!(a, b);
}

#[test]
fn sha3_512_abc_vector() {
    assert_eq!(
        hash::hash512(b"abc")[..],
        hex::decode(
            "b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e\
             10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0"
        )
        .unwrap()[..]
    );
}

#[test]
fn oversized_count_message_names_usize() {
    let err = hash::xof(b"x", u128::MAX).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    assert!(err.to_string().contains("representable as usize"));
}
