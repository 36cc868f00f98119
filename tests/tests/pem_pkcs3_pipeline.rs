//! PEM text to DH parameters, end to end

use dstuffer_api::Error;
use dstuffer_common::Stuffer;
use dstuffer_kem::{pkcs3_to_dh_params, DhConfig, DhParameters};
use dstuffer_rand::DeterministicEntropy;
use dstuffer_tests::fixtures::{
    encode_pkcs3, wrap_pem, DHPARAMS_PEM, DHPARAMS_PRIME_HEAD, DHPARAMS_PRIME_TAIL,
};
use dstuffer_tests::init_logging;
use dstuffer_utils::dhparams_from_pem;
use proptest::prelude::*;

fn decode(pem: &str) -> dstuffer_api::Result<DhParameters> {
    let mut input = Stuffer::with_data(pem.as_bytes());
    let mut der = Stuffer::growable_alloc(0);
    dhparams_from_pem(&mut input, &mut der)?;
    pkcs3_to_dh_params(&mut der)
}

#[test]
fn canonical_block_decodes() {
    init_logging();
    let params = decode(DHPARAMS_PEM).unwrap();
    let ctx = params.context().unwrap();

    assert_eq!(ctx.prime_bits(), 2048);
    let prime = hex::encode(ctx.prime_bytes());
    assert!(prime.starts_with(DHPARAMS_PRIME_HEAD));
    assert!(prime.ends_with(DHPARAMS_PRIME_TAIL));
    assert_eq!(ctx.generator_bytes(), vec![2]);
    params.check(&DhConfig::default()).unwrap();
}

#[test]
fn missing_end_marker_creates_nothing() {
    init_logging();
    let text = DHPARAMS_PEM.replace("-----END DH PARAMETERS-----\n", "");
    let mut input = Stuffer::with_data(text.as_bytes());
    let mut der = Stuffer::growable_alloc(0);

    let err = dhparams_from_pem(&mut input, &mut der).unwrap_err();
    assert!(matches!(err, Error::MalformedPem { .. }));
    assert_eq!(der.data_available(), 0);
    assert_eq!(input.read_cursor(), 0);
}

#[test]
fn truncated_der_is_a_decode_error() {
    init_logging();
    let der = encode_pkcs3(&[0x17], &[0x05]);
    let pem = wrap_pem("DH PARAMETERS", &der[..der.len() - 1]);
    assert!(matches!(decode(&pem), Err(Error::DecodeError { .. })));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn wrapped_parameters_round_trip(
        mut prime in proptest::collection::vec(any::<u8>(), 3..48),
        generator in 2u8..6,
        seed in any::<u64>(),
    ) {
        prime[0] |= 0x01;
        let last = prime.len() - 1;
        prime[last] |= 0x01;

        let pem = wrap_pem("DH PARAMETERS", &encode_pkcs3(&prime, &[generator]));
        let params = decode(&pem).unwrap();
        let ctx = params.context().unwrap();

        prop_assert_eq!(ctx.prime_bytes(), prime.clone());
        prop_assert_eq!(ctx.generator_bytes(), vec![generator]);

        let pair = ctx.generate_keypair(&mut DeterministicEntropy::from_u64(seed)).unwrap();
        prop_assert_eq!(pair.public_key().len(), prime.len());
    }
}
