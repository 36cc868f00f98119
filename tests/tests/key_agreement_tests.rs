//! Two parties sharing decoded parameters

use dstuffer_api::{Error, KeyAgreement};
use dstuffer_kem::{pkcs3_from_slice, DhContext, DhPublicKey};
use dstuffer_params::traditional::dh::DH_2048_PRIME;
use dstuffer_rand::{DeterministicEntropy, OsEntropy};
use dstuffer_tests::fixtures::encode_pkcs3;
use dstuffer_tests::init_logging;

#[test]
fn parties_agree_on_group14() {
    init_logging();
    let params = pkcs3_from_slice(&encode_pkcs3(&DH_2048_PRIME, &[2])).unwrap();
    let ctx = params.context().unwrap();

    let alice = ctx.generate_keypair(&mut OsEntropy).unwrap();
    let bob = ctx.generate_keypair(&mut OsEntropy).unwrap();

    let ab = ctx.compute_shared_secret(alice.secret_key(), bob.public_key()).unwrap();
    let ba = KeyAgreement::shared_secret(ctx, bob.secret_key(), alice.public_key()).unwrap();
    assert_eq!(ab, ba);
    assert!(ab.len() <= 256);
}

#[test]
fn shared_secret_is_seed_stable() {
    init_logging();
    let ctx = DhContext::new(&DH_2048_PRIME, &[2]).unwrap();
    let run = || {
        let a = ctx.generate_keypair(&mut DeterministicEntropy::from_u64(1)).unwrap();
        let b = ctx.generate_keypair(&mut DeterministicEntropy::from_u64(2)).unwrap();
        ctx.compute_shared_secret(a.secret_key(), b.public_key())
            .unwrap()
            .to_bytes_zeroizing()
    };
    assert_eq!(run(), run());
}

#[test]
fn peer_value_one_is_rejected() {
    init_logging();
    let ctx = DhContext::new(&DH_2048_PRIME, &[2]).unwrap();
    let pair = ctx.generate_keypair(&mut OsEntropy).unwrap();

    let mut one = vec![0u8; 256];
    one[255] = 1;
    let err = ctx
        .compute_shared_secret(pair.secret_key(), &DhPublicKey::from_bytes(&one))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidParameter { .. }));
}
