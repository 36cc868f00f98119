//! Bounds and growth properties of the Stuffer

use dstuffer_api::Error;
use dstuffer_common::Stuffer;
use proptest::prelude::*;

proptest! {
    #[test]
    fn fixed_capacity_is_exact(capacity in 0usize..512, fill in any::<u8>()) {
        let mut stuffer = Stuffer::alloc(capacity);
        stuffer.write(&vec![fill; capacity]).unwrap();
        prop_assert_eq!(stuffer.data_available(), capacity);
        prop_assert_eq!(stuffer.space_remaining(), 0);

        let before = stuffer.unread().to_vec();
        let err = stuffer.write(&[fill]).unwrap_err();
        let is_out_of_space = matches!(err, Error::OutOfSpace { .. });
        prop_assert!(is_out_of_space);
        prop_assert_eq!(stuffer.write_cursor(), capacity);
        prop_assert_eq!(stuffer.unread(), &before[..]);
    }

    #[test]
    fn overread_leaves_cursors_alone(
        data in proptest::collection::vec(any::<u8>(), 0..256),
        consumed in 0usize..256,
    ) {
        let mut stuffer = Stuffer::with_data(&data);
        let consumed = consumed.min(data.len());
        stuffer.skip_read(consumed).unwrap();

        let available = stuffer.data_available();
        let err = stuffer.read(available + 1).unwrap_err();
        prop_assert_eq!(
            err,
            Error::OutOfData { context: "stuffer read", requested: available + 1, available }
        );
        prop_assert_eq!(stuffer.read_cursor(), consumed);
        prop_assert_eq!(stuffer.write_cursor(), data.len());
        prop_assert_eq!(stuffer.raw_read(available).unwrap(), &data[consumed..]);
    }

    #[test]
    fn growable_keeps_content(
        chunks in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..700), 1..8),
    ) {
        let mut stuffer = Stuffer::growable_alloc(0);
        let mut expected = Vec::new();
        for chunk in &chunks {
            stuffer.write(chunk).unwrap();
            expected.extend_from_slice(chunk);
            prop_assert!(stuffer.capacity() >= stuffer.write_cursor());
        }
        prop_assert_eq!(stuffer.read(expected.len()).unwrap(), expected);
    }
}

#[test]
fn freed_stuffer_rejects_everything() {
    let mut stuffer = Stuffer::growable_alloc(16);
    stuffer.write(b"secret").unwrap();
    stuffer.free();

    assert!(stuffer.is_freed());
    assert_eq!(stuffer.capacity(), 0);
    assert!(matches!(stuffer.write(b"x"), Err(Error::OutOfSpace { .. })));
    assert!(matches!(stuffer.read(1), Err(Error::OutOfData { .. })));
}
