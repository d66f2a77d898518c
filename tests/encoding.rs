//! End-to-end behaviour of the public encoder API.
//!
//! Fixed ids below are the outputs of the published Sqids scheme for the
//! default alphabet, so any change here breaks ids already handed out.

use std::{sync::Arc, thread};

use rand::{rngs::StdRng, Rng, SeedableRng};
use sqids::{alphabet::DEFAULT_ALPHABET, BufferPool, Error, ErrorKind, Options, Sqids};

fn no_blocklist() -> Sqids {
    Sqids::builder()
        .blocklist(Vec::<String>::new())
        .build()
        .unwrap()
}

#[test]
fn simple_list() {
    let sqids = Sqids::default();
    assert_eq!(sqids.encode(&[1, 2, 3]).unwrap(), "86Rf07");
    assert_eq!(sqids.decode("86Rf07").unwrap(), vec![1, 2, 3]);
}

#[test]
fn incremental_single_numbers() {
    let sqids = Sqids::default();
    let expected = [
        ("bM", 0),
        ("Uk", 1),
        ("gb", 2),
        ("Ef", 3),
        ("Vq", 4),
        ("uw", 5),
        ("OI", 6),
        ("AX", 7),
        ("p6", 8),
        ("nJ", 9),
    ];
    for (id, number) in expected {
        assert_eq!(sqids.encode(&[number]).unwrap(), id);
        assert_eq!(sqids.decode(id).unwrap(), vec![number]);
    }
}

#[test]
fn repeated_and_extreme_numbers() {
    let sqids = Sqids::default();
    assert_eq!(sqids.encode(&[0, 0]).unwrap(), "SvIz");
    assert_eq!(sqids.encode(&[u64::MAX]).unwrap(), "eIkvoXH40Lmd");
    assert_eq!(sqids.decode("eIkvoXH40Lmd").unwrap(), vec![u64::MAX]);
}

#[test]
fn min_length_padding() {
    let sqids = Sqids::builder().min_length(10).build().unwrap();
    assert_eq!(sqids.encode(&[0]).unwrap(), "bMZn4Y5Fq8");
    assert_eq!(sqids.decode("bMZn4Y5Fq8").unwrap(), vec![0]);

    let sqids = Sqids::builder()
        .min_length(DEFAULT_ALPHABET.len())
        .build()
        .unwrap();
    let id = sqids.encode(&[1, 2, 3]).unwrap();
    assert_eq!(
        id,
        "86Rf07xd4zBmiJXQG6otHEbew02c3PWsUOLZxADhCpKj7aVFv9I8RquYrNlSTM"
    );
    assert_eq!(sqids.decode(&id).unwrap(), vec![1, 2, 3]);
}

#[test]
fn min_length_holds_for_every_length() {
    let lists: [&[u64]; 4] = [&[0], &[0, 0, 0, 0, 0], &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10], &[u64::MAX]];
    for min_length in [0, 1, 5, 10, 62, 63, 120, 255] {
        let sqids = Sqids::builder().min_length(min_length).build().unwrap();
        for numbers in lists {
            let id = sqids.encode(numbers).unwrap();
            assert!(id.len() >= min_length, "{} shorter than {}", id, min_length);
            assert_eq!(sqids.decode(&id).unwrap(), numbers);
        }
    }
}

#[test]
fn random_round_trips() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let alphabets = [DEFAULT_ALPHABET, "abc", "0123456789", "!#$%&()*+,-./:;<=>?@[]^_{|}~"];

    for alphabet in alphabets {
        let sqids = Sqids::builder()
            .alphabet(alphabet)
            .min_length(rng.random_range(0..=20))
            .build()
            .unwrap();

        for _ in 0..200 {
            let count = rng.random_range(1..=8);
            let numbers: Vec<u64> = (0..count)
                .map(|_| match rng.random_range(0..3) {
                    0 => rng.random_range(0..100),
                    1 => rng.random::<u32>() as u64,
                    _ => rng.random::<u64>(),
                })
                .collect();

            let id = sqids.encode(&numbers).unwrap();
            assert!(id.chars().all(|c| alphabet.contains(c)), "{} escapes alphabet", id);
            assert_eq!(sqids.decode(&id).unwrap(), numbers, "id {}", id);
        }
    }
}

#[test]
fn identical_configurations_agree() {
    let options = Options {
        alphabet: "Kxw3Tq0Zr8bYpLm".to_string(),
        min_length: 6,
        blocklist: None,
    };
    let first = Sqids::new(options.clone()).unwrap();
    let second = Sqids::new(options).unwrap();

    for n in 0..500 {
        assert_eq!(first.encode(&[n, n * 7]).unwrap(), second.encode(&[n, n * 7]).unwrap());
    }
}

#[test]
fn shared_engine_across_threads() {
    let pool = Arc::new(BufferPool::new(4));
    let sqids = Arc::new(Sqids::builder().pool(Arc::clone(&pool)).build().unwrap());

    let handles: Vec<_> = (0..8u64)
        .map(|t| {
            let sqids = Arc::clone(&sqids);
            thread::spawn(move || {
                for n in 0..1_000u64 {
                    let numbers = [t, n, t * n];
                    let id = sqids.encode(&numbers).unwrap();
                    assert_eq!(sqids.decode(&id).unwrap(), numbers);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    assert!(pool.idle() <= 4);
}

#[test]
fn empty_inputs() {
    let sqids = Sqids::default();
    assert_eq!(sqids.decode("").unwrap(), Vec::<u64>::new());
    assert_eq!(sqids.encode(&[]), Err(Error::EmptyInput));
    assert_eq!(sqids.encode(&[]).unwrap_err().kind(), ErrorKind::InvalidInput);
}

#[test]
fn signed_input_is_range_checked() {
    let sqids = Sqids::default();
    assert_eq!(sqids.encode_signed(&[1i64, 2, 3]).unwrap(), "86Rf07");
    assert_eq!(
        sqids.encode_signed(&[3i64, -4]).unwrap_err(),
        Error::InvalidNumber { index: 1 }
    );
}

#[test]
fn malformed_ids() {
    let sqids = no_blocklist();

    let err = sqids.decode("86Rf07é").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidCharacter);

    let err = sqids.decode("*").unwrap_err();
    assert_eq!(
        err,
        Error::InvalidCharacter {
            character: '*',
            position: 0
        }
    );

    // Far too many digits for a single u64
    let long = "a".repeat(40);
    assert_eq!(sqids.decode(&long), Err(Error::Overflow));

    // A lone anchor carries no numbers
    assert_eq!(sqids.decode("8").unwrap(), Vec::<u64>::new());
}

#[test]
fn invalid_configurations() {
    let err = Sqids::builder().alphabet("ab").build().unwrap_err();
    assert_eq!(err, Error::AlphabetTooShort { min: 3, len: 2 });
    assert_eq!(err.kind(), ErrorKind::Configuration);

    let err = Sqids::builder().alphabet("abca").build().unwrap_err();
    assert_eq!(err, Error::DuplicateCharacter('a'));

    let err = Sqids::builder().alphabet("ë1|*ab").build().unwrap_err();
    assert_eq!(err, Error::AlphabetNotAscii('ë'));
}
