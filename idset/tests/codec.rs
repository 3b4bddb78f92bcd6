#![allow(missing_docs)]

use itertools::Itertools;
use quickcheck::QuickCheck;

use idset::{EncodeOptions, IdSet};
#[cfg(feature = "serde")]
use serde_test::{assert_tokens, Token};

const FULL: EncodeOptions = EncodeOptions {
    brackets: true,
    range: true,
};

#[test]
fn canonical_forms_are_fixed_points() {
    for notation in ["", "5", "[0-3]", "[1-3,7,9-10]", "[0-2,5,7-9,100]"] {
        let set = IdSet::decode(notation).unwrap();
        assert_eq!(set.encode(FULL), notation);
    }
}

#[test]
fn encode_is_ascending() {
    let set = IdSet::decode("9-10,1-3,7").unwrap();
    assert_eq!(set.encode(FULL), "[1-3,7,9-10]");
}

#[test]
fn empty_encodes_empty() {
    for brackets in [false, true] {
        for range in [false, true] {
            assert_eq!(IdSet::new().encode(EncodeOptions { brackets, range }), "");
        }
    }
}

#[test]
fn decode_grows_past_default() {
    let set = IdSet::decode("5000").unwrap();
    assert!(set.contains(5000));
    assert_eq!(set.capacity(), 8192);
}

#[test]
fn decode_wide_range() {
    let set = IdSet::decode("0-4095").unwrap();
    assert_eq!(set.len(), 4096);
    assert_eq!(set.first(), Some(0));
    assert_eq!(set.last(), Some(4095));
    assert_eq!(set.capacity(), 8192);
}

#[test]
fn from_str_parses() {
    let set: IdSet = "1-3".parse().unwrap();
    assert_eq!(set.iter().collect_vec(), vec![1, 2, 3]);
    assert!("nope".parse::<IdSet>().is_err());
}

#[test]
fn error_display() {
    let err = IdSet::decode("12,x7").unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid range-notation syntax: 'x7' is invalid: \
         expected a decimal id or a 'first-second' id range",
    );
}

/// Every encoded form of a set must decode back to an equal set.
fn round_trip(ids: Vec<u16>) -> Result<(), String> {
    let set = ids.iter().map(|&id| usize::from(id)).collect::<IdSet>();
    let expected = ids
        .iter()
        .map(|&id| usize::from(id))
        .sorted()
        .dedup()
        .collect_vec();
    if set.iter().collect_vec() != expected {
        return Err(format!("member walk mismatch for {ids:?}"));
    }
    for options in [
        EncodeOptions::default(),
        EncodeOptions {
            brackets: true,
            range: false,
        },
        EncodeOptions {
            brackets: false,
            range: true,
        },
        FULL,
    ] {
        let notation = set.encode(options);
        let decoded = IdSet::decode(&notation)
            .map_err(|err| format!("decode({notation:?}) failed: {err}"))?;
        if decoded != set {
            return Err(format!(
                "{notation:?} decoded to {decoded:?}, expected {set:?}"
            ));
        }
    }
    Ok(())
}

#[test]
fn encoded_forms_round_trip() {
    round_trip(vec![]).unwrap();
    round_trip(vec![0]).unwrap();
    round_trip(vec![0, 1, 2, 3, 10, 1000]).unwrap();
    QuickCheck::new().quickcheck(round_trip as fn(_) -> _);
}

#[test]
#[cfg(feature = "serde")]
fn serde() {
    let set: IdSet = [1usize, 2, 3, 7].into_iter().collect();
    assert_tokens(&set, &[Token::Str("1-3,7")]);
    assert_tokens(&IdSet::new(), &[Token::Str("")]);
}
