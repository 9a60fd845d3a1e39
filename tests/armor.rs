use capstan::armor::{Alphabet, InvalidCharacter};

/// The canonical character for a value: the lowest byte mapping to it.
fn canonical(alphabet: Alphabet, value: u8) -> Option<u8> {
    (0..=255u8).find(|&b| alphabet.value_of(b) == Some(value))
}

#[test]
fn folded_table_round_trips_except_f() {
    for byte in 0..=255u8 {
        let Some(value) = Alphabet::Folded.value_of(byte) else {
            continue;
        };

        if byte == b'f' {
            assert_eq!(canonical(Alphabet::Folded, value), Some(b'e'));
        } else {
            assert_eq!(canonical(Alphabet::Folded, value), Some(byte));
        }
    }

    // The value 'f' would carry has no symbol in the folded table.
    assert_eq!(canonical(Alphabet::Folded, 46), None);
}

#[test]
fn strict_table_is_a_bijection() {
    let mut seen = [false; 64];
    for byte in 0..=255u8 {
        if let Some(value) = Alphabet::Strict.value_of(byte) {
            assert!(!seen[value as usize]);
            seen[value as usize] = true;
            assert_eq!(canonical(Alphabet::Strict, value), Some(byte));
        }
    }
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn table_boundaries() {
    let table = Alphabet::Folded;
    assert_eq!(table.value_of(b'0'), Some(0));
    assert_eq!(table.value_of(b'9'), Some(9));
    assert_eq!(table.value_of(b':'), Some(10));
    assert_eq!(table.value_of(b'?'), Some(15));
    assert_eq!(table.value_of(b'@'), Some(16));
    assert_eq!(table.value_of(b'A'), Some(17));
    assert_eq!(table.value_of(b'W'), Some(39));
    assert_eq!(table.value_of(b'\''), Some(40));
    assert_eq!(table.value_of(b'a'), Some(41));
    assert_eq!(table.value_of(b'e'), Some(45));
    assert_eq!(table.value_of(b'g'), Some(47));
    assert_eq!(table.value_of(b'w'), Some(63));
}

#[test]
fn the_tables_disagree_only_on_f() {
    assert_eq!(Alphabet::Folded.value_of(b'f'), Some(45));
    assert_eq!(Alphabet::Strict.value_of(b'f'), Some(46));

    for byte in 0..=255u8 {
        if byte != b'f' {
            assert_eq!(Alphabet::Folded.value_of(byte), Alphabet::Strict.value_of(byte));
        }
    }
}

#[test]
fn characters_outside_the_table_are_rejected() {
    for byte in [b'x', b'X', b'`', b'z', b' ', b'!', b'*', b','] {
        assert_eq!(Alphabet::Folded.value_of(byte), None);
    }

    let err = Alphabet::Folded.decode("13aDrf0000x0").unwrap_err();
    assert_eq!(err, InvalidCharacter { byte: b'x', index: 10 });
}

#[test]
fn decoding_yields_one_unit_per_character() {
    let frame = Alphabet::Folded.decode("1W'w").unwrap();
    assert_eq!(frame.bit_len(), 24);
    assert_eq!(frame.extract(0, 6).unwrap(), 1);
    assert_eq!(frame.extract(6, 6).unwrap(), 39);
    assert_eq!(frame.extract(12, 6).unwrap(), 40);
    assert_eq!(frame.extract(18, 6).unwrap(), 63);
}
