use capstan::{
    armor::Alphabet,
    bitstream::{Bitstream, OutOfRange},
    report::{self, PositionReport},
};

#[test]
fn first_character_is_the_message_type() {
    let frame = Alphabet::Folded.decode("11mg=5@000000000000000000000").unwrap();
    assert_eq!(frame.extract(0, 6).unwrap(), 1);
    assert_eq!(frame.message_type().unwrap(), 1);
}

#[test]
fn fields_assemble_big_endian_across_units() {
    let frame = Bitstream::new(vec![0b000001, 0b011111]);

    assert_eq!(frame.extract(0, 12).unwrap(), 0b000001_011111);
    // The last bit of the first unit and the first bit of the second.
    assert_eq!(frame.extract(5, 2).unwrap(), 0b10);
    assert_eq!(frame.extract(4, 4).unwrap(), 0b0101);
}

#[test]
fn contiguous_fields_reconstruct_the_stream() {
    let frame = Alphabet::Folded.decode("13aDrf01AGPD86tMdm7I2W;FP<1C").unwrap();

    // The report layout plus the three spare bits at 145 tile the frame.
    let mut widths: Vec<(usize, usize)> =
        report::LAYOUT.iter().map(|d| (d.offset, d.length)).collect();
    widths.push((145, 3));
    widths.sort();

    let mut bits = Vec::new();
    let mut end = 0;
    for (offset, length) in widths {
        assert_eq!(offset, end);
        let value = frame.extract(offset, length).unwrap();
        for i in (0..length).rev() {
            bits.push((value >> i) & 1);
        }
        end = offset + length;
    }
    assert_eq!(end, frame.bit_len());

    // Re-reading unit by unit gives the same bit sequence.
    for (unit, chunk) in bits.chunks(6).enumerate() {
        let rebuilt = chunk.iter().fold(0, |acc, bit| (acc << 1) | bit);
        assert_eq!(frame.extract(unit * 6, 6).unwrap(), rebuilt);
    }
}

#[test]
fn reads_past_the_end_fail() {
    let frame = Bitstream::new(vec![0; 10]);
    assert_eq!(frame.bit_len(), 60);

    assert!(frame.extract(59, 1).is_ok());
    assert!(frame.extract(54, 6).is_ok());
    assert_eq!(
        frame.extract(40, 28).unwrap_err(),
        OutOfRange { offset: 40, length: 28, available: 60 },
    );
    assert!(frame.extract(60, 1).is_err());
}

#[test]
fn report_extraction_requires_a_full_frame() {
    // A type-1 payload cut short: the gate still reads, the report fails.
    let frame = Alphabet::Folded.decode("11mg=5@000").unwrap();
    assert_eq!(frame.message_type().unwrap(), 1);
    assert!(PositionReport::extract(&frame).is_err());
}

#[test]
fn layout_matches_the_wire_contract() {
    let expected = [
        ("Message Type", 0, 6),
        ("Repeat Indicator", 6, 2),
        ("MMSI", 8, 30),
        ("Navigation Status", 38, 4),
        ("Rate Of Turn", 42, 8),
        ("Speed Over Ground", 50, 10),
        ("Position Accuracy", 60, 1),
        ("Longitude", 61, 28),
        ("Latitude", 89, 27),
        ("Course Over Ground", 116, 12),
        ("True Heading", 128, 9),
        ("Time Stamp", 137, 6),
        ("Maneuver Indicator", 143, 2),
        ("RAIM Flag", 148, 1),
        ("Radio Status", 149, 19),
    ];

    for (descriptor, (name, offset, length)) in report::LAYOUT.iter().zip(expected) {
        assert_eq!(descriptor.name, name);
        assert_eq!(descriptor.offset, offset);
        assert_eq!(descriptor.length, length);
    }
}
