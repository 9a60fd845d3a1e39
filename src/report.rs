//! The Class-A position report layout and record assembly.

use std::fmt;

use thiserror::Error;

use crate::{
    armor::{Alphabet, InvalidCharacter},
    bitstream::{Bitstream, OutOfRange},
    reading::{self, Reading},
};

/// An error decoding a report straight from an armored payload.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The payload contains a character outside the transfer alphabet.
    #[error(transparent)]
    Armor(#[from] InvalidCharacter),
    /// The payload is too short for the report layout.
    #[error(transparent)]
    Extract(#[from] OutOfRange),
}

/// A fixed-position parameter of the report layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Descriptor {
    /// The parameter's name.
    pub name: &'static str,
    /// First bit of the field.
    pub offset: usize,
    /// Width of the field in bits.
    pub length: usize,
}

impl Descriptor {
    const fn new(name: &'static str, offset: usize, length: usize) -> Self {
        Self { name, offset, length }
    }

    /// Read this parameter's raw value from a bitstream.
    pub fn read(&self, frame: &Bitstream) -> Result<u32, OutOfRange> {
        frame.extract(self.offset, self.length)
    }
}

pub const MESSAGE_TYPE: Descriptor = Descriptor::new("Message Type", 0, 6);
pub const REPEAT_INDICATOR: Descriptor = Descriptor::new("Repeat Indicator", 6, 2);
pub const MMSI: Descriptor = Descriptor::new("MMSI", 8, 30);
pub const NAVIGATION_STATUS: Descriptor = Descriptor::new("Navigation Status", 38, 4);
pub const RATE_OF_TURN: Descriptor = Descriptor::new("Rate Of Turn", 42, 8);
pub const SPEED_OVER_GROUND: Descriptor = Descriptor::new("Speed Over Ground", 50, 10);
pub const POSITION_ACCURACY: Descriptor = Descriptor::new("Position Accuracy", 60, 1);
pub const LONGITUDE: Descriptor = Descriptor::new("Longitude", 61, 28);
pub const LATITUDE: Descriptor = Descriptor::new("Latitude", 89, 27);
pub const COURSE_OVER_GROUND: Descriptor = Descriptor::new("Course Over Ground", 116, 12);
pub const TRUE_HEADING: Descriptor = Descriptor::new("True Heading", 128, 9);
pub const TIME_STAMP: Descriptor = Descriptor::new("Time Stamp", 137, 6);
pub const MANEUVER_INDICATOR: Descriptor = Descriptor::new("Maneuver Indicator", 143, 2);
pub const RAIM_FLAG: Descriptor = Descriptor::new("RAIM Flag", 148, 1);
pub const RADIO_STATUS: Descriptor = Descriptor::new("Radio Status", 149, 19);

/// The full layout, in transmission order.
pub const LAYOUT: [Descriptor; 15] = [
    MESSAGE_TYPE,
    REPEAT_INDICATOR,
    MMSI,
    NAVIGATION_STATUS,
    RATE_OF_TURN,
    SPEED_OVER_GROUND,
    POSITION_ACCURACY,
    LONGITUDE,
    LATITUDE,
    COURSE_OVER_GROUND,
    TRUE_HEADING,
    TIME_STAMP,
    MANEUVER_INDICATOR,
    RAIM_FLAG,
    RADIO_STATUS,
];

/// The raw field values of one type 1, 2, or 3 message.
///
/// Fields hold extracted, uninterpreted bit patterns; [`readings`] applies
/// the per-parameter interpreters. Radio status is carried raw only, as it
/// has no interpreter.
///
/// [`readings`]: PositionReport::readings
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PositionReport {
    pub message_type: u32,
    pub repeat_indicator: u32,
    pub mmsi: u32,
    pub navigation_status: u32,
    pub rate_of_turn: u32,
    pub speed_over_ground: u32,
    pub position_accuracy: u32,
    pub longitude: u32,
    pub latitude: u32,
    pub course_over_ground: u32,
    pub true_heading: u32,
    pub time_stamp: u32,
    pub maneuver_indicator: u32,
    pub raim_flag: u32,
    pub radio_status: u32,
}

impl PositionReport {
    /// Extract every field of the layout from a bitstream.
    pub fn extract(frame: &Bitstream) -> Result<Self, OutOfRange> {
        Ok(Self {
            message_type: MESSAGE_TYPE.read(frame)?,
            repeat_indicator: REPEAT_INDICATOR.read(frame)?,
            mmsi: MMSI.read(frame)?,
            navigation_status: NAVIGATION_STATUS.read(frame)?,
            rate_of_turn: RATE_OF_TURN.read(frame)?,
            speed_over_ground: SPEED_OVER_GROUND.read(frame)?,
            position_accuracy: POSITION_ACCURACY.read(frame)?,
            longitude: LONGITUDE.read(frame)?,
            latitude: LATITUDE.read(frame)?,
            course_over_ground: COURSE_OVER_GROUND.read(frame)?,
            true_heading: TRUE_HEADING.read(frame)?,
            time_stamp: TIME_STAMP.read(frame)?,
            maneuver_indicator: MANEUVER_INDICATOR.read(frame)?,
            raim_flag: RAIM_FLAG.read(frame)?,
            radio_status: RADIO_STATUS.read(frame)?,
        })
    }

    /// Decode a report straight from an armored payload.
    pub fn decode(payload: &str, alphabet: Alphabet) -> Result<Self, DecodeError> {
        Ok(Self::extract(&alphabet.decode(payload)?)?)
    }

    /// Interpret each parameter, paired with its record label, in record
    /// order.
    pub fn readings(&self) -> [(&'static str, Reading); 14] {
        [
            ("Message type", reading::message_type(self.message_type)),
            ("Count", reading::repeat_indicator(self.repeat_indicator)),
            ("MMSI", reading::mmsi(self.mmsi)),
            ("Status", reading::navigation_status(self.navigation_status)),
            ("ROT", reading::rate_of_turn(self.rate_of_turn)),
            ("SOG", reading::speed_over_ground(self.speed_over_ground)),
            ("Accuracy", reading::position_accuracy(self.position_accuracy)),
            ("LON", reading::longitude(self.longitude)),
            ("LAT", reading::latitude(self.latitude)),
            ("COG", reading::course_over_ground(self.course_over_ground)),
            ("HDG", reading::true_heading(self.true_heading)),
            ("Timestamp", reading::time_stamp(self.time_stamp)),
            ("Maneuver", reading::maneuver_indicator(self.maneuver_indicator)),
            ("RAIM", reading::raim_flag(self.raim_flag)),
        ]
    }
}

impl fmt::Display for PositionReport {
    /// Render the labeled record block: first line unindented, the rest
    /// tab-indented, no trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (label, reading)) in self.readings().into_iter().enumerate() {
            if i > 0 {
                write!(f, "\n\t")?;
            }
            write!(f, "{label}: {reading}")?;
        }

        Ok(())
    }
}
