//! Semantic interpretation of raw field values.
//!
//! Each parameter has one pure interpreter taking the raw bit pattern to a
//! [`Reading`]. Malformed values interpret to [`Reading::Error`] rather
//! than failing: a report always renders completely, with annotations
//! standing in for unusable values.

use std::fmt;

/// Descriptions of the twenty-seven message types, indexed by type minus
/// one.
pub const MESSAGE_TYPES: [&str; 27] = [
    "Position Report Class A",
    "Position Report Class A (Assigned schedule)",
    "Position Report Class A (Response to interrogation)",
    "Base Station Report",
    "Static and Voyage Related Data",
    "Binary Addressed Message",
    "Binary Acknowledge",
    "Binary Broadcast Message",
    "Standard SAR Aircraft Position Report",
    "UTC and Date Inquiry",
    "UTC and Date Response",
    "Addressed Safety Related Message",
    "Safety Related Acknowledgement",
    "Safety Related Broadcast Message",
    "Interrogation",
    "Assignment Mode Command",
    "DGNSS Binary Broadcast Message",
    "Standard Class B CS Position Report",
    "Extended Class B Equipment Position Report",
    "Data Link Management",
    "Aid-to-Navigation Report",
    "Channel Management",
    "Group Assignment Command",
    "Static Data Report",
    "Single Slot Binary Message",
    "Multiple Slot Binary Message With Communications State",
    "Position Report For Long-Range Applications",
];

/// Descriptions of the sixteen navigation status codes.
pub const NAVIGATION_STATUS: [&str; 16] = [
    "Under way using engine",
    "At anchor",
    "Not under command",
    "Restricted manoeuverability",
    "Constrained by her draught",
    "Moored",
    "Aground",
    "Engaged in Fishing",
    "Under way sailing",
    "Reserved",
    "Reserved",
    "Reserved",
    "Reserved",
    "Reserved",
    "AIS-SART is active",
    "Not defined",
];

/// One interpreted parameter, ready for rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Reading {
    /// A bare integer (a count or identifier).
    Count(u32),
    /// A name-table entry or a named signal state.
    Name(&'static str),
    /// An integer quantity with a unit annotation.
    Integer { value: i32, unit: &'static str },
    /// A fractional quantity with a unit annotation.
    Decimal { value: f64, unit: &'static str },
    /// The parameter's "no data" sentinel.
    NotAvailable,
    /// A raw value outside the parameter's valid range.
    Error,
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reading::Count(value) => write!(f, "{value}"),
            Reading::Name(name) => f.write_str(name),
            Reading::Integer { value, unit } => write!(f, "{value} {unit}"),
            Reading::Decimal { value, unit } => write!(f, "{value:.6} {unit}"),
            Reading::NotAvailable => f.write_str("not available"),
            Reading::Error => f.write_str("error"),
        }
    }
}

/// Interpret a 'Message Type' value.
pub fn message_type(raw: u32) -> Reading {
    match raw {
        1..=27 => Reading::Name(MESSAGE_TYPES[raw as usize - 1]),
        _ => Reading::Error,
    }
}

/// Interpret a 'Repeat Indicator' value.
pub fn repeat_indicator(raw: u32) -> Reading {
    Reading::Count(raw)
}

/// Interpret an 'MMSI' value.
pub fn mmsi(raw: u32) -> Reading {
    Reading::Count(raw)
}

/// Interpret a 'Navigation Status' value.
pub fn navigation_status(raw: u32) -> Reading {
    match NAVIGATION_STATUS.get(raw as usize) {
        Some(name) => Reading::Name(name),
        None => Reading::Error,
    }
}

/// Interpret a 'Rate Of Turn' value.
///
/// The eight raw bits are a two's-complement turn indicator. The sensor
/// value in degrees per minute is the square of the indicator scaled by
/// 1/4.773, rounded to the nearest integer, with the indicator's sign
/// reapplied after squaring.
pub fn rate_of_turn(raw: u32) -> Reading {
    let raw = raw & 0xFF;
    let indicator = if raw >= 0x80 { raw as i32 - 0x100 } else { raw as i32 };

    if indicator == -128 {
        return Reading::NotAvailable;
    }

    let ratio = f64::from(indicator) / 4.773;
    let magnitude = (ratio * ratio).round() as i32;
    let value = if indicator < 0 { -magnitude } else { magnitude };

    Reading::Integer { value, unit: "[deg/min]" }
}

/// Interpret a 'Speed Over Ground' value, in tenths of a knot.
pub fn speed_over_ground(raw: u32) -> Reading {
    if raw == 1023 {
        return Reading::NotAvailable;
    }

    Reading::Decimal { value: f64::from(raw) * 0.1, unit: "[knots]" }
}

/// Interpret a 'Position Accuracy' value.
pub fn position_accuracy(raw: u32) -> Reading {
    match raw {
        1 => Reading::Name("<10m"),
        0 => Reading::Name(">10m"),
        _ => Reading::Error,
    }
}

/// Interpret a 'Longitude' value.
///
/// Raw `0x6791AC0` (181 degrees) is the "no fix" sentinel. Bit 27 carries
/// the sign; the value is in 1/600000ths of a degree.
pub fn longitude(raw: u32) -> Reading {
    if raw == 0x6791AC0 {
        return Reading::NotAvailable;
    }

    let low = i64::from(raw & 0x07FF_FFFF);
    let signed = if raw & 0x0800_0000 != 0 { low - 0x0800_0000 } else { low };
    let degrees = signed as f64 / 600000.0;

    if !(-180.0..=180.0).contains(&degrees) {
        return Reading::Error;
    }

    Reading::Decimal { value: degrees, unit: "[deg]" }
}

/// Interpret a 'Latitude' value.
///
/// Raw `0x3412140` (91 degrees) is the "no fix" sentinel. Bit 26 carries
/// the sign; the value is in 1/600000ths of a degree.
pub fn latitude(raw: u32) -> Reading {
    if raw == 0x3412140 {
        return Reading::NotAvailable;
    }

    let low = i64::from(raw & 0x03FF_FFFF);
    let signed = if raw & 0x0400_0000 != 0 { low - 0x0400_0000 } else { low };
    let degrees = signed as f64 / 600000.0;

    if !(-90.0..=90.0).contains(&degrees) {
        return Reading::Error;
    }

    Reading::Decimal { value: degrees, unit: "[deg]" }
}

/// Interpret a 'Course Over Ground' value, in tenths of a degree.
pub fn course_over_ground(raw: u32) -> Reading {
    if raw == 3600 {
        return Reading::NotAvailable;
    }

    let degrees = f64::from(raw) * 0.1;
    if degrees > 360.0 {
        return Reading::Error;
    }

    Reading::Decimal { value: degrees, unit: "[deg]" }
}

/// Interpret a 'True Heading' value.
pub fn true_heading(raw: u32) -> Reading {
    if raw == 511 {
        return Reading::NotAvailable;
    }

    if raw > 359 {
        return Reading::Error;
    }

    Reading::Integer { value: raw as i32, unit: "[deg]" }
}

/// Interpret a 'Time Stamp' value: the UTC second of the fix, or a named
/// positioning system state.
pub fn time_stamp(raw: u32) -> Reading {
    match raw {
        60 => Reading::NotAvailable,
        61 => Reading::Name("system in manual input mode"),
        62 => Reading::Name("system in estimated mode"),
        63 => Reading::Name("system inoperative"),
        _ => Reading::Integer { value: raw as i32, unit: "[s]" },
    }
}

/// Interpret a 'Maneuver Indicator' value.
pub fn maneuver_indicator(raw: u32) -> Reading {
    match raw {
        0 => Reading::NotAvailable,
        1 => Reading::Name("no special maneuver"),
        2 => Reading::Name("special maneuver"),
        _ => Reading::Error,
    }
}

/// Interpret a 'RAIM Flag' value.
pub fn raim_flag(raw: u32) -> Reading {
    match raw {
        1 => Reading::Name("in use"),
        0 => Reading::Name("not in use"),
        _ => Reading::Error,
    }
}
