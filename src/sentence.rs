//! Parsing of collected log lines.

use thiserror::Error;

/// An error splitting a log line into its parts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MalformedLine {
    /// The line is missing a timestamp column.
    #[error("missing timestamp column")]
    MissingTimestamp,
    /// The line has no sentence after the timestamp.
    #[error("missing sentence column")]
    MissingSentence,
    /// The sentence has fewer than its seven comma-separated fields.
    #[error("sentence has {0} of 7 fields")]
    TruncatedSentence(usize),
}

/// The comma-separated parts of one AIVDM sentence.
///
/// Only `payload` feeds decoding; the rest are carried for callers that
/// need the framing. Fragmented sentences are not reassembled and the
/// checksum in the trailer is not verified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sentence {
    /// Format tag, e.g. `!AIVDM`.
    pub format: String,
    /// Total fragments of the message.
    pub fragment_count: String,
    /// This fragment's number.
    pub fragment_number: String,
    /// Sequential id tying fragments together, often empty.
    pub sequence_id: String,
    /// Radio channel, `A` or `B`.
    pub channel: String,
    /// The armored payload.
    pub payload: String,
    /// Fill bits and checksum trailer, e.g. `0*54`.
    pub trailer: String,
}

impl Sentence {
    /// Split a sentence on commas into its seven fields.
    pub fn parse(sentence: &str) -> Result<Self, MalformedLine> {
        let fields: Vec<&str> = sentence.splitn(7, ',').collect();
        let [format, fragment_count, fragment_number, sequence_id, channel, payload, trailer] =
            <[&str; 7]>::try_from(fields).map_err(|f| MalformedLine::TruncatedSentence(f.len()))?;

        Ok(Self {
            format: format.to_owned(),
            fragment_count: fragment_count.to_owned(),
            fragment_number: fragment_number.to_owned(),
            sequence_id: sequence_id.to_owned(),
            channel: channel.to_owned(),
            payload: payload.to_owned(),
            trailer: trailer.to_owned(),
        })
    }
}

/// One line of a collected log: two timestamp columns and a sentence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogLine {
    /// Capture date, carried verbatim.
    pub date: String,
    /// Capture time, carried verbatim.
    pub time: String,
    /// The sentence in the third column.
    pub sentence: Sentence,
}

impl LogLine {
    /// Split a log line into its date, time, and sentence columns.
    pub fn parse(line: &str) -> Result<Self, MalformedLine> {
        let mut columns = line.split_whitespace();

        let date = columns.next().ok_or(MalformedLine::MissingTimestamp)?;
        let time = columns.next().ok_or(MalformedLine::MissingTimestamp)?;
        let sentence = columns.next().ok_or(MalformedLine::MissingSentence)?;

        Ok(Self {
            date: date.to_owned(),
            time: time.to_owned(),
            sentence: Sentence::parse(sentence)?,
        })
    }
}
