use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
};

use anyhow::Context;
use capstan::{armor::Alphabet, report::PositionReport, route::Outbox, sentence::LogLine};
use clap::Parser;
use either::Either;
use log::{debug, info, warn};

/// Decode AIVDM position reports from a collected log into per-sender
/// files.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Input log file, or `-` for standard input.
    input: PathBuf,

    /// Directory receiving the per-MMSI report files.
    #[arg(default_value = ".")]
    output: PathBuf,

    /// Decode 'f' by the published table instead of the folded legacy
    /// table.
    #[arg(long)]
    strict_alphabet: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp(None)
        .parse_default_env()
        .init();

    let args = Args::parse();

    let alphabet = if args.strict_alphabet { Alphabet::Strict } else { Alphabet::Folded };

    let reader = if args.input.as_os_str() == "-" {
        Either::Left(BufReader::new(io::stdin()))
    } else {
        let file = File::open(&args.input)
            .with_context(|| format!("could not open input file {}", args.input.display()))?;
        Either::Right(BufReader::new(file))
    };

    let mut outbox = Outbox::new(&args.output);

    let mut lines = 0u64;
    let mut written = 0u64;
    let mut skipped = 0u64;

    for (number, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("read error at line {}", number + 1))?;
        lines += 1;

        if line.trim().is_empty() {
            continue;
        }

        match process(&line, alphabet, &mut outbox) {
            Ok(true) => written += 1,
            Ok(false) => {}
            Err(cause) => {
                skipped += 1;
                warn!("line {}: {cause}", number + 1);
            }
        }

        if lines % 1000 == 0 {
            debug!("{lines} lines read");
        }
    }

    info!("{written} reports written from {lines} lines ({skipped} skipped)");

    Ok(())
}

/// Decode one log line, routing its record if it carries a position
/// report. Returns whether a record was written.
fn process(line: &str, alphabet: Alphabet, outbox: &mut Outbox) -> anyhow::Result<bool> {
    let line = LogLine::parse(line)?;
    let frame = alphabet.decode(&line.sentence.payload)?;

    if !(1..=3).contains(&frame.message_type()?) {
        return Ok(false);
    }

    let report = PositionReport::extract(&frame)?;
    let record = format!("{} {}\n{report}\n\n", line.date, line.time);

    outbox
        .put(report.mmsi, &record)
        .with_context(|| format!("could not write report for {}", report.mmsi))?;

    Ok(true)
}
