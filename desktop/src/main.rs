use std::process::ExitCode;

use argh::FromArgs;
use embedded_stream::{
    CalendarTime, Mode, Passthru, Stream, StreamError, copy, dos_date, file_exists, file_size,
};
use log::{error, info, warn};

use crate::std_fs::StdFileStream;

mod std_fs;

#[cfg(test)]
mod tests;

#[derive(FromArgs)]
/// Stream layer utilities
struct Args {
    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Command {
    Copy(CopyArgs),
    Exists(ExistsArgs),
    Size(SizeArgs),
    DosDate(DosDateArgs),
}

#[derive(FromArgs)]
/// copy a file, counting the bytes moved
#[argh(subcommand, name = "copy")]
struct CopyArgs {
    /// source file
    #[argh(positional)]
    source: String,

    /// target file, created or truncated
    #[argh(positional)]
    target: String,

    /// number of bytes to copy, defaults to the whole source
    #[argh(option, short = 'n')]
    length: Option<u64>,
}

#[derive(FromArgs)]
/// check whether a file can be opened
#[argh(subcommand, name = "exists")]
struct ExistsArgs {
    /// path to check
    #[argh(positional)]
    path: String,
}

#[derive(FromArgs)]
/// print the size of a file
#[argh(subcommand, name = "size")]
struct SizeArgs {
    /// path to measure
    #[argh(positional)]
    path: String,
}

#[derive(FromArgs)]
/// convert MS-DOS packed dates
#[argh(subcommand, name = "dosdate")]
struct DosDateArgs {
    #[argh(subcommand)]
    action: DosDateAction,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum DosDateAction {
    Decode(DecodeArgs),
    Encode(EncodeArgs),
}

#[derive(FromArgs)]
/// decode a packed date given in hex
#[argh(subcommand, name = "decode")]
struct DecodeArgs {
    /// packed value, e.g. 0x3a6f73ca
    #[argh(positional, from_str_fn(parse_hex))]
    packed: u32,
}

#[derive(FromArgs)]
/// pack a calendar date
#[argh(subcommand, name = "encode")]
struct EncodeArgs {
    /// year, absolute or two digit
    #[argh(positional)]
    year: i32,

    /// month, 1-12
    #[argh(positional)]
    month: i32,

    /// day of month
    #[argh(positional)]
    day: i32,

    /// hour
    #[argh(positional)]
    hour: Option<i32>,

    /// minute
    #[argh(positional)]
    minute: Option<i32>,

    /// second
    #[argh(positional)]
    second: Option<i32>,
}

fn parse_hex(value: &str) -> Result<u32, String> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    u32::from_str_radix(digits, 16).map_err(|e| format!("invalid hex value {value}: {e}"))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();
    match args.command {
        Command::Copy(args) => match copy_file(&args.source, &args.target, args.length) {
            Ok((read, written)) => {
                println!("{read} bytes read, {written} bytes written");
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("Copy from {} to {} failed: {e}", args.source, args.target);
                ExitCode::FAILURE
            }
        },
        Command::Exists(args) => {
            let exists = file_exists::<StdFileStream>(&args.path);
            println!("{exists}");
            if exists {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Command::Size(args) => {
            println!("{}", file_size::<StdFileStream>(&args.path));
            ExitCode::SUCCESS
        }
        Command::DosDate(args) => match args.action {
            DosDateAction::Decode(args) => match dos_date::decode(args.packed) {
                Ok(tm) => {
                    println!("{}", format_calendar(&tm));
                    if let Some(epoch) = dos_date::decode_to_epoch(args.packed) {
                        println!("{epoch}");
                    }
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    error!("{:#010x}: {e}", args.packed);
                    ExitCode::FAILURE
                }
            },
            DosDateAction::Encode(args) => {
                let tm = CalendarTime {
                    second: args.second.unwrap_or(0),
                    minute: args.minute.unwrap_or(0),
                    hour: args.hour.unwrap_or(0),
                    day: args.day,
                    month: args.month - 1,
                    year: args.year,
                    dst: None,
                };
                match dos_date::encode(&tm) {
                    0 => {
                        error!("{tm:?} cannot be stored as a dos date");
                        ExitCode::FAILURE
                    }
                    packed => {
                        println!("{packed:#010x}");
                        ExitCode::SUCCESS
                    }
                }
            }
        },
    }
}

/// Copies `length` bytes, or the whole source, through byte counting
/// streams. Returns the bytes read and written.
fn copy_file(
    source_path: &str,
    target_path: &str,
    length: Option<u64>,
) -> Result<(u64, u64), StreamError> {
    let length = length.unwrap_or_else(|| file_size::<StdFileStream>(source_path));

    let mut source_file = StdFileStream::new();
    let mut target_file = StdFileStream::new();
    let mut source = Passthru::with_base(&mut source_file);
    let mut target = Passthru::with_base(&mut target_file);
    source.open(source_path, Mode::Read)?;
    target.open(target_path, Mode::Write)?;

    let copied = copy(&mut target, &mut source, length);
    let closed = close_both(&mut target, &mut source);
    copied?;
    closed?;

    let (read, written) = (source.total_in()?, target.total_out()?);
    info!("Copied {source_path} to {target_path}: {read} in, {written} out");
    Ok((read, written))
}

/// Closes both streams and returns the first failure. A second failure is
/// only logged.
fn close_both(first: &mut dyn Stream, second: &mut dyn Stream) -> Result<(), StreamError> {
    match (first.close(), second.close()) {
        (Err(e), Err(other)) => {
            warn!("Second close also failed: {other}");
            Err(e)
        }
        (closed, other) => closed.and(other),
    }
}

fn format_calendar(tm: &CalendarTime) -> String {
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
        tm.year + 1900,
        tm.month + 1,
        tm.day,
        tm.hour,
        tm.minute,
        tm.second
    )
}
