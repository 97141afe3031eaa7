use crate::rlc::row::{Direction, LogRecord};
use anyhow::Context;
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

/// RLC PDU line, matched anywhere in the input line.
///
/// Example:
/// [RLC][DL][UE_ID=7][RB_ID=1][SN=42] TX AMD PDU, Size=100 bytes, @T=0.500s
///
/// RB id, SN and the TX/RX + AMD/UMD markers must be present but are not kept.
const RLC_LINE_RE: &str = r"\[RLC\]\[(?P<dir>UL|DL)\]\[UE_ID=(?P<ue>\d+)\]\[RB_ID=\d+\]\[SN=\d+\]\s*(?:TX|RX)\s*(?:AMD|UMD)\s*PDU.*Size=(?P<size>\d+)\s*bytes.*@\s*T=(?P<time>[\d.]+)s";

static RLC_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(RLC_LINE_RE).expect("RLC line pattern is valid"));

/// Extract a record from one line, or `None` if the line is not an RLC PDU
/// line. Numeric fields that do not parse (overflow, `1.2.3`) also give `None`.
pub fn parse_line(line: &str) -> Option<LogRecord> {
    let caps = RLC_LINE.captures(line)?;

    let direction = Direction::from_tag(caps.name("dir")?.as_str())?;
    let ue_id = caps.name("ue")?.as_str().parse().ok()?;
    let size = caps.name("size")?.as_str().parse().ok()?;
    let time = caps.name("time")?.as_str().parse().ok()?;

    Some(LogRecord {
        direction,
        ue_id,
        size,
        time,
    })
}

/// Read `reader` to completion and collect every matching record in input order.
///
/// Lines end at `\n`, `\r\n` or a bare `\r`. Read errors (including invalid
/// UTF-8) abort the whole scan.
pub fn parse_lines<R: BufRead>(mut reader: R) -> anyhow::Result<Vec<LogRecord>> {
    let mut out = Vec::new();
    let mut skipped = 0usize;
    let mut chunk = String::new();
    let mut lineno = 0usize;

    loop {
        chunk.clear();
        let n = reader
            .read_line(&mut chunk)
            .with_context(|| format!("read line {}", lineno + 1))?;
        if n == 0 {
            break;
        }

        let text = chunk.strip_suffix('\n').unwrap_or(&chunk);
        let text = text.strip_suffix('\r').unwrap_or(text);
        for line in text.split('\r') {
            lineno += 1;
            match parse_line(line) {
                Some(record) => out.push(record),
                None => skipped += 1,
            }
        }
    }

    log::debug!("matched {} RLC records, skipped {} lines", out.len(), skipped);
    Ok(out)
}

/// Open an RLC log file and extract all records from it.
pub fn parse_log_file(path: &Path) -> anyhow::Result<Vec<LogRecord>> {
    let file = File::open(path).with_context(|| format!("open log file {}", path.display()))?;
    log::info!("reading {}", path.display());

    parse_lines(BufReader::new(file)).with_context(|| format!("read log file {}", path.display()))
}
