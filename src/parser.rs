use crate::error::{Error, LineError, Result};
use crate::event::{LineClassifier, LogLine, WORLD};
use crate::game::{MatchAccumulator, MatchSummary};
use std::borrow::Cow;
use std::io::BufRead;
use tracing::{debug, info, warn};

/// What to do with a kill that shows up before the first `InitGame`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrphanPolicy {
    /// Drop the event and note it in the report.
    Discard,
    /// Open an unannounced match and count the kill there.
    ImplicitMatch,
}

impl OrphanPolicy {
    pub const NAMES: &'static [&'static str] = &["discard", "implicit"];
}

impl std::str::FromStr for OrphanPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "discard" => Ok(OrphanPolicy::Discard),
            "implicit" => Ok(OrphanPolicy::ImplicitMatch),
            _ => Err(std::format!("unknown orphan policy '{}'", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ParseOptions {
    pub orphan_policy: OrphanPolicy,
    /// Killer name meaning "the map did it".
    pub world: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            orphan_policy: OrphanPolicy::Discard,
            world: WORLD.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParseReport {
    /// In the order the matches started.
    pub games: Vec<MatchSummary>,
    /// Lines that were recognized but could not be used.
    pub skipped: Vec<LineError>,
    /// Lines read, blank ones included.
    pub lines: usize,
}

impl ParseReport {
    pub fn total_kills(&self) -> u64 {
        self.games.iter().map(|g| g.total_kills).sum()
    }
}

/// Single-pass aggregator. Feed it lines, then `finish` it.
#[derive(Debug)]
pub struct LogParser {
    options: ParseOptions,
    classifier: LineClassifier,
    current: Option<MatchAccumulator>,
    report: ParseReport,
}

impl LogParser {
    pub fn new(options: ParseOptions) -> Self {
        LogParser {
            options,
            classifier: LineClassifier::new(),
            current: None,
            report: ParseReport::default(),
        }
    }

    pub fn feed(&mut self, line: &str) {
        self.report.lines += 1;
        let line_no = self.report.lines;
        match self.classifier.classify(line) {
            LogLine::InitGame => self.open_match(),
            LogLine::Kill(event) => {
                if self.current.is_none() {
                    match self.options.orphan_policy {
                        OrphanPolicy::ImplicitMatch => {
                            debug!(line = line_no, "kill before InitGame, opening implicit match");
                            self.open_match();
                        }
                        OrphanPolicy::Discard => {
                            self.skip(LineError::OrphanKillEvent { line: line_no });
                            return;
                        }
                    }
                }
                if let Some(acc) = self.current.as_mut() {
                    acc.record(&event, &self.options.world);
                }
            }
            LogLine::MalformedKill => self.skip(LineError::MalformedKillLine {
                line: line_no,
                text: line.trim().to_string(),
            }),
            LogLine::Other => (),
        }
    }

    pub fn finish(mut self) -> ParseReport {
        self.close_match();
        info!(
            games = self.report.games.len(),
            kills = self.report.total_kills(),
            skipped = self.report.skipped.len(),
            lines = self.report.lines,
            "parsed log"
        );
        self.report
    }

    fn open_match(&mut self) {
        self.close_match();
        let id = self.report.games.len() + 1;
        debug!(game = id, "match started");
        self.current = Some(MatchAccumulator::new(id));
    }

    fn close_match(&mut self) {
        if let Some(acc) = self.current.take() {
            let summary = acc.finish();
            debug!(
                game = summary.id,
                players = summary.players.len(),
                kills = summary.total_kills,
                "match finished"
            );
            self.report.games.push(summary);
        }
    }

    fn skip(&mut self, err: LineError) {
        warn!("{}", err);
        self.report.skipped.push(err);
    }
}

/// Aggregates an in-memory sequence of lines.
pub fn parse_lines<I, S>(lines: I, options: &ParseOptions) -> ParseReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = LogParser::new(options.clone());
    for line in lines {
        parser.feed(line.as_ref());
    }
    parser.finish()
}

pub fn parse_str(log: &str, options: &ParseOptions) -> ParseReport {
    parse_lines(log.lines(), options)
}

/// Like `parse_lines`, but a read error stops the parse. Bytes that are not
/// UTF-8 (Latin-1 names, a line cut mid-character) are decoded lossily.
pub fn parse_reader<R: BufRead>(mut reader: R, options: &ParseOptions) -> Result<ParseReport> {
    let mut parser = LogParser::new(options.clone());
    let mut buf = Vec::new();
    let mut line_no = 0;
    loop {
        buf.clear();
        line_no += 1;
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| Error::Io {
                line: line_no,
                source,
            })?;
        if read == 0 {
            break;
        }
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        let line = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = line {
            warn!(line = line_no, "invalid UTF-8, decoded with replacement characters");
        }
        parser.feed(&line);
    }
    Ok(parser.finish())
}
