pub mod error;
pub mod event;
pub mod game;
pub mod logger;
pub mod parser;
pub mod ranking;
pub mod report;

pub use error::{Error, LineError, Result};
pub use event::{KillEvent, LineClassifier, LogLine, WORLD};
pub use game::{MatchAccumulator, MatchSummary};
pub use parser::{parse_lines, parse_reader, parse_str, LogParser, OrphanPolicy, ParseOptions, ParseReport};
pub use ranking::{leaderboard, Leaderboard, Standing};
pub use report::{render, OutputFormat, ReportOptions};

use std::fs::File;
use std::io::{self, BufRead, BufReader};

pub fn version()->String{
    std::format!("{}-Alpha", env!("CARGO_PKG_VERSION"))
}
pub fn about()->String{
    "Per-match kill statistics from a Quake 3 Arena server log. \n\
    Reads games.log (or stdin), splits it at every InitGame, and counts kills \n\
    per player. Deaths caused by <world> cost the victim a point.".to_string()
}

/// Opens `path`, or stdin when there is no path or it is `-`.
pub fn open_log(path: Option<&str>) -> io::Result<Box<dyn BufRead>> {
    match path {
        None | Some("-") => Ok(Box::new(BufReader::new(io::stdin()))),
        Some(p) => Ok(Box::new(BufReader::new(File::open(p)?))),
    }
}

/// Pads every column but the last to `widths[i]` characters, truncating
/// longer cells.
pub fn align_output(outs: &[String],widths:&[usize],seperator:&str)
-> String{
    let len:usize=widths.iter().filter(|x| x < &&usize::MAX ).sum();
    let final_len = len + outs.len().saturating_sub(1);//<-seperators
    let mut ret = String::with_capacity(final_len);
    for i in 0..outs.len(){
        let wi=widths[i];
        let s = &outs[i];
        let end = s.char_indices().nth(wi).map(|(idx,_)| idx).unwrap_or(s.len());
        let slen = s[..end].chars().count();
        ret.push_str(&s[..end]);
        if i<outs.len()-1{
            ret.push_str(seperator);
            for _ in slen..wi{
                ret.push(' ');
            }
        }
    }
    ret
}
