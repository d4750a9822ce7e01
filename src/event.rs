use regex::Regex;

/// Marks the start of a new match.
pub const INIT_MARKER: &str = "InitGame:";
/// Marks a kill event.
pub const KILL_MARKER: &str = "Kill:";
/// The name the server uses when nobody did the killing (falls, lava, ...)
pub const WORLD: &str = "<world>";

/// One elimination, as read off a kill line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KillEvent {
    pub killer: String,
    pub victim: String,
    /// The `MOD_*` token, e.g. `MOD_RAILGUN`.
    pub means: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogLine {
    InitGame,
    Kill(KillEvent),
    /// Carries the kill marker but not the fields we need.
    MalformedKill,
    Other,
}

/// Sorts raw log lines into the kinds the aggregator cares about.
///
/// A kill line looks like
/// ```text
///  21:42 Kill: 1022 2 22: <world> killed Isgalamido by MOD_TRIGGER_HURT
/// ```
/// where the numbers are killer id, victim id and means id. Only the names
/// and the means token are kept.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    kill_re: Regex,
}

impl LineClassifier {
    pub fn new() -> Self {
        let kill_re = Regex::new(
            r"^(?:\d+:\d+\s+)?Kill:\s+\d+\s+\d+\s+\d+:\s+(?P<killer>.+?)\s+killed\s+(?P<victim>.+?)\s+by\s+(?P<means>MOD_\w+)",
        )
        .expect("kill line pattern compiles");
        LineClassifier { kill_re }
    }

    pub fn classify(&self, line: &str) -> LogLine {
        let line = line.trim();
        if line.contains(INIT_MARKER) {
            return LogLine::InitGame;
        }
        if !line.contains(KILL_MARKER) {
            return LogLine::Other;
        }
        match self.kill_re.captures(line) {
            Some(caps) => LogLine::Kill(KillEvent {
                killer: caps["killer"].trim().to_string(),
                victim: caps["victim"].trim().to_string(),
                means: caps["means"].to_string(),
            }),
            None => LogLine::MalformedKill,
        }
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}
