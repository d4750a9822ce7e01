use crate::align_output;
use crate::error::{Error, Result};
use crate::game::MatchSummary;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Wsv,
    Tsv,
    Csv,
    Vnl,
}

impl OutputFormat {
    pub const NAMES: &'static [&'static str] = &["json", "wsv", "tsv", "csv", "vnl"];

    fn header_start(self) -> &'static str {
        match self {
            OutputFormat::Vnl => "# ",
            _ => "",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "wsv" => Ok(OutputFormat::Wsv),
            "tsv" => Ok(OutputFormat::Tsv),
            "csv" => Ok(OutputFormat::Csv),
            "vnl" => Ok(OutputFormat::Vnl),
            _ => Err(std::format!("unrecognized output format '{}'", s)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    pub format: OutputFormat,
    /// Also report how many kills each `MOD_*` accounted for.
    pub means: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            format: OutputFormat::Json,
            means: false,
        }
    }
}

#[derive(serde::Serialize)]
struct GameView<'a> {
    total_kills: u64,
    players: &'a [String],
    kills: &'a BTreeMap<String, i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kills_by_means: Option<&'a BTreeMap<String, u64>>,
}

/// Serializes as `{"game_1": {...}, "game_2": {...}}`, keys in match order.
struct GamesView<'a> {
    games: &'a [MatchSummary],
    means: bool,
}

impl<'a> Serialize for GamesView<'a> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.games.len()))?;
        for game in self.games {
            let view = GameView {
                total_kills: game.total_kills,
                players: &game.players,
                kills: &game.kills,
                kills_by_means: if self.means {
                    Some(&game.kills_by_means)
                } else {
                    None
                },
            };
            map.serialize_entry(&game.label(), &view)?;
        }
        map.end()
    }
}

pub fn render(games: &[MatchSummary], options: &ReportOptions) -> Result<String> {
    match options.format {
        OutputFormat::Json => {
            let view = GamesView {
                games,
                means: options.means,
            };
            Ok(serde_json::to_string_pretty(&view)?)
        }
        format => render_table(games, format, options.means),
    }
}

fn render_table(games: &[MatchSummary], format: OutputFormat, means: bool) -> Result<String> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    for game in games {
        if game.players.is_empty() {
            rows.push(vec![
                game.label(),
                "-".to_string(),
                "-".to_string(),
                game.total_kills.to_string(),
            ]);
        }
        for player in &game.players {
            let kills = game.kills.get(player).copied().unwrap_or(0);
            rows.push(vec![
                game.label(),
                player.clone(),
                kills.to_string(),
                game.total_kills.to_string(),
            ]);
        }
    }
    let header = ["game", "player", "kills", "total_kills"];
    let mut out = table(&header, &rows, format)?;

    if means {
        let means_rows = games
            .iter()
            .flat_map(|game| {
                game.kills_by_means
                    .iter()
                    .map(move |(m, n)| vec![game.label(), m.clone(), n.to_string()])
            })
            .collect::<Vec<_>>();
        out.push('\n');
        out.push_str(&table(&["game", "means", "kills"], &means_rows, format)?);
    }
    Ok(out)
}

/// Whitespace-separated readers split on any blank, so blanks inside a cell
/// become `_` ("Dono da Bola" -> "Dono_da_Bola").
fn wsv_cell(cell: &str) -> String {
    cell.chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect()
}

fn table(header: &[&str], rows: &[Vec<String>], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Wsv | OutputFormat::Vnl => {
            let header: Vec<String> = header.iter().map(|h| wsv_cell(h)).collect();
            let rows: Vec<Vec<String>> = rows
                .iter()
                .map(|row| row.iter().map(|cell| wsv_cell(cell)).collect())
                .collect();
            //every column but the last is as wide as its widest cell
            let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count() + 1).collect();
            for row in &rows {
                for (w, cell) in widths.iter_mut().zip(row.iter()) {
                    *w = (*w).max(cell.chars().count() + 1);
                }
            }
            if let Some(last) = widths.last_mut() {
                *last = usize::MAX;
            }
            let mut lines = Vec::with_capacity(rows.len() + 1);
            lines.push(std::format!(
                "{}{}",
                format.header_start(),
                align_output(&header, &widths, " ")
            ));
            for row in &rows {
                lines.push(align_output(row, &widths, " "));
            }
            Ok(lines.join("\n"))
        }
        _ => {
            let delimiter = if format == OutputFormat::Tsv { b'\t' } else { b',' };
            let mut writer = csv::WriterBuilder::new()
                .delimiter(delimiter)
                .terminator(csv::Terminator::Any(b'\n'))
                .from_writer(Vec::new());
            writer.write_record(header)?;
            for row in rows {
                writer.write_record(row)?;
            }
            let bytes = writer
                .into_inner()
                .map_err(|e| Error::Csv(e.into_error().into()))?;
            let text = String::from_utf8_lossy(&bytes);
            Ok(text.trim_end_matches('\n').to_string())
        }
    }
}
