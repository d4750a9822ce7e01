extern crate clap;
use anyhow::{anyhow, Context};
use clap::{App,Arg};
use itertools::Itertools;
use quake_log_tools::{align_output, leaderboard, logger, parse_reader, OrphanPolicy, ParseOptions};
use std::io::{Write,stdout};

/**
 * Totals across every match in a log: games, kills, players and a leaderboard
 */
fn main() -> anyhow::Result<()> {

    let input_args = App::new("qlog-summary")
        .version( &quake_log_tools::version()[..] )
        .author("Joshua Vander Hook <josh@vanderhook.info>")
        .about(
            &
                (quake_log_tools::about()
                +"\n This tool sums kills over all matches and ranks players. For per-match numbers, see qlog-parse"
                ) [..]
            )
        .arg(Arg::with_name("input")
        .required(false)
        .help("The log to read. Reads stdin when omitted or '-'")
        )
        .arg(Arg::with_name("top")
        .short("n")
        .default_value("5")
        .help("How many players to list in the leaderboard")
        )
        .arg(Arg::with_name("orphans")
        .long("orphans")
        .default_value("discard")
        .possible_values(OrphanPolicy::NAMES)
        .help("What to do with kills logged before the first InitGame: drop them, or count them in an implicit first match")
        )
        .arg(Arg::with_name("verbose")
        .short("v")
        .multiple(true)
        .help("More logging on stderr. Repeat for more. RUST_LOG overrides this")
        )
        .get_matches();

    logger::init_logger(input_args.occurrences_of("verbose")).map_err(|e| anyhow!(e))?;

    let top = input_args.value_of("top").unwrap_or("5").parse::<usize>()
        .context("-n expects a whole number")?;
    let parse_options = ParseOptions{
        orphan_policy: input_args.value_of("orphans").unwrap_or("discard")
            .parse::<OrphanPolicy>().map_err(|e| anyhow!(e))?,
        ..ParseOptions::default()
    };

    let path = input_args.value_of("input");
    let reader = quake_log_tools::open_log(path)
        .with_context(|| std::format!("could not open log '{}'", path.unwrap_or("-")))?;
    let report = parse_reader(reader, &parse_options)?;
    let board = leaderboard(&report.games);

    let mut out = stdout();
    writeln!(out,"Total games: {}",board.total_games)?;
    writeln!(out,"Total kills (all games): {}",board.total_kills)?;
    writeln!(out,"Games without kills: {}",board.empty_games)?;
    writeln!(out,"Unique players: {}",board.players.len())?;
    writeln!(out,"Players: {}",board.players.iter().join(", "))?;
    if !report.skipped.is_empty(){
        writeln!(out,"Skipped lines: {}",report.skipped.len())?;
    }

    if board.standings.is_empty(){
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out,"Top {} players (by net kills):",top.min(board.standings.len()))?;
    let name_width = board.top(top).iter().map(|s| s.player.len()).max().unwrap_or(0).max(6) + 1;
    let lengths = vec![4, name_width, 6, usize::MAX];
    let header = vec!["#".to_string(),"player".to_string(),"kills".to_string(),"games".to_string()];
    writeln!(out,"{}",align_output(&header,&lengths," "))?;
    for (rank,s) in board.top(top).iter().enumerate(){
        let row = vec![
            std::format!("{}",rank+1),
            s.player.clone(),
            std::format!("{}",s.kills),
            std::format!("{}",s.games),
        ];
        writeln!(out,"{}",align_output(&row,&lengths," "))?;
    }
    Ok(())
}
