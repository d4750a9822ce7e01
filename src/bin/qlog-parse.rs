extern crate clap;
use anyhow::{anyhow, Context};
use clap::{App,Arg};
use quake_log_tools::{logger, parse_reader, render, OrphanPolicy, OutputFormat, ParseOptions, ReportOptions};
use std::io::{Write,stdout};

/**
 * Reads a server log and prints kill statistics for every match in it
 */
fn main() -> anyhow::Result<()> {

    let input_args = App::new("qlog-parse")
        .version( &quake_log_tools::version()[..] )
        .author("Joshua Vander Hook <josh@vanderhook.info>")
        .about(
            &
                (quake_log_tools::about()
                +"\n This tool prints players, kills and total kills for each match. For totals across matches, see qlog-summary"
                ) [..]
            )
        .arg(Arg::with_name("input")
        .required(false)
        .help("The log to read. Reads stdin when omitted or '-'")
        )
        .arg(Arg::with_name("out_format")
        .required(false)
        .short("o")
        .default_value("json")
        .possible_values(OutputFormat::NAMES)
        .help("Output format which can be one of JSON, Vnlog or Whitespace-, Tab-, or Comma-seperated.")
        )
        .arg(Arg::with_name("orphans")
        .long("orphans")
        .default_value("discard")
        .possible_values(OrphanPolicy::NAMES)
        .help("What to do with kills logged before the first InitGame: drop them, or count them in an implicit first match")
        )
        .arg(Arg::with_name("means")
        .long("means")
        .help("Also report kills per means of death (MOD_*)")
        )
        .arg(Arg::with_name("verbose")
        .short("v")
        .multiple(true)
        .help("More logging on stderr. Repeat for more. RUST_LOG overrides this")
        )
        .get_matches();

    logger::init_logger(input_args.occurrences_of("verbose")).map_err(|e| anyhow!(e))?;

    let parse_options = ParseOptions{
        orphan_policy: input_args.value_of("orphans").unwrap_or("discard")
            .parse::<OrphanPolicy>().map_err(|e| anyhow!(e))?,
        ..ParseOptions::default()
    };
    let report_options = ReportOptions{
        format: input_args.value_of("out_format").unwrap_or("json")
            .parse::<OutputFormat>().map_err(|e| anyhow!(e))?,
        means: input_args.is_present("means"),
    };

    let path = input_args.value_of("input");
    let reader = quake_log_tools::open_log(path)
        .with_context(|| std::format!("could not open log '{}'", path.unwrap_or("-")))?;
    let report = parse_reader(reader, &parse_options)?;
    if !report.skipped.is_empty(){
        tracing::warn!("skipped {} of {} lines", report.skipped.len(), report.lines);
    }

    let output = render(&report.games, &report_options)?;
    writeln!(stdout(),"{}",output)?;
    Ok(())
}
