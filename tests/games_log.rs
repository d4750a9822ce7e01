use claim::{assert_ok, assert_some};
use quake_log_tools::{leaderboard, parse_reader, parse_str, render, OrphanPolicy, ParseOptions, ReportOptions, WORLD};

const GAMES_LOG: &str = r"  0:00 ------------------------------------------------------------
  0:00 InitGame: \sv_floodProtect\1\sv_maxPing\0\sv_minPing\0\sv_maxRate\10000\sv_minRate\0\sv_hostname\Code Miner Server\g_gametype\0
 15:00 Exit: Timelimit hit.
 20:34 ClientConnect: 2
 20:34 ClientUserinfoChanged: 2 n\Isgalamido\t\0\model\xian/default\hmodel\xian/default
 20:37 ------------------------------------------------------------
 20:37 InitGame: \sv_floodProtect\1\sv_maxPing\0\sv_minPing\0\sv_maxRate\10000\sv_minRate\0\sv_hostname\Code Miner Server\g_gametype\0
 20:38 ClientConnect: 2
 20:54 Kill: 1022 2 22: <world> killed Isgalamido by MOD_TRIGGER_HURT
 21:07 Kill: 1022 2 22: <world> killed Isgalamido by MOD_TRIGGER_HURT
 21:42 Kill: 1022 2 22: <world> killed Isgalamido by MOD_TRIGGER_HURT
 22:06 Kill: 2 3 7: Isgalamido killed Mocinha by MOD_ROCKET_SPLASH
 22:11 Item: 2 item_quad
 22:18 Kill: 2 2 7: Isgalamido killed Isgalamido by MOD_ROCKET_SPLASH
 22:40 Kill: 2 2 7: Isgalamido killed Isgalamido by MOD_ROCKET_SPLASH
 23:06 Kill: 1022 2 22: <world> killed Isgalamido by MOD_TRIGGER_HURT
 25:05 Kill: 1022 2 22: <world> killed Isgalamido by MOD_TRIGGER_HURT
 25:41 Kill: 1022 2 19: <world> killed Isgalamido by MOD_FALLING
 26:09 Kill: 1022 2 19: <world> killed Isgalamido by MOD_FALLING
 26:09 Kill: 3 2 6: Mocinha killed Isgal
 26:10 ShutdownGame:
 26:10 ------------------------------------------------------------
  0:00 ------------------------------------------------------------
  0:00 InitGame: \capturelimit\8\g_maxGameClients\0\timelimit\15\fraglimit\20
  1:47 Kill: 5 7 7: Assasinu Credi killed Dono da Bola by MOD_ROCKET_SPLASH
  1:52 Kill: 1022 5 22: <world> killed Assasinu Credi by MOD_TRIGGER_HURT
  2:01 Kill: 7 5 10: Dono da Bola killed Assasinu Credi by MOD_RAILGUN
  2:04 Kill: 7 5 10: Dono da Bola killed Assasinu Credi by MOD_RAILGUN
";

fn games() -> quake_log_tools::ParseReport {
    parse_str(GAMES_LOG, &ParseOptions::default())
}

#[test]
fn one_summary_per_init_game() {
    let report = games();
    let inits = GAMES_LOG.lines().filter(|l| l.contains("InitGame:")).count();
    assert_eq!(report.games.len(), inits);
    let labels: Vec<String> = report.games.iter().map(|g| g.label()).collect();
    assert_eq!(labels, vec!["game_1", "game_2", "game_3"]);
}

#[test]
fn total_kills_match_kill_lines() {
    let report = games();
    assert_eq!(report.games[0].total_kills, 0);
    assert_eq!(report.games[1].total_kills, 10);
    assert_eq!(report.games[2].total_kills, 4);
    // the truncated kill line is the only thing skipped
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].line(), 20);
}

#[test]
fn world_kills_debit_victims() {
    let report = games();
    let game = &report.games[1];
    assert_eq!(game.players, vec!["Isgalamido", "Mocinha"]);
    // 3 kills of his own, 7 deaths to the world
    assert_eq!(assert_some!(game.kills.get("Isgalamido")), &-4);
    assert_eq!(assert_some!(game.kills.get("Mocinha")), &0);

    let game = &report.games[2];
    assert_eq!(game.players, vec!["Assasinu Credi", "Dono da Bola"]);
    assert_eq!(game.kills.get("Assasinu Credi"), Some(&0));
    assert_eq!(game.kills.get("Dono da Bola"), Some(&2));
}

#[test]
fn world_is_never_a_player() {
    for game in games().games {
        assert!(!game.players.iter().any(|p| p == WORLD));
        assert!(!game.kills.contains_key(WORLD));
        let mut sorted = game.players.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted, game.players);
    }
}

#[test]
fn reader_and_str_agree() {
    let from_reader = assert_ok!(parse_reader(GAMES_LOG.as_bytes(), &ParseOptions::default()));
    assert_eq!(from_reader, games());
    assert_eq!(games(), games());
}

#[test]
fn implicit_policy_changes_nothing_without_orphans() {
    let options = ParseOptions {
        orphan_policy: OrphanPolicy::ImplicitMatch,
        ..ParseOptions::default()
    };
    assert_eq!(parse_str(GAMES_LOG, &options), games());
}

#[test]
fn json_report_and_leaderboard() {
    let report = games();
    let text = assert_ok!(render(&report.games, &ReportOptions::default()));
    let value: serde_json::Value = assert_ok!(serde_json::from_str(&text));
    assert_eq!(value["game_2"]["total_kills"], 10);
    assert_eq!(value["game_3"]["kills"]["Dono da Bola"], 2);

    let board = leaderboard(&report.games);
    assert_eq!(board.total_games, 3);
    assert_eq!(board.total_kills, 14);
    assert_eq!(board.empty_games, 1);
    assert_eq!(board.standings[0].player, "Dono da Bola");
    assert_eq!(board.standings.last().map(|s| s.player.as_str()), Some("Isgalamido"));
}
