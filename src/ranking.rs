use crate::game::MatchSummary;
use itertools::Itertools;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// One player's standing across every match in a log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    pub player: String,
    /// Net kills summed over all games.
    pub kills: i64,
    pub games: usize,
}

/// Most kills first; equal scores fall back to name order.
pub fn by_net_kills(a: &Standing, b: &Standing) -> Ordering {
    b.kills.cmp(&a.kills).then_with(|| a.player.cmp(&b.player))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaderboard {
    pub total_games: usize,
    pub total_kills: u64,
    /// Matches that ended without a single kill.
    pub empty_games: usize,
    /// Every player seen in any game, sorted.
    pub players: Vec<String>,
    /// Sorted with `by_net_kills`.
    pub standings: Vec<Standing>,
}

impl Leaderboard {
    pub fn top(&self, n: usize) -> &[Standing] {
        &self.standings[..n.min(self.standings.len())]
    }
}

pub fn leaderboard(games: &[MatchSummary]) -> Leaderboard {
    let mut totals: BTreeMap<&str, (i64, usize)> = BTreeMap::new();
    for game in games {
        for player in &game.players {
            let kills = game.kills.get(player).copied().unwrap_or(0);
            let entry = totals.entry(player.as_str()).or_insert((0, 0));
            entry.0 += kills;
            entry.1 += 1;
        }
    }

    let players = totals.keys().map(|p| p.to_string()).collect();
    let standings = totals
        .into_iter()
        .map(|(player, (kills, games))| Standing {
            player: player.to_string(),
            kills,
            games,
        })
        .sorted_by(by_net_kills)
        .collect();

    Leaderboard {
        total_games: games.len(),
        total_kills: games.iter().map(|g| g.total_kills).sum(),
        empty_games: games.iter().filter(|g| g.is_empty()).count(),
        players,
        standings,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parser::{parse_str, ParseOptions};
    use claim::{assert_gt, assert_lt};

    const LOG: &str = "\
0:00 InitGame: a
0:01 Kill: 2 3 7: Zeh killed Mocinha by MOD_SHOTGUN
0:02 Kill: 2 3 7: Zeh killed Mocinha by MOD_SHOTGUN
0:03 Kill: 3 2 7: Mocinha killed Zeh by MOD_SHOTGUN
0:04 InitGame: b
0:05 Kill: 1022 2 22: <world> killed Zeh by MOD_FALLING
0:06 Kill: 4 3 7: Isgalamido killed Mocinha by MOD_RAILGUN
0:07 InitGame: c
";

    #[test]
    fn test_totals() {
        let report = parse_str(LOG, &ParseOptions::default());
        let board = leaderboard(&report.games);
        assert_eq!(board.total_games, 3);
        assert_eq!(board.total_kills, 5);
        assert_eq!(board.empty_games, 1);
        assert_eq!(board.players, vec!["Isgalamido", "Mocinha", "Zeh"]);
    }

    #[test]
    fn test_standings_order() {
        let report = parse_str(LOG, &ParseOptions::default());
        let board = leaderboard(&report.games);
        let names: Vec<&str> = board.standings.iter().map(|s| s.player.as_str()).collect();
        // Zeh 2-1=1, Isgalamido 1, Mocinha 1: all tied, so by name
        assert_eq!(names, vec!["Isgalamido", "Mocinha", "Zeh"]);
        let zeh = board.standings.iter().find(|s| s.player == "Zeh").unwrap();
        assert_eq!(zeh.kills, 1);
        assert_eq!(zeh.games, 2);
        assert_eq!(board.top(2).len(), 2);
        assert_eq!(board.top(10).len(), 3);
    }

    #[test]
    fn test_by_net_kills() {
        let a = Standing { player: "a".to_string(), kills: 5, games: 1 };
        let b = Standing { player: "b".to_string(), kills: -2, games: 1 };
        let c = Standing { player: "c".to_string(), kills: 5, games: 3 };
        assert_eq!(by_net_kills(&a, &b), Ordering::Less);
        assert_eq!(by_net_kills(&b, &a), Ordering::Greater);
        assert_eq!(by_net_kills(&a, &c), Ordering::Less);
        assert_gt!(a.kills, b.kills);
        assert_lt!(b.kills, 0);
    }

    #[test]
    fn test_empty() {
        let board = leaderboard(&[]);
        assert_eq!(board.total_games, 0);
        assert_eq!(board.empty_games, 0);
        assert!(board.standings.is_empty());
        assert!(board.top(5).is_empty());
    }
}
