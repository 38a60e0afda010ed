//! Round-robin tournament between configured contenders.
//!
//! Every ordered pair of contenders plays `games_per_pairing` games, so each
//! pair meets from both seats. Game `n` of A-vs-B and game `n` of B-vs-A start
//! from the same seeded random opening, which keeps the comparison fair when
//! the contenders themselves are deterministic.
//!
//! Games are independent and run on a `rayon` pool. Each worker builds its own
//! players, so nothing but the configuration is shared between threads.

use crate::agent::ai::SearchPlayer;
use crate::agent::player::{EndReason, GameResult, Player};
use crate::agent::{GreedyPlayer, RandomPlayer};
use crate::config::{ContenderConfig, ContenderKind, TournamentConfig};
use crate::error::TournamentError;
use crate::game_repr::{Board, PlayerId};
use crate::orchestrator::{play_game, random_opening};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::fmt;

/// Tally of one contender across the whole tournament.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    /// Losses caused by answering after the clock ran out
    pub timeouts: u32,
    /// Losses caused by returning a move outside the legal list
    pub forfeits: u32,
}

impl Standing {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            wins: 0,
            losses: 0,
            timeouts: 0,
            forfeits: 0,
        }
    }

    pub fn games(&self) -> u32 {
        self.wins + self.losses
    }

    /// Fraction of games won, 0.0 before any game.
    pub fn win_rate(&self) -> f64 {
        match self.games() {
            0 => 0.0,
            games => f64::from(self.wins) / f64::from(games),
        }
    }

    fn record(&mut self, won: bool, reason: EndReason) {
        if won {
            self.wins += 1;
            return;
        }
        self.losses += 1;
        match reason {
            EndReason::Timeout => self.timeouts += 1,
            EndReason::IllegalMove => self.forfeits += 1,
            EndReason::NoLegalMoves => {}
        }
    }
}

/// Final standings, best win rate first. Ties keep configuration order.
#[derive(Debug, Clone, PartialEq)]
pub struct TournamentReport {
    pub standings: Vec<Standing>,
    pub games_played: u32,
}

impl fmt::Display for TournamentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .standings
            .iter()
            .map(|s| s.name.len())
            .max()
            .unwrap_or(0)
            .max("Contender".len());

        writeln!(
            f,
            "{:<width$}  {:>5}  {:>5}  {:>8}  {:>8}  {:>7}",
            "Contender", "Won", "Lost", "Timeouts", "Forfeits", "Win %"
        )?;
        for s in &self.standings {
            writeln!(
                f,
                "{:<width$}  {:>5}  {:>5}  {:>8}  {:>8}  {:>6.1}%",
                s.name,
                s.wins,
                s.losses,
                s.timeouts,
                s.forfeits,
                s.win_rate() * 100.0
            )?;
        }
        write!(f, "{} games played", self.games_played)
    }
}

/// One scheduled game: `first` plays [`PlayerId::First`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fixture {
    first: usize,
    second: usize,
    round: u32,
}

fn schedule(contenders: usize, games_per_pairing: u32) -> Vec<Fixture> {
    let mut fixtures = Vec::new();
    for first in 0..contenders {
        for second in 0..contenders {
            if first == second {
                continue;
            }
            for round in 0..games_per_pairing {
                fixtures.push(Fixture {
                    first,
                    second,
                    round,
                });
            }
        }
    }
    fixtures
}

/// Opening seed shared by both seat orders of the same pairing and round.
fn opening_seed(base: u64, fixture: &Fixture) -> u64 {
    let lo = fixture.first.min(fixture.second) as u64;
    let hi = fixture.first.max(fixture.second) as u64;
    let key = (lo << 40) | (hi << 20) | u64::from(fixture.round);
    base ^ key.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Instantiate the player described by `contender`. `seed` drives any
/// randomness the player has.
pub fn build_player(contender: &ContenderConfig, seed: u64) -> Box<dyn Player<Board>> {
    let name = contender.name.as_str();
    match contender.kind {
        ContenderKind::Random => Box::new(RandomPlayer::new(seed).named(name)),
        ContenderKind::Greedy { heuristic } => Box::new(GreedyPlayer::<Board>::new(heuristic).named(name)),
        ContenderKind::Search(config) => Box::new(SearchPlayer::<Board>::new(config).named(name)),
    }
}

fn play_fixture(config: &TournamentConfig, fixture: &Fixture) -> Result<GameResult, TournamentError> {
    let mut rng = StdRng::seed_from_u64(opening_seed(config.seed, fixture));
    let mut board = config.board()?;
    let opening = random_opening(&mut board, config.opening_plies, &mut rng)?;

    let mut first = build_player(&config.contenders[fixture.first], rng.gen());
    let mut second = build_player(&config.contenders[fixture.second], rng.gen());
    debug!(
        "{} vs {} round {} from opening {:?}",
        first.name(),
        second.name(),
        fixture.round,
        opening
    );

    let record = play_game(board, [&mut *first, &mut *second], config.time_limit_ms);
    Ok(record.result())
}

/// Validate `config`, play every fixture and tally the results.
pub fn run_tournament(config: &TournamentConfig) -> Result<TournamentReport, TournamentError> {
    config.validate()?;

    let threads = config.threads.unwrap_or_else(num_cpus::get);
    let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;
    let fixtures = schedule(config.contenders.len(), config.games_per_pairing);
    info!(
        "{} contenders, {} games on {} threads, {} ms per move",
        config.contenders.len(),
        fixtures.len(),
        threads,
        config.time_limit_ms
    );

    let results = pool.install(|| {
        fixtures
            .par_iter()
            .map(|fixture| play_fixture(config, fixture).map(|result| (*fixture, result)))
            .collect::<Result<Vec<_>, TournamentError>>()
    })?;

    let mut standings: Vec<Standing> = config
        .contenders
        .iter()
        .map(|contender| Standing::new(&contender.name))
        .collect();
    for (fixture, result) in &results {
        let first_won = result.winner == PlayerId::First;
        standings[fixture.first].record(first_won, result.reason);
        standings[fixture.second].record(!first_won, result.reason);
    }
    standings.sort_by(|a, b| b.win_rate().total_cmp(&a.win_rate()));

    Ok(TournamentReport {
        standings,
        games_played: results.len() as u32,
    })
}
