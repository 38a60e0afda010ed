//! End-to-end tests for the Isolation search agent
//!
//! This suite exercises the public API only:
//! - Minimax and alpha-beta agree on real positions
//! - The agent answers with a legal move under every clock
//! - Full games through the match runner end cleanly
//! - A tournament can be configured from TOML and run

use isolation_agent::agent::ai::{
    countdown, improved_score, Deadline, Difficulty, HeuristicKind, SearchMethod, SearchPlayer,
    Searcher,
};
use isolation_agent::agent::player::{EndReason, Player};
use isolation_agent::agent::{GreedyPlayer, RandomPlayer};
use isolation_agent::config::{SearchConfig, TournamentConfig};
use isolation_agent::game_repr::{Board, GameState, Move, PlayerId};
use isolation_agent::orchestrator::{play_game, random_opening};
use isolation_agent::tournament::run_tournament;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::Cell;

fn random_position(rng: &mut StdRng, width: usize, height: usize, plies: u32) -> Board {
    let mut board = Board::new(width, height).unwrap();
    random_opening(&mut board, plies, rng).unwrap();
    board
}

#[test]
fn test_alphabeta_matches_minimax_on_random_positions() {
    let mut rng = StdRng::seed_from_u64(0x1507);
    let time_left = || f64::INFINITY;
    let heuristic = improved_score::<Board>;

    for _ in 0..40 {
        let plies = rng.gen_range(2..10);
        let board = random_position(&mut rng, 5, 5, plies);
        let me = board.active_player();

        for depth in 1..=4 {
            let mut minimax = Searcher::new(&heuristic, Deadline::new(&time_left, 10.0), me);
            let mut alphabeta = Searcher::new(&heuristic, Deadline::new(&time_left, 10.0), me);

            let expected = minimax.search(&board, depth, SearchMethod::Minimax).unwrap();
            let actual = alphabeta.search(&board, depth, SearchMethod::AlphaBeta).unwrap();

            assert_eq!(expected, actual, "depth {} on\n{}", depth, board);
            assert!(alphabeta.nodes() <= minimax.nodes());
        }
    }
}

#[test]
fn test_agent_always_answers_legally() {
    let mut rng = StdRng::seed_from_u64(99);

    for difficulty in Difficulty::all() {
        let mut ai: SearchPlayer<Board> = SearchPlayer::with_difficulty(*difficulty);
        for _ in 0..5 {
            let plies = rng.gen_range(0..8);
            let board = random_position(&mut rng, 6, 6, plies);
            let legal = board.legal_moves();
            let mv = ai.get_move(&board, &legal, &countdown(50.0));

            if legal.is_empty() {
                assert_eq!(mv, Move::NONE);
            } else {
                assert!(legal.contains(&mv), "{} played {} on\n{}", ai.name(), mv, board);
            }
        }
    }
}

#[test]
fn test_exhausted_clock_gives_first_legal_move() {
    let board = Board::default();
    let legal = board.legal_moves();
    let mut ai: SearchPlayer<Board> = SearchPlayer::with_difficulty(Difficulty::Expert);

    // Below the 10 ms safety margin from the first reading
    let mv = ai.get_move(&board, &legal, &countdown(5.0));

    assert_eq!(mv, legal[0]);
    assert_eq!(ai.last_search(), None);
}

#[test]
fn test_same_clock_readings_same_move() {
    let mut rng = StdRng::seed_from_u64(5);
    let board = random_position(&mut rng, 7, 7, 4);
    let legal = board.legal_moves();

    let decide = || {
        let reads = Cell::new(0u32);
        let clock = || {
            reads.set(reads.get() + 1);
            if reads.get() <= 300 {
                100.0
            } else {
                0.0
            }
        };
        let mut ai: SearchPlayer<Board> =
            SearchPlayer::new(SearchConfig::iterative(SearchMethod::AlphaBeta, HeuristicKind::Improved));
        let mv = ai.get_move(&board, &legal, &clock);
        (mv, ai.last_search())
    };

    assert_eq!(decide(), decide());
}

#[test]
fn test_search_agent_plays_full_game_against_random() {
    for seed in 0..4 {
        let mut ai: SearchPlayer<Board> =
            SearchPlayer::new(SearchConfig::fixed(SearchMethod::AlphaBeta, 3, HeuristicKind::Improved));
        let mut random = RandomPlayer::new(seed);
        let mut board = Board::new(5, 5).unwrap();
        random_opening(&mut board, 2, &mut StdRng::seed_from_u64(seed)).unwrap();

        let record = play_game(board, [&mut ai, &mut random], 1_000.0);

        assert_eq!(record.reason, EndReason::NoLegalMoves);
        assert!(record.final_board.is_loser(record.winner.opponent()));
    }
}

#[test]
fn test_iterative_agents_play_each_other() {
    let mut first: SearchPlayer<Board> = SearchPlayer::with_difficulty(Difficulty::Expert);
    let mut second: GreedyPlayer<Board> = GreedyPlayer::new(HeuristicKind::OpenMove);

    let record = play_game(Board::default(), [&mut first, &mut second], 100.0);

    assert_eq!(record.reason, EndReason::NoLegalMoves);
    assert!(first.last_search().is_some());
    assert_ne!(record.final_board.location(PlayerId::First), None);
}

#[test]
fn test_tournament_from_toml() {
    let config = TournamentConfig::from_toml(
        r#"
        time_limit_ms = 500.0
        games_per_pairing = 1
        opening_plies = 2
        seed = 3
        threads = 2
        board_width = 5
        board_height = 5

        [[contenders]]
        name = "Random"
        kind = "random"

        [[contenders]]
        name = "MM_Null"
        [contenders.kind.search]
        method = "minimax"
        iterative = false
        search_depth = 2
        heuristic = "null"

        [[contenders]]
        name = "AB_Improved"
        [contenders.kind.search]
        method = "alphabeta"
        iterative = false
        search_depth = 3
        "#,
    )
    .unwrap();

    let report = run_tournament(&config).unwrap();

    assert_eq!(report.games_played, 6);
    assert_eq!(report.standings.len(), 3);
    assert!(report.standings.iter().all(|s| s.timeouts == 0 && s.forfeits == 0));
}
