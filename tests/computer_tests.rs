//! Computer player integration tests: Grundy values and optimal play.

use grundy_game::ai::{mex, Computer, DecisionKind, GrundyTable};
use grundy_game::core::{GameRng, GameState, PlayerId};

/// Grundy's game values (OEIS A002188), n = 0..=40.
const KNOWN_VALUES: [u32; 41] = [
    0, 0, 0, 1, 0, 2, 1, 0, 2, 1, 0, 2, 1, 3, 2, 1, 3, 2, 4, 3, 0, 4, 3, 0, 4, 3, 0, 4, 1, 2, 3, 1,
    2, 4, 1, 2, 4, 1, 2, 4, 1,
];

fn computer() -> Computer {
    Computer::new(GameRng::new(42))
}

/// Every layout of up to three piles with sizes in `1..=max`.
fn small_layouts(max: u32) -> Vec<Vec<u32>> {
    let mut layouts = Vec::new();
    for a in 1..=max {
        layouts.push(vec![a]);
        for b in 1..=max {
            layouts.push(vec![a, b]);
            for c in 1..=max {
                layouts.push(vec![a, b, c]);
            }
        }
    }
    layouts
}

// =============================================================================
// Grundy values
// =============================================================================

#[test]
fn test_table_matches_known_sequence() {
    let mut table = GrundyTable::new();
    for (n, &expected) in KNOWN_VALUES.iter().enumerate() {
        assert_eq!(table.value(n as u32), expected, "g({})", n);
    }
}

#[test]
fn test_table_order_independent() {
    let mut ascending = GrundyTable::new();
    for n in 0..=40 {
        ascending.value(n);
    }

    let mut descending = GrundyTable::new();
    for n in (0..=40).rev() {
        assert_eq!(descending.value(n), ascending.value(n));
    }
}

#[test]
fn test_mex() {
    assert_eq!(mex([]), 0);
    assert_eq!(mex([0, 1, 2]), 3);
    assert_eq!(mex([1, 2]), 0);
    assert_eq!(mex([0, 0, 2, 5]), 1);
}

// =============================================================================
// Optimal play
// =============================================================================

#[test]
fn test_zero_nim_sum_positions_have_no_winning_move() {
    let mut c = computer();

    for sizes in small_layouts(9) {
        let state = GameState::with_sizes(&sizes, PlayerId::HUMAN);
        if c.total_nim_sum(state.piles().values()) != 0 {
            continue;
        }

        for split in state.legal_splits() {
            let mut next = state.clone();
            next.apply_split(split).unwrap();
            assert_ne!(
                c.total_nim_sum(next.piles().values()),
                0,
                "{:?} -> {} keeps nim-sum 0",
                sizes,
                split
            );
        }
    }
}

#[test]
fn test_winning_positions_get_zeroing_move() {
    let mut c = computer();

    for sizes in small_layouts(9) {
        let mut state = GameState::with_sizes(&sizes, PlayerId::COMPUTER);
        if !c.can_win(state.piles().values()) {
            continue;
        }

        let decision = c.decide(state.piles().values()).unwrap();
        assert_eq!(decision.kind, DecisionKind::Winning, "{:?}", sizes);

        state.apply_split(decision.split).unwrap();
        assert_eq!(c.total_nim_sum(state.piles().values()), 0, "{:?}", sizes);
    }
}

#[test]
fn test_computer_beats_random_from_winning_positions() {
    let mut smart = computer();
    let mut random = Computer::new(GameRng::new(7));

    for sizes in [vec![3, 5, 6], vec![13], vec![7, 8, 9], vec![18, 4]] {
        let mut state = GameState::with_sizes(&sizes, PlayerId::COMPUTER);
        assert!(smart.can_win(state.piles().values()));

        while !state.is_game_over() {
            let split = if state.is_player_turn() {
                random.think_random(state.piles().values())
            } else {
                smart.think(state.piles().values())
            };
            state.apply_split(split.unwrap()).unwrap();
        }

        assert_eq!(state.last_winner(), Some(PlayerId::COMPUTER), "{:?}", sizes);
    }
}

#[test]
fn test_think_only_returns_legal_moves() {
    let mut c = computer();

    for sizes in small_layouts(8) {
        let state = GameState::with_sizes(&sizes, PlayerId::COMPUTER);
        match c.think(state.piles().values()) {
            Some(split) => assert!(state.is_valid_move(split.pile, split.position)),
            None => assert!(state.is_game_over()),
        }
    }
}
