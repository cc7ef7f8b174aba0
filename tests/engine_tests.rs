use enum_map::{enum_map, EnumMap};
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

use tile_merge::{
    attempt_move,
    board::{is_valid_tile, Board, Direction, Tile, TileSum},
    line::collapse_line,
    random::ScriptedSource,
    spawn::SPAWN_VALUES,
    transform::{inverse_transform, transform},
    Session,
};

// Fixed seed for deterministic tests
const TEST_SEED: u64 = 42;

fn board(literal: &str) -> Board {
    literal.parse().unwrap()
}

fn random_board(rng: &mut XorShiftRng, size: usize) -> Board {
    const VALUES: [Tile; 6] = [0, 0, 2, 4, 8, 16];

    Board::from_fn(size, &mut |_, _| VALUES[rng.gen_range(0..VALUES.len())])
}

/// Cells a move in `direction` can spawn into, in original coordinates.
fn on_leading_edge(direction: Direction, size: usize, row: usize, col: usize) -> bool {
    match direction {
        Direction::Left => col == size - 1,
        Direction::Right => col == 0,
        Direction::Up => row == size - 1,
        Direction::Down => row == 0,
    }
}

#[test]
fn test_literal_scenario() {
    let start = board("0,0,0,2/0,4,0,2/0,0,8,0/0,0,0,2");
    let expected: EnumMap<Direction, Board> = enum_map! {
        Direction::Left => board("2,0,0,0/4,2,0,0/8,0,0,0/2,0,0,0"),
        Direction::Right => board("0,0,0,2/0,0,4,2/0,0,0,8/0,0,0,2"),
        Direction::Up => board("0,4,8,4/0,0,0,2/0,0,0,0/0,0,0,0"),
        Direction::Down => board("0,0,0,0/0,0,0,0/0,0,0,2/0,4,8,4"),
    };

    for (direction, expected) in &expected {
        let outcome = attempt_move(&start, direction, &mut ScriptedSource::default(), false);

        assert_eq!(&outcome.board, expected, "{}", direction);
        assert!(outcome.moved, "{}", direction);
        assert_eq!(outcome.spawned, None);
    }
}

#[test]
fn test_no_chain_merge() {
    assert_eq!(collapse_line(&[2, 2, 2, 2]).line, vec![4, 4, 0, 0]);

    let outcome = board("2,2,2,2/0,0,0,0/0,0,0,0/0,0,0,0").shifted(Direction::Right);

    assert_eq!(outcome.board.row(0), &[0, 0, 4, 4]);
}

#[test]
fn test_saturated_rows_are_idempotent() {
    for line in [vec![2, 4, 8, 16], vec![4, 2, 0, 0], vec![8, 0, 0, 0], vec![0, 0, 0, 0]] {
        let collapsed = collapse_line(&line);

        assert_eq!(collapsed.line, line);
        assert!(!collapsed.changed);
        assert_eq!(collapse_line(&collapsed.line), collapsed);
    }
}

#[test]
fn test_no_op_detection() {
    let start = board("2,4,2,4/4,2,4,2/2,4,2,4/4,2,4,2");
    let mut rng = XorShiftRng::seed_from_u64(TEST_SEED);

    for direction in Direction::ALL {
        let outcome = attempt_move(&start, direction, &mut rng, true);

        assert!(!outcome.moved);
        assert_eq!(outcome.board, start);
        assert_eq!(outcome.spawned, None);
    }

    // a packed row only blocks horizontal moves
    let start = board("2,4,8,16/0,0,0,0/0,0,0,0/0,0,0,0");

    assert!(!start.can_move(Direction::Left));
    assert!(!start.can_move(Direction::Right));
    assert!(!start.can_move(Direction::Up));
    assert!(start.can_move(Direction::Down));
}

#[test]
fn test_round_trip_transform() {
    let mut rng = XorShiftRng::seed_from_u64(TEST_SEED);

    for size in 2..=6 {
        for _ in 0..10 {
            let start = random_board(&mut rng, size);

            for direction in Direction::ALL {
                assert_eq!(inverse_transform(direction, &transform(direction, &start)), start);
            }
        }
    }
}

#[test]
fn test_conservation() {
    let mut rng = XorShiftRng::seed_from_u64(TEST_SEED);

    for size in 2..=5 {
        for _ in 0..25 {
            let start = random_board(&mut rng, size);

            for direction in Direction::ALL {
                let shifted = start.shifted(direction);

                assert!(shifted.board.sum() >= start.sum());
                assert_eq!(shifted.board.sum(), start.sum() + shifted.merged);
                assert_eq!(shifted.moved, shifted.board != start);

                let spawned = attempt_move(&start, direction, &mut rng, true);

                match spawned.spawned {
                    Some(tile) => {
                        assert!(SPAWN_VALUES.contains(&tile.value));
                        assert_eq!(spawned.board.sum(), shifted.board.sum() + TileSum::from(tile.value));
                    }
                    None => assert_eq!(spawned.board, shifted.board),
                }
            }
        }
    }
}

#[test]
fn test_spawn_placement() {
    let mut rng = XorShiftRng::seed_from_u64(TEST_SEED);

    for size in 2..=5 {
        for _ in 0..25 {
            let start = random_board(&mut rng, size);

            for direction in Direction::ALL {
                let shifted = start.shifted(direction);
                let outcome = attempt_move(&start, direction, &mut rng, true);

                assert_eq!(outcome.moved, shifted.moved);

                if !outcome.moved {
                    assert_eq!(outcome.spawned, None);
                    continue;
                }

                let tile = outcome.spawned.expect("a move that changed the board spawns");
                let changed: Vec<_> = outcome
                    .board
                    .iter()
                    .filter(|&(row, col, value)| shifted.board.get(row, col) != Some(value))
                    .collect();

                assert_eq!(changed, vec![(tile.row, tile.col, tile.value)]);
                assert_eq!(shifted.board.get(tile.row, tile.col), Some(0));
                assert!(on_leading_edge(direction, size, tile.row, tile.col), "{} {:?}", direction, tile);
            }
        }
    }
}

#[test]
fn test_invariant_holds_over_a_long_game() {
    let mut session = Session::random(4, TEST_SEED);
    let mut rng = XorShiftRng::seed_from_u64(TEST_SEED + 1);

    for _ in 0..500 {
        let direction = Direction::ALL[rng.gen_range(0..4)];
        let before = session.board().clone();
        let outcome = session.attempt_move(direction);

        assert!(session.board().cells().iter().all(|&value| is_valid_tile(value)));

        if !outcome.moved {
            assert_eq!(session.board(), &before);
        }
    }

    assert!(session.total_moves() > 0);
}

#[test]
fn test_larger_boards() {
    let start = board("2,2,0,4,4/0,0,0,0,0/8,0,8,0,8/0,0,0,0,2/0,0,0,0,2");

    let outcome = start.shifted(Direction::Left);

    assert_eq!(outcome.board.row(0), &[4, 8, 0, 0, 0]);
    assert_eq!(outcome.board.row(2), &[16, 8, 0, 0, 0]);
    assert_eq!(outcome.merged, 2 + 4 + 8);

    let outcome = start.shifted(Direction::Down);

    assert_eq!(outcome.board.row(4), &[8, 2, 8, 4, 4]);
    assert_eq!(outcome.board.row(3), &[2, 0, 0, 0, 8]);
}
