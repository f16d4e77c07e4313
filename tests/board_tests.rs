//! Tests for the board, tiles and configuration
//!
//! Test categories:
//! - Slot queries and bounds
//! - Tile placement and clearing
//! - Tile colors and representation
//! - Game configuration

use columns::config::{COLUMNS_BOARD_HEIGHT, COLUMNS_BOARD_WIDTH, DEFAULT_DROP_INTERVAL_MS};
use columns::game::test_helpers::*;
use columns::{Board, Cell, Color, ConfigError, GameConfig, NullTile, Position, RuleError, Tile};
use std::time::Duration;

// ============================================================================
// Slot Query Tests
// ============================================================================

mod slot_queries {
    use super::*;

    #[test]
    fn new_board_is_filled_with_null_tiles() {
        let board = empty_board();

        assert_eq!(board.width(), COLUMNS_BOARD_WIDTH);
        assert_eq!(board.height(), COLUMNS_BOARD_HEIGHT);
        for x in 1..=COLUMNS_BOARD_WIDTH {
            for y in 1..=COLUMNS_BOARD_HEIGHT {
                let cell = board.tile_at(x, y).unwrap();
                assert!(cell.is_null(), "({x}, {y}) should be empty");
                assert_eq!(cell.position(), Position::new(x, y));
            }
        }
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn out_of_range_queries_fail() {
        let board = empty_board();

        for (x, y) in [(0, 1), (8, 1), (1, 0), (1, 14), (-1, -1)] {
            assert_eq!(
                board.tile_at(x, y),
                Err(RuleError::InvalidBoardPosition { x, y })
            );
        }
    }

    #[test]
    fn corners_are_in_bounds() {
        let board = empty_board();

        assert!(board.tile_at(1, 1).is_ok());
        assert!(board.tile_at(7, 1).is_ok());
        assert!(board.tile_at(1, 13).is_ok());
        assert!(board.tile_at(7, 13).is_ok());
    }

    #[test]
    fn staged_row_sits_just_above_the_board() {
        let board = empty_board();

        assert_eq!(board.staged_row(), 14);
        assert!(board.is_staged(Position::new(3, 14)));
        assert!(board.is_staged(Position::new(3, 16)));
        assert!(!board.is_staged(Position::new(3, 13)));
    }

    #[test]
    fn column_lists_slots_from_the_floor_up() {
        let mut board = empty_board();
        fill_column(&mut board, 2, &[Color::Red, Color::Blue]);

        let column: Vec<Cell> = board.column(2).copied().collect();
        assert_eq!(column.len(), COLUMNS_BOARD_HEIGHT as usize);
        assert_eq!(column[0], Cell::Tile(Tile::new(2, 1, Color::Red)));
        assert_eq!(column[1], Cell::Tile(Tile::new(2, 2, Color::Blue)));
        assert!(column[2].is_null());

        assert_eq!(board.column(0).count(), 0);
    }
}

// ============================================================================
// Placement Tests
// ============================================================================

mod placement {
    use super::*;

    #[test]
    fn placed_tile_occupies_its_own_slot() {
        let mut board = empty_board();
        board.place_tile(Tile::new(4, 5, Color::Green)).unwrap();

        let cell = board.tile_at(4, 5).unwrap();
        assert_eq!(cell.as_tile().map(|t| t.color), Some(Color::Green));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn placing_overwrites_previous_occupant() {
        let mut board = board_with(&[(2, 2, Color::Red)]);
        board.place_tile(Tile::new(2, 2, Color::Blue)).unwrap();

        assert_eq!(
            board.tile_at(2, 2).unwrap().as_tile().map(|t| t.color),
            Some(Color::Blue)
        );
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn placing_a_null_tile_clears_the_slot() {
        let mut board = board_with(&[(2, 2, Color::Red)]);
        board.place_tile(NullTile::at(Position::new(2, 2))).unwrap();

        assert!(board.tile_at(2, 2).unwrap().is_null());
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn clear_slot_replaces_tile_with_null() {
        let mut board = board_with(&[(6, 9, Color::Magenta)]);
        board.clear_slot(Position::new(6, 9)).unwrap();

        assert_eq!(board.is_null_at(6, 9), Ok(true));
    }

    #[test]
    fn placing_off_the_board_fails_and_changes_nothing() {
        let mut board = empty_board();
        let before = board.clone();

        let result = board.place_tile(Tile::new(8, 1, Color::Red));

        assert_eq!(result, Err(RuleError::InvalidBoardPosition { x: 8, y: 1 }));
        assert_eq!(board, before);
    }

    #[test]
    fn with_tiles_skips_tiles_outside_the_board() {
        let board = Board::with_tiles(
            3,
            3,
            [Tile::new(1, 1, Color::Red), Tile::new(4, 4, Color::Blue)],
        );

        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn display_renders_rows_top_down() {
        let board = Board::with_tiles(
            3,
            3,
            [Tile::new(1, 1, Color::Red), Tile::new(3, 2, Color::Yellow)],
        );

        assert_eq!(board.to_string(), "...\n..Y\nR..\n");
    }
}

// ============================================================================
// Tile Tests
// ============================================================================

mod tiles {
    use super::*;

    #[test]
    fn palette_has_six_colors() {
        assert_eq!(Color::ALL.len(), 6);
    }

    #[test]
    fn tile_symbols() {
        let expected = [
            (Color::Red, 'R'),
            (Color::Orange, 'O'),
            (Color::Yellow, 'Y'),
            (Color::Green, 'G'),
            (Color::Blue, 'B'),
            (Color::Magenta, 'M'),
        ];
        for (color, symbol) in expected {
            assert_eq!(Tile::new(1, 1, color).to_string(), symbol.to_string());
            assert_eq!(Color::from_symbol(symbol), Some(color));
        }
        assert_eq!(Color::from_symbol('?'), None);
    }

    #[test]
    fn colors_carry_hex_values() {
        assert_eq!(Color::Red.hex(), "#a10b0b");
        assert_eq!(Color::Magenta.hex(), "#b71ceb");
        assert!(Color::ALL.iter().all(|c| c.hex().starts_with('#') && c.hex().len() == 7));
    }

    #[test]
    fn tiles_match_on_color_only() {
        let a = Tile::new(1, 1, Color::Blue);
        let b = Tile::new(5, 9, Color::Blue);
        let c = Tile::new(1, 1, Color::Green);

        assert!(a.matches(&b));
        assert!(!a.matches(&c));
    }

    #[test]
    fn null_tile_renders_as_dot() {
        assert_eq!(NullTile::at(Position::new(1, 1)).to_string(), ".");
    }
}

// ============================================================================
// Configuration Tests
// ============================================================================

mod configuration {
    use super::*;

    #[test]
    fn default_config_uses_canonical_board() {
        let config = GameConfig::default();

        assert_eq!(config.board_width, 7);
        assert_eq!(config.board_height, 13);
        assert_eq!(config.point_value, 3);
        assert_eq!(config.seed, None);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn drop_interval_follows_config() {
        assert_eq!(
            GameConfig::default().drop_interval(),
            Duration::from_millis(DEFAULT_DROP_INTERVAL_MS)
        );
        assert_eq!(
            GameConfig::default()
                .with_drop_interval_ms(250)
                .drop_interval(),
            Duration::from_millis(250)
        );
    }

    #[test]
    fn rejects_boards_that_cannot_host_a_faller() {
        assert_eq!(
            GameConfig::default().with_board_size(0, 13).validate(),
            Err(ConfigError::BoardTooNarrow { width: 0 })
        );
        assert_eq!(
            GameConfig::default().with_board_size(7, 2).validate(),
            Err(ConfigError::BoardTooShort {
                height: 2,
                minimum: 3
            })
        );
    }
}
