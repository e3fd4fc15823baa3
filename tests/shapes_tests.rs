//! Shape catalog, rotation and collision tests

use blockfall::core::{all_shapes, collides, shape_def, ActivePiece, Board, Shape};
use blockfall::types::{Color, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_catalog_has_seven_shapes_in_order() {
    let kinds: Vec<_> = all_shapes().iter().map(|d| d.kind).collect();
    assert_eq!(
        kinds,
        vec![
            PieceKind::I,
            PieceKind::O,
            PieceKind::T,
            PieceKind::S,
            PieceKind::Z,
            PieceKind::J,
            PieceKind::L
        ]
    );
}

#[test]
fn test_catalog_matrices() {
    assert_eq!(shape_def(PieceKind::I).shape, Shape::from_rows([[1, 1, 1, 1]]));
    assert_eq!(shape_def(PieceKind::O).shape, Shape::from_rows([[1, 1], [1, 1]]));
    assert_eq!(
        shape_def(PieceKind::S).shape,
        Shape::from_rows([[0, 1, 1], [1, 1, 0]])
    );
    assert_eq!(
        shape_def(PieceKind::L).shape,
        Shape::from_rows([[0, 0, 1], [1, 1, 1]])
    );
}

#[test]
fn test_every_kind_has_its_own_color() {
    let shapes = all_shapes();
    for (i, a) in shapes.iter().enumerate() {
        for b in &shapes[i + 1..] {
            assert_ne!(a.color, b.color, "{:?} and {:?} share a color", a.kind, b.kind);
        }
    }
}

#[test]
fn test_i_rotation_periodicity() {
    let i = shape_def(PieceKind::I).shape;

    let once = i.rotated();
    assert_eq!((once.rows(), once.cols()), (4, 1));

    let twice = once.rotated();
    assert_eq!(twice, i);
    assert_eq!(twice.rotated().rotated(), i);
}

#[test]
fn test_every_shape_returns_after_four_rotations() {
    for def in all_shapes() {
        let back = def.shape.rotated().rotated().rotated().rotated();
        assert_eq!(back, def.shape, "{:?}", def.kind);
    }
}

#[test]
fn test_j_rotates_clockwise() {
    // [[1,0,0],[1,1,1]] -> [[1,1],[1,0],[1,0]]
    let j = shape_def(PieceKind::J).shape.rotated();
    assert_eq!(j, Shape::from_rows([[1, 1], [1, 0], [1, 0]]));
}

#[test]
fn test_collides_outside_columns_and_below_floor() {
    let board = Board::new();
    for def in all_shapes() {
        let s = def.shape;
        let max_col = BOARD_WIDTH as i8 - s.cols() as i8;
        let max_row = BOARD_HEIGHT as i8 - s.rows() as i8;

        assert!(!collides(&board, &s, 0, 0));
        assert!(!collides(&board, &s, max_row, max_col));
        assert!(collides(&board, &s, 0, -1), "{:?} left wall", def.kind);
        assert!(collides(&board, &s, 0, max_col + 1), "{:?} right wall", def.kind);
        assert!(collides(&board, &s, max_row + 1, 0), "{:?} floor", def.kind);
    }
}

#[test]
fn test_collides_with_locked_cells_only_where_filled() {
    let mut board = Board::new();
    let grey = Color::new(100, 100, 100);
    let s = shape_def(PieceKind::S).shape;

    // S is [[0,1,1],[1,1,0]]: (0,0) and (1,2) are holes.
    board.set_cell(5, 3, grey);
    board.set_cell(6, 5, grey);
    assert!(!collides(&board, &s, 5, 3));

    board.set_cell(6, 3, grey);
    assert!(collides(&board, &s, 5, 3));
}

#[test]
fn test_cells_above_board_do_not_collide() {
    let board = Board::new();
    let o = shape_def(PieceKind::O).shape;
    assert!(!collides(&board, &o, -2, 4));
    assert!(!collides(&board, &o, -1, 4));
    // Still bounded horizontally.
    assert!(collides(&board, &o, -2, 9));
}

#[test]
fn test_piece_wrappers_match_detector() {
    let mut board = Board::new();
    let piece = ActivePiece::spawn(PieceKind::T);

    assert!(!piece.collides_at(&board, 0, 1));
    assert!(!piece.rotation_collides(&board));

    // T spawns at col 5 with cells (0,6),(1,5),(1,6),(1,7).
    board.set_cell(2, 6, Color::new(1, 1, 1));
    assert!(piece.collides_at(&board, 0, 1));
    assert!(!piece.collides_at(&board, 0, 0));
}
