/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Reachable-square ("access set") computation and per-kind move legality.
//!
//! Every computation here is a pure function over a [`Board`] snapshot; no
//! state is cached on pieces. The optional *vacated square* argument is the
//! square some other piece is hypothetically leaving mid-evaluation: a probed
//! square equal to it is treated as empty, which lets callers evaluate a
//! candidate move's consequences without mutating the board.

use crate::{Board, Color, Piece, PieceKind, Square, SquareSet};

/// The 8 L-shaped knight offsets, as `(file_delta, rank_delta)` pairs.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// The 8 adjacent king offsets.
const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Rook ray directions: along the rank and file.
const ORTHOGONAL_RAYS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Bishop ray directions: the four diagonals.
const DIAGONAL_RAYS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Outcome of an access-set computation.
///
/// Reaching the *opposing* king during a scan does not add that square to the
/// set; it aborts the whole computation with [`Access::ExposesKing`]. The
/// board-level validator reinterprets that signal as "this position leaves a
/// king attacked", which is what makes check-creating moves illegal in this
/// variant.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Access {
    /// The set of squares the piece can move to or capture on.
    Reaches(SquareSet),
    /// The scan ran into the opposing king.
    ExposesKing,
}

impl Access {
    /// Returns the reached set, or [`None`] if the computation signalled
    /// [`Access::ExposesKing`].
    #[inline(always)]
    pub const fn reaches(self) -> Option<SquareSet> {
        match self {
            Self::Reaches(set) => Some(set),
            Self::ExposesKing => None,
        }
    }

    /// Returns `true` if the computation signalled [`Access::ExposesKing`].
    #[inline(always)]
    pub const fn exposes_king(self) -> bool {
        matches!(self, Self::ExposesKing)
    }
}

/// What an access scan found on a single probed square.
enum Occupant {
    Empty,
    Own,
    Enemy,
    EnemyKing,
}

/// Classifies `square` from the perspective of a piece of color `color`.
///
/// The vacated square is reported as empty regardless of real occupancy.
#[inline(always)]
fn occupant_at(board: &Board, square: Square, color: Color, vacated: Option<Square>) -> Occupant {
    if vacated == Some(square) {
        return Occupant::Empty;
    }

    match board.piece_at(square) {
        None => Occupant::Empty,
        Some(piece) if piece.color() == color => Occupant::Own,
        Some(piece) if piece.is_king() => Occupant::EnemyKing,
        Some(_) => Occupant::Enemy,
    }
}

/// Computes the access set of `piece` as if it stood on `probe`.
///
/// `probe` is usually the piece's real position, but may be a hypothetical
/// one (e.g. a candidate destination). `vacated` names a square some *other*
/// piece is hypothetically leaving; it is treated as empty during the scan.
///
/// # Example
/// ```
/// # use rankrace::{access_set, Access, Board, Piece, Square};
/// let board = Board::new();
/// // The white rook on a2 can run the whole a-file up to a8.
/// let access = access_set(Piece::WHITE_ROOK, Square::A2, &board, None);
/// let set = access.reaches().unwrap();
/// assert!(set.contains(Square::A8));
/// // Its own king blocks a1, and the bishop on b2 blocks the rank.
/// assert!(!set.contains(Square::A1));
/// assert!(!set.contains(Square::B2));
/// ```
pub fn access_set(piece: Piece, probe: Square, board: &Board, vacated: Option<Square>) -> Access {
    match piece.kind() {
        PieceKind::King => leaper_access(&KING_OFFSETS, piece.color(), probe, board, vacated),
        PieceKind::Knight => leaper_access(&KNIGHT_OFFSETS, piece.color(), probe, board, vacated),
        PieceKind::Rook => slider_access(&ORTHOGONAL_RAYS, piece.color(), probe, board, vacated),
        PieceKind::Bishop => slider_access(&DIAGONAL_RAYS, piece.color(), probe, board, vacated),
    }
}

/// Access computation for the non-sliding kinds (King, Knight): each offset
/// square is considered independently.
fn leaper_access(
    offsets: &[(i8, i8)],
    color: Color,
    probe: Square,
    board: &Board,
    vacated: Option<Square>,
) -> Access {
    let mut set = SquareSet::EMPTY;

    for (file_delta, rank_delta) in offsets {
        let Some(target) = probe.offset(*file_delta, *rank_delta) else {
            continue;
        };

        match occupant_at(board, target, color, vacated) {
            Occupant::Empty | Occupant::Enemy => set.insert(target),
            Occupant::Own => {}
            Occupant::EnemyKing => return Access::ExposesKing,
        }
    }

    Access::Reaches(set)
}

/// Access computation for the sliding kinds (Rook, Bishop): each ray runs
/// until blocked, including the first enemy occupant as a capture target and
/// excluding the first own-color occupant. Rays pass through the vacated
/// square as if it were empty.
fn slider_access(
    rays: &[(i8, i8)],
    color: Color,
    probe: Square,
    board: &Board,
    vacated: Option<Square>,
) -> Access {
    let mut set = SquareSet::EMPTY;

    for (file_delta, rank_delta) in rays {
        let mut current = probe;
        while let Some(target) = current.offset(*file_delta, *rank_delta) {
            match occupant_at(board, target, color, vacated) {
                Occupant::Empty => {
                    set.insert(target);
                    current = target;
                }
                Occupant::Own => break,
                Occupant::EnemyKing => return Access::ExposesKing,
                Occupant::Enemy => {
                    set.insert(target);
                    break;
                }
            }
        }
    }

    Access::Reaches(set)
}

/// Full per-kind legality check for moving the piece on `from` to `to`.
///
/// Assumes nothing about turn order; the caller (the game controller) has
/// already established that a piece of the side to move stands on `from`.
/// Returns a plain accept/reject with no reason distinction.
pub(crate) fn is_legal_move(board: &Board, from: Square, to: Square) -> bool {
    let Some(piece) = board.piece_at(from) else {
        return false;
    };

    // A piece may never land on its own color.
    if board
        .piece_at(to)
        .is_some_and(|occupant| occupant.color() == piece.color())
    {
        return false;
    }

    match piece.kind() {
        PieceKind::King => is_legal_king_move(board, piece, from, to),
        _ => is_legal_standard_move(board, piece, from, to),
    }
}

/// Legality for Rook, Bishop, and Knight moves.
fn is_legal_standard_move(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    // Geometry: the destination must be reachable from the current square.
    // A signal here means the piece already attacks the opposing king, which
    // also rejects the move.
    let Some(reachable) = access_set(piece, from, board, None).reaches() else {
        return false;
    };
    if !reachable.contains(to) {
        return false;
    }

    // The piece may not come to rest on a square from which it would attack
    // the opposing king.
    if access_set(piece, to, board, None).exposes_king() {
        return false;
    }

    // No king may be left attacked once the origin square is vacated.
    board.no_king_exposed(Some(from))
}

/// Legality for King moves.
///
/// Kings check their geometry explicitly (one square in any direction) and
/// additionally verify that the destination is not covered by any enemy
/// piece once the origin square is vacated.
fn is_legal_king_move(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    if from.distance_chebyshev(to) != 1 {
        return false;
    }

    // A king may never come to rest adjacent to the enemy king, so the
    // signal from the destination probe rejects the move. This also means a
    // king can never capture the enemy king directly.
    if access_set(piece, to, board, None).exposes_king() {
        return false;
    }

    if !board.no_king_exposed(Some(from)) {
        return false;
    }

    // The destination must not be attacked by any enemy piece. Enemy access
    // sets are unioned with the origin square vacated, so a king cannot hide
    // behind itself along a checking ray.
    let enemy = piece.color().opponent();
    let mut covered = SquareSet::EMPTY;
    for (enemy_piece, enemy_square) in board.live_pieces(enemy) {
        match access_set(enemy_piece, enemy_square, board, Some(from)) {
            Access::Reaches(set) => covered |= set,
            Access::ExposesKing => return false,
        }
    }

    !covered.contains(to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Piece;

    fn board(placements: &[(Piece, Square)]) -> Board {
        Board::from_placements(placements).unwrap()
    }

    fn set_of(access: Access) -> SquareSet {
        access.reaches().expect("computation should not signal")
    }

    #[test]
    fn knight_offsets_from_open_center() {
        let board = board(&[
            (Piece::WHITE_KING, Square::A1),
            (Piece::BLACK_KING, Square::H8),
            (Piece::WHITE_KNIGHT_1, "d4".parse().unwrap()),
        ]);

        let set = set_of(access_set(
            Piece::WHITE_KNIGHT_1,
            "d4".parse().unwrap(),
            &board,
            None,
        ));
        assert_eq!(set.population(), 8);
        assert!(set.contains("b3".parse().unwrap()));
        assert!(set.contains("e6".parse().unwrap()));
    }

    #[test]
    fn knight_blocked_only_by_own_color() {
        // Own piece on one target, enemy piece on another.
        let board = board(&[
            (Piece::WHITE_KING, Square::A1),
            (Piece::BLACK_KING, Square::H8),
            (Piece::WHITE_KNIGHT_1, "d4".parse().unwrap()),
            (Piece::WHITE_BISHOP_1, "b3".parse().unwrap()),
            (Piece::BLACK_ROOK, "e6".parse().unwrap()),
        ]);

        let set = set_of(access_set(
            Piece::WHITE_KNIGHT_1,
            "d4".parse().unwrap(),
            &board,
            None,
        ));
        assert!(!set.contains("b3".parse().unwrap()));
        assert!(set.contains("e6".parse().unwrap()));
    }

    #[test]
    fn rook_ray_stops_at_first_capture_target() {
        let board = board(&[
            (Piece::WHITE_KING, Square::A1),
            (Piece::BLACK_KING, Square::H8),
            (Piece::WHITE_ROOK, "d4".parse().unwrap()),
            (Piece::BLACK_BISHOP_1, "d6".parse().unwrap()),
        ]);

        let set = set_of(access_set(
            Piece::WHITE_ROOK,
            "d4".parse().unwrap(),
            &board,
            None,
        ));
        assert!(set.contains("d5".parse().unwrap()));
        assert!(set.contains("d6".parse().unwrap()), "capture target included");
        assert!(!set.contains("d7".parse().unwrap()), "ray stops at capture");
    }

    #[test]
    fn bishop_blocked_by_own_color_exclusive() {
        let board = board(&[
            (Piece::WHITE_KING, Square::A1),
            (Piece::BLACK_KING, Square::H8),
            (Piece::WHITE_BISHOP_1, "c1".parse().unwrap()),
            (Piece::WHITE_KNIGHT_1, "e3".parse().unwrap()),
        ]);

        let set = set_of(access_set(
            Piece::WHITE_BISHOP_1,
            "c1".parse().unwrap(),
            &board,
            None,
        ));
        assert!(set.contains("d2".parse().unwrap()));
        assert!(!set.contains("e3".parse().unwrap()));
        assert!(!set.contains("f4".parse().unwrap()));
    }

    #[test]
    fn slider_passes_through_vacated_square() {
        let board = board(&[
            (Piece::WHITE_KING, Square::A1),
            (Piece::BLACK_KING, Square::H8),
            (Piece::WHITE_ROOK, "d1".parse().unwrap()),
            (Piece::BLACK_KNIGHT_1, "d4".parse().unwrap()),
        ]);

        // Without the vacate hint, the knight is a capture target that ends the ray.
        let set = set_of(access_set(
            Piece::WHITE_ROOK,
            "d1".parse().unwrap(),
            &board,
            None,
        ));
        assert!(set.contains("d4".parse().unwrap()));
        assert!(!set.contains("d5".parse().unwrap()));

        // With d4 hypothetically vacated, the ray continues through it.
        let set = set_of(access_set(
            Piece::WHITE_ROOK,
            "d1".parse().unwrap(),
            &board,
            Some("d4".parse().unwrap()),
        ));
        assert!(set.contains("d4".parse().unwrap()));
        assert!(set.contains("d8".parse().unwrap()));
    }

    #[test]
    fn scanning_into_enemy_king_signals() {
        let board = board(&[
            (Piece::WHITE_KING, Square::A1),
            (Piece::BLACK_KING, "d8".parse().unwrap()),
            (Piece::WHITE_ROOK, "d1".parse().unwrap()),
        ]);

        let access = access_set(Piece::WHITE_ROOK, "d1".parse().unwrap(), &board, None);
        assert!(access.exposes_king());
    }

    #[test]
    fn own_king_is_an_ordinary_blocker() {
        let board = board(&[
            (Piece::WHITE_KING, "d8".parse().unwrap()),
            (Piece::BLACK_KING, Square::H8),
            (Piece::WHITE_ROOK, "d1".parse().unwrap()),
        ]);

        let set = set_of(access_set(
            Piece::WHITE_ROOK,
            "d1".parse().unwrap(),
            &board,
            None,
        ));
        assert!(set.contains("d7".parse().unwrap()));
        assert!(!set.contains("d8".parse().unwrap()));
    }

    #[test]
    fn king_access_bounded_at_corner() {
        let board = board(&[
            (Piece::WHITE_KING, Square::A1),
            (Piece::BLACK_KING, Square::H8),
        ]);

        let set = set_of(access_set(Piece::WHITE_KING, Square::A1, &board, None));
        assert_eq!(set.population(), 3);
        assert!(set.contains(Square::A2));
        assert!(set.contains(Square::B1));
        assert!(set.contains(Square::B2));
    }

    #[test]
    fn pinned_knight_may_not_move() {
        // The knight on b1 shields the white king from the rook on h1.
        let board = board(&[
            (Piece::WHITE_KING, Square::A1),
            (Piece::WHITE_KNIGHT_1, Square::B1),
            (Piece::BLACK_ROOK, Square::H1),
            (Piece::BLACK_KING, Square::H8),
        ]);

        // Geometrically fine, but vacating b1 exposes the king on a1.
        assert!(!is_legal_move(&board, Square::B1, "c3".parse().unwrap()));
        assert!(!board.no_king_exposed(Some(Square::B1)));
    }

    #[test]
    fn moving_into_attack_on_enemy_king_is_rejected() {
        // Moving the rook to d8's rank would attack the black king.
        let board = board(&[
            (Piece::WHITE_KING, Square::A1),
            (Piece::WHITE_ROOK, "d4".parse().unwrap()),
            (Piece::BLACK_KING, "f6".parse().unwrap()),
        ]);

        // d6 shares a rank with f6: the destination probe signals.
        assert!(!is_legal_move(&board, "d4".parse().unwrap(), "d6".parse().unwrap()));
        // d5 does not attack f6, and is legal.
        assert!(is_legal_move(&board, "d4".parse().unwrap(), "d5".parse().unwrap()));
    }

    #[test]
    fn king_may_not_step_onto_attacked_square() {
        let board = board(&[
            (Piece::WHITE_KING, "e4".parse().unwrap()),
            (Piece::BLACK_ROOK, "d8".parse().unwrap()),
            (Piece::BLACK_KING, Square::H8),
        ]);

        // d-file squares are covered by the rook.
        assert!(!is_legal_move(&board, "e4".parse().unwrap(), "d4".parse().unwrap()));
        // f4 is not.
        assert!(is_legal_move(&board, "e4".parse().unwrap(), "f4".parse().unwrap()));
    }

    #[test]
    fn king_may_not_retreat_along_a_checking_ray() {
        // If e4 is treated as vacated, the rook on e8 also covers e3.
        let board = board(&[
            (Piece::WHITE_KING, "e4".parse().unwrap()),
            (Piece::BLACK_ROOK, "e8".parse().unwrap()),
            (Piece::BLACK_KING, Square::H1),
        ]);

        assert!(!is_legal_move(&board, "e4".parse().unwrap(), "e3".parse().unwrap()));
        assert!(is_legal_move(&board, "e4".parse().unwrap(), "d3".parse().unwrap()));
    }

    #[test]
    fn kings_never_become_adjacent() {
        let board = board(&[
            (Piece::WHITE_KING, "e4".parse().unwrap()),
            (Piece::BLACK_KING, "e6".parse().unwrap()),
        ]);

        // Stepping to e5 would place the kings next to each other.
        assert!(!is_legal_move(&board, "e4".parse().unwrap(), "e5".parse().unwrap()));
        assert!(is_legal_move(&board, "e4".parse().unwrap(), "e3".parse().unwrap()));
    }
}
