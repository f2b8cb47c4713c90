//! Line scores for tic-tac-toe evaluation
//!
//! Weights for a line held by a single side, indexed by how many of its
//! three cells that side occupies.

/// Line scores used by the evaluators
pub struct LineScore;

impl LineScore {
    // Graduated form
    /// One mark on an otherwise empty line
    pub const ONE: i32 = 1;
    /// Two marks, third cell open
    pub const TWO: i32 = 10;
    /// Completed line, multiplied by the win weight
    pub const THREE: i32 = 100;

    // Discrete form
    /// Completed line, no weighting by game progress
    pub const WIN: i32 = 10;
}

/// Multiplier for a completed line when `empty_cells` cells remain open.
///
/// Shrinks as the board fills so that faster wins outscore slower ones.
/// The `+ 1` keeps a win on the final cell worth more than a full-board
/// draw, which is scored 0.
#[inline]
pub fn win_weight(empty_cells: usize) -> i32 {
    empty_cells as i32 + 1
}

/// Graduated score of a line held only by one side with `count` marks
#[inline]
pub fn graduated_line_score(count: usize, empty_cells: usize) -> i32 {
    match count {
        1 => LineScore::ONE,
        2 => LineScore::TWO,
        3 => LineScore::THREE * win_weight(empty_cells),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_score_hierarchy() {
        assert!(LineScore::THREE > LineScore::TWO);
        assert!(LineScore::TWO > LineScore::ONE);
        // A completed line outweighs every open two on the board combined
        assert!(LineScore::THREE * win_weight(0) > 8 * LineScore::TWO);
    }

    #[test]
    fn test_graduated_line_score() {
        assert_eq!(graduated_line_score(0, 5), 0);
        assert_eq!(graduated_line_score(1, 5), 1);
        assert_eq!(graduated_line_score(2, 5), 10);
        assert_eq!(graduated_line_score(3, 4), 500);
    }

    #[test]
    fn test_earlier_win_scores_higher() {
        for empty in 0..8 {
            assert!(graduated_line_score(3, empty + 1) > graduated_line_score(3, empty));
        }
        assert!(graduated_line_score(3, 0) > 0);
    }
}
