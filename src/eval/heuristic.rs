//! Static evaluation of tic-tac-toe positions
//!
//! Two evaluators, both scoring from the perspective of the maximizing
//! side and summing over the eight lines:
//! - Graduated: rewards partial lines and faster wins (alpha-beta search)
//! - Discrete: only completed lines count (plain minimax)

use crate::board::{Board, Pos, Symbol};
use crate::rules::LINES;

use super::patterns::{graduated_line_score, LineScore};

/// Marks of each side on one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LineCount {
    mine: usize,
    opp: usize,
}

#[inline]
fn count_line(board: &Board, line: &[Pos; 3], me: Symbol) -> LineCount {
    let opponent = me.opponent();
    line.iter().fold(LineCount { mine: 0, opp: 0 }, |mut acc, &pos| {
        let cell = board.get(pos);
        if cell == me {
            acc.mine += 1;
        } else if cell == opponent {
            acc.opp += 1;
        }
        acc
    })
}

/// Graduated evaluation of the board for `me`.
///
/// A line held only by one side scores +1 / +10 for one / two marks and
/// `LineScore::THREE` times the win weight when complete; the other side's
/// lines score the negation. Mixed or empty lines score 0.
#[must_use]
pub fn evaluate(board: &Board, me: Symbol) -> i32 {
    let empty_cells = board.empty_count();

    LINES
        .iter()
        .map(|line| {
            let count = count_line(board, line, me);
            match (count.mine, count.opp) {
                (0, 0) => 0,
                (mine, 0) => graduated_line_score(mine, empty_cells),
                (0, opp) => -graduated_line_score(opp, empty_cells),
                _ => 0,
            }
        })
        .sum()
}

/// Discrete evaluation of the board for `me`: +10 for each line `me`
/// completed, -10 for each line the opponent completed.
///
/// Every line is counted, so two lines finished by one move score 20.
#[must_use]
pub fn evaluate_discrete(board: &Board, me: Symbol) -> i32 {
    LINES
        .iter()
        .map(|line| {
            let count = count_line(board, line, me);
            if count.mine == 3 {
                LineScore::WIN
            } else if count.opp == 3 {
                -LineScore::WIN
            } else {
                0
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_evaluate_empty_board() {
        let board = Board::new();
        assert_eq!(evaluate(&board, Symbol::Cross), 0);
        assert_eq!(evaluate_discrete(&board, Symbol::Cross), 0);
    }

    #[test]
    fn test_evaluate_center_mark() {
        // Centre lies on four lines
        let b = board("---/-x-/---");
        assert_eq!(evaluate(&b, Symbol::Cross), 4);
        assert_eq!(evaluate(&b, Symbol::Nought), -4);
    }

    #[test]
    fn test_evaluate_corner_mark() {
        let b = board("x--/---/---");
        assert_eq!(evaluate(&b, Symbol::Cross), 3);
    }

    #[test]
    fn test_evaluate_mixed_lines_cancel() {
        // x at centre, o at corner: the shared diagonal scores 0
        let b = board("o--/-x-/---");
        // x: middle row, middle column, anti-diagonal = 3
        // o: top row, left column = -2
        assert_eq!(evaluate(&b, Symbol::Cross), 1);
    }

    #[test]
    fn test_evaluate_open_two() {
        let b = board("xx-/---/---");
        // Top row (+10), left and middle columns, main diagonal
        assert_eq!(evaluate(&b, Symbol::Cross), 10 + 1 + 1 + 1);
    }

    #[test]
    fn test_evaluate_win_weighted_by_empty_cells() {
        let early = board("xxx/oo-/---");
        let late = board("xxx/oox/oo-");

        let early_score = evaluate(&early, Symbol::Cross);
        let late_score = evaluate(&late, Symbol::Cross);
        assert!(early_score > late_score);
        // 4 empty cells: 100 * (4 + 1) from the top row
        assert!(early_score >= 400, "got {}", early_score);
    }

    #[test]
    fn test_evaluate_symmetric() {
        for s in ["xo-/-x-/o--", "xxo/-o-/x--", "ooo/xx-/x--", "xox/xoo/oxx"] {
            let b = board(s);
            assert_eq!(evaluate(&b, Symbol::Cross), -evaluate(&b, Symbol::Nought), "{}", s);
            assert_eq!(
                evaluate_discrete(&b, Symbol::Cross),
                -evaluate_discrete(&b, Symbol::Nought),
                "{}",
                s
            );
        }
    }

    #[test]
    fn test_discrete_ignores_partial_lines() {
        let b = board("xx-/oo-/---");
        assert_eq!(evaluate_discrete(&b, Symbol::Cross), 0);
    }

    #[test]
    fn test_discrete_win_and_loss() {
        assert_eq!(evaluate_discrete(&board("xxx/oo-/---"), Symbol::Cross), 10);
        assert_eq!(evaluate_discrete(&board("xxx/oo-/---"), Symbol::Nought), -10);
    }

    #[test]
    fn test_discrete_sums_double_line() {
        // Top row and left column both complete
        let b = board("xxx/xo-/xoo");
        assert_eq!(evaluate_discrete(&b, Symbol::Cross), 20);
    }

    #[test]
    fn test_full_board_draw_scores_zero() {
        let b = board("xox/xoo/oxx");
        assert_eq!(evaluate(&b, Symbol::Cross), 0);
        assert_eq!(evaluate_discrete(&b, Symbol::Cross), 0);
    }
}
