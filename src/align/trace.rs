use crate::error::AlignError;
use crate::model::SubstitutionModel;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    None,
    Diagonal,
    Vertical,
    Horizontal,
}

/// DP 单元：总分、以纵向间隙结尾的最佳分、以横向间隙结尾的最佳分，以及回溯方向。
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TraceCell {
    pub overall: f32,
    pub vertical: f32,
    pub horizontal: f32,
    pub dir: Direction,
}

impl TraceCell {
    #[inline]
    fn border(penalty: f32, dir: Direction) -> Self {
        Self { overall: penalty, vertical: penalty, horizontal: penalty, dir }
    }
}

/// (R+1) x (C+1) 回溯矩阵，行优先展平存储。
///
/// 行 r (r >= 1) 对应块成员的第 `R - r` 个符号，列 c (c >= 1) 对应新序列的第 `C - c` 个符号，
/// 即矩阵从远端向内索引，从 (R, C) 回溯时符号按从左到右的顺序产出。
#[derive(Debug)]
pub struct TraceMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<TraceCell>,
}

impl TraceMatrix {
    pub fn fill(block: &[Vec<char>], seq: &[char], model: &SubstitutionModel) -> Result<Self, AlignError> {
        let width = block.first().map_or(0, Vec::len);
        let rows = width + 1;
        let cols = seq.len() + 1;
        let open = model.gap_open();
        let extend = model.gap_extend();

        let mut cells = vec![TraceCell::default(); rows * cols];

        // a run of n gaps is opened once and extended n - 1 times
        let mut penalty = open;
        for r in 1..rows {
            cells[r * cols] = TraceCell::border(penalty, Direction::Vertical);
            penalty += extend;
        }
        let mut penalty = open;
        for c in 1..cols {
            cells[c] = TraceCell::border(penalty, Direction::Horizontal);
            penalty += extend;
        }

        for r in 1..rows {
            let block_pos = width - r;
            for c in 1..cols {
                let up = cells[(r - 1) * cols + c];
                let left = cells[r * cols + (c - 1)];
                let diag = cells[(r - 1) * cols + (c - 1)];

                let vertical = (up.vertical + extend).max(up.overall + open);
                let horizontal = (left.horizontal + extend).max(left.overall + open);
                let diagonal = best_substitution(block, block_pos, seq[seq.len() - c], model)?
                    .map(|s| diag.overall + s);

                let mut overall = vertical.max(horizontal);
                if let Some(d) = diagonal {
                    overall = overall.max(d);
                }
                // ties: diagonal, then vertical, then horizontal
                let dir = if diagonal == Some(overall) {
                    Direction::Diagonal
                } else if overall == vertical {
                    Direction::Vertical
                } else {
                    Direction::Horizontal
                };

                cells[r * cols + c] = TraceCell { overall, vertical, horizontal, dir };
            }
        }

        Ok(Self { rows, cols, cells })
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> &TraceCell {
        &self.cells[row * self.cols + col]
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Best overall score of the extension step.
    pub fn score(&self) -> f32 {
        self.get(self.rows - 1, self.cols - 1).overall
    }

    /// 从 (R, C) 回溯到 (0, 0)，按产出顺序返回每一步的方向。
    pub fn traceback(&self) -> Vec<Direction> {
        let mut row = self.rows - 1;
        let mut col = self.cols - 1;
        let mut moves = Vec::with_capacity(row + col);

        loop {
            let dir = self.get(row, col).dir;
            // border cells only point along the border, so the walk never leaves the matrix
            match dir {
                Direction::None => break,
                Direction::Diagonal => {
                    row -= 1;
                    col -= 1;
                }
                Direction::Vertical => row -= 1,
                Direction::Horizontal => col -= 1,
            }
            moves.push(dir);
        }
        moves
    }
}

/// 块中所有非间隙成员在 `pos` 处与 `symbol` 的最大替换得分。全部为间隙时返回 `None`。
fn best_substitution(
    block: &[Vec<char>],
    pos: usize,
    symbol: char,
    model: &SubstitutionModel,
) -> Result<Option<f32>, AlignError> {
    let gap = model.gap_symbol();
    let mut best: Option<f32> = None;
    for member in block {
        let s = member[pos];
        if s == gap {
            continue;
        }
        let score = model.score(s, symbol)?;
        // first maximum wins: an equal later score does not replace it
        if best.map_or(true, |b| score > b) {
            best = Some(score);
        }
    }
    Ok(best)
}
