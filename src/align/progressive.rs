use crate::error::AlignError;
use crate::model::SubstitutionModel;
use crate::util::text;

use super::trace::{Direction, TraceMatrix};

/// 等长序列组成的比对块，成员中可能含有间隙符号。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlignmentBlock {
    members: Vec<Vec<char>>,
}

impl AlignmentBlock {
    pub fn from_sequence(seq: &[char]) -> Self {
        Self { members: vec![seq.to_vec()] }
    }

    /// Common length of every member (0 for an empty block).
    pub fn width(&self) -> usize {
        self.members.first().map_or(0, Vec::len)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> &[Vec<char>] {
        &self.members
    }

    pub fn into_members(self) -> Vec<Vec<char>> {
        self.members
    }

    pub fn to_strings(&self) -> Vec<String> {
        self.members.iter().map(|m| text::render(m)).collect()
    }
}

/// Remove every gap symbol from an aligned member.
pub fn strip_gaps(member: &[char], gap_symbol: char) -> Vec<char> {
    member.iter().copied().filter(|&c| c != gap_symbol).collect()
}

/// 渐进式多序列比对：按输入顺序把每条序列依次并入不断增长的比对块。
pub struct Aligner<'a> {
    model: &'a SubstitutionModel,
}

impl<'a> Aligner<'a> {
    pub fn new(model: &'a SubstitutionModel) -> Self {
        Self { model }
    }

    pub fn align<S: AsRef<[char]>>(&self, seqs: &[S]) -> Result<AlignmentBlock, AlignError> {
        if seqs.len() <= 1 {
            let members = seqs.iter().map(|s| s.as_ref().to_vec()).collect();
            return Ok(AlignmentBlock { members });
        }

        let mut block = AlignmentBlock::from_sequence(seqs[0].as_ref());
        for (step, seq) in seqs[1..].iter().enumerate() {
            block = self.extend(&block, seq.as_ref())?;
            log::debug!(
                "extension step {}: {} members, width {}",
                step + 1,
                block.len(),
                block.width()
            );
        }
        Ok(block)
    }

    /// UTF-8 convenience wrapper around [`Aligner::align`].
    pub fn align_strs<S: AsRef<str>>(&self, lines: &[S]) -> Result<Vec<String>, AlignError> {
        let seqs: Vec<Vec<char>> = lines.iter().map(|l| text::to_symbols(l.as_ref())).collect();
        Ok(self.align(&seqs)?.to_strings())
    }

    /// 单步扩展：将 `seq` 与当前块做一次成对比对，返回替换后的新块。
    pub fn extend(&self, block: &AlignmentBlock, seq: &[char]) -> Result<AlignmentBlock, AlignError> {
        let matrix = TraceMatrix::fill(block.members(), seq, self.model)?;
        log::debug!(
            "trace matrix {}x{}, score {}",
            matrix.rows(),
            matrix.cols(),
            matrix.score()
        );

        let moves = matrix.traceback();
        let gap = self.model.gap_symbol();

        let old = block.members();
        let mut members: Vec<Vec<char>> = (0..old.len() + 1).map(|_| Vec::with_capacity(moves.len())).collect();
        let (aligned_old, aligned_new) = members.split_at_mut(old.len());
        let aligned_new = &mut aligned_new[0];

        // forward positions into the block members and into `seq`
        let mut bi = 0usize;
        let mut si = 0usize;
        for dir in moves {
            match dir {
                Direction::Diagonal => {
                    for (out, m) in aligned_old.iter_mut().zip(old) {
                        out.push(m[bi]);
                    }
                    aligned_new.push(seq[si]);
                    bi += 1;
                    si += 1;
                }
                Direction::Vertical => {
                    for (out, m) in aligned_old.iter_mut().zip(old) {
                        out.push(m[bi]);
                    }
                    aligned_new.push(gap);
                    bi += 1;
                }
                Direction::Horizontal => {
                    for out in aligned_old.iter_mut() {
                        out.push(gap);
                    }
                    aligned_new.push(seq[si]);
                    si += 1;
                }
                Direction::None => {}
            }
        }

        Ok(AlignmentBlock { members })
    }
}

/// 便捷函数：用 `model` 比对 `seqs`。
pub fn align<S: AsRef<[char]>>(model: &SubstitutionModel, seqs: &[S]) -> Result<AlignmentBlock, AlignError> {
    Aligner::new(model).align(seqs)
}
