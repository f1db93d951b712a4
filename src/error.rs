use thiserror::Error;

use crate::util::text;

/// 比对过程中可能出现的错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignError {
    /// 替换矩阵中缺少某一对符号的得分。`first <= second`（规范顺序）。
    #[error("substitution matrix has no score for the pair '{}' / '{}'", text::render_symbol(.first), text::render_symbol(.second))]
    MissingSubstitutionScore { first: char, second: char },
}

impl AlignError {
    /// The offending pair in canonical order.
    pub fn pair(&self) -> (char, char) {
        match *self {
            AlignError::MissingSubstitutionScore { first, second } => (first, second),
        }
    }
}
