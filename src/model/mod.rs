//! 替换打分模型：符号对 -> 得分，加上仿射间隙参数与间隙符号。

pub mod file;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::AlignError;

pub const DEFAULT_GAP_OPEN: f32 = -2.0;
pub const DEFAULT_GAP_EXTEND: f32 = -2.0;
pub const DEFAULT_GAP_SYMBOL: char = '⋄';

/// 无序符号对。构造时排序（码点小的在前），因此 `(a, b)` 与 `(b, a)` 是同一个键。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubstitutionKey {
    low: char,
    high: char,
}

impl SubstitutionKey {
    #[inline]
    pub fn new(a: char, b: char) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    #[inline]
    pub fn symbols(&self) -> (char, char) {
        (self.low, self.high)
    }
}

/// 替换得分表与间隙参数，构造后只读。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstitutionModel {
    scores: HashMap<SubstitutionKey, f32>,
    gap_open: f32,
    gap_extend: f32,
    gap_symbol: char,
}

impl Default for SubstitutionModel {
    fn default() -> Self {
        Self::new(HashMap::new(), DEFAULT_GAP_OPEN, DEFAULT_GAP_EXTEND, DEFAULT_GAP_SYMBOL)
    }
}

impl SubstitutionModel {
    pub fn new(scores: HashMap<SubstitutionKey, f32>, gap_open: f32, gap_extend: f32, gap_symbol: char) -> Self {
        Self { scores, gap_open, gap_extend, gap_symbol }
    }

    /// Build a table from `((a, b), score)` entries with default gap parameters.
    /// A later entry for the same unordered pair replaces an earlier one.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = ((char, char), f32)>,
    {
        let scores = pairs
            .into_iter()
            .map(|((a, b), s)| (SubstitutionKey::new(a, b), s))
            .collect();
        Self { scores, ..Self::default() }
    }

    /// 对给定字母表的每一个无序对建表：相同符号得 `match_score`，否则得 `mismatch_score`。
    pub fn uniform<I>(alphabet: I, match_score: f32, mismatch_score: f32) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let mut symbols: Vec<char> = alphabet.into_iter().collect();
        symbols.sort_unstable();
        symbols.dedup();

        let mut scores = HashMap::with_capacity(symbols.len() * (symbols.len() + 1) / 2);
        for (i, &a) in symbols.iter().enumerate() {
            for &b in &symbols[i..] {
                let s = if a == b { match_score } else { mismatch_score };
                scores.insert(SubstitutionKey::new(a, b), s);
            }
        }
        Self { scores, ..Self::default() }
    }

    pub fn with_gap_open(mut self, gap_open: f32) -> Self {
        self.gap_open = gap_open;
        self
    }

    pub fn with_gap_extend(mut self, gap_extend: f32) -> Self {
        self.gap_extend = gap_extend;
        self
    }

    pub fn with_gap_symbol(mut self, gap_symbol: char) -> Self {
        self.gap_symbol = gap_symbol;
        self
    }

    #[inline]
    pub fn gap_open(&self) -> f32 {
        self.gap_open
    }

    #[inline]
    pub fn gap_extend(&self) -> f32 {
        self.gap_extend
    }

    #[inline]
    pub fn gap_symbol(&self) -> char {
        self.gap_symbol
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn contains(&self, a: char, b: char) -> bool {
        self.scores.contains_key(&SubstitutionKey::new(a, b))
    }

    /// 查询替换得分；缺失条目是配置错误，不提供默认值。
    #[inline]
    pub fn score(&self, a: char, b: char) -> Result<f32, AlignError> {
        let key = SubstitutionKey::new(a, b);
        self.scores.get(&key).copied().ok_or_else(|| {
            let (first, second) = key.symbols();
            AlignError::MissingSubstitutionScore { first, second }
        })
    }

    /// Every symbol mentioned by the table, sorted.
    pub fn alphabet(&self) -> Vec<char> {
        let mut out: Vec<char> = self
            .scores
            .keys()
            .flat_map(|k| {
                let (a, b) = k.symbols();
                [a, b]
            })
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    /// Unordered pairs over `symbols` (gap symbol excluded) that have no score.
    pub fn missing_pairs(&self, symbols: &[char]) -> Vec<(char, char)> {
        let mut symbols: Vec<char> = symbols.iter().copied().filter(|&c| c != self.gap_symbol).collect();
        symbols.sort_unstable();
        symbols.dedup();

        let mut missing = Vec::new();
        for (i, &a) in symbols.iter().enumerate() {
            for &b in &symbols[i..] {
                if !self.contains(a, b) {
                    missing.push((a, b));
                }
            }
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_canonical() {
        assert_eq!(SubstitutionKey::new('b', 'a'), SubstitutionKey::new('a', 'b'));
        assert_eq!(SubstitutionKey::new('z', 'a').symbols(), ('a', 'z'));
        assert_eq!(SubstitutionKey::new('q', 'q').symbols(), ('q', 'q'));
    }

    #[test]
    fn lookup_is_symmetric() {
        let m = SubstitutionModel::from_pairs([(('a', 'b'), -1.0), (('a', 'a'), 2.0)]);
        assert_eq!(m.score('a', 'b'), Ok(-1.0));
        assert_eq!(m.score('b', 'a'), Ok(-1.0));
        assert_eq!(m.score('a', 'a'), Ok(2.0));
    }

    #[test]
    fn missing_pair_is_reported_in_canonical_order() {
        let m = SubstitutionModel::from_pairs([(('a', 'a'), 0.0)]);
        assert_eq!(
            m.score('z', 'a'),
            Err(AlignError::MissingSubstitutionScore { first: 'a', second: 'z' })
        );
    }

    #[test]
    fn defaults() {
        let m = SubstitutionModel::default();
        assert!(m.is_empty());
        assert_eq!(m.gap_open(), -2.0);
        assert_eq!(m.gap_extend(), -2.0);
        assert_eq!(m.gap_symbol(), '⋄');
    }

    #[test]
    fn later_pair_overwrites_earlier() {
        let m = SubstitutionModel::from_pairs([(('a', 'b'), 1.0), (('b', 'a'), 3.0)]);
        assert_eq!(m.len(), 1);
        assert_eq!(m.score('a', 'b'), Ok(3.0));
    }

    #[test]
    fn uniform_covers_every_pair() {
        let m = SubstitutionModel::uniform("cab".chars(), 1.0, -1.0);
        assert_eq!(m.len(), 6);
        assert_eq!(m.score('c', 'c'), Ok(1.0));
        assert_eq!(m.score('c', 'a'), Ok(-1.0));
        assert_eq!(m.alphabet(), vec!['a', 'b', 'c']);
        assert!(m.missing_pairs(&['a', 'b', 'c', '⋄']).is_empty());
    }

    #[test]
    fn builder_overrides_gap_parameters() {
        let m = SubstitutionModel::default()
            .with_gap_open(-3.0)
            .with_gap_extend(-0.5)
            .with_gap_symbol('-');
        assert_eq!(m.gap_open(), -3.0);
        assert_eq!(m.gap_extend(), -0.5);
        assert_eq!(m.gap_symbol(), '-');
    }

    #[test]
    fn missing_pairs_lists_absent_entries() {
        let m = SubstitutionModel::from_pairs([(('a', 'a'), 0.0), (('b', 'b'), 0.0)]);
        assert_eq!(m.missing_pairs(&['b', 'a', 'a']), vec![('a', 'b')]);
    }
}
