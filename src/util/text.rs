//! UTF-8 <-> 定宽码点（`char`）转换。
//!
//! 比对核心只处理 `&[char]`，字符串只在边界处（输入读取、诊断信息、CLI 输出）转换。

/// Decode a UTF-8 string into code points.
#[inline]
pub fn to_symbols(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Encode code points back into a UTF-8 string.
#[inline]
pub fn render(symbols: &[char]) -> String {
    symbols.iter().collect()
}

#[inline]
pub fn render_symbol(symbol: &char) -> String {
    render(std::slice::from_ref(symbol))
}

/// Sorted, deduplicated set of symbols occurring in `seqs`, excluding `skip`.
pub fn alphabet_of<S: AsRef<[char]>>(seqs: &[S], skip: Option<char>) -> Vec<char> {
    let mut out: Vec<char> = seqs
        .iter()
        .flat_map(|s| s.as_ref().iter().copied())
        .filter(|&c| Some(c) != skip)
        .collect();
    out.sort_unstable();
    out.dedup();
    out
}
