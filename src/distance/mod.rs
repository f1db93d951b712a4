//! 单位代价编辑距离（Levenshtein），以及集合内所有序列对的距离排序。
//!
//! 不考虑相邻字符换位：插入、删除、替换各计 1。与比对模型无关。

/// 一对序列的编辑距离，`index_a < index_b` 为调用方输入中的下标。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Distance {
    pub distance: usize,
    pub index_a: usize,
    pub index_b: usize,
}

/// Levenshtein distance between two symbol sequences.
///
/// Two-row sweep, `O(len(a) * len(b))` time and `O(len(b))` space.
pub fn levenshtein<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let n = b.len();

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr: Vec<usize> = vec![0; n + 1];

    for (i, sa) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, sb) in b.iter().enumerate() {
            let del = prev[j + 1] + 1;
            let ins = curr[j] + 1;
            let sub = if sa == sb { prev[j] } else { prev[j] + 1 };
            curr[j + 1] = del.min(ins).min(sub);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[n]
}

/// 按码点（而非字节）计算两个字符串的编辑距离。
pub fn levenshtein_str(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    levenshtein(&a, &b)
}

/// 对所有 `i < j` 计算距离，并按距离升序做稳定排序。
///
/// 距离相同时保持生成顺序（`i` 升序，其次 `j` 升序）。少于两条序列时返回空。
pub fn levenshtein_all<T, S>(seqs: &[S]) -> Vec<Distance>
where
    T: PartialEq,
    S: AsRef<[T]>,
{
    let n = seqs.len();
    let mut out = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in i + 1..n {
            out.push(Distance {
                distance: levenshtein(seqs[i].as_ref(), seqs[j].as_ref()),
                index_a: i,
                index_b: j,
            });
        }
    }
    // sort_by_key is stable
    out.sort_by_key(|d| d.distance);
    out
}
