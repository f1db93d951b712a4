//! # line-align
//!
//! 短文本行 / 生物序列的渐进式多序列比对。
//!
//! 本 crate 提供：
//!
//! - **替换模型**：无序符号对 -> 得分的查找表，加上仿射间隙参数（开启 / 延伸）与间隙符号
//! - **多序列比对**：按输入顺序将序列逐条并入比对块，每步做一次仿射间隙全局 DP 与回溯
//! - **编辑距离**：Levenshtein 距离与集合内全部序列对的距离排序
//!
//! ## 快速示例
//!
//! ```rust
//! use line_align::align::Aligner;
//! use line_align::distance;
//! use line_align::model::SubstitutionModel;
//!
//! let model = SubstitutionModel::from_pairs([(('a', 'a'), 0.0), (('a', 'b'), -1.0), (('b', 'b'), 0.0)])
//!     .with_gap_open(-1.0)
//!     .with_gap_extend(-1.0);
//!
//! let aligned = Aligner::new(&model).align_strs(&["aba", "aa"]).unwrap();
//! assert_eq!(aligned, vec!["aba", "a⋄a"]);
//!
//! assert_eq!(distance::levenshtein_str("aba", "aa"), 1);
//! ```
//!
//! ## 模块说明
//!
//! - [`model`] — 替换模型与矩阵文件（JSON 文档 / bincode 编译文件）
//! - [`align`] — 回溯矩阵、渐进式比对引擎
//! - [`distance`] — 编辑距离
//! - [`io`] — 按行 / FASTA 输入读取
//! - [`util`] — UTF-8 与码点之间的转换

pub mod align;
pub mod distance;
pub mod error;
pub mod io;
pub mod model;
pub mod util;

pub use error::AlignError;
