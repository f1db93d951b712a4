//! 演示如何在 library 模式下使用 line-align。
//!
//! 运行方式：
//! ```bash
//! cargo run --example simple_align
//! ```

use line_align::align::Aligner;
use line_align::distance;
use line_align::model::SubstitutionModel;
use line_align::util::text;

fn main() {
    // 1. 几条 OCR 结果略有出入的文本行
    let lines = [
        "North Carolina NORTH CAROLINA Guilford County",
        "North Carolina OT CAROLINA Guilford County",
        "North Carolna NORTH CAROLINA Guilford Cnty",
    ];
    for l in &lines {
        println!("输入: {}", l);
    }

    // 2. 距离排序：调用方可据此决定并入顺序
    let seqs: Vec<Vec<char>> = lines.iter().map(|l| text::to_symbols(l)).collect();
    println!("\n编辑距离排序:");
    for d in distance::levenshtein_all(&seqs) {
        println!("  d={} ({}, {})", d.distance, d.index_a, d.index_b);
    }

    // 3. 在输入字母表上构造均匀替换模型
    let alphabet = text::alphabet_of(&seqs, None);
    let model = SubstitutionModel::uniform(alphabet, 2.0, -1.0)
        .with_gap_open(-3.0)
        .with_gap_extend(-0.5);
    println!("\n替换模型: {} 条得分, 间隙符号 '{}'", model.len(), model.gap_symbol());

    // 4. 多序列比对
    match Aligner::new(&model).align(&seqs) {
        Ok(block) => {
            println!("\n比对结果（宽度 {}）:", block.width());
            for member in block.members() {
                println!("  {}", text::render(member));
            }
        }
        Err(e) => eprintln!("比对失败: {}", e),
    }
}
