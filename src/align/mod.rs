pub mod progressive;
pub mod trace;

pub use progressive::{align, strip_gaps, Aligner, AlignmentBlock};
pub use trace::{Direction, TraceCell, TraceMatrix};

use anyhow::{bail, Context, Result};
use std::io::Write;

use crate::io;
use crate::model::{self, SubstitutionModel};
use crate::util::text;

/// `align` 子命令的选项
#[derive(Debug, Clone)]
pub struct AlignOpt {
    /// JSON 文档或编译后的 `.lsm` 矩阵；缺省时按输入字母表构造均匀模型
    pub matrix: Option<String>,
    pub fasta: bool,
    pub gap_open: Option<f32>,
    pub gap_extend: Option<f32>,
    pub gap_symbol: Option<char>,
    pub match_score: f32,
    pub mismatch_score: f32,
}

impl Default for AlignOpt {
    fn default() -> Self {
        Self {
            matrix: None,
            fasta: false,
            gap_open: None,
            gap_extend: None,
            gap_symbol: None,
            match_score: 1.0,
            mismatch_score: -1.0,
        }
    }
}

/// Resolve the substitution model for `seqs`: matrix file (if any), then CLI overrides.
pub fn build_model(opt: &AlignOpt, seqs: &[Vec<char>]) -> Result<SubstitutionModel> {
    let mut m = match &opt.matrix {
        Some(path) => {
            let m = model::file::load_model(path)?;
            log::info!("substitution matrix: {} ({} entries)", path, m.len());
            m
        }
        None => {
            let gap = opt.gap_symbol.unwrap_or(model::DEFAULT_GAP_SYMBOL);
            let alphabet = text::alphabet_of(seqs, Some(gap));
            log::info!(
                "uniform model over {} symbols (match {}, mismatch {})",
                alphabet.len(),
                opt.match_score,
                opt.mismatch_score
            );
            SubstitutionModel::uniform(alphabet, opt.match_score, opt.mismatch_score)
        }
    };

    if let Some(v) = opt.gap_open {
        m = m.with_gap_open(v);
    }
    if let Some(v) = opt.gap_extend {
        m = m.with_gap_extend(v);
    }
    if let Some(v) = opt.gap_symbol {
        m = m.with_gap_symbol(v);
    }

    let gap = m.gap_symbol();
    if let Some(i) = seqs.iter().position(|s| s.contains(&gap)) {
        bail!(
            "sequence {} contains the gap symbol '{}'; choose another with --gap-symbol",
            i,
            gap
        );
    }
    let missing = m.missing_pairs(&text::alphabet_of(seqs, Some(gap)));
    if !missing.is_empty() {
        log::warn!(
            "{} symbol pairs in the input have no substitution score; alignment may fail",
            missing.len()
        );
    }
    Ok(m)
}

pub fn align_file_with_opt(input: &str, out_path: Option<&str>, opt: AlignOpt) -> Result<()> {
    let records = io::read_input(input, opt.fasta)?;
    log::info!("read {} sequences from {}", records.len(), input);

    let seqs: Vec<Vec<char>> = records.iter().map(|r| r.seq.clone()).collect();
    let model = build_model(&opt, &seqs)?;

    let block = Aligner::new(&model)
        .align(&seqs)
        .with_context(|| format!("cannot align sequences from '{}'", input))?;
    log::info!("alignment width: {}", block.width());

    let mut out = io::open_output(out_path)?;
    for (rec, member) in records.iter().zip(block.members()) {
        match rec.header() {
            Some(header) => writeln!(out, ">{}\n{}", header, text::render(member))?,
            None => writeln!(out, "{}", text::render(member))?,
        }
    }
    out.flush()?;
    Ok(())
}
