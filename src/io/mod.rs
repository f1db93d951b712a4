pub mod fasta;
pub mod lines;

use anyhow::{anyhow, Result};
use std::io::Write;

/// 一条输入序列；按行读取时没有名称。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedSeq {
    pub name: Option<String>,
    pub desc: Option<String>,
    pub seq: Vec<char>,
}

impl NamedSeq {
    /// FASTA header text after `>`: the id, then the description if present.
    pub fn header(&self) -> Option<String> {
        let name = self.name.as_deref()?;
        Some(match &self.desc {
            Some(desc) => format!("{} {}", name, desc),
            None => name.to_string(),
        })
    }
}

/// Read sequences from `path` ("-" for stdin), one per line or as FASTA records.
pub fn read_input(path: &str, as_fasta: bool) -> Result<Vec<NamedSeq>> {
    let reader: Box<dyn std::io::BufRead> = if path == "-" {
        Box::new(std::io::BufReader::new(std::io::stdin()))
    } else {
        let fh = std::fs::File::open(path).map_err(|e| anyhow!("cannot open input '{}': {}", path, e))?;
        Box::new(std::io::BufReader::new(fh))
    };

    if as_fasta {
        let recs = fasta::FastaReader::new(reader).records()?;
        Ok(recs
            .into_iter()
            .map(|r| NamedSeq { name: Some(r.id), desc: r.desc, seq: r.seq })
            .collect())
    } else {
        Ok(lines::read_lines(reader)?
            .into_iter()
            .map(|seq| NamedSeq { name: None, desc: None, seq })
            .collect())
    }
}

/// Buffered writer to `path`, or stdout when `None`.
pub fn open_output(path: Option<&str>) -> Result<Box<dyn Write>> {
    Ok(if let Some(p) = path {
        let fh = std::fs::File::create(p).map_err(|e| anyhow!("cannot create output '{}': {}", p, e))?;
        Box::new(std::io::BufWriter::new(fh))
    } else {
        Box::new(std::io::BufWriter::new(std::io::stdout()))
    })
}
