use std::collections::{BTreeMap, HashMap};
use std::io::Read;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use super::{SubstitutionKey, SubstitutionModel, DEFAULT_GAP_EXTEND, DEFAULT_GAP_OPEN, DEFAULT_GAP_SYMBOL};

/// JSON 替换矩阵文档。所有字段可省略。
///
/// ```json
/// { "gap_open": -3.0, "gap_extend": -0.5, "gap_symbol": "⋄",
///   "substitutions": { "ab": -1.0, "aa": 2.0 } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatrixDocument {
    pub gap_open: f32,
    pub gap_extend: f32,
    pub gap_symbol: char,
    /// 键为两个码点组成的字符串，顺序无关
    pub substitutions: BTreeMap<String, f32>,
}

impl Default for MatrixDocument {
    fn default() -> Self {
        Self {
            gap_open: DEFAULT_GAP_OPEN,
            gap_extend: DEFAULT_GAP_EXTEND,
            gap_symbol: DEFAULT_GAP_SYMBOL,
            substitutions: BTreeMap::new(),
        }
    }
}

// A bare object is the plain pair -> score map with default gap parameters.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDocument {
    Full(MatrixDocument),
    Bare(BTreeMap<String, f32>),
}

impl MatrixDocument {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: RawDocument = serde_json::from_reader(reader)?;
        Ok(match raw {
            RawDocument::Full(doc) => doc,
            RawDocument::Bare(substitutions) => Self { substitutions, ..Self::default() },
        })
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Self::from_reader(s.as_bytes())
    }

    pub fn into_model(self) -> Result<SubstitutionModel> {
        let mut scores = HashMap::with_capacity(self.substitutions.len());
        for (key, score) in &self.substitutions {
            let mut chars = key.chars();
            match (chars.next(), chars.next(), chars.next()) {
                (Some(a), Some(b), None) => {
                    scores.insert(SubstitutionKey::new(a, b), *score);
                }
                _ => {
                    return Err(anyhow!(
                        "substitution key {:?} must be exactly two characters",
                        key
                    ))
                }
            }
        }
        Ok(SubstitutionModel::new(scores, self.gap_open, self.gap_extend, self.gap_symbol))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixMeta {
    pub source_file: Option<String>,
    pub build_args: Option<String>,
    pub build_timestamp: Option<String>,
}

/// 编译后的替换矩阵（`.lsm`，bincode 编码）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixFile {
    pub meta: MatrixMeta,
    pub model: SubstitutionModel,
}

impl MatrixFile {
    pub fn new(model: SubstitutionModel, meta: MatrixMeta) -> Self {
        Self { meta, model }
    }

    pub fn save_to_file(&self, path: &str) -> Result<()> {
        let mut f = std::fs::File::create(path)?;
        bincode::serialize_into(&mut f, self)?;
        Ok(())
    }

    pub fn load_from_file(path: &str) -> Result<Self> {
        let f = std::fs::File::open(path)?;
        let file: Self = bincode::deserialize_from(std::io::BufReader::new(f))?;
        Ok(file)
    }
}

/// Load a model from a JSON document (`.json`) or a compiled matrix file (anything else).
pub fn load_model(path: &str) -> Result<SubstitutionModel> {
    let is_json = Path::new(path)
        .extension()
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        let fh = std::fs::File::open(path).with_context(|| format!("cannot open matrix '{}'", path))?;
        MatrixDocument::from_reader(std::io::BufReader::new(fh))
            .and_then(MatrixDocument::into_model)
            .with_context(|| format!("invalid matrix document '{}'", path))
    } else {
        let file = MatrixFile::load_from_file(path).with_context(|| format!("cannot read matrix file '{}'", path))?;
        if let Some(ts) = &file.meta.build_timestamp {
            log::debug!("matrix '{}' built at {}", path, ts);
        }
        Ok(file.model)
    }
}
