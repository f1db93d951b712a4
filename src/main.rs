use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::io::Write;

use line_align::align::{self, AlignOpt};
use line_align::distance;
use line_align::io;
use line_align::model::file::{MatrixDocument, MatrixFile, MatrixMeta};

#[derive(Parser, Debug)]
#[command(name = "line-align", author, version, about = "Progressive multiple alignment of text lines and sequences", arg_required_else_help = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile a JSON substitution matrix into a binary matrix file
    Matrix {
        /// JSON matrix document
        input: String,
        /// Output prefix (writes <prefix>.lsm)
        #[arg(short, long, default_value = "matrix")]
        output: String,
    },
    /// Align sequences (one per line, or FASTA with --fasta)
    Align {
        /// Input file ("-" for stdin)
        input: String,
        /// Substitution matrix (.json document or compiled .lsm)
        #[arg(short = 'm', long = "matrix")]
        matrix: Option<String>,
        /// Read and write FASTA instead of plain lines
        #[arg(long)]
        fasta: bool,
        #[arg(long = "gap-open", allow_hyphen_values = true)]
        gap_open: Option<f32>,
        #[arg(long = "gap-extend", allow_hyphen_values = true)]
        gap_extend: Option<f32>,
        #[arg(long = "gap-symbol")]
        gap_symbol: Option<char>,
        /// Score for equal symbols when no matrix is given
        #[arg(long = "match", default_value_t = 1.0, allow_hyphen_values = true)]
        match_score: f32,
        /// Score for different symbols when no matrix is given
        #[arg(long = "mismatch", default_value_t = -1.0, allow_hyphen_values = true)]
        mismatch_score: f32,
        /// Output path (stdout if omitted)
        #[arg(short, long)]
        out: Option<String>,
    },
    /// Rank all sequence pairs by edit distance
    Distance {
        /// Input file ("-" for stdin)
        input: String,
        #[arg(long)]
        fasta: bool,
        /// Output path (stdout if omitted)
        #[arg(short, long)]
        out: Option<String>,
    },
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Commands::Matrix { input, output } => run_matrix(&input, &output),
        Commands::Align {
            input,
            matrix,
            fasta,
            gap_open,
            gap_extend,
            gap_symbol,
            match_score,
            mismatch_score,
            out,
        } => {
            let opt = AlignOpt {
                matrix,
                fasta,
                gap_open,
                gap_extend,
                gap_symbol,
                match_score,
                mismatch_score,
            };
            align::align_file_with_opt(&input, out.as_deref(), opt)
        }
        Commands::Distance { input, fasta, out } => run_distance(&input, fasta, out.as_deref()),
    }
}

fn run_matrix(input: &str, output: &str) -> Result<()> {
    let fh = std::fs::File::open(input)
        .map_err(|e| anyhow::anyhow!("cannot open matrix document '{}': {}", input, e))?;
    let doc = MatrixDocument::from_reader(std::io::BufReader::new(fh))
        .map_err(|e| anyhow::anyhow!("invalid matrix document '{}': {}", input, e))?;
    let model = doc.into_model()?;

    if model.is_empty() {
        log::warn!("matrix document '{}' has no substitution scores", input);
    }

    println!("matrix: {}", input);
    println!("entries: {}", model.len());
    println!("alphabet: {}", model.alphabet().len());

    let meta = MatrixMeta {
        source_file: Some(input.to_string()),
        build_args: Some(std::env::args().collect::<Vec<_>>().join(" ")),
        build_timestamp: Some(chrono::Utc::now().to_rfc3339()),
    };

    let out_path = format!("{}.lsm", output);
    MatrixFile::new(model, meta)
        .save_to_file(&out_path)
        .map_err(|e| anyhow::anyhow!("cannot write matrix to '{}': {}", out_path, e))?;
    println!("matrix file saved: {}", out_path);
    Ok(())
}

fn run_distance(input: &str, fasta: bool, out_path: Option<&str>) -> Result<()> {
    let records = io::read_input(input, fasta)?;
    let seqs: Vec<Vec<char>> = records.into_iter().map(|r| r.seq).collect();
    log::info!("ranking {} sequences ({} pairs)", seqs.len(), seqs.len() * seqs.len().saturating_sub(1) / 2);

    let mut out = io::open_output(out_path)?;
    for d in distance::levenshtein_all(&seqs) {
        writeln!(out, "{}\t{}\t{}", d.distance, d.index_a, d.index_b)?;
    }
    out.flush()?;
    Ok(())
}
