//! All stuff relate to command line

/* crate use */
use anyhow::Result;

/* local use */
use crate::error::Cli;
use crate::format::Format;

/// Generate a random reference and simulated short reads with phred quality
#[derive(clap::Parser, std::fmt::Debug)]
#[clap(name = "synthreads", version = "0.1", author = "Ravo Ravaozafindrasoa")]
pub struct Command {
    /// Random seed use to generate reference and reads
    #[clap(short = 'r', long = "seed", default_value = "42")]
    pub seed: u64,

    /// Length of reference sequence
    #[clap(short = 's', long = "sequence-length", default_value = "10000")]
    pub sequence_length: usize,

    /// Number of reads to generate
    #[clap(short = 'n', long = "n-reads", default_value = "1000")]
    pub n_reads: usize,

    /// Minimal length of reads
    #[clap(short = 'L', long = "min-length", default_value = "50")]
    pub min_length: usize,

    /// Maximal length of reads
    #[clap(short = 'M', long = "max-length", default_value = "150")]
    pub max_length: usize,

    /// Mean of quality score
    #[clap(short = 'q', long = "mean", default_value = "18")]
    pub mean: f64,

    /// Standard deviation of quality score
    #[clap(short = 'd', long = "std-dev", default_value = "3")]
    pub std_dev: f64,

    /// Header of reference sequence
    #[clap(short = 'H', long = "header", default_value = "sequence")]
    pub header: String,

    /// Write reference sequence
    #[clap(
        name = "save_reference",
        short = 'G',
        long = "save-reference",
        overrides_with = "no_save_reference"
    )]
    pub save_reference: bool,

    /// Don't write reference sequence
    #[clap(
        name = "no_save_reference",
        short = 'N',
        long = "no-save-reference",
        overrides_with = "save_reference"
    )]
    pub no_save_reference: bool,

    /// Write generated reads
    #[clap(
        name = "save_reads",
        short = 'R',
        long = "save-reads",
        overrides_with = "no_save_reads"
    )]
    pub save_reads: bool,

    /// Don't write generated reads
    #[clap(
        name = "no_save_reads",
        short = 'P',
        long = "no-save-reads",
        overrides_with = "save_reads"
    )]
    pub no_save_reads: bool,

    /// Path where reference is write in fasta format
    #[clap(
        short = 'f',
        long = "reference-file",
        default_value = "sequenceRefGenomeGenerated.fasta"
    )]
    pub reference_path: String,

    /// Path where reads are write
    #[clap(short = 'F', long = "reads-file", default_value = "readsGenerated.fastq")]
    pub reads_path: String,

    /// Format of reads file, fasta or fastq
    #[clap(short = 'o', long = "output-format", default_value = "fastq")]
    pub output_format: Format,

    /// Number of base per line in reference fasta
    #[clap(short = 'w', long = "line-width", default_value = "60")]
    pub line_width: usize,

    /// Number of thread use by synthreads, 0 use all avaible core, default value 0
    #[clap(short = 't', long = "threads")]
    pub threads: Option<usize>,

    /// Verbosity level also control by environment variable SYNTHREADS_LOG if flag is set SYNTHREADS_LOG value is ignored
    #[clap(short = 'v', long = "verbosity", parse(from_occurrences))]
    pub verbosity: i8,
}

impl Command {
    /// Reference must be write
    pub fn write_reference(&self) -> bool {
        self.save_reference && !self.no_save_reference
    }

    /// Reads must be write
    pub fn write_reads(&self) -> bool {
        self.save_reads && !self.no_save_reads
    }
}

/// Convert verbosity level (number of v) is log::Level
pub fn i82level(level: i8) -> Option<log::Level> {
    match level {
        std::i8::MIN..=0 => None,
        1 => Some(log::Level::Error),
        2 => Some(log::Level::Warn),
        3 => Some(log::Level::Info),
        4 => Some(log::Level::Debug),
        5..=std::i8::MAX => Some(log::Level::Trace),
    }
}

/// set number of global rayon thread pool
pub fn set_nb_threads(nb_threads: usize) -> Result<()> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(nb_threads)
        .build_global()
        .map_err(|_| Cli::CantBuildThreadPool(nb_threads))?;

    Ok(())
}
