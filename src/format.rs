//! Write reference and reads in fasta or fastq

/* standard use */
use std::io::Write;

/* crate use */
use anyhow::Result;

/* local use */
use crate::error::Cli;
use crate::simulate::Read;

/// Default number of base per line in reference fasta
pub const LINE_WIDTH: usize = 60;

/// Format of reads output
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Format {
    Fasta,
    Fastq,
}

impl std::str::FromStr for Format {
    type Err = Cli;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fasta" => Ok(Format::Fasta),
            "fastq" => Ok(Format::Fastq),
            _ => Err(Cli::UnknownOutputFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Format::Fasta => write!(f, "fasta"),
            Format::Fastq => write!(f, "fastq"),
        }
    }
}

/// Write a sequence in fasta format, sequence is split in line of width base
pub fn write_reference<W>(output: &mut W, header: &str, seq: &[u8], width: usize) -> Result<()>
where
    W: Write,
{
    if width == 0 {
        anyhow::bail!(Cli::LineWidthZero);
    }

    writeln!(output, ">{}", header)?;
    for line in seq.chunks(width) {
        output.write_all(line)?;
        output.write_all(b"\n")?;
    }

    Ok(())
}

/// Write reads in format, reads are number from 1 in order
pub fn write_reads<W>(output: &mut W, reads: &[Read], format: Format) -> Result<()>
where
    W: Write,
{
    for (i, read) in reads.iter().enumerate() {
        let seq = std::str::from_utf8(&read.seq)?;

        match format {
            Format::Fastq => writeln!(
                output,
                "@read_{}\n{}\n+\n{}",
                i + 1,
                seq,
                std::str::from_utf8(&read.qual)?
            )?,
            Format::Fasta => writeln!(output, ">{}_{}\n{}", seq, i + 1, seq)?,
        }
    }

    Ok(())
}

/// Write reference in a fasta file
pub fn save_reference<P>(path: P, header: &str, seq: &[u8], width: usize) -> Result<()>
where
    P: AsRef<std::path::Path>,
{
    if width == 0 {
        anyhow::bail!(Cli::LineWidthZero);
    }

    let mut output = std::io::BufWriter::new(std::fs::File::create(path)?);
    write_reference(&mut output, header, seq, width)?;
    output.flush()?;

    Ok(())
}

/// Write reads in a file, format is parse before file creation
pub fn save_reads<P>(path: P, reads: &[Read], format: &str) -> Result<()>
where
    P: AsRef<std::path::Path>,
{
    save_reads_as(path, reads, format.parse()?)
}

/// Write reads in a file with an already parsed format
pub fn save_reads_as<P>(path: P, reads: &[Read], format: Format) -> Result<()>
where
    P: AsRef<std::path::Path>,
{
    let mut output = std::io::BufWriter::new(std::fs::File::create(path)?);
    write_reads(&mut output, reads, format)?;
    output.flush()?;

    Ok(())
}
