//! Huffarc CLI - Huffman file compressor
//!
//! Thin front end over `huffarc-codec`: reads a file fully into memory,
//! runs the codec, writes the result, and reports timing.

use clap::{Parser, Subcommand};
use huffarc_codec::{
    FrequencyTable, HuffmanTree, TreeOrder, archive_info, avg_length, compress, decompress_with,
};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "huffarc")]
#[command(author, version, about = "Huffman file compressor")]
#[command(long_about = "
Huffarc compresses single files with Huffman coding into a
self-describing archive (serialized code tree + packed payload).

Examples:
  huffarc compress notes.txt
  huffarc compress notes.txt -o notes.huf
  huffarc decompress notes.huf
  huffarc info notes.huf
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    #[command(alias = "c")]
    Compress {
        /// File to compress
        input: PathBuf,

        /// Output path (defaults to <input>.huf)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the per-symbol code statistics
        #[arg(short, long)]
        verbose: bool,
    },

    /// Decompress an archive
    #[command(aliases = ["d", "x"])]
    Decompress {
        /// Archive to decompress
        input: PathBuf,

        /// Output path (defaults to <input> without .huf, or <input>.orig)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Rebuild the tree assuming strict postorder records
        #[arg(long)]
        postorder: bool,
    },

    /// Show information about an archive
    #[command(alias = "i")]
    Info {
        /// Archive file to inspect
        archive: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            verbose,
        } => cmd_compress(&input, output, verbose),
        Commands::Decompress {
            input,
            output,
            postorder,
        } => cmd_decompress(&input, output, postorder),
        Commands::Info { archive } => cmd_info(&archive),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_compress(
    input: &Path,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = output.unwrap_or_else(|| {
        let mut path = input.as_os_str().to_owned();
        path.push(".huf");
        PathBuf::from(path)
    });

    let data = std::fs::read(input)?;

    let start = Instant::now();
    let archive = compress(&data)?;
    let elapsed = start.elapsed();

    std::fs::write(&output, &archive)?;

    if !data.is_empty() {
        let freq = FrequencyTable::from_bytes(&data);
        let tree = HuffmanTree::from_frequencies(&freq)?;
        println!("Bits per symbol: {:.4}", avg_length(&tree, &freq));

        if verbose {
            let codes = huffarc_codec::CodeTable::from_tree(&tree);
            for (symbol, code) in codes.iter() {
                println!("  {:#04x}: {}", symbol, code);
            }
        }
    }

    println!(
        "Compressed {} ({} bytes) to {} ({} bytes, {:.1}%) in {:.3}s",
        input.display(),
        data.len(),
        output.display(),
        archive.len(),
        ratio_percent(archive.len(), data.len()),
        elapsed.as_secs_f64()
    );

    Ok(())
}

fn cmd_decompress(
    input: &Path,
    output: Option<PathBuf>,
    postorder: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = output.unwrap_or_else(|| default_decompress_path(input));

    let archive = std::fs::read(input)?;
    let order = if postorder {
        TreeOrder::Postorder
    } else {
        TreeOrder::General
    };

    let start = Instant::now();
    let data = decompress_with(&archive, order)?;
    let elapsed = start.elapsed();

    std::fs::write(&output, &data)?;

    println!(
        "Decompressed {} to {} ({} bytes) in {:.3}s",
        input.display(),
        output.display(),
        data.len(),
        elapsed.as_secs_f64()
    );

    Ok(())
}

fn cmd_info(archive: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read(archive)?;
    let info = archive_info(&data)?;

    println!("Archive: {}", archive.display());
    println!("  Archive size: {} bytes", data.len());
    println!("  Internal tree nodes: {}", info.node_count);
    println!("  Original size: {} bytes", info.original_size);
    println!("  Payload: {} bytes", info.payload_len);
    if info.original_size > 0 {
        println!(
            "  Compression ratio: {:.1}%",
            ratio_percent(data.len(), info.original_size as usize)
        );
    }

    Ok(())
}

/// Strip a trailing `.huf` extension, or append `.orig` when the input
/// does not carry one.
fn default_decompress_path(input: &Path) -> PathBuf {
    if input.extension().is_some_and(|ext| ext == "huf") {
        input.with_extension("")
    } else {
        let mut path = input.as_os_str().to_owned();
        path.push(".orig");
        PathBuf::from(path)
    }
}

fn ratio_percent(compressed: usize, original: usize) -> f64 {
    if original == 0 {
        return 0.0;
    }
    compressed as f64 / original as f64 * 100.0
}
