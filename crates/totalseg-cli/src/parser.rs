//! Command-line parser for the segmentation tool.
//!
//! One command, one job: a volume in, a segmentation out. Only the input
//! path is required; everything else has a working default.

use std::path::PathBuf;

use clap::Parser;

/// Command-line interface for whole-body segmentation through the KonfAI
/// prediction engine.
#[derive(Parser, Debug)]
#[command(name = "totalseg")]
#[command(about = "Run TotalSegmentator-KonfAI segmentation on a medical volume")]
#[command(version)]
pub struct Cli {
    /// Input volume (mha, mhd, nii, nii.gz, nrrd, nrrd.gz, gipl, gipl.gz)
    #[arg(short = 'i', long = "input", value_name = "filepath")]
    pub input: PathBuf,

    /// Output segmentation path
    #[arg(
        short = 'o',
        long = "output",
        value_name = "filepath",
        default_value = "Seg.nii.gz"
    )]
    pub output: PathBuf,

    /// Segmentation task to run
    #[arg(short = 't', long = "task", visible_alias = "ta", default_value = "total")]
    pub task: String,

    /// Use the faster low-resolution (3mm) single-model variant
    #[arg(short = 'f', long = "fast")]
    pub fast: bool,

    /// Suppress status output and engine progress
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// GPU list, e.g. "0" or "0,1"; empty selects CPU mode
    #[arg(
        short = 'g',
        long = "gpu",
        env = "CUDA_VISIBLE_DEVICES",
        default_value = ""
    )]
    pub gpu: String,

    /// CPU cores used when no GPU is selected
    #[arg(long = "cpu", value_name = "N", default_value_t = 1)]
    pub cpu: u32,
}
