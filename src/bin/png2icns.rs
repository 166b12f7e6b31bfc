//! Creates an ICNS file containing every standard icon size, generated from
//! a single PNG file.
//!
//! ```shell
//! png2icns -o IconSet.icns image.png
//! # Without -o, the ICNS is saved to image.icns
//! ```
//!
//! The input image is resampled to 16, 32, 64, 128, 256, 512, and 1024
//! pixels square.  Non-square inputs are stretched.

use clap::{Parser, ValueEnum};
use icnsgen::{ConvolutionResampler, FilterType, IcnsError, IconFamily,
              IconFamilyBuilder, Image, ImageOpsResampler, Resampler};
use image::imageops::FilterType as ImageFilterType;
use log::info;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "png2icns")]
#[command(about = "Convert a PNG image into a multi-resolution ICNS icon")]
struct Cli {
    /// Output ICNS file (defaults to the input path with an .icns extension)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Resampling filter used to scale the image
    #[arg(short, long, value_enum, default_value_t = Filter::Mitchell)]
    filter: Filter,
    /// Print progress information
    #[arg(short, long)]
    verbose: bool,
    /// Input PNG file
    input: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Filter {
    /// Mitchell-Netravali cubic
    Mitchell,
    /// Catmull-Rom cubic
    CatmullRom,
    /// Gaussian
    Gaussian,
    /// Lanczos with a window of 3
    Lanczos3,
    /// Bilinear
    Triangle,
    /// Nearest neighbor
    Nearest,
}

fn main() {
    let cli = Cli::parse();
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default()
                                      .default_filter_or(default_filter))
        .init();

    let output = cli.output
                    .clone()
                    .unwrap_or_else(|| cli.input.with_extension("icns"));
    if let Err(err) = convert(&cli.input, &output, cli.filter) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn convert(input: &Path, output: &Path, filter: Filter)
           -> Result<(), IcnsError> {
    let file = File::open(input).map_err(IcnsError::Decode)?;
    let image = Image::read_png(BufReader::new(file))
        .map_err(IcnsError::Decode)?;
    info!("read {}x{} image from {}",
          image.width(),
          image.height(),
          input.display());

    // Build fully in memory; nothing touches `output` unless this succeeds.
    let family = match filter {
        Filter::Mitchell => build(&image, convolution(FilterType::Mitchell)),
        Filter::CatmullRom => {
            build(&image, convolution(FilterType::CatmullRom))
        }
        Filter::Gaussian => build(&image, convolution(FilterType::Gaussian)),
        Filter::Lanczos3 => build(&image, imageops(ImageFilterType::Lanczos3)),
        Filter::Triangle => build(&image, imageops(ImageFilterType::Triangle)),
        Filter::Nearest => build(&image, imageops(ImageFilterType::Nearest)),
    }?;

    family.write_to_file(output)?;
    info!("wrote {} elements ({} bytes) to {}",
          family.num_elements(),
          family.total_length(),
          output.display());
    Ok(())
}

fn build<R: Resampler>(image: &Image, resampler: R)
                       -> Result<IconFamily, IcnsError> {
    IconFamilyBuilder::with_resampler(resampler).build(image)
}

fn convolution(filter: FilterType) -> ConvolutionResampler {
    ConvolutionResampler::new(filter)
}

fn imageops(filter: ImageFilterType) -> ImageOpsResampler {
    ImageOpsResampler::new(filter)
}
