use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use qrsmith::{ECLevel, QRBuilder};

#[derive(Parser)]
#[command(name = "qrsmith", version, about = "Generate QR codes")]
struct Cli {
    /// Text to encode
    text: String,
    /// Minimum error correction level: L, M, Q, H or auto
    #[arg(long, default_value = "auto")]
    ec_level: String,
    /// Pixels per module
    #[arg(long, default_value_t = 8)]
    scale: u32,
    /// Output image path
    #[arg(long, short, default_value = "qr.png")]
    output: PathBuf,
    /// Print the symbol to the terminal instead of writing an image
    #[arg(long)]
    ascii: bool,
    /// Print progress and a summary report
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let mut builder = QRBuilder::new(cli.text.as_bytes());
    builder.verbose(cli.verbose);
    if !cli.ec_level.eq_ignore_ascii_case("auto") {
        builder.ec_level(cli.ec_level.parse::<ECLevel>()?);
    }
    let qr = builder.build()?;

    if cli.ascii {
        println!("{}", qr.to_str(1));
        return Ok(());
    }

    qr.to_image(cli.scale.max(1)).save(&cli.output)?;
    println!("QR code saved to: {}", cli.output.display());
    Ok(())
}
