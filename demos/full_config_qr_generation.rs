use std::error::Error;

use qrsmith::{ECLevel, MaskPattern, QRBuilder, Version};

fn main() -> Result<(), Box<dyn Error>> {
    let data = "This example shows all available configuration options for QR code generation.";

    let qr = QRBuilder::new(data.as_bytes())
        .version(Version::new(5)) // QR version (size) - if not provided, finds smallest version to fit data
        .ec_level(ECLevel::M) // Minimum error correction level - if not provided, strongest level that fits
        .mask(MaskPattern::new(2)) // Mask pattern - if not provided, finds best mask based on penalty score
        .verbose(true) // Stage messages and report - if not provided, builds silently
        .build()?;

    // Terminal preview
    println!("{}", qr.to_str(1));

    // Convert to image and save
    let img = qr.to_image(6); // 6x scale factor for larger output
    img.save("configured_qr.png")?;

    println!("Configured QR code saved to: configured_qr.png");
    println!("QR metadata: {}", qr.metadata());

    Ok(())
}
