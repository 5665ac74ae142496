//! # qrsmith
//!
//! A Rust library for generating model 2 QR codes with Reed-Solomon error correction.
//!
//! ## Features
//!
//! - **Version & Level Selection**: Picks the strongest error correction level and smallest
//!   version that hold the data, or honours pinned values
//! - **Compact Encoding**: Numeric, alphanumeric and byte modes, chosen per input
//! - **Reed-Solomon Error Correction**: GF(256) arithmetic with block splitting and interleaving
//! - **Mask Selection**: All 8 masks scored with the 4 penalty rules, lowest penalty wins
//! - **Rendering**: Grayscale images with quiet zone, or block character strings
//!
//! ## Quick Start
//!
//! ### Simple QR Code Generation
//!
//! ```rust
//! use qrsmith::QRBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Simplest usage - provide only data, all other settings are automatically chosen
//! let qr = QRBuilder::new(b"Hello, World!").build()?;
//!
//! let img = qr.to_image(4); // 4x scale factor
//! assert_eq!(img.width(), (qr.width() as u32 + 8) * 4);
//! # Ok(())
//! # }
//! ```
//!
//! ### Full Configuration
//!
//! ```rust
//! use qrsmith::{ECLevel, MaskPattern, QRBuilder, Version};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let qr = QRBuilder::new(b"HELLO")
//!     .version(Version::new(1))         // Pinned version - if not provided, finds smallest version
//!     .exact_ec_level(ECLevel::L)       // Exact level - `ec_level` sets a minimum instead
//!     .mask(MaskPattern::new(3))        // Mask pattern - if not provided, finds best mask
//!     .build()?;
//!
//! assert_eq!(qr.width(), 21);
//! assert_eq!(qr.mask(), Some(MaskPattern::new(3)));
//! # Ok(())
//! # }
//! ```
//!
//! ## QR Code Components
//!
//! ### Versions
//! - Versions 1-40, with sizes from 21x21 to 177x177 modules
//!
//! ### Error Correction Levels
//! - **L (Low)**: ~7% error correction
//! - **M (Medium)**: ~15% error correction
//! - **Q (Quartile)**: ~25% error correction
//! - **H (High)**: ~30% error correction
//!
//! Unless a level is pinned, the strongest level that still fits the data is used.

#![allow(clippy::items_after_test_module, clippy::suspicious_arithmetic_impl)]

pub mod builder;
pub(crate) mod common;

pub use builder::{Module, QRBuilder, Region, QR};
pub use common::error::{QRError, QRResult};
pub use common::mask::MaskPattern;
pub use common::metadata::{Color, ECLevel, Metadata, Version};
