mod qr;
mod render;

pub use qr::{Module, Region, QR};
pub use render::QUIET_ZONE;

use crate::common::{
    codec::encode,
    ec::interleaved_codewords,
    error::{QRError, QRResult},
    mask::{apply_best_mask, MaskPattern},
    metadata::{ECLevel, Version},
};

// Stage messages are only printed for verbose builders
macro_rules! report {
    ($self:ident, $($arg:tt)*) => {
        if $self.verbose {
            println!($($arg)*);
        }
    };
}

pub struct QRBuilder<'a> {
    data: &'a [u8],
    version: Option<Version>,
    ec_level: Option<ECLevel>,
    exact_ec_level: bool,
    mask: Option<MaskPattern>,
    verbose: bool,
}

impl<'a> QRBuilder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            version: None,
            ec_level: None,
            exact_ec_level: false,
            mask: None,
            verbose: false,
        }
    }

    pub fn data(&mut self, data: &'a [u8]) -> &mut Self {
        self.data = data;
        self
    }

    pub fn version(&mut self, version: Version) -> &mut Self {
        self.version = Some(version);
        self
    }

    pub fn unset_version(&mut self) -> &mut Self {
        self.version = None;
        self
    }

    /// Weakest acceptable level. Stronger levels are preferred whenever the
    /// data still fits.
    pub fn ec_level(&mut self, ec_level: ECLevel) -> &mut Self {
        self.ec_level = Some(ec_level);
        self.exact_ec_level = false;
        self
    }

    /// Uses exactly this level.
    pub fn exact_ec_level(&mut self, ec_level: ECLevel) -> &mut Self {
        self.ec_level = Some(ec_level);
        self.exact_ec_level = true;
        self
    }

    pub fn unset_ec_level(&mut self) -> &mut Self {
        self.ec_level = None;
        self.exact_ec_level = false;
        self
    }

    pub fn mask(&mut self, mask: MaskPattern) -> &mut Self {
        self.mask = Some(mask);
        self
    }

    pub fn unset_mask(&mut self) -> &mut Self {
        self.mask = None;
        self
    }

    pub fn verbose(&mut self, verbose: bool) -> &mut Self {
        self.verbose = verbose;
        self
    }

    // Candidate levels, strongest first
    fn ec_levels(&self) -> Vec<ECLevel> {
        match self.ec_level {
            Some(ecl) if self.exact_ec_level => vec![ecl],
            Some(ecl) => ECLevel::SEARCH_ORDER.into_iter().filter(|&l| l >= ecl).collect(),
            None => ECLevel::SEARCH_ORDER.to_vec(),
        }
    }

    pub fn metadata(&self) -> String {
        let ver = self.version.map_or("Auto".to_string(), |v| (*v).to_string());
        let ecl = match self.ec_level {
            Some(e) if self.exact_ec_level => format!("{e:?}"),
            Some(e) => format!("{e:?} or higher"),
            None => "Auto".to_string(),
        };
        let mask = self.mask.map_or("Auto".to_string(), |m| (*m).to_string());
        format!("{{ Version: {ver}, Ec level: {ecl}, Mask: {mask} }}")
    }
}


impl QRBuilder<'_> {
    pub fn build(&self) -> QRResult<QR> {
        report!(self, "\nGenerating QR {}...", self.metadata());
        if self.data.is_empty() {
            return Err(QRError::EmptyData);
        }

        report!(self, "Encoding data...");
        if self.version.is_none() {
            report!(self, "Finding best version & ec level...");
        }
        let (data_codewords, ver, ecl) = encode(self.data, self.version, &self.ec_levels())?;

        report!(self, "Computing ecc & interleaving...");
        let payload = interleaved_codewords(&data_codewords, ver, ecl)?;

        report!(self, "Constructing QR...");
        let mut qr = QR::new(ver, ecl);

        report!(self, "Drawing function patterns...");
        qr.draw_all_function_patterns()?;

        report!(self, "Drawing encoding region...");
        qr.draw_payload(&payload)?;

        match self.mask {
            Some(m) => {
                report!(self, "Applying mask {}...", *m);
                qr.apply_mask(m)?;
            }
            None => {
                report!(self, "Finding & applying best mask...");
                apply_best_mask(&mut qr)?;
            }
        };

        if self.verbose {
            Self::print_report(&qr, self.data.len(), data_codewords.len());
        }

        Ok(qr)
    }

    fn print_report(qr: &QR, data_len: usize, data_capacity: usize) {
        let ver = qr.version();
        let total_modules = qr.width() * qr.width();
        let dark_modules = qr.count_dark_modules();
        let light_modules = total_modules - dark_modules;
        let ecc_codewords = ver.total_codewords() - data_capacity;

        println!("\x1b[1;32mQR generated successfully!\n \x1b[0m");
        println!("Report:");
        println!("{}", qr.metadata());
        println!("Data capacity: {data_capacity}, Ecc codewords: {ecc_codewords}");
        println!("Data size: {data_len}, Fill: {}%", data_len * 100 / data_capacity);
        println!(
            "Dark Cells: {}, Light Cells: {}, Balance: {}\n",
            dark_modules,
            light_modules,
            dark_modules * 100 / total_modules
        );
    }
}
