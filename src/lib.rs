pub mod canvas;
pub mod config;
pub mod error;
pub mod grid;
pub mod output_id;
pub mod palette;
pub mod writer;

use std::path::{Path, PathBuf};

use rand::Rng;

pub use config::Config;
pub use error::{Error, Result};

/// Generates one canvas and saves it as the next `export_<id>.png` in `dir`.
///
/// Nothing is written unless both the canvas and the id were produced
pub fn run<R: Rng + ?Sized>(config: &Config, dir: &Path, rng: &mut R) -> Result<PathBuf> {
    let image = canvas::generate(config, rng)?;
    let id = output_id::allocate(dir)?;
    log::info!("next output id is {id}");
    return writer::write_png(&image, dir, id);
}
