use glam::UVec2;

use crate::{
    error::{Error, Result},
    palette::{self, Palette},
};

pub const CANVAS_SIZE_DEFAULT: UVec2 = UVec2::new(1080, 1080);
/// canvas width and height should both be multiples of this
pub const TILE_SIZE_DEFAULT: u32 = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub palette: Palette,
    pub canvas_size: UVec2,
    pub tile_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        let palette =
            Palette::from_hex(&palette::DEFAULT).expect("default palette literals are valid hex");
        return Config {
            palette,
            canvas_size: CANVAS_SIZE_DEFAULT,
            tile_size: TILE_SIZE_DEFAULT,
        };
    }
}

impl Config {
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        return self;
    }

    pub fn with_canvas_size(mut self, width: u32, height: u32) -> Self {
        self.canvas_size = UVec2::new(width, height);
        return self;
    }

    pub fn with_tile_size(mut self, tile_size: u32) -> Self {
        self.tile_size = tile_size;
        return self;
    }

    pub fn validate(&self) -> Result<()> {
        if self.palette.is_empty() {
            return Err(Error::InvalidConfiguration("palette is empty".to_string()));
        }
        if self.tile_size == 0 {
            return Err(Error::InvalidConfiguration(
                "tile size must be positive".to_string(),
            ));
        }
        let remainder = self.canvas_size % self.tile_size;
        if remainder != UVec2::ZERO {
            log::warn!(
                "canvas {} is not a multiple of tile size {}, a {} pixel strip stays blank",
                self.canvas_size,
                self.tile_size,
                remainder
            );
        }
        return Ok(());
    }
}
