use image::{GenericImage, RgbImage};
use rand::Rng;

use crate::{
    config::Config,
    error::Result,
    grid::{Area, CellRect, Grid},
    palette::Color,
};

/// Paints every grid cell with a color sampled independently from the palette.
/// Pixels outside the grid keep the black background
pub fn generate<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Result<RgbImage> {
    config.validate()?;

    let size = config.canvas_size;
    let grid = Grid::for_canvas(size, config.tile_size);
    log::info!(
        "generating {}x{} canvas with {} tiles from {} colors",
        size.x,
        size.y,
        grid.area(),
        config.palette.len()
    );

    let mut image = RgbImage::new(size.x, size.y);
    for loc in grid.iter_locs() {
        let color = config.palette.choose(rng)?;
        log::trace!("cell {loc} -> {color:?}");
        fill_rect(&mut image, CellRect::at(loc, config.tile_size), color);
    }
    return Ok(image);
}

/// Fills `rect`, silently dropping whatever falls outside the image
pub fn fill_rect(image: &mut RgbImage, rect: CellRect, color: Color) {
    let rect = rect.clip(image.dimensions().into());
    let (width, height): (u32, u32) = (rect.max - rect.min).into();
    let mut sub_img = image.sub_image(rect.min.x, rect.min.y, width, height);
    for y in 0..height {
        for x in 0..width {
            sub_img.put_pixel(x, y, color);
        }
    }
}
