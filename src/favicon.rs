use std::error::Error;
use std::fs::File;
use std::path::PathBuf;
use std::result;

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use log::debug;

use crate::debug::TIME;

type Result<T> = result::Result<T, Box<dyn Error>>;

/// Target resolutions, in the order they are embedded in the container.
/// The order is fixed: consumers pick the entry closest to what they need,
/// smallest first.
pub const ICON_SIZES: [(u32, u32); 4] = [(16, 16), (32, 32), (48, 48), (64, 64)];

pub const DEFAULT_SOURCE_PATH: &str = "public/buho-pandora.png";
pub const DEFAULT_OUTPUT_PATH: &str = "app/favicon.ico";

pub struct FaviconBuilder {
    source_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
}

impl FaviconBuilder {
    pub fn new() -> Self {
        Self {
            source_path: None,
            output_path: None,
        }
    }

    pub fn with_source_path(mut self, p: impl Into<PathBuf>) -> Self {
        self.source_path = Some(p.into());
        self
    }

    pub fn with_output_path(mut self, p: impl Into<PathBuf>) -> Self {
        self.output_path = Some(p.into());
        self
    }

    pub fn build(self) -> Favicon {
        Favicon {
            source_path: self
                .source_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE_PATH)),
            output_path: self
                .output_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH)),
        }
    }
}

impl Default for FaviconBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Favicon {
    source_path: PathBuf,
    output_path: PathBuf,
}

/// What a successful run produced. `natural_size` is the source image's
/// original dimensions, not one of the embedded variants'.
pub struct Summary {
    pub output_path: PathBuf,
    pub natural_size: (u32, u32),
    pub sizes: Vec<(u32, u32)>,
}

impl Favicon {
    /// Runs the whole pipeline: load, resize per target size, write the
    /// multi-resolution ICO. Overwrites any existing output file.
    pub fn generate(&self) -> Result<Summary> {
        // load
        let source = {
            TIME!("load source image");
            image::open(&self.source_path)?
        };
        let natural_size = source.dimensions();
        debug!(
            "loaded {} ({}x{})",
            self.source_path.display(),
            natural_size.0,
            natural_size.1
        );

        // resize, each variant from the original image
        let variants = {
            TIME!("resize variants");
            resize_variants(&source)
        };

        // encode + save
        let icon_dir = encode_icon_dir(&variants)?;
        {
            TIME!("write icon container");
            let file = File::create(&self.output_path)?;
            icon_dir.write(file)?;
        }
        debug!("wrote {}", self.output_path.display());

        Ok(Summary {
            output_path: self.output_path.clone(),
            natural_size,
            sizes: variants.iter().map(|v| v.dimensions()).collect(),
        })
    }
}

fn resize_variants(source: &DynamicImage) -> Vec<DynamicImage> {
    ICON_SIZES
        .iter()
        .map(|&(w, h)| source.resize_exact(w, h, FilterType::Lanczos3))
        .collect()
}

fn encode_icon_dir(variants: &[DynamicImage]) -> Result<IconDir> {
    let mut icon_dir = IconDir::new(ResourceType::Icon);
    for variant in variants {
        let (w, h) = variant.dimensions();
        let image = IconImage::from_rgba_data(w, h, variant.to_rgba8().into_raw());
        icon_dir.add_entry(IconDirEntry::encode(&image)?);
    }
    Ok(icon_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use std::path::Path;

    fn checkerboard(size: u32) -> DynamicImage {
        let mut img = RgbaImage::new(size, size);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = if (x / 8 + y / 8) % 2 == 0 {
                Rgba([200, 60, 30, 255])
            } else {
                Rgba([20, 20, 20, 255])
            };
        }
        DynamicImage::ImageRgba8(img)
    }

    #[test]
    fn variants_match_fixed_sizes_in_order() {
        let variants = resize_variants(&checkerboard(512));
        let dims: Vec<_> = variants.iter().map(|v| v.dimensions()).collect();
        assert_eq!(dims, ICON_SIZES.to_vec());
    }

    #[test]
    fn icon_dir_embeds_one_entry_per_size() {
        let icon_dir = encode_icon_dir(&resize_variants(&checkerboard(512))).unwrap();
        assert_eq!(icon_dir.entries().len(), ICON_SIZES.len());
        for (entry, &(w, h)) in icon_dir.entries().iter().zip(ICON_SIZES.iter()) {
            assert_eq!((entry.width(), entry.height()), (w, h));
        }
    }

    #[test]
    fn builder_defaults_to_fixed_paths() {
        let favicon = FaviconBuilder::new().build();
        assert_eq!(favicon.source_path, Path::new(DEFAULT_SOURCE_PATH));
        assert_eq!(favicon.output_path, Path::new(DEFAULT_OUTPUT_PATH));
    }
}
