//! Rendering an activity feed onto a base map.
//!
//! A render is a single pass:
//! 1. load the base map and check its size
//! 2. parse the feed
//! 3. color and blend every cell with positive activity onto its pixel
//! 4. hand the image to the writer
//!
//! Loading and writing go through [`BaseImageLoader`] and [`ImageWriter`] so
//! callers can render from memory, from disk or into a byte buffer.

use std::io::Write;
use std::path::{Path, PathBuf};

use aurora_common::MapSize;
use image::RgbaImage;
use ovation_parser::ActivityGrid;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{RenderError, Result};
use crate::gradient::{Color, MappingMode};
use crate::png::encode_png;

/// Source of the base map image.
pub trait BaseImageLoader {
    fn load(&self) -> Result<RgbaImage>;
}

/// An in-memory base map. Each render gets its own copy.
impl BaseImageLoader for RgbaImage {
    fn load(&self) -> Result<RgbaImage> {
        Ok(self.clone())
    }
}

/// Loads the base map from an image file in any format the decoder knows.
#[derive(Debug, Clone)]
pub struct FileBaseImageLoader {
    path: PathBuf,
}

impl FileBaseImageLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl BaseImageLoader for FileBaseImageLoader {
    fn load(&self) -> Result<RgbaImage> {
        debug!(path = %self.path.display(), "Loading base map");
        Ok(image::open(&self.path)?.to_rgba8())
    }
}

/// Destination for the rendered map.
///
/// A writer either stores the whole image or fails without leaving output.
pub trait ImageWriter {
    /// What the caller gets back, e.g. the output path.
    type Handle;

    fn write(&mut self, image: &RgbaImage) -> Result<Self::Handle>;
}

/// Writes a PNG file atomically: the data goes to a temporary file in the
/// destination directory which is then renamed over the destination.
#[derive(Debug, Clone)]
pub struct FilePngWriter {
    path: PathBuf,
}

impl FilePngWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ImageWriter for FilePngWriter {
    type Handle = PathBuf;

    fn write(&mut self, image: &RgbaImage) -> Result<PathBuf> {
        let png = encode_png(image)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = tempfile::NamedTempFile::new_in(dir)?;
        file.write_all(&png)?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|err| err.error)?;

        debug!(path = %self.path.display(), bytes = png.len(), "Wrote map");
        Ok(self.path.clone())
    }
}

/// Encodes the map as PNG bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngBufferWriter;

impl ImageWriter for PngBufferWriter {
    type Handle = Vec<u8>;

    fn write(&mut self, image: &RgbaImage) -> Result<Vec<u8>> {
        encode_png(image)
    }
}

/// What a render did.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSummary {
    pub mode: MappingMode,
    pub width: u32,
    pub height: u32,
    /// Rows in the parsed grid.
    pub rows: usize,
    /// Pixels that received a blended color.
    pub painted_cells: usize,
    /// Colored cells that fell outside the image.
    pub ignored_cells: usize,
    pub max_activity: f64,
}

/// Writer handle plus summary of a successful render.
#[derive(Debug, Clone)]
pub struct Rendered<H> {
    pub handle: H,
    pub summary: RenderSummary,
}

/// Renders activity feeds onto base maps of a fixed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapRenderer {
    mode: MappingMode,
    size: MapSize,
}

impl Default for MapRenderer {
    fn default() -> Self {
        Self::new(MappingMode::default())
    }
}

impl MapRenderer {
    /// Renderer for the required 1024x512 map.
    pub fn new(mode: MappingMode) -> Self {
        Self {
            mode,
            size: MapSize::REQUIRED,
        }
    }

    /// Require a different base map size.
    pub fn with_size(mut self, size: MapSize) -> Self {
        self.size = size;
        self
    }

    /// Load, check, parse, composite and write.
    ///
    /// A base map of the wrong size fails with [`RenderError::Dimension`]
    /// before the feed is parsed and without calling the writer.
    pub fn render<L, W>(&self, raw: &str, loader: &L, writer: &mut W) -> Result<Rendered<W::Handle>>
    where
        L: BaseImageLoader + ?Sized,
        W: ImageWriter + ?Sized,
    {
        let mut image = loader.load()?;

        if !self.size.matches(image.width(), image.height()) {
            let actual = MapSize::new(image.width(), image.height());
            return Err(RenderError::dimension(actual, self.size));
        }

        let grid = ActivityGrid::parse(raw)?;
        let summary = self.composite(&grid, &mut image);
        let handle = writer.write(&image)?;

        info!(
            mode = %summary.mode,
            rows = summary.rows,
            painted = summary.painted_cells,
            max_activity = summary.max_activity,
            "Rendered aurora map"
        );

        Ok(Rendered { handle, summary })
    }

    /// Blend every colored cell of `grid` onto `image` in place.
    ///
    /// Rows and columns beyond the image are skipped. Each pixel is read
    /// once from the base map before it is written.
    pub fn composite(&self, grid: &ActivityGrid, image: &mut RgbaImage) -> RenderSummary {
        let bounds = MapSize::new(image.width(), image.height());
        let mut painted_cells = 0;
        let mut ignored_cells = 0;

        for (row, column, activity) in grid.cells() {
            let Some(color) = self.mode.color_for(activity) else {
                continue;
            };
            if !bounds.contains(column, row) {
                ignored_cells += 1;
                continue;
            }

            let pixel = image.get_pixel_mut(column as u32, row as u32);
            *pixel = self.mode.blend(Color::from(*pixel), color).into();
            painted_cells += 1;
        }

        if ignored_cells > 0 {
            warn!(
                ignored = ignored_cells,
                size = %bounds,
                "Activity cells outside the base map were ignored"
            );
        }

        RenderSummary {
            mode: self.mode,
            width: bounds.width,
            height: bounds.height,
            rows: grid.row_count(),
            painted_cells,
            ignored_cells,
            max_activity: grid.max_activity(),
        }
    }
}

/// Render `raw` onto the base map at `basemap` and write a PNG to `output`.
pub fn generate_map(
    raw: &str,
    basemap: impl AsRef<Path>,
    output: impl AsRef<Path>,
    mode: MappingMode,
) -> Result<PathBuf> {
    let loader = FileBaseImageLoader::new(basemap.as_ref());
    let mut writer = FilePngWriter::new(output.as_ref());
    MapRenderer::new(mode)
        .render(raw, &loader, &mut writer)
        .map(|rendered| rendered.handle)
}
