pub mod pgm;

pub use pgm::{decode_pgm, encode_pgm, read_pgm, write_pgm};

/// A gray-level raster stored row-major, one byte per sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pixels: Box<[u8]>,
    rows: usize,
    columns: usize,
    gray_levels: u8,
}

impl Image {
    /// Allocates a `rows` x `columns` image with every pixel set to 0.
    pub fn new(rows: usize, columns: usize, gray_levels: u8) -> Self {
        Image {
            pixels: vec![0; rows * columns].into_boxed_slice(),
            rows,
            columns,
            gray_levels,
        }
    }

    pub(crate) fn from_pixels(
        rows: usize,
        columns: usize,
        gray_levels: u8,
        pixels: Vec<u8>,
    ) -> Self {
        debug_assert_eq!(pixels.len(), rows * columns);
        Image {
            pixels: pixels.into_boxed_slice(),
            rows,
            columns,
            gray_levels,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Highest gray level a sample is expected to take.
    pub fn gray_levels(&self) -> u8 {
        self.gray_levels
    }

    /// All samples, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn fill(&mut self, value: u8) {
        self.pixels.fill(value);
    }

    fn ravel_index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.columns,
            "pixel ({row}, {col}) is outside a {}x{} image",
            self.rows,
            self.columns
        );
        row * self.columns + col
    }

    /// # Panics
    /// If `(row, col)` is outside the image
    pub fn get_pixel(&self, row: usize, col: usize) -> u8 {
        self.pixels[self.ravel_index(row, col)]
    }

    /// # Panics
    /// If `(row, col)` is outside the image
    pub fn set_pixel(&mut self, row: usize, col: usize, value: u8) {
        let idx = self.ravel_index(row, col);
        self.pixels[idx] = value;
    }
}
