//! Drawing Surfaces
//!
//! Screens never touch the window directly. They are handed a [`Surface`]
//! that knows its size, can load images and fill/blit rectangles, and can
//! present a finished frame. [`CanvasSurface`] is the SDL2 implementation;
//! tests use a recording surface that needs no video subsystem.

use crate::error::AssetError;
use sdl2::image::LoadTexture;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use std::path::Path;

/// A drawable target provided by the host application
pub trait Surface {
    /// Loaded image handle produced by [`Surface::load_image`]
    type Image;

    /// Current drawable size (width, height), in the same coordinates
    /// pointer events report
    fn size(&self) -> (u32, u32);

    /// Loads and decodes an image file
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::Load`] if the file is missing or cannot be decoded.
    fn load_image(&self, path: &Path) -> Result<Self::Image, AssetError>;

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String>;

    /// Fills many rects with one color (used for bitmap text)
    fn fill_rects(&mut self, rects: &[Rect], color: Color) -> Result<(), String>;

    /// Draws `image` stretched to fill `dst`
    fn blit(&mut self, image: &Self::Image, dst: Rect) -> Result<(), String>;

    /// Shows everything drawn since the last present
    fn present(&mut self);
}

/// SDL2 window canvas as a [`Surface`]
///
/// The texture creator is borrowed rather than owned because every
/// texture it creates borrows it for `'a`.
pub struct CanvasSurface<'a> {
    canvas: Canvas<Window>,
    texture_creator: &'a TextureCreator<WindowContext>,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(canvas: Canvas<Window>, texture_creator: &'a TextureCreator<WindowContext>) -> Self {
        CanvasSurface {
            canvas,
            texture_creator,
        }
    }
}

impl<'a> Surface for CanvasSurface<'a> {
    type Image = Texture<'a>;

    // The window is not created with allow_highdpi, so window size and
    // renderer output size agree and match mouse event coordinates.
    fn size(&self) -> (u32, u32) {
        self.canvas.window().size()
    }

    fn load_image(&self, path: &Path) -> Result<Texture<'a>, AssetError> {
        self.texture_creator
            .load_texture(path)
            .map_err(|reason| AssetError::Load {
                path: path.to_path_buf(),
                reason,
            })
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String> {
        self.canvas.set_draw_color(color);
        self.canvas.fill_rect(rect)
    }

    fn fill_rects(&mut self, rects: &[Rect], color: Color) -> Result<(), String> {
        if rects.is_empty() {
            return Ok(());
        }
        self.canvas.set_draw_color(color);
        self.canvas.fill_rects(rects)
    }

    fn blit(&mut self, image: &Texture<'a>, dst: Rect) -> Result<(), String> {
        self.canvas.copy(image, None, Some(dst))
    }

    fn present(&mut self) {
        self.canvas.present();
    }
}


#[cfg(test)]
mod tests {
    use super::recording::*;
    use super::*;

    #[test]
    fn test_recording_surface_loads_known_image() {
        let surface = RecordingSurface::new(800, 600);
        let image = surface.load_image(Path::new("assets/logo.png")).unwrap();
        assert_eq!(image.path, Path::new("assets/logo.png"));
    }

    #[test]
    fn test_recording_surface_missing_image() {
        let surface = RecordingSurface::without_images(800, 600);
        let result = surface.load_image(Path::new("assets/logo.png"));
        assert!(matches!(result, Err(AssetError::Load { .. })));
    }
}
