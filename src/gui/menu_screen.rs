//! Title Menu Screen
//!
//! The first screen of the game: the logo stretched over the whole window,
//! the game title, and a PLAY button. Clicking PLAY produces a
//! [`Navigation`] for whoever owns the screen to act on.

use crate::config::MenuLayout;
use crate::error::AssetError;
use crate::input::MenuEvent;
use crate::surface::Surface;
use crate::text::BitmapFont;
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use std::fmt;

/// Largest coordinate magnitude an SDL2 `Rect` keeps without clamping
const MAX_COORD: i64 = (i32::MAX / 2) as i64;

/// Screen the host should switch to next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    GoToMap,
}

impl Navigation {
    /// Stable token naming the target screen
    pub fn token(&self) -> &'static str {
        match self {
            Navigation::GoToMap => "go_to_map",
        }
    }
}

impl fmt::Display for Navigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// The title menu
///
/// Owns its surface. Button placement and background size always follow the
/// last size the screen was told about, so the host must call
/// [`MenuScreen::resize`] whenever the window changes size.
///
/// # Example
///
/// ```rust
/// let mut menu = MenuScreen::new(surface)?;
///
/// // Per frame
/// for event in event_pump.poll_iter() {
///     if let Some(next) = menu.handle_event(&MenuEvent::from(&event)) {
///         // switch screens
///     }
/// }
/// menu.draw()?;
/// ```
pub struct MenuScreen<S: Surface> {
    surface: S,
    layout: MenuLayout,
    title_font: BitmapFont,
    button_font: BitmapFont,
    play_button_rect: Rect,
    background: S::Image,
    background_size: (u32, u32),
}

impl<S: Surface> MenuScreen<S> {
    /// Creates the menu with the default layout
    ///
    /// # Errors
    ///
    /// Returns [`AssetError`] if the background image can't be loaded.
    #[allow(dead_code)] // Reserved for hosts without a layout file
    pub fn new(surface: S) -> Result<Self, AssetError> {
        Self::with_layout(surface, MenuLayout::default())
    }

    /// Creates the menu with a custom layout
    ///
    /// # Errors
    ///
    /// Returns [`AssetError`] if the background image can't be loaded.
    pub fn with_layout(surface: S, layout: MenuLayout) -> Result<Self, AssetError> {
        let background = surface.load_image(&layout.background_path)?;
        let (width, height) = surface.size();

        let mut screen = MenuScreen {
            title_font: BitmapFont::new(layout.title_scale),
            button_font: BitmapFont::new(layout.button_scale),
            play_button_rect: Rect::new(0, 0, layout.button_width, layout.button_height),
            background,
            background_size: (width, height),
            surface,
            layout,
        };
        screen.resize(width, height);

        Ok(screen)
    }

    /// Draws the full menu and presents the frame
    ///
    /// Paint order: background, button, title, button label.
    pub fn draw(&mut self) -> Result<(), String> {
        let (width, height) = self.background_size;
        self.surface
            .blit(&self.background, Rect::new(0, 0, width, height))?;

        let [r, g, b] = self.layout.button_color;
        self.surface
            .fill_rect(self.play_button_rect, Color::RGB(r, g, b))?;

        let [r, g, b] = self.layout.text_color;
        let text_color = Color::RGB(r, g, b);

        let title_center = Point::new((width / 2) as i32, self.layout.title_y);
        let title = self
            .title_font
            .layout_centered(&self.layout.title_text, title_center);
        self.surface.fill_rects(&title, text_color)?;

        let label = self
            .button_font
            .layout_centered(&self.layout.button_text, self.play_button_rect.center());
        self.surface.fill_rects(&label, text_color)?;

        self.surface.present();
        Ok(())
    }

    /// Maps an input event to a navigation request
    ///
    /// Only a pointer press inside the PLAY button navigates.
    pub fn handle_event(&self, event: &MenuEvent) -> Option<Navigation> {
        let position = event.pointer_position()?;
        if self.play_button_rect.contains_point(position) {
            Some(Navigation::GoToMap)
        } else {
            None
        }
    }

    /// Re-centers the button and rescales the background to a new size
    ///
    /// The button center is clamped to +/- `i32::MAX / 2`, the range SDL2
    /// rects support, so sizes past roughly 2^31 pixels pin the button to
    /// that edge instead of overflowing.
    pub fn resize(&mut self, width: u32, height: u32) {
        let center_x = i64::from(width / 2);
        let center_y = i64::from(height / 2) + i64::from(self.layout.button_offset_y);
        let center = Point::new(
            center_x.clamp(-MAX_COORD, MAX_COORD) as i32,
            center_y.clamp(-MAX_COORD, MAX_COORD) as i32,
        );
        self.play_button_rect.center_on(center);
        self.background_size = (width, height);
    }

    pub fn play_button_rect(&self) -> Rect {
        self.play_button_rect
    }

    pub fn background_size(&self) -> (u32, u32) {
        self.background_size
    }
}
