//! Screen-Space GUI
//!
//! Full-window screens drawn in window coordinates onto an injected
//! [`Surface`](crate::surface::Surface).
//!
//! # Available Screens
//!
//! - [`MenuScreen`] - Title menu with the PLAY button
//!
//! # Example Usage
//!
//! ```rust
//! use crate::gui::{MenuScreen, Navigation};
//!
//! let mut menu = MenuScreen::new(surface)?;
//! menu.draw()?;
//!
//! match menu.handle_event(&event) {
//!     Some(Navigation::GoToMap) => { /* switch to the map */ }
//!     None => {}
//! }
//! ```

pub mod menu_screen;

pub use menu_screen::{MenuScreen, Navigation};
