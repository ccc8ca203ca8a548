use log::{debug, info};
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::EventPump;

mod config;
mod error;
mod gui;
mod input;
mod surface;
mod text;

use config::{MenuLayout, LAYOUT_CONFIG_PATH};
use gui::{MenuScreen, Navigation};
use input::MenuEvent;
use surface::{CanvasSurface, Surface};

// Initial window size
const WINDOW_WIDTH: u32 = 800;
const WINDOW_HEIGHT: u32 = 600;

/// Runs the menu until the window closes or the player picks a destination
///
/// Returns the requested navigation, or `None` if the player quit.
fn run_menu<S: Surface>(
    menu: &mut MenuScreen<S>,
    event_pump: &mut EventPump,
) -> Result<Option<Navigation>, String> {
    loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => return Ok(None),
                Event::Window {
                    win_event: WindowEvent::SizeChanged(width, height),
                    ..
                } => {
                    menu.resize(width.max(0) as u32, height.max(0) as u32);
                    debug!(
                        "Menu resized to {:?}, play button now at {:?}",
                        menu.background_size(),
                        menu.play_button_rect()
                    );
                }
                _ => {
                    let menu_event = MenuEvent::from(&event);
                    match menu.handle_event(&menu_event) {
                        Some(navigation) => return Ok(Some(navigation)),
                        None => {
                            if let Some(position) = menu_event.pointer_position() {
                                debug!("Click at {:?} missed the play button", position);
                            }
                        }
                    }
                }
            }
        }

        menu.draw()?;

        // Cap framerate to ~60 FPS
        std::thread::sleep(std::time::Duration::new(0, 1_000_000_000u32 / 60));
    }
}

fn main() -> Result<(), String> {
    pretty_env_logger::init();

    let layout = MenuLayout::load_or_default(LAYOUT_CONFIG_PATH)?;

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window = video_subsystem
        .window("MOVEmentum", WINDOW_WIDTH, WINDOW_HEIGHT)
        .position_centered()
        .resizable()
        .build()
        .map_err(|e| e.to_string())?;

    info!("Window created: {}x{}", WINDOW_WIDTH, WINDOW_HEIGHT);

    let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;

    let surface = CanvasSurface::new(canvas, &texture_creator);
    let mut menu = MenuScreen::with_layout(surface, layout)?;
    info!("Menu screen ready");

    match run_menu(&mut menu, &mut event_pump)? {
        Some(navigation) => {
            // The map screen lives outside this binary; report the hand-off.
            info!("Navigation requested: {}", navigation);
            println!("{}", navigation.token());
        }
        None => info!("Menu closed"),
    }

    Ok(())
}
