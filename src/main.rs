// Allow unused code for designed-but-not-yet-used APIs
// Remove these as the codebase matures
#![allow(dead_code)]

mod animation;
mod canvas;
mod color;
mod display;
mod palette;
mod sketch;
mod util;

use canvas::{PixelBuffer, TEXTURE_SIDE, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use display::{Display, InputEvent, MouseButtonKind, RenderTarget, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use sdl2::keyboard::Keycode;
use sketch::{Sandbox, Sketch};
use util::FpsCounter;

const PALETTE_PATH: &str = "palette.json";

/// Parse command line arguments and return (width, height, vsync)
fn parse_args() -> (u32, u32, bool) {
    let args: Vec<String> = std::env::args().collect();
    let mut width = DEFAULT_WIDTH;
    let mut height = DEFAULT_HEIGHT;
    let mut vsync = true;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--no-vsync" => vsync = false,
            "--width" | "-w" => {
                if i + 1 < args.len() {
                    if let Ok(w) = args[i + 1].parse::<u32>() {
                        width = w;
                    }
                    i += 1;
                }
            },
            "--height" | "-h" => {
                if i + 1 < args.len() {
                    if let Ok(h) = args[i + 1].parse::<u32>() {
                        height = h;
                    }
                    i += 1;
                }
            },
            "--resolution" | "-r" => {
                if i + 1 < args.len() {
                    // Parse WxH format (e.g., 1600x1200)
                    let parts: Vec<&str> = args[i + 1].split('x').collect();
                    if parts.len() == 2 {
                        if let (Ok(w), Ok(h)) = (parts[0].parse::<u32>(), parts[1].parse::<u32>()) {
                            width = w;
                            height = h;
                        }
                    }
                    i += 1;
                }
            },
            "--help" => {
                println!("Usage: rasterpad [OPTIONS]");
                println!();
                println!("Options:");
                println!(
                    "  --width W, -w W       Set window width (default: {})",
                    DEFAULT_WIDTH
                );
                println!(
                    "  --height H, -h H      Set window height (default: {})",
                    DEFAULT_HEIGHT
                );
                println!("  --resolution WxH, -r WxH  Set resolution (e.g., 1600x1200)");
                println!("  --no-vsync            Disable VSync for uncapped framerate");
                println!("  --help                Show this help message");
                std::process::exit(0);
            },
            _ => {},
        }
        i += 1;
    }

    (width, height, vsync)
}

fn main() -> Result<(), String> {
    let (width, height, vsync) = parse_args();

    let (mut display, texture_creator) = Display::with_options("rasterpad", width, height, vsync)?;
    let mut target = RenderTarget::with_side(&texture_creator, TEXTURE_SIDE)?;
    let mut buffer = PixelBuffer::with_side(TEXTURE_SIDE);

    // FPS counter with 60 sample rolling average
    let mut fps_counter = FpsCounter::new(60);
    let mut show_fps = false;

    // Pick up a previously tinted palette if one was saved
    let mut sandbox = match palette::Palette::load(PALETTE_PATH) {
        Ok(palette) => Sandbox::new(palette),
        Err(_) => Sandbox::default(),
    };

    println!("=== rasterpad ===");
    println!("Window: {}x{}", width, height);
    println!(
        "Canvas: {0}x{0}, viewport {1}x{2}",
        TEXTURE_SIDE, VIEWPORT_WIDTH, VIEWPORT_HEIGHT
    );
    if vsync {
        println!("VSync: ON (60fps locked). Use --no-vsync for uncapped.");
    } else {
        println!("VSync: OFF (uncapped framerate)");
    }
    println!("Use --help for command line options.");
    println!("Controls:");
    println!("  Left click - Cycle circle tint");
    println!("  B          - Toggle blur pass");
    println!("  F          - Toggle FPS in window title");
    println!("  S          - Save palette");
    println!("  L          - Load palette");
    println!("  Escape     - Quit");

    'main: loop {
        let (_dt, avg_fps) = fps_counter.tick();

        // Handle input
        for event in display.poll_events() {
            match event {
                InputEvent::Quit => break 'main,
                InputEvent::KeyDown(key) => match key {
                    Keycode::Escape => break 'main,
                    Keycode::B => {
                        let on = sandbox.toggle_blur();
                        println!("Blur: {}", if on { "ON" } else { "OFF" });
                    },
                    Keycode::F => {
                        show_fps = !show_fps;
                        if !show_fps {
                            display.set_title("rasterpad")?;
                        }
                    },
                    Keycode::S => {
                        if let Err(e) = sandbox.palette().save(PALETTE_PATH) {
                            eprintln!("Failed to save: {}", e);
                        } else {
                            println!("Palette saved to {}", PALETTE_PATH);
                        }
                    },
                    Keycode::L => match palette::Palette::load(PALETTE_PATH) {
                        Ok(palette) => {
                            sandbox.set_palette(palette);
                            println!("Palette loaded from {}", PALETTE_PATH);
                        },
                        Err(e) => eprintln!("Failed to load: {}", e),
                    },
                    _ => {},
                },
                InputEvent::MouseDown { x, y, button } => {
                    if button == MouseButtonKind::Left {
                        // Window coordinates -> viewport coordinates
                        // (the viewport is scaled to fill the window)
                        let vx = x * VIEWPORT_WIDTH as i32 / display.width().max(1) as i32;
                        let vy = y * VIEWPORT_HEIGHT as i32 / display.height().max(1) as i32;
                        sandbox.pointer_down(vx, vy);
                    }
                },
            }
        }

        // Advance and repaint the frame
        sandbox.update();
        sandbox.render(&mut buffer);

        if show_fps {
            let title = format!(
                "rasterpad - {} fps ({:.1} ms)",
                avg_fps as u32,
                fps_counter.avg_frame_time_ms()
            );
            display.set_title(&title)?;
        }

        display.present(&mut target, &buffer)?;
    }

    Ok(())
}
