//! Interactive maze window. Keyboard events become session commands, a polling tick drives the
//! auto-solve animation and every change is redrawn.

use std::thread;
use std::time::Instant;

use log::info;
use rand::Rng;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::cells::CompassPrimary;
use crate::errors::*;
use crate::input::{self, Command, Outcome};
use crate::renderers::{self, FilledRect, RenderOptions};
use crate::session::Session;
use crate::timing::{self, StepTimer};

pub const WINDOW_TITLE: &str = "Random Maze Generator";

pub struct SdlSetup {
    pub sdl_context: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
}

pub fn init() -> Result<SdlSetup> {
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    Ok(SdlSetup {
        sdl_context,
        video_subsystem,
    })
}

fn command_for_keycode(keycode: Keycode) -> Option<Command> {
    match keycode {
        Keycode::Up => Some(Command::Move(CompassPrimary::North)),
        Keycode::Down => Some(Command::Move(CompassPrimary::South)),
        Keycode::Left => Some(Command::Move(CompassPrimary::West)),
        Keycode::Right => Some(Command::Move(CompassPrimary::East)),
        Keycode::Space => Some(Command::ShowPath),
        Keycode::R => Some(Command::Reset),
        Keycode::N => Some(Command::Regenerate),
        Keycode::A => Some(Command::AutoSolve),
        Keycode::Escape => Some(Command::Quit),
        _ => None,
    }
}

fn draw<R: Rng>(canvas: &mut Canvas<Window>, session: &Session<R>, options: &RenderOptions) -> Result<()> {
    let rects = renderers::frame_rects(session.grid(),
                                       session.solution(),
                                       session.path_found(),
                                       options);
    for FilledRect { x, y, width, height, colour } in rects {
        canvas.set_draw_color(Color::RGB(colour.r, colour.g, colour.b));
        canvas.fill_rect(Rect::new(x, y, width, height))?;
    }
    canvas.present();
    Ok(())
}

/// Open a window on the session and run until the window is closed or Escape is pressed.
pub fn run_window<R: Rng>(session: &mut Session<R>, options: &RenderOptions, mut step_timer: StepTimer) -> Result<()> {
    let sdl_setup = init()?;

    let (window_width, window_height) = renderers::frame_size(session.grid(), options.cell_pixels());
    let window = sdl_setup.video_subsystem
        .window(WINDOW_TITLE, window_width, window_height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;
    let mut canvas = window.into_canvas()
        .present_vsync()
        .accelerated()
        .build()
        .map_err(|e| e.to_string())?;
    let mut events = sdl_setup.sdl_context.event_pump()?;

    println!("{}", input::CONTROLS);
    draw(&mut canvas, session, options)?;

    'event: loop {
        let mut redraw = false;

        for event in events.poll_iter() {
            let command = match event {
                Event::Quit { .. } => Some(Command::Quit),
                Event::KeyDown { keycode: Some(keycode), .. } => command_for_keycode(keycode),
                Event::Window { .. } => {
                    redraw = true;
                    None
                }
                _ => None,
            };

            if let Some(command) = command {
                match input::dispatch(session, command) {
                    Outcome::Quit => break 'event,
                    Outcome::AnimationStarted => {
                        step_timer.restart(Instant::now());
                        redraw = true;
                    }
                    Outcome::Redraw => redraw = true,
                    Outcome::Ignored => {}
                }
            }
        }

        if session.is_auto_moving() && step_timer.poll(Instant::now()) {
            redraw |= session.auto_move_step();
        }

        if redraw {
            draw(&mut canvas, session, options)?;
        }

        thread::sleep(timing::POLL_INTERVAL);
    }

    info!("Window closed");
    Ok(())
}
