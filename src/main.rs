//! Brickfall entry point
//!
//! Owns the window, keyboard and frame pacing; everything else is the
//! simulation in `brickfall::sim`.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use brickfall::consts::WINDOW_TITLE;
use brickfall::platform::{FrameClock, KeyState};
use brickfall::renderer::{DrawList, Render, RenderState};
use brickfall::settings::Settings;
use brickfall::sim::GameState;

struct App {
    settings: Settings,
    game: GameState,
    keys: KeyState,
    clock: FrameClock,
    draw_list: DrawList,
    window: Option<Arc<Window>>,
    renderer: Option<RenderState>,
    /// Set when window or GPU setup fails; returned from `main`
    startup_error: Option<anyhow::Error>,
}

impl App {
    fn new(settings: Settings) -> Self {
        let game = GameState::new(&settings);
        let clock = FrameClock::new(settings.fps);
        Self {
            settings,
            game,
            keys: KeyState::default(),
            clock,
            draw_list: DrawList::new(),
            window: None,
            renderer: None,
            startup_error: None,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(
                self.settings.viewport_width as f64,
                self.settings.viewport_height as f64,
            ))
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to open the game window")?,
        );

        let renderer = pollster::block_on(RenderState::new(
            Arc::clone(&window),
            self.settings.viewport(),
        ))
        .context("failed to initialize rendering")?;

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.clock = FrameClock::new(self.settings.fps);
        log::info!("Brickfall running at {} fps", self.settings.fps);
        Ok(())
    }

    /// One update (when due) and one render
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if self.clock.is_due(now) {
            let input = self.keys.tick_input();
            self.game.update(&input);
            self.clock.finish_frame(now);
        }

        self.draw_list.clear();
        self.game.render(&mut self.draw_list);
        let vertices = self.draw_list.to_vertices();

        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };
        match renderer.render(&vertices) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                renderer.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of GPU memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }

    fn quit(&self, event_loop: &ActiveEventLoop) {
        log::info!(
            "Quitting after {} ticks, {} blocks left",
            self.game.time_ticks,
            self.game.blocks.len()
        );
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_window(event_loop) {
            self.startup_error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.quit(event_loop),
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    self.keys.handle_key(key, event.state);
                    if self.keys.quit {
                        self.quit(event_loop);
                    }
                }
            }
            WindowEvent::Focused(false) => self.keys.release_all(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.frame(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.clock.is_due(Instant::now())
            && let Some(window) = &self.window
        {
            window.request_redraw();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.clock.deadline()));
    }
}

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Brickfall starting...");

    let settings = Settings::load()?;
    settings.validate()?;

    let event_loop = EventLoop::new().context("failed to create the event loop")?;
    let mut app = App::new(settings);
    event_loop.run_app(&mut app)?;

    match app.startup_error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
