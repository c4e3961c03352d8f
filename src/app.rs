//! winit event loop glue
//!
//! `resumed` plays the part of OnLoad (window and GPU setup). Each paced
//! frame runs one simulation step (OnUpdateFrame) and then draws
//! (OnRenderFrame). Everything interesting happens in `sim` and `renderer`.

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use crate::consts::GAME_OVER_MESSAGE;
use crate::error::{Error, Result};
use crate::platform::{FrameClock, KeyboardState};
use crate::renderer::{RenderState, build_frame, shapes};
use crate::settings::Settings;
use crate::sim::{GameState, TickOutcome, tick};

/// Game instance holding all state
pub struct App {
    settings: Settings,
    state: GameState,
    keyboard: KeyboardState,
    clock: FrameClock,
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
    error: Option<Error>,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self::starting_at(settings, Instant::now())
    }

    /// App whose first frame becomes due at `now`
    pub fn starting_at(settings: Settings, now: Instant) -> Self {
        let state = GameState::with_tuning(settings.tuning);
        let clock = FrameClock::new(settings.target_fps, now);
        Self {
            settings,
            state,
            keyboard: KeyboardState::new(),
            clock,
            window: None,
            render_state: None,
            error: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn keyboard_mut(&mut self) -> &mut KeyboardState {
        &mut self.keyboard
    }

    /// Run one simulation step if a frame is due at `now`
    pub fn update_frame(&mut self, now: Instant) -> Option<TickOutcome> {
        if !self.clock.is_due(now) {
            return None;
        }
        let dt = self.clock.begin_frame(now);
        let input = self.keyboard.snapshot();
        Some(tick(&mut self.state, &input, dt))
    }

    /// Error that stopped the loop, if any
    pub fn into_result(self) -> Result<()> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attributes = Window::default_attributes()
            .with_title(self.settings.title.clone())
            .with_inner_size(LogicalSize::new(self.settings.width, self.settings.height));
        let window = Arc::new(event_loop.create_window(attributes)?);
        log::info!("Window created: {}x{}", self.settings.width, self.settings.height);

        let render_state = pollster::block_on(init_graphics(window.clone(), &self.settings))?;

        self.render_state = Some(render_state);
        self.window = Some(window);
        self.clock = FrameClock::new(self.settings.target_fps, Instant::now());
        Ok(())
    }

    /// Stop the loop; `run` hands the error back to the caller
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: Error) {
        self.error = Some(error);
        event_loop.exit();
    }

    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(render_state) = self.render_state.as_mut() else {
            return;
        };
        let vertices = shapes::tessellate(&build_frame(&self.state));
        match render_state.render(&vertices) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                render_state.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => self.fail(event_loop, Error::OutOfMemory),
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

/// Create the surface, pick an adapter and build the render pipeline
async fn init_graphics(window: Arc<Window>, settings: &Settings) -> Result<RenderState> {
    let size = window.inner_size();
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
    let surface = instance.create_surface(window)?;

    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await?;
    log::info!("Using adapter: {:?}", adapter.get_info().name);

    RenderState::new(
        surface,
        &adapter,
        (size.width, size.height),
        settings.clear_color,
        settings.vsync,
    )
    .await
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = &self.window else {
            return;
        };
        if self.clock.is_due(Instant::now()) {
            window.request_redraw();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.clock.next_deadline()));
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting.");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(render_state) = self.render_state.as_mut() {
                    render_state.resize(size.width, size.height);
                }
            }

            WindowEvent::Focused(false) => self.keyboard.release_all(),

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    self.keyboard.handle_key(key_code, event.state);
                }
            }

            WindowEvent::RedrawRequested => {
                if let Some(TickOutcome::GameOver) = self.update_frame(Instant::now()) {
                    println!("{GAME_OVER_MESSAGE}");
                    log::info!("Game over after {} frames", self.state.frame);
                    event_loop.exit();
                    return;
                }
                self.render_frame(event_loop);
            }

            _ => {}
        }
    }
}

/// Open the window and play until game over or the window is closed
pub fn run(settings: Settings) -> Result<()> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(settings);
    event_loop.run_app(&mut app)?;
    app.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GamePhase, Obstacle};
    use std::time::Duration;
    use winit::event::ElementState;
    use winit::keyboard::KeyCode;

    #[test]
    fn test_update_waits_for_deadline() {
        let start = Instant::now();
        let mut app = App::starting_at(Settings::default(), start);
        assert_eq!(app.update_frame(start), Some(TickOutcome::Continue));
        assert_eq!(app.update_frame(start + Duration::from_millis(1)), None);
        assert_eq!(app.state().frame, 1);

        let later = start + Duration::from_millis(40);
        assert_eq!(app.update_frame(later), Some(TickOutcome::Continue));
        assert_eq!(app.state().frame, 2);
    }

    #[test]
    fn test_held_keys_drive_player() {
        let start = Instant::now();
        let mut app = App::starting_at(Settings::default(), start);
        app.keyboard_mut()
            .handle_key(KeyCode::ArrowRight, ElementState::Pressed);

        app.update_frame(start);
        app.update_frame(start + Duration::from_millis(40));
        assert!((app.state().player.pos.x - 0.02).abs() < 1e-6);
        assert_eq!(app.state().player.pos.y, 0.0);
    }

    #[test]
    fn test_game_over_reported() {
        let start = Instant::now();
        let mut app = App::starting_at(Settings::default(), start);
        app.state.obstacles.push(Obstacle { x: 0.004 });
        assert_eq!(app.update_frame(start), Some(TickOutcome::GameOver));
        assert_eq!(app.state().phase, GamePhase::GameOver);
        assert!(app.into_result().is_ok());
    }

    #[test]
    fn test_settings_tuning_reaches_state() {
        let mut settings = Settings::default();
        settings.tuning.player_speed = 0.05;
        let app = App::new(settings);
        assert_eq!(app.state().tuning.player_speed, 0.05);
    }
}
