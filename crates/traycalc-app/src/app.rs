//! Native application shell: window, GPU surface and event routing.

use std::path::Path;
use std::sync::Arc;

use kurbo::Point;
use peniko::Color;
use thiserror::Error;
use traycalc_core::input::key_name;
use traycalc_core::{MouseButton, TrayConfig, TrayError, key_bindings};
use vello::util::{RenderContext, RenderSurface};
use vello::wgpu::PresentMode;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

use crate::host::TrayHost;
use crate::ui::{UiAction, UiOutput, render_ui};

/// Environment variable naming a JSON file with a [`TrayConfig`].
pub const CONFIG_ENV: &str = "TRAYCALC_CONFIG";

/// Errors raised while setting the application up.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read config {path}: {source}")]
    ReadConfig {
        path: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Tray(#[from] TrayError),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
    /// Height of the tray bar in logical points.
    pub tray_height: f32,
    pub tray: TrayConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Traycalc".to_string(),
            width: 960,
            height: 640,
            background_color: Color::from_rgba8(243, 244, 246, 255),
            tray_height: 36.0,
            tray: TrayConfig::default(),
        }
    }
}

impl AppConfig {
    /// Defaults, with the tray section read from `$TRAYCALC_CONFIG` if set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            match load_tray_config(Path::new(&path)) {
                Ok(tray) => {
                    log::info!("Loaded tray config from {}", path);
                    config.tray = tray;
                }
                Err(e) => log::error!("{}; using defaults", e),
            }
        }
        config
    }
}

/// Read a tray configuration file.
pub fn load_tray_config(path: &Path) -> Result<TrayConfig, AppError> {
    let json = std::fs::read_to_string(path).map_err(|source| AppError::ReadConfig {
        path: path.display().to_string(),
        source,
    })?;
    Ok(TrayConfig::from_json(&json)?)
}

/// Runtime state that exists once the window is up.
struct AppState {
    window: Arc<Window>,
    surface: RenderSurface<'static>,

    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,

    host: TrayHost,
    /// Last pointer position in logical points.
    cursor: Point,
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    state: Option<AppState>,
    render_cx: Option<RenderContext>,
}

impl App {
    pub fn new() -> Self {
        Self::with_config(AppConfig::from_env())
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            state: None,
            render_cx: None,
        }
    }

    /// Run the event loop until the window closes.
    pub fn run() {
        let event_loop = EventLoop::new().expect("Failed to create event loop");
        let mut app = App::new();
        event_loop.run_app(&mut app).expect("Event loop error");
    }

    fn finish_init(
        &mut self,
        window: Arc<Window>,
        surface: RenderSurface<'static>,
        host: TrayHost,
    ) {
        let Some(render_cx) = self.render_cx.as_ref() else {
            log::error!("Render context missing after surface creation");
            return;
        };
        let device = &render_cx.devices[surface.dev_id].device;

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            device,
            surface.config.format,
            egui_wgpu::RendererOptions::default(),
        );

        log::info!("Traycalc initialized - {}x{}", surface.config.width, surface.config.height);
        for binding in key_bindings() {
            log::info!("  {:20} {}", binding.keys, binding.description);
        }

        self.state = Some(AppState {
            window: window.clone(),
            surface,
            egui_ctx,
            egui_state,
            egui_renderer,
            host,
            cursor: Point::ZERO,
        });

        window.request_redraw();
    }

    fn redraw(&mut self) {
        let (Some(state), Some(render_cx)) = (self.state.as_mut(), self.render_cx.as_ref()) else {
            return;
        };

        let tray_height = self.config.tray_height;
        let egui_input = state.egui_state.take_egui_input(&state.window);
        let mut ui_output = UiOutput::default();
        let egui_output = state.egui_ctx.run(egui_input, |ctx| {
            if let Some(widget) = state.host.calculator() {
                ui_output = render_ui(ctx, widget, tray_height);
            }
        });

        state
            .egui_state
            .handle_platform_output(&state.window, egui_output.platform_output);
        let egui_primitives = state
            .egui_ctx
            .tessellate(egui_output.shapes, egui_output.pixels_per_point);

        let device_handle = &render_cx.devices[state.surface.dev_id];
        let device = &device_handle.device;
        let queue = &device_handle.queue;

        let surface_texture = match state.surface.surface.get_current_texture() {
            Ok(t) => t,
            Err(e) => {
                log::warn!("Failed to get surface texture: {:?}", e);
                return;
            }
        };
        let surface_view = surface_texture
            .texture
            .create_view(&vello::wgpu::TextureViewDescriptor::default());

        for (id, image_delta) in &egui_output.textures_delta.set {
            state.egui_renderer.update_texture(device, queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [state.surface.config.width, state.surface.config.height],
            pixels_per_point: egui_output.pixels_per_point,
        };
        let [r, g, b, a] = self.config.background_color.components;

        {
            let mut encoder = device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
                label: Some("egui encoder"),
            });
            state.egui_renderer.update_buffers(
                device,
                queue,
                &mut encoder,
                &egui_primitives,
                &screen_descriptor,
            );

            let render_pass = encoder.begin_render_pass(&vello::wgpu::RenderPassDescriptor {
                label: Some("egui render pass"),
                color_attachments: &[Some(vello::wgpu::RenderPassColorAttachment {
                    view: &surface_view,
                    resolve_target: None,
                    ops: vello::wgpu::Operations {
                        load: vello::wgpu::LoadOp::Clear(vello::wgpu::Color {
                            r: r as f64,
                            g: g as f64,
                            b: b as f64,
                            a: a as f64,
                        }),
                        store: vello::wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // egui-wgpu wants a 'static render pass
            let mut render_pass = render_pass.forget_lifetime();
            state
                .egui_renderer
                .render(&mut render_pass, &egui_primitives, &screen_descriptor);
            drop(render_pass);

            queue.submit(std::iter::once(encoder.finish()));
        }

        for id in &egui_output.textures_delta.free {
            state.egui_renderer.free_texture(id);
        }
        surface_texture.present();

        // The frame is on screen: deferred listener work may run now, and
        // anything the user clicked applies to the next frame.
        state.host.after_render(ui_output.panel_rect);
        match ui_output.action {
            Some(UiAction::ToggleDropdown) => state.host.toggle_dropdown(),
            Some(UiAction::Press(command)) => state.host.press(command),
            None => {}
        }
        let repaint_now = egui_output
            .viewport_output
            .values()
            .any(|viewport| viewport.repaint_delay.is_zero());
        if ui_output.action.is_some() || repaint_now {
            state.window.request_redraw();
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let host = match TrayHost::new(&self.config.tray) {
            Ok(host) => host,
            Err(e) => {
                log::error!("Failed to register calculator: {}", e);
                event_loop.exit();
                return;
            }
        };

        log::info!("Creating window...");
        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));
        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .expect("Failed to create window"),
        );

        let size = window.inner_size();
        let (width, height) = if size.width == 0 || size.height == 0 {
            (self.config.width, self.config.height)
        } else {
            (size.width, size.height)
        };

        let render_cx = self.render_cx.get_or_insert_with(RenderContext::new);
        let surface = match pollster::block_on(render_cx.create_surface(
            window.clone(),
            width,
            height,
            PresentMode::AutoVsync,
        )) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Failed to create surface: {:?}", e);
                event_loop.exit();
                return;
            }
        };

        self.finish_init(window, surface, host);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = &mut self.state else {
            return;
        };

        let _ = state.egui_state.on_window_event(&state.window, &event);

        match event {
            WindowEvent::CloseRequested => {
                state.host.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }
                if let Some(render_cx) = self.render_cx.as_mut() {
                    render_cx.resize_surface(&mut state.surface, size.width, size.height);
                }
                state.window.request_redraw();
            }

            WindowEvent::CursorMoved { position, .. } => {
                let scale = state.window.scale_factor();
                state.cursor = Point::new(position.x / scale, position.y / scale);
                state.host.on_pointer_move(state.cursor);
                if state.host.calculator().is_some_and(|widget| widget.is_dragging()) {
                    state.window.request_redraw();
                }
            }

            WindowEvent::MouseInput { state: button_state, button, .. } => {
                if MouseButton::from_winit(button) != Some(MouseButton::Left) {
                    return;
                }
                match button_state {
                    ElementState::Pressed => state.host.on_pointer_down(state.cursor),
                    ElementState::Released => state.host.on_pointer_up(state.cursor),
                }
                state.window.request_redraw();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                if let Some(name) = key_name(&event.logical_key) {
                    state.host.on_key(&name);
                    state.window.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => self.redraw(),

            _ => {}
        }
    }
}
