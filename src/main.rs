use std::rc::Rc;

use anyhow::{anyhow, Result};
use clap::Parser;
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::Key;
use winit::window::Window;

// Import from library modules
use slate::cli::CliArgs;
use slate::config::SlateConfig;
use slate::data::{self, CategoryCounts, Intervals, TableData};
use slate::messages::{Msg, PointerMsg, ViewMsg};
use slate::model::{AppModel, ViewMode};
use slate::render::{self, table, Renderer};
use slate::scroll::ROW_HEIGHT;
use slate::theme::{self, Theme};
use slate::update::update;

/// Everything loaded before the window exists; consumed on `resumed`
struct Boot {
    table: TableData,
    categories: CategoryCounts,
    buckets: CategoryCounts,
    intervals: Intervals,
    category_column: usize,
    value_column: usize,
    theme: Theme,
    font: fontdue::Font,
}

struct App {
    boot: Option<Boot>,
    window: Option<Rc<Window>>,
    // kept alive for the lifetime of the surface
    _context: Option<Context<Rc<Window>>>,
    renderer: Option<Renderer>,
    model: Option<AppModel>,
    /// Last cursor position, tracked for button presses
    cursor: (f64, f64),
}

impl App {
    fn new(boot: Boot) -> Self {
        Self {
            boot: Some(boot),
            window: None,
            _context: None,
            renderer: None,
            model: None,
            cursor: (0.0, 0.0),
        }
    }

    /// Run a message through `update`, reporting whether a redraw is due
    fn dispatch(&mut self, msg: Msg) -> bool {
        let Some(model) = &mut self.model else {
            return false;
        };
        update(model, msg).is_some_and(|cmd| cmd.needs_redraw())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let Some(boot) = self.boot.take() else {
            return;
        };

        let window_attributes = Window::default_attributes()
            .with_title("Slate")
            .with_inner_size(LogicalSize::new(1200, 800));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Rc::new(window),
            Err(e) => {
                tracing::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let context = match Context::new(Rc::clone(&window)) {
            Ok(context) => context,
            Err(e) => {
                tracing::error!("Failed to create graphics context: {}", e);
                event_loop.exit();
                return;
            }
        };

        let mut renderer = match Renderer::new(Rc::clone(&window), &context, boot.font) {
            Ok(renderer) => renderer,
            Err(e) => {
                tracing::error!("Failed to create renderer: {:#}", e);
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        let model = AppModel::from_data(
            boot.table,
            boot.categories,
            boot.buckets,
            boot.intervals,
            boot.category_column,
            boot.value_column,
            boot.theme,
            (size.width, size.height),
            |text| renderer.measure(text, table::FONT_SIZE),
        );

        window.request_redraw();
        self.window = Some(window);
        self._context = Some(context);
        self.renderer = Some(renderer);
        self.model = Some(model);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.clone() else {
            return;
        };
        if window.id() != window_id {
            return;
        }

        let needs_redraw = match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
                false
            }
            WindowEvent::Resized(size) => self.dispatch(Msg::Resized(size.width, size.height)),
            WindowEvent::RedrawRequested => {
                if let (Some(renderer), Some(model)) = (&mut self.renderer, &self.model) {
                    if let Err(e) = renderer.render(model) {
                        tracing::error!("Render failed: {:#}", e);
                    }
                }
                false
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = (position.x, position.y);
                self.dispatch(Msg::Pointer(PointerMsg::Moved {
                    x: position.x as i32,
                    y: position.y as i32,
                }))
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => self.dispatch(Msg::Pointer(PointerMsg::Pressed {
                x: self.cursor.0 as i32,
                y: self.cursor.1 as i32,
            })),
            WindowEvent::MouseInput {
                state: ElementState::Released,
                button: MouseButton::Left,
                ..
            } => self.dispatch(Msg::Pointer(PointerMsg::Released)),
            WindowEvent::MouseWheel { delta, .. } => {
                // winit reports line deltas positive-up; the table scrolls
                // toward later rows on wheel-down
                let notches = match delta {
                    MouseScrollDelta::LineDelta(_, y) => (-y).round() as i32,
                    MouseScrollDelta::PixelDelta(pos) => {
                        (-pos.y / ROW_HEIGHT as f64).round() as i32
                    }
                };
                if notches != 0 {
                    self.dispatch(Msg::Pointer(PointerMsg::Wheel { notches }))
                } else {
                    false
                }
            }
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                match event.logical_key.as_ref() {
                    Key::Character("1") => {
                        self.dispatch(Msg::View(ViewMsg::SetMode(ViewMode::Table)))
                    }
                    Key::Character("2") => self.dispatch(Msg::View(ViewMsg::SetMode(ViewMode::Pie))),
                    Key::Character("3") => self.dispatch(Msg::View(ViewMsg::SetMode(ViewMode::Bar))),
                    _ => false,
                }
            }
            _ => false,
        };

        if needs_redraw {
            window.request_redraw();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);
    }
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    let _log_guard = slate::tracing::init();

    let config = SlateConfig::load();

    let theme_id = args.theme.clone().unwrap_or_else(|| config.theme.clone());
    let theme = theme::load_theme(&theme_id).unwrap_or_else(|e| {
        tracing::warn!("Falling back to default theme: {}", e);
        Theme::default()
    });

    let delimiter = args.parse_delimiter().map_err(|e| anyhow!(e))?;
    let table = data::load_csv_file(&args.file, delimiter)?;
    tracing::info!(
        rows = table.row_count(),
        columns = table.column_count(),
        "Loaded {}",
        args.file.display()
    );

    let category_column = args.category_column.unwrap_or(config.category_column);
    let value_column = args.value_column.unwrap_or(config.value_column);
    let intervals = Intervals::new(config.bucket_start, config.bucket_width, config.bucket_count);
    let categories = data::count_categories(&table, category_column);
    let buckets = data::bucket_values(&table, value_column, &intervals);

    let font = render::load_font(args.font.as_deref())?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(Boot {
        table,
        categories,
        buckets,
        intervals,
        category_column,
        value_column,
        theme,
        font,
    });
    event_loop.run_app(&mut app)?;

    Ok(())
}
