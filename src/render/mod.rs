//! Rendering: off-screen frame buffer, mode dispatch and presentation
//!
//! All drawing happens into a back buffer owned by the [`Renderer`]; the
//! finished frame is copied to the softbuffer surface in a single present,
//! so a partially drawn frame is never visible. The back buffer is
//! reallocated only when the stored dimensions differ from the current
//! window size.

pub mod bar;
pub mod frame;
pub mod layout;
pub mod pie;
pub mod scale;
pub mod table;

pub use frame::{Frame, GlyphCache, Rect, TextPainter};

use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{anyhow, Context as _, Result};
use fontdue::{Font, FontSettings};
use softbuffer::Surface;
use winit::window::Window;

use crate::model::AppModel;
use crate::theme::Theme;

const MODE_BAR_FONT_SIZE: f32 = 13.0;
const PLACEHOLDER_FONT_SIZE: f32 = 14.0;

/// Well-known sans font locations, probed in order when no font is given
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial Unicode.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

/// Load the UI font, preferring an explicit path over the system probe list
pub fn load_font(explicit: Option<&Path>) -> Result<Font> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(anyhow!("Font file not found: {}", path.display()));
            }
            PathBuf::from(path)
        }
        None => FONT_CANDIDATES
            .iter()
            .map(PathBuf::from)
            .find(|p| p.exists())
            .ok_or_else(|| {
                anyhow!(
                    "No usable font found; pass --font with a TTF path (probed: {})",
                    FONT_CANDIDATES.join(", ")
                )
            })?,
    };

    let bytes = std::fs::read(&path)
        .with_context(|| format!("Failed to read font file {}", path.display()))?;
    let font = Font::from_bytes(bytes, FontSettings::default())
        .map_err(|e| anyhow!("Failed to load font {}: {}", path.display(), e))?;

    tracing::info!("Loaded font from {}", path.display());
    Ok(font)
}

/// Owns the window surface, the off-screen frame buffer and the font
pub struct Renderer {
    surface: Surface<Rc<Window>, Rc<Window>>,
    font: Font,
    glyph_cache: GlyphCache,
    back_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl Renderer {
    /// Create a new renderer for the window
    pub fn new(
        window: Rc<Window>,
        context: &softbuffer::Context<Rc<Window>>,
        font: Font,
    ) -> Result<Self> {
        let size = window.inner_size();
        let (width, height) = (size.width.max(1), size.height.max(1));

        let mut surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow!("Failed to create surface: {}", e))?;
        surface
            .resize(
                NonZeroU32::new(width).unwrap_or(NonZeroU32::MIN),
                NonZeroU32::new(height).unwrap_or(NonZeroU32::MIN),
            )
            .map_err(|e| anyhow!("Failed to resize surface: {}", e))?;

        Ok(Self {
            surface,
            font,
            glyph_cache: GlyphCache::new(),
            back_buffer: vec![0u32; width as usize * height as usize],
            width,
            height,
        })
    }

    /// Measure text width in pixels at the given size.
    ///
    /// Used at load time to compute table column widths.
    pub fn measure(&mut self, text: &str, size: f32) -> f32 {
        TextPainter::new(&self.font, &mut self.glyph_cache).measure(text, size)
    }

    /// Render the model into the back buffer and present it.
    ///
    /// The back buffer is reallocated only when the stored dimensions
    /// differ from the model's window size.
    pub fn render(&mut self, model: &AppModel) -> Result<()> {
        let (width, height) = model.window_size;
        if width == 0 || height == 0 {
            return Ok(());
        }

        if self.width != width || self.height != height {
            self.width = width;
            self.height = height;
            self.back_buffer
                .resize(width as usize * height as usize, 0);
            self.surface
                .resize(
                    NonZeroU32::new(width).unwrap_or(NonZeroU32::MIN),
                    NonZeroU32::new(height).unwrap_or(NonZeroU32::MIN),
                )
                .map_err(|e| anyhow!("Failed to resize surface: {}", e))?;
        }

        // split borrows: frame writes pixels, painter owns font + cache
        let mut frame = Frame::new(&mut self.back_buffer, width as usize, height as usize);
        let mut painter = TextPainter::new(&self.font, &mut self.glyph_cache);

        frame.clear(model.theme.ui.background.to_argb_u32());

        let content = layout::content_rect(model.window_size);
        if model.table.is_empty() {
            draw_placeholder(
                &mut frame,
                &mut painter,
                &model.theme,
                "No data to display",
                &content,
            );
        } else {
            match model.mode {
                crate::model::ViewMode::Table => {
                    table::draw(&mut frame, &mut painter, model, &content)
                }
                crate::model::ViewMode::Pie => pie::draw(
                    &mut frame,
                    &mut painter,
                    &model.theme,
                    &model.categories,
                    &model.pie_title,
                    &content,
                ),
                crate::model::ViewMode::Bar => bar::draw(
                    &mut frame,
                    &mut painter,
                    &model.theme,
                    model.intervals.labels(),
                    &model.buckets,
                    &model.bar_title,
                    &content,
                ),
            }
        }

        draw_mode_bar(&mut frame, &mut painter, model);

        // single blit: copy the whole back buffer to the surface
        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow!("Failed to get surface buffer: {}", e))?;
        buffer.copy_from_slice(&self.back_buffer);
        buffer
            .present()
            .map_err(|e| anyhow!("Failed to present buffer: {}", e))?;

        Ok(())
    }
}

/// Draw the "nothing to show" message used by every mode on empty input
pub fn draw_placeholder(
    frame: &mut Frame,
    painter: &mut TextPainter,
    theme: &Theme,
    text: &str,
    content: &Rect,
) {
    painter.draw(
        frame,
        content.x + 50,
        content.y + 50,
        text,
        PLACEHOLDER_FONT_SIZE,
        theme.ui.muted.to_argb_u32(),
    );
}

fn draw_mode_bar(frame: &mut Frame, painter: &mut TextPainter, model: &AppModel) {
    let theme = &model.theme;
    frame.fill_rect(
        Rect::new(0, 0, model.window_size.0 as i32, layout::MODE_BAR_HEIGHT),
        theme.mode_bar.background.to_argb_u32(),
    );

    let ascent = painter.ascent(MODE_BAR_FONT_SIZE) as i32;
    for (mode, label, rect) in layout::mode_bar_buttons(model.window_size.0) {
        let fill = if mode == model.mode {
            theme.mode_bar.button_active
        } else {
            theme.mode_bar.button
        };
        frame.fill_rect(rect, fill.to_argb_u32());

        let text_w = painter.measure(label, MODE_BAR_FONT_SIZE) as i32;
        painter.draw(
            frame,
            rect.x + (rect.width - text_w) / 2,
            rect.y + rect.height / 2 - ascent / 2,
            label,
            MODE_BAR_FONT_SIZE,
            theme.mode_bar.foreground.to_argb_u32(),
        );
    }
}
