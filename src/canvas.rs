use crate::constants::{ICON_SRC, WALLPAPER_REAL_SRC, WALLPAPER_SRC};
use spectra_core::{DrawCmd, FrameError, ImageId, LineCap, LinearGradient, Paint, Surface};
use wasm_bindgen::{Clamped, JsCast};
use web_sys as web;

/// Preloaded bitmaps addressed by [`ImageId`].
pub struct ImageSet {
    wallpaper: web::HtmlImageElement,
    wallpaper_real: web::HtmlImageElement,
    icon: web::HtmlImageElement,
}

fn load_image(src: &str) -> anyhow::Result<web::HtmlImageElement> {
    let img = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    img.set_src(src);
    Ok(img)
}

impl ImageSet {
    pub fn load() -> anyhow::Result<Self> {
        Ok(Self {
            wallpaper: load_image(WALLPAPER_SRC)?,
            wallpaper_real: load_image(WALLPAPER_REAL_SRC)?,
            icon: load_image(ICON_SRC)?,
        })
    }

    fn get(&self, id: ImageId) -> &web::HtmlImageElement {
        match id {
            ImageId::Wallpaper => &self.wallpaper,
            ImageId::WallpaperReal => &self.wallpaper_real,
            ImageId::Icon => &self.icon,
        }
    }
}

#[inline]
fn is_decoded(img: &web::HtmlImageElement) -> bool {
    img.complete() && img.natural_width() > 0
}

/// `Surface` over a canvas 2D context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    images: ImageSet,
    // Consecutive bins share one gradient; rebuild only when it changes.
    gradient: Option<(LinearGradient, web::CanvasGradient)>,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement, images: ImageSet) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            canvas,
            ctx,
            images,
            gradient: None,
        })
    }

    fn canvas_gradient(&mut self, g: &LinearGradient) -> web::CanvasGradient {
        if let Some((key, cached)) = &self.gradient {
            if key == g {
                return cached.clone();
            }
        }
        let grad = self
            .ctx
            .create_linear_gradient(g.start.x, g.start.y, g.end.x, g.end.y);
        for stop in g.stops {
            _ = grad.add_color_stop(stop.offset, &stop.color.to_css());
        }
        self.gradient = Some((*g, grad.clone()));
        grad
    }

    fn set_paint(&mut self, paint: &Paint, stroke: bool) {
        match paint {
            Paint::Solid(c) => {
                let css = c.to_css();
                if stroke {
                    self.ctx.set_stroke_style_str(&css);
                } else {
                    self.ctx.set_fill_style_str(&css);
                }
            }
            Paint::Gradient(g) => {
                let grad = self.canvas_gradient(g);
                if stroke {
                    self.ctx.set_stroke_style_canvas_gradient(&grad);
                } else {
                    self.ctx.set_fill_style_canvas_gradient(&grad);
                }
            }
        }
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn apply(&mut self, cmd: &DrawCmd) {
        let ctx = &self.ctx;
        match cmd {
            DrawCmd::Save => ctx.save(),
            DrawCmd::Restore => ctx.restore(),
            DrawCmd::Translate(p) => {
                _ = ctx.translate(p.x, p.y);
            }
            DrawCmd::Scale(s) => {
                _ = ctx.scale(s.x, s.y);
            }
            DrawCmd::FillStyle(paint) => self.set_paint(paint, false),
            DrawCmd::StrokeStyle(paint) => self.set_paint(paint, true),
            DrawCmd::LineWidth(w) => ctx.set_line_width(*w),
            DrawCmd::LineCap(cap) => ctx.set_line_cap(match cap {
                LineCap::Round => "round",
            }),
            DrawCmd::Shadow {
                color,
                blur,
                offset,
            } => {
                ctx.set_shadow_color(&color.to_css());
                ctx.set_shadow_blur(*blur);
                ctx.set_shadow_offset_x(offset.x);
                ctx.set_shadow_offset_y(offset.y);
            }
            DrawCmd::Font(font) => ctx.set_font(font),
            DrawCmd::BeginPath => ctx.begin_path(),
            DrawCmd::ClosePath => ctx.close_path(),
            DrawCmd::MoveTo(p) => ctx.move_to(p.x, p.y),
            DrawCmd::LineTo(p) => ctx.line_to(p.x, p.y),
            DrawCmd::QuadTo { ctrl, to } => ctx.quadratic_curve_to(ctrl.x, ctrl.y, to.x, to.y),
            DrawCmd::Arc {
                center,
                radius,
                start,
                end,
            } => {
                _ = ctx.arc(center.x, center.y, *radius, *start, *end);
            }
            DrawCmd::Fill => ctx.fill(),
            DrawCmd::Stroke => ctx.stroke(),
            DrawCmd::FillRect(r) => ctx.fill_rect(r.origin.x, r.origin.y, r.size.x, r.size.y),
            DrawCmd::StrokeRect(r) => ctx.stroke_rect(r.origin.x, r.origin.y, r.size.x, r.size.y),
            DrawCmd::ClearRect(r) => ctx.clear_rect(r.origin.x, r.origin.y, r.size.x, r.size.y),
            DrawCmd::Image { id, at } => {
                let img = self.images.get(*id);
                if is_decoded(img) {
                    _ = ctx.draw_image_with_html_image_element(img, at.x, at.y);
                }
            }
            DrawCmd::Text { text, at } => {
                _ = ctx.fill_text(text, at.x, at.y);
            }
        }
    }

    fn read_pixels(&mut self) -> Result<Vec<u8>, FrameError> {
        let (w, h) = self.size();
        let data = self
            .ctx
            .get_image_data(0.0, 0.0, w as f64, h as f64)
            .map_err(|e| FrameError::Pixels(format!("{:?}", e)))?;
        Ok(data.data().0)
    }

    fn write_pixels(&mut self, pixels: &[u8]) -> Result<(), FrameError> {
        let (w, _) = self.size();
        let data = web::ImageData::new_with_u8_clamped_array(Clamped(pixels), w)
            .map_err(|e| FrameError::Pixels(format!("{:?}", e)))?;
        self.ctx
            .put_image_data(&data, 0.0, 0.0)
            .map_err(|e| FrameError::Pixels(format!("{:?}", e)))
    }
}
