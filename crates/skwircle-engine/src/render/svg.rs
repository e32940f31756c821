use core::fmt::Write;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::coords::{Dimensions, Vec2};
use crate::paint::{Color, GradientDescriptor, GradientKind, Paint};
use crate::scene::{ClipId, DrawCmd, DrawItem, DrawList};
use crate::shape::path::write_number;

static CONIC_WARNED: AtomicBool = AtomicBool::new(false);

/// SVG document backend.
///
/// Produces a standalone SVG 1.1 document:
/// - gradients, blur filters and clip paths are emitted once into `<defs>`
/// - nested clips chain through the `clip-path` attribute of `<clipPath>`
/// - every path is translated by its origin; colors carry alpha as `fill-opacity`
///
/// Conic gradients have no SVG equivalent and fall back to a linear gradient
/// along the same angle.
#[derive(Debug, Clone, Default)]
pub struct SvgDocument {
    background: Option<Color>,
}

impl SvgDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fills the whole viewport with `color` before any item.
    #[must_use]
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Renders `list` in paint order into an SVG document of `viewport` size.
    pub fn render(&self, list: &mut DrawList, viewport: Dimensions) -> String {
        let mut writer = Writer::default();

        if let Some(bg) = self.background.filter(|c| !c.is_transparent()) {
            writer.body.push_str("<rect x=\"0\" y=\"0\"");
            attr_num(&mut writer.body, "width", viewport.width);
            attr_num(&mut writer.body, "height", viewport.height);
            write_fill(&mut writer.body, bg);
            writer.body.push_str("/>\n");
        }

        list.sort();
        for item in list.iter_sorted() {
            writer.item(list, item);
        }

        let mut out = String::with_capacity(writer.defs.len() + writer.body.len() + 256);
        out.push_str("<svg xmlns=\"http://www.w3.org/2000/svg\"");
        attr_num(&mut out, "width", viewport.width);
        attr_num(&mut out, "height", viewport.height);
        out.push_str(" viewBox=\"0 0 ");
        write_number(&mut out, viewport.width);
        out.push(' ');
        write_number(&mut out, viewport.height);
        out.push_str("\">\n");
        if !writer.defs.is_empty() {
            out.push_str("<defs>\n");
            out.push_str(&writer.defs);
            out.push_str("</defs>\n");
        }
        out.push_str(&writer.body);
        out.push_str("</svg>\n");

        log::debug!(
            "svg rendered: {} items, {} clips, {} gradients, {} filters",
            list.items().len(),
            writer.clip_ids.len(),
            writer.gradient_count,
            writer.filter_ids.len()
        );

        out
    }
}

#[derive(Default)]
struct Writer {
    defs: String,
    body: String,
    gradient_count: usize,
    /// ClipId -> emitted `<clipPath>` id
    clip_ids: HashMap<ClipId, String>,
    /// blur radius in milli-units -> emitted `<filter>` id
    filter_ids: HashMap<i64, String>,
}

impl Writer {
    fn item(&mut self, list: &DrawList, item: &DrawItem) {
        let clip = item.clip.and_then(|id| self.clip_ref(list, id));
        if let Some(clip) = &clip {
            let _ = writeln!(self.body, "<g clip-path=\"url(#{clip})\">");
        }

        match &item.cmd {
            DrawCmd::Path(cmd) => {
                let opacity = item.opacity * cmd.opacity;
                let fill = self.paint_ref(&cmd.paint);
                let filter = (cmd.blur > 0.0).then(|| self.blur_ref(cmd.blur));

                self.body.push_str("<path");
                write_translate(&mut self.body, cmd.origin);
                self.body.push_str(" d=\"");
                self.body.push_str(&cmd.d);
                self.body.push('"');
                self.body.push_str(&fill);
                if opacity < 1.0 {
                    attr_num(&mut self.body, "opacity", opacity);
                }
                if let Some(filter) = filter {
                    let _ = write!(self.body, " filter=\"url(#{filter})\"");
                }
                self.body.push_str("/>\n");
            }
            DrawCmd::Rect(cmd) => {
                let fill = self.paint_ref(&cmd.paint);
                let r = cmd.rect;
                self.body.push_str("<rect");
                attr_num(&mut self.body, "x", r.origin.x);
                attr_num(&mut self.body, "y", r.origin.y);
                attr_num(&mut self.body, "width", r.size.x);
                attr_num(&mut self.body, "height", r.size.y);
                self.body.push_str(&fill);
                if item.opacity < 1.0 {
                    attr_num(&mut self.body, "opacity", item.opacity);
                }
                self.body.push_str("/>\n");
            }
        }

        if clip.is_some() {
            self.body.push_str("</g>\n");
        }
    }

    /// Fill attributes for `paint`, defining a gradient if needed.
    fn paint_ref(&mut self, paint: &Paint) -> String {
        let mut attrs = String::new();
        match paint {
            Paint::Solid(color) => write_fill(&mut attrs, *color),
            Paint::Gradient(g) => {
                let id = self.gradient(g);
                let _ = write!(attrs, " fill=\"url(#{id})\"");
            }
        }
        attrs
    }

    fn gradient(&mut self, g: &GradientDescriptor) -> String {
        let id = format!("grad{}", self.gradient_count);
        self.gradient_count += 1;

        let angle = match g.kind {
            GradientKind::Radial => None,
            GradientKind::Linear { angle } => Some(angle),
            GradientKind::Conic { angle } => {
                if !CONIC_WARNED.swap(true, Ordering::Relaxed) {
                    log::warn!("conic gradients are not supported by SVG; rendering as linear");
                }
                Some(angle)
            }
        };

        let tag = match angle {
            Some(angle) => {
                let (start, end) = GradientDescriptor::linear_endpoints(angle);
                let _ = write!(self.defs, "<linearGradient id=\"{id}\"");
                attr_num(&mut self.defs, "x1", start.x);
                attr_num(&mut self.defs, "y1", start.y);
                attr_num(&mut self.defs, "x2", end.x);
                attr_num(&mut self.defs, "y2", end.y);
                "linearGradient"
            }
            None => {
                let _ = write!(self.defs, "<radialGradient id=\"{id}\" cx=\"0.5\" cy=\"0.5\" r=\"0.5\"");
                "radialGradient"
            }
        };
        self.defs.push_str(">\n");

        for stop in &g.stops {
            let color = stop.effective_color();
            self.defs.push_str("<stop offset=\"");
            write_number(&mut self.defs, stop.position);
            let _ = write!(self.defs, "%\" stop-color=\"{}\"", color.to_rgb_hex());
            attr_num(&mut self.defs, "stop-opacity", color.a);
            self.defs.push_str("/>\n");
        }
        let _ = writeln!(self.defs, "</{tag}>");
        id
    }

    fn blur_ref(&mut self, blur: f32) -> String {
        let key = (f64::from(blur) * 1000.0).round() as i64;
        if let Some(id) = self.filter_ids.get(&key) {
            return id.clone();
        }
        let id = format!("blur{}", self.filter_ids.len());
        let _ = write!(
            self.defs,
            "<filter id=\"{id}\" x=\"-50%\" y=\"-50%\" width=\"200%\" height=\"200%\"><feGaussianBlur"
        );
        attr_num(&mut self.defs, "stdDeviation", blur / 2.0);
        self.defs.push_str("/></filter>\n");
        self.filter_ids.insert(key, id.clone());
        id
    }

    /// Emits `id` (and its ancestors) once; returns the `<clipPath>` id.
    fn clip_ref(&mut self, list: &DrawList, id: ClipId) -> Option<String> {
        if let Some(existing) = self.clip_ids.get(&id) {
            return Some(existing.clone());
        }
        let clip = list.clip(id)?;
        let parent = clip.parent.and_then(|p| self.clip_ref(list, p));

        let svg_id = format!("clip{}", id.0);
        let _ = write!(self.defs, "<clipPath id=\"{svg_id}\"");
        if let Some(parent) = parent {
            let _ = write!(self.defs, " clip-path=\"url(#{parent})\"");
        }
        self.defs.push_str("><path");
        write_translate(&mut self.defs, clip.origin);
        let _ = writeln!(self.defs, " d=\"{}\"/></clipPath>", clip.d);

        self.clip_ids.insert(id, svg_id.clone());
        Some(svg_id)
    }
}

fn attr_num(out: &mut String, name: &str, v: f32) {
    let _ = write!(out, " {name}=\"");
    write_number(out, v);
    out.push('"');
}

fn write_fill(out: &mut String, color: Color) {
    if color.is_transparent() {
        out.push_str(" fill=\"none\"");
        return;
    }
    let _ = write!(out, " fill=\"{}\"", color.to_rgb_hex());
    if color.a < 1.0 {
        attr_num(out, "fill-opacity", color.a);
    }
}

fn write_translate(out: &mut String, origin: Vec2) {
    if origin == Vec2::zero() {
        return;
    }
    out.push_str(" transform=\"translate(");
    write_number(out, origin.x);
    out.push(' ');
    write_number(out, origin.y);
    out.push_str(")\"");
}
