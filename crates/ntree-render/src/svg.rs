// ABOUTME: Draw sink that writes an SVG document.
// ABOUTME: Resolves semantic color classes through the configured palette.

use ntree_core::{ColorClass, Palette, Point};

use crate::scene::{DrawSink, Scene, TextRole};

pub struct SvgSink {
    palette: Palette,
    body: String,
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

impl SvgSink {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            body: String::new(),
        }
    }

    /// Render a whole scene to a standalone SVG document
    pub fn render(scene: &Scene, palette: Palette) -> String {
        let mut sink = Self::new(palette);
        scene.replay(&mut sink);
        sink.finish(scene.width, scene.height)
    }

    pub fn finish(self, width: u32, height: u32) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n\
             <rect width=\"100%\" height=\"100%\" fill=\"{bg}\"/>\n\
             {body}</svg>\n",
            w = width,
            h = height,
            bg = self.palette.background.to_hex(),
            body = self.body,
        )
    }
}

impl DrawSink for SvgSink {
    fn draw_circle(&mut self, center: Point, radius: f32, class: ColorClass) {
        self.body.push_str(&format!(
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\"/>\n",
            center.x,
            center.y,
            radius,
            self.palette.resolve(class).to_hex()
        ));
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        self.body.push_str(&format!(
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\"/>\n",
            from.x,
            from.y,
            to.x,
            to.y,
            self.palette.ink.to_hex()
        ));
    }

    fn draw_text(&mut self, text: &str, position: Point, size: f32, role: TextRole) {
        let fill = match role {
            TextRole::Label => self.palette.ink,
            TextRole::Alert => self.palette.alert,
        };
        // SVG anchors text at the baseline; shift down so `position` is the top-left
        self.body.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" font-size=\"{:.2}\" fill=\"{}\">{}</text>\n",
            position.x,
            position.y + size,
            size,
            fill.to_hex(),
            escape(text)
        ));
    }
}
