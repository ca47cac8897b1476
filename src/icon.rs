use crate::model::WeatherIcon;
use crate::style;
use iced::{
    mouse,
    widget::canvas::{self, path, Frame, LineCap, Path, Stroke},
    Color, Element, Length, Point, Rectangle, Size, Theme,
};
use std::f32::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Glyph {
    Weather(WeatherIcon),
    ArrowUp,
    ArrowDown,
}

/// Vector painter for a single glyph, optionally on a circular backdrop.
#[derive(Debug, Clone, Copy)]
pub struct GlyphPainter {
    glyph: Glyph,
    color: Color,
    backdrop: Option<Color>,
    // Share of the shorter side the glyph occupies.
    scale: f32,
}

impl GlyphPainter {
    pub fn new(glyph: Glyph, color: Color) -> Self {
        Self {
            glyph,
            color,
            backdrop: None,
            scale: 1.0,
        }
    }

    pub fn on_circle(mut self, backdrop: Color, scale: f32) -> Self {
        self.backdrop = Some(backdrop);
        self.scale = scale.clamp(0.0, 1.0);
        self
    }
}

/// The large weather icon: a translucent disc with the glyph at 60% size.
/// Fills whatever square the surrounding layout hands it.
pub fn overlay_icon<'a, Message: 'a>(icon: WeatherIcon) -> Element<'a, Message> {
    canvas::Canvas::new(
        GlyphPainter::new(Glyph::Weather(icon), Color::WHITE).on_circle(style::TRANSLUCENT_PANEL, 0.6),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

pub fn small<'a, Message: 'a>(glyph: Glyph, size: f32, color: Color) -> Element<'a, Message> {
    canvas::Canvas::new(GlyphPainter::new(glyph, color))
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .into()
}

impl<Message> canvas::Program<Message> for GlyphPainter {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = bounds.width.min(bounds.height) / 2.0;

        if let Some(backdrop) = self.backdrop {
            frame.fill(&Path::circle(center, radius), backdrop);
        }

        let r = radius * self.scale;
        let stroke = Stroke::default()
            .with_color(self.color)
            .with_width((r * 0.1).max(1.0))
            .with_line_cap(LineCap::Round);

        match self.glyph {
            Glyph::Weather(WeatherIcon::SunnyDay) => {
                frame.fill(&Path::circle(center, r * 0.45), self.color);
                let rays = Path::new(|b| {
                    for i in 0..8 {
                        let angle = i as f32 * PI / 4.0;
                        let (sin, cos) = angle.sin_cos();
                        b.move_to(Point::new(center.x + cos * r * 0.62, center.y + sin * r * 0.62));
                        b.line_to(Point::new(center.x + cos * r * 0.92, center.y + sin * r * 0.92));
                    }
                });
                frame.stroke(&rays, stroke);
            }
            Glyph::Weather(WeatherIcon::Cloudy) => {
                frame.fill(&Path::new(|b| cloud(b, center, r)), self.color);
            }
            Glyph::Weather(WeatherIcon::CloudRain) => {
                let raised = Point::new(center.x, center.y - r * 0.25);
                frame.fill(&Path::new(|b| cloud(b, raised, r * 0.8)), self.color);
                let drops = Path::new(|b| {
                    for dx in [-0.4, 0.0, 0.4] {
                        let top = Point::new(center.x + dx * r, center.y + r * 0.35);
                        b.move_to(top);
                        b.line_to(Point::new(top.x - r * 0.12, top.y + r * 0.45));
                    }
                });
                frame.stroke(&drops, stroke);
            }
            Glyph::ArrowUp | Glyph::ArrowDown => {
                let dir = if self.glyph == Glyph::ArrowUp { -1.0 } else { 1.0 };
                let tip = Point::new(center.x, center.y + dir * r * 0.6);
                let arrow = Path::new(|b| {
                    b.move_to(Point::new(center.x, center.y - dir * r * 0.6));
                    b.line_to(tip);
                    b.move_to(Point::new(center.x - r * 0.4, tip.y - dir * r * 0.4));
                    b.line_to(tip);
                    b.line_to(Point::new(center.x + r * 0.4, tip.y - dir * r * 0.4));
                });
                frame.stroke(&arrow, stroke);
            }
        }

        vec![frame.into_geometry()]
    }
}

// Three overlapping puffs over a flat base, roughly `r` wide either side of `center`.
fn cloud(b: &mut path::Builder, center: Point, r: f32) {
    b.circle(Point::new(center.x - r * 0.4, center.y + r * 0.1), r * 0.35);
    b.circle(Point::new(center.x + 0.05 * r, center.y - r * 0.15), r * 0.45);
    b.circle(Point::new(center.x + r * 0.45, center.y + r * 0.15), r * 0.3);
    b.rectangle(
        Point::new(center.x - r * 0.4, center.y + r * 0.1),
        Size::new(r * 0.85, r * 0.35),
    );
}
