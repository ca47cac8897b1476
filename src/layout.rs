use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer;
use iced::advanced::widget::{Tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{event, mouse, Element, Event, Length, Point, Rectangle, Size};
use tracing::trace;

const MIN_RATIO: f32 = 1e-3;

/// How a two-pane split divides its width between its children.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplitMeasure {
    /// Text on the left, an oversized square icon on the right.
    ///
    /// The container keeps `aspect_ratio` (width / height), growing taller
    /// only when the text needs more room. The text pane gets
    /// `text_fraction` of the width, and the icon pane is a square
    /// `icon_scale` times the aspect height starting where the text ends.
    /// The icon may overflow the container and is clipped; the text never is.
    IconBeside {
        aspect_ratio: f32,
        text_fraction: f32,
        icon_scale: f32,
    },
    /// Two columns sharing the width in proportion to their weights.
    Weighted { first: f32, second: f32 },
}

/// Where the two panes land, relative to the split's own origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitPlacement {
    pub size: Size,
    pub first: Rectangle,
    pub second: Rectangle,
}

impl SplitMeasure {
    pub const HERO: SplitMeasure = SplitMeasure::IconBeside {
        aspect_ratio: 1.6,
        text_fraction: 0.62,
        icon_scale: 1.2,
    };

    pub const HALVES: SplitMeasure = SplitMeasure::Weighted {
        first: 0.5,
        second: 0.5,
    };

    pub const WEEKDAY: SplitMeasure = SplitMeasure::Weighted {
        first: 0.3,
        second: 0.7,
    };

    pub fn icon_beside(aspect_ratio: f32, text_fraction: f32, icon_scale: f32) -> Self {
        SplitMeasure::IconBeside {
            aspect_ratio: aspect_ratio.max(MIN_RATIO),
            text_fraction: text_fraction.clamp(0.0, 1.0),
            icon_scale: icon_scale.max(0.0),
        }
    }

    pub fn weighted(first: f32, second: f32) -> Self {
        SplitMeasure::Weighted {
            first: first.max(MIN_RATIO),
            second: second.max(MIN_RATIO),
        }
    }

    /// Limits each pane is measured against, given the split's max width.
    pub fn pane_limits(&self, max_width: f32) -> [layout::Limits; 2] {
        let width = finite_width(max_width);

        match *self {
            SplitMeasure::IconBeside {
                aspect_ratio,
                text_fraction,
                icon_scale,
            } => {
                let height = width / aspect_ratio;
                let text_width = (width * text_fraction).floor();
                let icon = Size::new(
                    (height * icon_scale).floor(),
                    (height * icon_scale).floor(),
                );

                [fixed_width(text_width), layout::Limits::new(icon, icon)]
            }
            SplitMeasure::Weighted { first, second } => {
                let first_width = width * first / (first + second);

                [fixed_width(first_width), fixed_width(width - first_width)]
            }
        }
    }

    /// Positions panes of the given measured sizes inside the split.
    pub fn place(&self, max_width: f32, first: Size, second: Size) -> SplitPlacement {
        let width = finite_width(max_width);

        match *self {
            SplitMeasure::IconBeside { aspect_ratio, .. } => {
                let height = (width / aspect_ratio).max(first.height);

                SplitPlacement {
                    size: Size::new(width, height),
                    first: Rectangle::new(Point::new(0.0, (height - first.height) / 2.0), first),
                    second: Rectangle::new(
                        Point::new(first.width, (height - second.height) / 2.0),
                        second,
                    ),
                }
            }
            SplitMeasure::Weighted { .. } => SplitPlacement {
                size: Size::new(width, first.height.max(second.height)),
                first: Rectangle::new(Point::ORIGIN, first),
                second: Rectangle::new(Point::new(first.width, 0.0), second),
            },
        }
    }
}

fn finite_width(max_width: f32) -> f32 {
    if max_width.is_finite() {
        max_width.max(0.0)
    } else {
        0.0
    }
}

fn fixed_width(width: f32) -> layout::Limits {
    layout::Limits::new(Size::new(width, 0.0), Size::new(width, f32::INFINITY))
}

/// A two-pane container laid out by a [`SplitMeasure`]. The second pane is
/// clipped to the container's bounds.
pub struct Split<'a, Message, Theme = iced::Theme, Renderer = iced::Renderer> {
    measure: SplitMeasure,
    children: Vec<Element<'a, Message, Theme, Renderer>>,
}

impl<'a, Message, Theme, Renderer> Split<'a, Message, Theme, Renderer> {
    pub fn new(
        measure: SplitMeasure,
        first: impl Into<Element<'a, Message, Theme, Renderer>>,
        second: impl Into<Element<'a, Message, Theme, Renderer>>,
    ) -> Self {
        Self {
            measure,
            children: vec![first.into(), second.into()],
        }
    }
}

impl<'a, Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for Split<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Shrink)
    }

    fn children(&self) -> Vec<Tree> {
        self.children.iter().map(Tree::new).collect()
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(&self.children);
    }

    fn layout(
        &self,
        tree: &mut Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let max_width = limits.max().width;
        let [first_limits, second_limits] = self.measure.pane_limits(max_width);

        let first = self.children[0]
            .as_widget()
            .layout(&mut tree.children[0], renderer, &first_limits);
        let second = self.children[1]
            .as_widget()
            .layout(&mut tree.children[1], renderer, &second_limits);

        let placement = self.measure.place(max_width, first.size(), second.size());
        trace!(
            measure = ?self.measure,
            max_width,
            size = ?placement.size,
            first = ?placement.first,
            second = ?placement.second,
            "measured split"
        );

        layout::Node::with_children(
            placement.size,
            vec![
                first.move_to(placement.first.position()),
                second.move_to(placement.second.position()),
            ],
        )
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let mut panes = self.children.iter().zip(&tree.children).zip(layout.children());

        if let Some(((first, state), first_layout)) = panes.next() {
            first
                .as_widget()
                .draw(state, renderer, theme, style, first_layout, cursor, viewport);
        }

        // Only the icon pane may overflow.
        if let Some(((second, state), second_layout)) = panes.next() {
            renderer.with_layer(layout.bounds(), |renderer| {
                second
                    .as_widget()
                    .draw(state, renderer, theme, style, second_layout, cursor, viewport);
            });
        }
    }

    fn on_event(
        &mut self,
        tree: &mut Tree,
        event: Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) -> event::Status {
        self.children
            .iter_mut()
            .zip(&mut tree.children)
            .zip(layout.children())
            .map(|((child, state), layout)| {
                child.as_widget_mut().on_event(
                    state,
                    event.clone(),
                    layout,
                    cursor,
                    renderer,
                    clipboard,
                    shell,
                    viewport,
                )
            })
            .fold(event::Status::Ignored, event::Status::merge)
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.children
            .iter()
            .zip(&tree.children)
            .zip(layout.children())
            .map(|((child, state), layout)| {
                child
                    .as_widget()
                    .mouse_interaction(state, layout, cursor, viewport, renderer)
            })
            .max()
            .unwrap_or_default()
    }
}

impl<'a, Message, Theme, Renderer> From<Split<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(split: Split<'a, Message, Theme, Renderer>) -> Self {
        Element::new(split)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_limits_follow_aspect_ratio() {
        let [text, icon] = SplitMeasure::HERO.pane_limits(320.0);
        // 320 / 1.6 = 200 high, text gets floor(320 * 0.62)
        assert_eq!(text.max().width, 198.0);
        assert_eq!(text.min().width, 198.0);
        assert_eq!(icon.max(), Size::new(240.0, 240.0));
        assert_eq!(icon.min(), Size::new(240.0, 240.0));
    }

    #[test]
    fn test_weighted_limits_split_evenly() {
        let [first, second] = SplitMeasure::HALVES.pane_limits(300.0);
        assert_eq!(first.max().width, 150.0);
        assert_eq!(second.max().width, 150.0);
    }

    #[test]
    fn test_weighted_place_uses_taller_child() {
        let placement = SplitMeasure::weighted(1.0, 3.0).place(
            400.0,
            Size::new(100.0, 40.0),
            Size::new(300.0, 60.0),
        );
        assert_eq!(placement.size, Size::new(400.0, 60.0));
        assert_eq!(placement.second.position(), Point::new(100.0, 0.0));
    }

    #[test]
    fn test_constructors_reject_degenerate_ratios() {
        let SplitMeasure::IconBeside { aspect_ratio, .. } = SplitMeasure::icon_beside(0.0, 2.0, -1.0)
        else {
            panic!("expected icon split");
        };
        assert!(aspect_ratio > 0.0);

        let [first, second] = SplitMeasure::weighted(0.0, 0.0).pane_limits(200.0);
        assert!((first.max().width - 100.0).abs() < 1e-3);
        assert!((second.max().width - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_hero_grows_to_fit_tall_text() {
        let placement = SplitMeasure::HERO.place(
            328.0,
            Size::new(203.0, 283.2),
            Size::new(246.0, 246.0),
        );
        assert_eq!(placement.size.height, 283.2);
        assert_eq!(placement.first.y, 0.0);
        assert!(placement.second.y > 0.0);
    }

    #[test]
    fn test_unbounded_width_collapses() {
        let placement = SplitMeasure::HERO.place(f32::INFINITY, Size::ZERO, Size::ZERO);
        assert_eq!(placement.size, Size::ZERO);
    }
}
