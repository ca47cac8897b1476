use daily_wx::layout::SplitMeasure;
use iced::{Point, Rectangle, Size};

#[test]
fn hero_split_centres_text_and_overflows_icon() {
    let measure = SplitMeasure::HERO;
    let [text_limits, icon_limits] = measure.pane_limits(320.0);

    // Text measured at its fixed width, 120 high.
    let text = Size::new(text_limits.max().width, 120.0);
    let icon = icon_limits.max();
    let placement = measure.place(320.0, text, icon);

    assert_eq!(placement.size, Size::new(320.0, 200.0));
    assert_eq!(
        placement.first,
        Rectangle::new(Point::new(0.0, 40.0), Size::new(198.0, 120.0))
    );
    // 240 square in a 200 high box: starts 20 above and runs past the right edge.
    assert_eq!(placement.second.x, 198.0);
    assert_eq!(placement.second.y, -20.0);
    assert!(placement.second.x + placement.second.width > placement.size.width);
}

#[test]
fn hero_split_grows_for_tall_text() {
    let placement = SplitMeasure::HERO.place(160.0, Size::new(99.0, 150.0), Size::new(120.0, 120.0));
    assert_eq!(placement.size.height, 150.0);
    assert_eq!(placement.first.y, 0.0);
    // Icon stays centred on the grown box.
    assert_eq!(placement.second.y, 15.0);
}

#[test]
fn halves_share_width_and_align_top() {
    let measure = SplitMeasure::HALVES;
    let [first, second] = measure.pane_limits(296.0);
    assert_eq!(first.min().width, 148.0);
    assert_eq!(second.min().width, 148.0);

    let placement = measure.place(296.0, Size::new(148.0, 58.0), Size::new(148.0, 58.0));
    assert_eq!(placement.size, Size::new(296.0, 58.0));
    assert_eq!(placement.first.position(), Point::ORIGIN);
    assert_eq!(placement.second.position(), Point::new(148.0, 0.0));
}

#[test]
fn custom_icon_split() {
    let measure = SplitMeasure::icon_beside(2.0, 0.5, 1.0);
    let [text, icon] = measure.pane_limits(400.0);
    assert_eq!(text.max().width, 200.0);
    assert_eq!(icon.max(), Size::new(200.0, 200.0));

    let placement = measure.place(400.0, Size::new(200.0, 100.0), icon.max());
    assert_eq!(placement.first.y, 50.0);
    assert_eq!(placement.second, Rectangle::new(Point::new(200.0, 0.0), Size::new(200.0, 200.0)));
}
