use crate::app::Message;
use crate::icon::{self, Glyph};
use crate::layout::{Split, SplitMeasure};
use crate::model::{AdditionalDetails, DailyData, DailyWeather, HourlyTemp};
use crate::semantics;
use crate::strings;
use crate::style::{self, Panel};
use iced::{
    theme,
    widget::{button, column, container, row, scrollable, text, tooltip, Column, Row, Space},
    Alignment, Element, Length,
};

/// Optionally surfaces a section's screen-reader description as a tooltip.
pub fn described<'a>(
    content: impl Into<Element<'a, Message>>,
    description: String,
    show: bool,
) -> Element<'a, Message> {
    if show {
        tooltip(
            content,
            text(description).size(12),
            tooltip::Position::Bottom,
        )
        .padding(8)
        .style(theme::Container::Box)
        .into()
    } else {
        content.into()
    }
}

pub fn create_date_and_degrees_row<'a>(date_string: &'a str, show: bool) -> Element<'a, Message> {
    // Empty slot, date and unit spread across the row
    let content = row![
        text("").size(16),
        Space::with_width(Length::Fill),
        text(date_string).size(16).style(style::TEXT),
        Space::with_width(Length::Fill),
        text(strings::DEGREES_CELSIUS).size(16).style(style::TEXT),
    ]
    .padding([0, style::PAGE_PADDING, 0, 0])
    .width(Length::Fill);

    described(content, strings::WELCOME.to_string(), show)
}

pub fn create_icon_and_text_split<'a>(
    data: &'a DailyData,
    selected_index: usize,
    page_count: usize,
    show: bool,
) -> Element<'a, Message> {
    // Text pane: location, page dots, temperatures and description
    let text_pane = column![
        text(data.location_name).size(24).style(style::TEXT),
        Space::with_height(Length::Fixed(16.0)),
        create_location_index_row(selected_index, page_count),
        Space::with_height(Length::Fixed(24.0)),
        text(data.current_temp)
            .size(80)
            .font(style::BOLD)
            .style(style::TEXT),
        create_max_and_min_temp_row(data.current_day_max, data.current_day_min),
        Space::with_height(Length::Fixed(32.0)),
        create_short_weather_description(
            data.current_day_short_description,
            data.current_day_long_description,
        ),
    ];

    // Oversized icon bleeds past the right edge
    let split: Split<'a, Message> = Split::new(
        SplitMeasure::HERO,
        text_pane,
        icon::overlay_icon(data.current_day_weather_icon),
    );

    described(
        split,
        semantics::icon_and_text_split_description(data, selected_index, page_count),
        show,
    )
}

pub fn create_location_index_row<'a>(selected_index: usize, page_count: usize) -> Element<'a, Message> {
    let dots: Vec<Element<'a, Message>> = (0..page_count)
        .map(|index| {
            button(Space::new(Length::Fixed(5.0), Length::Fixed(5.0)))
                .on_press(Message::SelectPage(index))
                .padding(0)
                .style(style::dot(index == selected_index))
                .into()
        })
        .collect();

    Row::with_children(dots).spacing(8).into()
}

fn create_max_and_min_temp_row<'a>(max_temp: &'a str, min_temp: &'a str) -> Element<'a, Message> {
    row![
        icon::small(Glyph::ArrowUp, 24.0, style::FAINT),
        text(max_temp).size(16).style(style::TEXT),
        Space::with_width(Length::Fixed(16.0)),
        icon::small(Glyph::ArrowDown, 24.0, style::FAINT),
        text(min_temp).size(16).style(style::TEXT),
    ]
    .align_items(Alignment::Center)
    .into()
}

fn create_short_weather_description<'a>(short: &'a str, long: &'a str) -> Element<'a, Message> {
    column![
        text(short).size(16).font(style::BOLD).style(style::TEXT),
        Space::with_height(Length::Fixed(8.0)),
        text(long).size(14).style(style::SUBDUED_TEXT),
    ]
    .into()
}

fn divider<'a>() -> Element<'a, Message> {
    container(Space::with_height(Length::Fixed(0.5)))
        .width(Length::Fill)
        .height(Length::Fixed(0.5))
        .style(style::panel(Panel::Divider))
        .into()
}

pub fn create_hourly_temp_row<'a>(hourly_temp: &'a [HourlyTemp], show: bool) -> Element<'a, Message> {
    let items: Vec<_> = hourly_temp
        .iter()
        .map(|item| create_hourly_temp_item(item, show))
        .collect();

    // Horizontal strip between two dividers
    let strip = scrollable(Row::with_children(items).spacing(40).padding([0, 40]))
        .direction(scrollable::Direction::Horizontal(
            scrollable::Properties::default(),
        ))
        .width(Length::Fill);

    column![divider(), strip, divider()].into()
}

fn create_hourly_temp_item<'a>(item: &'a HourlyTemp, show: bool) -> Element<'a, Message> {
    let content = column![
        Space::with_height(Length::Fixed(32.0)),
        text(item.hour).size(14).style(style::SUBDUED_TEXT),
        Space::with_height(Length::Fixed(16.0)),
        text(item.temp).size(16).font(style::BOLD).style(style::TEXT),
        Space::with_height(Length::Fixed(32.0)),
    ];

    described(content, semantics::hourly_temp_description(item), show)
}

pub fn create_week_weather_forecast<'a>(week_temp: &'a [DailyWeather], show: bool) -> Element<'a, Message> {
    let rows: Vec<_> = week_temp
        .iter()
        .map(|daily| create_daily_weather_row(daily, show))
        .collect();

    Column::with_children(rows)
        .spacing(style::ROW_GAP)
        .padding([32, style::PAGE_PADDING, 24, style::PAGE_PADDING])
        .into()
}

fn create_daily_weather_row<'a>(daily: &'a DailyWeather, show: bool) -> Element<'a, Message> {
    let icon_and_chances = row![
        icon::small(Glyph::Weather(daily.weather_icon), 16.0, style::TEXT),
        Space::with_width(Length::Fixed(16.0)),
        text(daily.chances_of_rain_label())
            .size(14)
            .style(style::SUBDUED_TEXT),
    ]
    .width(Length::Fixed(72.0))
    .align_items(Alignment::Center);

    let max_and_min = row![
        text(daily.max).size(16).style(style::TEXT),
        Space::with_width(Length::Fill),
        text(daily.min).size(16).style(style::SUBDUED_TEXT),
    ]
    .width(Length::Fixed(56.0));

    // Weekday takes 30%, the icon and temperature slots share the rest
    let rest = row![
        Space::with_width(Length::Fill),
        icon_and_chances,
        Space::with_width(Length::Fill),
        max_and_min,
    ]
    .align_items(Alignment::Center)
    .width(Length::Fill);

    let content: Split<'a, Message> = Split::new(
        SplitMeasure::WEEKDAY,
        text(daily.week_day)
            .size(16)
            .font(style::BOLD)
            .style(style::TEXT),
        rest,
    );

    described(content, semantics::daily_weather_description(daily), show)
}

pub fn create_additional_details<'a>(details: &'a AdditionalDetails, show: bool) -> Element<'a, Message> {
    // Three label/value pairs on a translucent panel
    let content = container(column![
        create_label_and_value_row(
            false,
            (strings::SUNRISE, details.sunrise),
            (strings::SUNSET, details.sunset),
        ),
        create_label_and_value_row(
            false,
            (strings::PRECIPITATION, details.precipitation),
            (strings::HUMIDITY, details.humidity),
        ),
        create_label_and_value_row(
            true,
            (strings::WIND, details.wind),
            (strings::PRESSURE, details.pressure),
        ),
    ])
    .padding([24, style::PAGE_PADDING])
    .width(Length::Fill)
    .style(style::panel(Panel::Translucent));

    described(content, semantics::additional_details_description(details), show)
}

fn create_label_and_value_row<'a>(
    is_last: bool,
    first: (&'a str, &'a str),
    second: (&'a str, &'a str),
) -> Element<'a, Message> {
    let bottom = if is_last { 0 } else { style::ROW_GAP as u16 };

    let split: Split<'a, Message> = Split::new(
        SplitMeasure::HALVES,
        create_label_and_value(first.0, first.1),
        create_label_and_value(second.0, second.1),
    );

    container(split)
        .padding([0, 0, bottom, 0])
        .width(Length::Fill)
        .into()
}

fn create_label_and_value<'a>(label: &'a str, value: &'a str) -> Element<'a, Message> {
    column![
        text(label).size(14).style(style::SUBDUED_TEXT),
        Space::with_height(Length::Fixed(24.0)),
        text(value).size(16).font(style::BOLD).style(style::TEXT),
    ]
    .into()
}
