use crate::app::{Message, WeatherApp};
use crate::components;
use crate::style::{self, Panel};
use iced::{
    widget::{column, container, scrollable, Space},
    Element, Length,
};

pub fn view(app: &WeatherApp) -> Element<Message> {
    let data = app.data;
    let show = app.show_descriptions;

    // Date row and the hero split share the left page margin; the icon bleeds
    // to the right edge.
    let header = column![
        components::create_date_and_degrees_row(data.date_string, show),
        Space::with_height(Length::Fixed(64.0)),
        components::create_icon_and_text_split(data, app.selected_index, app.page_count, show),
        Space::with_height(Length::Fixed(style::SECTION_GAP)),
    ]
    .padding([style::PAGE_PADDING, 0, style::PAGE_PADDING, style::PAGE_PADDING]);

    // Hourly strip, weekly forecast and details run edge to edge
    let page = column![
        header,
        components::create_hourly_temp_row(data.current_day_hourly_temp, show),
        components::create_week_weather_forecast(data.week_temp, show),
        components::create_additional_details(&data.additional_details, show),
    ]
    .width(Length::Fill);

    container(scrollable(page).width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(style::panel(Panel::Page(app.theme)))
        .into()
}
