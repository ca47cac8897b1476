//! Screen-reader descriptions and the semantics tree they hang off.
//!
//! iced has no accessibility layer of its own, so the screen publishes this
//! tree alongside the widget tree. Each tagged section carries a merged
//! content description assembled from the same fields it renders, and the
//! visible text of every leaf is kept unmerged so tests can look it up.

use crate::model::{AdditionalDetails, DailyData, DailyWeather, HourlyTemp, WeatherIcon};
use crate::strings::{self, tags};
use serde::Serialize;

pub fn additional_details_description(details: &AdditionalDetails) -> String {
    format!(
        "{}, {}, {}, {}, {} {}",
        strings::sunrise_at(details.sunrise),
        strings::sunset_at(details.sunset),
        strings::current_precipitation(details.precipitation),
        strings::current_humidity(details.humidity),
        strings::wind_speed(details.wind),
        strings::atmospheric(details.pressure),
    )
}

/// `selected_index` is zero-based; the description reads it one-based.
///
/// The location and temperature follow the "temperature at" phrase a second
/// time, as screen readers already announce it.
pub fn icon_and_text_split_description(
    data: &DailyData,
    selected_index: usize,
    length: usize,
) -> String {
    let selected = strings::selected(selected_index + 1, length);
    let temp_at = strings::temp_at(data.location_name, data.current_temp);
    let max_is = strings::max_temperature_is(data.current_day_max);
    let min_is = strings::min_temperature_is(data.current_day_min);
    let description = strings::today_description(
        data.current_day_short_description,
        data.current_day_long_description,
    );

    format!(
        "{} {} {}, {} {}, {} {}",
        selected,
        temp_at,
        data.location_name,
        data.current_temp,
        max_is,
        min_is,
        description
    )
}

pub fn hourly_temp_description(item: &HourlyTemp) -> String {
    strings::temp_at(item.hour, item.temp)
}

/// Dry days drop the rain clause but keep its separator.
pub fn daily_weather_description(daily: &DailyWeather) -> String {
    let max_is = strings::max_temperature_is(&format!("{}°", daily.max));
    let min_is = strings::min_temperature_is(&format!("{}°", daily.min));
    let rain = if daily.has_chance_of_rain() {
        strings::chances_of_rain(daily.chances_of_rain)
    } else {
        String::new()
    };

    format!("{}, {}, {}, {}", daily.week_day, max_is, min_is, rain)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SemanticsNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_description: Option<String>,
    /// Name of the pictured weather, for nodes that draw a weather glyph
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub merge_descendants: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub selectable_group: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SemanticsNode>,
}

impl SemanticsNode {
    pub fn group() -> Self {
        Self::default()
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn tagged(mut self, tag: &'static str) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Attaches a content description and merges the subtree into one node.
    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.content_description = Some(description.into());
        self.merge_descendants = true;
        self
    }

    pub fn with_icon(mut self, icon: WeatherIcon) -> Self {
        self.icon = Some(icon.description());
        self
    }

    pub fn selectable_group(mut self) -> Self {
        self.selectable_group = true;
        self
    }

    pub fn push(mut self, child: SemanticsNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn extend(mut self, children: impl IntoIterator<Item = SemanticsNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Depth-first, pre-order.
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: vec![self] }
    }

    pub fn find_by_text(&self, text: &str) -> Option<&SemanticsNode> {
        self.iter().find(|node| node.text.as_deref() == Some(text))
    }

    pub fn all_with_text(&self, text: &str) -> Vec<&SemanticsNode> {
        self.iter()
            .filter(|node| node.text.as_deref() == Some(text))
            .collect()
    }

    pub fn find_by_tag(&self, tag: &str) -> Option<&SemanticsNode> {
        self.iter().find(|node| node.tag == Some(tag))
    }

    pub fn all_with_tag(&self, tag: &str) -> Vec<&SemanticsNode> {
        self.iter().filter(|node| node.tag == Some(tag)).collect()
    }

    pub fn any_has_content_description(&self, tag: &str, description: &str) -> bool {
        self.iter()
            .any(|node| node.tag == Some(tag) && node.content_description.as_deref() == Some(description))
    }

    /// Texts of this node and its descendants, as a merged node reports them.
    pub fn merged_text(&self) -> Vec<&str> {
        self.iter().filter_map(|node| node.text.as_deref()).collect()
    }
}

pub struct Iter<'a> {
    stack: Vec<&'a SemanticsNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a SemanticsNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Builds the semantics tree for the whole screen in composition order.
pub fn screen(data: &DailyData, selected_index: usize, length: usize) -> SemanticsNode {
    SemanticsNode::group()
        .push(date_and_degrees_row(data))
        .push(icon_and_text_split(data, selected_index, length))
        .push(SemanticsNode::group().extend(data.current_day_hourly_temp.iter().map(hourly_temp_item)))
        .push(SemanticsNode::group().extend(data.week_temp.iter().map(daily_weather_row)))
        .push(additional_details(&data.additional_details))
}

fn date_and_degrees_row(data: &DailyData) -> SemanticsNode {
    SemanticsNode::group()
        .tagged(tags::DATE_AND_DEGREES_ROW)
        .described(strings::WELCOME)
        .push(SemanticsNode::text(data.date_string))
        .push(SemanticsNode::text(strings::DEGREES_CELSIUS))
}

fn icon_and_text_split(data: &DailyData, selected_index: usize, length: usize) -> SemanticsNode {
    SemanticsNode::group()
        .tagged(tags::WEATHER_ICON_AND_TEXT_SPLIT)
        .described(icon_and_text_split_description(data, selected_index, length))
        .selectable_group()
        .with_icon(data.current_day_weather_icon)
        .push(SemanticsNode::text(data.location_name))
        .push(SemanticsNode::text(data.current_temp))
        .push(SemanticsNode::text(data.current_day_max))
        .push(SemanticsNode::text(data.current_day_min))
        .push(SemanticsNode::text(data.current_day_short_description))
        .push(SemanticsNode::text(data.current_day_long_description))
}

fn hourly_temp_item(item: &HourlyTemp) -> SemanticsNode {
    SemanticsNode::group()
        .tagged(tags::HOURLY_TEMP_ITEM)
        .described(hourly_temp_description(item))
        .push(SemanticsNode::text(item.hour))
        .push(SemanticsNode::text(item.temp))
}

fn daily_weather_row(daily: &DailyWeather) -> SemanticsNode {
    let mut row = SemanticsNode::group()
        .tagged(tags::DAILY_WEATHER_ROW)
        .described(daily_weather_description(daily))
        .with_icon(daily.weather_icon)
        .push(SemanticsNode::text(daily.week_day));
    if daily.has_chance_of_rain() {
        row = row.push(SemanticsNode::text(daily.chances_of_rain));
    }
    row.push(SemanticsNode::text(daily.max))
        .push(SemanticsNode::text(daily.min))
}

fn additional_details(details: &AdditionalDetails) -> SemanticsNode {
    let pairs = [
        (strings::SUNRISE, details.sunrise),
        (strings::SUNSET, details.sunset),
        (strings::PRECIPITATION, details.precipitation),
        (strings::HUMIDITY, details.humidity),
        (strings::WIND, details.wind),
        (strings::PRESSURE, details.pressure),
    ];

    SemanticsNode::group()
        .tagged(tags::ADDITIONAL_DETAILS)
        .described(additional_details_description(details))
        .extend(pairs.into_iter().map(|(label, value)| {
            SemanticsNode::group()
                .push(SemanticsNode::text(label))
                .push(SemanticsNode::text(value))
        }))
}
