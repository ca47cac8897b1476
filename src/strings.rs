//! User-facing text: accessibility templates, visible labels and test tags.

pub const WELCOME: &str = "Welcome to your daily weather";
pub const DEGREES_CELSIUS: &str = "°C";

pub const SUNRISE: &str = "Sunrise";
pub const SUNSET: &str = "Sunset";
pub const PRECIPITATION: &str = "Precipitation";
pub const HUMIDITY: &str = "Humidity";
pub const WIND: &str = "Wind";
pub const PRESSURE: &str = "Pressure";

pub mod tags {
    pub const ADDITIONAL_DETAILS: &str = "additional_details";
    pub const WEATHER_ICON_AND_TEXT_SPLIT: &str = "weather_icon_and_text_split";
    pub const HOURLY_TEMP_ITEM: &str = "hourly_temp_item";
    pub const DAILY_WEATHER_ROW: &str = "daily_weather_row";
    pub const DATE_AND_DEGREES_ROW: &str = "date_and_degrees_row";
}

pub fn sunrise_at(time: &str) -> String {
    format!("Sunrise at {}", time)
}

pub fn sunset_at(time: &str) -> String {
    format!("Sunset at {}", time)
}

pub fn current_precipitation(precipitation: &str) -> String {
    format!("Precipitation {}", precipitation)
}

pub fn current_humidity(humidity: &str) -> String {
    format!("Humidity {}", humidity)
}

pub fn wind_speed(wind: &str) -> String {
    format!("Wind speed {}", wind)
}

pub fn atmospheric(pressure: &str) -> String {
    format!("Atmospheric pressure {}", pressure)
}

/// `position` is one-based.
pub fn selected(position: usize, total: usize) -> String {
    format!("Selected {} of {}", position, total)
}

pub fn today_description(short: &str, long: &str) -> String {
    format!("Today {}, {}", short, long)
}

pub fn max_temperature_is(temp: &str) -> String {
    format!("Maximum temperature is {}", temp)
}

pub fn min_temperature_is(temp: &str) -> String {
    format!("Minimum temperature is {}", temp)
}

pub fn temp_at(label: &str, temp: &str) -> String {
    format!("Temperature at {}, {}", label, temp)
}

pub fn chances_of_rain(chances: &str) -> String {
    format!("Chances of rain {}", chances)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_substitute_arguments() {
        assert_eq!(sunrise_at("3:55 am"), "Sunrise at 3:55 am");
        assert_eq!(selected(1, 5), "Selected 1 of 5");
        assert_eq!(temp_at("1 pm", "29°"), "Temperature at 1 pm, 29°");
        assert_eq!(today_description("Sunny", "Feels like 29°"), "Today Sunny, Feels like 29°");
        assert_eq!(chances_of_rain("70%"), "Chances of rain 70%");
    }
}
