use serde::Serialize;

/// Everything the screen shows for one location on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyData {
    pub location_name: &'static str,
    pub date_string: &'static str,
    pub current_day_weather_icon: WeatherIcon,
    pub current_temp: &'static str,
    pub current_day_max: &'static str,
    pub current_day_min: &'static str,
    pub current_day_short_description: &'static str,
    pub current_day_long_description: &'static str,
    pub week_temp: &'static [DailyWeather],
    pub current_day_hourly_temp: &'static [HourlyTemp],
    pub additional_details: AdditionalDetails,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HourlyTemp {
    pub hour: &'static str,
    pub temp: &'static str,
}

impl HourlyTemp {
    pub const fn new(hour: &'static str, temp: &'static str) -> Self {
        Self { hour, temp }
    }
}

/// One row of the weekly forecast. Temperatures carry no degree sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyWeather {
    pub week_day: &'static str,
    pub weather_icon: WeatherIcon,
    pub chances_of_rain: &'static str,
    pub max: &'static str,
    pub min: &'static str,
}

impl DailyWeather {
    pub const NO_RAIN: &'static str = "0%";

    pub const fn new(
        week_day: &'static str,
        weather_icon: WeatherIcon,
        max: &'static str,
        min: &'static str,
    ) -> Self {
        Self {
            week_day,
            weather_icon,
            chances_of_rain: Self::NO_RAIN,
            max,
            min,
        }
    }

    pub const fn with_chances_of_rain(self, chances_of_rain: &'static str) -> Self {
        Self {
            chances_of_rain,
            ..self
        }
    }

    /// A day showing "0%" has no rain clause, visually or in its description.
    pub fn has_chance_of_rain(&self) -> bool {
        self.chances_of_rain != Self::NO_RAIN
    }

    /// Visible chance-of-rain label, blank on dry days.
    pub fn chances_of_rain_label(&self) -> &'static str {
        if self.has_chance_of_rain() {
            self.chances_of_rain
        } else {
            ""
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdditionalDetails {
    pub sunrise: &'static str,
    pub sunset: &'static str,
    pub precipitation: &'static str,
    pub humidity: &'static str,
    pub wind: &'static str,
    pub pressure: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WeatherIcon {
    CloudRain,
    Cloudy,
    SunnyDay,
}

impl WeatherIcon {
    pub fn description(&self) -> &'static str {
        match self {
            WeatherIcon::CloudRain => "clouds with rain icon",
            WeatherIcon::Cloudy => "cloudy icon",
            WeatherIcon::SunnyDay => "sun icon",
        }
    }
}
