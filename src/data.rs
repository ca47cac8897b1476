use crate::model::{AdditionalDetails, DailyData, DailyWeather, HourlyTemp, WeatherIcon};

static WEEK_TEMP: [DailyWeather; 6] = [
    DailyWeather::new("Tuesday", WeatherIcon::SunnyDay, "31", "13"),
    DailyWeather::new("Wednesday", WeatherIcon::CloudRain, "28", "12").with_chances_of_rain("70%"),
    DailyWeather::new("Thursday", WeatherIcon::CloudRain, "26", "13").with_chances_of_rain("60%"),
    DailyWeather::new("Friday", WeatherIcon::Cloudy, "27", "16"),
    DailyWeather::new("Saturday", WeatherIcon::SunnyDay, "31", "17"),
    DailyWeather::new("Sunday", WeatherIcon::Cloudy, "26", "15"),
];

static CURRENT_DAY_HOURLY_TEMP: [HourlyTemp; 15] = [
    HourlyTemp::new("Now", "28°"),
    HourlyTemp::new("1 pm", "29°"),
    HourlyTemp::new("2 pm", "31°"),
    HourlyTemp::new("3 pm", "31°"),
    HourlyTemp::new("4 pm", "31°"),
    HourlyTemp::new("5 pm", "29°"),
    HourlyTemp::new("6 pm", "28°"),
    HourlyTemp::new("7 pm", "22°"),
    HourlyTemp::new("8 pm", "18°"),
    HourlyTemp::new("9 pm", "16°"),
    HourlyTemp::new("10 pm", "16°"),
    HourlyTemp::new("11 pm", "15°"),
    HourlyTemp::new("12 am", "14°"),
    HourlyTemp::new("1 am", "13°"),
    HourlyTemp::new("2 am", "12°"),
];

static TODAY: DailyData = DailyData {
    location_name: "Harare",
    date_string: "Mon, July 6",
    current_day_weather_icon: WeatherIcon::SunnyDay,
    current_temp: "28°",
    current_day_max: "31°",
    current_day_min: "19°",
    current_day_short_description: "Sunny",
    current_day_long_description: "Feels like 29°",
    week_temp: &WEEK_TEMP,
    current_day_hourly_temp: &CURRENT_DAY_HOURLY_TEMP,
    additional_details: AdditionalDetails {
        sunrise: "3:55 am",
        sunset: "9:13 pm",
        precipitation: "10%",
        humidity: "42%",
        wind: "11 km/h",
        pressure: "1009 hPa",
    },
};

/// The sample shown on screen.
pub fn today() -> &'static DailyData {
    &TODAY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_is_ordered_tuesday_to_sunday() {
        let days: Vec<_> = today().week_temp.iter().map(|d| d.week_day).collect();
        assert_eq!(
            days,
            ["Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"]
        );
    }

    #[test]
    fn test_only_midweek_has_rain() {
        let rainy: Vec<_> = today()
            .week_temp
            .iter()
            .filter(|d| d.has_chance_of_rain())
            .map(|d| (d.week_day, d.chances_of_rain))
            .collect();
        assert_eq!(rainy, [("Wednesday", "70%"), ("Thursday", "60%")]);
    }

    #[test]
    fn test_hourly_starts_now_and_ends_at_two_am() {
        let hourly = today().current_day_hourly_temp;
        assert_eq!(hourly.len(), 15);
        assert_eq!(hourly.first(), Some(&HourlyTemp::new("Now", "28°")));
        assert_eq!(hourly.last(), Some(&HourlyTemp::new("2 am", "12°")));
    }

    #[test]
    fn test_current_temp_matches_first_hour() {
        let data = today();
        assert_eq!(data.current_temp, data.current_day_hourly_temp[0].temp);
    }
}
