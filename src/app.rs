use crate::config::{Config, ThemeVariant};
use crate::data;
use crate::model::DailyData;
use crate::semantics::{self, SemanticsNode};
use crate::view;
use iced::{keyboard, Application, Command, Element, Subscription, Theme};
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// A location indicator dot was pressed
    SelectPage(usize),
    ToggleDescriptions,
}

pub struct WeatherApp {
    pub data: &'static DailyData,
    pub selected_index: usize,
    pub page_count: usize,
    pub theme: ThemeVariant,
    pub show_descriptions: bool,
}

impl Default for WeatherApp {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl WeatherApp {
    pub fn from_config(config: &Config) -> Self {
        Self {
            data: data::today(),
            selected_index: config.selected_index,
            page_count: config.page_count,
            theme: config.theme,
            show_descriptions: config.show_descriptions,
        }
    }

    /// The accessibility tree for what is currently on screen.
    pub fn semantics(&self) -> SemanticsNode {
        semantics::screen(self.data, self.selected_index, self.page_count)
    }

    /// Applies a message without going through the iced runtime.
    pub fn apply(&mut self, message: Message) {
        match message {
            Message::SelectPage(index) => {
                if index < self.page_count {
                    debug!(index, "selected page");
                    self.selected_index = index;
                } else {
                    debug!(index, page_count = self.page_count, "ignoring out-of-range page");
                }
            }
            Message::ToggleDescriptions => {
                self.show_descriptions = !self.show_descriptions;
                debug!(show = self.show_descriptions, "toggled description tooltips");
            }
        }
    }
}

impl Application for WeatherApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = Config;

    fn new(flags: Config) -> (WeatherApp, Command<Message>) {
        (WeatherApp::from_config(&flags), Command::none())
    }

    fn title(&self) -> String {
        format!("{} - daily-wx", self.data.location_name)
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        self.apply(message);
        Command::none()
    }

    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, _modifiers| match key.as_ref() {
            keyboard::Key::Character("d") => Some(Message::ToggleDescriptions),
            _ => None,
        })
    }

    fn theme(&self) -> Theme {
        match self.theme {
            ThemeVariant::Light => Theme::Light,
            ThemeVariant::Dark => Theme::Dark,
        }
    }

    fn view(&self) -> Element<Message> {
        view::view(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_page_updates_description() {
        let mut app = WeatherApp::default();
        app.apply(Message::SelectPage(3));
        assert_eq!(app.selected_index, 3);

        let tree = app.semantics();
        let split = tree
            .find_by_tag(crate::strings::tags::WEATHER_ICON_AND_TEXT_SPLIT)
            .unwrap();
        assert!(split
            .content_description
            .as_deref()
            .unwrap()
            .starts_with("Selected 4 of 5"));
    }

    #[test]
    fn test_select_page_out_of_range_is_ignored() {
        let mut app = WeatherApp::default();
        app.apply(Message::SelectPage(5));
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_toggle_descriptions() {
        let mut app = WeatherApp::default();
        assert!(!app.show_descriptions);
        app.apply(Message::ToggleDescriptions);
        assert!(app.show_descriptions);
        app.apply(Message::ToggleDescriptions);
        assert!(!app.show_descriptions);
    }

    #[test]
    fn test_title_names_location() {
        assert_eq!(WeatherApp::default().title(), "Harare - daily-wx");
    }
}
