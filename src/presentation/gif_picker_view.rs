use iced::widget::{button, column, container, image, row, scrollable, text, text_input, Space};
use iced::{Alignment, Background, Color, Element, Length};

use super::app_theme;
use crate::core::models::ThemeMode;
use crate::core::orchestrators::{SearchSequencer, SearchStatus};
use crate::global_constants;

#[derive(Debug, Clone)]
pub enum GifPickerMessage {
    QueryChanged(String),
    QuickQuery(&'static str),
    GifPicked(usize),
    CloseRequested,
}

/// Popup content: search box, header shortcuts and the thumbnail grid.
pub struct GifPickerView {
    query: String,
    theme_mode: ThemeMode,
}

impl GifPickerView {
    pub fn new(initial_query: &str, theme_mode: ThemeMode) -> Self {
        Self {
            query: initial_query.to_string(),
            theme_mode,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns `true` when the query actually changed.
    pub fn set_query(&mut self, query: &str) -> bool {
        if self.query == query {
            return false;
        }
        self.query = query.to_string();
        true
    }

    pub fn render_ui<'a>(&'a self, sequencer: &'a SearchSequencer) -> Element<'a, GifPickerMessage> {
        let theme = app_theme::get_theme(&self.theme_mode);

        let content = column![self.render_header(), self.render_body(sequencer)]
            .spacing(12)
            .padding(16)
            .width(Length::Fill);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| {
                let palette = theme.palette();
                iced::widget::container::Style {
                    background: Some(Background::Color(palette.background)),
                    text_color: Some(palette.text),
                    ..Default::default()
                }
            })
            .into()
    }

    fn render_header(&self) -> Element<'_, GifPickerMessage> {
        let search_input = text_input("Search GIPHY", &self.query)
            .on_input(GifPickerMessage::QueryChanged)
            .padding(10)
            .size(16)
            .width(Length::Fill);

        let close_btn = button(text("✕").size(16))
            .padding([8, 12])
            .style(|theme, status| app_theme::secondary_button_style(theme, status))
            .on_press(GifPickerMessage::CloseRequested);

        let quick_queries: Vec<Element<'_, GifPickerMessage>> = global_constants::HEADER_QUICK_QUERIES
            .iter()
            .map(|query| {
                button(text(*query).size(13))
                    .padding([6, 12])
                    .style(|theme, status| app_theme::secondary_button_style(theme, status))
                    .on_press(GifPickerMessage::QuickQuery(*query))
                    .into()
            })
            .collect();

        column![
            row![search_input, close_btn]
                .spacing(8)
                .align_y(Alignment::Center),
            row(quick_queries).spacing(6),
        ]
        .spacing(8)
        .into()
    }

    fn render_body<'a>(&'a self, sequencer: &'a SearchSequencer) -> Element<'a, GifPickerMessage> {
        match sequencer.status() {
            SearchStatus::Loading => Self::render_notice(global_constants::USER_MESSAGE_LOADING, None),
            SearchStatus::Unavailable(error) => Self::render_notice(
                error.user_message(),
                Some(Color::from_rgb(0.95, 0.45, 0.35)),
            ),
            SearchStatus::Ready if sequencer.results().is_empty() => {
                Self::render_notice(global_constants::USER_MESSAGE_NO_RESULTS, None)
            }
            SearchStatus::Ready | SearchStatus::Idle => Self::render_grid(sequencer),
        }
    }

    fn render_grid(sequencer: &SearchSequencer) -> Element<'_, GifPickerMessage> {
        let thumbnails: Vec<Element<'_, GifPickerMessage>> = sequencer
            .results()
            .iter()
            .enumerate()
            .map(|(index, displayed)| {
                let preview: Element<'_, GifPickerMessage> = match sequencer.preview(&displayed.object_url) {
                    Some(handle) => image(handle.clone())
                        .width(Length::Fixed(global_constants::THUMBNAIL_SIZE))
                        .height(Length::Fixed(global_constants::THUMBNAIL_SIZE))
                        .into(),
                    None => container(text(displayed.result.display_title()).size(11))
                        .width(Length::Fixed(global_constants::THUMBNAIL_SIZE))
                        .height(Length::Fixed(global_constants::THUMBNAIL_SIZE))
                        .into(),
                };

                button(preview)
                    .padding(2)
                    .style(app_theme::thumbnail_button_style)
                    .on_press(GifPickerMessage::GifPicked(index))
                    .into()
            })
            .collect();

        let mut rows: Vec<Element<'_, GifPickerMessage>> = Vec::new();
        let mut pending = thumbnails.into_iter().peekable();
        while pending.peek().is_some() {
            let chunk: Vec<_> = pending.by_ref().take(global_constants::GRID_COLUMNS).collect();
            rows.push(row(chunk).spacing(8).into());
        }

        scrollable(column(rows).spacing(8).width(Length::Fill))
            .height(Length::Fill)
            .into()
    }

    fn render_notice(message: &str, color: Option<Color>) -> Element<'_, GifPickerMessage> {
        container(
            column![
                Space::new().height(Length::Fixed(40.0)),
                text(message)
                    .size(16)
                    .style(move |_theme: &iced::Theme| iced::widget::text::Style { color }),
            ]
            .align_x(Alignment::Center),
        )
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_query_reports_changes_only() {
        let mut view = GifPickerView::new("dogs", ThemeMode::Dark);

        assert!(!view.set_query("dogs"));
        assert!(view.set_query("cats"));
        assert_eq!(view.query(), "cats");
    }
}
