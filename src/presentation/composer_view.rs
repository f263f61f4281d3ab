use std::collections::BTreeSet;
use std::sync::Arc;

use iced::widget::{button, column, container, mouse_area, row, text, text_input, Space};
use iced::{Alignment, Background, Border, Color, Element, Length};

use super::app_theme;
use crate::adapters::ComposerDraftStore;
use crate::core::models::ThemeMode;
use crate::global_constants;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConversationPanel {
    Details,
    Media,
    Members,
}

impl ConversationPanel {
    pub const ALL: [ConversationPanel; 3] = [
        ConversationPanel::Details,
        ConversationPanel::Media,
        ConversationPanel::Members,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ConversationPanel::Details => "Details",
            ConversationPanel::Media => "Media",
            ConversationPanel::Members => "Members",
        }
    }
}

#[derive(Debug, Clone)]
pub enum ComposerMessage {
    DraftChanged(String),
    TriggerPressed,
    TriggerHovered(bool),
    TogglePanel(ConversationPanel),
    RemoveAttachment(usize),
    DismissStatus,
}

/// Host message composer that embeds the GIF trigger button.
pub struct ComposerView {
    conversation_id: String,
    draft_text: String,
    open_panels: BTreeSet<ConversationPanel>,
    trigger_hovered: bool,
    status: Option<String>,
    draft_store: Arc<ComposerDraftStore>,
    theme_mode: ThemeMode,
}

impl ComposerView {
    pub fn new(
        conversation_id: &str,
        draft_store: Arc<ComposerDraftStore>,
        theme_mode: ThemeMode,
    ) -> Self {
        Self {
            conversation_id: conversation_id.to_string(),
            draft_text: String::new(),
            open_panels: BTreeSet::new(),
            trigger_hovered: false,
            status: None,
            draft_store,
            theme_mode,
        }
    }

    pub fn conversation_id(&self) -> &str {
        &self.conversation_id
    }

    pub fn open_panel_count(&self) -> usize {
        self.open_panels.len()
    }

    pub fn is_trigger_hovered(&self) -> bool {
        self.trigger_hovered
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, status: Option<String>) {
        self.status = status;
    }

    /// Handles host-local messages. `TriggerPressed` belongs to the picker and is
    /// routed by the orchestrator before reaching here.
    pub fn update(&mut self, message: ComposerMessage) {
        match message {
            ComposerMessage::DraftChanged(value) => {
                self.draft_text = value;
            }
            ComposerMessage::TriggerHovered(hovered) => {
                self.trigger_hovered = hovered;
            }
            ComposerMessage::TogglePanel(panel) => {
                if !self.open_panels.remove(&panel) {
                    self.open_panels.insert(panel);
                }
                log::debug!(
                    "[APP] Panel {:?} toggled, {} open",
                    panel,
                    self.open_panels.len()
                );
            }
            ComposerMessage::RemoveAttachment(index) => {
                self.draft_store.remove(&self.conversation_id, index);
            }
            ComposerMessage::DismissStatus => {
                self.status = None;
            }
            ComposerMessage::TriggerPressed => {}
        }
    }

    pub fn render_ui(&self, picker_open: bool) -> Element<'_, ComposerMessage> {
        let theme = app_theme::get_theme(&self.theme_mode);

        let title = text(format!("Conversation {}", self.conversation_id)).size(20);

        let content = column![
            title,
            self.render_panel_toggles(),
            Space::new().height(Length::Fill),
            self.render_status(),
            self.render_attachments(),
            self.render_input_row(picker_open),
        ]
        .spacing(12)
        .padding(20)
        .width(Length::Fill)
        .height(Length::Fill);

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

    fn render_panel_toggles(&self) -> Element<'_, ComposerMessage> {
        let toggles: Vec<Element<'_, ComposerMessage>> = ConversationPanel::ALL
            .iter()
            .map(|panel| {
                let is_open = self.open_panels.contains(panel);
                let label = if is_open {
                    format!("▾ {}", panel.label())
                } else {
                    format!("▸ {}", panel.label())
                };
                button(text(label).size(13))
                    .padding([6, 12])
                    .style(app_theme::trigger_button_style(is_open))
                    .on_press(ComposerMessage::TogglePanel(*panel))
                    .into()
            })
            .collect();

        row(toggles).spacing(8).into()
    }

    fn render_status(&self) -> Element<'_, ComposerMessage> {
        match &self.status {
            Some(status) => container(
                row![
                    text(format!("⚠ {}", status)).size(14),
                    Space::new().width(Length::Fill),
                    button(text("Dismiss").size(12))
                        .padding([4, 10])
                        .style(|theme, status| app_theme::secondary_button_style(theme, status))
                        .on_press(ComposerMessage::DismissStatus),
                ]
                .align_y(Alignment::Center),
            )
            .padding([8, 12])
            .width(Length::Fill)
            .style(|_theme| iced::widget::container::Style {
                background: Some(Background::Color(Color::from_rgba(0.9, 0.4, 0.1, 0.2))),
                border: Border {
                    color: Color::from_rgba(0.9, 0.4, 0.1, 0.8),
                    width: 1.0,
                    radius: 6.0.into(),
                },
                ..Default::default()
            })
            .into(),
            None => Space::new().height(Length::Fixed(0.0)).into(),
        }
    }

    fn render_attachments(&self) -> Element<'_, ComposerMessage> {
        let chips: Vec<Element<'_, ComposerMessage>> = self
            .draft_store
            .attachments(&self.conversation_id)
            .into_iter()
            .enumerate()
            .map(|(index, draft)| {
                let label = format!("GIF · {} KB", draft.size.div_ceil(1024));
                row![
                    text(label).size(13),
                    button(text("✕").size(11))
                        .padding([2, 6])
                        .style(|theme, status| app_theme::secondary_button_style(theme, status))
                        .on_press(ComposerMessage::RemoveAttachment(index)),
                ]
                .spacing(6)
                .align_y(Alignment::Center)
                .into()
            })
            .collect();

        row(chips).spacing(12).into()
    }

    fn render_input_row(&self, picker_open: bool) -> Element<'_, ComposerMessage> {
        let trigger = mouse_area(
            button(text("GIF").size(14))
                .padding([10, 14])
                .style(app_theme::trigger_button_style(picker_open))
                .on_press(ComposerMessage::TriggerPressed),
        )
        .on_enter(ComposerMessage::TriggerHovered(true))
        .on_exit(ComposerMessage::TriggerHovered(false));

        let input = text_input("Send a message", &self.draft_text)
            .on_input(ComposerMessage::DraftChanged)
            .padding(10)
            .size(16)
            .width(Length::Fill);

        let hint = text(global_constants::HOTKEY_TOGGLE_PICKER)
            .size(11)
            .style(|_theme: &iced::Theme| iced::widget::text::Style {
                color: Some(Color::from_rgba(0.5, 0.5, 0.5, 1.0)),
            });

        column![
            row![input, trigger].spacing(8).align_y(Alignment::Center),
            hint,
        ]
        .spacing(4)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_view() -> ComposerView {
        ComposerView::new("conv-1", Arc::new(ComposerDraftStore::new()), ThemeMode::Dark)
    }

    #[test]
    fn test_toggle_panel_opens_and_closes() {
        let mut view = create_view();

        view.update(ComposerMessage::TogglePanel(ConversationPanel::Details));
        view.update(ComposerMessage::TogglePanel(ConversationPanel::Media));
        assert_eq!(view.open_panel_count(), 2);

        view.update(ComposerMessage::TogglePanel(ConversationPanel::Details));
        assert_eq!(view.open_panel_count(), 1);
    }

    #[test]
    fn test_trigger_hover_is_tracked() {
        let mut view = create_view();

        view.update(ComposerMessage::TriggerHovered(true));
        assert!(view.is_trigger_hovered());

        view.update(ComposerMessage::TriggerHovered(false));
        assert!(!view.is_trigger_hovered());
    }

    #[test]
    fn test_dismiss_status_clears_it() {
        let mut view = create_view();
        view.set_status(Some("GIF service unavailable".to_string()));

        view.update(ComposerMessage::DismissStatus);

        assert!(view.status().is_none());
    }
}
