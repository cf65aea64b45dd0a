// SPDX-License-Identifier: MPL-2.0
//! Contact form component.
//!
//! The form is a stub by design: input is validated locally and
//! acknowledged with a toast, nothing leaves the machine. Contact channels
//! from the content model are rendered next to the form.

use crate::content::ContactInfo;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, text_input, Column, Container, Row, Text},
    Element, Length, Theme,
};

/// Form field state.
#[derive(Debug, Clone, Default)]
pub struct State {
    name: String,
    email: String,
    message: String,
}

/// Messages emitted by the contact form.
#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    MessageChanged(String),
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Validation passed; the form was cleared.
    Submitted,
    /// Validation failed with a user-facing reason.
    Invalid(&'static str),
}

impl State {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a form message and return the corresponding event.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::NameChanged(value) => {
                self.name = value;
                Event::None
            }
            Message::EmailChanged(value) => {
                self.email = value;
                Event::None
            }
            Message::MessageChanged(value) => {
                self.message = value;
                Event::None
            }
            Message::Submit => match self.validate() {
                Ok(()) => {
                    self.clear();
                    Event::Submitted
                }
                Err(reason) => Event::Invalid(reason),
            },
        }
    }

    fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Please enter your name");
        }
        if !is_plausible_email(&self.email) {
            return Err("Please enter a valid email address");
        }
        if self.message.trim().is_empty() {
            return Err("Please enter a message");
        }
        Ok(())
    }

    fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }

    /// Render the contact section: channels on the left, form on the right.
    pub fn view<'a>(&'a self, info: &'a ContactInfo) -> Element<'a, Message> {
        let channels = Column::new()
            .spacing(spacing::SM)
            .push(Text::new("Get in touch").size(typography::TITLE_SM))
            .push(Text::new(info.email.as_str()).size(typography::BODY))
            .push(Text::new(info.location.as_str()).size(typography::BODY));

        let form = Column::new()
            .spacing(spacing::SM)
            .push(
                text_input("Your name", &self.name)
                    .on_input(Message::NameChanged)
                    .padding(spacing::XS),
            )
            .push(
                text_input("Email address", &self.email)
                    .on_input(Message::EmailChanged)
                    .padding(spacing::XS),
            )
            .push(
                text_input("Message", &self.message)
                    .on_input(Message::MessageChanged)
                    .padding(spacing::XS),
            )
            .push(
                button(Text::new("Send message").size(typography::BODY))
                    .on_press(Message::Submit)
                    .padding([spacing::XS, spacing::LG])
                    .style(styles::button::primary),
            );

        let content = Row::new()
            .spacing(spacing::XL)
            .push(Container::new(channels).width(Length::FillPortion(1)))
            .push(Container::new(form).width(Length::FillPortion(2)));

        Container::new(content)
            .width(Length::Fixed(sizing::CONTENT_WIDTH))
            .padding(spacing::LG)
            .style(|theme: &Theme| styles::container::card(theme))
            .align_x(Horizontal::Center)
            .into()
    }
}

/// Cheap plausibility check; real validation belongs to whatever backend
/// eventually receives the form.
fn is_plausible_email(value: &str) -> bool {
    let trimmed = value.trim();
    match trimmed.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_state() -> State {
        let mut state = State::new();
        state.update(Message::NameChanged("Ada".to_string()));
        state.update(Message::EmailChanged("ada@example.com".to_string()));
        state.update(Message::MessageChanged("Hello!".to_string()));
        state
    }

    #[test]
    fn valid_submission_clears_the_form() {
        let mut state = filled_state();
        let event = state.update(Message::Submit);
        assert!(matches!(event, Event::Submitted));
        assert!(state.name.is_empty());
        assert!(state.email.is_empty());
        assert!(state.message.is_empty());
    }

    #[test]
    fn missing_name_is_rejected() {
        let mut state = filled_state();
        state.update(Message::NameChanged("   ".to_string()));
        let event = state.update(Message::Submit);
        assert!(matches!(event, Event::Invalid(_)));
    }

    #[test]
    fn bad_email_is_rejected_and_fields_are_kept() {
        let mut state = filled_state();
        state.update(Message::EmailChanged("not-an-email".to_string()));
        let event = state.update(Message::Submit);
        assert!(matches!(event, Event::Invalid(_)));
        assert_eq!(state.name, "Ada");
    }

    #[test]
    fn empty_message_is_rejected() {
        let mut state = filled_state();
        state.update(Message::MessageChanged(String::new()));
        let event = state.update(Message::Submit);
        assert!(matches!(event, Event::Invalid(_)));
    }

    #[test]
    fn email_plausibility() {
        assert!(is_plausible_email("a@b.co"));
        assert!(is_plausible_email("  padded@example.com "));
        assert!(!is_plausible_email("missing-at.example.com"));
        assert!(!is_plausible_email("@example.com"));
        assert!(!is_plausible_email("user@nodot"));
        assert!(!is_plausible_email("user@.com"));
    }
}
