// SPDX-License-Identifier: MPL-2.0
//! Subscription wiring for window events, keyboard shortcuts, and periodic ticks.

use super::Message;
use crate::config::TOAST_TICK_INTERVAL_MS;
use crate::ui::header;
use iced::{event, keyboard, time, window, Subscription};
use std::time::Duration;

/// Forwards window resizes so the header can switch to its compact layout,
/// and Escape so the compact menu can be closed from the keyboard.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }
        map_event(event)
    })
}

fn map_event(event: iced::Event) -> Option<Message> {
    match event {
        iced::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        iced::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) => Some(Message::Header(header::Message::CloseMenu)),
        _ => None,
    }
}

/// Ticks only while toasts are showing or queued, so an idle site does not
/// wake up.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(TOAST_TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Size;

    #[test]
    fn resize_maps_to_window_message() {
        let size = Size::new(500.0, 400.0);
        let message = map_event(iced::Event::Window(window::Event::Resized(size)));
        assert!(matches!(message, Some(Message::WindowResized(s)) if s == size));
    }

    #[test]
    fn unrelated_window_events_are_ignored() {
        assert!(map_event(iced::Event::Window(window::Event::Focused)).is_none());
    }
}
