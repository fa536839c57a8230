use super::*;
use crate::net::types::UserSummary;

fn notification(message: &str, sender: Option<&str>) -> Notification {
    Notification {
        id: "n1".to_owned(),
        message: message.to_owned(),
        sender: sender.map(|name| UserSummary { id: "u2".to_owned(), first_name: name.to_owned(), ..UserSummary::default() }),
        ..Notification::default()
    }
}

#[test]
fn sender_name_leads_message() {
    assert_eq!(notification_text(&notification("liked your post", Some("Ruth"))), "Ruth liked your post");
}

#[test]
fn bare_message_without_sender() {
    assert_eq!(notification_text(&notification("Welcome!", None)), "Welcome!");
}

#[test]
fn empty_notification_has_placeholder() {
    assert_eq!(notification_text(&notification("  ", None)), "New notification");
    assert_eq!(notification_text(&notification("", Some("Ruth"))), "Ruth sent you a notification");
}
