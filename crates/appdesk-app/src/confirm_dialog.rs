//! Confirm dialog state.
//!
//! Data model for confirmation dialogs. The rendering widget
//! lives in appdesk-tui/src/widgets/confirm_dialog.rs.

use crate::message::Message;

#[derive(Debug, Clone)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    /// First option is the confirming one
    pub options: Vec<(String, Message)>,
}

impl ConfirmDialogState {
    /// Create a generic confirmation dialog
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        options: Vec<(&str, Message)>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            options: options
                .into_iter()
                .map(|(label, msg)| (label.to_string(), msg))
                .collect(),
        }
    }

    /// Delete confirmation for one record
    pub fn delete_application(id: i64, name: &str) -> Self {
        Self::new(
            "Delete application?",
            format!("\"{}\" (#{}) will be removed permanently.", name, id),
            vec![
                ("Delete", Message::ConfirmDelete { id }),
                ("Cancel", Message::CancelDialog),
            ],
        )
    }

    /// Message sent when the dialog is accepted
    pub fn confirm_message(&self) -> Option<Message> {
        self.options.first().map(|(_, msg)| msg.clone())
    }
}
