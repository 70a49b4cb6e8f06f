pub mod canvas;
pub mod file_dialog;
pub mod message_dialog;
pub mod notifications;
pub mod reset_prompt;
pub mod status_bar;
