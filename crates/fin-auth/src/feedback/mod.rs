pub(crate) mod status_messages;

pub use status_messages::StatusMessages;
