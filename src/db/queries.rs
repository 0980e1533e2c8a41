//! SQL statements for karya_tn.db.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial purge statements

/// Table holding individual chat messages.
pub const MESSAGES_TABLE: &str = "messages";

/// Table holding chat sessions.
pub const CONVERSATIONS_TABLE: &str = "conversations";

/// Remove every message. Runs first, messages reference conversations.
pub const DELETE_ALL_MESSAGES: &str = "DELETE FROM messages";

/// Remove every conversation.
pub const DELETE_ALL_CONVERSATIONS: &str = "DELETE FROM conversations";
