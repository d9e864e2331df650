use serde::{ Deserialize, Serialize };

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: ChatRole::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: ChatRole::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: ChatRole::Assistant, content: content.into() }
    }
}

/// Who spoke a past turn. Clients send `"user"` for their own messages;
/// every other tag is treated as the bot.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum TurnKind {
    User,
    Bot(String),
}

impl From<String> for TurnKind {
    fn from(tag: String) -> Self {
        if tag == "user" { TurnKind::User } else { TurnKind::Bot(tag) }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ConversationTurn {
    #[serde(rename = "type")]
    pub kind: TurnKind,
    pub content: String,
}

impl From<ConversationTurn> for ChatMessage {
    fn from(turn: ConversationTurn) -> Self {
        match turn.kind {
            TurnKind::User => ChatMessage::user(turn.content),
            TurnKind::Bot(_) => ChatMessage::assistant(turn.content),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AskRequest {
    pub message: String,
    pub history: Vec<ConversationTurn>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AskResponse {
    pub response: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
