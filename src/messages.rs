//! Flattening a conversation into role-tagged messages, and role-based filtering.

use crate::importer::ChatStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Assistant => "Assistant",
        }
    }
}

/// A single rendered-ready message. Built fresh per export request and discarded
/// after rendering; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub text: String,
    pub context: Vec<String>,
}

/// Flatten one conversation into an ordered message sequence.
///
/// A missing or empty conversation yields an empty sequence, not an error.
/// Within each interaction the human turn is emitted before the assistant turn,
/// so the output order always matches the interaction order. Context file paths
/// are attached to user messages only when `include_context` is set.
pub fn extract_messages(store: &ChatStore, key: &str, include_context: bool) -> Vec<Message> {
    let Some(conversation) = store.chat.get(key) else {
        return Vec::new();
    };

    let mut messages = Vec::new();
    for interaction in &conversation.interactions {
        if let Some(human) = &interaction.human_message {
            let context = if include_context {
                human
                    .context_files
                    .iter()
                    .map(|file| file.display_path().to_string())
                    .collect()
            } else {
                Vec::new()
            };
            messages.push(Message {
                role: Role::User,
                text: human.text.clone(),
                context,
            });
        }
        if let Some(assistant) = &interaction.assistant_message {
            messages.push(Message {
                role: Role::Assistant,
                text: assistant.text.clone(),
                context: Vec::new(),
            });
        }
    }
    messages
}

/// Drop user messages unless they are requested. Assistant messages always pass
/// through, and relative order is preserved.
pub fn filter_messages(messages: Vec<Message>, include_user: bool) -> Vec<Message> {
    if include_user {
        return messages;
    }
    messages
        .into_iter()
        .filter(|message| message.role == Role::Assistant)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(json: &str) -> ChatStore {
        serde_json::from_str(json).unwrap()
    }

    const KEY: &str = "Wed, 25 Dec 2024 13:30:45 GMT";

    fn two_interaction_store() -> ChatStore {
        store(&format!(
            r#"{{"chat": {{"{KEY}": {{"interactions": [
                {{"humanMessage": {{"text": "Hi"}}, "assistantMessage": {{"text": "Hello"}}}},
                {{"humanMessage": {{"text": "Bye"}}}}
            ]}}}}}}"#
        ))
    }

    #[test]
    fn flattens_in_interaction_order_human_first() {
        let messages = extract_messages(&two_interaction_store(), KEY, false);
        let flat: Vec<(Role, &str)> = messages
            .iter()
            .map(|m| (m.role, m.text.as_str()))
            .collect();
        assert_eq!(
            flat,
            [
                (Role::User, "Hi"),
                (Role::Assistant, "Hello"),
                (Role::User, "Bye"),
            ]
        );
    }

    #[test]
    fn missing_or_empty_conversation_yields_no_messages() {
        let empty = store(&format!(r#"{{"chat": {{"{KEY}": {{}}}}}}"#));
        assert!(extract_messages(&empty, KEY, true).is_empty());
        assert!(extract_messages(&empty, "no such key", true).is_empty());
    }

    #[test]
    fn context_attached_only_when_requested() {
        let data = store(&format!(
            r#"{{"chat": {{"{KEY}": {{"interactions": [{{
                "humanMessage": {{
                    "text": "Hi",
                    "contextFiles": [{{"uri": {{"path": "/src/app.py"}}}}, {{}}]
                }},
                "assistantMessage": {{"text": "Hello"}}
            }}]}}}}}}"#
        ));

        let with = extract_messages(&data, KEY, true);
        assert_eq!(with[0].context, ["/src/app.py", "path not specified"]);
        assert!(with[1].context.is_empty());

        let without = extract_messages(&data, KEY, false);
        assert!(without[0].context.is_empty());
    }

    #[test]
    fn human_turn_without_context_files_is_not_an_error() {
        let messages = extract_messages(&two_interaction_store(), KEY, true);
        assert_eq!(messages[0].role, Role::User);
        assert!(messages[0].context.is_empty());
    }

    #[test]
    fn filter_keeps_assistants_in_order() {
        let messages = extract_messages(&two_interaction_store(), KEY, false);
        assert_eq!(messages.len(), 3);

        let filtered = filter_messages(messages.clone(), false);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].role, Role::Assistant);
        assert_eq!(filtered[0].text, "Hello");

        assert_eq!(filter_messages(messages.clone(), true), messages);
    }
}
