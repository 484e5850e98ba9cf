use tracing::warn;

use crate::base::{PACKAGE_SEPARATOR, PATH_SEPARATOR};
use crate::schema::MessageDecl;

/// Generator directive attached to a message through the pipe annotation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Directive {
    topic: String,
}

impl Directive {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
        }
    }

    /// The topic the artifact is generated for; also its file stem.
    pub fn topic(&self) -> &str {
        &self.topic
    }
}

/// Extract the generator directive of `message`.
///
/// Returns `None` when the message carries no options, no pipe annotation,
/// or a topic name that is unset, empty, or unusable as a file name.
pub fn extract_directive(message: &MessageDecl) -> Option<Directive> {
    let topic = message
        .options
        .as_ref()?
        .pipe
        .as_ref()?
        .pubsub_topic_name
        .as_deref()?;
    if topic.is_empty() {
        return None;
    }
    if !is_valid_topic(topic) {
        warn!(
            "Ignoring malformed topic name {:?} on message {}",
            topic, message.name
        );
        return None;
    }
    Some(Directive::new(topic))
}

fn is_valid_topic(topic: &str) -> bool {
    let relative = topic.chars().all(|c| c != PATH_SEPARATOR && c != '\\');
    let dots_only = topic.chars().all(|c| c == PACKAGE_SEPARATOR);
    relative && !dots_only && !topic.chars().any(char::is_whitespace)
}
