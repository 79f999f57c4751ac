//! "wikipedia <topic>" lookups.

use super::{ActionOutcome, responses};
use crate::dispatcher::{Adapters, DispatchSettings};
use crate::error::Result;
use crate::session::SessionState;
use crate::utterance::{normalize, trim_punctuation};
use jarvis_knowledge::KnowledgeError;
use tracing::{debug, trace};

const TRIGGER_WORD: &str = "wikipedia";

/// Topic left after removing every "wikipedia" from the utterance.
pub(super) fn topic_from(text: &str) -> String {
    trim_punctuation(&normalize(&text.replace(TRIGGER_WORD, ""))).to_owned()
}

pub(super) async fn lookup(
    text: &str,
    state: SessionState,
    adapters: &mut Adapters,
    settings: &DispatchSettings,
) -> Result<ActionOutcome> {
    adapters.output.show(responses::WIKI_SEARCHING);

    let mut topic = topic_from(text);
    if topic.is_empty() {
        adapters.output.speak(responses::WIKI_ASK_TOPIC).await;
        let answer = adapters.listen(settings.listen).await;
        topic = answer.text().map(topic_from).unwrap_or_default();
        if topic.is_empty() {
            adapters.output.speak(responses::WIKI_NO_TOPIC).await;
            return Ok(ActionOutcome::proceed(state));
        }
    }

    trace!(topic = %topic, "knowledge lookup");
    let lookup = adapters
        .knowledge
        .summarize(&topic, settings.max_sentences);
    let result = match tokio::time::timeout(settings.knowledge_timeout, lookup).await {
        Ok(result) => result,
        Err(_) => Err(KnowledgeError::Timeout(format!(
            "no answer within {}s",
            settings.knowledge_timeout.as_secs()
        ))),
    };

    match result {
        Ok(summary) => {
            adapters.output.speak(responses::WIKI_ACCORDING).await;
            adapters.output.show(&summary);
            adapters.output.speak(&summary).await;
        }
        Err(KnowledgeError::Ambiguous { options, .. }) => {
            debug!("ambiguous topic with {} options", options.len());
            let options: Vec<String> = options.into_iter().take(settings.max_options).collect();
            adapters
                .output
                .speak(&responses::wiki_ambiguous(&topic, &options))
                .await;
        }
        Err(KnowledgeError::NotFound(_)) => {
            adapters
                .output
                .speak(&responses::wiki_not_found(&topic))
                .await;
        }
        Err(e) => return Err(e.into()),
    }
    Ok(ActionOutcome::proceed(state))
}
