//! Voice command interpretation
//!
//! Maps one recognized utterance to the commands it fires. Matching is plain
//! substring containment against fixed phrase lists; the utterance is
//! expected to be lowercase (the listener lowercases before dispatch).
//!
//! The four phrase-list categories below are independent checks: each fires
//! when its list matches, in the order given. The greeting, name-address and
//! exit categories form one mutually exclusive chain that is evaluated
//! regardless of the phrase lists, so a single utterance can fire one of the
//! phrase-list commands and one chain command. Only when nothing at all
//! matched does the caller fall back to the "I don't understand" response.

/// Phrases that open the task-creation dialog
const CREATE_TASK_PHRASES: &[&str] = &[
    "make a note",
    "remember this",
    "write this down",
    "create task",
    "create new task",
    "add task",
    "add new task",
];

/// Phrases asking who the assistant is
const IDENTITY_PHRASES: &[&str] = &["who are you", "what is your name", "what's your name"];

/// Phrases asking for usage help
const HELP_PHRASES: &[&str] = &["help", "how it works", "how it work", "how can i use it"];

/// Phrases that open the task-deletion dialog
const REMOVE_TASK_PHRASES: &[&str] = &["remove task", "delete task", "remove note", "delete note"];

/// An action the interpreter resolved from an utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Open the multi-turn task creation dialog
    CreateTask,
    /// Speak the fixed identity response
    Identity,
    /// Speak the fixed help response
    Help,
    /// Open the multi-turn task deletion dialog
    RemoveTask,
    /// Speak the fixed greeting
    Greet,
    /// Acknowledge being addressed by name
    Acknowledge,
    /// Speak a farewell and stop the listening loop
    Quit,
}

fn contains_any(utterance: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|phrase| utterance.contains(phrase))
}

/// Determine which commands an utterance fires, in dispatch order.
///
/// An empty result means no category matched and the caller should give the
/// fallback response. Recognition failure produces an empty utterance, which
/// lands here too - that is a normal outcome, not an error.
pub fn classify(utterance: &str) -> Vec<Command> {
    let mut fired = Vec::new();

    if contains_any(utterance, CREATE_TASK_PHRASES) {
        fired.push(Command::CreateTask);
    }
    if contains_any(utterance, IDENTITY_PHRASES) {
        fired.push(Command::Identity);
    }
    if contains_any(utterance, HELP_PHRASES) {
        fired.push(Command::Help);
    }
    if contains_any(utterance, REMOVE_TASK_PHRASES) {
        fired.push(Command::RemoveTask);
    }

    // Greeting, name-address and exit share one exclusivity chain: at most
    // one of the three fires, even when a phrase list above already matched.
    if utterance.contains("hello") || utterance.contains("hi") {
        fired.push(Command::Greet);
    } else if utterance.contains("hey jimmy") || utterance.contains("jimmy") {
        fired.push(Command::Acknowledge);
    } else if utterance.contains("quit") || utterance.contains("shut down") {
        fired.push(Command::Quit);
    }

    fired
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_task_never_falls_through() {
        // Trailing text must not matter
        assert_eq!(classify("add task"), vec![Command::CreateTask]);
        assert_eq!(
            classify("please add task for tomorrow morning"),
            vec![Command::CreateTask]
        );
        assert_eq!(classify("create new task please"), vec![Command::CreateTask]);
    }

    #[test]
    fn test_each_category_matches_its_phrases() {
        assert_eq!(classify("who are you exactly"), vec![Command::Identity]);
        assert_eq!(classify("can you tell me how it works"), vec![Command::Help]);
        assert_eq!(classify("delete task number two"), vec![Command::RemoveTask]);
        assert_eq!(classify("quit"), vec![Command::Quit]);
        assert_eq!(classify("please shut down now"), vec![Command::Quit]);
    }

    #[test]
    fn test_empty_utterance_matches_nothing() {
        assert!(classify("").is_empty());
        assert!(classify("mumble grumble").is_empty());
    }

    #[test]
    fn test_greeting_chain_is_mutually_exclusive() {
        // "hello" also contains no "jimmy"/"quit"; chain picks greeting only
        assert_eq!(classify("hello"), vec![Command::Greet]);
        // "hey jimmy" would match both address phrases; still a single command
        assert_eq!(classify("hey jimmy"), vec![Command::Acknowledge]);
        // Greeting outranks the rest of the chain
        assert_eq!(classify("hi jimmy"), vec![Command::Greet]);
    }

    #[test]
    fn test_phrase_list_and_chain_both_fire() {
        // "hi" matches the greeting chain independently of the phrase lists
        assert_eq!(
            classify("add task hi priority"),
            vec![Command::CreateTask, Command::Greet]
        );
        assert_eq!(
            classify("jimmy delete task two"),
            vec![Command::RemoveTask, Command::Acknowledge]
        );
    }

    #[test]
    fn test_substring_matching_reaches_inside_words() {
        // "hi" inside "this" - substring containment, no word boundaries
        assert_eq!(classify("this"), vec![Command::Greet]);
        // "help" inside "helpless"
        assert_eq!(classify("feeling helpless"), vec![Command::Help]);
        // "write this down" fires creation AND the greeting ("hi" in "this")
        assert_eq!(
            classify("write this down"),
            vec![Command::CreateTask, Command::Greet]
        );
    }

    #[test]
    fn test_dispatch_order_is_stable() {
        // Multiple phrase lists firing keep the documented priority order
        assert_eq!(
            classify("add task then delete task"),
            vec![Command::CreateTask, Command::RemoveTask]
        );
    }
}
