//! Conversation normalization.
//!
//! The completion API rejects conversations where two consecutive turns come
//! from the same party. [`normalize`] collapses every run of same-party
//! messages to the first message of the run. Dropped messages are discarded,
//! not merged.

use super::ChatMessage;

/// Collapse consecutive same-party messages, keeping the earliest of each run.
///
/// The first message is always kept, whatever its role. Every later message
/// is compared with the last *kept* message, so a run of any length reduces
/// to its first member. The output is an order-preserving subsequence of the
/// input.
pub fn normalize(messages: Vec<ChatMessage>) -> Vec<ChatMessage> {
    let mut fixed: Vec<ChatMessage> = Vec::with_capacity(messages.len());
    for msg in messages {
        if let Some(prev) = fixed.last()
            && prev.same_party(&msg)
        {
            continue;
        }
        fixed.push(msg);
    }
    fixed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Role;

    fn roles(messages: &[ChatMessage]) -> Vec<Role> {
        messages.iter().map(|m| m.role).collect()
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(normalize(Vec::new()).is_empty());
    }

    #[test]
    fn collapses_runs_to_first_member() {
        let input = vec![
            ChatMessage::system("sys"),
            ChatMessage::user("hi"),
            ChatMessage::user("again"),
            ChatMessage::assistant("ans"),
            ChatMessage::assistant("more"),
            ChatMessage::user("q"),
        ];
        let output = normalize(input);
        assert_eq!(
            output,
            vec![
                ChatMessage::system("sys"),
                ChatMessage::user("hi"),
                ChatMessage::assistant("ans"),
                ChatMessage::user("q"),
            ]
        );
    }

    #[test]
    fn user_and_tool_share_a_party() {
        let output = normalize(vec![
            ChatMessage::user("question"),
            ChatMessage::tool("result"),
            ChatMessage::assistant("answer"),
        ]);
        assert_eq!(roles(&output), vec![Role::User, Role::Assistant]);
        assert_eq!(output[0].content, "question");
    }

    #[test]
    fn long_run_keeps_earliest() {
        let output = normalize(vec![
            ChatMessage::assistant("a1"),
            ChatMessage::assistant("a2"),
            ChatMessage::assistant("a3"),
            ChatMessage::user("u1"),
        ]);
        assert_eq!(
            output,
            vec![ChatMessage::assistant("a1"), ChatMessage::user("u1")]
        );
    }

    #[test]
    fn first_message_is_anchored_whatever_its_role() {
        let output = normalize(vec![ChatMessage::tool("t"), ChatMessage::user("u")]);
        assert_eq!(output, vec![ChatMessage::tool("t")]);
    }

    #[test]
    fn system_messages_are_never_collapsed() {
        let input = vec![
            ChatMessage::system("s1"),
            ChatMessage::system("s2"),
            ChatMessage::user("u"),
            ChatMessage::system("s3"),
            ChatMessage::user("u2"),
        ];
        assert_eq!(normalize(input.clone()), input);
    }

    #[test]
    fn alternating_input_is_unchanged() {
        let input = vec![
            ChatMessage::system("s"),
            ChatMessage::user("u1"),
            ChatMessage::assistant("a1"),
            ChatMessage::tool("t1"),
            ChatMessage::assistant("a2"),
            ChatMessage::user("u2"),
        ];
        assert_eq!(normalize(input.clone()), input);
    }

    #[test]
    fn output_alternates_and_preserves_order() {
        let input = vec![
            ChatMessage::user("0"),
            ChatMessage::tool("1"),
            ChatMessage::assistant("2"),
            ChatMessage::system("3"),
            ChatMessage::assistant("4"),
            ChatMessage::assistant("5"),
            ChatMessage::user("6"),
            ChatMessage::user("7"),
            ChatMessage::tool("8"),
            ChatMessage::assistant("9"),
        ];
        let output = normalize(input.clone());

        assert_eq!(output.first(), input.first());
        for pair in output.windows(2) {
            assert!(
                !pair[0].same_party(&pair[1]),
                "adjacent same-party messages: {pair:?}"
            );
        }

        // Subsequence check: each output element appears in the input after
        // the previous one.
        let mut cursor = input.iter();
        for kept in &output {
            assert!(cursor.any(|m| m == kept), "{kept:?} out of order");
        }
    }
}
