/// Longest context used for n-gram lookups.
pub const MAX_CONTEXT_LEN: usize = 4;

/// Input split into the words before the cursor and the word being typed.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ParsedInput {
    /// Up to [`MAX_CONTEXT_LEN`] words, oldest first.
    pub context: Vec<String>,
    /// Partial trailing word; empty when the input ends with a space.
    pub prefix: String,
}

/// Split raw input into its trailing context and the prefix being typed.
pub fn parse_input(input: &str) -> ParsedInput {
    let mut tokens: Vec<&str> = input.split(' ').collect();

    let mut prefix = String::new();
    if let Some(last) = tokens.last()
        && !last.is_empty()
    {
        prefix = last.to_string();
        tokens.pop();
    }

    let mut context: Vec<String> = tokens
        .iter()
        .rev()
        .filter(|t| !t.is_empty())
        .take(MAX_CONTEXT_LEN)
        .map(|t| t.to_string())
        .collect();
    context.reverse();

    ParsedInput { context, prefix }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ctx(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn trailing_space_means_empty_prefix() {
        let parsed = parse_input("the cat ");
        assert_eq!(parsed.context, ctx(&["the", "cat"]));
        assert_eq!(parsed.prefix, "");
    }

    #[test]
    fn last_token_becomes_prefix() {
        let parsed = parse_input("the cat sa");
        assert_eq!(parsed.context, ctx(&["the", "cat"]));
        assert_eq!(parsed.prefix, "sa");
    }

    #[test]
    fn keeps_last_four_words_and_skips_runs_of_spaces() {
        let parsed = parse_input("one  two three   four five six x");
        assert_eq!(parsed.context, ctx(&["three", "four", "five", "six"]));
        assert_eq!(parsed.prefix, "x");
    }

    #[test]
    fn empty_and_blank_input() {
        assert_eq!(parse_input(""), ParsedInput::default());
        assert_eq!(parse_input("    "), ParsedInput::default());
    }

    #[test]
    fn single_word_is_prefix_only() {
        let parsed = parse_input("ca");
        assert!(parsed.context.is_empty());
        assert_eq!(parsed.prefix, "ca");
    }

    proptest! {
        #[test]
        fn parsed_parts_never_hold_spaces(input in "[ a-c]{0,30}") {
            let parsed = parse_input(&input);
            prop_assert!(parsed.context.len() <= MAX_CONTEXT_LEN);
            prop_assert!(parsed.context.iter().all(|w| !w.is_empty() && !w.contains(' ')));
            prop_assert!(!parsed.prefix.contains(' '));
            if input.ends_with(' ') || input.is_empty() {
                prop_assert!(parsed.prefix.is_empty());
            }
        }
    }
}
