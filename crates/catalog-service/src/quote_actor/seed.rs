//! The quotes every fresh quote store starts with.

use crate::model::Quote;

/// Eight programming quotes with ids `1..=8`, in id order.
pub fn default_quotes() -> Vec<Quote> {
    vec![
        Quote::new(
            1,
            "Code is like humor. When you have to explain it, it’s bad.",
            "Cory House",
        ),
        Quote::new(
            2,
            "Any fool can write code that a computer can understand. Good programmers write code that humans can understand.",
            "Martin Fowler",
        ),
        Quote::new(
            3,
            "It’s not a bug – it’s an undocumented feature.",
            "Anonymous",
        ),
        Quote::new(4, "Talk is cheap. Show me the code.", "Linus Torvalds"),
        Quote::new(
            5,
            "First, solve the problem. Then, write the code.",
            "John Johnson",
        ),
        Quote::new(6, "Simplicity is the soul of efficiency.", "Austin Freeman"),
        Quote::new(
            7,
            "Before software can be reusable, it first has to be usable.",
            "Ralph Johnson",
        ),
        Quote::new(8, "Make it work, make it right, make it fast.", "Kent Beck"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_framework::validation::Validate;
    use crate::model::QuoteInput;

    #[test]
    fn test_seed_quotes_satisfy_constraints() {
        for quote in default_quotes() {
            let input = QuoteInput {
                content: quote.content,
                author: quote.author,
            };
            assert!(input.validate().is_ok(), "seed quote {:?} is invalid", input);
        }
    }

    #[test]
    fn test_seed_ids_are_distinct_and_ordered() {
        let ids: Vec<u32> = default_quotes().iter().map(|q| q.id.0).collect();
        assert_eq!(ids, (1..=8).collect::<Vec<u32>>());
    }
}
