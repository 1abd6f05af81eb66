//! Property-based tests for the command parser
//!
//! These tests use proptest to check parser behaviour across many random
//! input lines.

use application::{CommandParser, parse_date_time};
use chrono::{NaiveDate, NaiveDateTime};
use domain::{CommandKeyword, DomainError, TaskCommand, TaskIndex};
use proptest::prelude::*;

fn parser() -> CommandParser {
    CommandParser::with_reference_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default())
}

/// Descriptions without markers or surrounding whitespace
fn description() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9][a-zA-Z0-9 ,.!?-]{0,30}[a-zA-Z0-9]"
}

fn padding() -> impl Strategy<Value = String> {
    "[ \t]{0,4}"
}

fn valid_instant() -> impl Strategy<Value = NaiveDateTime> {
    (1970i32..2100, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60).prop_map(|(y, m, d, h, min)| {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, min, 0))
            .unwrap_or_default()
    })
}

proptest! {
    #[test]
    fn todo_yields_trimmed_description(
        desc in description(),
        lead in padding(),
        trail in padding(),
    ) {
        let line = format!("{lead}todo {desc}{trail}");
        prop_assert_eq!(
            parser().parse(&line),
            Ok(TaskCommand::AddTodo { description: desc.trim().to_string() })
        );
    }

    #[test]
    fn unknown_first_token_is_unrecognized(word in "[a-zA-Z]{1,10}", rest in "[a-z ]{0,20}") {
        prop_assume!(word.parse::<CommandKeyword>().is_err());
        let line = format!("{word} {rest}");
        prop_assert_eq!(parser().parse(&line), Err(DomainError::UnrecognizedCommand));
    }

    #[test]
    fn index_commands_accept_positive_numbers(n in 1usize..100_000, keyword in prop::sample::select(vec!["mark", "unmark", "delete"])) {
        let index = TaskIndex::new(n).unwrap();
        let expected = match keyword {
            "mark" => TaskCommand::Mark { index },
            "unmark" => TaskCommand::Unmark { index },
            _ => TaskCommand::Delete { index },
        };
        prop_assert_eq!(parser().parse(&format!("{keyword} {n}")), Ok(expected));
    }

    #[test]
    fn index_commands_reject_words(word in "[a-zA-Z]{1,8}") {
        prop_assert_eq!(parser().parse(&format!("mark {word}")), Err(DomainError::InvalidIndex));
    }

    #[test]
    fn formatted_instants_parse_back(instant in valid_instant()) {
        let text = instant.format("%Y/%m/%d %H%M").to_string();
        prop_assert_eq!(parse_date_time(&text), Ok(instant));
    }

    #[test]
    fn deadline_round_trips_through_parser(desc in description(), by in valid_instant()) {
        let line = format!("deadline {desc} /by {}", by.format("%Y/%m/%d %H%M"));
        prop_assert_eq!(
            parser().parse(&line),
            Ok(TaskCommand::AddDeadline { description: desc, by })
        );
    }

    #[test]
    fn event_order_is_enforced(desc in description(), a in valid_instant(), b in valid_instant()) {
        let line = format!(
            "event {desc} /from {} /to {}",
            a.format("%Y/%m/%d %H%M"),
            b.format("%Y/%m/%d %H%M")
        );
        let result = parser().parse(&line);
        if a <= b {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(result, Err(DomainError::InvalidTimeRange));
        }
    }

    #[test]
    fn parsing_is_idempotent(line in "[a-z]{0,8}( [a-z0-9/ ]{0,20})?") {
        let p = parser();
        prop_assert_eq!(p.parse(&line), p.parse(&line));
    }
}
