//! Interactive console session
//!
//! Reads one command per line, executes it and writes the framed response.
//! The session ends on `bye` or end of input.

use std::io::{self, BufRead, Write};

use application::{
    CommandParser, TaskService,
    ports::TaskListPort,
    services::response_formatter::{format_error, format_welcome},
};
use tracing::{debug, warn};

/// Outcome of a finished session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed `bye`
    Exit,
    /// Input ran out before `bye`
    EndOfInput,
}

/// Run a session until `bye` or end of input
///
/// Blank lines are skipped. Command errors, including lines that are not
/// valid UTF-8, are reported to `output` and the session continues; only I/O
/// failures on the console end it early.
pub fn run_session<L, R, W>(
    service: &mut TaskService<L>,
    parser: &CommandParser,
    assistant_name: &str,
    mut input: R,
    mut output: W,
) -> io::Result<SessionEnd>
where
    L: TaskListPort,
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", format_welcome(assistant_name))?;
    output.flush()?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            debug!("Input closed");
            return Ok(SessionEnd::EndOfInput);
        }
        // Undecodable bytes become U+FFFD and fail as an unknown command
        let line = String::from_utf8_lossy(&buf);
        if line.trim().is_empty() {
            continue;
        }

        match service.handle_line(parser, &line) {
            Ok(result) => {
                writeln!(output, "{}", result.response)?;
                if result.exit {
                    output.flush()?;
                    return Ok(SessionEnd::Exit);
                }
            },
            Err(e) => {
                if !e.is_user_error() {
                    warn!(error = %e, "Command failed");
                }
                writeln!(output, "{}", format_error(&e.to_string()))?;
            },
        }
        output.flush()?;
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use chrono::NaiveDate;
    use infrastructure::InMemoryTaskList;

    use super::*;

    fn transcript(input: &str) -> (SessionEnd, String, TaskService<InMemoryTaskList>) {
        transcript_bytes(input.as_bytes())
    }

    fn transcript_bytes(input: &[u8]) -> (SessionEnd, String, TaskService<InMemoryTaskList>) {
        let parser =
            CommandParser::with_reference_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let mut service = TaskService::new(InMemoryTaskList::new());
        let mut output = Vec::new();
        let end = run_session(
            &mut service,
            &parser,
            "Ficin",
            Cursor::new(input.to_vec()),
            &mut output,
        )
        .unwrap();
        (end, String::from_utf8(output).unwrap(), service)
    }

    #[test]
    fn greets_and_says_goodbye() {
        let (end, out, _) = transcript("bye\n");
        assert_eq!(end, SessionEnd::Exit);
        assert!(out.contains(" Hello! I'm Ficin!"));
        assert!(out.contains(" What can I do for you?"));
        assert!(out.contains(" Bye. Hope to see you again soon!"));
    }

    #[test]
    fn stops_reading_after_bye() {
        let (_, out, service) = transcript("bye\ntodo never\n");
        assert!(!out.contains("never"));
        assert!(service.tasks().is_empty());
    }

    #[test]
    fn end_of_input_ends_session() {
        let (end, _, service) = transcript("todo read book\n");
        assert_eq!(end, SessionEnd::EndOfInput);
        assert_eq!(service.tasks().len(), 1);
    }

    #[test]
    fn errors_are_reported_and_session_continues() {
        let (end, out, service) = transcript("blah\ntodo\nmark 3\ntodo ok\nbye\n");
        assert_eq!(end, SessionEnd::Exit);
        assert!(out.contains(" OOPS!!! I'm sorry, but I don't know what that means :-("));
        assert!(out.contains(" OOPS!!! Description cannot be empty."));
        assert!(out.contains(" OOPS!!! Task number 3 does not exist."));
        assert_eq!(service.tasks().len(), 1);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let (_, out, _) = transcript("\n   \nlist\n");
        assert!(!out.contains("OOPS"));
        assert!(out.contains(" Here are the tasks in your list:"));
    }

    #[test]
    fn invalid_utf8_line_is_reported_and_session_continues() {
        let (end, out, service) = transcript_bytes(b"todo a\n\xff\xfe\ntodo b\nbye\n");
        assert_eq!(end, SessionEnd::Exit);
        assert!(out.contains(" OOPS!!! I'm sorry, but I don't know what that means :-("));
        assert_eq!(service.tasks().len(), 2);
    }

    #[test]
    fn full_transcript() {
        let (_, out, _) = transcript(
            "todo borrow book\ndeadline return book /by 2024/01/15 1830\nmark 1\nlist\n",
        );
        assert!(out.contains(" Got it. I've added this task:\n   [T][ ] borrow book"));
        assert!(out.contains(" Nice! I've marked this task as done:\n   [T][X] borrow book"));
        assert!(out.contains(" 2.[D][ ] return book (by: Jan 15 2024 18:30)"));
    }
}
