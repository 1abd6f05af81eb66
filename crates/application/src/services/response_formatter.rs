//! Response message formatting
//!
//! Pure functions turning execution results into the console transcript.
//! Every block is framed by separator lines.

use domain::{Task, TaskIndex};

/// Horizontal rule between responses
pub const SEPARATOR: &str = "____________________________________________________________";

/// Greeting shown when a session starts
#[must_use]
pub fn format_welcome(assistant_name: &str) -> String {
    framed(&[
        format!(" Hello! I'm {assistant_name}!"),
        " What can I do for you?".to_string(),
    ])
}

/// Farewell shown when the session ends
#[must_use]
pub fn format_goodbye() -> String {
    framed(&[" Bye. Hope to see you again soon!".to_string()])
}

/// Confirmation for a newly added task
#[must_use]
pub fn format_task_added(task: &Task, count: usize) -> String {
    framed(&[
        " Got it. I've added this task:".to_string(),
        format!("   {task}"),
        count_line(count),
    ])
}

/// Confirmation for a task marked as done
#[must_use]
pub fn format_task_done(task: &Task) -> String {
    framed(&[
        " Nice! I've marked this task as done:".to_string(),
        format!("   {task}"),
    ])
}

/// Confirmation for a task marked as not done
#[must_use]
pub fn format_task_undone(task: &Task) -> String {
    framed(&[
        " OK, I've marked this task as not done yet:".to_string(),
        format!("   {task}"),
    ])
}

/// Confirmation for a removed task
#[must_use]
pub fn format_task_deleted(task: &Task, count: usize) -> String {
    framed(&[
        " Noted. I've removed this task:".to_string(),
        format!("   {task}"),
        count_line(count),
    ])
}

/// Numbered listing of every task, 1-based
///
/// An empty list shows only the header.
#[must_use]
pub fn format_task_list(tasks: &[Task]) -> String {
    let mut lines = Vec::with_capacity(tasks.len() + 1);
    lines.push(" Here are the tasks in your list:".to_string());
    lines.extend(
        tasks
            .iter()
            .enumerate()
            .map(|(offset, task)| format!(" {}.{task}", TaskIndex::from_zero_based(offset))),
    );
    framed(&lines)
}

/// Error report; the user is prompted again afterwards
#[must_use]
pub fn format_error(message: &str) -> String {
    framed(&[format!(" OOPS!!! {message}")])
}

fn count_line(count: usize) -> String {
    let noun = if count == 1 { "task" } else { "tasks" };
    format!(" Now you have {count} {noun} in the list.")
}

fn framed(lines: &[String]) -> String {
    let mut out = String::from(SEPARATOR);
    for line in lines {
        out.push('\n');
        out.push_str(line);
    }
    out.push('\n');
    out.push_str(SEPARATOR);
    out
}
