//! Terminal rendering of the board.
//!
//! # Responsibility
//! - Draw header, task sections, empty state and stats bar.
//! - Assign display ordinals and map them back to task IDs.
//!
//! # Invariants
//! - Ordinals are assigned top to bottom across both sections on every
//!   draw, so they always match what is on screen.

use chrono::Utc;
use colored::Colorize;
use papertodo_core::{heading_date, short_date, BoardSummary, BoardView, Task, TaskId};

const RULE: &str = "──────────────────────────────";
const EMPTY_TEXT: &str = "Your notebook awaits";
const EMPTY_SUBTEXT: &str = "Start by writing your first task above";

/// Draws the full board and returns the ordinal-to-ID map for this frame.
pub fn print_board(tasks: &[Task]) -> Vec<TaskId> {
    let view = BoardView::derive(tasks);
    let mut ordinals = Vec::with_capacity(tasks.len());

    println!();
    println!("{}", RULE.dimmed());
    println!("{}", "Daily Tasks".bold());
    println!("{}", heading_date(Utc::now()).dimmed());
    println!("{}", RULE.dimmed());

    if view.is_empty() {
        println!();
        println!("  {}", EMPTY_TEXT.italic());
        println!("  {}", EMPTY_SUBTEXT.dimmed());
        println!();
        return ordinals;
    }

    if !view.active.is_empty() {
        println!();
        println!("{}", "To Do".bold());
        for task in &view.active {
            ordinals.push(task.id);
            println!("{}", task_row(ordinals.len(), task));
        }
    }

    if !view.completed.is_empty() {
        println!();
        println!("{}", "Done".bold().green());
        for task in &view.completed {
            ordinals.push(task.id);
            println!("{}", task_row(ordinals.len(), task).dimmed());
        }
    }

    println!();
    println!("{}", stats_line(view.summary()).dimmed());

    ordinals
}

/// Prints command usage.
pub fn print_help() {
    println!("  <text>      add a task");
    println!("  add <text>  add a task whose text starts with a command word");
    println!("  done <n>    toggle the task numbered <n>");
    println!("  rm <n>      delete the task numbered <n>");
    println!("  list        redraw the board");
    println!("  help        show this message");
    println!("  quit        exit");
}

fn task_row(ordinal: usize, task: &Task) -> String {
    let checkbox = if task.completed { "[x]" } else { "[ ]" };
    format!(
        "  {checkbox} {ordinal:>2}. {}  ({})",
        task.text,
        short_date(task.created_at)
    )
}

fn stats_line(summary: BoardSummary) -> String {
    format!(
        "{} remaining / {} completed",
        summary.remaining, summary.completed
    )
}

#[cfg(test)]
mod tests {
    use super::{stats_line, task_row};
    use chrono::{TimeZone, Utc};
    use papertodo_core::{BoardSummary, Task};

    fn fixed_task(text: &str, completed: bool) -> Task {
        let mut task = Task::new(text);
        task.completed = completed;
        task.created_at = Utc.with_ymd_and_hms(2026, 8, 6, 8, 0, 0).unwrap();
        task
    }

    #[test]
    fn task_row_shows_checkbox_ordinal_text_and_date() {
        let row = task_row(1, &fixed_task("Buy milk", false));
        assert_eq!(row, "  [ ]  1. Buy milk  (Aug 6)");
    }

    #[test]
    fn completed_task_row_is_checked() {
        let row = task_row(12, &fixed_task("Walk dog", true));
        assert_eq!(row, "  [x] 12. Walk dog  (Aug 6)");
    }

    #[test]
    fn stats_line_reports_both_counters() {
        let line = stats_line(BoardSummary {
            remaining: 2,
            completed: 1,
        });
        assert_eq!(line, "2 remaining / 1 completed");
    }
}
