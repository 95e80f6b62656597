/*
[INPUT]:  TaskStore snapshot and drained notices
[OUTPUT]: Styled terminal output (filter bar, task cards, inline comments)
[POS]:    CLI presentation layer
[UPDATE]: When task or comment fields shown to the user change
*/

use chrono::{DateTime, Local, Utc};
use console::{Style, style};
use taskboard_adapter::{Comment, Task, TaskApi, TaskStatus};
use taskboard_sync::{Notice, NoticeLevel, StatusFilter, TaskStore};

pub const EMPTY_STATE: &str = "No tasks yet. Add one above!";
const NO_COMMENTS: &str = "No comments yet";

pub fn print_notices(notices: &[Notice]) {
    for notice in notices {
        let line = match notice.level {
            NoticeLevel::Success => style(format!("✔ {notice}")).green(),
            NoticeLevel::Warning => style(format!("! {notice}")).yellow(),
            NoticeLevel::Error => style(format!("✘ {notice}")).red(),
        };
        println!("{line}");
    }
}

/// "All (3)  Pending (1)  In Progress (1)  Completed (1)", active filter highlighted
pub fn filter_bar<A: TaskApi>(store: &TaskStore<A>) -> String {
    let counts = store.counts();
    StatusFilter::ALL
        .iter()
        .map(|filter| {
            let text = format!("{} ({})", filter.label(), counts.get(*filter));
            if *filter == store.filter() {
                style(text).bold().underlined().to_string()
            } else {
                style(text).dim().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

pub fn render_board<A: TaskApi>(store: &TaskStore<A>) {
    println!();
    println!("{}", filter_bar(store));
    println!();

    let visible = store.visible_tasks();
    if visible.is_empty() {
        println!("{}", style(EMPTY_STATE).dim());
        return;
    }

    for task in visible {
        render_task(store, task);
    }
}

fn render_task<A: TaskApi>(store: &TaskStore<A>, task: &Task) {
    println!(
        "{}  {}  {}",
        style(&task.title).bold(),
        status_badge(task.status),
        style(local_date(&task.created_at)).dim()
    );
    if !task.description.is_empty() {
        println!("    {}", task.description);
    }

    match store.comments_for(&task.id) {
        Some([]) | None => println!("    {}", style(NO_COMMENTS).dim()),
        Some(comments) => {
            for comment in comments {
                render_comment(store, comment);
            }
        }
    }

    if store.is_comment_form_open(&task.id) {
        let label = if store.comment_edit().is_idle() {
            "comment form open"
        } else {
            "editing comment"
        };
        println!("    {}", style(format!("[{label}]")).cyan());
    }
    println!();
}

fn render_comment<A: TaskApi>(store: &TaskStore<A>, comment: &Comment) {
    let marker = if store.comment_edit().editing_id() == Some(comment.id.as_str()) {
        style("*").cyan().to_string()
    } else {
        " ".to_string()
    };
    println!(
        "  {marker} {} {}",
        style(&comment.author).bold(),
        style(local_date(&comment.created_at)).dim()
    );
    println!("      {}", comment.content);
}

fn status_badge(status: TaskStatus) -> String {
    let badge = Style::new();
    let badge = match status {
        TaskStatus::Pending => badge.yellow(),
        TaskStatus::InProgress => badge.blue(),
        TaskStatus::Completed => badge.green(),
    };
    badge.apply_to(format!("[{}]", status.label().to_lowercase())).to_string()
}

fn local_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%Y-%m-%d").to_string()
}

/// One-line summary used in selection menus
pub fn task_item(task: &Task) -> String {
    format!("{} [{}]", task.title, task.status.label())
}

pub fn comment_item(comment: &Comment) -> String {
    let mut preview: String = comment.content.chars().take(48).collect();
    if comment.content.chars().count() > 48 {
        preview.push('…');
    }
    format!("{}: {}", comment.author, preview)
}
