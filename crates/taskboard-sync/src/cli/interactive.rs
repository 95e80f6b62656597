/*
[INPUT]:  TaskStore bound to the backend and user input via terminal prompts
[OUTPUT]: Task/comment mutations routed through the store, rendered board
[POS]:    CLI interactive flow
[UPDATE]: When adding menu actions or changing form prompts
*/

use anyhow::Result;
use console::style;
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use tracing::{debug, warn};

use crate::cli::render::{comment_item, print_notices, render_board, task_item};
use taskboard_adapter::{TaskApi, TaskStatus};
use taskboard_sync::error::SyncError;
use taskboard_sync::{CommentDraft, ConfirmGate, StatusFilter, TaskDraft, TaskStore};

/// Confirmation gate backed by a yes/no terminal prompt
struct PromptGate<'a> {
    theme: &'a ColorfulTheme,
}

impl ConfirmGate for PromptGate<'_> {
    fn confirm(&self, prompt: &str) -> bool {
        Confirm::with_theme(self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or_else(|err| {
                warn!(error = %err, "confirmation prompt failed, treating as no");
                false
            })
    }
}

pub async fn run_interactive<A: TaskApi>(store: &mut TaskStore<A>) -> Result<()> {
    let theme = ColorfulTheme::default();
    println!("{}", style("Task Manager").bold().cyan());
    println!("{}", style("Your tasks, beautifully managed").dim());

    println!("{}", style("Loading tasks...").dim());
    let loaded = store.load_tasks().await;
    report(store, loaded);
    render_board(store);

    loop {
        let actions = [
            "Show tasks",
            "Filter by status",
            "Add task",
            "Edit task",
            "Delete task",
            "Toggle comment form",
            "Add comment",
            "Edit comment",
            "Delete comment",
            "Reload",
            "Exit",
        ];
        let selection = Select::with_theme(&theme)
            .with_prompt("Select action")
            .items(&actions)
            .default(0)
            .interact()?;

        match selection {
            0 => render_board(store),
            1 => choose_filter(store, &theme)?,
            2 => add_task(store, &theme).await?,
            3 => edit_task(store, &theme).await?,
            4 => delete_task(store, &theme).await?,
            5 => toggle_comment_form(store, &theme)?,
            6 => add_comment(store, &theme).await?,
            7 => edit_comment(store, &theme).await?,
            8 => delete_comment(store, &theme).await?,
            9 => {
                let reloaded = store.load_tasks().await;
                report(store, reloaded);
                render_board(store);
            }
            _ => return Ok(()),
        }
    }
}

/// Print pending notices. Errors that produced no notice are printed
/// directly so nothing goes unreported.
fn report<A: TaskApi, T>(store: &mut TaskStore<A>, result: Result<T, SyncError>) -> Option<T> {
    let notices = store.take_notices();
    print_notices(&notices);
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            debug!(error = ?err, "operation failed");
            if notices.is_empty() {
                println!("{}", style(format!("✘ {err}")).red());
            }
            None
        }
    }
}

fn choose_filter<A: TaskApi>(store: &mut TaskStore<A>, theme: &ColorfulTheme) -> Result<()> {
    let counts = store.counts();
    let items: Vec<String> = StatusFilter::ALL
        .iter()
        .map(|filter| format!("{} ({})", filter.label(), counts.get(*filter)))
        .collect();
    let current = StatusFilter::ALL
        .iter()
        .position(|filter| *filter == store.filter())
        .unwrap_or(0);
    let selection = Select::with_theme(theme)
        .with_prompt("Show")
        .items(&items)
        .default(current)
        .interact()?;

    store.set_filter(StatusFilter::ALL[selection]);
    render_board(store);
    Ok(())
}

fn select_task<A: TaskApi>(
    store: &TaskStore<A>,
    theme: &ColorfulTheme,
    prompt: &str,
) -> Result<Option<String>> {
    let tasks = store.visible_tasks();
    if tasks.is_empty() {
        println!("{}", style("No tasks found.").yellow());
        return Ok(None);
    }

    let items: Vec<String> = tasks.iter().map(|task| task_item(task)).collect();
    let selection = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()?;

    Ok(Some(tasks[selection].id.clone()))
}

fn select_comment<A: TaskApi>(
    store: &TaskStore<A>,
    theme: &ColorfulTheme,
    task_id: &str,
) -> Result<Option<String>> {
    let comments = store.comments_for(task_id).unwrap_or_default();
    if comments.is_empty() {
        println!("{}", style("No comments yet").yellow());
        return Ok(None);
    }

    let items: Vec<String> = comments.iter().map(comment_item).collect();
    let selection = Select::with_theme(theme)
        .with_prompt("Comment")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(Some(comments[selection].id.clone()))
}

fn prompt_task_draft(theme: &ColorfulTheme, initial: &TaskDraft) -> Result<TaskDraft> {
    let title: String = Input::with_theme(theme)
        .with_prompt("Title")
        .with_initial_text(initial.title.clone())
        .allow_empty(true)
        .interact_text()?;

    let description: String = Input::with_theme(theme)
        .with_prompt("Description")
        .with_initial_text(initial.description.clone())
        .allow_empty(true)
        .interact_text()?;

    let labels: Vec<&str> = TaskStatus::ALL.iter().map(TaskStatus::label).collect();
    let current = TaskStatus::ALL
        .iter()
        .position(|status| *status == initial.status)
        .unwrap_or(0);
    let status_index = Select::with_theme(theme)
        .with_prompt("Status")
        .items(&labels)
        .default(current)
        .interact()?;

    Ok(TaskDraft {
        title,
        description,
        status: TaskStatus::ALL[status_index],
    })
}

async fn add_task<A: TaskApi>(store: &mut TaskStore<A>, theme: &ColorfulTheme) -> Result<()> {
    println!("{}", style("New Task").bold());
    store.cancel_task_edit();
    let draft = prompt_task_draft(theme, &TaskDraft::default())?;
    let result = store.submit_task_draft(draft).await;
    if report(store, result).is_some() {
        render_board(store);
    }
    Ok(())
}

async fn edit_task<A: TaskApi>(store: &mut TaskStore<A>, theme: &ColorfulTheme) -> Result<()> {
    let Some(task_id) = select_task(store, theme, "Task to edit")? else {
        return Ok(());
    };
    let started = store.start_task_edit(&task_id).cloned();
    let Some(initial) = report(store, started) else {
        return Ok(());
    };

    println!("{}", style("Edit Task").bold());
    let draft = prompt_task_draft(theme, &initial)?;
    let save = Select::with_theme(theme)
        .items(&["Save Changes", "Cancel"])
        .default(0)
        .interact()?;
    if save != 0 {
        store.cancel_task_edit();
        return Ok(());
    }

    let result = store.submit_task_draft(draft).await;
    if report(store, result).is_some() {
        render_board(store);
    }
    Ok(())
}

async fn delete_task<A: TaskApi>(store: &mut TaskStore<A>, theme: &ColorfulTheme) -> Result<()> {
    let Some(task_id) = select_task(store, theme, "Task to delete")? else {
        return Ok(());
    };
    let result = store.delete_task(&task_id, &PromptGate { theme }).await;
    if report(store, result).is_some() {
        render_board(store);
    }
    Ok(())
}

fn toggle_comment_form<A: TaskApi>(store: &mut TaskStore<A>, theme: &ColorfulTheme) -> Result<()> {
    let Some(task_id) = select_task(store, theme, "Task")? else {
        return Ok(());
    };
    let toggled = store.toggle_comment_form(&task_id);
    if report(store, toggled).is_some() {
        render_board(store);
    }
    Ok(())
}

async fn add_comment<A: TaskApi>(store: &mut TaskStore<A>, theme: &ColorfulTheme) -> Result<()> {
    let Some(task_id) = select_task(store, theme, "Task to comment on")? else {
        return Ok(());
    };
    store.cancel_comment_edit();
    if !store.is_comment_form_open(&task_id) {
        let opened = store.toggle_comment_form(&task_id);
        if report(store, opened).is_none() {
            return Ok(());
        }
    }

    let author: String = Input::with_theme(theme)
        .with_prompt("Your name (optional)")
        .allow_empty(true)
        .interact_text()?;
    let content: String = Input::with_theme(theme)
        .with_prompt("Write a comment...")
        .allow_empty(true)
        .interact_text()?;

    let result = store
        .submit_comment_draft(&task_id, CommentDraft { content, author })
        .await;
    if report(store, result).is_some() {
        render_board(store);
    }
    Ok(())
}

async fn edit_comment<A: TaskApi>(store: &mut TaskStore<A>, theme: &ColorfulTheme) -> Result<()> {
    let Some(task_id) = select_task(store, theme, "Task")? else {
        return Ok(());
    };
    let Some(comment_id) = select_comment(store, theme, &task_id)? else {
        return Ok(());
    };
    let started = store.start_comment_edit(&comment_id, &task_id).cloned();
    let Some(initial) = report(store, started) else {
        return Ok(());
    };

    println!(
        "{} {}",
        style("Editing comment by").dim(),
        style(&initial.author).bold()
    );
    let content: String = Input::with_theme(theme)
        .with_prompt("Comment")
        .with_initial_text(initial.content.clone())
        .allow_empty(true)
        .interact_text()?;
    let save = Select::with_theme(theme)
        .items(&["Update", "Cancel"])
        .default(0)
        .interact()?;
    if save != 0 {
        store.cancel_comment_edit();
        return Ok(());
    }

    let draft = CommentDraft {
        content,
        ..initial
    };
    let result = store.submit_comment_draft(&task_id, draft).await;
    if report(store, result).is_some() {
        render_board(store);
    }
    Ok(())
}

async fn delete_comment<A: TaskApi>(
    store: &mut TaskStore<A>,
    theme: &ColorfulTheme,
) -> Result<()> {
    let Some(task_id) = select_task(store, theme, "Task")? else {
        return Ok(());
    };
    let Some(comment_id) = select_comment(store, theme, &task_id)? else {
        return Ok(());
    };
    let result = store
        .delete_comment(&comment_id, &task_id, &PromptGate { theme })
        .await;
    if report(store, result).is_some() {
        render_board(store);
    }
    Ok(())
}
