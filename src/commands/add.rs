use crate::{
    libs::{messages::Message, task::Task, view::View},
    msg_error, msg_success, msg_warning,
    storage::tasks::Tasks,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task text
    #[arg(required = true)]
    text: String,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let text = args.text.trim();

    // Non-empty text is the only validation the task list performs.
    if text.is_empty() {
        msg_error!(Message::EmptyTaskText);
        return Ok(());
    }

    let mut tasks = Tasks::new()?;
    if let Err(e) = tasks.insert(Task::new(text)) {
        msg_warning!(Message::SlotWriteFailed(e.to_string()));
    }

    msg_success!(Message::TaskAdded(text.to_string()));
    View::stats(tasks.active_count());
    Ok(())
}
