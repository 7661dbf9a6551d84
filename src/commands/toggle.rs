use crate::{
    libs::{messages::Message, view::View},
    msg_error, msg_success, msg_warning,
    storage::tasks::Tasks,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ToggleArgs {
    /// Task ID
    #[arg(required = true)]
    id: i64,
}

pub fn cmd(args: ToggleArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;

    match tasks.toggle(args.id) {
        Ok(Some(task)) => {
            if task.completed {
                msg_success!(Message::TaskCompleted(task.text));
            } else {
                msg_success!(Message::TaskReactivated(task.text));
            }
            View::stats(tasks.active_count());
        }
        Ok(None) => msg_error!(Message::TaskNotFoundWithId(args.id)),
        Err(e) => {
            // The flip happened in memory; only the persist step failed.
            msg_warning!(Message::SlotWriteFailed(e.to_string()));
            View::stats(tasks.active_count());
        }
    }

    Ok(())
}
