use crate::{
    libs::{messages::Message, view::View},
    msg_error, msg_info, msg_success, msg_warning,
    storage::tasks::Tasks,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task ID
    #[arg(required = true)]
    id: i64,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;

    let task = match tasks.get_by_id(args.id) {
        Some(task) => task.clone(),
        None => {
            msg_error!(Message::TaskNotFoundWithId(args.id));
            return Ok(());
        }
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteTask(task.text.clone()).to_string())
        .default(false)
        .interact()?;

    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    match tasks.delete(args.id) {
        Ok(_) => {
            msg_success!(Message::TaskDeleted);
            View::stats(tasks.active_count());
        }
        Err(e) => {
            msg_warning!(Message::SlotWriteFailed(e.to_string()));
            View::stats(tasks.active_count());
        }
    }

    Ok(())
}
