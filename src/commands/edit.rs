use crate::{
    libs::messages::Message,
    msg_error, msg_info, msg_print, msg_success, msg_warning,
    storage::tasks::Tasks,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task ID
    #[arg(required = true)]
    id: i64,
    /// New task text; prompts interactively when omitted
    text: Option<String>,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;

    let current = match tasks.get_by_id(args.id) {
        Some(task) => task.clone(),
        None => {
            msg_error!(Message::TaskNotFoundWithId(args.id));
            return Ok(());
        }
    };

    let text = match args.text {
        Some(text) => text,
        None => {
            msg_print!(Message::EditingTask(current.text.clone()), true);
            Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTaskText.to_string())
                .default(current.text.clone())
                .interact_text()?
        }
    };

    // An empty replacement keeps the original text, as does an unchanged one.
    let text = text.trim();
    if text.is_empty() || text == current.text {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    match tasks.update_text(args.id, text) {
        Ok(_) => msg_success!(Message::TaskUpdated(text.to_string())),
        Err(e) => msg_warning!(Message::SlotWriteFailed(e.to_string())),
    }

    Ok(())
}
