use crate::{
    libs::{config::Config, messages::Message, task::TaskFilter, view::View},
    msg_info, msg_print,
    storage::tasks::Tasks,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show only tasks in this state
    #[arg(short, long, value_enum)]
    filter: Option<TaskFilter>,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let filter = match args.filter {
        Some(filter) => filter,
        None => Config::read()?.default_filter(),
    };

    let tasks = Tasks::new()?;
    let visible = tasks.fetch(filter);

    if visible.is_empty() {
        msg_info!(Message::NoTasksFound);
        View::stats(tasks.active_count());
        return Ok(());
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(&visible)?;
    View::stats(tasks.active_count());
    Ok(())
}
