use anyhow::Result;
use tudo::commands::Cli;

fn main() -> Result<()> {
    Cli::menu()
}
