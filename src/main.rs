use worktopkit::{cli, init_logging};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;

    cli::run_from_env()
}
