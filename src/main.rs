use clap::Parser;
use odgi_report::cli;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("odgi_report=debug,info")
    } else {
        EnvFilter::new("odgi_report=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Report(args) => {
            cli::report::run(args, cli.verbose)?;
        }
        cli::Commands::Show(args) => {
            cli::show::run(args, cli.format)?;
        }
        cli::Commands::GroupId(args) => {
            cli::group_id::run(&args, cli.format)?;
        }
    }

    Ok(())
}
