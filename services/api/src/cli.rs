use crate::commands::{
    run_checklist, run_costs, run_timeline, ChecklistCommand, CostArgs, TimelineArgs,
};
use crate::server;
use admission_guide::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Admission Guide",
    about = "Cost estimates, application timelines, and document checklists for international students",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Estimate annual cost of study for a program and location
    Costs(CostArgs),
    /// Print the application timeline for a degree level and admission semester
    Timeline(TimelineArgs),
    /// Inspect or update the persisted document checklist
    Checklist {
        #[command(subcommand)]
        command: ChecklistCommand,
    },
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Costs(args) => run_costs(args),
        Command::Timeline(args) => run_timeline(args),
        Command::Checklist { command } => run_checklist(command),
    }
}
