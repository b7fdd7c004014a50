use clap::Parser;
use hostcli::core::commit::HostsCommitter;
use hostcli::core::config::{self, CliOverrides, ResolvedConfig};
use hostcli::core::form::Form;
use hostcli::core::session::{Outcome, Session};
use hostcli::core::setup;
use hostcli::error::Result;
use hostcli::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "hostcli", about = "Add a local host entry to /etc/hosts")]
struct Args {
    /// Config file to read
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Private data file that keeps every entry added so far
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Hosts file to append entries to
    #[arg(long)]
    hosts_file: Option<PathBuf>,

    /// Log file (empty string disables logging)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    /// Do not require root (for development against non-system paths)
    #[arg(long)]
    skip_root_check: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    match run(args) {
        Ok(Outcome::Committed(record)) => {
            println!("{}", record.confirmation());
            ExitCode::SUCCESS
        }
        Ok(Outcome::Aborted) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("hostcli: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<Outcome> {
    let file_config = config::load_config(&args.config)?;
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            data_file: args.data_file,
            hosts_file: args.hosts_file,
            log_file: args.log_file,
            verbose: args.verbose,
            skip_root_check: args.skip_root_check,
        },
    )?;

    if resolved.require_root {
        setup::check_privileges(setup::current_euid())?;
    }
    setup::bootstrap(&resolved.data_file, &resolved.hosts_file)?;

    init_logging(&resolved);
    log::info!(
        "hostcli starting (data file: {}, hosts file: {})",
        resolved.data_file.display(),
        resolved.hosts_file.display()
    );

    let committer = HostsCommitter::from_paths(&resolved.data_file, &resolved.hosts_file);
    tui::run(Session::new(Form::host_entry(), committer))
}

// Logging goes to a file: the terminal belongs to the form.
fn init_logging(resolved: &ResolvedConfig) {
    let Some(path) = &resolved.log_file else {
        return;
    };
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create(path) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }
}
