use crate::server;
use abhivorn_site::config::AppConfig;
use abhivorn_site::error::AppError;
use abhivorn_site::routing::RouteTable;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "abhivorn-web",
    about = "Serve and inspect the Abhivorn Technologies website",
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
    /// Print the route table in match order
    Routes,
    /// Report whether email delivery credentials are configured
    CheckEmail,
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
        Command::Routes => print_routes(),
        Command::CheckEmail => check_email(),
    }
}

fn print_routes() -> Result<(), AppError> {
    let table = RouteTable::standard()?;
    for (position, entry) in table.entries().iter().enumerate() {
        println!(
            "{:>2}  {:<20} {:?}",
            position + 1,
            entry.pattern.label(),
            entry.page
        );
    }
    Ok(())
}

fn check_email() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let email = &config.email;
    let status = if email.is_configured() {
        "configured"
    } else {
        "missing EMAILJS_PUBLIC_KEY"
    };

    println!("provider:             {}", email.api_base_url);
    println!("service id:           {}", display_or_unset(&email.service_id));
    println!("contact template:     {}", display_or_unset(&email.contact_template_id));
    println!("application template: {}", display_or_unset(&email.application_template_id));
    println!("status:               {status}");
    Ok(())
}

fn display_or_unset(value: &str) -> &str {
    if value.trim().is_empty() {
        "(unset)"
    } else {
        value
    }
}
