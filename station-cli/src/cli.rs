use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Text};
use log::debug;
use station_core::{Config, Dashboard, HttpEndpoint, SubmitError, WeatherEndpoint};
use std::{io::Write, time::Duration};

use crate::view;

const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "station", version, about = "Weather station dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set the weather endpoint URL.
    Configure,

    /// Look up one city and show the dashboard.
    Show {
        /// City name, e.g. "Tokyo".
        city: String,

        /// Endpoint URL for this run only.
        #[arg(long)]
        endpoint: Option<String>,
    },

    /// Prompt for cities until Esc or Ctrl-C.
    Watch {
        /// Endpoint URL for this run only.
        #[arg(long)]
        endpoint: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, endpoint } => {
                let mut dash = dashboard(endpoint.as_deref())?;
                dash.set_location(city);
                submit(&mut dash).await?;
                print!("{}", view::render(dash.record(), dash.is_loading()));
                Ok(())
            }
            Command::Watch { endpoint } => watch(dashboard(endpoint.as_deref())?).await,
        }
    }
}

fn dashboard(endpoint: Option<&str>) -> anyhow::Result<Dashboard<HttpEndpoint>> {
    let config = Config::load()?.with_endpoint_override(endpoint)?;
    let endpoint = HttpEndpoint::from_config(&config);
    debug!("using endpoint {}", endpoint.url());
    Ok(Dashboard::new(endpoint))
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let url = Text::new("Weather endpoint URL:")
        .with_default(&config.endpoint)
        .prompt()
        .context("Failed to read endpoint URL")?;

    config.set_endpoint(&url)?;
    config.save()?;

    println!(
        "Saved endpoint {} to {}",
        config.endpoint,
        Config::config_file_path()?.display()
    );
    Ok(())
}

async fn watch<E: WeatherEndpoint>(mut dash: Dashboard<E>) -> anyhow::Result<()> {
    print!("{}", view::render(dash.record(), dash.is_loading()));

    loop {
        // The input keeps its text between submissions.
        let answer = Text::new(view::FORM_HEADING)
            .with_initial_value(dash.location())
            .with_placeholder(view::FORM_PLACEHOLDER)
            .with_help_message(view::FORM_HINT)
            .prompt();

        let location = match answer {
            Ok(location) => location,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e).context("Failed to read location"),
        };

        dash.set_location(location);
        match submit(&mut dash).await {
            Ok(()) => print!("{}", view::render(dash.record(), dash.is_loading())),
            Err(e) => eprintln!("{}", view::alert(&e.to_string())),
        }
    }

    Ok(())
}

/// Run one submission, drawing a spinner on stderr while it is pending.
async fn submit<E: WeatherEndpoint>(dash: &mut Dashboard<E>) -> Result<(), SubmitError> {
    let loading = dash.loading_flag();
    let pending = dash.submit();
    tokio::pin!(pending);

    let mut tick = tokio::time::interval(Duration::from_millis(120));
    let mut frame = 0;

    let res = loop {
        tokio::select! {
            res = &mut pending => break res.map(|_| ()),
            _ = tick.tick() => {
                if loading.is_set() {
                    eprint!("\r{} {}", SPINNER[frame % SPINNER.len()], view::BUTTON_BUSY);
                    let _ = std::io::stderr().flush();
                    frame += 1;
                }
            }
        }
    };

    if frame > 0 {
        eprint!("\r\x1b[K");
    }
    res
}
