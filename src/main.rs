use anyhow::Result;
use clap::Parser;
use party_designer::app::App;
use party_designer::models::{Config, PartyForm};
use party_designer::{render, Error};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "party-designer")]
#[command(about = "Design a party: invitation text, decoration image and a song")]
struct CliArgs {
    /// Occasion (e.g., Birthday, Wedding)
    #[arg(long, default_value = "")]
    occasion: String,

    /// Color theme (e.g., Pink, Gold)
    #[arg(long, default_value = "")]
    color_theme: String,

    /// Location (e.g., Indoors, Beachside Garden, Rooftop)
    #[arg(long, default_value = "")]
    location: String,

    /// Mention a special musical performance in the invitation
    #[arg(long)]
    musical_performance: bool,

    /// Song name to look up on Spotify
    #[arg(long, value_name = "NAME", default_value = "")]
    song: String,

    /// Also write a standalone HTML invitation page here
    #[arg(long, value_name = "PATH")]
    html: Option<PathBuf>,
}

impl CliArgs {
    fn to_form(&self) -> PartyForm {
        PartyForm {
            occasion: self.occasion.clone(),
            color_theme: self.color_theme.clone(),
            location: self.location.clone(),
            musical_performance: self.musical_performance,
            song_name: self.song.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "party_designer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = CliArgs::parse();

    let app = match Config::from_env().and_then(|config| App::new(&config)) {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    };

    let outcome = app
        .submit_with(args.to_form(), |step| print!("{}", render::step_text(&step)))
        .await;

    match outcome {
        Ok(plan) => {
            if let Some(path) = &args.html {
                std::fs::write(path, render::html_page(&plan))?;
                info!("Wrote invitation page to {}", path.display());
            }
            Ok(())
        }
        Err(Error::Validation(notice)) => {
            eprintln!("{}", notice);
            std::process::exit(2);
        }
        Err(e) => {
            error!("Party design failed: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CliArgs;
    use clap::Parser;

    #[test]
    fn test_cli_builds_form() {
        let args = CliArgs::parse_from([
            "party-designer",
            "--occasion",
            "Birthday",
            "--color-theme",
            "Gold",
            "--location",
            "Rooftop",
            "--musical-performance",
            "--song",
            "Happy",
        ]);
        let form = args.to_form();
        assert_eq!(form.occasion, "Birthday");
        assert_eq!(form.color_theme, "Gold");
        assert!(form.musical_performance);
        assert_eq!(form.song_name, "Happy");
        assert!(args.html.is_none());
    }

    #[test]
    fn test_cli_missing_fields_default_to_empty() {
        let args = CliArgs::parse_from(["party-designer", "--occasion", "Wedding"]);
        let form = args.to_form();
        assert!(form.location.is_empty());
        assert!(!form.musical_performance);
        assert!(form.validate().is_err());
    }
}
