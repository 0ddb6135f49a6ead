//! Taxdesk command-line tool
//!
//! Quotes catalog services and inspects the filing status table.

use std::path::PathBuf;

use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use taxdesk_core::discount::{DiscountType, validate_base_amount};
use taxdesk_core::filing::{FilingEvent, FilingWorkflow, TaxFilingStatus, status_config};
use taxdesk_core::pricing::{
    PricingCategory, all_presets, get_pricing_description, get_pricing_preset,
    presets_by_category,
};
use taxdesk_core::summary::TaxReturnSummary;
use taxdesk_core::tax::{InvoiceBreakdown, Province, ServiceType, TaxFilingPayment};
use taxdesk_shared::{AppConfig, Cad, Language};

#[derive(Parser, Debug)]
#[command(name = "taxdesk")]
#[command(about = "Quotes and filing status tools for Taxdesk", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Price a catalog service with discount and sales tax
    Quote {
        /// Preset id, e.g. `individual-simple`
        preset: String,

        /// none, returning-customer or referral
        #[arg(short, long, default_value = "none")]
        discount: DiscountType,

        /// Name of the referring client
        #[arg(long)]
        referred_by: Option<String>,

        /// Two-letter province code (defaults to the configured province)
        #[arg(short, long)]
        province: Option<Province>,

        /// en, fr or pt (defaults to the configured language)
        #[arg(short, long)]
        lang: Option<Language>,

        /// Print the breakdown as JSON
        #[arg(long)]
        json: bool,
    },

    /// List catalog presets
    Presets {
        /// personal, business or addon
        #[arg(short, long)]
        category: Option<String>,

        #[arg(short, long)]
        lang: Option<Language>,
    },

    /// Show every filing status with its step, label and who acts next
    Statuses {
        #[arg(short, long)]
        lang: Option<Language>,
    },

    /// Apply an event to a status and print the resulting status
    Transition {
        /// Current status, e.g. `ready-for-review`
        status: String,

        /// Event, e.g. `client-approve`
        event: String,
    },

    /// Preview a prepared return from a JSON summary file
    Summary {
        file: PathBuf,

        #[arg(short, long)]
        lang: Option<Language>,
    },
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taxdesk=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load().context("Failed to load configuration")?;
    debug!(business = %config.business.name, "Configuration loaded");

    let default_lang = config.business.default_language;

    match cli.command {
        Command::Quote {
            preset,
            discount,
            referred_by,
            province,
            lang,
            json,
        } => {
            let province = match province {
                Some(province) => province,
                None => config.business.default_province.parse()?,
            };
            let lang = lang.unwrap_or(default_lang);
            let breakdown = quote(&preset, discount, referred_by.as_deref(), province, lang)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&breakdown)?);
            } else {
                println!("{}", breakdown.render(lang));
            }
        }
        Command::Presets { category, lang } => {
            list_presets(category.as_deref(), lang.unwrap_or(default_lang))?;
        }
        Command::Statuses { lang } => list_statuses(lang.unwrap_or(default_lang)),
        Command::Transition { status, event } => {
            let status = TaxFilingStatus::parse(&status)
                .ok_or_else(|| anyhow!("Unknown status: {status}"))?;
            let event =
                FilingEvent::parse(&event).ok_or_else(|| anyhow!("Unknown event: {event}"))?;
            let next = FilingWorkflow::transition(status, event)?;
            println!("{status} --{event}--> {next}");
        }
        Command::Summary { file, lang } => {
            let raw = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let summary: TaxReturnSummary = serde_json::from_str(&raw)?;
            summary.validate()?;
            print_summary(&summary, lang.unwrap_or(default_lang));
        }
    }

    Ok(())
}

fn quote(
    preset_id: &str,
    discount_type: DiscountType,
    referred_by: Option<&str>,
    province: Province,
    lang: Language,
) -> anyhow::Result<InvoiceBreakdown> {
    let preset =
        get_pricing_preset(preset_id).ok_or_else(|| anyhow!("Unknown preset: {preset_id}"))?;

    let base_amount = preset.amount.amount();
    validate_base_amount(base_amount)?;

    let payment = TaxFilingPayment::quote(
        base_amount,
        discount_type,
        referred_by,
        ServiceType::for_preset(preset),
        province,
    );
    info!(preset = preset_id, %discount_type, %province, total = %payment.total(), "Quoted");

    Ok(InvoiceBreakdown::from_payment(&payment, preset.name.get(lang)))
}

fn list_presets(category: Option<&str>, lang: Language) -> anyhow::Result<()> {
    let presets: Vec<_> = match category {
        Some(raw) => {
            let category = PricingCategory::parse(raw)
                .ok_or_else(|| anyhow!("Unknown category: {raw}"))?;
            presets_by_category(category).collect()
        }
        None => all_presets().iter().collect(),
    };

    for preset in presets {
        println!(
            "{:<22} {:>10}  {:<9} {}",
            preset.id,
            preset.amount.to_string(),
            preset.category.as_str(),
            preset.name.get(lang)
        );
        println!("{:<44}{}", "", get_pricing_description(preset.id, lang));
    }
    Ok(())
}

fn list_statuses(lang: Language) {
    for status in TaxFilingStatus::ALL {
        let config = status_config(status);
        let events: Vec<_> = FilingWorkflow::available_events(status)
            .iter()
            .map(FilingEvent::as_str)
            .collect();
        let next_move = if status.is_terminal() {
            "done"
        } else if status.awaits_client() {
            "client"
        } else {
            "staff"
        };
        println!(
            "{} {:<20} {:<28} {:<7} {}",
            config.step,
            status.as_str(),
            config.label(lang),
            next_move,
            events.join(", ")
        );
    }
}

fn print_summary(summary: &TaxReturnSummary, lang: Language) {
    println!("{}", summary.tax_year);
    println!("{}", summary.headline(lang));
    println!("refund:   {}", Cad::new(summary.total_refund()));
    println!("owing:    {}", Cad::new(summary.total_owing()));
    println!("benefits: {}", Cad::new(summary.total_benefits()));
    if let Some(notes) = &summary.notes {
        println!("{notes}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_and_version_need_no_config() {
        temp_env::with_vars(
            [
                ("RUN_MODE", Some("test-nonexistent")),
                ("TAXDESK__BUSINESS__DEFAULT_LANGUAGE", Some("xx")),
            ],
            || {
                assert!(AppConfig::load().is_err());

                let help = Cli::try_parse_from(["taxdesk", "--help"]).unwrap_err();
                assert_eq!(help.kind(), ErrorKind::DisplayHelp);
                let version = Cli::try_parse_from(["taxdesk", "--version"]).unwrap_err();
                assert_eq!(version.kind(), ErrorKind::DisplayVersion);
            },
        );
    }

    #[test]
    fn test_quote_arguments() {
        let cli = Cli::try_parse_from([
            "taxdesk",
            "quote",
            "small-business",
            "-d",
            "referral",
            "--referred-by",
            "Jane Doe",
            "-p",
            "QC",
        ])
        .unwrap();
        let Command::Quote {
            discount, province, ..
        } = cli.command
        else {
            panic!("expected quote");
        };
        assert_eq!(discount, DiscountType::Referral);
        assert_eq!(province, Some(Province::Qc));
    }
}
