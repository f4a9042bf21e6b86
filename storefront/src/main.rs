use std::path::PathBuf;

use chrono::Utc;
use clap::{Parser, Subcommand};
use storefront::config::Config;
use storefront::{Catalog, Session, TracingNotifier, pricing};

/// Storefront - browse and quote virtual currency packages from the terminal
#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(version, about, long_about = None)]
struct Args {
    /// Catalog JSON file (overrides STOREFRONT_CATALOG)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all packages with their prices
    Catalog {
        /// Promo code to price the packages with
        #[arg(long)]
        promo: Option<String>,
    },
    /// Show the final price of one package
    Quote {
        #[arg(long)]
        package: u32,
        #[arg(long)]
        promo: Option<String>,
    },
    /// Simulate a purchase and print the receipt as JSON
    Purchase {
        #[arg(long)]
        package: u32,
        #[arg(long)]
        promo: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args = Args::parse();
    let mut config = Config::from_env();
    if let Some(path) = args.catalog {
        config.catalog_path = Some(path);
    }
    let catalog = config.catalog()?;

    match args.command {
        Command::Catalog { promo } => {
            let session = session_with_promo(&catalog, promo.as_deref())?;
            print_catalog(&catalog, &session);
        }
        Command::Quote { package, promo } => {
            let session = session_with_promo(&catalog, promo.as_deref())?;
            let package = catalog.package(package)?;
            println!(
                "{} {} for {}",
                package.total_amount(),
                catalog.labels().currency_name,
                catalog.labels().price(session.price_of(package))
            );
        }
        Command::Purchase { package, promo } => {
            let mut session = session_with_promo(&catalog, promo.as_deref())?;
            let package = catalog.package(package)?;
            session.purchase(package, catalog.labels(), TracingNotifier);

            let receipt = pricing::receipt(package, session.applied_promo(), Utc::now());
            println!("{}", serde_json::to_string_pretty(&receipt)?);
        }
    }

    Ok(())
}

fn session_with_promo(catalog: &Catalog, promo: Option<&str>) -> anyhow::Result<Session> {
    let mut session = Session::new();
    if let Some(code) = promo {
        session.set_promo_input(code);
        session.apply_promo(catalog.promo_codes(), TracingNotifier)?;
    }
    Ok(session)
}

fn print_catalog(catalog: &Catalog, session: &Session) {
    let labels = catalog.labels();

    if let Some(promo) = session.applied_promo() {
        println!("Promo {} active: {} off\n", promo.code, promo.discount);
    }

    for package in catalog.packages() {
        let bonus = if package.has_bonus() {
            format!(" +{} bonus", package.bonus)
        } else {
            String::new()
        };
        let price = if session.applied_promo().is_some() {
            format!(
                "{} (was {})",
                labels.price(session.price_of(package)),
                labels.price(package.price)
            )
        } else {
            labels.price(package.price)
        };
        let popular = if package.popular { "  * popular" } else { "" };

        println!(
            "[{}] {} {}{}  {}{}",
            package.id, package.amount, labels.currency_name, bonus, price, popular
        );
    }
}
