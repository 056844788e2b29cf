//! Deliveboo CLI - Cart and restaurant catalog from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Show the stored cart
//! deliveboo cart show
//!
//! # Add a dish, replacing the cart if it holds another restaurant's dishes
//! deliveboo cart add --id 9 --restaurant-id 2 --price 12 --replace
//!
//! # Filter a restaurant listing
//! deliveboo restaurants filter --file restaurants.json --type Italiano
//! ```
//!
//! # Commands
//!
//! - `cart show|add|remove|delete|clear` - Manage the stored cart
//! - `restaurants filter` - Filter a JSON restaurant listing
//!
//! The cart is restored from storage at startup and written back after
//! every change. Reports go to stdout as JSON, logs go to stderr.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use deliveboo_cart::{CartStore, FileStorage};
use deliveboo_core::DishId;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use commands::CommandError;
use commands::cart::DishSpec;
use config::{CliConfig, LogFormat};

#[derive(Parser)]
#[command(name = "deliveboo")]
#[command(author, version, about = "Deliveboo cart and catalog tools")]
struct Cli {
    /// Directory holding the stored cart (overrides `DELIVEBOO_CART_DIR`)
    #[arg(long, global = true)]
    cart_dir: Option<PathBuf>,

    /// Storage key for the cart (overrides `DELIVEBOO_CART_KEY`)
    #[arg(long, global = true)]
    cart_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Browse the restaurant catalog
    Restaurants {
        #[command(subcommand)]
        action: RestaurantAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Print the cart
    Show,
    /// Add one unit of a dish
    Add {
        /// Dish as JSON (`id`, `restaurantId` or `restaurant.id`, `price`)
        #[arg(long, conflicts_with_all = ["id", "restaurant_id", "price", "name"])]
        dish: Option<String>,

        /// Dish ID
        #[arg(long, required_unless_present = "dish")]
        id: Option<String>,

        /// Restaurant ID
        #[arg(long, required_unless_present = "dish")]
        restaurant_id: Option<String>,

        /// Unit price, e.g. 7.50
        #[arg(long, required_unless_present = "dish")]
        price: Option<String>,

        /// Display name
        #[arg(long)]
        name: Option<String>,

        /// Start a new cart if the dish is from another restaurant
        #[arg(long)]
        replace: bool,
    },
    /// Take one unit of a dish out of the cart
    Remove {
        /// Dish ID
        id: DishId,
    },
    /// Drop a dish from the cart whatever its quantity
    Delete {
        /// Dish ID
        id: DishId,
    },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum RestaurantAction {
    /// Filter a JSON restaurant listing by cuisine or name
    Filter {
        /// JSON file with an array of restaurants
        #[arg(short, long)]
        file: PathBuf,

        /// Cuisine type to toggle in the selection (repeatable)
        #[arg(short = 't', long = "type")]
        types: Vec<String>,

        /// Case-insensitive name search, used when no type is selected
        #[arg(short, long, default_value = "")]
        search: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(LogFormat::Pretty);
            tracing::error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };
    let config = apply_overrides(config, &cli);

    init_tracing(config.log_format);

    if let Err(e) = run(cli.command, &config) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing on stderr. Defaults to info if `RUST_LOG` is not set.
fn init_tracing(format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "deliveboo=info,deliveboo_cart=info".into());

    let (pretty, json) = match format {
        LogFormat::Pretty => (
            Some(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
            None,
        ),
        LogFormat::Json => (
            None,
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            ),
        ),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(pretty)
        .with(json)
        .init();
}

fn apply_overrides(mut config: CliConfig, cli: &Cli) -> CliConfig {
    if let Some(dir) = &cli.cart_dir {
        config.cart_dir.clone_from(dir);
    }
    if let Some(key) = &cli.cart_key {
        config.cart_key.clone_from(key);
    }
    config
}

/// Build the cart store over file storage and restore the saved cart.
fn open_cart(config: &CliConfig) -> CartStore<FileStorage> {
    let mut storage = FileStorage::new(&config.cart_dir);
    if let Some(quota) = config.storage_quota {
        storage = storage.with_quota(quota);
    }

    let mut cart = CartStore::with_key(storage, config.cart_key.clone());
    let outcome = cart.restore();
    tracing::debug!(dir = %config.cart_dir.display(), ?outcome, "Opened cart");
    cart
}

fn run(command: Commands, config: &CliConfig) -> Result<(), CommandError> {
    match command {
        Commands::Cart { action } => {
            let mut cart = open_cart(config);
            match action {
                CartAction::Show => commands::print_json(&commands::cart::show(&cart))?,
                CartAction::Add {
                    dish,
                    id,
                    restaurant_id,
                    price,
                    name,
                    replace,
                } => {
                    let dish = DishSpec {
                        json: dish,
                        id,
                        restaurant_id,
                        price,
                        name,
                    }
                    .into_dish()?;
                    commands::print_json(&commands::cart::add(&mut cart, dish, replace)?)?;
                }
                CartAction::Remove { id } => {
                    commands::print_json(&commands::cart::remove(&mut cart, &id)?)?;
                }
                CartAction::Delete { id } => {
                    commands::print_json(&commands::cart::delete(&mut cart, &id)?)?;
                }
                CartAction::Clear => commands::print_json(&commands::cart::clear(&mut cart)?)?,
            }
        }
        Commands::Restaurants { action } => match action {
            RestaurantAction::Filter {
                file,
                types,
                search,
            } => {
                let matches = commands::restaurants::filter(&file, &types, &search)?;
                commands::print_json(&matches)?;
            }
        },
    }
    Ok(())
}
