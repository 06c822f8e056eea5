//! MAFIA Cart CLI - Manage the restaurant cart from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Add a menu item, price given as it appears on the menu card
//! mafia-cart add --name "Пицца Маргарита" --price "250 ₽"
//!
//! # Change quantities
//! mafia-cart plus --name "Пицца Маргарита"
//! mafia-cart minus --name "Пицца Маргарита"
//! mafia-cart quantity --name "Пицца Маргарита" --delta -2
//!
//! # Remove one item, or everything
//! mafia-cart remove --name "Пицца Маргарита"
//! mafia-cart clear
//!
//! # Show the cart
//! mafia-cart show
//! ```
//!
//! # Commands
//!
//! - `add` / `remove` / `plus` / `minus` / `quantity` / `clear` - Change the cart
//! - `show` - Display the saved cart
//!
//! Every command loads the saved cart first and prints the cart afterwards.
//! See [`mafia_cart::CartConfig`] for the environment variables.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "mafia-cart")]
#[command(author, version, about = "MAFIA restaurant cart")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add one unit of a menu item
    Add {
        /// Menu item name
        #[arg(short, long)]
        name: String,

        /// Price as shown on the menu (e.g. "250 ₽")
        #[arg(short, long)]
        price: String,
    },
    /// Remove a menu item entirely
    Remove {
        /// Menu item name
        #[arg(short, long)]
        name: String,
    },
    /// Increase an item's quantity by one
    Plus {
        /// Menu item name
        #[arg(short, long)]
        name: String,
    },
    /// Decrease an item's quantity by one, removing it at zero
    Minus {
        /// Menu item name
        #[arg(short, long)]
        name: String,
    },
    /// Change an item's quantity by a signed amount
    Quantity {
        /// Menu item name
        #[arg(short, long)]
        name: String,

        /// Amount to add (negative to subtract)
        #[arg(short, long, allow_negative_numbers = true)]
        delta: i64,
    },
    /// Remove every item
    Clear,
    /// Display the cart
    Show,
}

fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "mafia_cart=info,mafia_cli=info".into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = mafia_cart::CartConfig::from_env()?;
    let mut store = commands::open_store(&config);

    match cli.command {
        Commands::Add { name, price } => commands::add(&mut store, &name, &price)?,
        Commands::Remove { name } => commands::remove(&mut store, &name)?,
        Commands::Plus { name } => {
            commands::press(&mut store, &name, mafia_cart::input::QuantityButton::Plus)?;
        }
        Commands::Minus { name } => {
            commands::press(&mut store, &name, mafia_cart::input::QuantityButton::Minus)?;
        }
        Commands::Quantity { name, delta } => commands::quantity(&mut store, &name, delta)?,
        Commands::Clear => commands::clear(&mut store)?,
        Commands::Show => {}
    }

    render::log_view(&mafia_cart::CartView::new(
        store.cart(),
        &config.currency_symbol,
    ));
    Ok(())
}
