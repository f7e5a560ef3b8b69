//! Command-line front end: a file-backed cart against the storefront API.
//!
//! ```bash
//! rocket_cart add 1
//! rocket_cart set 1 3
//! rocket_cart remove 1
//! RUST_LOG=debug rocket_cart --api-url http://localhost:3333 show
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{info, Instrument};

use rocket_cart::{
    setup_tracing, Cart, CartConfig, CartSystem, Notification, Notifier, ProductId, UpdateProductAmount,
};

/// Manage the shopping cart
#[derive(Parser)]
#[command(name = "rocket_cart")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Storefront API base URL (overrides CART_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Directory holding the persisted cart (overrides CART_STORAGE_DIR)
    #[arg(long, global = true)]
    storage_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the cart
    Show,
    /// Add one unit of a product
    Add { product_id: u64 },
    /// Remove a product from the cart
    Remove { product_id: u64 },
    /// Set the quantity of a product already in the cart
    Set {
        product_id: u64,
        #[arg(allow_hyphen_values = true)]
        amount: i64,
    },
}

/// Prints notifications the way a storefront would toast them.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        eprintln!("! {}", notification);
    }
}

fn print_cart(cart: &Cart) {
    if cart.is_empty() {
        println!("Cart is empty");
        return;
    }
    for item in cart {
        println!(
            "{:>6}  {:<30} {:>4} x {:>9.2} = {:>10.2}",
            item.id.0,
            item.name,
            item.amount,
            item.price,
            item.subtotal()
        );
    }
    println!("{} products, {} units, total {:.2}", cart.len(), cart.total_amount(), cart.total());
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let cli = Cli::parse();

    let mut config = CartConfig::from_env();
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }
    if let Some(storage_dir) = cli.storage_dir {
        config.storage_dir = storage_dir;
    }

    setup_tracing(&config.log_level);
    info!(api_url = %config.api_url, storage_dir = %config.storage_dir.display(), "Starting cart");

    let system = CartSystem::start(&config, Arc::new(ConsoleNotifier)).map_err(|e| e.to_string())?;
    let client = system.cart_client();

    let command = cli.command;
    let span = tracing::info_span!("cart_command");
    let cart = async move {
        match command {
            Commands::Show => client.cart().await,
            Commands::Add { product_id } => client.add_product(ProductId(product_id)).await,
            Commands::Remove { product_id } => client.remove_product(ProductId(product_id)).await,
            Commands::Set { product_id, amount } => {
                client
                    .update_product_amount(UpdateProductAmount {
                        product_id: ProductId(product_id),
                        amount,
                    })
                    .await
            }
        }
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    print_cart(&cart);

    system.shutdown().await.map_err(|e| e.to_string())?;
    Ok(())
}
