use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "kiosk")]
#[command(about = "Scan product codes and add them to the storefront cart", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub overrides: ConfigOverrides,
}

/// Flags that take precedence over the environment.
#[derive(Args, Debug, Default, Clone)]
pub struct ConfigOverrides {
    /// Storefront base URL (STOREFRONT_URL)
    #[arg(long, global = true)]
    pub storefront_url: Option<String>,

    /// Request timeout in seconds (STOREFRONT_TIMEOUT_SECS)
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Customer e-mail (STOREFRONT_EMAIL)
    #[arg(long, global = true)]
    pub email: Option<String>,

    /// Scanner source: device path, `device:<path>` or `tcp://host:port` (SCANNER_SOURCE)
    #[arg(long, global = true)]
    pub source: Option<String>,

    /// Allow a TCP scanner bridge on a non-loopback host
    #[arg(long, global = true)]
    pub allow_insecure_remote: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run a scan session (default)
    Scan,
    /// Resolve a code typed by hand
    Lookup {
        /// Raw payload: JSON, product URL or bare product id
        payload: String,

        /// Add the product to the cart after resolving it
        #[arg(long)]
        add: bool,
    },
    /// Show or change the current cart
    Cart {
        #[command(subcommand)]
        action: Option<CartAction>,
    },
    /// Show previously scanned products
    History,
    /// List stores, or the products of one store
    Stores {
        /// Store to open
        store_id: Option<String>,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Show lines and totals (default)
    Show,
    /// Remove one product from the cart
    Remove {
        product_id: String,
    },
    /// Remove every line
    Clear,
}
