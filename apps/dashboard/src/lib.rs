//! # Royal Dashboard Library
//!
//! Back end of the Royal Food Point dashboard: state, commands and invoice
//! export. The UI calls the functions in [`commands`] with the state objects
//! held by [`App`].
//!
//! ## Module Organization
//! ```text
//! royal_dashboard/
//! ├── lib.rs          ◄─── You are here (bootstrap & logging)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── store.rs    ◄─── Repositories behind an RwLock
//! │   ├── cart.rs     ◄─── The open bill
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/       ◄─── One module per screen
//! ├── render/         ◄─── Typst and plain-text invoice layouts
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod render;
pub mod state;

use royal_store::Store;
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::ApiResult;
use state::{CartState, ConfigState, StoreState};

/// The state objects every command draws from.
///
/// Cloning is cheap and shares the same cart and store.
#[derive(Debug, Clone)]
pub struct App {
    pub store: StoreState,
    pub cart: CartState,
    pub config: ConfigState,
}

impl App {
    /// Loads configuration from the environment and seeds the store.
    ///
    /// ## Startup Sequence
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  1. ConfigState::from_env()  business name, tax rates, export dir   │
    /// │  2. Store::seeded()          menu, staff, deals from embedded JSON  │
    /// │  3. CartState::new()         empty bill, paying cash                │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    pub fn bootstrap() -> ApiResult<Self> {
        Self::with_config(ConfigState::from_env())
    }

    /// Same as [`App::bootstrap`] with explicit configuration.
    pub fn with_config(config: ConfigState) -> ApiResult<Self> {
        let store = Store::seeded()?;

        info!(
            business = %config.business_name,
            export_dir = %config.export_dir.display(),
            "Dashboard state initialized"
        );

        Ok(App {
            store: StoreState::new(store),
            cart: CartState::new(),
            config,
        })
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=royal_store=trace` - Trace one crate only
/// - Default: INFO, DEBUG for the royal crates
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,royal_core=debug,royal_store=debug,royal_dashboard=debug")
    });

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_clones_share_state() {
        let app = App::with_config(ConfigState::default()).unwrap();
        let other = app.clone();

        commands::cart::add_to_cart(&app.store, &app.cart, "f1").unwrap();

        assert_eq!(commands::cart::get_cart(&other.cart).unwrap().lines.len(), 1);
    }

    #[test]
    fn test_init_tracing_twice() {
        init_tracing();
        init_tracing();
    }
}
