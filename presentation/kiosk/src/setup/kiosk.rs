use anyhow::anyhow;
use dialoguer::{Confirm, Input, Password};
use tokio::sync::mpsc;

use business::domain::auth::use_cases::login::LoginParams;
use business::domain::cart::use_cases::add_line::AddCartLineParams;
use business::domain::cart::use_cases::remove_line::RemoveCartLineParams;
use business::domain::product::use_cases::resolve::ResolvePayloadParams;
use business::domain::scan::events::{SessionEvent, SessionNotice};
use business::domain::shared::value_objects::{ProductId, StoreId};
use business::domain::store::use_cases::browse::BrowseStoreParams;

use crate::cli::{CartAction, Commands};
use crate::config::storefront_config::StorefrontConfig;
use crate::setup::dependency_injection::DependencyContainer;
use crate::ui::error::IntoUserMessage;
use crate::ui::render;

const CHANNEL_CAPACITY: usize = 32;

pub struct Kiosk {
    container: DependencyContainer,
    email: Option<String>,
    password: Option<String>,
}

impl Kiosk {
    pub fn new(container: DependencyContainer, storefront: &StorefrontConfig) -> Self {
        Self {
            container,
            email: storefront.email.clone(),
            password: storefront.password.clone(),
        }
    }

    /// Every storefront endpoint the kiosk uses requires a customer session,
    /// so each command starts with a login.
    pub async fn run(&self, command: Commands) -> anyhow::Result<()> {
        self.log_in().await?;

        match command {
            Commands::Scan => self.scan().await,
            Commands::Lookup { payload, add } => self.lookup(payload, add).await,
            Commands::Cart { action } => match action.unwrap_or(CartAction::Show) {
                CartAction::Show => self.show_cart().await,
                CartAction::Remove { product_id } => self.remove_from_cart(&product_id).await,
                CartAction::Clear => self.clear_cart().await,
            },
            Commands::History => self.show_history().await,
            Commands::Stores { store_id: None } => self.list_stores().await,
            Commands::Stores {
                store_id: Some(store_id),
            } => self.browse_store(&store_id).await,
        }
    }

    async fn log_in(&self) -> anyhow::Result<()> {
        let email = match &self.email {
            Some(email) => email.clone(),
            None => prompt(|| Input::<String>::new().with_prompt("E-mail").interact_text()).await?,
        };
        let password = match &self.password {
            Some(password) => password.clone(),
            None => prompt(|| Password::new().with_prompt("Password").interact()).await?,
        };

        let user = self
            .container
            .login
            .execute(LoginParams { email, password })
            .await
            .map_err(user_error)?;

        self.container
            .logger
            .info(&format!("Logged in as {} ({})", user.user_id, user.role));
        Ok(())
    }

    async fn scan(&self) -> anyhow::Result<()> {
        let (events_tx, events_rx) = mpsc::channel(CHANNEL_CAPACITY);
        let (notices_tx, mut notices_rx) = mpsc::channel(CHANNEL_CAPACITY);

        let controller = self.container.scan_session.clone();
        let sink = events_tx.clone();
        let session =
            tokio::spawn(async move { controller.run(sink, events_rx, notices_tx).await });

        let interrupt = events_tx.clone();
        let ctrl_c = tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                let _ = interrupt.send(SessionEvent::Close).await;
            }
        });

        let mut failure = None;
        while let Some(notice) = notices_rx.recv().await {
            println!("{}", render::notice_line(&notice));
            match notice {
                SessionNotice::Resolved(_) => ask(&events_tx, "Add to cart?"),
                SessionNotice::SubmitFailed { error, .. } if error.is_retryable() => {
                    ask(&events_tx, "Retry adding to cart?");
                }
                SessionNotice::CameraFailed(_) => failure = Some("scanner unavailable"),
                SessionNotice::ScannerLost => failure = Some("scanner disconnected"),
                _ => {}
            }
        }

        ctrl_c.abort();
        let session = session.await?;
        self.container
            .logger
            .debug(&format!("Scan session {} ended {}", session.id(), session.state()));

        if let Some(reason) = failure {
            return Err(anyhow!("scan session ended: {}", reason));
        }
        Ok(())
    }

    /// Manual code entry. Resolves once; adds to the cart only when asked to.
    async fn lookup(&self, payload: String, add: bool) -> anyhow::Result<()> {
        let scan = self
            .container
            .resolve
            .execute(ResolvePayloadParams { payload })
            .await
            .map_err(user_error)?;

        println!("{}", render::product_summary(&scan));

        if add {
            let line = self
                .container
                .add_to_cart
                .execute(AddCartLineParams {
                    product: scan.product,
                })
                .await
                .map_err(user_error)?;
            println!("{}", render::notice_line(&SessionNotice::Added(line)));
        }
        Ok(())
    }

    async fn show_cart(&self) -> anyhow::Result<()> {
        let cart = self.container.get_cart.execute().await.map_err(user_error)?;
        println!("{}", render::cart_table(&cart));
        Ok(())
    }

    async fn remove_from_cart(&self, product_id: &str) -> anyhow::Result<()> {
        let product_id =
            ProductId::parse(product_id).ok_or_else(|| anyhow!("product id must not be empty"))?;

        self.container
            .remove_from_cart
            .execute(RemoveCartLineParams {
                product_id: product_id.clone(),
            })
            .await
            .map_err(user_error)?;
        println!("Removed {} from the cart.", product_id);

        self.show_cart().await
    }

    async fn clear_cart(&self) -> anyhow::Result<()> {
        self.container
            .clear_cart
            .execute()
            .await
            .map_err(user_error)?;
        println!("Cart cleared.");
        Ok(())
    }

    async fn list_stores(&self) -> anyhow::Result<()> {
        let stores = self
            .container
            .get_stores
            .execute()
            .await
            .map_err(user_error)?;
        println!("{}", render::store_list(&stores));
        Ok(())
    }

    async fn browse_store(&self, store_id: &str) -> anyhow::Result<()> {
        let store_id =
            StoreId::parse(store_id).ok_or_else(|| anyhow!("store id must not be empty"))?;

        let details = self
            .container
            .browse_store
            .execute(BrowseStoreParams { store_id })
            .await
            .map_err(user_error)?;
        println!("{}", render::store_details(&details));
        Ok(())
    }

    async fn show_history(&self) -> anyhow::Result<()> {
        let entries = self
            .container
            .get_history
            .execute()
            .await
            .map_err(user_error)?;
        println!("{}", render::history_table(&entries));
        Ok(())
    }
}

fn user_error(err: impl IntoUserMessage) -> anyhow::Error {
    anyhow!("{}", err.into_user_message())
}

async fn prompt<T, F>(read: F) -> anyhow::Result<T>
where
    F: FnOnce() -> dialoguer::Result<T> + Send + 'static,
    T: Send + 'static,
{
    Ok(tokio::task::spawn_blocking(read).await??)
}

/// Asks on a blocking thread and answers through the session channel.
/// An interrupted prompt closes the session.
fn ask(events: &mpsc::Sender<SessionEvent>, question: &'static str) {
    let events = events.clone();
    tokio::task::spawn_blocking(move || {
        let event = match Confirm::new().with_prompt(question).default(true).interact() {
            Ok(true) => SessionEvent::Confirm,
            Ok(false) => SessionEvent::Cancel,
            Err(_) => SessionEvent::Close,
        };
        let _ = events.blocking_send(event);
    });
}
