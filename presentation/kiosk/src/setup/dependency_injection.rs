use std::sync::Arc;

use camera::ScannerCamera;
use logger::TracingLogger;
use storefront::auth_gateway::AuthGatewayStorefront;
use storefront::cart_gateway::CartGatewayStorefront;
use storefront::client::StorefrontClient;
use storefront::history_gateway::HistoryGatewayStorefront;
use storefront::product_catalog::ProductCatalogStorefront;
use storefront::store_gateway::StoreGatewayStorefront;

use business::application::auth::login::LoginUseCaseImpl;
use business::application::cart::add_line::AddCartLineUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::get::GetCartUseCaseImpl;
use business::application::cart::remove_line::RemoveCartLineUseCaseImpl;
use business::application::history::get_all::GetScanHistoryUseCaseImpl;
use business::application::product::resolve::ResolvePayloadUseCaseImpl;
use business::application::scan::controller::ScanSessionController;
use business::application::store::browse::BrowseStoreUseCaseImpl;
use business::application::store::get_all::GetStoresUseCaseImpl;
use business::domain::auth::use_cases::login::LoginUseCase;
use business::domain::cart::use_cases::add_line::AddCartLineUseCase;
use business::domain::cart::use_cases::clear::ClearCartUseCase;
use business::domain::cart::use_cases::get::GetCartUseCase;
use business::domain::cart::use_cases::remove_line::RemoveCartLineUseCase;
use business::domain::history::use_cases::get_all::GetScanHistoryUseCase;
use business::domain::logger::Logger;
use business::domain::product::use_cases::resolve::ResolvePayloadUseCase;
use business::domain::store::use_cases::browse::BrowseStoreUseCase;
use business::domain::store::use_cases::get_all::GetStoresUseCase;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub login: Arc<dyn LoginUseCase>,
    pub resolve: Arc<dyn ResolvePayloadUseCase>,
    pub add_to_cart: Arc<dyn AddCartLineUseCase>,
    pub get_cart: Arc<dyn GetCartUseCase>,
    pub remove_from_cart: Arc<dyn RemoveCartLineUseCase>,
    pub clear_cart: Arc<dyn ClearCartUseCase>,
    pub get_history: Arc<dyn GetScanHistoryUseCase>,
    pub get_stores: Arc<dyn GetStoresUseCase>,
    pub browse_store: Arc<dyn BrowseStoreUseCase>,
    pub scan_session: Arc<ScanSessionController>,
    pub logger: Arc<dyn Logger>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        // Infrastructure adapters. All gateways share one client so the
        // login cookie authenticates every later request.
        let client = StorefrontClient::new(
            config.storefront.base_url.clone(),
            config.storefront.timeout,
        );
        let auth_gateway = Arc::new(AuthGatewayStorefront::new(client.clone()));
        let catalog = Arc::new(ProductCatalogStorefront::new(client.clone()));
        let cart_gateway = Arc::new(CartGatewayStorefront::new(client.clone()));
        let history_gateway = Arc::new(HistoryGatewayStorefront::new(client.clone()));
        let store_gateway = Arc::new(StoreGatewayStorefront::new(client));
        let camera = Arc::new(ScannerCamera::new(
            config.camera.source.clone(),
            config.camera.allow_insecure_remote,
            logger.clone(),
        ));

        // Use cases
        let login = Arc::new(LoginUseCaseImpl {
            gateway: auth_gateway,
            logger: logger.clone(),
        });
        let resolve = Arc::new(ResolvePayloadUseCaseImpl {
            catalog,
            logger: logger.clone(),
        });
        let add_to_cart = Arc::new(AddCartLineUseCaseImpl {
            gateway: cart_gateway.clone(),
            logger: logger.clone(),
        });
        let get_cart = Arc::new(GetCartUseCaseImpl {
            gateway: cart_gateway.clone(),
            logger: logger.clone(),
        });
        let remove_from_cart = Arc::new(RemoveCartLineUseCaseImpl {
            gateway: cart_gateway.clone(),
            logger: logger.clone(),
        });
        let clear_cart = Arc::new(ClearCartUseCaseImpl {
            gateway: cart_gateway,
            logger: logger.clone(),
        });
        let get_history = Arc::new(GetScanHistoryUseCaseImpl {
            gateway: history_gateway,
            logger: logger.clone(),
        });
        let get_stores = Arc::new(GetStoresUseCaseImpl {
            gateway: store_gateway.clone(),
            logger: logger.clone(),
        });
        let browse_store = Arc::new(BrowseStoreUseCaseImpl {
            gateway: store_gateway,
            logger: logger.clone(),
        });

        let scan_session = Arc::new(ScanSessionController {
            camera,
            resolver: resolve.clone(),
            add_to_cart: add_to_cart.clone(),
            logger: logger.clone(),
        });

        Self {
            login,
            resolve,
            add_to_cart,
            get_cart,
            remove_from_cart,
            clear_cart,
            get_history,
            get_stores,
            browse_store,
            scan_session,
            logger,
        }
    }
}
