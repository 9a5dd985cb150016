use acme_dashboard_rust::{api, create_pool, AppConfig, DashboardService, InvoiceActions};
use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志 - 使用本地时间格式
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(true)
        .with_level(true)
        .init();

    // 加载 .env 与配置
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env();
    info!("Starting server with environment: {:?}", config.database.environment);

    // 创建数据库连接池 (惰性建连, 首次查询时拨号)
    let pool = create_pool(&config.database)?;
    info!("Database pool created");

    // 读写服务共享同一个池
    let dashboard = Arc::new(DashboardService::new(pool.clone()));
    let actions = Arc::new(InvoiceActions::new(pool));

    // 仪表盘读路由
    let dashboard_routes = Router::new()
        .route("/api/revenue", get(api::revenue))
        .route("/api/invoices", get(api::filtered_invoices))
        .route("/api/invoices/latest", get(api::latest_invoices))
        .route("/api/invoices/pages", get(api::invoices_pages))
        .route("/api/invoices/:id", get(api::invoice_by_id))
        .route("/api/customers", get(api::customers))
        .route("/api/customers/filtered", get(api::filtered_customers))
        .route("/api/dashboard/cards", get(api::card_data))
        .with_state(dashboard);

    // 发票写路由
    let action_routes = Router::new()
        .route("/api/invoices", post(api::create_invoice))
        .route(
            "/api/invoices/:id",
            put(api::update_invoice).delete(api::delete_invoice),
        )
        .with_state(actions);

    // 合并路由
    let app = Router::new()
        .route("/health", get(api::health_check))
        .merge(dashboard_routes)
        .merge(action_routes)
        .layer(ServiceBuilder::new());

    // 启动服务器
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Server listening on {}", addr);
    info!("API Endpoints:");
    info!("  GET    /api/revenue             - Monthly revenue");
    info!("  GET    /api/invoices            - Filtered invoices (query, page)");
    info!("  GET    /api/invoices/latest     - Latest 5 invoices");
    info!("  GET    /api/invoices/pages      - Total page count (query)");
    info!("  GET    /api/invoices/:id        - Invoice by id");
    info!("  POST   /api/invoices            - Create invoice (form)");
    info!("  PUT    /api/invoices/:id        - Update invoice (form)");
    info!("  DELETE /api/invoices/:id        - Delete invoice");
    info!("  GET    /api/customers           - All customers");
    info!("  GET    /api/customers/filtered  - Customers with totals (query)");
    info!("  GET    /api/dashboard/cards     - Card data");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
