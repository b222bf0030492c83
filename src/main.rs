use std::error::Error;
use std::sync::Arc;

use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ahp_siting::adapters::http::{cors_layer, router_from_ports, ApiPorts};
use ahp_siting::adapters::postgres::{
    PostgresAhpRepository, PostgresAlternativeRepository, PostgresCollectionRepository,
};
use ahp_siting::adapters::storage::FilePairwiseMatrixStore;
use ahp_siting::config::{AhpConfig, AppConfig, ServerConfig};
use ahp_siting::domain::ahp::{PairwiseMatrix, SubcriteriaPointMapper, CRITERIA_COUNT};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.server);

    let pool = config
        .database
        .pool_options()
        .connect(&config.database.url)
        .await?;
    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("Database migrations applied");
    }

    let matrix_store = Arc::new(FilePairwiseMatrixStore::new(&config.ahp.pairwise_matrix_path));
    if config.ahp.seed_default_matrix
        && matrix_store
            .seed_if_missing(&PairwiseMatrix::uniform(CRITERIA_COUNT))
            .await?
    {
        info!(path = %matrix_store.path().display(), "Seeded default pairwise matrix");
    }

    let ports = ApiPorts {
        collections: Arc::new(PostgresCollectionRepository::new(pool.clone())),
        alternatives: Arc::new(PostgresAlternativeRepository::new(pool.clone())),
        repository: Arc::new(PostgresAhpRepository::new(pool)),
        matrix_store,
        mapper: Arc::new(load_mapper(&config.ahp).await?),
    };

    let app = router_from_ports(ports)
        .layer(cors_layer(&config.server.cors_origins_list()))
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "Listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// `RUST_LOG` wins over `server.log_level`; JSON lines in production.
fn init_tracing(server: &ServerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    }
}

async fn load_mapper(config: &AhpConfig) -> Result<SubcriteriaPointMapper, Box<dyn Error>> {
    match &config.subcriteria_path {
        Some(path) => {
            let source = tokio::fs::read_to_string(path).await?;
            let mapper = SubcriteriaPointMapper::from_yaml(&source)?;
            info!(path = %path.display(), "Loaded subcriteria tables");
            Ok(mapper)
        }
        None => Ok(SubcriteriaPointMapper::reference()),
    }
}
