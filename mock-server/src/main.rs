use mock_server::Credentials;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let defaults = Credentials::default();
    let credentials = Credentials {
        username: std::env::var("YAY_PARTNER_USERNAME").unwrap_or(defaults.username),
        password: std::env::var("YAY_PARTNER_PASSWORD").unwrap_or(defaults.password),
    };

    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, username = %credentials.username, "mock partner API listening");
    mock_server::run(listener, credentials).await
}
