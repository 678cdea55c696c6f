use esgchart::{DateView, EsgScope};
use esgchart_demos::common::get_connector;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,esgchart=trace,esgchart_yahoo=trace,esgchart::cache=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    // Create connector (mock in CI when ESGCHART_DEMOS_USE_MOCK is set) and build the scope
    let scope = EsgScope::builder().with_connector(get_connector()?).build()?;

    // One covered ticker, one without coverage
    let _ = scope.render_outcome("AAPL", DateView::All).await;
    let _ = scope.render_outcome("ZZZZINVALID", DateView::All).await;

    // Second lookup for the same ticker is served from the cache on the live path
    let _ = scope.render_outcome("AAPL", DateView::SinceFloor).await;

    tracing::info!("done");
    Ok(())
}
