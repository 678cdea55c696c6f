use esgchart::{DateView, EsgScope};
use esgchart_demos::common::get_connector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let scope = EsgScope::builder()
        .with_connector(get_connector()?)
        .sample_tickers(["AAPL", "MSFT", "TSLA", "AMZN", "GOOGL", "ZZZZINVALID"])
        .build()?;

    println!("Looking up {} sample tickers...", scope.config().sample_tickers.len());
    let batch = scope.lookup_samples(DateView::SinceFloor).await;

    println!("\n{:<12} | {:<28} | {:>6} | {:>10}", "Ticker", "Peer group", "Rows", "Latest ESG");
    println!("{:-<13}|{:-<30}|{:-<8}|{:-<11}", "", "", "", "");
    for entry in &batch.entries {
        match &entry.result {
            Ok(r) => {
                let latest = r
                    .company
                    .rows()
                    .iter()
                    .rev()
                    .find_map(|row| row.esg_score)
                    .map_or_else(|| "-".to_string(), |v| format!("{v:.2}"));
                println!(
                    "{:<12} | {:<28} | {:>6} | {:>10}",
                    entry.ticker,
                    r.peer_group,
                    r.company.len(),
                    latest
                );
            }
            Err(e) => println!("{:<12} | {}", entry.ticker, e.user_message(&entry.ticker)),
        }
    }

    println!(
        "\n{} succeeded, {} without data",
        batch.successes().count(),
        batch.failures().count()
    );
    Ok(())
}
