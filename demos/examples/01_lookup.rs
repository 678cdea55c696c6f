use esgchart::{DateView, EsgScope, Outcome};
use esgchart_demos::common::{get_connector, ticker_arg};
use esgchart_demos::render::{print_long_summary, print_report};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let scope = EsgScope::builder().with_connector(get_connector()?).build()?;

    // Usage: cargo run --example 01_lookup -- MSFT
    let ticker = ticker_arg("AAPL");

    for view in [DateView::SinceFloor, DateView::All] {
        println!("\n=== {ticker} ({view:?}) ===");
        match scope.render_outcome(&ticker, view).await {
            Outcome::Report(report) => {
                print_report(&report);
                print_long_summary(&report.long);
            }
            no_data => {
                println!("{}", no_data.message().unwrap_or_default());
                // hard stop: nothing else to render for this ticker
                break;
            }
        }
    }

    Ok(())
}
