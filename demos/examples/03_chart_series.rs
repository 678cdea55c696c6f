use esgchart::{DateView, EsgScope, ScoreDimension, Ticker};
use esgchart_demos::common::{get_connector, ticker_arg};
use esgchart_demos::render::print_line;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let scope = EsgScope::builder().with_connector(get_connector()?).build()?;
    let ticker = Ticker::new(ticker_arg("TSLA"))?;

    let report = match scope.lookup(&ticker, DateView::All).await {
        Ok(r) => r,
        Err(e) => {
            println!("{}", e.user_message(ticker.as_str()));
            return Ok(());
        }
    };

    // One chart per dimension; missing scores are absent, never interpolated.
    for dimension in ScoreDimension::ALL {
        println!("\n[{}] {}", dimension.label(), report.company_heading());
        for line in report.long.chart_series(dimension) {
            print_line(&line);
        }
    }
    Ok(())
}
