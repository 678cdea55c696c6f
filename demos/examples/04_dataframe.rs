#[cfg(feature = "dataframe")]
use esgchart::{DateView, EsgScope, Ticker, ToDataFrame};
#[cfg(feature = "dataframe")]
use esgchart_demos::common::get_connector;

#[cfg(feature = "dataframe")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let scope = EsgScope::builder().with_connector(get_connector()?).build()?;
    let report = scope
        .lookup(&Ticker::new("AAPL")?, DateView::SinceFloor)
        .await?;

    let wide = report.company.to_dataframe()?;
    let long = report.long.to_dataframe()?;
    println!("company: {} rows x {} cols", wide.height(), wide.width());
    println!("long:    {} rows x {} cols", long.height(), long.width());
    println!("{long}");
    Ok(())
}

#[cfg(not(feature = "dataframe"))]
fn main() {
    eprintln!("This example requires the 'dataframe' feature. Skipping.");
}
