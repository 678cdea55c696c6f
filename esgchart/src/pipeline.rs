use esgchart_core::{DateView, EsgChart, EsgError, Ticker, normalize, reshape, reshape_since};

use crate::EsgScope;
use crate::report::{BatchEntry, BatchReport, EsgReport, Outcome};

impl EsgScope {
    /// Fetch the peer-group label and both score series for `ticker`.
    ///
    /// Connectors are tried in registration order, each bounded by the
    /// configured provider timeout. The first chart wins. When every connector
    /// reports `NotFound` the result is `NotFound`; otherwise the first
    /// non-`NotFound` failure is returned.
    ///
    /// # Errors
    /// `Unsupported` when no registered connector can serve ESG charts, or the
    /// connector error as described above.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "esgchart::fetch", skip(self), fields(ticker = %ticker))
    )]
    pub async fn fetch(&self, ticker: &Ticker) -> Result<EsgChart, EsgError> {
        let timeout = self.cfg.provider_timeout;
        let mut attempted = false;
        let mut first_failure: Option<EsgError> = None;

        for c in &self.connectors {
            let Some(provider) = c.as_esg_chart_provider() else {
                continue;
            };
            attempted = true;
            match Self::provider_call_with_timeout(c.name(), timeout, provider.esg_chart(ticker))
                .await
            {
                Ok(chart) => return Ok(chart),
                Err(e) if e.is_not_found() => {}
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(connector = c.name(), error = %e, "connector failed");
                    first_failure.get_or_insert(e);
                }
            }
        }

        if !attempted {
            return Err(EsgError::unsupported("esg_chart"));
        }
        Err(first_failure.unwrap_or_else(|| EsgError::not_found(format!("esg chart for {ticker}"))))
    }

    /// Run the whole pipeline for `ticker` and return display-ready tables.
    ///
    /// With [`DateView::SinceFloor`] every table keeps only rows on or after the
    /// configured date floor.
    ///
    /// # Errors
    /// Any fetch error. On error neither the Normalizer nor the Reshaper runs.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "esgchart::lookup", skip(self), fields(ticker = %ticker, view = ?view))
    )]
    pub async fn lookup(&self, ticker: &Ticker, view: DateView) -> Result<EsgReport, EsgError> {
        let chart = match self.fetch(ticker).await {
            Ok(chart) => chart,
            Err(e) => {
                #[cfg(feature = "tracing")]
                {
                    if e.is_not_found() {
                        tracing::warn!(ticker = %ticker, "no sustainability data");
                    } else {
                        tracing::warn!(ticker = %ticker, error = %e, "esg lookup failed");
                    }
                }
                return Err(e);
            }
        };
        Ok(self.build_report(chart, view))
    }

    fn build_report(&self, chart: EsgChart, view: DateView) -> EsgReport {
        let company = normalize(&chart.company);
        let peer = normalize(&chart.peer);

        let (company, peer, long) = match view {
            DateView::SinceFloor => {
                let cutoff = self.cfg.date_floor_instant();
                let long = reshape_since(&company, &peer, cutoff);
                (company.since(cutoff), peer.since(cutoff), long)
            }
            DateView::All => {
                let long = reshape(&company, &peer);
                (company, peer, long)
            }
        };

        EsgReport {
            ticker: chart.ticker,
            peer_group: chart.peer_group,
            company,
            peer,
            long,
            view,
        }
    }

    /// Interactive entry point: validate raw input, run the pipeline, and turn
    /// any failure into the user-facing "no data" outcome.
    ///
    /// No-coverage is a hard stop: the outcome never carries partial tables.
    pub async fn render_outcome(&self, ticker: &str, view: DateView) -> Outcome {
        let parsed = match Ticker::new(ticker) {
            Ok(t) => t,
            Err(e) => return Outcome::no_data(ticker, e),
        };
        match self.lookup(&parsed, view).await {
            Ok(report) => Outcome::Report(Box::new(report)),
            Err(e) => Outcome::no_data(ticker, e),
        }
    }

    /// Look up each configured sample ticker one after another.
    ///
    /// A failing ticker is recorded and the loop moves on.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "esgchart::lookup_samples",
            skip(self),
            fields(tickers = self.cfg.sample_tickers.len(), view = ?view),
        )
    )]
    pub async fn lookup_samples(&self, view: DateView) -> BatchReport {
        let mut entries = Vec::with_capacity(self.cfg.sample_tickers.len());
        for raw in &self.cfg.sample_tickers {
            let result = match Ticker::new(raw.as_str()) {
                Ok(t) => self.lookup(&t, view).await,
                Err(e) => Err(e),
            };
            entries.push(BatchEntry {
                ticker: raw.clone(),
                result,
            });
        }
        BatchReport { entries }
    }
}
