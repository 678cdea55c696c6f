use esgchart_core::{DateView, EsgError, LongTable, NormalizedTable, Ticker};

/// Display-ready result of one ticker lookup.
///
/// The company and peer tables feed tabular display; `long` feeds charts.
/// All three honour the [`DateView`] the lookup was made with.
#[derive(Debug, Clone, PartialEq)]
pub struct EsgReport {
    /// Ticker the report was built for.
    pub ticker: Ticker,
    /// Name of the industry cohort the ticker is benchmarked against.
    pub peer_group: String,
    /// Normalized company scores.
    pub company: NormalizedTable,
    /// Normalized peer-group scores.
    pub peer: NormalizedTable,
    /// Company and peer scores unpivoted by dimension, nulls dropped.
    pub long: LongTable,
    /// Slice of the time axis the tables cover.
    pub view: DateView,
}

impl EsgReport {
    /// Heading shown above the company table.
    #[must_use]
    pub fn company_heading(&self) -> String {
        format!("ESG Ratings for {}", self.ticker)
    }

    /// Heading shown above the peer-group table.
    #[must_use]
    pub fn peer_heading(&self) -> String {
        format!("ESG Ratings for {}", self.peer_group)
    }
}

/// What the rendering collaborator should show for one interactive lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The lookup succeeded.
    Report(Box<EsgReport>),
    /// The lookup stopped; nothing past the failing stage ran.
    NoData {
        /// The raw ticker input.
        ticker: String,
        /// User-facing text, e.g. `Data doesn't exist for ZZZZ`.
        message: String,
        /// Underlying cause, kept so callers can tell no-coverage from transport failures.
        error: EsgError,
    },
}

impl Outcome {
    pub(crate) fn no_data(ticker: &str, error: EsgError) -> Self {
        Self::NoData {
            ticker: ticker.to_string(),
            message: error.user_message(ticker),
            error,
        }
    }

    /// The report, when the lookup succeeded.
    #[must_use]
    pub fn report(&self) -> Option<&EsgReport> {
        match self {
            Self::Report(r) => Some(r),
            Self::NoData { .. } => None,
        }
    }

    /// The user-facing message, when the lookup stopped.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Report(_) => None,
            Self::NoData { message, .. } => Some(message),
        }
    }

    /// The underlying error, when the lookup stopped.
    #[must_use]
    pub const fn error(&self) -> Option<&EsgError> {
        match self {
            Self::Report(_) => None,
            Self::NoData { error, .. } => Some(error),
        }
    }
}

/// One sample ticker's result inside a [`BatchReport`].
#[derive(Debug, Clone, PartialEq)]
pub struct BatchEntry {
    /// Ticker as configured.
    pub ticker: String,
    /// Report or the error that stopped this ticker.
    pub result: Result<EsgReport, EsgError>,
}

/// Results of a sequential pass over the configured sample tickers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    /// One entry per sample ticker, in configured order.
    pub entries: Vec<BatchEntry>,
}

impl BatchReport {
    /// Number of tickers visited.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no tickers were configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Successful reports, in configured order.
    pub fn successes(&self) -> impl Iterator<Item = &EsgReport> {
        self.entries.iter().filter_map(|e| e.result.as_ref().ok())
    }

    /// `(ticker, error)` for every ticker that failed, in configured order.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &EsgError)> {
        self.entries
            .iter()
            .filter_map(|e| e.result.as_ref().err().map(|err| (e.ticker.as_str(), err)))
    }
}
