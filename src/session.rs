//! The search workflow: validate, collect, interpret, load, render.
//!
//! [`PriceSessionController`] drives one search per [`handle_search`] call
//! against two injected collaborators: a [`PriceApi`] for the network and a
//! [`WorkflowView`] for status and rendering. Every failure is caught inside
//! the workflow and surfaced as a status message; nothing propagates to the
//! caller except the returned [`SearchOutcome`].
//!
//! [`handle_search`]: PriceSessionController::handle_search

use std::future::Future;

use tracing::{debug, error, info, warn};

use crate::models::{
    OperationOutcome, PriceSeriesResponse, ResponseStatus, TickerSymbol, message_or,
};
use crate::view::StatusKind;
use crate::{PricedeskError, Result};

pub const MSG_ENTER_TICKER: &str = "Please enter a ticker.";
pub const MSG_COLLECTING: &str = "Collecting market data and saving to the database...";
pub const MSG_COLLECT_FAILED: &str = "Failed to collect data.";
pub const MSG_NO_DATA: &str = "No data found.";
pub const MSG_COLLECTED: &str = "Data collected successfully.";
pub const MSG_LOAD_FAILED: &str = "Failed to load data from the database.";

/// Backend operations the workflow depends on.
pub trait PriceApi {
    /// Collects fresh prices for `ticker` and persists them.
    fn fetch_and_save(
        &self,
        ticker: &TickerSymbol,
    ) -> impl Future<Output = Result<OperationOutcome>> + Send;

    /// Reads the persisted series for `ticker`.
    fn get_prices(
        &self,
        ticker: &TickerSymbol,
    ) -> impl Future<Output = Result<PriceSeriesResponse>> + Send;
}

/// Where the workflow reports progress and results.
pub trait WorkflowView {
    /// Replaces the status message; an empty message hides it.
    fn set_status(&mut self, kind: StatusKind, message: &str);

    /// Displays a successfully loaded series.
    fn render_series(&mut self, response: &PriceSeriesResponse) -> Result<()>;
}

/// Workflow states, in the order a successful search visits them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WorkflowState {
    #[default]
    Idle,
    Validating,
    Collecting,
    Interpreting,
    LoadingSeries,
    Rendering,
    Done,
    Failed,
}

/// Terminal result of one search.
#[derive(Debug)]
pub enum SearchOutcome {
    Rendered { ticker: TickerSymbol, points: usize },
    Failed(PricedeskError),
}

impl SearchOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, SearchOutcome::Rendered { .. })
    }
}

/// Runs searches against injected network and view collaborators.
pub struct PriceSessionController<A, V> {
    api: A,
    view: V,
    state: WorkflowState,
}

impl<A, V> PriceSessionController<A, V>
where
    A: PriceApi,
    V: WorkflowView,
{
    pub fn new(api: A, view: V) -> Self {
        Self {
            api,
            view,
            state: WorkflowState::Idle,
        }
    }

    /// Current (or, after a search, terminal) state.
    pub fn state(&self) -> WorkflowState {
        self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Consumes the controller and returns its view.
    pub fn into_view(self) -> V {
        self.view
    }

    /// Runs one search for the raw user input.
    pub async fn handle_search(&mut self, raw_input: &str) -> SearchOutcome {
        match self.run(raw_input).await {
            Ok((ticker, points)) => {
                self.transition(WorkflowState::Done);
                info!(%ticker, points, "search complete");
                SearchOutcome::Rendered { ticker, points }
            }
            Err(err) => {
                self.transition(WorkflowState::Failed);
                self.report_failure(&err);
                SearchOutcome::Failed(err)
            }
        }
    }

    async fn run(&mut self, raw_input: &str) -> Result<(TickerSymbol, usize)> {
        self.transition(WorkflowState::Validating);
        let ticker = TickerSymbol::parse(raw_input)?;

        self.transition(WorkflowState::Collecting);
        self.view.set_status(StatusKind::Loading, MSG_COLLECTING);
        let outcome = self.api.fetch_and_save(&ticker).await?;

        self.transition(WorkflowState::Interpreting);
        self.interpret_collection(&ticker, &outcome)?;

        self.transition(WorkflowState::LoadingSeries);
        let series = self.api.get_prices(&ticker).await?;
        if series.status != ResponseStatus::Success {
            return Err(PricedeskError::Application(message_or(
                series.message.as_deref(),
                MSG_LOAD_FAILED,
            )));
        }

        self.transition(WorkflowState::Rendering);
        self.view.render_series(&series)?;
        Ok((ticker, series.prices.len()))
    }

    /// Presents the collect-and-persist result. Only `error` stops the search.
    fn interpret_collection(
        &mut self,
        ticker: &TickerSymbol,
        outcome: &OperationOutcome,
    ) -> Result<()> {
        let message = outcome.message.as_deref();
        debug!(
            %ticker,
            status = outcome.status.as_str(),
            inserted = ?outcome.inserted,
            skipped = ?outcome.skipped,
            "collect-and-persist finished"
        );

        match outcome.status {
            ResponseStatus::Error => {
                if let Some(detail) = &outcome.detail {
                    warn!(%ticker, detail = detail.as_str(), "backend collection error");
                }
                Err(PricedeskError::Application(message_or(
                    message,
                    MSG_COLLECT_FAILED,
                )))
            }
            ResponseStatus::Warning => {
                self.view
                    .set_status(StatusKind::Warning, &message_or(message, MSG_NO_DATA));
                Ok(())
            }
            ResponseStatus::Success | ResponseStatus::Unknown => {
                self.view
                    .set_status(StatusKind::Success, &message_or(message, MSG_COLLECTED));
                Ok(())
            }
        }
    }

    fn report_failure(&mut self, err: &PricedeskError) {
        match err {
            PricedeskError::Validation => {
                self.view.set_status(StatusKind::Warning, MSG_ENTER_TICKER);
            }
            PricedeskError::Application(message) => {
                self.view.set_status(StatusKind::Error, message);
            }
            PricedeskError::UiBinding(surface) => {
                error!(surface, "search aborted, UI surface missing");
            }
            other => {
                error!(error = %other, "search failed");
                self.view
                    .set_status(StatusKind::Error, &format!("Failed to load data: {other}"));
            }
        }
    }

    fn transition(&mut self, next: WorkflowState) {
        debug!(from = ?self.state, to = ?next, "workflow transition");
        self.state = next;
    }
}
