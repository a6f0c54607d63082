//! Connects background searches to the UI loop.
//!
//! Searches run on their own tokio tasks. They never touch [`App`] directly;
//! [`UiBridge`] forwards their status and render calls as [`Message`]s, and
//! the UI loop applies them in arrival order.
//!
//! [`App`]: super::App

use tokio::sync::mpsc;
use tracing::debug;

use crate::Result;
use crate::models::PriceSeriesResponse;
use crate::session::{PriceApi, PriceSessionController, WorkflowView};
use crate::view::StatusKind;

use super::event::Message;

/// [`WorkflowView`] that posts updates to the UI loop.
#[derive(Debug, Clone)]
pub struct UiBridge {
    tx: mpsc::UnboundedSender<Message>,
}

impl UiBridge {
    pub fn new(tx: mpsc::UnboundedSender<Message>) -> Self {
        Self { tx }
    }

    fn post(&self, message: Message) {
        if self.tx.send(message).is_err() {
            debug!("UI loop closed, dropping search update");
        }
    }
}

impl WorkflowView for UiBridge {
    fn set_status(&mut self, kind: StatusKind, message: &str) {
        self.post(Message::Status {
            kind,
            message: message.to_string(),
        });
    }

    fn render_series(&mut self, response: &PriceSeriesResponse) -> Result<()> {
        self.post(Message::Series(response.clone()));
        Ok(())
    }
}

/// Runs one search on a new task and reports completion to the UI loop.
///
/// Searches are not cancelled when a new one starts.
pub fn spawn_search<A>(api: A, tx: mpsc::UnboundedSender<Message>, raw_input: String)
where
    A: PriceApi + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let mut controller = PriceSessionController::new(api, UiBridge::new(tx.clone()));
        let outcome = controller.handle_search(&raw_input).await;
        let _ = tx.send(Message::SearchFinished {
            rendered: outcome.is_rendered(),
        });
    });
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::{OperationOutcome, PricePoint, ResponseStatus, TickerSymbol};
    use crate::tui::app::App;
    use crate::tui::event::update;

    struct FixedApi {
        outcome: OperationOutcome,
        series: PriceSeriesResponse,
    }

    impl PriceApi for FixedApi {
        async fn fetch_and_save(&self, _ticker: &TickerSymbol) -> Result<OperationOutcome> {
            Ok(self.outcome.clone())
        }

        async fn get_prices(&self, _ticker: &TickerSymbol) -> Result<PriceSeriesResponse> {
            Ok(self.series.clone())
        }
    }

    fn aapl_api() -> FixedApi {
        FixedApi {
            outcome: OperationOutcome {
                status: ResponseStatus::Success,
                ..Default::default()
            },
            series: PriceSeriesResponse {
                status: ResponseStatus::Success,
                ticker: "AAPL".to_string(),
                prices: vec![PricePoint {
                    date: "2024-01-02".to_string(),
                    close: Some(dec!(185.64)),
                    ..Default::default()
                }],
                ..Default::default()
            },
        }
    }

    /// Collects messages until every sender is gone.
    async fn drain(mut rx: mpsc::UnboundedReceiver<Message>) -> Vec<Message> {
        let mut messages = Vec::new();
        while let Some(message) = rx.recv().await {
            messages.push(message);
        }
        messages
    }

    #[tokio::test]
    async fn search_posts_messages_in_workflow_order() {
        let (tx, rx) = mpsc::unbounded_channel();
        spawn_search(aapl_api(), tx, " aapl".to_string());

        let messages = drain(rx).await;

        assert_eq!(messages.len(), 4, "{messages:?}");
        assert!(matches!(
            &messages[0],
            Message::Status { kind: StatusKind::Loading, .. }
        ));
        assert!(matches!(
            &messages[1],
            Message::Status { kind: StatusKind::Success, .. }
        ));
        assert!(matches!(&messages[2], Message::Series(s) if s.ticker == "AAPL"));
        assert!(matches!(
            messages[3],
            Message::SearchFinished { rendered: true }
        ));
    }

    #[tokio::test]
    async fn blank_search_finishes_unrendered() {
        let (tx, rx) = mpsc::unbounded_channel();
        spawn_search(aapl_api(), tx, "  ".to_string());

        let messages = drain(rx).await;

        assert_eq!(messages.len(), 2, "{messages:?}");
        assert!(matches!(
            &messages[0],
            Message::Status { kind: StatusKind::Warning, .. }
        ));
        assert!(matches!(
            messages[1],
            Message::SearchFinished { rendered: false }
        ));
    }

    #[tokio::test]
    async fn overlapping_searches_settle_on_one_chart() {
        let mut app = App::new("http://127.0.0.1:5000");
        app.searches_in_flight = 2;

        let (tx, rx) = mpsc::unbounded_channel();
        spawn_search(aapl_api(), tx.clone(), "AAPL".to_string());
        spawn_search(aapl_api(), tx, "AAPL".to_string());

        for message in drain(rx).await {
            assert!(update(&mut app, message).is_none());
        }

        assert!(!app.is_searching());
        let canvas = app.page.view.price_chart.as_ref().unwrap();
        assert_eq!(canvas.live().len(), 1);
        assert_eq!(canvas.destroyed_count(), 1);
        assert_eq!(app.page.view.rows().len(), 1);
    }
}
