use tracing::{debug, warn};

use crate::{
    model::CurrentConditions,
    provider::{FetchError, WeatherProvider},
};

/// What the renderer sees. Starts in `Loading`; every query change passes
/// through `Loading` again before settling in `Ready` or `Failed`.
#[derive(Debug, Default)]
pub enum ViewState {
    #[default]
    Loading,
    Ready(CurrentConditions),
    Failed(FetchError),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    /// Decoded conditions when the last fetch succeeded.
    pub fn conditions(&self) -> Option<&CurrentConditions> {
        match self {
            ViewState::Ready(conditions) => Some(conditions),
            _ => None,
        }
    }
}

/// View state plus a request generation counter.
///
/// Each query change stamps a new generation; a resolution carrying an older
/// stamp lost the race to a newer query and is discarded, so the state always
/// reflects the newest query regardless of network resolution order.
#[derive(Debug, Default)]
pub struct WeatherView {
    state: ViewState,
    generation: u64,
}

impl WeatherView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Stamp a new request generation and re-enter `Loading`.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.state = ViewState::Loading;
        self.generation
    }

    /// Install a fetch result. Returns false (leaving the state untouched)
    /// when `generation` is no longer the current one.
    pub fn resolve(
        &mut self,
        generation: u64,
        result: Result<CurrentConditions, FetchError>,
    ) -> bool {
        if generation != self.generation {
            debug!(generation, current = self.generation, "discarding superseded weather response");
            return false;
        }

        self.state = match result {
            Ok(conditions) => ViewState::Ready(conditions),
            Err(err) => {
                warn!(error = %err, "weather fetch failed");
                ViewState::Failed(err)
            }
        };

        true
    }

    /// The single transition entry point: run one fetch for `query` against
    /// `provider` and install the outcome. Returns the freshly decoded
    /// conditions on success, once per successful fetch.
    pub async fn on_query_changed(
        &mut self,
        provider: &dyn WeatherProvider,
        query: &str,
    ) -> Option<&CurrentConditions> {
        let generation = self.begin();
        let result = provider.current(query).await;

        if self.resolve(generation, result) {
            self.state.conditions()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_conditions;
    use async_trait::async_trait;
    use reqwest::StatusCode;

    fn failure() -> FetchError {
        FetchError::Status { status: StatusCode::INTERNAL_SERVER_ERROR, body: "boom".to_string() }
    }

    #[derive(Debug)]
    struct ScriptedProvider {
        fail: bool,
    }

    #[async_trait]
    impl WeatherProvider for ScriptedProvider {
        async fn current(&self, query: &str) -> Result<CurrentConditions, FetchError> {
            if self.fail { Err(failure()) } else { Ok(sample_conditions(query)) }
        }
    }

    #[test]
    fn starts_loading() {
        let view = WeatherView::new();
        assert!(view.state().is_loading());
    }

    #[test]
    fn resolve_installs_success_and_failure() {
        let mut view = WeatherView::new();

        let generation = view.begin();
        assert!(view.resolve(generation, Ok(sample_conditions("London"))));
        assert_eq!(view.state().conditions().unwrap().name, "London");

        let generation = view.begin();
        assert!(view.state().is_loading());
        assert!(view.resolve(generation, Err(failure())));
        assert!(matches!(view.state(), ViewState::Failed(_)));
        assert!(view.state().conditions().is_none());
    }

    #[test]
    fn late_resolution_of_superseded_query_is_discarded() {
        let mut view = WeatherView::new();

        let first = view.begin();
        let second = view.begin();

        // Newest query resolves first...
        assert!(view.resolve(second, Ok(sample_conditions("London"))));
        // ...then the superseded one trickles in and must not win.
        assert!(!view.resolve(first, Ok(sample_conditions("Paris"))));

        assert_eq!(view.state().conditions().unwrap().name, "London");
    }

    #[test]
    fn superseded_query_cannot_clobber_loading_state() {
        let mut view = WeatherView::new();

        let first = view.begin();
        let current = view.begin();

        assert!(!view.resolve(first, Ok(sample_conditions("Paris"))));
        assert!(view.state().is_loading());

        assert!(view.resolve(current, Err(failure())));
        assert!(matches!(view.state(), ViewState::Failed(_)));
    }

    #[tokio::test]
    async fn on_query_changed_returns_decoded_body_once() {
        let provider = ScriptedProvider { fail: false };
        let mut view = WeatherView::new();

        let conditions = view.on_query_changed(&provider, "London").await;
        assert_eq!(conditions.map(|c| c.name.as_str()), Some("London"));
        assert_eq!(view.state().conditions().unwrap().name, "London");
    }

    #[tokio::test]
    async fn on_query_changed_reports_nothing_on_failure() {
        let provider = ScriptedProvider { fail: true };
        let mut view = WeatherView::new();

        let conditions = view.on_query_changed(&provider, "London").await;
        assert!(conditions.is_none());
        assert!(matches!(view.state(), ViewState::Failed(_)));
    }
}
