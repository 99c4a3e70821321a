//! # Calculator Sessions
//!
//! A session is the state behind one calculator page: the form input (seeded
//! with the calculator's defaults), the last validation report and the last
//! result. Sessions own their data outright and share nothing, so two pages
//! for the same calculator never see each other's state.
//!
//! ## Example
//!
//! ```rust
//! use creator_core::analytics::MemorySink;
//! use creator_core::calculations::break_even::BreakEven;
//! use creator_core::session::CalculatorSession;
//!
//! let sink = MemorySink::new();
//! let mut session = CalculatorSession::<BreakEven>::new();
//! session.input_mut().product_cost = 80.0;
//! session.input_mut().product_price = 50.0;
//!
//! assert!(session.submit(&sink).is_none());
//! assert!(session.report().has_error("product_cost"));
//! assert!(sink.is_empty());
//! ```

use crate::analytics::{emit, AnalyticsEvent, AnalyticsSink};
use crate::calculations::Calculator;
use crate::validation::ValidationReport;

/// Input, validation and result state for one calculator page.
pub struct CalculatorSession<C: Calculator> {
    input: C::Input,
    report: ValidationReport,
    result: Option<C::Output>,
}

impl<C: Calculator> Clone for CalculatorSession<C> {
    fn clone(&self) -> Self {
        CalculatorSession {
            input: self.input.clone(),
            report: self.report.clone(),
            result: self.result.clone(),
        }
    }
}

impl<C: Calculator> std::fmt::Debug for CalculatorSession<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalculatorSession")
            .field("calculator", &C::ID)
            .field("input", &self.input)
            .field("report", &self.report)
            .field("result", &self.result)
            .finish()
    }
}

impl<C: Calculator> Default for CalculatorSession<C> {
    fn default() -> Self {
        CalculatorSession::new()
    }
}

impl<C: Calculator> CalculatorSession<C> {
    /// Start a session with the seeded default input
    pub fn new() -> Self {
        CalculatorSession::with_input(C::Input::default())
    }

    pub fn with_input(input: C::Input) -> Self {
        CalculatorSession {
            input,
            report: ValidationReport::ok(),
            result: None,
        }
    }

    pub fn id(&self) -> &'static str {
        C::ID
    }

    pub fn input(&self) -> &C::Input {
        &self.input
    }

    /// Edit the form. The last result stays visible until the next submit.
    pub fn input_mut(&mut self) -> &mut C::Input {
        &mut self.input
    }

    pub fn set_input(&mut self, input: C::Input) {
        self.input = input;
    }

    /// Report from the last submit
    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    /// Result from the last valid submit
    pub fn result(&self) -> Option<&C::Output> {
        self.result.as_ref()
    }

    /// Validate and, when valid, calculate and report to `sink`.
    ///
    /// An invalid input stores the report and clears the previous result.
    /// Analytics failures are logged and never affect the returned result.
    pub fn submit(&mut self, sink: &dyn AnalyticsSink) -> Option<&C::Output> {
        self.report = C::validate(&self.input);
        if !self.report.valid {
            tracing::debug!(calculator = C::ID, errors = self.report.errors.len(), "submission rejected");
            self.result = None;
            return None;
        }

        let output = C::calculate(&self.input);
        match AnalyticsEvent::from_records(C::ID, &self.input, &output, C::TRACKED) {
            Ok(event) => emit(sink, &event),
            Err(e) => tracing::warn!(calculator = C::ID, error = %e, "analytics event not built"),
        }

        self.result = Some(output);
        self.result.as_ref()
    }

    /// Back to the seeded defaults with no report or result
    pub fn reset(&mut self) {
        *self = CalculatorSession::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{MemorySink, NoopSink};
    use crate::calculations::engagement_rate::{EngagementRate, EngagementRateInput};
    use crate::errors::{CalcError, CalcResult};
    use crate::tables::Rating;

    struct FailingSink;

    impl AnalyticsSink for FailingSink {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn track(&self, _event: &AnalyticsEvent) -> CalcResult<()> {
            Err(CalcError::sink("failing", "offline"))
        }
    }

    fn scenario_input() -> EngagementRateInput {
        EngagementRateInput {
            followers: 50_000.0,
            avg_likes: 2_500.0,
            avg_comments: 150.0,
            avg_shares: 100.0,
        }
    }

    #[test]
    fn test_new_session_seeded() {
        let session = CalculatorSession::<EngagementRate>::new();
        assert_eq!(session.input(), &EngagementRateInput::default());
        assert!(session.report().valid);
        assert!(session.result().is_none());
        assert_eq!(session.id(), "engagement-rate");
    }

    #[test]
    fn test_valid_submit_emits_event() {
        let sink = MemorySink::new();
        let mut session = CalculatorSession::<EngagementRate>::with_input(scenario_input());

        let result = session.submit(&sink).cloned().unwrap();
        assert_eq!(result.rate, 5.5);
        assert_eq!(result.rating, Rating::Good);

        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].calculator, "engagement-rate");
        assert_eq!(events[0].inputs["followers"], 50_000.0);
        assert_eq!(events[0].results["rating"], "good");
    }

    #[test]
    fn test_invalid_submit_clears_result() {
        let sink = MemorySink::new();
        let mut session = CalculatorSession::<EngagementRate>::with_input(scenario_input());
        assert!(session.submit(&sink).is_some());

        session.input_mut().followers = 0.0;
        assert!(session.submit(&sink).is_none());
        assert!(session.result().is_none());
        assert!(session.report().has_error("followers"));
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_failing_sink_does_not_affect_result() {
        let mut failing = CalculatorSession::<EngagementRate>::with_input(scenario_input());
        let mut quiet = CalculatorSession::<EngagementRate>::with_input(scenario_input());

        let a = failing.submit(&FailingSink).cloned();
        let b = quiet.submit(&NoopSink).cloned();
        assert!(a.is_some());
        assert_eq!(a, b);
    }

    #[test]
    fn test_sessions_are_isolated() {
        let mut first = CalculatorSession::<EngagementRate>::new();
        let second = CalculatorSession::<EngagementRate>::new();
        first.input_mut().followers = 123.0;
        assert_eq!(second.input().followers, EngagementRateInput::default().followers);
    }

    #[test]
    fn test_reset() {
        let mut session = CalculatorSession::<EngagementRate>::with_input(scenario_input());
        session.submit(&NoopSink);
        session.reset();
        assert!(session.result().is_none());
        assert_eq!(session.input(), &EngagementRateInput::default());
    }
}
