use querybar_backend_api::ResultItem;

/// The focus-bearing input surface the controller steers.
///
/// Modelled as an injected capability so the controller stays testable
/// without a real widget behind it.
pub trait FocusTarget {
    /// Give the input keyboard focus.
    fn focus(&mut self);
    /// Remove keyboard focus from the input.
    fn blur(&mut self);
    /// Select (highlight) the input text so the user can retype over it.
    fn select_all(&mut self);
}

/// Upward callbacks reported by the controller.
pub trait EventSink {
    /// Invoked exactly once per successful or explicitly failed commit.
    /// Explicit failures carry a single synthetic notice item.
    fn on_search_result(&mut self, items: Vec<ResultItem>);
    /// Invoked when the user clears the query.
    fn on_clear_result(&mut self);
}
