//! Progress notification port
//!
//! Defines the interface for reporting what the chat flow is waiting on.

/// Callback for progress updates during a chat turn
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, nothing).
pub trait ChatProgressNotifier: Send + Sync {
    /// Called right before the agent request is sent
    fn on_agent_request_start(&self);

    /// Called when the agent request finished, successfully or not
    fn on_agent_request_complete(&self, success: bool);

    /// Called before the catalog is fetched to populate the menu
    fn on_menu_fetch_start(&self) {}

    /// Called after a catalog fetch finished
    fn on_menu_fetch_complete(&self, _success: bool) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ChatProgressNotifier for NoProgress {
    fn on_agent_request_start(&self) {}
    fn on_agent_request_complete(&self, _success: bool) {}
}
