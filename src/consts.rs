pub mod cli_consts {
    //! Console Configuration Constants
    //!
    //! This module contains all configuration constants for the monitoring
    //! console, organized by functional area.

    use std::time::Duration;

    // =============================================================================
    // POLLING CONFIGURATION
    // =============================================================================

    /// Interval between poll rounds. Each round refreshes status, logs, and
    /// service state in parallel.
    pub const POLL_INTERVAL_MS: u64 = 5_000;

    /// Helper function to get the poll interval as a duration.
    pub const fn poll_interval() -> Duration {
        Duration::from_millis(POLL_INTERVAL_MS)
    }

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// Connect timeout for admin endpoint requests (milliseconds).
    pub const HTTP_CONNECT_TIMEOUT_MS: u64 = 3_000;

    /// Total request timeout (milliseconds). Kept below the poll interval so
    /// in-flight requests cannot pile up across rounds.
    pub const HTTP_REQUEST_TIMEOUT_MS: u64 = 4_000;

    /// Helper function to get the connect timeout as a duration.
    pub const fn http_connect_timeout() -> Duration {
        Duration::from_millis(HTTP_CONNECT_TIMEOUT_MS)
    }

    /// Helper function to get the request timeout as a duration.
    pub const fn http_request_timeout() -> Duration {
        Duration::from_millis(HTTP_REQUEST_TIMEOUT_MS)
    }

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// Buffer size of the poll update channel between the poller and the UI.
    /// Three updates per round; sized for many rounds of slack.
    pub const EVENT_QUEUE_SIZE: usize = 100;
}
