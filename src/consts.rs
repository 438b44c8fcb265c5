pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! All timing and buffering knobs for the dashboard, organized by
    //! functional area.

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Buffer size of the poller-to-UI update channel.
    pub const UPDATE_QUEUE_SIZE: usize = 100;

    /// Live data polling configuration
    pub mod polling {
        use std::time::Duration;

        /// Interval between poll cycles (milliseconds). The backend refreshes
        /// its status file on roughly the same cadence.
        pub const POLL_INTERVAL_MS: u64 = 10_000;

        /// Helper function to get the poll interval
        pub const fn poll_interval() -> Duration {
            Duration::from_millis(POLL_INTERVAL_MS)
        }
    }

    /// HTTP client configuration
    pub mod http {
        use std::time::Duration;

        /// Connect and request timeout (seconds). No retry beyond the next
        /// scheduled poll cycle.
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        /// Helper function to get the request timeout
        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }
}
