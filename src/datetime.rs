/// Clock used for snapshot timestamps.
pub type Clock = chrono::Utc;


/// Type for all timestamps.
pub type Timestamp = chrono::DateTime::<Clock>;


/// Current moment according to [`Clock`].
pub fn now() -> Timestamp {
    Clock::now()
}
