/// Installs a stdout tracing subscriber. Call once at process start; view
/// hosts that bring their own subscriber can skip this.
pub fn init() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .init();
}
