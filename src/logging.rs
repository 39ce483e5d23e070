use tracing_subscriber::EnvFilter;

/// Environment variable holding the diagnostic filter, e.g. `debug` or `dircomparer=trace`.
pub const LOG_ENV: &str = "DIRCOMPARER_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Builds the filter, plus a note for stderr when `value` could not be parsed.
fn filter_from(value: Option<&str>) -> (EnvFilter, Option<String>) {
    let Some(v) = value else {
        return (EnvFilter::new(DEFAULT_FILTER), None);
    };
    match EnvFilter::try_new(v) {
        Ok(filter) => (filter, None),
        Err(err) => (
            EnvFilter::new(DEFAULT_FILTER),
            Some(format!(
                "warning: ignoring invalid {LOG_ENV}={v:?} ({err}), using \"{DEFAULT_FILTER}\""
            )),
        ),
    }
}

/// Installs a compact stderr subscriber. Stdout is left to the report.
pub fn init() {
    let value = std::env::var(LOG_ENV).ok();
    let (filter, note) = filter_from(value.as_deref());
    if let Some(note) = note {
        eprintln!("{note}");
    }
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .try_init();
}
