use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const QUIET_FILTER: &str = "hero_service=info";

/// Request/response lines from both transports plus the service log.
const VERBOSE_FILTER: &str = "info,hero_service=debug,\
hero_service::adapters::http=debug,\
hero_service::adapters::memory=debug";

pub fn filter_directives(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_FILTER
    } else {
        QUIET_FILTER
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directives(verbose)))
}

pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(verbose)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// JSON lines for log collectors; verbosity follows the same filter.
pub fn init_json_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .json()
                .with_current_span(false),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_filter_names_transport_targets() {
        let directives = filter_directives(true);
        assert!(directives.contains("hero_service::adapters::http=debug"));
        assert!(directives.contains("hero_service::adapters::memory=debug"));
        assert!(!filter_directives(false).contains("debug"));
    }

    #[test]
    fn test_filters_parse() {
        assert!(EnvFilter::try_new(filter_directives(true)).is_ok());
        assert!(EnvFilter::try_new(filter_directives(false)).is_ok());
    }
}
