use tracing_subscriber::EnvFilter;

/// Default log directive when `RUST_LOG` is unset
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "rental_scout=debug,info"
    } else {
        "rental_scout=info"
    }
}

/// Initialize logging; `RUST_LOG` overrides the default filter
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_follows_verbosity() {
        assert_eq!(default_directive(false), "rental_scout=info");
        assert_eq!(default_directive(true), "rental_scout=debug,info");
        assert!(default_directive(true).parse::<EnvFilter>().is_ok());
    }
}
