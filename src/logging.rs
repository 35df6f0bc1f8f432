//! ログ設定（env_logger）

use log::LevelFilter;

/// ログビルダーを作る
///
/// `RUST_LOG` の指定を読み込んだあと、`--verbose` ならdebugに上げる。
pub fn logger_builder(verbose: bool, env_filter: Option<&str>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Warn);
    if let Some(filters) = env_filter {
        builder.parse_filters(filters);
    }
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder
}

/// グローバルロガーを設定
pub fn init(verbose: bool) {
    let env_filter = std::env::var(env_logger::DEFAULT_FILTER_ENV).ok();
    logger_builder(verbose, env_filter.as_deref()).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_is_warn() {
        assert_eq!(logger_builder(false, None).build().filter(), LevelFilter::Warn);
    }

    #[test]
    fn test_env_filter_applies_without_verbose() {
        assert_eq!(logger_builder(false, Some("error")).build().filter(), LevelFilter::Error);
    }

    #[test]
    fn test_verbose_overrides_env_filter() {
        assert_eq!(logger_builder(true, Some("error")).build().filter(), LevelFilter::Debug);
    }
}
