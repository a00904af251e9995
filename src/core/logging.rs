//! 로깅 초기화

use crate::config::load_env_file;

/// 기본 로그 필터. MongoDB 드라이버 로그는 경고 이상만 남깁니다.
pub const DEFAULT_LOG_FILTER: &str = "info,mongodb=warn";

const LOG_FILTER_ENV: &str = "RUST_LOG";

/// 환경 파일을 읽은 뒤 로깅을 초기화합니다.
///
/// `.env.dev`/`.env.prod`에 적은 `RUST_LOG`도 반영되도록 순서가 고정되어 있습니다.
pub fn init_environment() {
    load_env_file();
    init_logging();
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 `RUST_LOG`가 있으면 그 값을, 없으면 [`DEFAULT_LOG_FILTER`]를 사용합니다.
/// 이미 초기화되어 있으면 아무것도 하지 않습니다.
///
/// # Examples
///
/// ```bash
/// # 데이터 소스 로그만 debug
/// RUST_LOG=info,social_service_backend::datasources=debug cargo run
/// ```
pub fn init_logging() {
    let _ = env_logger::Builder::new()
        .parse_filters(&log_filter())
        .try_init();
}

fn log_filter() -> String {
    std::env::var(LOG_FILTER_ENV).unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice_does_not_panic() {
        init_logging();
        init_logging();
        log::info!("logging initialized");
    }

    #[test]
    fn test_log_filter_reads_value_loaded_from_env_file() {
        // 실행 환경에 이미 지정된 값은 dotenv가 덮어쓰지 않음
        if std::env::var_os(LOG_FILTER_ENV).is_some() {
            return;
        }

        let path = std::env::temp_dir().join(format!(".env.logging_test_{}", std::process::id()));
        std::fs::write(&path, "RUST_LOG=warn,social_service_backend=debug\n").unwrap();

        dotenv::from_filename(&path).unwrap();
        let filter = log_filter();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(filter, "warn,social_service_backend=debug");
    }
}
