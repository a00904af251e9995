//! 소셜 서비스 백엔드 부트스트랩
//!
//! 환경 설정을 읽고 MongoDB에 연결해 인덱스를 준비한 뒤, 데이터 상태를 보고하고
//! 연결을 종료합니다. 배포 전 연결과 인덱스를 점검하는 용도로 사용합니다.

use log::{error, info};
use social_service_backend::config::DatabaseConfig;
use social_service_backend::core::context::AppContext;
use social_service_backend::core::errors::AppResult;
use social_service_backend::core::logging::init_environment;

#[tokio::main]
async fn main() {
    // 환경 설정 및 로깅 초기화
    init_environment();

    info!("🚀 소셜 서비스 백엔드 시작중...");

    if let Err(e) = run().await {
        error!("❌ 부트스트랩 실패: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let config = DatabaseConfig::from_env();
    info!("📡 데이터베이스 연결 중... ({})", config.database_name);

    let context = AppContext::bootstrap(&config).await?;
    info!("✅ MongoDB 연결 및 인덱스 준비 완료");

    let posts = context.post_service.get_posts().await?;
    info!("📝 저장된 게시글: {}개", posts.len());

    context.shutdown().await;

    Ok(())
}
