//! # Data Sources
//!
//! MongoDB 컬렉션에 대한 원시 연산 계층입니다. 서비스는 trait 객체
//! (`Arc<dyn UserDataSource>`, `Arc<dyn PostDataSource>`)로만 데이터 소스를 사용합니다.
//!
//! ```text
//! datasources/
//! ├── users/   - UserDataSource + MongoUserDataSource
//! ├── posts/   - PostDataSource + MongoPostDataSource
//! └── memory   - InMemoryUserDataSource, InMemoryPostDataSource
//! ```

pub mod users;
pub mod posts;
pub mod memory;

pub use users::UserDataSource;
pub use posts::PostDataSource;
