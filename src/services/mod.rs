pub mod normalizer;
pub mod ranking;
pub mod fetch_service;
pub mod notification_service;
pub mod scheduler;

pub use fetch_service::NewsFetcher;
pub use notification_service::NotificationService;
pub use scheduler::DailySchedule;
