pub mod alert_status;
pub mod community;
pub mod sensor_status;
pub mod settings;
pub mod site_status;
pub mod trend;
pub mod user_role;

pub use alert_status::{AlertSeverity, AlertStatus, DispatchStatus};
pub use community::{Channel, ReportStatus, Severity, TaskPriority, TaskStatus};
pub use sensor_status::{GpsState, LinkState, Parameter, ReadingStatus, SensorStatus, SignalQuality};
pub use settings::{BacterialThreshold, SmsProvider, WeatherProvider};
pub use site_status::{RiskLevel, SiteStatus};
pub use trend::Trend;
pub use user_role::{UserRole, UserStatus};
