pub mod analysis;
pub mod charts;
pub mod company;
pub mod dashboard;
pub mod init;

pub use analysis::{present_analysis, present_confidence, present_sentiment};
pub use charts::present_charts;
pub use company::{present_companies, present_company_option};
pub use dashboard::present_dashboard;
pub use init::present_init;
