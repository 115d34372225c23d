//! Page components for Keepsake.

mod anniversary;
mod gate;
mod timeline;

pub use anniversary::AnniversaryPage;
pub use gate::GatePage;
pub use timeline::TimelinePage;
