pub mod error_banner;
pub mod flash_banner;
pub mod loading_indicator;
pub mod step_indicator;

pub use error_banner::*;
pub use flash_banner::*;
pub use loading_indicator::*;
pub use step_indicator::*;
