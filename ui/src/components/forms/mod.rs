pub mod affiliation_step;
pub mod contact_step;
pub mod identity_step;
pub mod option_select;
pub mod wizard_controls;

pub use affiliation_step::*;
pub use contact_step::*;
pub use identity_step::*;
pub use option_select::*;
pub use wizard_controls::*;
