pub mod dashboard;
pub mod login;
pub mod profile;
pub mod resources;
pub mod unauthorized;

pub use dashboard::*;
pub use login::*;
pub use profile::*;
pub use resources::*;
pub use unauthorized::*;
