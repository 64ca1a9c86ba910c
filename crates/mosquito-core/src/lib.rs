pub mod constants;
pub mod login;
pub mod mapper;
pub mod settings;
pub mod store;
pub mod tone;
pub mod tracker;

pub use constants::*;
pub use login::*;
pub use mapper::*;
pub use settings::*;
pub use store::*;
pub use tone::*;
pub use tracker::*;
