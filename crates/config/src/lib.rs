mod config;
mod feeds;
mod integrations;
mod overlay;
mod site;

pub mod path;

pub use self::config::*;
pub use self::feeds::*;
pub use self::integrations::*;
pub use self::overlay::*;
pub use self::site::*;

type Status = status::Status;
type Result<T, E = Status> = std::result::Result<T, E>;
