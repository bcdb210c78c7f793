pub mod debug;
mod favicon;

pub use self::favicon::Favicon;
pub use self::favicon::FaviconBuilder;
pub use self::favicon::Summary;
pub use self::favicon::ICON_SIZES;
