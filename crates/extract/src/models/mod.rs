mod inspection;
mod metadata;
mod results;
mod summary;

pub use self::inspection::Inspection;
pub use self::metadata::Metadata;
pub use self::results::Results;
pub use self::summary::ScoreSummary;
