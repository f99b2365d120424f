/// Domain types for Airwave
mod history;
mod ids;
mod track;

pub use history::HistoryRecord;
pub use ids::TrackId;
pub use track::TrackSummary;
