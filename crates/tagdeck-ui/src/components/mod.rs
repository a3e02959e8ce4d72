//! UI components for `Tagdeck`.

pub mod header;
pub mod player;
pub mod tag_filter;
pub mod video_form;
pub mod video_list;

pub use header::Header;
pub use player::Player;
pub use tag_filter::TagFilter;
pub use video_form::VideoForm;
pub use video_list::{VideoList, VideoRow};
