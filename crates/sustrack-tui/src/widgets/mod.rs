//! Custom widget components

mod activity_form;
mod header;
mod image_slot;
mod results;
mod topic_detail;
mod topic_grid;

pub use activity_form::{ActivityForm, SUBMIT_LABEL};
pub use header::MainHeader;
pub use image_slot::{image_line, ImageSlot};
pub use results::{ResultsPanel, ERROR_PREFIX};
pub use topic_detail::TopicDetail;
pub use topic_grid::TopicGrid;
