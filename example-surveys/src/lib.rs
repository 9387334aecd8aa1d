//! Sample surveys and response sets shared by the workspace's tests.

pub mod course_feedback;
pub mod pizza_poll;

pub use course_feedback::CourseFeedback;
pub use pizza_poll::PizzaPoll;
