//! One page per step of the flow.

mod celebration;
mod choice;
mod greeting;
mod question;
mod reasons;

pub use celebration::CelebrationPage;
pub use choice::ChoicePage;
pub use greeting::GreetingPage;
pub use question::QuestionPage;
pub use reasons::ReasonsPage;
