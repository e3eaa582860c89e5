//! Model records decoded from API responses.
//!
//! Only the fields the bundled endpoints need are typed; everything the API
//! may omit is an `Option`.

mod assignment;
pub use self::assignment::Assignment;

mod course;
pub use self::course::{Course, CourseTerm};

mod enrollment;
pub use self::enrollment::{Enrollment, Grades};

mod favorite;
pub use self::favorite::Favorite;

mod group;
pub use self::group::GroupMembership;

mod module;
pub use self::module::{CompletionRequirement, Module, ModuleItem};

mod progress;
pub use self::progress::Progress;

mod submission;
pub use self::submission::{Submission, SubmissionComment};

mod user;
pub use self::user::User;
