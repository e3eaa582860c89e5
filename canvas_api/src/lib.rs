//! Typed client for the Canvas LMS REST API.
//!
//! Every operation is a request struct implementing [`Endpoint`]: it knows its
//! verb and path template, encodes its query and form groups, validates
//! required and enum-constrained fields, and decodes the response into its
//! `Output`. A [`Transport`] (normally [`Client`]) carries the request.
//!
//! ```no_run
//! use canvas_api::{endpoints::ListYourCourses, Client};
//!
//! # async fn run() -> Result<(), canvas_api::Error> {
//! let client = Client::from_env()?;
//! let page = client
//!     .execute(&ListYourCourses::default().with_enrollment_type("teacher"))
//!     .await?;
//! let courses = page.collect_all(&client).await?;
//! # Ok(())
//! # }
//! ```

mod client;
pub mod config;
pub mod endpoint;
pub mod endpoints;
mod errors;
pub mod paging;
pub mod params;
pub mod response;
pub mod transport;
pub mod types;
pub mod validation;

pub use self::client::Client;
pub use self::config::ClientConfig;
pub use self::endpoint::{Body, Endpoint, HttpRequest, Target};
pub use self::errors::Error;
pub use self::paging::{PageLinks, Paged};
pub use self::params::Params;
pub use self::response::RawResponse;
pub use self::transport::Transport;
pub use self::validation::{FieldError, ValidationErrors, Violation};
