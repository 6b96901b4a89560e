//! Service layer: business logic orchestration.
//!
//! [`SubmissionService`] validates public form submissions, appends them
//! to their [`RecordCollection`] and hands them to the
//! [`NotificationDispatcher`]. [`SiteContentService`] loads and replaces
//! the normalized site document, [`AdminGate`] checks the operator secret
//! and [`FeedClient`] serves recent social posts.

pub mod admin_gate;
pub mod export;
pub mod feed;
pub mod notifier;
pub mod record_collection;
pub mod site_content_service;
pub mod submission_service;

pub use admin_gate::AdminGate;
pub use export::CsvExport;
pub use feed::{FeedClient, FeedPost};
pub use notifier::{HttpEmailNotifier, NotificationDispatcher, Notifier, NotifyError};
pub use record_collection::RecordCollection;
pub use site_content_service::SiteContentService;
pub use submission_service::{BookingForm, Receipt, SignupForm, SubmissionService};
