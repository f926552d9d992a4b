mod client;
mod controller;
mod section;
mod sink;

pub use client::ServerFnClient;
pub use controller::{
    notify_all, ContactController, NotificationSink, SubmissionClient, SubmitOutcome,
};
pub use section::ContactMeSection;
pub use sink::ToastSink;
