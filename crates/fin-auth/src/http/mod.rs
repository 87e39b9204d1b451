pub mod api_paths;
pub(crate) mod api_failure;
pub mod failure_classifier;
pub(crate) mod message_overrides;
pub(crate) mod navigator;
pub(crate) mod request_authenticator;
pub(crate) mod transport;

pub use api_failure::ApiFailure;
pub use failure_classifier::FailureClassifier;
pub use message_overrides::MessageOverrides;
pub use navigator::{Navigator, NoopNavigator};
pub use request_authenticator::{Credential, RequestAuthenticator};
pub use transport::ApiTransport;
