mod classifier_adapter;
mod feature_validator;
mod request_dispatcher;
mod rule_based_responder;

pub use classifier_adapter::{ClassificationError, ClassifierAdapter};
pub use feature_validator::{ValidationError, validate_features};
pub use request_dispatcher::{DispatchError, Outcome, RequestDispatcher, SpeechAdvice};
pub use rule_based_responder::{GENERIC_REPLIES, RuleBasedResponder, TOPIC_REPLIES};
