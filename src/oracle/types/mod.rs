//! Types for oracle operations.

mod request;
mod response;

pub use request::{
    AskRequest, ProvideAnswerRequest, ResolverRequest, SetFeeRecipientRequest, SetFeeRequest,
};
pub use response::{Answer, AnswerRecord, Question};

pub use crate::types::{QuestionType, RoleRequest};
