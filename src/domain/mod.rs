mod prompt_template;
mod service_info;

pub use prompt_template::{PromptTemplate, QUERY_VARIABLE, QUESTION_ANSWER_TEMPLATE, TemplateError};
pub use service_info::{SERVICE_DESCRIPTION, SERVICE_NAME, ServiceInfo};
