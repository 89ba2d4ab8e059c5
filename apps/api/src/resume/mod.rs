// Resume optimization: a stateless prompt → completion → raw-text pipeline,
// plus the PDF text-extraction helper the resume form uploads into.

pub mod handlers;
pub mod prompts;
