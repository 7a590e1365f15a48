mod generation_chain;

pub use generation_chain::{ChainError, GenerationChain, GenerationOutcome};
