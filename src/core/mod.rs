pub mod dialogue;
pub mod pipeline;
pub mod renderer;
pub mod selector;
pub mod template;
