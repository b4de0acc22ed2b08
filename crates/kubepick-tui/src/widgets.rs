mod context_selector;

pub use context_selector::ContextSelectorWidget;
