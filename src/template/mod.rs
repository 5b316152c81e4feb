mod evaluator;

pub use evaluator::{
    DEFAULT_NOT_FOUND, EvaluationOptions, Placeholder, evaluate, evaluate_properties,
    format_value, lookup, placeholders, render_template,
};
