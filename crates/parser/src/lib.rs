pub mod expression;
pub mod parsers;

pub use expression::{assemble_expression, expand_schedule, resolve_field, split_tokens};
pub use parsers::{
    EnumerationParser, ExpressionParser, ParserRegistry, RangeParser, StepParser, ValueParser,
    WildcardParser,
};
