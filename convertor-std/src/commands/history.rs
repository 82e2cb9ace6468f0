//! history and clear_history

use convertor_plugin::prelude::*;
use crate::functions::args::expect_args;
use crate::values::history_value;

pub struct History;

static HISTORY_EXAMPLES: [&str; 1] = [
    "history() → [{timestamp: \"2024-05-01 09:30:00\", summary: \"5 Kilometers → 3.1 Miles\", ...}]",
];

impl CommandPlugin for History {
    fn meta(&self) -> CommandMeta {
        CommandMeta {
            name: "history",
            description: "The last ten recorded conversions, newest first",
            args: &[],
            examples: &HISTORY_EXAMPLES,
        }
    }

    fn execute(&self, args: &[Value], ctx: &mut SessionContext) -> Value {
        if let Err(e) = expect_args("history", args, 0) {
            return Value::Error(e);
        }
        Value::List(ctx.session.history().iter().map(history_value).collect())
    }
}

pub struct ClearHistory;

impl CommandPlugin for ClearHistory {
    fn meta(&self) -> CommandMeta {
        CommandMeta {
            name: "clear_history",
            description: "Forget every recorded conversion; returns how many were dropped",
            args: &[],
            examples: &["clear_history() → 3"],
        }
    }

    fn execute(&self, args: &[Value], ctx: &mut SessionContext) -> Value {
        if let Err(e) = expect_args("clear_history", args, 0) {
            return Value::Error(e);
        }
        let dropped = ctx.session.history().len();
        ctx.session.clear_history();
        Value::Number(dropped as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use convertor_session::ConversionRequest;

    #[test]
    fn test_history_newest_first() {
        let mut ctx = SessionContext::with_defaults(Arc::new(PluginRegistry::new()));
        ctx.session.convert(&ConversionRequest::new(5.0, "kilometers", "miles")).unwrap();
        ctx.session.convert(&ConversionRequest::new(1.0, "days", "hours")).unwrap();

        let history = History.execute(&[], &mut ctx);
        let entries = history.as_list().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].get("from_unit"), Value::from("days"));
        assert_eq!(entries[1].get("summary"), Value::from("5 Kilometers → 3.1 Miles"));
    }

    #[test]
    fn test_clear_history() {
        let mut ctx = SessionContext::with_defaults(Arc::new(PluginRegistry::new()));
        ctx.session.convert(&ConversionRequest::new(1.0, "days", "hours")).unwrap();

        assert_eq!(ClearHistory.execute(&[], &mut ctx), Value::Number(1.0));
        assert_eq!(History.execute(&[], &mut ctx), Value::List(vec![]));
    }
}
