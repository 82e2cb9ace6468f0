//! Plugin Registry

use crate::{FunctionPlugin, CommandPlugin, FunctionMeta, CommandMeta, ArgMeta};
use crate::SessionContext;
use convertor_core::{Value, ConvertorError};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;
use tracing::debug;

/// Central plugin registry
pub struct PluginRegistry {
    functions: HashMap<String, Arc<dyn FunctionPlugin>>,
    commands: HashMap<String, Arc<dyn CommandPlugin>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
            commands: HashMap::new(),
        }
    }

    pub fn with_function<F: FunctionPlugin + 'static>(mut self, f: F) -> Self {
        let name = f.meta().name.to_lowercase();
        self.functions.insert(name, Arc::new(f));
        self
    }

    pub fn with_command<C: CommandPlugin + 'static>(mut self, c: C) -> Self {
        let name = c.meta().name.to_lowercase();
        self.commands.insert(name, Arc::new(c));
        self
    }

    pub fn get_function(&self, name: &str) -> Option<&dyn FunctionPlugin> {
        self.functions.get(&name.to_lowercase()).map(|f| f.as_ref())
    }

    pub fn get_command(&self, name: &str) -> Option<&dyn CommandPlugin> {
        self.commands.get(&name.to_lowercase()).map(|c| c.as_ref())
    }

    pub fn call_function(&self, name: &str, args: &[Value], ctx: &SessionContext) -> Value {
        match self.get_function(name) {
            Some(f) => {
                debug!(function = name, args = args.len(), "calling function");
                f.call(args, ctx)
            }
            None => Value::Error(self.undefined(name)),
        }
    }

    pub fn execute_command(&self, name: &str, args: &[Value], ctx: &mut SessionContext) -> Value {
        match self.get_command(name) {
            Some(c) => {
                debug!(command = name, args = args.len(), "executing command");
                c.execute(args, ctx)
            }
            None => Value::Error(self.undefined(name)),
        }
    }

    /// Call whichever plugin answers to `name`, command first
    pub fn dispatch(&self, name: &str, args: &[Value], ctx: &mut SessionContext) -> Value {
        if self.get_command(name).is_some() {
            self.execute_command(name, args, ctx)
        } else {
            self.call_function(name, args, ctx)
        }
    }

    fn undefined(&self, name: &str) -> ConvertorError {
        let similar = self.find_similar(name);
        let mut err = ConvertorError::undefined_func(name);
        if !similar.is_empty() {
            let suggestions: Vec<&str> = similar.iter().take(5).map(|s| s.as_str()).collect();
            err = err.with_suggestion(format!(
                "Similar: {}. Use help() for full list.",
                suggestions.join(", ")
            ));
        }
        err
    }

    /// Plugin names similar to the given name (for error suggestions)
    fn find_similar(&self, name: &str) -> Vec<String> {
        let name_lower = name.to_lowercase();
        let mut matches: Vec<(String, usize)> = self.functions.keys()
            .chain(self.commands.keys())
            .filter_map(|candidate| {
                let score = Self::similarity_score(&name_lower, candidate);
                (score > 0).then(|| (candidate.clone(), score))
            })
            .collect();

        // Higher score first, then alphabetical
        matches.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        matches.into_iter().map(|(name, _)| name).collect()
    }

    fn similarity_score(query: &str, candidate: &str) -> usize {
        let mut score = 0;

        if candidate.starts_with(query) {
            score += 100;
        } else if candidate.contains(query) {
            score += 50;
        } else if query.contains(candidate) {
            score += 30;
        }

        // Shared characters
        let query_chars: HashSet<char> = query.chars().collect();
        let candidate_chars: HashSet<char> = candidate.chars().collect();
        let common = query_chars.intersection(&candidate_chars).count();
        score += common * 2;

        let len_diff = query.len().abs_diff(candidate.len());
        if len_diff < 5 && score > 0 {
            score += 5 - len_diff;
        }

        score
    }

    pub fn help(&self, name: Option<&str>) -> Value {
        match name {
            Some(n) => self.help_for(n),
            None => self.general_help(),
        }
    }

    fn help_for(&self, name: &str) -> Value {
        let name_lower = name.to_lowercase();

        if let Some(f) = self.functions.get(&name_lower) {
            return Value::Object(function_to_help(f.meta()));
        }
        if let Some(c) = self.commands.get(&name_lower) {
            return Value::Object(command_to_help(c.meta()));
        }

        Value::Error(self.undefined(name))
    }

    fn general_help(&self) -> Value {
        let mut help = HashMap::new();

        let mut funcs_by_cat: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (name, f) in &self.functions {
            let cat = f.meta().category.to_string();
            funcs_by_cat.entry(cat).or_default().push(name.clone());
        }
        help.insert("functions".to_string(),
            Value::Object(funcs_by_cat.into_iter()
                .map(|(k, mut v)| {
                    v.sort();
                    (k, Value::List(v.into_iter().map(Value::Text).collect()))
                })
                .collect()));

        help.insert("commands".to_string(),
            Value::List(self.command_names().into_iter().map(Value::from).collect()));

        help.insert("usage".to_string(),
            Value::Text("Call help('name') for detailed help.".to_string()));

        Value::Object(help)
    }

    /// Metadata of every function, sorted by name
    pub fn function_metas(&self) -> Vec<FunctionMeta> {
        let mut metas: Vec<FunctionMeta> = self.functions.values().map(|f| f.meta()).collect();
        metas.sort_by_key(|m| m.name);
        metas
    }

    /// Metadata of every command, sorted by name
    pub fn command_metas(&self) -> Vec<CommandMeta> {
        let mut metas: Vec<CommandMeta> = self.commands.values().map(|c| c.meta()).collect();
        metas.sort_by_key(|m| m.name);
        metas
    }

    pub fn command_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.commands.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn args_to_help(args: &[ArgMeta]) -> Value {
    Value::List(args.iter().map(|a| {
        let mut arg = HashMap::new();
        arg.insert("name".to_string(), Value::from(a.name));
        arg.insert("type".to_string(), Value::from(a.typ));
        arg.insert("description".to_string(), Value::from(a.description));
        arg.insert("optional".to_string(), Value::Bool(a.optional));
        Value::Object(arg)
    }).collect())
}

fn function_to_help(meta: FunctionMeta) -> HashMap<String, Value> {
    let mut help = HashMap::new();
    help.insert("name".to_string(), Value::from(meta.name));
    help.insert("type".to_string(), Value::from("function"));
    help.insert("description".to_string(), Value::from(meta.description));
    help.insert("usage".to_string(), Value::from(meta.usage));
    help.insert("returns".to_string(), Value::from(meta.returns));
    help.insert("category".to_string(), Value::from(meta.category));
    help.insert("args".to_string(), args_to_help(meta.args));
    help.insert("examples".to_string(), Value::List(
        meta.examples.iter().map(|e| Value::from(*e)).collect()
    ));
    help.insert("related".to_string(), Value::List(
        meta.related.iter().map(|r| Value::from(*r)).collect()
    ));
    help
}

fn command_to_help(meta: CommandMeta) -> HashMap<String, Value> {
    let mut help = HashMap::new();
    help.insert("name".to_string(), Value::from(meta.name));
    help.insert("type".to_string(), Value::from("command"));
    help.insert("description".to_string(), Value::from(meta.description));
    help.insert("args".to_string(), args_to_help(meta.args));
    help.insert("examples".to_string(), Value::List(
        meta.examples.iter().map(|e| Value::from(*e)).collect()
    ));
    help
}

#[cfg(test)]
mod tests {
    use super::*;
    use convertor_core::codes;

    struct Echo;

    static ECHO_ARGS: [ArgMeta; 1] = [ArgMeta::required("value", "Any", "Value to return")];

    impl FunctionPlugin for Echo {
        fn meta(&self) -> FunctionMeta {
            FunctionMeta {
                name: "echo",
                description: "Return the first argument",
                usage: "echo(value)",
                args: &ECHO_ARGS,
                returns: "Any",
                examples: &[],
                category: "test",
                related: &[],
            }
        }

        fn call(&self, args: &[Value], _ctx: &SessionContext) -> Value {
            args.first().cloned().unwrap_or(Value::Null)
        }
    }

    struct Forget;

    impl CommandPlugin for Forget {
        fn meta(&self) -> CommandMeta {
            CommandMeta { name: "forget", description: "Clear history", args: &[], examples: &[] }
        }

        fn execute(&self, _args: &[Value], ctx: &mut SessionContext) -> Value {
            ctx.session.clear_history();
            Value::Bool(true)
        }
    }

    fn registry() -> Arc<PluginRegistry> {
        Arc::new(PluginRegistry::new().with_function(Echo).with_command(Forget))
    }

    #[test]
    fn test_call_function_case_insensitive() {
        let reg = registry();
        let ctx = SessionContext::with_defaults(reg.clone());
        assert_eq!(reg.call_function("ECHO", &[Value::Number(2.0)], &ctx), Value::Number(2.0));
    }

    #[test]
    fn test_unknown_function_suggests_similar() {
        let reg = registry();
        let ctx = SessionContext::with_defaults(reg.clone());
        let result = reg.call_function("ech", &[], &ctx);

        let err = result.as_error().unwrap();
        assert_eq!(err.code, codes::UNDEFINED_FUNC);
        assert!(err.suggestion.as_deref().unwrap().starts_with("Similar: echo"));
    }

    #[test]
    fn test_dispatch_prefers_commands() {
        let reg = registry();
        let mut ctx = SessionContext::with_defaults(reg.clone());
        assert_eq!(reg.dispatch("forget", &[], &mut ctx), Value::Bool(true));
        assert_eq!(reg.dispatch("echo", &[Value::from("x")], &mut ctx), Value::from("x"));
    }

    #[test]
    fn test_help() {
        let reg = registry();
        let help = reg.help(Some("echo"));
        assert_eq!(help.get("usage"), Value::from("echo(value)"));

        let general = reg.help(None);
        assert_eq!(general.get("commands"), Value::List(vec![Value::from("forget")]));
        assert!(reg.help(Some("nothing")).is_error());
    }

    #[test]
    fn test_metas_sorted_by_name() {
        let reg = registry();
        assert_eq!(reg.function_metas()[0].name, "echo");
        assert_eq!(reg.command_metas()[0].name, "forget");
    }
}
