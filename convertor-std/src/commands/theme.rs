//! set_theme

use convertor_plugin::prelude::*;
use convertor_session::Theme;
use crate::functions::args::text_arg;

pub struct SetTheme;

static SET_THEME_ARGS: [ArgMeta; 1] = [
    ArgMeta::optional("theme", "Text", "\"dark\" or \"light\"", "toggle"),
];

static SET_THEME_EXAMPLES: [&str; 2] = [
    "set_theme(\"light\") → \"light\"",
    "set_theme() → switches between dark and light",
];

impl CommandPlugin for SetTheme {
    fn meta(&self) -> CommandMeta {
        CommandMeta {
            name: "set_theme",
            description: "Set the session theme used for charts; without an argument, toggle it",
            args: &SET_THEME_ARGS,
            examples: &SET_THEME_EXAMPLES,
        }
    }

    fn execute(&self, args: &[Value], ctx: &mut SessionContext) -> Value {
        let theme = match args.len() {
            0 => ctx.session.theme().toggled(),
            1 => {
                let name = match text_arg("set_theme", args, 0, "theme") {
                    Ok(s) => s,
                    Err(e) => return Value::Error(e),
                };
                match Theme::parse(name) {
                    Some(theme) => theme,
                    None => return Value::Error(
                        ConvertorError::invalid_input(format!("unknown theme '{}'", name))
                            .with_suggestion("Use \"dark\" or \"light\"")
                    ),
                }
            }
            n => return Value::Error(ConvertorError::arg_count("set_theme", 1, n)),
        };

        ctx.session.set_theme(theme);
        Value::from(theme.id())
    }
}
