//! `v-on` with an argument: `@click="handler"`, `@[event].stop="handler"`.
//!
//! The key is marked as a handler key so it never forces a batched update on
//! its own.

use crate::ast::{DirectiveNode, ElementNode, SimpleExpressionNode};
use crate::errors::{create_compiler_error, ErrorCode};
use crate::ir::DirectiveTransformResult;
use crate::shared::{camelize, capitalize, to_handler_key};
use crate::transforms::TransformContext;
use serde::Serialize;

/// `v-on` modifiers split by how the runtime applies them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EventModifiers {
    /// `addEventListener` options: `.passive`, `.once`, `.capture`.
    pub options: Vec<String>,
    /// Key guards, applied through `withKeys`.
    pub keys: Vec<String>,
    /// Other guards, applied through `withModifiers`.
    pub non_keys: Vec<String>,
}

fn is_event_option_modifier(modifier: &str) -> bool {
    matches!(modifier, "passive" | "once" | "capture")
}

fn is_non_key_modifier(modifier: &str) -> bool {
    matches!(
        modifier,
        "stop" | "prevent" | "self" | "ctrl" | "shift" | "alt" | "meta" | "exact" | "middle"
    )
}

fn maybe_key_modifier(modifier: &str) -> bool {
    matches!(modifier, "left" | "right")
}

fn is_keyboard_event(event: &str) -> bool {
    matches!(
        event.to_ascii_lowercase().as_str(),
        "keyup" | "keydown" | "keypress"
    )
}

/// Split raw modifiers. `event` is the static event name, `None` when the
/// argument is dynamic.
pub fn resolve_event_modifiers(event: Option<&str>, modifiers: &[String]) -> EventModifiers {
    let mut resolved = EventModifiers::default();

    for modifier in modifiers {
        if is_event_option_modifier(modifier) {
            resolved.options.push(modifier.clone());
        } else if maybe_key_modifier(modifier) {
            match event {
                Some(event) if is_keyboard_event(event) => resolved.keys.push(modifier.clone()),
                Some(_) => resolved.non_keys.push(modifier.clone()),
                None => {
                    resolved.keys.push(modifier.clone());
                    resolved.non_keys.push(modifier.clone());
                }
            }
        } else if is_non_key_modifier(modifier) {
            resolved.non_keys.push(modifier.clone());
        } else {
            resolved.keys.push(modifier.clone());
        }
    }

    resolved
}

fn string_array(values: &[String]) -> String {
    serde_json::to_string(values).unwrap_or_else(|_| "[]".to_string())
}

pub fn transform_v_on(
    dir: &DirectiveNode,
    _node: &ElementNode,
    context: &mut TransformContext,
) -> Option<DirectiveTransformResult> {
    let arg = dir.arg.as_ref()?;
    if dir.exp.is_none() && dir.modifiers.is_empty() {
        context.on_error(create_compiler_error(
            ErrorCode::VOnNoExpression,
            Some(dir.loc.clone()),
        ));
        return None;
    }

    let static_event = arg.is_static.then_some(arg.content.as_str());
    let EventModifiers {
        options,
        keys,
        non_keys,
    } = resolve_event_modifiers(static_event, &dir.modifiers);

    let option_suffix: String = options.iter().map(|m| capitalize(m)).collect();
    let key = match static_event {
        Some(event) => {
            let mut event = event.to_string();
            if event.eq_ignore_ascii_case("click") {
                if non_keys.iter().any(|m| m == "right") {
                    event = "contextmenu".to_string();
                } else if non_keys.iter().any(|m| m == "middle") {
                    event = "mouseup".to_string();
                }
            }
            let content = format!("{}{}", to_handler_key(&camelize(&event)), option_suffix);
            SimpleExpressionNode::new(content, true)
        }
        None => {
            let mut content = format!("{}({})", context.helper("toHandlerKey"), arg.content);
            if !option_suffix.is_empty() {
                content = format!("({}) + \"{}\"", content, option_suffix);
            }
            SimpleExpressionNode::new(content, false)
        }
    }
    .with_loc(arg.loc.clone())
    .handler_key();

    let mut handler = match &dir.exp {
        Some(exp) => exp.content.clone(),
        None => "() => {}".to_string(),
    };
    if !non_keys.is_empty() {
        handler = format!(
            "{}({}, {})",
            context.helper("withModifiers"),
            handler,
            string_array(&non_keys)
        );
    }
    let keyboard = match static_event {
        Some(event) => is_keyboard_event(event),
        None => true,
    };
    if !keys.is_empty() && keyboard {
        handler = format!(
            "{}({}, {})",
            context.helper("withKeys"),
            handler,
            string_array(&keys)
        );
    }

    let mut value = SimpleExpressionNode::new(handler, false);
    if let Some(exp) = &dir.exp {
        value = value.with_loc(exp.loc.clone());
    }

    Some(DirectiveTransformResult::new(key, value))
}
