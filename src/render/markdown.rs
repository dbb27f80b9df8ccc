//! GitHub-flavored markdown renderer.
//!
//! One document per artifact: a contract index at the top, then one section
//! per contract with constructor, methods, properties, and events.

use crate::menu;
use crate::model::*;
use crate::render::Renderer;
use anyhow::Result;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, docs: &DocAgnosticFormat) -> Result<String> {
        let mut output = String::new();

        if !docs.is_empty() {
            output.push_str(&menu::render_menu(docs));
            output.push('\n');
        }

        for (name, section) in docs {
            output.push_str(&render_section(name, section));
        }

        Ok(output)
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

fn render_section(name: &str, section: &DocSection) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("## {}\n", name));
    if !section.comment.is_empty() {
        lines.push(section.comment.clone());
        lines.push(String::new());
    }

    for ctor in &section.constructors {
        lines.push("### Constructor\n".to_string());
        lines.push(format!("`{}`\n", signature("", &ctor.name, &ctor.parameters)));
        if let Some(ref comment) = ctor.comment {
            lines.push(comment.clone());
            lines.push(String::new());
        }
        render_parameters(&mut lines, &ctor.parameters);
    }

    if !section.methods.is_empty() {
        lines.push("### Methods\n".to_string());
        for method in &section.methods {
            lines.push(format!("#### {}\n", method.name));
            lines.push(format!(
                "`{}`\n",
                signature(&method.call_path, &method.name, &method.parameters)
            ));
            if let Some(ref comment) = method.comment {
                lines.push(comment.clone());
                lines.push(String::new());
            }
            render_parameters(&mut lines, &method.parameters);
            if let Some(ref return_type) = method.return_type {
                let mut returns = format!("**Returns:** `{}`", return_type.name);
                if let Some(ref comment) = method.return_comment {
                    returns.push_str(&format!(": {}", comment));
                }
                lines.push(returns);
                lines.push(String::new());
            }
        }
    }

    if !section.properties.is_empty() {
        lines.push("### Properties\n".to_string());
        for property in &section.properties {
            let mut item = format!("* **{}** (`{}`)", property.name, property.type_ref.name);
            if let Some(ref comment) = property.comment {
                item.push_str(&format!(": {}", comment));
            }
            lines.push(item);
        }
        lines.push(String::new());
    }

    if !section.events.is_empty() {
        lines.push("### Events\n".to_string());
        for event in &section.events {
            lines.push(format!("#### {}\n", event.name));
            for arg in &event.event_args {
                let mut item = format!("* **{}** (`{}`)", arg.name, arg.type_ref.name);
                if arg.is_indexed {
                    item.push_str(" _indexed_");
                }
                lines.push(item);
            }
            lines.push(String::new());
        }
    }

    lines.join("\n")
}

/// Solidity-style invocation line, e.g. `token.transfer(address _to)`.
fn signature(call_path: &str, name: &str, parameters: &[ParamDoc]) -> String {
    let params: Vec<String> = parameters
        .iter()
        .map(|p| {
            if p.name.is_empty() {
                p.type_ref.name.clone()
            } else {
                format!("{} {}", p.type_ref.name, p.name)
            }
        })
        .collect();
    format!("{}{}({})", call_path, name, params.join(", "))
}

fn render_parameters(lines: &mut Vec<String>, parameters: &[ParamDoc]) {
    if parameters.is_empty() {
        return;
    }
    for param in parameters {
        let mut item = format!("* **{}** ({})", param.name, param.type_ref.name);
        if let Some(ref comment) = param.comment {
            item.push_str(&format!(": {}", comment));
        }
        lines.push(item);
    }
    lines.push(String::new());
}
