use serde_json::Value;

use crate::domain::{Tool, Tooling};

/// Template-root file that lists the tools' npm scripts and packages.
pub const PACKAGE_JSON: &str = "package.json";

/// Drop the `scripts` and `devDependencies` entries of every declined tool.
///
/// Text with nothing to drop is returned unchanged. Otherwise the document is
/// re-serialized as two-space JSON with a trailing newline, keys in their
/// original order.
pub fn remove_declined_tools(text: &str, tooling: &Tooling) -> serde_json::Result<String> {
    let declined: Vec<Tool> =
        Tool::ALL.into_iter().filter(|tool| !tooling.enabled(*tool)).collect();
    if declined.is_empty() {
        return Ok(text.to_string());
    }

    let mut document: Value = serde_json::from_str(text)?;
    let mut removed = 0;
    for tool in declined {
        removed += remove_keys(&mut document, "scripts", tool.scripts());
        removed += remove_keys(&mut document, "devDependencies", tool.dev_dependencies());
    }
    if removed == 0 {
        return Ok(text.to_string());
    }

    let mut out = serde_json::to_string_pretty(&document)?;
    out.push('\n');
    Ok(out)
}

fn remove_keys(document: &mut Value, section: &str, keys: &[&str]) -> usize {
    let Some(entries) = document.get_mut(section).and_then(Value::as_object_mut) else {
        return 0;
    };
    keys.iter().filter(|key| entries.remove(**key).is_some()).count()
}
