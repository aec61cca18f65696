//! Artifact Rendering
//!
//! Renders the declarations and definitions artifacts from a metadata
//! snapshot and the build-identification tokens. Both renderers are pure
//! string producers; file comparison and writing live in `writer`.

use crate::stamp::types::{BuildMetadata, BuildTarget};

/// Marker line bounding the status block inside the `git_status` literal
pub const STATUS_MARKER: &str = "--- git status ---";

const GENERATED_NOTICE: &str = "/* Generated by gitstamp - do not edit */";

/// Render the include-guard-wrapped extern declarations.
///
/// Deterministic given the target tokens; the tokens only feed the guard
/// name, never a value, so metadata changes leave this artifact untouched.
pub fn render_declarations(target: &BuildTarget) -> String {
    let guard = target.include_guard();
    let mut out = String::new();
    out.push_str(GENERATED_NOTICE);
    out.push('\n');
    out.push_str(&format!("#ifndef {}\n#define {}\n\n", guard, guard));
    for symbol in [
        "board",
        "target",
        "git_commit",
        "git_branch",
        "git_describe",
        "git_status",
    ] {
        out.push_str(&format!("extern const char *{};\n", symbol));
    }
    out.push_str(&format!("\n#endif /* {} */\n", guard));
    out
}

/// Render the definitions artifact: two configuration existence assertions
/// followed by the six string definitions.
pub fn render_definitions(metadata: &BuildMetadata, target: &BuildTarget) -> String {
    let mut out = String::new();
    out.push_str(GENERATED_NOTICE);
    out.push('\n');
    out.push_str("#include \"version_data.h\"\n\n");

    // The assertions bind the artifact to one compiled configuration so a
    // stale copy cannot silently link into a different build.
    for (guard, token) in [
        (target.platform_guard(), target.platform()),
        (target.target_guard(), target.target()),
    ] {
        out.push_str(&format!(
            "#ifndef {}\n#error \"version data was stamped for '{}'\"\n#endif\n",
            guard, token
        ));
    }
    out.push('\n');

    for (symbol, value) in [
        ("board", target.platform()),
        ("target", target.target()),
        ("git_commit", metadata.commit_hash.as_str()),
        ("git_branch", metadata.branch_name.as_str()),
        ("git_describe", metadata.describe.as_str()),
    ] {
        out.push_str(&format!(
            "const char *{} = \"{}\";\n",
            symbol,
            escape_literal(value)
        ));
    }

    out.push_str("const char *git_status =\n");
    out.push_str(&format!("    \"{}\\r\\n\"\n", STATUS_MARKER));
    for line in &metadata.status_lines {
        out.push_str(&format!("    \"{}\\r\\n\"\n", escape_literal(line)));
    }
    out.push_str(&format!("    \"{}\\r\\n\";\n", STATUS_MARKER));
    out
}

/// Escape a value for embedding in a C string literal
pub(crate) fn escape_literal(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            c => escaped.push(c),
        }
    }
    escaped
}
