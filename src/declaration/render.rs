use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::extraction::ExportNames;

/// Suffix appended to the resource file name, whatever its own extension.
pub const DECLARATION_SUFFIX: &str = ".d.ts";

/// Name of the interface listing the exported class names.
pub const STYLE_INTERFACE: &str = "Style";

/// Default-exported constant typed with [`STYLE_INTERFACE`].
pub const STYLE_BINDING: &str = "esModuleStyle";

/// Default-exported binding of a module without class names.
pub const EMPTY_MODULE_BINDING: &str = "emptyCSSModule";

/// Line ending used for every line of a rendered declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// Host platform convention (`\r\n` on Windows, `\n` elsewhere).
    #[default]
    Auto,
    Lf,
    Crlf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Auto if cfg!(windows) => "\r\n",
            LineEnding::Auto | LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
        }
    }
}

/// Path of the declaration file for `resource`: same directory, with
/// [`DECLARATION_SUFFIX`] appended to the full file name.
///
/// `src/button.module.css` becomes `src/button.module.css.d.ts`.
pub fn declaration_path(resource: &Path) -> Result<PathBuf> {
    let file_name = resource
        .file_name()
        .with_context(|| format!("Resource path has no file name: {}", resource.display()))?;

    let mut name = file_name.to_os_string();
    name.push(DECLARATION_SUFFIX);
    Ok(resource.with_file_name(name))
}

/// Render the declaration file body for `names`.
///
/// Modules without any exportable name still get a default export, so that
/// `import * as styles` keeps type-checking against an empty module.
pub fn render_declaration(names: &ExportNames, line_ending: LineEnding) -> String {
    let eol = line_ending.as_str();

    if names.is_empty() {
        return format!(
            "declare let {EMPTY_MODULE_BINDING}: void;{eol}export default {EMPTY_MODULE_BINDING};{eol}"
        );
    }

    let fields: String = names
        .iter()
        .map(|name| format!("    {name}: string;{eol}"))
        .collect();

    format!(
        "interface {STYLE_INTERFACE}{eol}\
         {{{eol}\
         {fields}\
         }}{eol}\
         declare const {STYLE_BINDING}: {STYLE_INTERFACE};{eol}\
         export default {STYLE_BINDING};{eol}"
    )
}
