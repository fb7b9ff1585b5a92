//! Built-in extension→content stub table.
//!
//! A fixed lookup, not a templating system: the materializer asks once per
//! content-less file and writes whatever comes back verbatim.

use treeform_core::application::ports::StubTemplates;

/// Stub contents keyed by file extension.
const STUB_TABLE: &[(&str, &str)] = &[
    ("js", "// TODO: implement\n"),
    (
        "html",
        "<!DOCTYPE html>\n<html>\n<head>\n  <meta charset=\"UTF-8\">\n  <title>Document</title>\n</head>\n<body>\n  <h1>Hello, World!</h1>\n</body>\n</html>\n",
    ),
    ("css", "/* Styles */\n"),
    ("md", "# Documentation\n\nWrite the contents here.\n"),
    ("json", "{\n  \"name\": \"project\",\n  \"version\": \"1.0.0\"\n}\n"),
    ("ts", "// TypeScript module\n"),
    (
        "jsx",
        "import React from \"react\";\n\nfunction Component() {\n  return <div>Hello World</div>;\n}\n\nexport default Component;\n",
    ),
    (
        "tsx",
        "import React from \"react\";\n\nfunction Component(): JSX.Element {\n  return <div>Hello World</div>;\n}\n\nexport default Component;\n",
    ),
];

/// The table that ships with Treeform.
///
/// `README.md` is exempt: a readme is authored, never stubbed.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinStubs;

impl BuiltinStubs {
    pub fn new() -> Self {
        Self
    }
}

impl StubTemplates for BuiltinStubs {
    fn stub_for(&self, file_name: &str) -> Option<&str> {
        if file_name == "README.md" {
            return None;
        }
        let extension = file_name.rsplit_once('.')?.1;
        STUB_TABLE
            .iter()
            .find(|(ext, _)| *ext == extension)
            .map(|(_, content)| *content)
    }
}
